// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Allocation capability consumed by vessel containers.
//!
//! A container never talks to the memory subsystem directly. It goes through an
//! [`Allocator`], which hands out raw storage for `n` values, takes it back, and
//! constructs or destroys single values in place.
//!
//! # Core Types
//!
//! - [`Allocator`]: the capability (allocate / deallocate / construct / destroy)
//! - [`SystemAllocator`]: stateless implementation backed by the global allocator
//! - [`AllocError`] / [`ConstructError`]: the two failure signals
//!
//! # Example
//!
//! ```rust
//! use vessel_alloc::{AllocError, Allocator, SystemAllocator};
//!
//! fn example() -> Result<(), AllocError> {
//!     let alloc = SystemAllocator;
//!     let slots = alloc.allocate::<u64>(4)?;
//!
//!     unsafe {
//!         alloc.construct(slots, 42u64).expect("SystemAllocator never refuses");
//!         assert_eq!(*slots.as_ptr(), 42);
//!         alloc.destroy(slots);
//!         alloc.deallocate(slots, 4);
//!     }
//!
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test-utils` feature to get [`support::test_utils::MockAllocator`],
//! which counts every call and can be told to fail a specific allocation or
//! construction:
//!
//! ```toml
//! [dev-dependencies]
//! vessel-alloc = { version = "*", features = ["test-utils"] }
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod system;
mod traits;

pub mod support;

pub use error::{AllocError, ConstructError};
pub use system::SystemAllocator;
pub use traits::{Allocator, array_layout};
