// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Contiguous growable array over a pluggable allocator.
//!
//! [`DynamicArray<T, A>`] owns one buffer split into live elements and spare
//! capacity. Storage comes from an injected [`Allocator`](vessel_alloc::Allocator)
//! ([`SystemAllocator`](vessel_alloc::SystemAllocator) by default), and every
//! element is constructed and destroyed through it.
//!
//! # Core Guarantees
//!
//! - **Fallible growth**: anything that may allocate or construct returns
//!   `Result<_, ArrayError>` instead of aborting.
//! - **Local rollback**: a batch that fails midway destroys what it already
//!   constructed before the error propagates; nothing leaks and nothing is
//!   destroyed twice.
//! - **Strong `reserve`**: `reserve`, `shrink_to_fit` and `try_clone_from`
//!   leave the array untouched on failure.
//! - **Amortized `O(1)` appends**: implicit growth doubles the capacity.
//!
//! # Example
//!
//! ```rust
//! use vessel_array::{ArrayError, DynamicArray};
//!
//! fn example() -> Result<(), ArrayError> {
//!     let mut array = DynamicArray::try_from_slice(&[1, 2, 3, 4, 5])?;
//!
//!     array.erase_range(1..3);
//!     array.insert(1, 2, &9)?;
//!     assert_eq!(array, [1, 9, 9, 4, 5]);
//!
//!     array.pop_back();
//!     array.pop_back();
//!     assert_eq!(array, [1, 9, 9]);
//!
//!     let capacity = array.capacity();
//!     array.clear();
//!     assert!(array.is_empty());
//!     assert_eq!(array.capacity(), capacity);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Iterator Invalidation
//!
//! Every structural change takes `&mut self`, so no borrowed iterator or
//! reference can outlive it. Positions are plain `usize` indices; after an
//! `insert`/`erase` at `i`, indices below `i` still address the same
//! elements.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod array;
mod capacity;
mod construct;
mod error;
mod growth;
mod mutators;
mod raw;

pub use array::DynamicArray;
pub use error::ArrayError;
pub use mutators::swap;
