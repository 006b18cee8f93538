// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Allocator-aware growable arrays with explicit failure handling.</em></p>
//!
//! ---
//!
//! Vessel provides [`DynamicArray`], a contiguous growable array whose storage
//! and element lifetimes go through a pluggable [`Allocator`].
//!
//! # Features
//!
//! - **Fallible by default**: every operation that may allocate returns a
//!   `Result` instead of aborting
//! - **Pluggable allocation**: storage, construction and destruction are routed
//!   through one capability, with a system default
//! - **No leaks on failure**: partial work is rolled back when an allocation,
//!   a construction or a clone fails
//! - **`no_std` compatible**: only `core` and `alloc` are required
//!
//! # Installation
//!
//! ```toml
//! [dependencies]
//! vessel = "0.1.0-rc.1"
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use vessel::{ArrayError, DynamicArray};
//!
//! fn main() -> Result<(), ArrayError> {
//!     let mut array = DynamicArray::new();
//!     for i in 1..=5 {
//!         array.push_back(i)?;
//!     }
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
//!     assert_eq!(array.capacity(), capacity);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Custom allocators
//!
//! Implement [`Allocator`] to control where storage comes from and how values
//! are placed into it. A borrowed allocator is an allocator too, so one
//! instance can back several arrays:
//!
//! ```rust
//! use vessel::DynamicArray;
//! use vessel::alloc::SystemAllocator;
//!
//! let system = SystemAllocator;
//! let mut a = DynamicArray::new_in(&system);
//! let mut b = DynamicArray::new_in(&system);
//!
//! a.push_back(1u8).unwrap();
//! b.push_back(2u8).unwrap();
//! vessel::swap(&mut a, &mut b);
//!
//! assert_eq!(a, [2]);
//! ```
//!
//! # Testing
//!
//! With the `test-utils` feature, `support::test_utils` exposes a mock
//! allocator that counts calls and refuses a chosen allocation or
//! construction:
//!
//! ```rust,ignore
//! use vessel::support::test_utils::{MockAllocator, MockAllocatorBehaviour};
//!
//! let mock = MockAllocator::new(MockAllocatorBehaviour::FailAtAllocate(0));
//! let mut array = vessel::DynamicArray::new_in(&mock);
//!
//! assert!(array.push_back(1u8).is_err());
//! assert_eq!(mock.stats().live_slots, 0);
//! ```
//!
//! # License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]

pub mod support;

pub use vessel_alloc as alloc;
pub use vessel_array as array;

pub use vessel_alloc::{AllocError, Allocator, ConstructError};
pub use vessel_array::{ArrayError, DynamicArray, swap};
