// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for vessel-alloc.

use thiserror::Error;

/// The allocator could not supply the requested storage.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum AllocError {
    /// The requested element count does not fit in a valid layout.
    ///
    /// Raised before the memory subsystem is touched, when
    /// `n * size_of::<T>()` would exceed `isize::MAX`.
    #[error("capacity overflow: requested storage exceeds isize::MAX bytes")]
    CapacityOverflow,

    /// The memory subsystem refused the request.
    #[error("out of memory: failed to allocate {bytes} bytes")]
    OutOfMemory {
        /// Size of the refused request.
        bytes: usize,
    },
}

/// Constructing a value into a slot failed.
///
/// The value handed to [`Allocator::construct`](crate::Allocator::construct)
/// has already been dropped when this is returned and the slot is still
/// uninitialized.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ConstructError {
    /// The allocator refused to construct into the slot.
    #[error("construction refused by allocator")]
    Refused,
}
