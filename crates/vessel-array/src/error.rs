// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for vessel-array.

use thiserror::Error;
use vessel_alloc::{AllocError, ConstructError};

/// Errors that can occur when working with a `DynamicArray`.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ArrayError {
    /// The allocator could not supply the requested storage.
    ///
    /// The array keeps the buffer it had before the call.
    #[error("AllocationError: {0}")]
    Allocation(#[from] AllocError),

    /// Constructing an element failed; the batch it belonged to was rolled back.
    #[error("ConstructError: {0}")]
    Construct(#[from] ConstructError),
}
