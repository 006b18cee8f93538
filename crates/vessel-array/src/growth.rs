// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use vessel_alloc::AllocError;

/// Capacity to grow to when `len` live elements need `additional` more slots
/// than the current buffer offers.
///
/// `len + max(len, additional)`, never below 1: single-element growth doubles
/// (`0 → 1 → 2 → 4 → 8`), bulk growth larger than `len` fits exactly. Doubling
/// bounds the relocation work of `n` appends to `O(n)`.
///
/// # Errors
///
/// [`AllocError::CapacityOverflow`] if the target does not fit in `usize`.
#[inline]
pub(crate) fn grown_capacity(len: usize, additional: usize) -> Result<usize, AllocError> {
    len.checked_add(len.max(additional))
        .map(|cap| cap.max(1))
        .ok_or(AllocError::CapacityOverflow)
}
