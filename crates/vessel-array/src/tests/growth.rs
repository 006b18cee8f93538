// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use vessel_alloc::AllocError;

use crate::growth::grown_capacity;

#[test]
fn test_grown_capacity_doubles_single_growth() {
    assert_eq!(grown_capacity(0, 1), Ok(1));
    assert_eq!(grown_capacity(1, 1), Ok(2));
    assert_eq!(grown_capacity(2, 1), Ok(4));
    assert_eq!(grown_capacity(4, 1), Ok(8));
}

#[test]
fn test_grown_capacity_bulk() {
    // Larger than len: exact fit.
    assert_eq!(grown_capacity(3, 10), Ok(13));
    // Smaller than len: doubling wins.
    assert_eq!(grown_capacity(10, 3), Ok(20));
}

#[test]
fn test_grown_capacity_never_zero() {
    assert_eq!(grown_capacity(0, 0), Ok(1));
}

#[test]
fn test_grown_capacity_overflow() {
    assert_eq!(
        grown_capacity(usize::MAX / 2 + 1, 1),
        Err(AllocError::CapacityOverflow)
    );
    assert_eq!(
        grown_capacity(1, usize::MAX),
        Err(AllocError::CapacityOverflow)
    );
}
