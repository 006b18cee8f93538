// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Bridges between uninitialized slots and live values.
//!
//! Batch construction rolls back locally: if the `k`-th value cannot be
//! constructed (allocator refusal or a panicking `Clone`), the `k - 1` values
//! this call already wrote are destroyed before the failure propagates.

use core::mem;
use core::ptr::NonNull;

use vessel_alloc::{Allocator, ConstructError};

/// Destroys the values a batch has written so far, unless disarmed.
struct PartialInit<'a, T, A: Allocator> {
    alloc: &'a A,
    start: NonNull<T>,
    written: usize,
}

impl<T, A: Allocator> Drop for PartialInit<'_, T, A> {
    fn drop(&mut self) {
        // SAFETY (PRECONDITIONS ARE MET): exactly `written` slots from `start` were constructed
        // by this batch and nothing else refers to them
        unsafe { destroy(self.alloc, self.start, self.written) };
    }
}

/// Constructs a single value into `slot`.
///
/// # Safety
///
/// `slot` must be valid for writes and hold no live value.
#[inline]
pub(crate) unsafe fn one<T, A: Allocator>(
    alloc: &A,
    slot: NonNull<T>,
    value: T,
) -> Result<(), ConstructError> {
    // SAFETY: forwarded contract
    unsafe { alloc.construct(slot, value) }.inspect_err(|error| {
        tracing::debug!(%error, "construction refused");
    })
}

/// Constructs `count` values produced by `make(i)` into `dst..dst + count`,
/// in forward order.
///
/// # Safety
///
/// The `count` slots starting at `dst` must be valid for writes and hold no
/// live values.
pub(crate) unsafe fn with<T, A, F>(
    alloc: &A,
    dst: NonNull<T>,
    count: usize,
    mut make: F,
) -> Result<(), ConstructError>
where
    A: Allocator,
    F: FnMut(usize) -> T,
{
    let mut guard = PartialInit {
        alloc,
        start: dst,
        written: 0,
    };

    while guard.written < count {
        let value = make(guard.written);
        // SAFETY (PRECONDITIONS ARE MET): slot `written` lies inside the caller's range
        unsafe { one(alloc, dst.add(guard.written), value) }?;
        guard.written += 1;
    }

    mem::forget(guard);
    Ok(())
}

/// Constructs `count` clones of `value` starting at `dst`.
///
/// # Safety
///
/// Same as [`with`].
#[inline]
pub(crate) unsafe fn fill<T: Clone, A: Allocator>(
    alloc: &A,
    dst: NonNull<T>,
    count: usize,
    value: &T,
) -> Result<(), ConstructError> {
    // SAFETY: forwarded contract
    unsafe { with(alloc, dst, count, |_| value.clone()) }
}

/// Constructs a clone of every element of `src`, in order, starting at `dst`.
///
/// # Safety
///
/// Same as [`with`] with `count == src.len()`; `src` must not overlap the
/// destination.
#[inline]
pub(crate) unsafe fn clone_slice<T: Clone, A: Allocator>(
    alloc: &A,
    dst: NonNull<T>,
    src: &[T],
) -> Result<(), ConstructError> {
    // SAFETY: forwarded contract
    unsafe { with(alloc, dst, src.len(), |i| src[i].clone()) }
}

/// Destroys the `count` live values starting at `start`, in forward order.
///
/// # Safety
///
/// The `count` slots starting at `start` must hold live values that are not
/// used afterwards.
pub(crate) unsafe fn destroy<T, A: Allocator>(alloc: &A, start: NonNull<T>, count: usize) {
    for i in 0..count {
        // SAFETY (PRECONDITIONS ARE MET): slot i holds a live value
        unsafe { alloc.destroy(start.add(i)) };
    }
}
