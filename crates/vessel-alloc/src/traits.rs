// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;
use core::ptr::NonNull;

use crate::error::{AllocError, ConstructError};

/// Computes the layout of `n` contiguous values of `T`.
///
/// # Errors
///
/// Returns [`AllocError::CapacityOverflow`] if the total size exceeds `isize::MAX`.
#[inline]
pub fn array_layout<T>(n: usize) -> Result<Layout, AllocError> {
    Layout::array::<T>(n).map_err(|_| AllocError::CapacityOverflow)
}

/// Allocation capability injected into containers.
///
/// `allocate`/`deallocate` deal in raw storage only; `construct`/`destroy`
/// bridge between that storage and live values, one slot at a time.
///
/// # Safety
///
/// Implementors must return storage that is valid for reads and writes of
/// `n` values of `T`, suitably aligned, and not overlapping any other live
/// allocation, until it is handed back through `deallocate`. Storage for a
/// zero-sized request may be a dangling, well-aligned pointer.
pub unsafe trait Allocator {
    /// Acquires uninitialized storage for exactly `n` values of `T`.
    ///
    /// # Errors
    ///
    /// - [`AllocError::CapacityOverflow`] if the layout is not representable.
    /// - [`AllocError::OutOfMemory`] if the request cannot be satisfied.
    fn allocate<T>(&self, n: usize) -> Result<NonNull<T>, AllocError>;

    /// Releases storage previously obtained from [`Allocator::allocate`].
    ///
    /// # Safety
    ///
    /// `ptr` must come from `self.allocate::<T>(n)` with the same `n`, and must
    /// not be used afterwards. No live values may remain in the storage.
    unsafe fn deallocate<T>(&self, ptr: NonNull<T>, n: usize);

    /// Moves `value` into the uninitialized `slot`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructError`] if the allocator refuses. `value` is dropped
    /// and `slot` stays uninitialized.
    ///
    /// # Safety
    ///
    /// `slot` must be valid for writes and hold no live value.
    #[inline]
    unsafe fn construct<T>(&self, slot: NonNull<T>, value: T) -> Result<(), ConstructError> {
        // SAFETY (PRECONDITIONS ARE MET): caller guarantees slot is writable and uninitialized
        unsafe { slot.as_ptr().write(value) };
        Ok(())
    }

    /// Drops the live value in `slot`, leaving it uninitialized.
    ///
    /// # Safety
    ///
    /// `slot` must hold a live value that is not used afterwards.
    #[inline]
    unsafe fn destroy<T>(&self, slot: NonNull<T>) {
        // SAFETY (PRECONDITIONS ARE MET): caller guarantees slot holds a live value
        unsafe { core::ptr::drop_in_place(slot.as_ptr()) };
    }
}

// A borrowed allocator is an allocator: lets a container use an instance the
// caller keeps inspecting.
unsafe impl<A: Allocator> Allocator for &A {
    #[inline]
    fn allocate<T>(&self, n: usize) -> Result<NonNull<T>, AllocError> {
        (**self).allocate(n)
    }

    #[inline]
    unsafe fn deallocate<T>(&self, ptr: NonNull<T>, n: usize) {
        // SAFETY: forwarded contract
        unsafe { (**self).deallocate(ptr, n) }
    }

    #[inline]
    unsafe fn construct<T>(&self, slot: NonNull<T>, value: T) -> Result<(), ConstructError> {
        // SAFETY: forwarded contract
        unsafe { (**self).construct(slot, value) }
    }

    #[inline]
    unsafe fn destroy<T>(&self, slot: NonNull<T>) {
        // SAFETY: forwarded contract
        unsafe { (**self).destroy(slot) }
    }
}
