// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw storage owned by a `DynamicArray`.
//!
//! This is the only place that asks an allocator for memory or gives it back.
//! `RawBuffer` knows where its block starts and how many slots it spans, but
//! not which slots are live; that bookkeeping belongs to the array.

use core::marker::PhantomData;
use core::mem::ManuallyDrop;
use core::ptr::NonNull;

use vessel_alloc::{AllocError, Allocator};

/// A block of `cap` uninitialized slots, or the empty unallocated state.
///
/// The block does not release itself: whoever owns it must call
/// [`RawBuffer::release`] with the allocator that produced it.
pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

impl<T> RawBuffer<T> {
    /// No storage. `ptr` is dangling and must never be dereferenced.
    pub(crate) const EMPTY: Self = Self {
        ptr: NonNull::dangling(),
        cap: 0,
        _marker: PhantomData,
    };

    /// Acquires storage for exactly `cap` slots.
    ///
    /// `cap == 0` yields [`RawBuffer::EMPTY`] without calling the allocator.
    pub(crate) fn allocate<A: Allocator>(alloc: &A, cap: usize) -> Result<Self, AllocError> {
        if cap == 0 {
            return Ok(Self::EMPTY);
        }

        let ptr = alloc.allocate::<T>(cap).inspect_err(|error| {
            tracing::debug!(capacity = cap, %error, "allocation refused");
        })?;

        Ok(Self {
            ptr,
            cap,
            _marker: PhantomData,
        })
    }

    /// Gives the storage back to `alloc` and returns to the empty state.
    ///
    /// No-op when already empty.
    ///
    /// # Safety
    ///
    /// `alloc` must be the allocator this block came from, and no live value
    /// may remain in it.
    pub(crate) unsafe fn release<A: Allocator>(&mut self, alloc: &A) {
        if self.cap == 0 {
            return;
        }

        // SAFETY (PRECONDITIONS ARE MET): ptr/cap came from alloc.allocate::<T>(cap)
        unsafe { alloc.deallocate(self.ptr, self.cap) };
        *self = Self::EMPTY;
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    #[inline(always)]
    pub(crate) fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Pointer to slot `index`.
    ///
    /// # Safety
    ///
    /// `index <= capacity()`.
    #[inline(always)]
    pub(crate) unsafe fn slot(&self, index: usize) -> NonNull<T> {
        debug_assert!(index <= self.cap);
        // SAFETY (PRECONDITIONS ARE MET): index stays within (or one past) the block
        unsafe { self.ptr.add(index) }
    }
}

/// A freshly allocated block that is released on drop unless committed.
///
/// Used while a replacement buffer is populated: if population fails or
/// unwinds, the block goes back to the allocator and the array keeps its old
/// storage.
pub(crate) struct PendingBuffer<'a, T, A: Allocator> {
    buf: RawBuffer<T>,
    alloc: &'a A,
}

impl<'a, T, A: Allocator> PendingBuffer<'a, T, A> {
    pub(crate) fn allocate(alloc: &'a A, cap: usize) -> Result<Self, AllocError> {
        Ok(Self {
            buf: RawBuffer::allocate(alloc, cap)?,
            alloc,
        })
    }

    #[inline(always)]
    pub(crate) fn buffer(&self) -> &RawBuffer<T> {
        &self.buf
    }

    /// Hands the block over; the caller now owns its release.
    pub(crate) fn commit(self) -> RawBuffer<T> {
        let this = ManuallyDrop::new(self);
        RawBuffer {
            ptr: this.buf.ptr,
            cap: this.buf.cap,
            _marker: PhantomData,
        }
    }
}

impl<T, A: Allocator> Drop for PendingBuffer<'_, T, A> {
    fn drop(&mut self) {
        // SAFETY (PRECONDITIONS ARE MET): the block came from self.alloc and was never committed,
        // so any value written into it has already been rolled back
        unsafe { self.buf.release(self.alloc) };
    }
}
