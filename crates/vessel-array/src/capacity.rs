// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Capacity control: explicit `reserve`/`shrink_to_fit` and the implicit
//! growth used by insertions.

use core::ptr;

use vessel_alloc::Allocator;

use crate::array::DynamicArray;
use crate::error::ArrayError;
use crate::growth::grown_capacity;
use crate::raw::PendingBuffer;

impl<T, A: Allocator> DynamicArray<T, A> {
    /// Ensures capacity for at least `capacity` elements.
    ///
    /// No-op if `capacity <= self.capacity()`. Otherwise the buffer is replaced
    /// by one of exactly `capacity` slots and every live element is moved over
    /// in order. No further reallocation happens until `len()` would exceed
    /// `capacity`.
    ///
    /// # Errors
    ///
    /// [`ArrayError::Allocation`] if the new buffer cannot be obtained. The
    /// array is left exactly as it was.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vessel_array::{ArrayError, DynamicArray};
    ///
    /// fn example() -> Result<(), ArrayError> {
    ///     let mut array = DynamicArray::try_from_slice(&[1u8, 2, 3])?;
    ///     array.reserve(10)?;
    ///
    ///     assert_eq!(array.capacity(), 10);
    ///     assert_eq!(array, [1, 2, 3]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn reserve(&mut self, capacity: usize) -> Result<(), ArrayError> {
        if capacity <= self.capacity() {
            return Ok(());
        }

        self.relocate(capacity)
    }

    /// Shrinks the buffer to exactly `len()` slots.
    ///
    /// No-op when the buffer is already tight. An empty array releases its
    /// buffer and returns to the unallocated state. Never increases capacity
    /// and never touches element values or order.
    ///
    /// # Errors
    ///
    /// [`ArrayError::Allocation`] if the smaller buffer cannot be obtained;
    /// the array keeps its current buffer.
    pub fn shrink_to_fit(&mut self) -> Result<(), ArrayError> {
        if self.len == self.capacity() {
            return Ok(());
        }

        tracing::trace!(
            old_capacity = self.capacity(),
            new_capacity = self.len,
            "shrinking to fit"
        );

        if self.len == 0 {
            // SAFETY (PRECONDITIONS ARE MET): no live values remain
            unsafe { self.buf.release(&self.alloc) };
            return Ok(());
        }

        self.relocate(self.len)
    }

    /// Makes room for `additional` more elements, growing by
    /// [`grown_capacity`] if the spare capacity is too small.
    pub(crate) fn grow_for(&mut self, additional: usize) -> Result<(), ArrayError> {
        if self.capacity() - self.len >= additional {
            return Ok(());
        }

        let capacity = grown_capacity(self.len, additional)?;
        self.relocate(capacity)
    }

    /// Moves every live element into a new buffer of exactly `capacity`
    /// slots and releases the old one.
    fn relocate(&mut self, capacity: usize) -> Result<(), ArrayError> {
        debug_assert!(capacity >= self.len);

        let pending = PendingBuffer::allocate(&self.alloc, capacity)?;

        tracing::trace!(
            old_capacity = self.capacity(),
            new_capacity = capacity,
            len = self.len,
            "relocating"
        );

        // SAFETY (PRECONDITIONS ARE MET): both blocks hold at least len slots and never overlap;
        // a bitwise move cannot fail, so the old slots are now logically uninitialized
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), pending.buffer().as_ptr(), self.len);
        }
        let fresh = pending.commit();

        // SAFETY (PRECONDITIONS ARE MET): the old block holds no live value after the move
        unsafe { self.buf.release(&self.alloc) };
        self.buf = fresh;

        Ok(())
    }
}
