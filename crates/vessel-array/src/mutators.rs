// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::mem::{self, ManuallyDrop};
use core::ops::{Bound, RangeBounds};
use core::ptr;

use vessel_alloc::Allocator;

use crate::array::DynamicArray;
use crate::construct;
use crate::error::ArrayError;
use crate::growth::grown_capacity;
use crate::raw::PendingBuffer;

/// A hole of `count` uninitialized slots opened at `index` by shifting the
/// `tail` elements after it to the right.
///
/// While the gap is open the shifted tail is outside the live range. Dropping
/// the guard shifts the tail back and restores the length, so a failed or
/// unwinding fill leaves the array as it was.
struct OpenGap<'a, T, A: Allocator> {
    array: &'a mut DynamicArray<T, A>,
    index: usize,
    count: usize,
    tail: usize,
}

impl<'a, T, A: Allocator> OpenGap<'a, T, A> {
    /// # Safety
    ///
    /// `array.capacity() - array.len() >= count` and `index <= array.len()`.
    unsafe fn open(array: &'a mut DynamicArray<T, A>, index: usize, count: usize) -> Self {
        let tail = array.len - index;

        // SAFETY (PRECONDITIONS ARE MET): [index, len + count) lies within capacity; ptr::copy
        // tolerates the overlap
        unsafe {
            let at = array.buf.slot(index);
            ptr::copy(at.as_ptr(), at.add(count).as_ptr(), tail);
        }
        array.len = index;

        Self {
            array,
            index,
            count,
            tail,
        }
    }

    /// Marks the gap as filled with live values.
    fn seal(self) {
        let mut this = ManuallyDrop::new(self);
        this.array.len = this.index + this.count + this.tail;
    }
}

impl<T, A: Allocator> Drop for OpenGap<'_, T, A> {
    fn drop(&mut self) {
        // SAFETY (PRECONDITIONS ARE MET): the gap holds no live value (the fill rolled itself
        // back) and the tail still sits at index + count
        unsafe {
            let at = self.array.buf.slot(self.index);
            ptr::copy(at.add(self.count).as_ptr(), at.as_ptr(), self.tail);
        }
        self.array.len = self.index + self.tail;
    }
}

impl<T, A: Allocator> DynamicArray<T, A> {
    /// Appends `value` after the last element, growing if the buffer is full.
    ///
    /// Growth doubles the capacity, so `n` appends cost `O(n)` in total.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::Allocation`] if growth fails; the array is unchanged.
    /// - [`ArrayError::Construct`] if the allocator refuses to construct
    ///   `value`; the array may have grown but holds the same elements.
    ///
    /// In both cases `value` is dropped.
    pub fn push_back(&mut self, value: T) -> Result<(), ArrayError> {
        if self.len == self.capacity() {
            self.grow_for(1)?;
        }

        // SAFETY (PRECONDITIONS ARE MET): len < capacity, so slot len is allocated and uninitialized
        unsafe { construct::one(&self.alloc, self.buf.slot(self.len), value) }?;
        self.len += 1;

        Ok(())
    }

    /// Destroys the last element. No-op if empty.
    pub fn pop_back(&mut self) {
        if self.len == 0 {
            return;
        }

        self.len -= 1;

        // SAFETY (PRECONDITIONS ARE MET): slot len was live and is now outside the live range
        unsafe { self.alloc.destroy(self.buf.slot(self.len)) };
    }

    /// Inserts `count` clones of `value` before `index`, shifting the
    /// elements at and after `index` to the right.
    ///
    /// If the spare capacity is too small the array grows to
    /// `len + max(len, count)` slots.
    ///
    /// # Errors
    ///
    /// [`ArrayError::Allocation`] or [`ArrayError::Construct`]. New clones are
    /// written before any existing element moves for good, and already-written
    /// clones are destroyed on failure, so the elements come back in their
    /// original order.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, count: usize, value: &T) -> Result<(), ArrayError>
    where
        T: Clone,
    {
        assert!(
            index <= self.len,
            "insert index (is {index}) should be <= len (is {})",
            self.len
        );

        if count == 0 {
            return Ok(());
        }

        if self.capacity() - self.len >= count {
            self.insert_in_place(index, count, value)
        } else {
            self.insert_growing(index, count, value)
        }
    }

    fn insert_in_place(&mut self, index: usize, count: usize, value: &T) -> Result<(), ArrayError>
    where
        T: Clone,
    {
        // SAFETY (PRECONDITIONS ARE MET): the caller checked spare capacity and index
        let gap = unsafe { OpenGap::open(self, index, count) };

        // SAFETY (PRECONDITIONS ARE MET): the gap is `count` uninitialized slots
        unsafe { construct::fill(&gap.array.alloc, gap.array.buf.slot(index), count, value) }?;
        gap.seal();

        Ok(())
    }

    fn insert_growing(&mut self, index: usize, count: usize, value: &T) -> Result<(), ArrayError>
    where
        T: Clone,
    {
        let capacity = grown_capacity(self.len, count)?;
        let pending = PendingBuffer::allocate(&self.alloc, capacity)?;

        tracing::trace!(
            old_capacity = self.capacity(),
            new_capacity = capacity,
            len = self.len,
            "relocating for insert"
        );

        // SAFETY (PRECONDITIONS ARE MET): the new block has room for len + count slots and does
        // not overlap the old one. The clones go in first; moving the old elements cannot fail.
        unsafe {
            let fresh = pending.buffer();
            construct::fill(&self.alloc, fresh.slot(index), count, value)?;

            let old = self.buf.as_ptr();
            ptr::copy_nonoverlapping(old, fresh.as_ptr(), index);
            ptr::copy_nonoverlapping(
                old.add(index),
                fresh.slot(index + count).as_ptr(),
                self.len - index,
            );
        }
        let fresh = pending.commit();

        // SAFETY (PRECONDITIONS ARE MET): every live value was moved out of the old block
        unsafe { self.buf.release(&self.alloc) };
        self.buf = fresh;
        self.len += count;

        Ok(())
    }

    /// Removes the element at `index`, shifting everything after it one slot
    /// to the left. Returns `index`, which now addresses the element that
    /// followed the removed one (or `len()` if it was the last).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> usize {
        assert!(
            index < self.len,
            "erase index (is {index}) should be < len (is {})",
            self.len
        );

        self.erase_range(index..=index)
    }

    /// Removes the elements in `range`, shifting the remainder left by the
    /// number removed. Returns the start of the range.
    ///
    /// Capacity is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the range is decreasing or ends past `len()`.
    pub fn erase_range<R: RangeBounds<usize>>(&mut self, range: R) -> usize {
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => self.len,
        };

        assert!(start <= end, "erase range starts at {start} but ends at {end}");
        assert!(
            end <= self.len,
            "erase range end (is {end}) should be <= len (is {})",
            self.len
        );

        if start == end {
            return start;
        }

        let tail = self.len - end;

        // Nothing from `start` on counts as live until the tail is back in place.
        self.len = start;

        // SAFETY (PRECONDITIONS ARE MET): [start, end) are live and leave the live range here;
        // the tail [end, end + tail) is then moved down over them
        unsafe {
            construct::destroy(&self.alloc, self.buf.slot(start), end - start);
            ptr::copy(
                self.buf.slot(end).as_ptr(),
                self.buf.slot(start).as_ptr(),
                tail,
            );
        }
        self.len = start + tail;

        start
    }

    /// Destroys the elements past the first `len`. No-op if `len >= len()`.
    pub fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.erase_range(len..);
        }
    }

    /// Resizes to `len` elements: appends clones of `value` when growing,
    /// destroys trailing elements when shrinking.
    ///
    /// # Errors
    ///
    /// Same as [`DynamicArray::insert`] when growing. Shrinking cannot fail.
    pub fn resize(&mut self, len: usize, value: &T) -> Result<(), ArrayError>
    where
        T: Clone,
    {
        if len <= self.len {
            self.truncate(len);
            return Ok(());
        }

        self.insert(self.len, len - self.len, value)
    }

    /// Destroys every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.erase_range(..);
    }

    /// Exchanges buffers and allocators with `other` in `O(1)`.
    ///
    /// No element is moved, constructed or destroyed. Use
    /// [`DynamicArray::as_mut_slice`] to swap two elements instead.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

/// Exchanges the contents of `a` and `b`. Same as `a.swap(b)`.
pub fn swap<T, A: Allocator>(a: &mut DynamicArray<T, A>, b: &mut DynamicArray<T, A>) {
    a.swap(b);
}
