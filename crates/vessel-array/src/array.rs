// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::mem;
use core::ops::{Deref, DerefMut};
use core::slice;

use vessel_alloc::{Allocator, SystemAllocator};

use crate::construct;
use crate::error::ArrayError;
use crate::raw::{PendingBuffer, RawBuffer};

/// A contiguous growable array over a pluggable [`Allocator`].
///
/// The buffer is split into live elements `[0, len)`, spare capacity
/// `[len, capacity)`, and nothing else. Every element is constructed and
/// destroyed through the allocator, and every capacity-increasing operation
/// is fallible.
///
/// # Example
///
/// ```rust
/// use vessel_array::{ArrayError, DynamicArray};
///
/// fn example() -> Result<(), ArrayError> {
///     let mut array = DynamicArray::new();
///     for i in 1..=5 {
///         array.push_back(i)?;
///     }
///
///     array.erase_range(1..3);
///     assert_eq!(array, [1, 4, 5]);
///
///     array.insert(1, 2, &9)?;
///     assert_eq!(array, [1, 9, 9, 4, 5]);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct DynamicArray<T, A: Allocator = SystemAllocator> {
    pub(crate) buf: RawBuffer<T>,
    pub(crate) len: usize,
    pub(crate) alloc: A,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array. Does not allocate.
    pub const fn new() -> Self {
        Self::new_in(SystemAllocator)
    }

    /// Creates an empty array with room for exactly `capacity` elements.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, ArrayError> {
        Self::try_with_capacity_in(capacity, SystemAllocator)
    }

    /// Creates an array holding `count` clones of `value`.
    pub fn try_from_fill(count: usize, value: &T) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        Self::try_from_fill_in(count, value, SystemAllocator)
    }

    /// Creates an array holding `count` default values.
    pub fn try_from_default(count: usize) -> Result<Self, ArrayError>
    where
        T: Default,
    {
        Self::try_from_default_in(count, SystemAllocator)
    }

    /// Creates an array holding clones of `values`, in order.
    pub fn try_from_slice(values: &[T]) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        Self::try_from_slice_in(values, SystemAllocator)
    }

    /// Creates an array from the items of `iter`, in order.
    pub fn try_from_iter<I>(iter: I) -> Result<Self, ArrayError>
    where
        I: IntoIterator<Item = T>,
    {
        Self::try_from_iter_in(iter, SystemAllocator)
    }
}

impl<T, A: Allocator> DynamicArray<T, A> {
    /// Creates an empty array using `alloc`. Does not allocate.
    pub const fn new_in(alloc: A) -> Self {
        Self {
            buf: RawBuffer::EMPTY,
            len: 0,
            alloc,
        }
    }

    /// Creates an empty array with room for exactly `capacity` elements.
    ///
    /// # Errors
    ///
    /// [`ArrayError::Allocation`] if `alloc` cannot supply the storage.
    pub fn try_with_capacity_in(capacity: usize, alloc: A) -> Result<Self, ArrayError> {
        let buf = RawBuffer::allocate(&alloc, capacity)?;

        Ok(Self { buf, len: 0, alloc })
    }

    /// Creates an array holding `count` clones of `value`, with capacity
    /// exactly `count`.
    ///
    /// Counts and values are separate, typed arguments, so there is no
    /// confusion with [`DynamicArray::try_from_iter_in`].
    ///
    /// # Errors
    ///
    /// - [`ArrayError::Allocation`] if the storage cannot be obtained.
    /// - [`ArrayError::Construct`] if a clone cannot be constructed; clones
    ///   already made are destroyed and the storage released.
    pub fn try_from_fill_in(count: usize, value: &T, alloc: A) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        let mut array = Self::try_with_capacity_in(count, alloc)?;

        // SAFETY (PRECONDITIONS ARE MET): the fresh buffer has `count` uninitialized slots
        unsafe { construct::fill(&array.alloc, array.buf.slot(0), count, value) }?;
        array.len = count;

        Ok(array)
    }

    /// Creates an array holding `count` default values, with capacity exactly
    /// `count`.
    pub fn try_from_default_in(count: usize, alloc: A) -> Result<Self, ArrayError>
    where
        T: Default,
    {
        let mut array = Self::try_with_capacity_in(count, alloc)?;

        // SAFETY (PRECONDITIONS ARE MET): the fresh buffer has `count` uninitialized slots
        unsafe { construct::with(&array.alloc, array.buf.slot(0), count, |_| T::default()) }?;
        array.len = count;

        Ok(array)
    }

    /// Creates an array holding clones of `values`, with capacity exactly
    /// `values.len()`.
    pub fn try_from_slice_in(values: &[T], alloc: A) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        let mut array = Self::try_with_capacity_in(values.len(), alloc)?;

        // SAFETY (PRECONDITIONS ARE MET): the fresh buffer has values.len() uninitialized slots
        unsafe { construct::clone_slice(&array.alloc, array.buf.slot(0), values) }?;
        array.len = values.len();

        Ok(array)
    }

    /// Creates an array from the items of `iter`, in order.
    ///
    /// Storage for the iterator's lower size bound is reserved up front, so an
    /// exact-size iterator allocates once. Remaining items are appended one by
    /// one with regular growth.
    pub fn try_from_iter_in<I>(iter: I, alloc: A) -> Result<Self, ArrayError>
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();

        let mut array = Self::try_with_capacity_in(lower, alloc)?;
        for value in iter {
            array.push_back(value)?;
        }

        Ok(array)
    }

    /// Deep-copies the array into a buffer sized exactly to `len()`.
    pub fn try_clone(&self) -> Result<Self, ArrayError>
    where
        T: Clone,
        A: Clone,
    {
        Self::try_from_slice_in(self.as_slice(), self.alloc.clone())
    }

    /// Replaces the contents of `self` with clones of `source`.
    ///
    /// The copy is built in a new buffer first; on failure `self` is left
    /// untouched.
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), ArrayError>
    where
        T: Clone,
    {
        let pending = PendingBuffer::allocate(&self.alloc, source.len())?;

        // SAFETY (PRECONDITIONS ARE MET): the pending buffer has source.len() uninitialized slots
        unsafe { construct::clone_slice(&self.alloc, pending.buffer().slot(0), source) }?;
        let fresh = pending.commit();

        self.destroy_and_release();
        self.buf = fresh;
        self.len = source.len();

        Ok(())
    }

    /// Moves the contents out, leaving `self` empty and unallocated.
    ///
    /// The returned array owns the former buffer; `self` keeps a clone of the
    /// allocator and remains usable.
    pub fn take(&mut self) -> Self
    where
        A: Clone,
    {
        let empty = Self::new_in(self.alloc.clone());
        mem::replace(self, empty)
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of slots allocated, live or not.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the allocator.
    #[inline]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Returns a slice over the live elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY (PRECONDITIONS ARE MET): [0, len) are live; ptr is aligned and non-null even when empty
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// Returns a mutable slice over the live elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY (PRECONDITIONS ARE MET): [0, len) are live and exclusively borrowed
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }

    /// Returns the first element, or `None` if empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, or `None` if empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Mutable counterpart of [`DynamicArray::front`].
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Mutable counterpart of [`DynamicArray::back`].
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Iterates from the last live element to the first.
    #[inline]
    pub fn iter_rev(&self) -> core::iter::Rev<slice::Iter<'_, T>> {
        self.as_slice().iter().rev()
    }

    /// Destroys every live element, then releases the buffer.
    pub(crate) fn destroy_and_release(&mut self) {
        let len = mem::replace(&mut self.len, 0);

        // SAFETY (PRECONDITIONS ARE MET): [0, len) were live and len is already reset,
        // so an unwinding destructor cannot cause a second destruction
        unsafe {
            construct::destroy(&self.alloc, self.buf.slot(0), len);
            self.buf.release(&self.alloc);
        }
    }
}

impl<T, A: Allocator> Drop for DynamicArray<T, A> {
    fn drop(&mut self) {
        self.destroy_and_release();
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, A: Allocator + Clone> Clone for DynamicArray<T, A> {
    /// Deep copy.
    ///
    /// # Panics
    ///
    /// Panics if the copy cannot be allocated or constructed; use
    /// [`DynamicArray::try_clone`] to handle that case.
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(error) => panic!("DynamicArray::clone failed: {error}"),
        }
    }
}

impl<T, A: Allocator> Deref for DynamicArray<T, A> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, A: Allocator> DerefMut for DynamicArray<T, A> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, A: Allocator> AsRef<[T]> for DynamicArray<T, A> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator> AsMut<[T]> for DynamicArray<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a DynamicArray<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut DynamicArray<T, A> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for DynamicArray<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("data", &self.as_slice())
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<T, U, A, B> PartialEq<DynamicArray<U, B>> for DynamicArray<T, A>
where
    T: PartialEq<U>,
    A: Allocator,
    B: Allocator,
{
    fn eq(&self, other: &DynamicArray<U, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, A: Allocator> Eq for DynamicArray<T, A> {}

impl<T, U, A> PartialEq<[U]> for DynamicArray<T, A>
where
    T: PartialEq<U>,
    A: Allocator,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, A> PartialEq<&[U]> for DynamicArray<T, A>
where
    T: PartialEq<U>,
    A: Allocator,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, A, const N: usize> PartialEq<[U; N]> for DynamicArray<T, A>
where
    T: PartialEq<U>,
    A: Allocator,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Hash, A: Allocator> Hash for DynamicArray<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

// Safety: the array exclusively owns its buffer; sharing follows T and A.
unsafe impl<T: Send, A: Allocator + Send> Send for DynamicArray<T, A> {}
unsafe impl<T: Sync, A: Allocator + Sync> Sync for DynamicArray<T, A> {}
