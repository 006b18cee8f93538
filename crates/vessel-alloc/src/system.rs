// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ptr::NonNull;

use crate::error::AllocError;
use crate::traits::{Allocator, array_layout};

/// Stateless allocator backed by the global allocator.
///
/// Zero-byte requests (`n == 0` or zero-sized `T`) never reach the global
/// allocator; they yield a dangling, well-aligned pointer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SystemAllocator;

unsafe impl Allocator for SystemAllocator {
    fn allocate<T>(&self, n: usize) -> Result<NonNull<T>, AllocError> {
        let layout = array_layout::<T>(n)?;

        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }

        // SAFETY (PRECONDITIONS ARE MET): layout has non-zero size
        let ptr = unsafe { alloc::alloc::alloc(layout) };

        NonNull::new(ptr.cast::<T>()).ok_or(AllocError::OutOfMemory {
            bytes: layout.size(),
        })
    }

    unsafe fn deallocate<T>(&self, ptr: NonNull<T>, n: usize) {
        // `n` was accepted by `allocate`, so the layout is representable.
        let Ok(layout) = array_layout::<T>(n) else {
            return;
        };

        if layout.size() == 0 {
            return;
        }

        // SAFETY (PRECONDITIONS ARE MET): ptr was returned by alloc() with this exact layout
        unsafe { alloc::alloc::dealloc(ptr.as_ptr().cast::<u8>(), layout) };
    }
}
