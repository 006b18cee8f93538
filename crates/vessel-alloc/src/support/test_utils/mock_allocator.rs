// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;
use core::ptr::NonNull;

use crate::error::{AllocError, ConstructError};
use crate::system::SystemAllocator;
use crate::traits::{Allocator, array_layout};

/// Configurable behavior for [`MockAllocator`].
///
/// Call indices are zero-based and counted from the last
/// [`MockAllocator::change_behaviour`] (or from creation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockAllocatorBehaviour {
    /// Normal operation (delegates to [`SystemAllocator`]).
    None,
    /// The `k`-th call to `allocate` fails with [`AllocError::OutOfMemory`].
    FailAtAllocate(usize),
    /// The `k`-th call to `construct` fails with [`ConstructError::Refused`].
    FailAtConstruct(usize),
}

/// Snapshot of the calls a [`MockAllocator`] has served.
///
/// Refused calls are not counted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MockAllocatorStats {
    /// Successful `allocate` calls.
    pub allocations: usize,
    /// `deallocate` calls.
    pub deallocations: usize,
    /// Slots currently allocated and not yet released.
    pub live_slots: usize,
    /// Successful `construct` calls.
    pub constructs: usize,
    /// `destroy` calls.
    pub destroys: usize,
}

impl MockAllocatorStats {
    /// Values constructed through the allocator and not yet destroyed by it.
    pub fn live_values(&self) -> usize {
        self.constructs.saturating_sub(self.destroys)
    }
}

/// Mock allocator for testing.
///
/// Wraps [`SystemAllocator`], records every call, and allows simulating
/// failures via [`MockAllocatorBehaviour`]. Containers usually borrow it
/// (`&MockAllocator` is an [`Allocator`]) so the test can inspect
/// [`MockAllocator::stats`] while the container is alive.
#[derive(Debug)]
pub struct MockAllocator {
    inner: SystemAllocator,
    behaviour: Cell<MockAllocatorBehaviour>,
    allocate_calls: Cell<usize>,
    construct_calls: Cell<usize>,
    stats: Cell<MockAllocatorStats>,
}

impl MockAllocator {
    /// Creates a new mock allocator with the specified behavior.
    pub fn new(behaviour: MockAllocatorBehaviour) -> Self {
        Self {
            inner: SystemAllocator,
            behaviour: Cell::new(behaviour),
            allocate_calls: Cell::new(0),
            construct_calls: Cell::new(0),
            stats: Cell::new(MockAllocatorStats::default()),
        }
    }

    /// Changes the mock behavior at runtime and restarts call indexing.
    pub fn change_behaviour(&self, behaviour: MockAllocatorBehaviour) {
        self.behaviour.set(behaviour);
        self.allocate_calls.set(0);
        self.construct_calls.set(0);
    }

    /// Returns the counters recorded so far.
    pub fn stats(&self) -> MockAllocatorStats {
        self.stats.get()
    }

    fn next_call(counter: &Cell<usize>) -> usize {
        let index = counter.get();
        counter.set(index + 1);
        index
    }

    fn record(&self, f: impl FnOnce(&mut MockAllocatorStats)) {
        let mut stats = self.stats.get();
        f(&mut stats);
        self.stats.set(stats);
    }
}

impl Default for MockAllocator {
    fn default() -> Self {
        Self::new(MockAllocatorBehaviour::None)
    }
}

unsafe impl Allocator for MockAllocator {
    fn allocate<T>(&self, n: usize) -> Result<NonNull<T>, AllocError> {
        let index = Self::next_call(&self.allocate_calls);

        if self.behaviour.get() == MockAllocatorBehaviour::FailAtAllocate(index) {
            let bytes = array_layout::<T>(n)?.size();
            return Err(AllocError::OutOfMemory { bytes });
        }

        let ptr = self.inner.allocate(n)?;

        self.record(|s| {
            s.allocations += 1;
            s.live_slots += n;
        });

        Ok(ptr)
    }

    unsafe fn deallocate<T>(&self, ptr: NonNull<T>, n: usize) {
        // SAFETY: forwarded contract
        unsafe { self.inner.deallocate(ptr, n) };

        self.record(|s| {
            s.deallocations += 1;
            s.live_slots -= n;
        });
    }

    unsafe fn construct<T>(&self, slot: NonNull<T>, value: T) -> Result<(), ConstructError> {
        let index = Self::next_call(&self.construct_calls);

        if self.behaviour.get() == MockAllocatorBehaviour::FailAtConstruct(index) {
            drop(value);
            return Err(ConstructError::Refused);
        }

        // SAFETY: forwarded contract
        unsafe { self.inner.construct(slot, value) }?;
        self.record(|s| s.constructs += 1);

        Ok(())
    }

    unsafe fn destroy<T>(&self, slot: NonNull<T>) {
        self.record(|s| s.destroys += 1);

        // SAFETY: forwarded contract
        unsafe { self.inner.destroy(slot) };
    }
}
