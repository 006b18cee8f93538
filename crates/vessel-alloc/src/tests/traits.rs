// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::support::test_utils::{MockAllocator, MockAllocatorBehaviour};
use crate::{AllocError, Allocator, array_layout};

#[test]
fn test_array_layout() {
    let layout = array_layout::<u32>(10).expect("Failed to array_layout(10)");

    assert_eq!(layout.size(), 40);
    assert_eq!(layout.align(), 4);
}

#[test]
fn test_array_layout_overflow() {
    assert_eq!(
        array_layout::<u32>(usize::MAX),
        Err(AllocError::CapacityOverflow)
    );
}

#[test]
fn test_borrowed_allocator_forwards_every_call() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::None);
    let borrowed = &mock;

    let slot = borrowed.allocate::<u8>(3).expect("Failed to allocate(3)");
    unsafe {
        borrowed
            .construct(slot, 9u8)
            .expect("Failed to construct(..)");
        borrowed.destroy(slot);
        borrowed.deallocate(slot, 3);
    }

    let stats = mock.stats();
    assert_eq!(stats.allocations, 1);
    assert_eq!(stats.constructs, 1);
    assert_eq!(stats.destroys, 1);
    assert_eq!(stats.deallocations, 1);
    assert_eq!(stats.live_slots, 0);
}
