// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use vessel_alloc::AllocError;
use vessel_alloc::support::test_utils::{MockAllocator, MockAllocatorBehaviour};
use vessel_test_utils::Ledger;

use crate::{ArrayError, DynamicArray};

// =============================================================================
// new() / new_in() / default()
// =============================================================================

#[test]
fn test_new_is_empty_and_unallocated() {
    let array: DynamicArray<u8> = DynamicArray::new();

    assert_eq!(array.len(), 0);
    assert_eq!(array.capacity(), 0);
    assert!(array.is_empty());
}

#[test]
fn test_new_in_does_not_allocate() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::None);
    let array: DynamicArray<u64, _> = DynamicArray::new_in(&mock);

    assert!(array.is_empty());
    drop(array);

    assert_eq!(mock.stats().allocations, 0);
    assert_eq!(mock.stats().deallocations, 0);
}

#[test]
fn test_default() {
    let array: DynamicArray<String> = DynamicArray::default();

    assert!(array.is_empty());
    assert_eq!(array.capacity(), 0);
}

// =============================================================================
// try_with_capacity()
// =============================================================================

#[test]
fn test_try_with_capacity() {
    let array: DynamicArray<u8> =
        DynamicArray::try_with_capacity(10).expect("Failed to try_with_capacity(10)");

    assert_eq!(array.len(), 0);
    assert_eq!(array.capacity(), 10);
}

#[test]
fn test_try_with_capacity_overflow() {
    let result = DynamicArray::<u64>::try_with_capacity(usize::MAX);

    assert!(matches!(
        result,
        Err(ArrayError::Allocation(AllocError::CapacityOverflow))
    ));
}

// =============================================================================
// try_from_fill() / try_from_default()
// =============================================================================

#[test]
fn test_try_from_fill() {
    let array = DynamicArray::try_from_fill(3, &7u8).expect("Failed to try_from_fill(..)");

    assert_eq!(array, [7, 7, 7]);
    assert_eq!(array.capacity(), 3);
}

#[test]
fn test_try_from_fill_zero() {
    let array = DynamicArray::try_from_fill(0, &7u8).expect("Failed to try_from_fill(..)");

    assert!(array.is_empty());
    assert_eq!(array.capacity(), 0);
}

#[test]
fn test_try_from_fill_refused_construct_leaks_nothing() {
    let ledger = Ledger::new();
    let mock = MockAllocator::new(MockAllocatorBehaviour::FailAtConstruct(2));
    let value = ledger.track(4);

    let result = DynamicArray::try_from_fill_in(5, &value, &mock);

    assert!(matches!(result, Err(ArrayError::Construct(_))));
    assert_eq!(ledger.live(), 1);

    let stats = mock.stats();
    assert_eq!(stats.live_slots, 0);
    assert_eq!(stats.live_values(), 0);
}

#[test]
fn test_try_from_fill_allocation_failure() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::FailAtAllocate(0));
    let result = DynamicArray::try_from_fill_in(4, &1u32, &mock);

    assert!(matches!(
        result,
        Err(ArrayError::Allocation(AllocError::OutOfMemory { bytes: 16 }))
    ));
    assert_eq!(mock.stats().allocations, 0);
}

#[test]
fn test_try_from_default() {
    let array: DynamicArray<u32> =
        DynamicArray::try_from_default(4).expect("Failed to try_from_default(4)");

    assert_eq!(array, [0, 0, 0, 0]);
    assert_eq!(array.capacity(), 4);
}

// =============================================================================
// try_from_slice() / try_from_iter()
// =============================================================================

#[test]
fn test_try_from_slice_allocates_exactly() {
    let array = DynamicArray::try_from_slice(&["a", "b", "c"]).expect("Failed to try_from_slice");

    assert_eq!(array, ["a", "b", "c"]);
    assert_eq!(array.capacity(), 3);
}

#[test]
fn test_try_from_iter_exact_size_allocates_once() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::None);
    let array = DynamicArray::try_from_iter_in(0..5u32, &mock).expect("Failed to try_from_iter");

    assert_eq!(array, [0, 1, 2, 3, 4]);
    assert_eq!(array.capacity(), 5);
    assert_eq!(mock.stats().allocations, 1);
}

#[test]
fn test_try_from_iter_unknown_size_grows() {
    let array = DynamicArray::try_from_iter((0..10u32).filter(|x| x % 2 == 0))
        .expect("Failed to try_from_iter");

    assert_eq!(array, [0, 2, 4, 6, 8]);
    // 0 → 1 → 2 → 4 → 8
    assert_eq!(array.capacity(), 8);
}

#[test]
fn test_try_from_iter_empty() {
    let array = DynamicArray::try_from_iter(core::iter::empty::<u8>())
        .expect("Failed to try_from_iter");

    assert!(array.is_empty());
    assert_eq!(array.capacity(), 0);
}

// =============================================================================
// try_clone() / clone() / try_clone_from()
// =============================================================================

#[test]
fn test_try_clone_is_deep() {
    let original = DynamicArray::try_from_slice(&[1, 2, 3]).expect("Failed to try_from_slice");
    let mut copy = original.try_clone().expect("Failed to try_clone()");

    copy[0] = 99;
    copy.push_back(4).expect("Failed to push_back(4)");

    assert_eq!(original, [1, 2, 3]);
    assert_eq!(copy, [99, 2, 3, 4]);
    assert_ne!(original.as_ptr(), copy.as_ptr());
}

#[test]
fn test_try_clone_sizes_to_len() {
    let mut original: DynamicArray<u8> = DynamicArray::new();
    original.reserve(32).expect("Failed to reserve(32)");
    original.push_back(1).expect("Failed to push_back(1)");

    let copy = original.try_clone().expect("Failed to try_clone()");

    assert_eq!(copy.len(), 1);
    assert_eq!(copy.capacity(), 1);
}

#[test]
fn test_clone() {
    let original = DynamicArray::try_from_slice(&[String::from("x"), String::from("y")])
        .expect("Failed to try_from_slice");
    let copy = original.clone();

    assert_eq!(copy, original);
}

#[test]
fn test_try_clone_from_replaces_contents() {
    let source = DynamicArray::try_from_slice(&[7, 8]).expect("Failed to try_from_slice");
    let mut target = DynamicArray::try_from_slice(&[1, 2, 3, 4]).expect("Failed to try_from_slice");

    target.try_clone_from(&source).expect("Failed to try_clone_from(..)");

    assert_eq!(target, [7, 8]);
    assert_eq!(target.capacity(), 2);
    assert_eq!(source, [7, 8]);
}

#[test]
fn test_try_clone_from_failure_leaves_target_untouched() {
    let ledger = Ledger::new();
    let mock = MockAllocator::new(MockAllocatorBehaviour::None);

    let source = DynamicArray::try_from_iter_in((0..4).map(|i| ledger.track(i)), &mock)
        .expect("Failed to try_from_iter_in");
    let mut target = DynamicArray::try_from_iter_in((10..12).map(|i| ledger.track(i)), &mock)
        .expect("Failed to try_from_iter_in");
    let target_ptr = target.as_ptr();

    mock.change_behaviour(MockAllocatorBehaviour::FailAtConstruct(2));
    let result = target.try_clone_from(&source);

    assert!(matches!(result, Err(ArrayError::Construct(_))));
    assert_eq!(target, [10u32, 11]);
    assert_eq!(target.as_ptr(), target_ptr);
    assert_eq!(ledger.live(), 6);

    let stats = mock.stats();
    assert_eq!(stats.live_slots, source.capacity() + target.capacity());
    assert_eq!(stats.live_values(), 6);
}

// =============================================================================
// take() / moves
// =============================================================================

#[test]
fn test_take_leaves_source_empty_and_reusable() {
    let mut source = DynamicArray::try_from_slice(&[1, 2, 3]).expect("Failed to try_from_slice");
    let ptr = source.as_ptr();

    let taken = source.take();

    assert_eq!(taken, [1, 2, 3]);
    assert_eq!(taken.as_ptr(), ptr);
    assert_eq!(source.len(), 0);
    assert_eq!(source.capacity(), 0);

    source.push_back(9).expect("Failed to push_back(9)");
    assert_eq!(source, [9]);
}

#[test]
fn test_move_transfers_buffer() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::None);
    let source = DynamicArray::try_from_slice_in(&[1u8, 2, 3], &mock)
        .expect("Failed to try_from_slice_in");
    let ptr = source.as_ptr();

    let destination = source;

    assert_eq!(destination, [1, 2, 3]);
    assert_eq!(destination.as_ptr(), ptr);
    assert_eq!(mock.stats().allocations, 1);
}

// =============================================================================
// Drop
// =============================================================================

#[test]
fn test_drop_destroys_every_element_and_releases() {
    let ledger = Ledger::new();
    let mock = MockAllocator::new(MockAllocatorBehaviour::None);

    {
        let mut array = DynamicArray::new_in(&mock);
        for i in 0..10 {
            array.push_back(ledger.track(i)).expect("Failed to push_back(..)");
        }
        assert_eq!(ledger.live(), 10);
    }

    assert_eq!(ledger.live(), 0);

    let stats = mock.stats();
    assert_eq!(stats.live_slots, 0);
    assert_eq!(stats.destroys, 10);
    assert_eq!(stats.allocations, stats.deallocations);
}

// =============================================================================
// Access
// =============================================================================

#[test]
fn test_front_and_back() {
    let mut array = DynamicArray::try_from_slice(&[1, 2, 3]).expect("Failed to try_from_slice");

    assert_eq!(array.front(), Some(&1));
    assert_eq!(array.back(), Some(&3));

    *array.front_mut().expect("Failed to front_mut()") = 10;
    *array.back_mut().expect("Failed to back_mut()") = 30;

    assert_eq!(array, [10, 2, 30]);
}

#[test]
fn test_front_and_back_empty() {
    let mut array: DynamicArray<u8> = DynamicArray::new();

    assert!(array.front().is_none());
    assert!(array.back().is_none());
    assert!(array.front_mut().is_none());
    assert!(array.back_mut().is_none());
}

#[test]
fn test_index_and_index_mut() {
    let mut array = DynamicArray::try_from_slice(&[10, 20]).expect("Failed to try_from_slice");

    assert_eq!(array[0], 10);
    assert_eq!(array[1], 20);

    array[0] = 99;
    assert_eq!(array[0], 99);
}

#[test]
#[should_panic]
fn test_index_out_of_range_panics() {
    let array = DynamicArray::try_from_slice(&[1u8]).expect("Failed to try_from_slice");
    let _value = array[1];
}

#[test]
fn test_iteration_forward_and_reverse() {
    let array = DynamicArray::try_from_slice(&[1, 2, 3, 4]).expect("Failed to try_from_slice");

    let forward: Vec<i32> = array.iter().copied().collect();
    let reverse: Vec<i32> = array.iter_rev().copied().collect();
    let sum: i32 = (&array).into_iter().sum();

    assert_eq!(forward, vec![1, 2, 3, 4]);
    assert_eq!(reverse, vec![4, 3, 2, 1]);
    assert_eq!(sum, 10);
}

#[test]
fn test_iter_mut() {
    let mut array = DynamicArray::try_from_slice(&[1, 2, 3]).expect("Failed to try_from_slice");

    for value in &mut array {
        *value *= 2;
    }

    assert_eq!(array, [2, 4, 6]);
}

#[test]
fn test_equality_across_allocators() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::None);
    let a = DynamicArray::try_from_slice(&[1, 2]).expect("Failed to try_from_slice");
    let b = DynamicArray::try_from_slice_in(&[1, 2], &mock).expect("Failed to try_from_slice_in");

    assert_eq!(a, b);
    assert_eq!(a, &[1, 2][..]);
}

#[test]
fn test_debug() {
    let array = DynamicArray::try_from_slice(&[1, 2]).expect("Failed to try_from_slice");

    assert_eq!(
        format!("{:?}", array),
        "DynamicArray { data: [1, 2], len: 2, capacity: 2 }"
    );
}

#[test]
fn test_zero_sized_elements() {
    let mut array: DynamicArray<()> = DynamicArray::new();

    for _ in 0..1_000 {
        array.push_back(()).expect("Failed to push_back(())");
    }

    assert_eq!(array.len(), 1_000);
    array.erase_range(..500);
    assert_eq!(array.len(), 500);
}
