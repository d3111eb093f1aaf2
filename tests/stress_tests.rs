//! Scenario and stress tests
//!
//! Fixed workloads with known answers, plus large numbers of operations in
//! various patterns to catch edge cases and verify correctness under load.

mod common;

use common::{ReferenceMaxQueue, ReferenceMinQueue};
use mergeable_heap::fibonacci::FibonacciHeap;
use mergeable_heap::{HeapError, MaxOrder, PriorityQueue};

/// Push 1..=10000 in order and check top/len at fixed pop counts
fn test_ascending_checkpoints<H: PriorityQueue<i32>>(mut heap: H) {
    const N: usize = 10_000;

    assert!(heap.is_empty());
    for i in 1..=N as i32 {
        heap.push(i);
    }
    assert_eq!(heap.len(), N);
    assert_eq!(heap.top(), Ok(&1));

    for _ in 0..20 {
        heap.pop().unwrap();
    }
    assert_eq!(heap.top(), Ok(&21));
    assert_eq!(heap.len(), N - 20);

    for _ in 20..300 {
        heap.pop().unwrap();
    }
    assert_eq!(heap.top(), Ok(&301));
    assert_eq!(heap.len(), N - 300);

    while !heap.is_empty() {
        heap.pop().unwrap();
    }
    assert!(heap.is_empty());
}

/// Pushing then draining yields keys in the queue's order
fn test_drain_order<H: PriorityQueue<i32>>(mut heap: H, values: &[i32], descending: bool) {
    for &v in values {
        heap.push(v);
    }

    let mut drained = Vec::with_capacity(values.len());
    while let Ok(key) = heap.pop() {
        drained.push(key);
    }

    let mut expected = values.to_vec();
    expected.sort_unstable();
    if descending {
        expected.reverse();
    }
    assert_eq!(drained, expected);
}

/// After draining, the queue stays empty and keeps refusing top/pop
fn test_idempotent_emptiness<H: PriorityQueue<i32>>(mut heap: H) {
    for i in 0..100 {
        heap.push(i % 7);
    }
    while heap.pop().is_ok() {}

    for _ in 0..3 {
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.top(), Err(HeapError::EmptyStructure));
        assert_eq!(heap.pop(), Err(HeapError::EmptyStructure));
    }

    heap.push(42);
    assert_eq!(heap.top(), Ok(&42));
}

/// Test alternating push and pop
fn test_alternating_ops<H: PriorityQueue<i32>>(mut heap: H) {
    for i in 0..2000 {
        heap.push(i * 2);
        heap.push(i * 2 + 1);
        assert_eq!(heap.pop(), Ok(i));
    }
    assert_eq!(heap.len(), 2000);

    let mut last = i32::MIN;
    while let Ok(key) = heap.pop() {
        assert!(key >= last);
        last = key;
    }
}

/// len tracks pushes minus successful pops
fn test_len_tracks_operations<H: PriorityQueue<i32>>(mut heap: H) {
    let mut pushes = 0usize;
    let mut pops = 0usize;
    for round in 0..500 {
        for j in 0..(round % 5) {
            heap.push(round * 31 % 97 + j);
            pushes += 1;
        }
        if round % 3 != 0 && heap.pop().is_ok() {
            pops += 1;
        }
        assert_eq!(heap.len(), pushes - pops);
    }
}

#[test]
fn test_fibonacci_ascending_checkpoints() {
    test_ascending_checkpoints(FibonacciHeap::new());
}

#[test]
fn test_reference_ascending_checkpoints() {
    test_ascending_checkpoints(ReferenceMinQueue::default());
}

#[test]
fn test_fibonacci_reversed_comparator() {
    let mut heap = FibonacciHeap::with_comparator(MaxOrder);
    for i in 1..=1000 {
        heap.push(i);
    }
    assert_eq!(heap.top(), Ok(&1000));
    heap.pop().unwrap();
    assert_eq!(heap.top(), Ok(&999));
    heap.verify().unwrap();
}

#[test]
fn test_fibonacci_closure_comparator() {
    let mut heap = FibonacciHeap::with_comparator(|a: &i32, b: &i32| a.abs() < b.abs());
    for v in [-9, 4, -1, 7, 2, -3] {
        heap.push(v);
    }
    let drained: Vec<i32> = std::iter::from_fn(|| heap.pop().ok()).collect();
    assert_eq!(drained, vec![-1, 2, -3, 4, 7, -9]);
}

#[test]
fn test_fibonacci_drain_order() {
    let values: Vec<i32> = (0..3000).map(|i| (i * 7919) % 1009 - 500).collect();
    test_drain_order(FibonacciHeap::new(), &values, false);
    test_drain_order(FibonacciHeap::with_comparator(MaxOrder), &values, true);
}

#[test]
fn test_reference_drain_order() {
    let values: Vec<i32> = (0..3000).map(|i| (i * 7919) % 1009 - 500).collect();
    test_drain_order(ReferenceMinQueue::default(), &values, false);
    test_drain_order(ReferenceMaxQueue::default(), &values, true);
}

#[test]
fn test_fibonacci_idempotent_emptiness() {
    test_idempotent_emptiness(FibonacciHeap::new());
}

#[test]
fn test_fibonacci_alternating() {
    test_alternating_ops(FibonacciHeap::new());
}

#[test]
fn test_fibonacci_len_tracks_operations() {
    test_len_tracks_operations(FibonacciHeap::new());
}

#[test]
fn test_fibonacci_descending_input() {
    let mut heap = FibonacciHeap::new();
    for i in (0..5000).rev() {
        heap.push(i);
    }
    for i in 0..5000 {
        assert_eq!(heap.pop(), Ok(i));
        if i % 500 == 0 {
            heap.verify().unwrap();
        }
    }
}

#[test]
fn test_fibonacci_verify_after_every_pop() {
    let mut heap = FibonacciHeap::new();
    for i in 0..600 {
        heap.push((i * 37) % 101);
    }
    while !heap.is_empty() {
        heap.pop().unwrap();
        heap.verify().unwrap();
    }
}

#[test]
fn test_fibonacci_string_keys() {
    let mut heap = FibonacciHeap::new();
    for word in ["pear", "apple", "fig", "banana", "cherry", "apple"] {
        heap.push(word.to_string());
    }
    assert_eq!(heap.pop().as_deref(), Ok("apple"));
    assert_eq!(heap.pop().as_deref(), Ok("apple"));
    assert_eq!(heap.pop().as_deref(), Ok("banana"));
    assert_eq!(heap.len(), 3);
}

#[test]
fn test_fibonacci_large_priorities() {
    let mut heap = FibonacciHeap::new();
    heap.push(i64::MAX);
    heap.push(i64::MIN);
    heap.push(0);

    assert_eq!(heap.pop(), Ok(i64::MIN));
    assert_eq!(heap.pop(), Ok(0));
    assert_eq!(heap.pop(), Ok(i64::MAX));
}

#[test]
fn test_fibonacci_clear_large_heap() {
    let mut heap = FibonacciHeap::with_capacity(100_000);
    heap.extend(0..100_000);
    // One pop consolidates everything into a handful of deep trees
    heap.pop().unwrap();
    assert!(heap.root_count() <= 17);

    heap.clear();
    assert!(heap.is_empty());
    heap.verify().unwrap();
}

#[test]
fn test_fibonacci_drop_large_heap() {
    let mut heap = FibonacciHeap::new();
    heap.extend((0..200_000).rev());
    for _ in 0..10 {
        heap.pop().unwrap();
    }
    drop(heap);
}
