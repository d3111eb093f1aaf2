//! Common traits for the priority queue
//!
//! This module provides the seams the heap is built around:
//!
//! - [`PriorityQueue`]: the public operation set (`push`, `top`, `pop`, `len`,
//!   `is_empty`, `clear`)
//! - [`Compare`]: the ordering capability injected at construction
//! - [`HeapError`]: the single failure a queue operation can report

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// `top` or `pop` was called on a heap holding no elements
    #[error("operation requires a non-empty heap")]
    EmptyStructure,
}

/// Ordering policy for a heap.
///
/// `less(a, b)` returns true when `a` must leave the queue before `b`. The
/// relation must be a strict weak ordering: irreflexive, transitive, and with
/// transitive incomparability. Keys for which neither `less(a, b)` nor
/// `less(b, a)` holds are treated as equal.
///
/// Any closure `Fn(&K, &K) -> bool` is a comparator:
///
/// ```rust
/// use mergeable_heap::fibonacci::FibonacciHeap;
/// use mergeable_heap::PriorityQueue;
///
/// let mut heap = FibonacciHeap::with_comparator(|a: &(u8, char), b: &(u8, char)| a.0 > b.0);
/// heap.push((1, 'a'));
/// heap.push((9, 'z'));
/// assert_eq!(heap.top(), Ok(&(9, 'z')));
/// ```
pub trait Compare<K> {
    /// Returns true if `a` is ordered strictly before `b`
    fn less(&self, a: &K, b: &K) -> bool;
}

/// Ascending order: the smallest key is on top. This is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinOrder;

/// Descending order: the largest key is on top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxOrder;

impl<K: Ord> Compare<K> for MinOrder {
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        a < b
    }
}

impl<K: Ord> Compare<K> for MaxOrder {
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        a > b
    }
}

impl<K, F> Compare<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        self(a, b)
    }
}

/// Base trait for priority queue data structures
///
/// Unlike `BinaryHeap`, which is a max-heap over `Ord`, the order here is
/// whatever the queue's [`Compare`] says; with the default [`MinOrder`] the
/// smallest key is on top.
///
/// # Example
///
/// ```rust
/// use mergeable_heap::PriorityQueue;
/// use mergeable_heap::fibonacci::FibonacciHeap;
///
/// let mut heap = FibonacciHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.top(), Ok(&1));
/// assert_eq!(heap.pop(), Ok(1));
/// assert_eq!(heap.len(), 2);
/// ```
pub trait PriorityQueue<K> {
    /// Returns true if the queue holds no elements
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Inserts a key
    ///
    /// # Time Complexity
    /// O(1) amortized for the Fibonacci heap.
    fn push(&mut self, key: K);

    /// Returns the key that would be removed by the next `pop`
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyStructure`] if the queue is empty.
    ///
    /// # Time Complexity
    /// O(1)
    fn top(&self) -> Result<&K, HeapError>;

    /// Removes and returns the top key
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyStructure`] if the queue is empty.
    ///
    /// # Time Complexity
    /// O(log n) amortized for the Fibonacci heap.
    fn pop(&mut self) -> Result<K, HeapError>;

    /// Removes every element
    fn clear(&mut self);
}
