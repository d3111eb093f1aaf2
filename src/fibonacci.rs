//! Fibonacci Heap implementation
//!
//! A Fibonacci heap is a data structure for priority queue operations with:
//! - O(1) amortized push and top
//! - O(log n) amortized pop
//!
//! The structure consists of a collection of heap-ordered trees. Roots are linked
//! in a circular doubly linked list and the heap keeps the minimum root as the
//! list's anchor. Pushing only adds a singleton root; all restructuring is
//! deferred to `pop`, which promotes the children of the removed minimum to
//! roots and then consolidates the root list.
//!
//! Nodes live in a [`NodeArena`] and refer to each other by generational
//! [`NodeKey`](crate::arena::NodeKey), so the heap contains no `unsafe` code.

use crate::arena::{NodeArena, NodeKey};
use crate::consolidate::consolidate;
use crate::list::{detach, splice_list_after, walk};
use crate::traits::{Compare, HeapError, MinOrder, PriorityQueue};
use crate::verify::{self, InvariantViolation};
use std::fmt;
use tracing::debug;

/// Fibonacci Heap
///
/// `C` decides the order; with the default [`MinOrder`] the smallest key is
/// on top, with [`MaxOrder`](crate::traits::MaxOrder) the largest.
///
/// # Example
///
/// ```rust
/// use mergeable_heap::fibonacci::FibonacciHeap;
/// use mergeable_heap::traits::MaxOrder;
/// use mergeable_heap::PriorityQueue;
///
/// let mut heap = FibonacciHeap::with_comparator(MaxOrder);
/// heap.extend([3, 8, 1]);
/// assert_eq!(heap.top(), Ok(&8));
/// assert_eq!(heap.pop(), Ok(8));
/// assert_eq!(heap.pop(), Ok(3));
/// ```
pub struct FibonacciHeap<K, C = MinOrder> {
    nodes: NodeArena<K>,
    /// Minimum root, also the anchor of the root list
    min: Option<NodeKey>,
    len: usize,
    cmp: C,
}

impl<K: Ord> FibonacciHeap<K, MinOrder> {
    /// Creates an empty min-heap
    pub fn new() -> Self {
        Self::with_comparator(MinOrder)
    }

    /// Creates an empty min-heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, MinOrder)
    }
}

impl<K, C: Compare<K>> FibonacciHeap<K, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            nodes: NodeArena::new(),
            min: None,
            len: 0,
            cmp,
        }
    }

    /// Creates an empty heap ordered by `cmp` with room for `capacity` elements
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            nodes: NodeArena::with_capacity(capacity),
            min: None,
            len: 0,
            cmp,
        }
    }

    /// The comparator this heap was built with
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the top key, or `None` if the heap is empty
    pub fn peek(&self) -> Option<&K> {
        self.min.map(|min| self.nodes[min].key())
    }

    /// Walks the whole structure and checks its invariants: ring links,
    /// degrees, parent back-references, heap order, the minimum pointer, and
    /// that every live node is reachable exactly once.
    ///
    /// O(n); meant for tests and debugging.
    pub fn verify(&self) -> Result<(), InvariantViolation> {
        verify::check(&self.nodes, self.min, self.len, &self.cmp)
    }

    /// Number of trees in the root list. O(number of roots).
    pub fn root_count(&self) -> usize {
        self.min.map_or(0, |min| walk(&self.nodes, min).count())
    }

    /// Finds the smallest root of the list anchored at `anchor`
    fn smallest_root(&self, anchor: NodeKey) -> NodeKey {
        let mut min = anchor;
        for root in walk(&self.nodes, anchor) {
            if self.cmp.less(&self.nodes[root].key, &self.nodes[min].key) {
                min = root;
            }
        }
        min
    }

    /// Clears the parent back-reference of every node in the ring at `first`
    fn orphan_children(&mut self, first: NodeKey) {
        let mut child = first;
        loop {
            self.nodes[child].parent = None;
            child = self.nodes[child].next;
            if child == first {
                break;
            }
        }
    }
}

impl<K, C: Compare<K>> PriorityQueue<K> for FibonacciHeap<K, C> {
    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn len(&self) -> usize {
        self.len
    }

    fn push(&mut self, key: K) {
        let node = self.nodes.alloc(key);

        match self.min {
            Some(min) => {
                splice_list_after(&mut self.nodes, min, node);
                if self.cmp.less(&self.nodes[node].key, &self.nodes[min].key) {
                    self.min = Some(node);
                }
            }
            None => self.min = Some(node),
        }

        self.len += 1;
    }

    fn top(&self) -> Result<&K, HeapError> {
        self.peek().ok_or(HeapError::EmptyStructure)
    }

    fn pop(&mut self) -> Result<K, HeapError> {
        let min = self.min.ok_or(HeapError::EmptyStructure)?;

        if self.len == 1 {
            self.min = None;
            self.len = 0;
            return Ok(self.nodes.release(min).key);
        }

        // Promote the children to roots next to `min`. With a lone root this
        // turns its child list into the whole root list once `min` leaves.
        if let Some(first) = self.nodes[min].child.take() {
            self.orphan_children(first);
            splice_list_after(&mut self.nodes, min, first);
        }
        let anchor = self.nodes[min].next;
        detach(&mut self.nodes, min);

        let key = self.nodes.release(min).key;
        self.len -= 1;

        // consolidate walks from its start root, which must be a true minimum
        let start = self.smallest_root(anchor);
        self.min = Some(consolidate(&mut self.nodes, start, self.len, &self.cmp));

        Ok(key)
    }

    /// Releases every node with an explicit work-list, so deep trees cannot
    /// exhaust the call stack.
    fn clear(&mut self) {
        let mut pending: Vec<NodeKey> = match self.min.take() {
            Some(min) => walk(&self.nodes, min).collect(),
            None => Vec::new(),
        };

        let mut released = 0usize;
        while let Some(node) = pending.pop() {
            if let Some(child) = self.nodes[node].child {
                pending.extend(walk(&self.nodes, child));
            }
            self.nodes.release(node);
            released += 1;
        }

        debug_assert!(self.nodes.is_empty(), "clear left unreachable nodes");
        debug!(released, "cleared heap");
        self.len = 0;
    }
}

impl<K, C: Compare<K> + Default> Default for FibonacciHeap<K, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K, C: Compare<K>> Extend<K> for FibonacciHeap<K, C> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.push(key);
        }
    }
}

impl<K, C: Compare<K> + Default> FromIterator<K> for FibonacciHeap<K, C> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut heap = Self::default();
        heap.extend(iter);
        heap
    }
}

impl<K: fmt::Debug, C: Compare<K>> fmt::Debug for FibonacciHeap<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FibonacciHeap")
            .field("len", &self.len)
            .field("roots", &self.root_count())
            .field("top", &self.peek())
            .finish()
    }
}
