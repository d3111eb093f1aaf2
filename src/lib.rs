//! Mergeable priority queue for Rust
//!
//! This crate provides a Fibonacci heap: a priority queue built from
//! heap-ordered trees whose roots, and the children of every node, form
//! circular doubly-linked lists.
//!
//! # Features
//!
//! - **O(1) amortized push and top**: pushing only adds a singleton root
//! - **O(log n) amortized pop**: extraction promotes the minimum's children
//!   and consolidates the root list to at most one tree per degree
//! - **Injected ordering**: any [`Compare`] implementation or
//!   `Fn(&K, &K) -> bool` closure, ascending by default
//! - **No `unsafe`**: nodes live in a generational arena and link to each
//!   other by key
//!
//! # Example
//!
//! ```rust
//! use mergeable_heap::fibonacci::FibonacciHeap;
//! use mergeable_heap::{HeapError, PriorityQueue};
//!
//! let mut heap = FibonacciHeap::new();
//! heap.push(5);
//! heap.push(3);
//! heap.push(8);
//!
//! assert_eq!(heap.top(), Ok(&3));
//! assert_eq!(heap.pop(), Ok(3));
//! assert_eq!(heap.len(), 2);
//!
//! heap.clear();
//! assert_eq!(heap.pop(), Err(HeapError::EmptyStructure));
//! ```

pub mod arena;
pub mod consolidate;
pub mod degree;
pub mod fibonacci;
pub mod list;
pub mod traits;
pub mod verify;

// Re-export the main traits for convenience
pub use traits::{Compare, HeapError, MaxOrder, MinOrder, PriorityQueue};
