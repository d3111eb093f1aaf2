//! Reference priority queue shared by the integration tests
//!
//! Wraps `std::collections::BinaryHeap` behind the crate's `PriorityQueue`
//! trait so the same helpers can drive both the Fibonacci heap and a queue
//! whose behaviour is known to be right.

#![allow(dead_code)]

use mergeable_heap::{HeapError, PriorityQueue};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Min-ordered reference queue
#[derive(Debug, Default)]
pub struct ReferenceMinQueue {
    inner: BinaryHeap<Reverse<i32>>,
}

impl PriorityQueue<i32> for ReferenceMinQueue {
    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn push(&mut self, key: i32) {
        self.inner.push(Reverse(key));
    }

    fn top(&self) -> Result<&i32, HeapError> {
        self.inner
            .peek()
            .map(|Reverse(key)| key)
            .ok_or(HeapError::EmptyStructure)
    }

    fn pop(&mut self) -> Result<i32, HeapError> {
        self.inner
            .pop()
            .map(|Reverse(key)| key)
            .ok_or(HeapError::EmptyStructure)
    }

    fn clear(&mut self) {
        self.inner.clear();
    }
}

/// Max-ordered reference queue
#[derive(Debug, Default)]
pub struct ReferenceMaxQueue {
    inner: BinaryHeap<i32>,
}

impl PriorityQueue<i32> for ReferenceMaxQueue {
    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn push(&mut self, key: i32) {
        self.inner.push(key);
    }

    fn top(&self) -> Result<&i32, HeapError> {
        self.inner.peek().ok_or(HeapError::EmptyStructure)
    }

    fn pop(&mut self) -> Result<i32, HeapError> {
        self.inner.pop().ok_or(HeapError::EmptyStructure)
    }

    fn clear(&mut self) {
        self.inner.clear();
    }
}

/// One step of a randomly generated workload
#[derive(Debug, Clone, Copy)]
pub enum Op {
    Push(i32),
    Pop,
    Top,
}

/// What a queue reported for one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observed {
    Pushed { len: usize },
    Popped { key: Result<i32, HeapError>, len: usize },
    Top { key: Result<i32, HeapError>, len: usize },
}

/// Runs `ops` against `queue`, recording every observable result
pub fn run<Q: PriorityQueue<i32>>(queue: &mut Q, ops: &[Op]) -> Vec<Observed> {
    ops.iter()
        .map(|op| match *op {
            Op::Push(key) => {
                queue.push(key);
                Observed::Pushed { len: queue.len() }
            }
            Op::Pop => {
                let key = queue.pop();
                Observed::Popped {
                    key,
                    len: queue.len(),
                }
            }
            Op::Top => Observed::Top {
                key: queue.top().copied(),
                len: queue.len(),
            },
        })
        .collect()
}
