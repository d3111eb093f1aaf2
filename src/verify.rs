//! Structural invariant checks
//!
//! [`check`] walks every tree of a heap with an explicit work-list and
//! reports the first broken invariant it finds. It is O(n) and exists for
//! tests and debugging; no heap operation calls it.

use crate::arena::{NodeArena, NodeKey};
use crate::degree::Degree;
use crate::traits::Compare;
use thiserror::Error;

/// A broken structural invariant found by [`FibonacciHeap::verify`](crate::fibonacci::FibonacciHeap::verify)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// The element count disagrees with the nodes reachable from the root list
    #[error("heap records {recorded} elements but {reachable} nodes are reachable")]
    SizeMismatch { recorded: usize, reachable: usize },
    /// Some live nodes cannot be reached from the root list
    #[error("arena holds {live} live nodes but only {reachable} are reachable")]
    Unreachable { live: usize, reachable: usize },
    /// A ring does not close, or a `next`/`prev` pair does not round-trip
    #[error("circular list links are broken")]
    BrokenLinks,
    /// A node's degree differs from the length of its child list
    #[error("node records degree {recorded} but has {actual} children")]
    DegreeMismatch { recorded: Degree, actual: usize },
    /// A child's parent back-reference does not name the node it hangs under
    #[error("child does not point back at its parent")]
    ParentMismatch,
    /// A member of the root list has a parent back-reference
    #[error("root has a parent back-reference")]
    RootHasParent,
    /// A child orders strictly before its parent
    #[error("child orders before its parent")]
    HeapOrder,
    /// A root orders strictly before the recorded minimum
    #[error("recorded minimum is not the smallest root")]
    StaleMinimum,
}

/// Collects the ring at `anchor`, failing if it does not close within
/// `limit` steps or if any link does not round-trip.
fn ring<K>(
    arena: &NodeArena<K>,
    anchor: NodeKey,
    limit: usize,
) -> Result<Vec<NodeKey>, InvariantViolation> {
    let mut members = Vec::new();
    let mut current = anchor;
    loop {
        let node = arena.get(current).ok_or(InvariantViolation::BrokenLinks)?;
        let next = arena.get(node.next).ok_or(InvariantViolation::BrokenLinks)?;
        if next.prev != current {
            return Err(InvariantViolation::BrokenLinks);
        }
        members.push(current);
        if members.len() > limit {
            return Err(InvariantViolation::BrokenLinks);
        }
        current = node.next;
        if current == anchor {
            return Ok(members);
        }
    }
}

/// Checks every invariant of the heap described by `arena`, `min` and `len`
pub fn check<K, C: Compare<K>>(
    arena: &NodeArena<K>,
    min: Option<NodeKey>,
    len: usize,
    cmp: &C,
) -> Result<(), InvariantViolation> {
    let Some(min) = min else {
        if len != 0 {
            return Err(InvariantViolation::SizeMismatch {
                recorded: len,
                reachable: 0,
            });
        }
        if !arena.is_empty() {
            return Err(InvariantViolation::Unreachable {
                live: arena.len(),
                reachable: 0,
            });
        }
        return Ok(());
    };

    let limit = arena.len();
    let roots = ring(arena, min, limit)?;
    for &root in &roots {
        if !arena[root].is_root() {
            return Err(InvariantViolation::RootHasParent);
        }
        if cmp.less(&arena[root].key, &arena[min].key) {
            return Err(InvariantViolation::StaleMinimum);
        }
    }

    let mut reachable = 0usize;
    let mut pending = roots;
    while let Some(node) = pending.pop() {
        reachable += 1;
        if reachable > limit {
            return Err(InvariantViolation::BrokenLinks);
        }

        let parent = &arena[node];
        let children = match parent.child {
            Some(first) => ring(arena, first, limit)?,
            None => Vec::new(),
        };
        if children.len() != usize::from(parent.degree) {
            return Err(InvariantViolation::DegreeMismatch {
                recorded: parent.degree,
                actual: children.len(),
            });
        }
        for &child in &children {
            if arena[child].parent != Some(node) {
                return Err(InvariantViolation::ParentMismatch);
            }
            if cmp.less(&arena[child].key, &parent.key) {
                return Err(InvariantViolation::HeapOrder);
            }
        }
        pending.extend(children);
    }

    if reachable != len {
        return Err(InvariantViolation::SizeMismatch {
            recorded: len,
            reachable,
        });
    }
    if reachable != arena.len() {
        return Err(InvariantViolation::Unreachable {
            live: arena.len(),
            reachable,
        });
    }
    Ok(())
}
