//! Circular doubly-linked list primitives over a [`NodeArena`].
//!
//! The same operations serve the root list and every child list. In a
//! circular list:
//! - A single node links to itself (both `next` and `prev`)
//! - There is no head or tail; any member can serve as the anchor
//! - Splicing two rings together is O(1)
//! - Iteration wraps around, so a walk stops when it returns to its anchor
//!
//! All functions here only touch `prev`/`next`. Parent back-references and
//! child anchors are the caller's business.

use crate::arena::{NodeArena, NodeKey};
use std::iter::FusedIterator;

/// Makes `x` a ring of one: both `prev` and `next` point back at `x`.
///
/// Any former neighbours are not repaired; use [`detach`] for a linked node.
pub fn make_singleton<K>(arena: &mut NodeArena<K>, x: NodeKey) {
    arena[x].prev = x;
    arena[x].next = x;
}

/// Removes `x` from the list it is linked into, repairing its former
/// neighbours. Afterwards `x` is a singleton ring.
///
/// Returns `true` if `x` was the only element (the list is now gone),
/// `false` if other nodes remain.
pub fn detach<K>(arena: &mut NodeArena<K>, x: NodeKey) -> bool {
    let prev = arena[x].prev;
    let next = arena[x].next;

    if next == x {
        return true;
    }

    arena[prev].next = next;
    arena[next].prev = prev;
    make_singleton(arena, x);
    false
}

/// Inserts the whole ring containing `head` immediately after `anchor`.
///
/// ```text
/// before:  anchor -> a_next          head -> ... -> tail -> head
/// after:   anchor -> head -> ... -> tail -> a_next
/// ```
///
/// `anchor` and `head` must belong to different rings; splicing a ring into
/// itself would split it instead.
pub fn splice_list_after<K>(arena: &mut NodeArena<K>, anchor: NodeKey, head: NodeKey) {
    debug_assert_ne!(anchor, head, "splice of a ring into itself");

    let a_next = arena[anchor].next;
    let tail = arena[head].prev;

    arena[anchor].next = head;
    arena[head].prev = anchor;
    arena[tail].next = a_next;
    arena[a_next].prev = tail;
}

/// Walks the ring starting at `anchor`, yielding each member once and
/// stopping before it would return to `anchor`.
///
/// The walk borrows the arena, so the ring cannot change underneath it.
pub fn walk<K>(arena: &NodeArena<K>, anchor: NodeKey) -> Walk<'_, K> {
    Walk {
        arena,
        anchor,
        next: Some(anchor),
    }
}

/// Counts the members of the ring containing `anchor`. O(n).
pub fn ring_len<K>(arena: &NodeArena<K>, anchor: NodeKey) -> usize {
    walk(arena, anchor).count()
}

/// Iterator returned by [`walk`]
pub struct Walk<'a, K> {
    arena: &'a NodeArena<K>,
    anchor: NodeKey,
    next: Option<NodeKey>,
}

impl<K> Iterator for Walk<'_, K> {
    type Item = NodeKey;

    fn next(&mut self) -> Option<NodeKey> {
        let current = self.next?;
        let following = self.arena[current].next;
        self.next = (following != self.anchor).then_some(following);
        Some(current)
    }
}

impl<K> FusedIterator for Walk<'_, K> {}
