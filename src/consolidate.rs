//! Consolidation engine
//!
//! After the minimum is extracted, the root list can hold up to
//! `old_roots + degree(min)` trees. Consolidation takes the roots out one at
//! a time and links trees of equal degree until at most one tree of each
//! degree remains, which bounds the root count by `O(log n)`.

use crate::arena::{NodeArena, NodeKey};
use crate::degree::{checked_increment, max_degree_bound};
use crate::list::{detach, splice_list_after, walk};
use crate::traits::Compare;
use smallvec::{smallvec, SmallVec};
use tracing::{debug, trace};

/// Map from degree to the one tree currently claiming that degree.
///
/// Sized up front from the heap length with [`max_degree_bound`] and grown on
/// demand, so a degree outside the initial estimate never indexes out of
/// bounds.
#[derive(Debug)]
pub struct DegreeTable {
    buckets: SmallVec<[Option<NodeKey>; 32]>,
}

impl DegreeTable {
    /// Creates an empty table for a heap of `len` elements
    pub fn for_len(len: usize) -> Self {
        Self {
            buckets: smallvec![None; max_degree_bound(len)],
        }
    }

    /// Number of buckets currently allocated
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Removes and returns the tree claiming `degree`, if any
    pub fn take(&mut self, degree: usize) -> Option<NodeKey> {
        self.buckets.get_mut(degree).and_then(Option::take)
    }

    /// Records `root` as the tree of `degree`. The bucket must be free.
    pub fn put(&mut self, degree: usize, root: NodeKey) {
        if degree >= self.buckets.len() {
            self.buckets.resize(degree + 1, None);
        }
        debug_assert!(self.buckets[degree].is_none(), "degree {degree} claimed twice");
        self.buckets[degree] = Some(root);
    }

    /// Consumes the table, yielding the claimed trees in degree order
    pub fn into_roots(self) -> impl Iterator<Item = NodeKey> {
        self.buckets.into_iter().flatten()
    }
}

/// Makes the root `child` a child of the root `parent`.
///
/// `child` is detached from whatever ring it is in and spliced into
/// `parent`'s child list, which is created if `parent` had no children. The
/// children of both nodes are left untouched.
pub fn link<K>(arena: &mut NodeArena<K>, child: NodeKey, parent: NodeKey) {
    debug_assert_ne!(child, parent);

    detach(arena, child);
    arena[child].parent = Some(parent);

    match arena[parent].child {
        Some(anchor) => splice_list_after(arena, anchor, child),
        None => arena[parent].child = Some(child),
    }

    let child_degree = arena[child].degree;
    let parent_degree = checked_increment(arena[parent].degree);
    arena[parent].degree = parent_degree;
    trace!(child_degree, parent_degree, "linked tree under new parent");
}

/// Rebuilds the root list containing `start` so that no two roots share a
/// degree, and returns the new minimum root.
///
/// `len` is the number of elements in the heap and only sizes the degree
/// table. When two trees collide, the one whose root does not compare less
/// becomes the child; on a tie the tree taken from the root list most
/// recently stays the parent.
pub fn consolidate<K, C: Compare<K>>(
    arena: &mut NodeArena<K>,
    start: NodeKey,
    len: usize,
    cmp: &C,
) -> NodeKey {
    let mut table = DegreeTable::for_len(len);
    let mut roots_before = 0usize;
    let mut current = start;

    let placed = loop {
        let following = arena[current].next;
        let was_last = detach(arena, current);
        roots_before += 1;

        let mut x = current;
        let mut degree = usize::from(arena[x].degree);
        while let Some(mut y) = table.take(degree) {
            if cmp.less(&arena[y].key, &arena[x].key) {
                std::mem::swap(&mut x, &mut y);
            }
            link(arena, y, x);
            degree += 1;
        }
        table.put(degree, x);

        if was_last {
            break x;
        }
        current = following;
    };

    let buckets = table.capacity();

    // `placed` is still in the table and becomes the anchor of the new list
    let mut min = placed;
    for root in table.into_roots() {
        arena[root].parent = None;
        if root == placed {
            continue;
        }
        splice_list_after(arena, placed, root);
        if cmp.less(&arena[root].key, &arena[min].key) {
            min = root;
        }
    }

    debug!(
        roots_before,
        roots_after = walk(arena, min).count(),
        buckets,
        "consolidated root list"
    );
    min
}
