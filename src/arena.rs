//! Arena storage for heap nodes
//!
//! Every node of a heap lives in a single [`SlotMap`]. Links between nodes
//! (sibling ring, child anchor, parent back-reference) are [`NodeKey`]s rather
//! than pointers, so the cyclic structure of a Fibonacci heap needs neither
//! `unsafe` nor reference counting.
//!
//! # Characteristics
//! - Contiguous memory allocation (better cache locality than boxed nodes)
//! - Generational keys: a key to a released node never resolves to a node
//!   allocated later in the same slot
//! - Dropping the arena drops every node without recursing through the trees

use crate::degree::Degree;
use slotmap::{new_key_type, SlotMap};
use std::ops::{Index, IndexMut};

new_key_type! {
    /// Generational index of a node in a [`NodeArena`]
    pub struct NodeKey;
}

/// A heap node.
///
/// A node is always a member of exactly one circular list through `prev` and
/// `next`: the root list if `parent` is `None`, otherwise its parent's child
/// list. A node alone in its list links to itself.
#[derive(Debug)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) degree: Degree,
    pub(crate) parent: Option<NodeKey>,
    /// Anchor of this node's child list
    pub(crate) child: Option<NodeKey>,
    pub(crate) prev: NodeKey,
    pub(crate) next: NodeKey,
}

impl<K> Node<K> {
    /// The key stored in this node
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Whether this node is currently a root
    pub(crate) fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Owner of every node in a heap
#[derive(Debug)]
pub struct NodeArena<K> {
    slots: SlotMap<NodeKey, Node<K>>,
}

impl<K> NodeArena<K> {
    /// Creates an empty arena
    pub fn new() -> Self {
        Self {
            slots: SlotMap::with_key(),
        }
    }

    /// Creates an empty arena with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: SlotMap::with_capacity_and_key(capacity),
        }
    }

    /// Allocates a detached node: degree 0, no parent, no children, and a
    /// singleton sibling ring.
    pub fn alloc(&mut self, key: K) -> NodeKey {
        self.slots.insert_with_key(|this| Node {
            key,
            degree: 0,
            parent: None,
            child: None,
            prev: this,
            next: this,
        })
    }

    /// Releases a node and returns it.
    ///
    /// The caller must already have unlinked it from every list it was part
    /// of; the arena does not repair neighbours.
    ///
    /// # Panics
    ///
    /// Panics if `node` was already released.
    pub fn release(&mut self, node: NodeKey) -> Node<K> {
        match self.slots.remove(node) {
            Some(released) => released,
            None => panic!("release of stale node key {node:?}"),
        }
    }

    /// Returns the node for `node`, or `None` if it was released
    pub fn get(&self, node: NodeKey) -> Option<&Node<K>> {
        self.slots.get(node)
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no node is live
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<K> Default for NodeArena<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Index<NodeKey> for NodeArena<K> {
    type Output = Node<K>;

    #[inline]
    fn index(&self, node: NodeKey) -> &Node<K> {
        &self.slots[node]
    }
}

impl<K> IndexMut<NodeKey> for NodeArena<K> {
    #[inline]
    fn index_mut(&mut self, node: NodeKey) -> &mut Node<K> {
        &mut self.slots[node]
    }
}
