// model = "claude-opus-4-5"
// created = 2026-10-12
// modified = 2026-10-18
// driver = "Isaac Clayton"

//! Node arena.
//!
//! Nodes live in a `Vec` and refer to each other by position. There is no
//! free list: the arena only grows, so an index handed out stays valid for
//! the life of the set.

use crate::compare::Value;

/// Node index type. u32 saves space vs usize on 64-bit.
pub(crate) type Idx = u32;

/// Null index marker, the empty subtree.
pub(crate) const NULL: Idx = Idx::MAX;

/// Most nodes one arena can hold; every index below `NULL` is usable.
const MAX_NODES: usize = NULL as usize;

/// A single treap node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Node {
    /// The opaque value the caller's comparator orders.
    pub value: Value,
    /// Heap priority, drawn once at creation.
    pub priority: u64,
    pub left: Idx,
    pub right: Idx,
}

impl Node {
    pub fn leaf(value: Value, priority: u64) -> Node {
        return Node {
            value,
            priority,
            left: NULL,
            right: NULL,
        };
    }
}

/// Append-only backing store of nodes.
#[derive(Clone, Debug, Default)]
pub(crate) struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    pub fn with_capacity(capacity: usize) -> Arena {
        return Arena {
            nodes: Vec::with_capacity(capacity),
        };
    }

    pub fn len(&self) -> usize {
        return self.nodes.len();
    }

    pub fn node(&self, idx: Idx) -> &Node {
        return &self.nodes[idx as usize];
    }

    pub fn node_mut(&mut self, idx: Idx) -> &mut Node {
        return &mut self.nodes[idx as usize];
    }

    /// Append a childless node, returning its index.
    ///
    /// Panics once the arena already holds `MAX_NODES`.
    pub fn push(&mut self, value: Value, priority: u64) -> Idx {
        let idx = index_for(self.nodes.len());
        self.nodes.push(Node::leaf(value, priority));
        return idx;
    }

    /// Append a copy of every node in `other`, shifting both its values
    /// and its child links by this arena's length before the call.
    /// Returns that shift.
    ///
    /// Panics if the combined arena would exceed `MAX_NODES`, or if a
    /// shifted value would pass `Value::MAX`.
    pub fn append_shifted(&mut self, other: &Arena) -> Idx {
        let shift = index_for(self.nodes.len());
        if let Some(last) = (self.nodes.len() + other.nodes.len()).checked_sub(1) {
            index_for(last);
        }
        self.nodes.reserve(other.nodes.len());
        for node in &other.nodes {
            let value = node.value.checked_add(Value::from(shift));
            self.nodes.push(Node {
                value: value.expect("union_merge shifted a value past Value::MAX"),
                priority: node.priority,
                left: shifted(node.left, shift),
                right: shifted(node.right, shift),
            });
        }
        return shift;
    }
}

/// The index the node at position `len` gets.
fn index_for(len: usize) -> Idx {
    return Idx::try_from(len)
        .ok()
        .filter(|_| len < MAX_NODES)
        .expect("arena holds at most MAX_NODES nodes");
}

/// Offset a link by `shift`, leaving the sentinel alone.
pub(crate) fn shifted(idx: Idx, shift: Idx) -> Idx {
    if idx == NULL {
        return NULL;
    }
    return idx + shift;
}
