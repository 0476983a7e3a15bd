// model = "claude-opus-4-5"
// created = 2026-10-13
// modified = 2026-10-13
// driver = "Isaac Clayton"

//! In-order traversal with an explicit stack.

use std::iter::FusedIterator;

use smallvec::SmallVec;

use super::node::Arena;
use super::node::Idx;
use super::node::NULL;
use crate::compare::Value;

/// Ascending iterator over a set's values.
///
/// Holds a shared borrow of the set, so the set cannot change under it.
pub struct Iter<'a> {
    arena: &'a Arena,
    /// Nodes whose value has not been yielded yet; the top is the next one.
    stack: SmallVec<[Idx; 32]>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(arena: &'a Arena, root: Idx) -> Iter<'a> {
        let mut iter = Iter {
            arena,
            stack: SmallVec::new(),
        };
        iter.push_spine(root);
        return iter;
    }

    fn push_spine(&mut self, mut idx: Idx) {
        while idx != NULL {
            self.stack.push(idx);
            idx = self.arena.node(idx).left;
        }
    }

    /// Whether another value remains.
    pub fn has_next(&self) -> bool {
        return !self.stack.is_empty();
    }

    /// The next value, without consuming it.
    pub fn peek(&self) -> Option<Value> {
        return self.stack.last().map(|&idx| self.arena.node(idx).value);
    }
}

impl Iterator for Iter<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        let idx = self.stack.pop()?;
        let node = self.arena.node(idx);
        self.push_spine(node.right);
        return Some(node.value);
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return (self.stack.len(), Some(self.arena.len()));
    }
}

impl FusedIterator for Iter<'_> {}
