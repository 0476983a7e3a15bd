// model = "claude-opus-4-5"
// created = 2026-10-12
// modified = 2026-10-18
// driver = "Isaac Clayton"

//! Ordered set of values, balanced as a treap.
//!
//! # Structure
//!
//! Each node carries a value and a random priority. The tree is a binary
//! search tree on values (under the caller's `Comparator`) and a max-heap
//! on priorities. Because priorities are independent draws, the expected
//! height is O(log n) without any rotation logic: every mutation is a
//! `split` followed by one or two `merge`s.
//!
//! ```text
//! insert(v):   root --split(v)--> lo (<= v), hi (> v)
//!              lo = merge(lo, new)      if v not already in lo
//!              root = merge(lo, hi)
//! ```
//!
//! Nodes live in an append-only arena and are addressed by index. Nothing
//! is ever removed, so `len()` is the number of nodes ever created.
//!
//! # Operations
//!
//! | Operation     | Expected cost          |
//! |---------------|------------------------|
//! | `insert`      | O(log n)               |
//! | `find`        | O(log n)               |
//! | `minimal`     | O(log n)               |
//! | `maximal`     | O(log n)               |
//! | `len`         | O(1)                   |
//! | `iter`        | O(n) total             |
//! | `union`       | O(min(n, m) log(n+m))  |
//! | `union_merge` | O(n + m)               |
//! | `clone`       | O(n)                   |

mod engine;
mod iter;
mod node;

use std::cmp::Ordering;

use rand_core::RngCore;
use thiserror::Error;
use tracing::debug;

use crate::compare::Comparator;
use crate::compare::Value;
use crate::priority::Priorities;
pub use iter::Iter;
use node::Arena;
use node::Idx;
use node::NULL;

/// Construction options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Arena slots to reserve up front.
    pub capacity: usize,
    /// Seed for reproducible priorities. `None` seeds from the OS.
    pub seed: Option<u64>,
}

/// A structural problem found by `OrderedSet::validate`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// In-order traversal is not strictly ascending.
    #[error("value {after} does not sort after {before}")]
    Order { before: Value, after: Value },
    /// A child outranks its parent.
    #[error("child {child} has a higher priority than parent {parent}")]
    Heap { parent: Value, child: Value },
    /// Not every arena node hangs off the root exactly once.
    #[error("{reachable} nodes reachable from the root, arena holds {len}")]
    Reachable { reachable: usize, len: usize },
}

/// An ordered set of values, ordered by `C` and balanced with priorities
/// drawn from `R`.
///
/// Nodes are addressed by `u32`, so one set holds at most `u32::MAX - 1`
/// values; inserting past that panics.
///
/// Cloning copies the generator too. With the default `Priorities`, a
/// clone and its source go on to draw the same priority sequence, so the
/// same inserts on both give the same tree shape.
#[derive(Clone)]
pub struct OrderedSet<C, R = Priorities> {
    arena: Arena,
    root: Idx,
    cmp: C,
    rng: R,
}

impl<C: Comparator> OrderedSet<C, Priorities> {
    /// An empty set with OS-seeded priorities.
    pub fn new(cmp: C) -> Self {
        return Self::with_capacity(0, cmp);
    }

    /// An empty set with room for `capacity` values before reallocating.
    pub fn with_capacity(capacity: usize, cmp: C) -> Self {
        return Self::with_source(capacity, cmp, Priorities::from_entropy());
    }

    /// An empty set built from `options`.
    pub fn with_options(options: Options, cmp: C) -> Self {
        let rng = match options.seed {
            Some(seed) => Priorities::seeded(seed),
            None => Priorities::from_entropy(),
        };
        return Self::with_source(options.capacity, cmp, rng);
    }
}

impl<C: Comparator, R: RngCore> OrderedSet<C, R> {
    /// An empty set drawing priorities from `rng`.
    pub fn with_source(capacity: usize, cmp: C, rng: R) -> Self {
        return OrderedSet {
            arena: Arena::with_capacity(capacity),
            root: NULL,
            cmp,
            rng,
        };
    }

    /// Number of values in the set.
    pub fn len(&self) -> usize {
        return self.arena.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.arena.len() == 0;
    }

    pub fn comparator(&self) -> &C {
        return &self.cmp;
    }

    /// Insert `value`. Returns `false`, leaving the set untouched, if an
    /// equal value is already present.
    pub fn insert(&mut self, value: Value) -> bool {
        let (mut lo, hi) = engine::split(&mut self.arena, &self.cmp, self.root, value);

        let created = !self.contains_in(lo, value);
        if created {
            let priority = self.rng.next_u64();
            let leaf = self.arena.push(value, priority);
            lo = engine::merge(&mut self.arena, lo, leaf);
        }

        self.root = engine::merge(&mut self.arena, lo, hi);
        return created;
    }

    /// Whether a value equal to `value` is stored.
    pub fn contains(&self, value: Value) -> bool {
        return self.contains_in(self.root, value);
    }

    fn contains_in(&self, mut idx: Idx, value: Value) -> bool {
        while idx != NULL {
            let node = self.arena.node(idx);
            idx = match self.cmp.compare(value, node.value) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return true,
            };
        }
        return false;
    }

    /// Look up the stored value that compares equal to `key`.
    pub fn find(&self, key: &C::Key) -> Option<Value> {
        let mut idx = self.root;
        while idx != NULL {
            let node = self.arena.node(idx);
            idx = match self.cmp.compare_key(key, node.value) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(node.value),
            };
        }
        return None;
    }

    /// The smallest value.
    pub fn minimal(&self) -> Option<Value> {
        return self.descend(|node| node.left);
    }

    /// The largest value.
    pub fn maximal(&self) -> Option<Value> {
        return self.descend(|node| node.right);
    }

    fn descend(&self, step: impl Fn(&node::Node) -> Idx) -> Option<Value> {
        if self.root == NULL {
            return None;
        }
        let mut idx = self.root;
        loop {
            let node = self.arena.node(idx);
            let next = step(node);
            if next == NULL {
                return Some(node.value);
            }
            idx = next;
        }
    }

    /// Values in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        return Iter::new(&self.arena, self.root);
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.root, 1usize)];
        while let Some((idx, depth)) = stack.pop() {
            if idx == NULL {
                continue;
            }
            deepest = deepest.max(depth);
            let node = self.arena.node(idx);
            stack.push((node.left, depth + 1));
            stack.push((node.right, depth + 1));
        }
        return deepest;
    }

    /// Check the tree's structure: every node reachable exactly once,
    /// priorities heap-ordered, values strictly ascending in order.
    ///
    /// Never called by the set itself. A comparator that is not a total
    /// order, or a `union_merge` of overlapping sets, shows up here.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let len = self.arena.len();
        let mut reachable = 0usize;
        let mut stack = vec![self.root];
        while let Some(idx) = stack.pop() {
            if idx == NULL {
                continue;
            }
            reachable += 1;
            if reachable > len {
                break;
            }
            let node = *self.arena.node(idx);
            for child in [node.left, node.right] {
                if child == NULL {
                    continue;
                }
                let child = self.arena.node(child);
                if child.priority > node.priority {
                    return Err(InvariantViolation::Heap {
                        parent: node.value,
                        child: child.value,
                    });
                }
            }
            stack.push(node.left);
            stack.push(node.right);
        }
        if reachable != len {
            return Err(InvariantViolation::Reachable { reachable, len });
        }

        let mut values = self.iter();
        let Some(mut before) = values.next() else {
            return Ok(());
        };
        for after in values {
            if self.cmp.compare(before, after) != Ordering::Less {
                return Err(InvariantViolation::Order { before, after });
            }
            before = after;
        }
        return Ok(());
    }
}

impl<C: Comparator + Clone, R: RngCore + Clone> OrderedSet<C, R> {
    /// A new set holding every value of `self` and `other`; equal values
    /// are kept once.
    ///
    /// The larger side is cloned (comparator and generator included) and
    /// the smaller side re-inserted into it.
    pub fn union(&self, other: &Self) -> Self {
        let (larger, smaller) = if self.len() >= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        let mut result = larger.clone();
        for value in smaller.iter() {
            result.insert(value);
        }

        debug!(left = self.len(), right = other.len(), result = result.len(), "union");
        return result;
    }

    /// A new set whose arena is `self`'s followed by `other`'s, with every
    /// value from `other` shifted up by `self.len()`.
    ///
    /// Nothing is re-inserted and nothing is deduplicated. The caller must
    /// guarantee that, under `self`'s comparator, every shifted value from
    /// `other` sorts after every value in `self`. That is not checked;
    /// `validate` will report a broken result.
    ///
    /// Panics if a shifted value would pass `Value::MAX`, or if the
    /// combined set would exceed the node ceiling.
    pub fn union_merge(&self, other: &Self) -> Self {
        let mut arena = Arena::with_capacity(self.arena.len() + other.arena.len());
        arena.append_shifted(&self.arena);
        let shift = arena.append_shifted(&other.arena);

        let hi = node::shifted(other.root, shift);
        let root = engine::merge(&mut arena, self.root, hi);

        debug!(left = self.len(), right = other.len(), shift, "union_merge");
        return OrderedSet {
            arena,
            root,
            cmp: self.cmp.clone(),
            rng: self.rng.clone(),
        };
    }
}

impl<'a, C: Comparator, R: RngCore> IntoIterator for &'a OrderedSet<C, R> {
    type Item = Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        return self.iter();
    }
}

impl<C: Comparator, R: RngCore> Extend<Value> for OrderedSet<C, R> {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, values: I) {
        for value in values {
            self.insert(value);
        }
    }
}

impl<C: Comparator, R: RngCore> std::fmt::Debug for OrderedSet<C, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return f.debug_set().entries(self.iter()).finish();
    }
}
