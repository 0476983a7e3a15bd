// model = "claude-opus-4-5"
// created = 2026-10-12
// modified = 2026-10-14
// driver = "Isaac Clayton"

//! Split and merge, the two primitives every set operation is built from.
//!
//! Neither allocates. Both only rewrite child links of nodes already in
//! the arena, and both recurse to the height of the trees involved, which
//! is O(log n) in expectation.

use std::cmp::Ordering;

use super::node::Arena;
use super::node::Idx;
use super::node::NULL;
use crate::compare::Comparator;
use crate::compare::Value;

/// Split the subtree at `root` into `(lo, hi)`: `lo` holds every value that
/// compares less than or equal to `key`, `hi` everything greater.
pub(crate) fn split<C: Comparator>(arena: &mut Arena, cmp: &C, root: Idx, key: Value) -> (Idx, Idx) {
    if root == NULL {
        return (NULL, NULL);
    }

    let node = *arena.node(root);
    if cmp.compare(key, node.value) == Ordering::Less {
        // root and its right subtree are all greater than key
        let (lo, hi) = split(arena, cmp, node.left, key);
        arena.node_mut(root).left = hi;
        return (lo, root);
    }

    let (lo, hi) = split(arena, cmp, node.right, key);
    arena.node_mut(root).right = lo;
    return (root, hi);
}

/// Join two subtrees where everything in `lo` sorts at or before everything
/// in `hi`. The caller guarantees that ordering.
///
/// The root with the strictly greater priority wins; on a tie `hi` wins.
pub(crate) fn merge(arena: &mut Arena, lo: Idx, hi: Idx) -> Idx {
    if lo == NULL {
        return hi;
    }
    if hi == NULL {
        return lo;
    }

    if arena.node(lo).priority > arena.node(hi).priority {
        let right = arena.node(lo).right;
        let merged = merge(arena, right, hi);
        arena.node_mut(lo).right = merged;
        return lo;
    }

    let left = arena.node(hi).left;
    let merged = merge(arena, lo, left);
    arena.node_mut(hi).left = merged;
    return hi;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Natural;

    fn inorder(arena: &Arena, root: Idx, out: &mut Vec<Value>) {
        if root == NULL {
            return;
        }
        let node = *arena.node(root);
        inorder(arena, node.left, out);
        out.push(node.value);
        inorder(arena, node.right, out);
    }

    fn values(arena: &Arena, root: Idx) -> Vec<Value> {
        let mut out = Vec::new();
        inorder(arena, root, &mut out);
        return out;
    }

    /// Builds a treap by merging singletons in ascending value order.
    fn build(arena: &mut Arena, items: &[(Value, u64)]) -> Idx {
        let mut root = NULL;
        for &(value, priority) in items {
            let leaf = arena.push(value, priority);
            root = merge(arena, root, leaf);
        }
        return root;
    }

    fn heap_ordered(arena: &Arena, root: Idx) -> bool {
        if root == NULL {
            return true;
        }
        let node = *arena.node(root);
        for child in [node.left, node.right] {
            if child != NULL && arena.node(child).priority > node.priority {
                return false;
            }
        }
        return heap_ordered(arena, node.left) && heap_ordered(arena, node.right);
    }

    #[test]
    fn split_empty() {
        let mut arena = Arena::default();
        assert_eq!(split(&mut arena, &Natural, NULL, 3), (NULL, NULL));
    }

    #[test]
    fn merge_with_empty_side() {
        let mut arena = Arena::default();
        let leaf = arena.push(1, 1);
        assert_eq!(merge(&mut arena, NULL, leaf), leaf);
        assert_eq!(merge(&mut arena, leaf, NULL), leaf);
        assert_eq!(merge(&mut arena, NULL, NULL), NULL);
    }

    #[test]
    fn merge_keeps_higher_priority_on_top() {
        let mut arena = Arena::default();
        let root = build(&mut arena, &[(1, 3), (2, 9), (3, 5), (4, 1)]);
        assert_eq!(arena.node(root).value, 2);
        assert_eq!(values(&arena, root), vec![1, 2, 3, 4]);
        assert!(heap_ordered(&arena, root));
    }

    #[test]
    fn merge_tie_prefers_hi() {
        let mut arena = Arena::default();
        let lo = arena.push(1, 7);
        let hi = arena.push(2, 7);
        let root = merge(&mut arena, lo, hi);
        assert_eq!(root, hi);
        assert_eq!(arena.node(hi).left, lo);
    }

    #[test]
    fn split_partitions_at_key() {
        let mut arena = Arena::default();
        let root = build(&mut arena, &[(10, 4), (20, 8), (30, 2), (40, 6), (50, 5)]);

        let (lo, hi) = split(&mut arena, &Natural, root, 30);
        assert_eq!(values(&arena, lo), vec![10, 20, 30]);
        assert_eq!(values(&arena, hi), vec![40, 50]);
        assert!(heap_ordered(&arena, lo));
        assert!(heap_ordered(&arena, hi));

        let root = merge(&mut arena, lo, hi);
        assert_eq!(values(&arena, root), vec![10, 20, 30, 40, 50]);
    }

    #[test]
    fn split_between_and_beyond() {
        let mut arena = Arena::default();
        let root = build(&mut arena, &[(10, 1), (20, 3), (30, 2)]);

        let (lo, hi) = split(&mut arena, &Natural, root, 25);
        assert_eq!(values(&arena, lo), vec![10, 20]);
        assert_eq!(values(&arena, hi), vec![30]);
        let root = merge(&mut arena, lo, hi);

        let (lo, hi) = split(&mut arena, &Natural, root, 5);
        assert_eq!(lo, NULL);
        assert_eq!(values(&arena, hi), vec![10, 20, 30]);

        let (lo, hi) = split(&mut arena, &Natural, hi, 99);
        assert_eq!(hi, NULL);
        assert_eq!(values(&arena, lo), vec![10, 20, 30]);
    }

    #[test]
    fn split_does_not_allocate() {
        let mut arena = Arena::default();
        let root = build(&mut arena, &[(1, 2), (2, 1), (3, 3)]);
        let before = arena.len();
        let _ = split(&mut arena, &Natural, root, 2);
        assert_eq!(arena.len(), before);
    }
}
