// model = "claude-opus-4-5"
// created = 2026-10-14
// modified = 2026-10-15
// driver = "Isaac Clayton"

//! The textbook treap: boxed nodes, insertion by descent plus rotations.
//!
//! Same invariants as the arena treap in `treapset`, reached a different
//! way. Insert walks down to a leaf position, then rotates the new node up
//! while it outranks its parent.

use std::cmp::Ordering;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    item: T,
    priority: u64,
    left: Link<T>,
    right: Link<T>,
}

/// Pointer-based treap set.
pub struct BoxTreap<T> {
    root: Link<T>,
    len: usize,
    rand_state: u64,
}

impl<T: Ord> BoxTreap<T> {
    pub fn new() -> Self {
        return Self::with_seed(0x12345678_9abcdef0);
    }

    /// Seed the priority generator. Zero is replaced with a fixed constant.
    pub fn with_seed(seed: u64) -> Self {
        let rand_state = if seed == 0 { 0x12345678_9abcdef0 } else { seed };
        return BoxTreap {
            root: None,
            len: 0,
            rand_state,
        };
    }

    pub fn len(&self) -> usize {
        return self.len;
    }

    pub fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    fn random_priority(&mut self) -> u64 {
        let mut x = self.rand_state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.rand_state = x;
        x
    }

    /// Insert `item`, returning whether it was new.
    pub fn insert(&mut self, item: T) -> bool {
        let priority = self.random_priority();
        let (root, created) = Self::insert_node(self.root.take(), item, priority);
        self.root = root;
        if created {
            self.len += 1;
        }
        return created;
    }

    fn insert_node(link: Link<T>, item: T, priority: u64) -> (Link<T>, bool) {
        let Some(mut node) = link else {
            let leaf = Node {
                item,
                priority,
                left: None,
                right: None,
            };
            return (Some(Box::new(leaf)), true);
        };

        match item.cmp(&node.item) {
            Ordering::Equal => (Some(node), false),
            Ordering::Less => {
                let (left, created) = Self::insert_node(node.left.take(), item, priority);
                node.left = left;
                let outranked = node.left.as_ref().is_some_and(|l| l.priority > node.priority);
                if outranked {
                    (Some(Self::rotate_right(node)), created)
                } else {
                    (Some(node), created)
                }
            }
            Ordering::Greater => {
                let (right, created) = Self::insert_node(node.right.take(), item, priority);
                node.right = right;
                let outranked = node.right.as_ref().is_some_and(|r| r.priority > node.priority);
                if outranked {
                    (Some(Self::rotate_left(node)), created)
                } else {
                    (Some(node), created)
                }
            }
        }
    }

    /// Left child becomes the subtree root.
    fn rotate_right(mut node: Box<Node<T>>) -> Box<Node<T>> {
        match node.left.take() {
            Some(mut pivot) => {
                node.left = pivot.right.take();
                pivot.right = Some(node);
                pivot
            }
            None => node,
        }
    }

    /// Right child becomes the subtree root.
    fn rotate_left(mut node: Box<Node<T>>) -> Box<Node<T>> {
        match node.right.take() {
            Some(mut pivot) => {
                node.right = pivot.left.take();
                pivot.left = Some(node);
                pivot
            }
            None => node,
        }
    }

    pub fn contains(&self, item: &T) -> bool {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match item.cmp(&node.item) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return true,
            };
        }
        return false;
    }

    /// Items in ascending order.
    pub fn to_vec(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<T>> = Vec::new();
        let mut link = self.root.as_deref();
        loop {
            while let Some(node) = link {
                stack.push(node);
                link = node.left.as_deref();
            }
            let Some(node) = stack.pop() else {
                break;
            };
            out.push(&node.item);
            link = node.right.as_deref();
        }
        return out;
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        fn walk<T>(link: &Link<T>) -> usize {
            match link {
                None => 0,
                Some(node) => 1 + walk(&node.left).max(walk(&node.right)),
            }
        }
        return walk(&self.root);
    }
}

impl<T: Ord> Default for BoxTreap<T> {
    fn default() -> Self {
        return Self::new();
    }
}
