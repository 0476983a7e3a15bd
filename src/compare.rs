// model = "claude-opus-4-5"
// created = 2026-10-12
// modified = 2026-10-18
// driver = "Isaac Clayton"

//! Ordering capability consumed by the set.
//!
//! The set stores bare integers. What those integers mean, and in which
//! order they sort, is entirely up to the `Comparator` the caller hands in.
//! Usually a value is an index into some caller-owned slice, and the
//! comparator looks the two entries up and compares them.

use std::cmp::Ordering;

/// An opaque stored value.
pub type Value = u64;

/// A total order over stored values, plus a way to place an external probe
/// key within that order.
///
/// Both methods must agree: `compare_key(k, v)` must sort `k` exactly where
/// a stored value equal to `k` would sort under `compare`. The set does not
/// check this.
pub trait Comparator {
    /// The probe type accepted by `OrderedSet::find`.
    type Key: ?Sized;

    /// Compare two stored values.
    fn compare(&self, a: Value, b: Value) -> Ordering;

    /// Compare a probe key against a stored value.
    fn compare_key(&self, key: &Self::Key, value: Value) -> Ordering;
}

impl<C: Comparator + ?Sized> Comparator for &C {
    type Key = C::Key;

    fn compare(&self, a: Value, b: Value) -> Ordering {
        return (**self).compare(a, b);
    }

    fn compare_key(&self, key: &Self::Key, value: Value) -> Ordering {
        return (**self).compare_key(key, value);
    }
}

/// Plain integer order. Probes are values themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl Comparator for Natural {
    type Key = Value;

    fn compare(&self, a: Value, b: Value) -> Ordering {
        return a.cmp(&b);
    }

    fn compare_key(&self, key: &Value, value: Value) -> Ordering {
        return key.cmp(&value);
    }
}

/// Flips another comparator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reverse<C>(pub C);

impl<C: Comparator> Comparator for Reverse<C> {
    type Key = C::Key;

    fn compare(&self, a: Value, b: Value) -> Ordering {
        return self.0.compare(a, b).reverse();
    }

    fn compare_key(&self, key: &Self::Key, value: Value) -> Ordering {
        return self.0.compare_key(key, value).reverse();
    }
}

/// Orders values as indices into `items`, by a key derived from each item.
///
/// ```
/// use treapset::{ByKey, OrderedSet};
///
/// let words = ["pear", "fig", "apple"];
/// let by_len = ByKey::new(&words, |w: &&str| w.len());
/// let mut set = OrderedSet::new(by_len);
/// for i in 0..words.len() as u64 {
///     set.insert(i);
/// }
/// // "pear" and "apple" sort by length; the probe is a length, not an index.
/// assert_eq!(set.find(&5), Some(2));
/// assert_eq!(set.minimal(), Some(1));
/// ```
///
/// Indices outside `items` panic on comparison.
pub struct ByKey<'a, T, F> {
    items: &'a [T],
    key: F,
}

impl<'a, T, F> ByKey<'a, T, F> {
    pub fn new(items: &'a [T], key: F) -> Self {
        return ByKey { items, key };
    }

    /// The slice values index into.
    pub fn items(&self) -> &'a [T] {
        return self.items;
    }

    /// The item a stored value refers to.
    pub fn item(&self, value: Value) -> Option<&'a T> {
        let idx = usize::try_from(value).ok()?;
        return self.items.get(idx);
    }

    fn at(&self, value: Value) -> &'a T {
        return self.item(value).expect("value indexes past the end of items");
    }
}

impl<T, F: Clone> Clone for ByKey<'_, T, F> {
    fn clone(&self) -> Self {
        return ByKey {
            items: self.items,
            key: self.key.clone(),
        };
    }
}

impl<T, F, K> Comparator for ByKey<'_, T, F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    type Key = K;

    fn compare(&self, a: Value, b: Value) -> Ordering {
        let a = (self.key)(self.at(a));
        let b = (self.key)(self.at(b));
        return a.cmp(&b);
    }

    fn compare_key(&self, key: &K, value: Value) -> Ordering {
        return key.cmp(&(self.key)(self.at(value)));
    }
}

impl<T, F> std::fmt::Debug for ByKey<'_, T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "ByKey {{ items: {} }}", self.items.len());
    }
}
