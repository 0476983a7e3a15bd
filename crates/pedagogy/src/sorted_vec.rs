// model = "claude-opus-4-5"
// created = 2026-10-14
// modified = 2026-10-14
// driver = "Isaac Clayton"

//! A set kept as a sorted, deduplicated `Vec`.

/// Sorted-vector set. Binary search to find, shift to insert.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortedVecSet<T> {
    items: Vec<T>,
}

impl<T: Ord + Clone> SortedVecSet<T> {
    pub fn new() -> Self {
        return SortedVecSet { items: Vec::new() };
    }

    pub fn len(&self) -> usize {
        return self.items.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.items.is_empty();
    }

    /// Insert `item`, returning whether it was new.
    pub fn insert(&mut self, item: T) -> bool {
        match self.items.binary_search(&item) {
            Ok(_) => false,
            Err(at) => {
                self.items.insert(at, item);
                true
            }
        }
    }

    pub fn contains(&self, item: &T) -> bool {
        return self.items.binary_search(item).is_ok();
    }

    pub fn min(&self) -> Option<&T> {
        return self.items.first();
    }

    pub fn max(&self) -> Option<&T> {
        return self.items.last();
    }

    pub fn as_slice(&self) -> &[T] {
        return &self.items;
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        return self.items.iter();
    }

    /// Everything in either set, each once.
    pub fn union(&self, other: &Self) -> Self {
        let mut items = Vec::with_capacity(self.len() + other.len());
        let (mut i, mut j) = (0, 0);
        while i < self.items.len() && j < other.items.len() {
            match self.items[i].cmp(&other.items[j]) {
                std::cmp::Ordering::Less => {
                    items.push(self.items[i].clone());
                    i += 1;
                }
                std::cmp::Ordering::Greater => {
                    items.push(other.items[j].clone());
                    j += 1;
                }
                std::cmp::Ordering::Equal => {
                    items.push(self.items[i].clone());
                    i += 1;
                    j += 1;
                }
            }
        }
        items.extend_from_slice(&self.items[i..]);
        items.extend_from_slice(&other.items[j..]);
        return SortedVecSet { items };
    }
}

impl<T: Ord + Clone> FromIterator<T> for SortedVecSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut items: Vec<T> = iter.into_iter().collect();
        items.sort();
        items.dedup();
        return SortedVecSet { items };
    }
}
