// model = "claude-opus-4-5"
// created = 2026-10-14
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Reference ordered-set implementations.
//!
//! These are the simple versions of what `treapset` does: easy to read,
//! easy to trust, and slow in the ways you would expect. They are used as
//! oracles in differential tests and as baselines in benchmarks.
//!
//! # Implementations
//!
//! | Implementation | Structure | Insert | Balance |
//! |----------------|-----------|--------|---------|
//! | `SortedVecSet` | Sorted `Vec` | O(n) | n/a |
//! | `BoxTreap` | Boxed nodes + rotations | O(log n) expected | Random priorities |
//!
//! # Example
//!
//! ```
//! use pedagogy::SortedVecSet;
//!
//! let mut set = SortedVecSet::new();
//! assert!(set.insert(3));
//! assert!(set.insert(1));
//! assert!(!set.insert(3));
//! assert_eq!(set.as_slice(), &[1, 3]);
//! ```

pub mod box_treap;
pub mod sorted_vec;

pub use box_treap::BoxTreap;
pub use sorted_vec::SortedVecSet;
