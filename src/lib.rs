// model = "claude-opus-4-5"
// created = 2026-10-12
// modified = 2026-10-17
// driver = "Isaac Clayton"

//! Treapset - an ordered set index over caller-ordered integer values.
//!
//! The set stores plain `u64` values and never interprets them: a
//! `Comparator` supplied by the caller decides the order, typically by
//! treating each value as an index into a slice the caller owns. Lookups
//! take a probe of the comparator's own key type, so a set of indices can
//! be searched by whatever the indexed items are keyed on.
//!
//! # Quick Start
//!
//! ```
//! use treapset::{Natural, OrderedSet};
//!
//! let mut set = OrderedSet::new(Natural);
//! for v in [5, 1, 3, 3, 2] {
//!     set.insert(v);
//! }
//! assert_eq!(set.len(), 4);
//! assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 2, 3, 5]);
//! assert_eq!(set.find(&3), Some(3));
//! assert_eq!(set.find(&4), None);
//! ```
//!
//! # Reproducible trees
//!
//! Priorities are seeded from the OS by default. Pass a seed to get the
//! same tree shape on every run:
//!
//! ```
//! use treapset::{Natural, Options, OrderedSet};
//!
//! let options = Options { capacity: 16, seed: Some(7) };
//! let mut a = OrderedSet::with_options(options, Natural);
//! let mut b = OrderedSet::with_options(options, Natural);
//! a.extend(0..16);
//! b.extend(0..16);
//! assert_eq!(a.depth(), b.depth());
//! ```

pub mod compare;
pub mod priority;
pub mod treap;

pub use compare::ByKey;
pub use compare::Comparator;
pub use compare::Natural;
pub use compare::Reverse;
pub use compare::Value;
pub use priority::EntropyError;
pub use priority::Priorities;
pub use priority::Seeding;
pub use treap::InvariantViolation;
pub use treap::Iter;
pub use treap::Options;
pub use treap::OrderedSet;
