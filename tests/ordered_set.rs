// model = "claude-opus-4-5"
// created = 2026-10-15
// modified = 2026-10-17
// driver = "Isaac Clayton"

//! Scenario tests for the ordered set's public API.

use rand::SeedableRng;
use rand::rngs::StdRng;

use treapset::ByKey;
use treapset::Comparator;
use treapset::Natural;
use treapset::Options;
use treapset::OrderedSet;
use treapset::Priorities;
use treapset::Seeding;
use treapset::Value;

fn natural(seed: u64) -> OrderedSet<Natural> {
    return OrderedSet::with_options(Options { capacity: 0, seed: Some(seed) }, Natural);
}

fn collect<C: Comparator, R: rand_core::RngCore>(set: &OrderedSet<C, R>) -> Vec<Value> {
    return set.iter().collect();
}

// =============================================================================
// Basic scenarios
// =============================================================================

#[test]
fn insert_with_duplicate() {
    let mut set = natural(1);
    let created: Vec<bool> = [5, 1, 3, 3, 2].into_iter().map(|v| set.insert(v)).collect();
    assert_eq!(created, vec![true, true, true, false, true]);
    assert_eq!(set.len(), 4);
    assert_eq!(collect(&set), vec![1, 2, 3, 5]);
}

#[test]
fn find_hit_and_miss() {
    let mut set = natural(2);
    set.extend([5, 1, 3, 3, 2]);
    assert_eq!(set.find(&4), None);
    assert_eq!(set.find(&3), Some(3));
}

#[test]
fn min_max_on_empty() {
    let set = OrderedSet::new(Natural);
    assert_eq!(set.minimal(), None);
    assert_eq!(set.maximal(), None);
    assert!(set.is_empty());
}

#[test]
fn union_overlapping() {
    let mut a = natural(3);
    a.extend([1, 3, 5]);
    let mut b = natural(4);
    b.extend([2, 3, 4]);
    let u = a.union(&b);
    assert_eq!(u.len(), 5);
    assert_eq!(collect(&u), vec![1, 2, 3, 4, 5]);
}

#[test]
fn union_merge_disjoint_halves() {
    let mut a = natural(5);
    a.extend([0, 1, 2]);
    let mut b = natural(6);
    b.extend([0, 1]);
    let m = a.union_merge(&b);
    assert_eq!(m.len(), 5);
    assert_eq!(collect(&m), vec![0, 1, 2, 3, 4]);
    assert_eq!(m.minimal(), Some(0));
    assert_eq!(m.maximal(), Some(4));
}

// =============================================================================
// Iterator protocol
// =============================================================================

#[test]
fn iterator_peek_and_has_next() {
    let mut set = natural(7);
    set.extend([30, 10, 20]);
    let mut iter = set.iter();
    assert!(iter.has_next());
    assert_eq!(iter.peek(), Some(10));
    assert_eq!(iter.next(), Some(10));
    assert_eq!(iter.peek(), Some(20));
    assert_eq!(iter.next(), Some(20));
    assert_eq!(iter.next(), Some(30));
    assert!(!iter.has_next());
    assert_eq!(iter.peek(), None);
}

#[test]
fn iterate_by_reference() {
    let mut set = natural(8);
    set.extend([2, 1]);
    let mut seen = Vec::new();
    for v in &set {
        seen.push(v);
    }
    assert_eq!(seen, vec![1, 2]);
}

// =============================================================================
// Indexing an external corpus
// =============================================================================

#[derive(Debug)]
struct Person {
    name: &'static str,
    age: u32,
}

const PEOPLE: [Person; 5] = [
    Person { name: "mara", age: 41 },
    Person { name: "ode", age: 29 },
    Person { name: "lin", age: 35 },
    Person { name: "ike", age: 29 },
    Person { name: "zoe", age: 52 },
];

#[test]
fn index_corpus_by_derived_key() {
    let by_age = ByKey::new(&PEOPLE, |p: &Person| p.age);
    let mut set = OrderedSet::with_source(PEOPLE.len(), by_age, Priorities::seeded(11));
    let created: Vec<bool> = (0..PEOPLE.len() as Value).map(|i| set.insert(i)).collect();

    // "ike" shares an age with "ode", who got there first.
    assert_eq!(created, vec![true, true, true, false, true]);
    assert_eq!(set.len(), 4);

    let names: Vec<&str> = set.iter().map(|i| PEOPLE[i as usize].name).collect();
    assert_eq!(names, vec!["ode", "lin", "mara", "zoe"]);

    // Probes are ages, answers are indices.
    assert_eq!(set.find(&35), Some(2));
    assert_eq!(set.find(&29), Some(1));
    assert_eq!(set.find(&30), None);
    assert_eq!(set.comparator().item(4).map(|p| p.name), Some("zoe"));
}

#[test]
fn index_corpus_by_name() {
    let by_name = ByKey::new(&PEOPLE, |p: &Person| p.name);
    let mut set = OrderedSet::with_source(0, by_name, Priorities::seeded(12));
    set.extend(0..PEOPLE.len() as Value);
    assert_eq!(set.len(), 5);
    assert_eq!(set.find(&"lin"), Some(2));
    assert_eq!(set.find(&"bob"), None);
    assert_eq!(set.minimal(), Some(3));
    assert_eq!(set.maximal(), Some(4));
}

#[test]
fn borrowed_comparator_is_shared_by_clones() {
    let by_age = ByKey::new(&PEOPLE, |p: &Person| p.age);
    let mut a = OrderedSet::with_source(0, &by_age, Priorities::seeded(13));
    a.extend([0, 1]);
    let b = a.clone();
    assert!(std::ptr::eq(*a.comparator(), *b.comparator()));
}

// =============================================================================
// Priority sources
// =============================================================================

#[test]
fn caller_supplied_generator() {
    let mut a = OrderedSet::with_source(0, Natural, StdRng::seed_from_u64(9));
    let mut b = OrderedSet::with_source(0, Natural, StdRng::seed_from_u64(9));
    a.extend((0..500).rev());
    b.extend((0..500).rev());
    assert_eq!(a.depth(), b.depth());
    assert_eq!(collect(&a), (0..500).collect::<Vec<_>>());
    assert_eq!(a.validate(), Ok(()));
}

#[test]
fn default_generator_is_os_seeded() {
    let set = OrderedSet::new(Natural);
    assert!(set.is_empty());
    assert_eq!(Priorities::default().seeding(), Seeding::Os);
}

#[test]
fn union_keeps_larger_sides_comparator_and_generator() {
    let mut small = natural(21);
    small.extend([100]);
    let mut large = natural(22);
    large.extend(0..50);
    let u = small.union(&large);
    assert_eq!(u.len(), 51);
    assert_eq!(u.maximal(), Some(100));
    assert_eq!(u.validate(), Ok(()));
}
