//! Property tests checking HashSet against the laws of set algebra, using `BTreeSet` as a model.

use std::collections::BTreeSet;

use chained_set::collections::hash::HashSet;
use proptest::prelude::*;

fn model(set: &HashSet<i16>) -> BTreeSet<i16> {
    set.iter().copied().collect()
}

fn elements() -> impl Strategy<Value = Vec<i16>> {
    prop::collection::vec(-64_i16..64, 0..80)
}

// =============================================================================
// Primitive operations
// =============================================================================

proptest! {
    #[test]
    fn prop_insert_then_contains(items in elements(), extra: i16) {
        let mut set: HashSet<i16> = items.iter().copied().collect();
        set.insert(extra);
        let len = set.len();

        prop_assert!(set.contains(&extra));
        prop_assert!(!set.insert(extra), "A second insertion should be a no-op.");
        prop_assert_eq!(set.len(), len);
    }

    #[test]
    fn prop_remove_decrements_len(items in elements(), target: i16) {
        let mut set: HashSet<i16> = items.iter().copied().collect();
        set.insert(target);
        let len = set.len();

        prop_assert!(set.remove(&target));
        prop_assert!(!set.contains(&target));
        prop_assert_eq!(set.len(), len - 1);
    }

    #[test]
    fn prop_growth_preserves_elements(items in elements(), cap in 1_usize..8) {
        let mut set = HashSet::with_cap(cap);
        for item in &items {
            set.insert(*item);
            prop_assert!(set.len() < set.cap());
        }

        let expected: BTreeSet<i16> = items.iter().copied().collect();
        prop_assert_eq!(set.iter().count(), expected.len(), "No element should be duplicated.");
        prop_assert_eq!(model(&set), expected);
    }

    #[test]
    fn prop_matches_model(ops in prop::collection::vec((any::<bool>(), -16_i16..16), 0..200)) {
        let mut set = HashSet::with_cap(1);
        let mut expected = BTreeSet::new();
        for (insert, item) in ops {
            if insert {
                prop_assert_eq!(set.insert(item), expected.insert(item));
            } else {
                prop_assert_eq!(set.remove(&item), expected.remove(&item));
            }
            prop_assert_eq!(set.len(), expected.len());
        }
        prop_assert_eq!(model(&set), expected);
    }
}

// =============================================================================
// Set algebra
// =============================================================================

proptest! {
    #[test]
    fn prop_union_with(left in elements(), right in elements()) {
        let mut set: HashSet<i16> = left.iter().copied().collect();
        set.union_with(&right);

        let expected: BTreeSet<i16> = left.iter().chain(&right).copied().collect();
        prop_assert_eq!(model(&set), expected);
    }

    #[test]
    fn prop_intersect_with(left in elements(), right in elements()) {
        let mut set: HashSet<i16> = left.iter().copied().collect();
        set.intersect_with(&right);

        let left: BTreeSet<i16> = left.into_iter().collect();
        let right: BTreeSet<i16> = right.into_iter().collect();
        prop_assert_eq!(model(&set), &left & &right);
    }

    #[test]
    fn prop_except_with(left in elements(), right in elements()) {
        let mut set: HashSet<i16> = left.iter().copied().collect();
        set.except_with(&right);

        let left: BTreeSet<i16> = left.into_iter().collect();
        let right: BTreeSet<i16> = right.into_iter().collect();
        prop_assert_eq!(model(&set), &left - &right);
    }

    #[test]
    fn prop_symmetric_except_with(left in elements(), right in elements()) {
        let mut set: HashSet<i16> = left.iter().copied().collect();
        set.symmetric_except_with(&right);

        let left: BTreeSet<i16> = left.into_iter().collect();
        let right: BTreeSet<i16> = right.into_iter().collect();
        prop_assert_eq!(model(&set), &left ^ &right);
    }

    #[test]
    fn prop_predicates_match_model(left in elements(), right in elements()) {
        let set: HashSet<i16> = left.iter().copied().collect();
        let left: BTreeSet<i16> = left.into_iter().collect();
        let other: BTreeSet<i16> = right.into_iter().collect();

        prop_assert_eq!(set.is_subset_of(&other), left.is_subset(&other));
        prop_assert_eq!(set.is_superset_of(&other), left.is_superset(&other));
        prop_assert_eq!(
            set.is_proper_subset_of(&other),
            left.is_subset(&other) && left.len() < other.len()
        );
        prop_assert_eq!(
            set.is_proper_superset_of(&other),
            left.is_superset(&other) && left.len() > other.len()
        );
        prop_assert_eq!(set.overlaps(&other), !left.is_disjoint(&other));
        prop_assert_eq!(set.set_equals(&other), left == other);
    }

    #[test]
    fn prop_equal_sets_are_not_proper(items in elements()) {
        let set: HashSet<i16> = items.iter().copied().collect();
        let copy = set.clone();

        prop_assert!(set.set_equals(&copy));
        prop_assert!(set.is_subset_of(&copy));
        prop_assert!(!set.is_proper_subset_of(&copy));
        prop_assert!(!set.is_proper_superset_of(&copy));
    }
}
