//! Property-based tests for construction and membership.
//!
//! Uses differential testing against a brute-force substring oracle,
//! plus the structural properties that should hold for all inputs.

#![expect(clippy::indexing_slicing, reason = "fail fast in tests")]

mod common;

use proptest::prelude::*;
use sufftree::{FlatSuffixTree, OrderedSuffixTree};

// ============================================================================
//  Strategies
// ============================================================================

/// Texts over a small alphabet, where repeats (and therefore splits and
/// suffix-link chains) are dense.
fn small_alphabet_text() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c']), 0..=48)
}

/// Texts over arbitrary bytes, sentinel excluded so the appended `$`
/// stays unique.
fn wide_alphabet_text() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>().prop_filter("sentinel is reserved", |&b| b != b'$'), 0..=48)
}

/// Patterns short enough to miss often, long enough to cross edges.
fn pattern() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c', b'd']), 0..=10)
}

// ============================================================================
//  Membership properties
// ============================================================================

proptest! {
    #[test]
    fn every_suffix_is_found(text in small_alphabet_text()) {
        let tree = OrderedSuffixTree::build(text);
        let full = tree.text();
        for i in 0..full.len() {
            prop_assert!(tree.contains(&full[i..]));
        }
    }

    #[test]
    fn every_substring_is_found(text in small_alphabet_text()) {
        let tree = FlatSuffixTree::build(text);
        let full = tree.text().to_vec();
        for start in 0..full.len() {
            for end in start + 1..=full.len() {
                prop_assert!(tree.contains(&full[start..end]));
            }
        }
    }

    #[test]
    fn membership_matches_the_oracle(text in small_alphabet_text(), patterns in prop::collection::vec(pattern(), 0..=16)) {
        let tree = OrderedSuffixTree::build(text);
        for pattern in &patterns {
            prop_assert_eq!(
                tree.contains(pattern),
                common::naive_contains(tree.text(), pattern),
                "pattern {:?} against {:?}", pattern, tree.text()
            );
        }
    }

    #[test]
    fn membership_matches_the_oracle_on_wide_alphabets(
        text in wide_alphabet_text(),
        patterns in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..=6), 0..=16),
    ) {
        let tree = FlatSuffixTree::build(text);
        for pattern in &patterns {
            prop_assert_eq!(
                tree.contains(pattern),
                common::naive_contains(tree.text(), pattern),
                "pattern {:?} against {:?}", pattern, tree.text()
            );
        }
    }

    #[test]
    fn empty_pattern_always_matches(text in wide_alphabet_text()) {
        let tree = OrderedSuffixTree::build(text);
        prop_assert!(tree.contains(b""));
    }

    #[test]
    fn variants_agree(text in small_alphabet_text(), patterns in prop::collection::vec(pattern(), 0..=8)) {
        let ordered = OrderedSuffixTree::build(text.clone());
        let flat = FlatSuffixTree::build(text);
        for pattern in &patterns {
            prop_assert_eq!(ordered.contains(pattern), flat.contains(pattern));
        }
    }
}

// ============================================================================
//  Structural properties
// ============================================================================

proptest! {
    #[test]
    fn node_count_stays_linear(text in small_alphabet_text()) {
        let tree = OrderedSuffixTree::build(text);
        let n = tree.text().len();
        if n >= 2 {
            prop_assert!(tree.node_count() <= 2 * n - 1);
        } else {
            prop_assert_eq!(tree.node_count(), 2);
        }
    }

    #[test]
    fn leaf_count_equals_suffix_count(text in wide_alphabet_text()) {
        let tree = OrderedSuffixTree::build(text);
        let leaves = tree
            .arena()
            .iter()
            .filter(|(_, node)| node.is_leaf())
            .count();
        prop_assert_eq!(leaves, tree.text().len());
    }

    #[test]
    fn variants_build_isomorphic_trees(text in small_alphabet_text()) {
        let ordered = OrderedSuffixTree::build(text.clone());
        let flat = FlatSuffixTree::build(text);
        prop_assert_eq!(common::canonical(&ordered), common::canonical(&flat));
    }

    #[test]
    fn sentinel_appending_is_idempotent(mut text in small_alphabet_text()) {
        let plain = OrderedSuffixTree::build(text.clone());
        text.push(b'$');
        let explicit = OrderedSuffixTree::build(text);
        prop_assert_eq!(plain.text(), explicit.text());
        prop_assert_eq!(common::canonical(&plain), common::canonical(&explicit));
    }
}
