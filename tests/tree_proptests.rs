//! Property-based tests for `TwoThreeTree`.
//!
//! These verify the tree's observable guarantees for arbitrary insertion sequences, using
//! `std::collections::BTreeSet` as a differential oracle.

use pando::{InsertError, TwoThreeTree};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Strategy for arbitrary key sequences, duplicates included.
fn key_sequence(max_len: usize) -> impl Strategy<Value = Vec<i16>> {
    prop::collection::vec(any::<i16>(), 0..=max_len)
}

/// Strategy for shuffled sequences of distinct keys.
fn unique_keys(max_count: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::hash_set(any::<i64>(), 0..=max_count)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

/// Builds a tree from distinct keys, panicking on any rejection.
fn build(keys: &[i64]) -> TwoThreeTree<i64> {
    let mut tree = TwoThreeTree::new();
    for &key in keys {
        tree.insert(key).expect("distinct keys must all insert");
    }
    tree
}

fn level_order_dump<K: std::fmt::Display>(tree: &TwoThreeTree<K>) -> String {
    let mut out = String::new();
    tree.write_level_order(&mut out).unwrap();
    out
}

proptest! {
    // In-order traversal of the tree agrees with a BTreeSet fed the same keys, with duplicates
    // rejected exactly when the oracle already contains the key.
    #[test]
    fn inorder_matches_btreeset_oracle(keys in key_sequence(300)) {
        let mut tree = TwoThreeTree::new();
        let mut oracle = BTreeSet::new();

        for key in keys {
            match tree.insert(key) {
                Ok(()) => prop_assert!(oracle.insert(key), "accepted a duplicate of {key}"),
                Err(InsertError::Duplicate(k)) => {
                    prop_assert_eq!(k, key);
                    prop_assert!(oracle.contains(&key), "rejected a fresh key {key}");
                }
                Err(err) => prop_assert!(false, "unexpected error: {}", err),
            }
        }

        prop_assert_eq!(tree.len(), oracle.len());
        prop_assert_eq!(tree.is_empty(), oracle.is_empty());

        let got: Vec<i16> = tree.iter().copied().collect();
        let want: Vec<i16> = oracle.iter().copied().collect();
        prop_assert_eq!(got, want);
    }

    // In-order keys are strictly ascending for any insertion order.
    #[test]
    fn inorder_is_strictly_ascending(keys in unique_keys(200)) {
        let tree = build(&keys);
        let inorder: Vec<i64> = tree.iter().copied().collect();
        prop_assert!(inorder.windows(2).all(|w| w[0] < w[1]));
    }

    // A height-h 2-3 tree holds between 2^h - 1 and 3^h - 1 keys, so height stays logarithmic.
    #[test]
    fn height_is_logarithmic(keys in unique_keys(400)) {
        let tree = build(&keys);
        let n = tree.len() as u128;
        let h = tree.height() as u32;

        prop_assert!(3_u128.pow(h) - 1 >= n);
        prop_assert!(2_u128.pow(h) - 1 <= n);
    }

    // The same sequence inserted into two independent trees produces identical structures.
    #[test]
    fn construction_is_deterministic(keys in unique_keys(150)) {
        let a = build(&keys);
        let b = build(&keys);

        prop_assert_eq!(a.root(), b.root());
        prop_assert_eq!(a.height(), b.height());
        prop_assert_eq!(level_order_dump(&a), level_order_dump(&b));

        let a_keys: Vec<i64> = a.iter().copied().collect();
        let b_keys: Vec<i64> = b.iter().copied().collect();
        prop_assert_eq!(a_keys, b_keys);
    }

    // Re-inserting any already-present key fails and changes nothing observable.
    #[test]
    fn reinsertion_is_rejected_and_harmless(keys in unique_keys(100)) {
        let mut tree = build(&keys);
        let before = level_order_dump(&tree);

        for &key in &keys {
            prop_assert_eq!(tree.insert(key), Err(InsertError::Duplicate(key)));
        }

        prop_assert_eq!(tree.len(), keys.len());
        prop_assert_eq!(level_order_dump(&tree), before);
    }
}
