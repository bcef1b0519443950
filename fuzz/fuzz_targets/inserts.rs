#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pando::{InsertError, TwoThreeTree};
use std::collections::BTreeSet;

/// A single step of the fuzzed workload
#[derive(Arbitrary, Debug)]
enum Command {
    Insert(i16),
    // retrying the root id must be accepted; any stale id must be cleanly rejected
    InsertAtRoot(i16),
}

fuzz_target!(|cmds: Vec<Command>| {
    let mut tree = TwoThreeTree::new();
    let mut oracle = BTreeSet::new();

    for cmd in cmds {
        let (key, result) = match cmd {
            Command::Insert(key) => (key, tree.insert(key)),
            Command::InsertAtRoot(key) => match tree.root() {
                None => (key, tree.insert(key)),
                Some(root) => (key, tree.insert_at(root, key).map(|_| ())),
            },
        };

        match result {
            Ok(()) => assert!(oracle.insert(key)),
            Err(InsertError::Duplicate(k)) => {
                assert_eq!(k, key);
                assert!(oracle.contains(&key));
            }
            Err(err @ InsertError::NotRoot(_)) => panic!("unexpected error: {err}"),
        }

        tree.validate();
    }

    assert_eq!(tree.len(), oracle.len());
    assert!(tree.iter().copied().eq(oracle.iter().copied()));
});
