//! Pinned regression fixture: the full demonstration sequence
//!
//! Inserting 20, 10, 30, 50, 40, 35, 33, 47 exercises every insertion case exactly once or
//! twice: plain leaf fills, a right-side absorb, and a middle-position cascade that grows the
//! third level. The resulting shape and dump are pinned here, traced by hand from the
//! algorithm.

use super::{dump, inorder, tree_of};

const SEQUENCE: [i32; 8] = [20, 10, 30, 50, 40, 35, 33, 47];

#[test]
fn demo_sequence_shape() {
    let tree = tree_of(&SEQUENCE);
    tree.validate();

    assert_eq!(tree.len(), 8);
    assert_eq!(tree.height(), 3);
    assert_eq!(inorder(&tree), [10, 20, 30, 33, 35, 40, 47, 50]);

    // root (33) over (20) and (40); leaves (10), (30), (35), (47, 50)
    let root = tree.root().unwrap();
    assert_eq!(tree.node(root).keys(), [33]);

    let [left, right]: [_; 2] = tree.node(root).children().try_into().unwrap();
    assert_eq!(tree.node(left).keys(), [20]);
    assert_eq!(tree.node(right).keys(), [40]);

    let [l0, l1]: [_; 2] = tree.node(left).children().try_into().unwrap();
    let [r0, r1]: [_; 2] = tree.node(right).children().try_into().unwrap();
    assert_eq!(tree.node(l0).keys(), [10]);
    assert_eq!(tree.node(l1).keys(), [30]);
    assert_eq!(tree.node(r0).keys(), [35]);
    assert_eq!(tree.node(r1).keys(), [47, 50]);

    for leaf in [l0, l1, r0, r1] {
        assert!(tree.node(leaf).is_leaf());
    }
}

#[test]
fn demo_sequence_dump() {
    let expected = "\
node: (33, nil)
Layer 1:
(33, nil)
Layer 2:
(20, nil), Parent: (33, nil)
(40, nil), Parent: (33, nil)
Layer 3:
(10, nil), Parent: (20, nil)
(30, nil), Parent: (20, nil)
(35, nil), Parent: (40, nil)
(47, 50), Parent: (40, nil)
";
    assert_eq!(dump(&tree_of(&SEQUENCE)), expected);
}

#[test]
fn first_split_dump() {
    let expected = "\
node: (20, nil)
Layer 1:
(20, nil)
Layer 2:
(10, nil), Parent: (20, nil)
(30, nil), Parent: (20, nil)
";
    assert_eq!(dump(&tree_of(&[20, 10, 30])), expected);
}

// Two independent trees fed the same sequence end up structurally identical, arena and all.
#[test]
fn demo_sequence_is_deterministic() {
    let a = tree_of(&SEQUENCE);
    let b = tree_of(&SEQUENCE);

    assert_eq!(a.root(), b.root());
    assert_eq!(a.nodes.len(), b.nodes.len());
    assert_eq!(dump(&a), dump(&b));
    assert_eq!(inorder(&a), inorder(&b));
}
