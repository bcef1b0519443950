use super::TwoThreeTree;

mod golden;

/// Builds a tree from the keys, panicking on any rejection
fn tree_of(keys: &[i32]) -> TwoThreeTree<i32> {
    let mut tree = TwoThreeTree::new();
    for &key in keys {
        tree.insert(key)
            .unwrap_or_else(|e| panic!("insert({key}) failed: {e}"));
    }
    tree
}

/// Collects the in-order key sequence
fn inorder(tree: &TwoThreeTree<i32>) -> Vec<i32> {
    tree.iter().copied().collect()
}

/// The root node's keys, in order
fn root_keys(tree: &TwoThreeTree<i32>) -> Vec<i32> {
    let root = tree.root().expect("tree is empty");
    tree.node(root).keys().to_vec()
}

/// Renders the level-order dump into a string
fn dump(tree: &TwoThreeTree<i32>) -> String {
    let mut out = String::new();
    tree.write_level_order(&mut out).unwrap();
    out
}
