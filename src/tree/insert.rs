//! Insertion: descent, leaf overflow, and upward split propagation
//!
//! Every insertion follows the same three phases:
//!
//! 1. **Descent** -- walk from the root to the leaf the new key belongs in, choosing one child
//!    per level by comparing against the node's one or two keys. An equal key anywhere on the
//!    path rejects the insertion.
//!
//! 2. **Leaf mutation** -- a 2-node leaf just becomes a 3-node leaf. A 3-node leaf would
//!    overflow to three keys, so instead we order the triple, keep the median in the existing
//!    node, and push the low and high keys into two fresh leaves below it:
//!
//!    ```text
//!      (lo, hi) + k   =>      (mid)          with {lo, mid, hi} the ascending
//!                            /     \          ordering of the three keys
//!                         (lo)     (hi)
//!    ```
//!
//!    The rewritten node -- one key, two brand-new children, sitting one level too *low* -- is
//!    what we call the *split carrier*.
//!
//! 3. **Propagation** -- the carrier's median and child pair have to be merged into its parent.
//!    A 2-node parent absorbs them and becomes a 3-node (done). A 3-node parent must itself
//!    split: its three children plus the carrier's pair are partitioned into two new 2-nodes,
//!    the middle key of the five-way merge is promoted, and the parent becomes the next carrier
//!    one level up. Reaching a carrier with no parent means the tree just grew a level.
//!
//! Only nodes on the single leaf-to-root path are touched, so an insertion costs `O(height)`.

use super::node::{Node, NodeId};
use super::{InsertError, TwoThreeTree};

impl<K: Copy + Ord> TwoThreeTree<K> {
    /// Inserts a key at the tree's root
    ///
    /// Fails with [`InsertError::Duplicate`] if the key is already present, in which case the
    /// tree is untouched and the key is handed back inside the error.
    pub fn insert(&mut self, key: K) -> Result<(), InsertError<K>> {
        match self.root {
            Some(root) => self.insert_at(root, key).map(|_| ()),
            None => {
                let root = self.push_node(Node::leaf(key, None));
                self.root = Some(root);
                self.len = 1;
                Ok(())
            }
        }
    }

    /// Inserts a key, starting the descent at `node`, and returns the (possibly new) root
    ///
    /// `node` must be the tree's root: insertion performs structural surgery along the whole
    /// path from a leaf back up to the root, so starting anywhere else is a misuse and fails
    /// with [`InsertError::NotRoot`] rather than silently mutating a subtree.
    ///
    /// On success the returned id is also stored as the tree's root, and always refers to a
    /// node with no parent.
    ///
    /// ## Panics
    ///
    /// Panics if `node` is not an id issued by this tree.
    pub fn insert_at(&mut self, node: NodeId, key: K) -> Result<NodeId, InsertError<K>> {
        if self.node(node).parent().is_some() {
            return Err(InsertError::NotRoot(node));
        }

        let leaf = match self.find_leaf(node, key) {
            Some(leaf) => leaf,
            None => return Err(InsertError::Duplicate(key)),
        };

        self.insert_into_leaf(leaf, key);
        self.len += 1;

        // Walk back up from the mutation site to find the current root. The leaf may have been
        // absorbed by its parent during propagation, leaving its slot unreachable -- but
        // unreachable slots keep their parent link, so the walk still lands on the live root.
        let mut root = leaf;
        while let Some(parent) = self.node(root).parent() {
            root = parent;
        }
        self.root = Some(root);
        Ok(root)
    }

    /// Descends from `from` to the leaf that should receive `key`
    ///
    /// Returns `None` if an equal key was found along the path.
    fn find_leaf(&self, from: NodeId, key: K) -> Option<NodeId> {
        let mut current = from;
        loop {
            current = match *self.node(current) {
                Node::Two { key: k0, .. } if key == k0 => return None,
                Node::Three { keys: [k0, k1], .. } if key == k0 || key == k1 => return None,

                Node::Two { children: None, .. } | Node::Three { children: None, .. } => {
                    return Some(current)
                }

                Node::Two {
                    key: k0,
                    children: Some([left, right]),
                    ..
                } => {
                    if key < k0 {
                        left
                    } else {
                        right
                    }
                }
                Node::Three {
                    keys: [k0, k1],
                    children: Some([left, mid, right]),
                    ..
                } => {
                    if key < k0 {
                        left
                    } else if key < k1 {
                        mid
                    } else {
                        right
                    }
                }
            };
        }
    }

    /// Places `key` into `leaf`, splitting it if it already holds two keys
    fn insert_into_leaf(&mut self, leaf: NodeId, key: K) {
        invariant!(
            self.node(leaf).is_leaf(),
            "descent ended at internal node {leaf:?}"
        );

        match *self.node(leaf) {
            Node::Two {
                key: k0, parent, ..
            } => {
                let keys = if key < k0 { [key, k0] } else { [k0, key] };
                *self.node_mut(leaf) = Node::Three {
                    keys,
                    children: None,
                    parent,
                };
            }
            Node::Three {
                keys: [k0, k1],
                parent,
                ..
            } => {
                // Overflow: order the triple, keep the median here, grow two fresh leaves.
                let (low, median, high) = if key < k0 {
                    (key, k0, k1)
                } else if key < k1 {
                    (k0, key, k1)
                } else {
                    (k0, k1, key)
                };

                let left = self.push_node(Node::leaf(low, Some(leaf)));
                let right = self.push_node(Node::leaf(high, Some(leaf)));
                *self.node_mut(leaf) = Node::Two {
                    key: median,
                    children: Some([left, right]),
                    parent,
                };

                debug_println!("leaf {leaf:?} split; carrying median upward");
                self.propagate(leaf);
            }
        }
    }

    /// Merges the split carrier `node` -- a 2-node holding a promoted median over two freshly
    /// created children -- into its parent, recursing upward while parents keep overflowing
    fn propagate(&mut self, node: NodeId) {
        let (median, [low, high]) = match *self.node(node) {
            Node::Two {
                key,
                children: Some(pair),
                ..
            } => (key, pair),
            _ => invariant_violated!("split carrier {node:?} is not a 2-node with two children"),
        };

        let parent = match self.node(node).parent() {
            Some(parent) => parent,
            // The split reached the root: `node` simply *is* the new root, one level taller
            // than before. Our caller rediscovers it by walking parent links.
            None => return,
        };

        match *self.node(parent) {
            // Absorb: a 2-node parent has room. It takes the median as its second key and the
            // carrier's children in place of the carrier itself, becoming a stable 3-node.
            Node::Two {
                key: parent_key,
                children: Some([c0, c1]),
                parent: grandparent,
            } => {
                let (keys, children) = if node == c0 {
                    ([median, parent_key], [low, high, c1])
                } else {
                    invariant!(
                        node == c1,
                        "split carrier {node:?} is not a child of {parent:?}"
                    );
                    ([parent_key, median], [c0, low, high])
                };

                *self.node_mut(parent) = Node::Three {
                    keys,
                    children: Some(children),
                    parent: grandparent,
                };
                self.node_mut(low).set_parent(Some(parent));
                self.node_mut(high).set_parent(Some(parent));
                // The carrier's slot is now unreachable; its stale parent link is what lets
                // the caller's upward root walk pass through it.
                debug_println!("parent {parent:?} absorbed the split");
            }

            // Cascade: a full 3-node parent has to split as well. Its three children plus the
            // carrier's pair are regrouped into two 2-nodes, and whichever of the parent's two
            // keys and the incoming median is the middle value gets promoted -- making the
            // parent the next split carrier.
            Node::Three {
                keys: [p0, p1],
                children: Some([c0, c1, c2]),
                parent: grandparent,
            } => {
                let (promoted, left, right);
                if node == c0 {
                    // median < p0 < p1: the carrier already is the left group; the parent's
                    // right half moves into a fresh node
                    let rhs = self.push_node(Node::Two {
                        key: p1,
                        children: Some([c1, c2]),
                        parent: Some(parent),
                    });
                    self.node_mut(c1).set_parent(Some(rhs));
                    self.node_mut(c2).set_parent(Some(rhs));
                    (promoted, left, right) = (p0, node, rhs);
                } else if node == c1 {
                    // p0 < median < p1: both groups are fresh, splitting the carrier's pair
                    // between them; the carrier's slot is abandoned
                    let lhs = self.push_node(Node::Two {
                        key: p0,
                        children: Some([c0, low]),
                        parent: Some(parent),
                    });
                    let rhs = self.push_node(Node::Two {
                        key: p1,
                        children: Some([high, c2]),
                        parent: Some(parent),
                    });
                    self.node_mut(c0).set_parent(Some(lhs));
                    self.node_mut(low).set_parent(Some(lhs));
                    self.node_mut(high).set_parent(Some(rhs));
                    self.node_mut(c2).set_parent(Some(rhs));
                    (promoted, left, right) = (median, lhs, rhs);
                } else {
                    invariant!(
                        node == c2,
                        "split carrier {node:?} is not a child of {parent:?}"
                    );
                    // p0 < p1 < median: mirror of the first case
                    let lhs = self.push_node(Node::Two {
                        key: p0,
                        children: Some([c0, c1]),
                        parent: Some(parent),
                    });
                    self.node_mut(c0).set_parent(Some(lhs));
                    self.node_mut(c1).set_parent(Some(lhs));
                    (promoted, left, right) = (p1, lhs, node);
                }

                *self.node_mut(parent) = Node::Two {
                    key: promoted,
                    children: Some([left, right]),
                    parent: grandparent,
                };
                debug_println!("parent {parent:?} split in turn; cascading");
                self.propagate(parent);
            }

            _ => invariant_violated!("internal node {parent:?} has leaf shape"),
        }
    }
}
