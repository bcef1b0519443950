//! Wrapper module containing the tree itself

use thiserror::Error;

mod insert;
mod iter;
mod node;
mod print;
#[cfg(test)]
mod tests;

pub use iter::Iter;
pub use node::NodeId;

use node::Node;

/// An arena-backed 2-3 search tree
///
/// Every internal node holds one or two keys and, correspondingly, two or three children; every
/// leaf sits at the same depth. Keys within a node, and across the subtrees separated by them,
/// are strictly ascending. Both properties are maintained by [`insert`] through median-promoting
/// splits that propagate from the mutated leaf toward the root -- see the [`insert`] docs for
/// the full case analysis.
///
/// The tree stores each key exactly once; inserting a key that's already present is rejected
/// with [`InsertError::Duplicate`].
///
/// ## Representation
///
/// Nodes are kept in an arena (`Vec`) owned by the tree and linked by [`NodeId`] indexes, with
/// each node carrying an optional upward parent id alongside its children. The parent links are
/// pure lookup relations -- ownership flows strictly downward from [`root`] -- and exist only so
/// split propagation can walk toward the root. Arena slots are never reclaimed while the tree is
/// alive: a node absorbed by its parent during propagation simply becomes unreachable, which
/// costs `O(1)` slots per split and keeps every previously-issued id stable.
///
/// `TwoThreeTree` is plain owned data: it is `Send`/`Sync` whenever `K` is, and all mutation
/// goes through `&mut self`, so concurrent use follows the usual aliasing rules with no internal
/// locking.
///
/// [`insert`]: Self::insert
/// [`root`]: Self::root
pub struct TwoThreeTree<K> {
    nodes: Vec<Node<K>>,
    root: Option<NodeId>,
    len: usize,
}

/// Error returned by the insertion entry points
///
/// Both cases leave the tree completely untouched.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum InsertError<K> {
    /// [`insert_at`](TwoThreeTree::insert_at) was handed a node with a parent
    ///
    /// Insertion performs structural surgery that must start from the true root; anything else
    /// is a misuse by the caller. (Typically this means holding on to an id of a node that has
    /// since been pushed down or absorbed by a split.)
    #[error("insertion must start at the tree's root, but {0:?} has a parent")]
    NotRoot(NodeId),
    /// The key is already present in the tree
    ///
    /// The rejected key is handed back to the caller.
    #[error("key {0:?} is already present in the tree")]
    Duplicate(K),
}

impl<K> TwoThreeTree<K> {
    /// Creates a new, empty tree
    ///
    /// No arena space is allocated until the first insertion.
    pub const fn new() -> Self {
        TwoThreeTree {
            nodes: Vec::new(),
            root: None,
            len: 0,
        }
    }

    /// Returns the number of keys in the tree
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the id of the root node, or `None` for an empty tree
    ///
    /// The root id happens to be stable across insertions (splits rewrite the root in place
    /// rather than replacing it), but callers shouldn't rely on that -- treat the value as
    /// current only until the next mutation.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Returns the number of levels in the tree -- zero for an empty tree
    ///
    /// Every leaf sits at the same depth, so counting down the leftmost spine is exact.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut next = self.root;
        while let Some(id) = next {
            height += 1;
            next = self.node(id).children().first().copied();
        }
        height
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<K> {
        &self.nodes[id.idx()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K> {
        &mut self.nodes[id.idx()]
    }

    pub(crate) fn push_node(&mut self, node: Node<K>) -> NodeId {
        let idx = self.nodes.len();
        assert!(idx <= u32::MAX as usize, "node arena exceeds u32::MAX slots");
        self.nodes.push(node);
        NodeId(idx as u32)
    }
}

impl<K> Default for TwoThreeTree<K> {
    fn default() -> Self {
        TwoThreeTree::new()
    }
}

#[cfg(any(test, feature = "fuzz"))]
macro_rules! valid_assert {
    ($path:ident: $cond:expr) => {
        if !$cond {
            panic!(
                concat!("assertion failed: `", stringify!($cond), "` for path {:?}"),
                $path
            );
        }
    };
}

#[cfg(any(test, feature = "fuzz"))]
impl<K: Copy + Ord> TwoThreeTree<K> {
    /// (*Test-only*) Walks the whole tree, panicking if any structural invariant fails
    ///
    /// Checks, for every reachable node: strictly ascending keys, keys strictly inside the open
    /// interval implied by the ancestor separators, child count equal to key count plus one,
    /// correct parent back-links, and equal depth for all leaves. Also checks that the reachable
    /// key count matches [`len`](Self::len).
    ///
    /// The panic message names the failed check and the child-index path to the offending node,
    /// to make shrunk fuzz and property-test failures quick to narrow down.
    pub fn validate(&self) {
        let root = match self.root {
            Some(r) => r,
            None => {
                assert_eq!(self.len, 0, "empty tree with nonzero len");
                return;
            }
        };

        let path: &mut Vec<u8> = &mut Vec::new();
        valid_assert!(path: self.node(root).parent().is_none());

        let mut leaf_depth = None;
        let mut count = 0;
        self.validate_node(root, None, None, None, 0, path, &mut leaf_depth, &mut count);
        assert_eq!(count, self.len, "reachable key count does not match len");
    }

    /// Called by `validate` to check one node and recurse into its children
    #[allow(clippy::too_many_arguments)]
    fn validate_node(
        &self,
        id: NodeId,
        parent: Option<NodeId>,
        lower: Option<K>,
        upper: Option<K>,
        depth: usize,
        path: &mut Vec<u8>,
        leaf_depth: &mut Option<usize>,
        count: &mut usize,
    ) {
        let node = self.node(id);
        valid_assert!(path: node.parent() == parent);

        let keys = node.keys();
        *count += keys.len();
        for pair in keys.windows(2) {
            valid_assert!(path: pair[0] < pair[1]);
        }
        for &key in keys {
            valid_assert!(path: lower.map_or(true, |lo| lo < key));
            valid_assert!(path: upper.map_or(true, |hi| key < hi));
        }

        let children = node.children();
        if children.is_empty() {
            match *leaf_depth {
                None => *leaf_depth = Some(depth),
                Some(d) => valid_assert!(path: depth == d),
            }
            return;
        }

        valid_assert!(path: children.len() == keys.len() + 1);
        for (i, &child) in children.iter().enumerate() {
            let lo = if i == 0 { lower } else { Some(keys[i - 1]) };
            let hi = if i == keys.len() { upper } else { Some(keys[i]) };
            path.push(i as u8);
            self.validate_node(child, Some(id), lo, hi, depth + 1, path, leaf_depth, count);
            path.pop();
        }
    }
}
