//! The arena-backed node model for [`TwoThreeTree`](crate::TwoThreeTree)
//!
//! Nodes are stored in a `Vec` owned by the tree and referred to by [`NodeId`] indexes. Child
//! links are arrays of ids sized by the variant, and the parent link is an optional id, so the
//! upward references required by split propagation never create a second owner.

/// An index into a [`TwoThreeTree`]'s node arena
///
/// Ids are only meaningful for the tree that produced them; handing a `NodeId` from one tree to
/// another is a logic error (and may panic). Ids are stable for the lifetime of the tree -- the
/// arena never reuses a slot -- but a node that gets absorbed during split propagation leaves
/// its id referring to an unreachable slot.
///
/// [`TwoThreeTree`]: crate::TwoThreeTree
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) fn idx(self) -> usize {
        self.0 as usize
    }
}

/// A single vertex of the tree: either a 2-node or a 3-node
///
/// The two shapes a node can legally take are separate variants, so the pairing of key count and
/// child count is enforced by construction -- there is no way to represent a node with two keys
/// but only two children. Both variants are leaves exactly when `children` is `None`; internal
/// nodes always carry `keys + 1` children.
///
/// The transient three-key "overflow" state described by the insertion algorithm is never stored
/// here: it exists only as three locals inside [`insert`], and is resolved into a 2-node with two
/// fresh children before the insertion step returns.
///
/// [`insert`]: crate::TwoThreeTree::insert
#[derive(Debug, Copy, Clone)]
pub(crate) enum Node<K> {
    /// One key; `child[0]` holds keys below it, `child[1]` keys above it
    Two {
        key: K,
        children: Option<[NodeId; 2]>,
        parent: Option<NodeId>,
    },
    /// Two keys in strictly ascending order; `child[1]` holds the keys between them
    Three {
        keys: [K; 2],
        children: Option<[NodeId; 3]>,
        parent: Option<NodeId>,
    },
}

impl<K> Node<K> {
    /// Returns a new 2-node leaf
    pub(crate) fn leaf(key: K, parent: Option<NodeId>) -> Self {
        Node::Two {
            key,
            children: None,
            parent,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }

    /// The node's keys, in ascending order; always 1 or 2 of them
    pub(crate) fn keys(&self) -> &[K] {
        match self {
            Node::Two { key, .. } => std::slice::from_ref(key),
            Node::Three { keys, .. } => keys,
        }
    }

    /// The node's children in left-to-right order -- empty for leaves, and otherwise exactly
    /// one more than the number of keys
    pub(crate) fn children(&self) -> &[NodeId] {
        match self {
            Node::Two { children, .. } => children.as_ref().map_or(&[], |c| c.as_slice()),
            Node::Three { children, .. } => children.as_ref().map_or(&[], |c| c.as_slice()),
        }
    }

    pub(crate) fn parent(&self) -> Option<NodeId> {
        match self {
            Node::Two { parent, .. } | Node::Three { parent, .. } => *parent,
        }
    }

    pub(crate) fn set_parent(&mut self, new_parent: Option<NodeId>) {
        match self {
            Node::Two { parent, .. } | Node::Three { parent, .. } => *parent = new_parent,
        }
    }
}
