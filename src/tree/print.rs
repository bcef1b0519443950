//! Level-order diagnostic dump
//!
//! Purely observational: renders every node's key pair level by level, tagging non-root nodes
//! with their parent's key pair so the propagation links can be eyeballed. Not part of the
//! algorithmic core.

use std::fmt::{self, Display, Write};

use super::node::Node;
use super::TwoThreeTree;

/// Renders a node's keys as `(k1, k2)`, with `nil` standing in for a missing second key
struct KeyPair<'t, K>(&'t Node<K>);

impl<K: Display> Display for KeyPair<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Node::Two { key, .. } => write!(f, "({key}, nil)"),
            Node::Three { keys: [k0, k1], .. } => write!(f, "({k0}, {k1})"),
        }
    }
}

impl<K: Display> TwoThreeTree<K> {
    /// Writes a level-order dump of the tree to `out`
    ///
    /// The format is a header line with the root's key pair, then for each level a `Layer N:`
    /// line followed by one node per line in left-to-right order -- each rendered as
    /// `(k1, k2|nil)`, suffixed with `, Parent: (pk1, pk2|nil)` on non-root nodes:
    ///
    /// ```text
    /// node: (20, nil)
    /// Layer 1:
    /// (20, nil)
    /// Layer 2:
    /// (10, nil), Parent: (20, nil)
    /// (30, nil), Parent: (20, nil)
    /// ```
    ///
    /// An empty tree writes nothing.
    pub fn write_level_order<W: Write>(&self, out: &mut W) -> fmt::Result {
        let root = match self.root() {
            Some(root) => root,
            None => return Ok(()),
        };

        writeln!(out, "node: {}", KeyPair(self.node(root)))?;

        let mut layer = 1;
        let mut level = vec![root];
        while !level.is_empty() {
            writeln!(out, "Layer {layer}:")?;
            let mut next_level = Vec::new();

            for &id in &level {
                let node = self.node(id);
                match node.parent() {
                    Some(p) => {
                        writeln!(out, "{}, Parent: {}", KeyPair(node), KeyPair(self.node(p)))?
                    }
                    None => writeln!(out, "{}", KeyPair(node))?,
                }
                next_level.extend_from_slice(node.children());
            }

            level = next_level;
            layer += 1;
        }

        Ok(())
    }

    /// Prints the level-order dump to standard output
    ///
    /// See [`write_level_order`](Self::write_level_order) for the format.
    pub fn print(&self) {
        let mut out = String::new();
        // writing into a String can't fail
        let _ = self.write_level_order(&mut out);
        print!("{out}");
    }
}
