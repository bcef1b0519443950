//! In-order iteration over the tree's keys

use super::node::NodeId;
use super::TwoThreeTree;

impl<K> TwoThreeTree<K> {
    /// Returns an iterator over the tree's keys in strictly ascending order
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            tree: self,
            stack: match self.root {
                Some(root) => vec![(root, 0)],
                None => Vec::new(),
            },
        }
    }
}

impl<'t, K> IntoIterator for &'t TwoThreeTree<K> {
    type Item = &'t K;
    type IntoIter = Iter<'t, K>;

    fn into_iter(self) -> Iter<'t, K> {
        self.iter()
    }
}

/// In-order iterator over a [`TwoThreeTree`], created by [`iter`](TwoThreeTree::iter)
///
/// Walks the tree with an explicit stack of `(node, step)` frames. A node with `n` keys has
/// `2n + 1` in-order steps, alternating child descents (even steps) and key yields (odd steps);
/// child steps are skipped on leaves.
pub struct Iter<'t, K> {
    tree: &'t TwoThreeTree<K>,
    stack: Vec<(NodeId, u8)>,
}

impl<'t, K> Iterator for Iter<'t, K> {
    type Item = &'t K;

    fn next(&mut self) -> Option<&'t K> {
        let tree = self.tree;
        loop {
            let (id, step) = self.stack.last_mut()?;
            let node = tree.node(*id);

            if usize::from(*step) > 2 * node.keys().len() {
                self.stack.pop();
                continue;
            }

            let step_now = *step;
            *step += 1;

            if step_now % 2 == 1 {
                return Some(&node.keys()[usize::from(step_now) / 2]);
            }
            if let Some(&child) = node.children().get(usize::from(step_now) / 2) {
                self.stack.push((child, 0));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.stack.is_empty() {
            true => (0, Some(0)),
            false => (0, Some(self.tree.len())),
        }
    }
}

impl<K> std::iter::FusedIterator for Iter<'_, K> {}
