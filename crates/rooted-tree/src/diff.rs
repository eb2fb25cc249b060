//! Structural comparison of two trees.

use crate::node::Node;
use crate::tree::RootedTree;
use std::hash::Hash;

/// Differences between two trees, keyed by node id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeDiff<I> {
    /// Ids stored only in the left-hand tree, in its pre-order.
    pub removed: Vec<I>,
    /// Ids stored only in the right-hand tree, in its pre-order.
    pub added: Vec<I>,
    /// Ids stored in both trees under different parents, in left pre-order.
    pub moved: Vec<I>,
}

impl<I> TreeDiff<I> {
    /// Whether both trees hold the same ids under the same parents.
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty() && self.moved.is_empty()
    }
}

impl<I: Eq + Clone + Hash, N: Node<I>> RootedTree<I, N> {
    /// Compares this tree against `other`.
    ///
    /// Only stored nodes take part: partial children are ignored, as is the
    /// order of children under a parent.
    pub fn diff(&self, other: &RootedTree<I, N>) -> TreeDiff<I> {
        let mut diff = TreeDiff {
            removed: Vec::new(),
            added: Vec::new(),
            moved: Vec::new(),
        };

        for id in self.stored_ids_preorder() {
            match (self.get_node(&id), other.get_node(&id)) {
                (Some(mine), Some(theirs)) => {
                    if mine.parent_id() != theirs.parent_id() {
                        diff.moved.push(id);
                    }
                }
                _ => diff.removed.push(id),
            }
        }
        diff.added = other
            .stored_ids_preorder()
            .into_iter()
            .filter(|id| !self.contains(id))
            .collect();
        diff
    }

    fn stored_ids_preorder(&self) -> Vec<I> {
        let Some(root_id) = self.root_id() else {
            return Vec::new();
        };
        let mut ids = vec![root_id.clone()];
        ids.extend(
            self.list_child_ids(&root_id)
                .into_iter()
                .filter(|id| self.child_nodes.contains_key(id)),
        );
        ids
    }
}
