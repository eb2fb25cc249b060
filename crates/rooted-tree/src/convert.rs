//! Conversions between trees and flat node lists.

use crate::node::Node;
use crate::tree::RootedTree;
use crate::{Error, Result};
use std::hash::Hash;

impl<I: Eq + Clone + Hash, N: Node<I>> TryFrom<Vec<N>> for RootedTree<I, N> {
    type Error = Error;

    /// Builds a tree from already-linked nodes.
    ///
    /// The first node becomes the root as-is, so it may be a subtree root.
    /// Every following node must name a parent listed earlier that also
    /// lists it back.
    fn try_from(nodes: Vec<N>) -> Result<Self> {
        let mut rooted_tree = RootedTree::new();
        let mut iter = nodes.into_iter();
        if let Some(root_node) = iter.next() {
            rooted_tree.set_root_node(root_node);
        }
        for node in iter {
            rooted_tree.set_child_node(node)?;
        }
        Ok(rooted_tree)
    }
}

impl<I: Eq + Clone + Hash, N: Node<I> + Clone> RootedTree<I, N> {
    /// Flattens the tree into pre-order, root first.
    ///
    /// The result converts back into an equal tree via `TryFrom`.
    pub fn to_nodes(&self) -> Vec<N> {
        let Some(root) = self.root() else {
            return Vec::new();
        };
        let mut nodes = Vec::with_capacity(self.len());
        nodes.push(root.clone());
        nodes.extend(
            self.list_child_ids(&root.id())
                .iter()
                .filter_map(|id| self.child_nodes.get(id).cloned()),
        );
        nodes
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::test_data::*;
    use crate::*;

    #[test]
    fn test_from_vec() {
        let nodes = vec![node(1).with_child(2), node(2).with_parent(1)];
        let tree: RootedTree<i32, DataNode> = nodes.try_into().unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.list_child_ids(&1), vec![2]);
    }

    #[test]
    fn test_from_empty_vec() {
        let tree = RootedTree::<i32, DataNode>::try_from(Vec::new()).unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_from_vec_accepts_subtree_root() {
        let nodes = vec![node(2).with_parent(1).with_child(3), node(3).with_parent(2)];
        let tree = RootedTree::<i32, DataNode>::try_from(nodes).unwrap();
        assert!(tree.is_subtree());
    }

    #[test]
    fn test_from_vec_child_before_parent_fails() {
        let nodes = vec![
            node(1).with_child(2),
            node(3).with_parent(2),
            node(2).with_parent(1).with_child(3),
        ];
        let result = RootedTree::<i32, DataNode>::try_from(nodes);
        assert!(matches!(result, Err(Error::ParentNodeDoesNotExist)));
    }

    #[test]
    fn test_from_vec_unlisted_child_fails() {
        let nodes = vec![node(1), node(2).with_parent(1)];
        let result = RootedTree::<i32, DataNode>::try_from(nodes);
        assert!(matches!(result, Err(Error::ParentNodeDoesNotContainChild)));
    }

    #[test]
    fn test_to_nodes_is_preorder() {
        let tree = tree_of(&[(0, 1), (1, 2), (1, 4), (2, 3)]);
        let ids: Vec<i32> = tree.to_nodes().iter().map(|node| node.id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_to_nodes_round_trip() {
        let tree = tree_of(&[(0, 1), (1, 2), (1, 4), (2, 3)]);
        let rebuilt = RootedTree::try_from(tree.to_nodes()).unwrap();
        assert!(tree == rebuilt);
    }

    #[test]
    fn test_to_nodes_skips_partial_children() {
        let mut tree = chain();
        tree.take_subtree(&3).unwrap();
        assert_eq!(tree.to_nodes().len(), 2);
        assert!(RootedTree::try_from(tree.to_nodes()).unwrap() == tree);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_to_nodes_serializes_as_json() {
        let tree = chain();
        let json = serde_json::to_string(&tree.to_nodes()).unwrap();
        let nodes: Vec<DataNode> = serde_json::from_str(&json).unwrap();
        let rebuilt = RootedTree::try_from(nodes).unwrap();
        assert!(tree == rebuilt);
    }
}
