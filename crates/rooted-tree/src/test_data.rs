//! Shared fixtures for unit tests.

#![allow(clippy::unwrap_used)]

use crate::{RootedTree, TreeNode};

pub(crate) type DataNode = TreeNode<i32, i32>;

pub(crate) fn node(id: i32) -> DataNode {
    TreeNode::new(id)
}

/// `1 → 2 → 3`
pub(crate) fn chain() -> RootedTree<i32, DataNode> {
    let mut tree = RootedTree::new();
    tree.add_node(None, node(1)).unwrap();
    tree.add_node(Some(1), node(2)).unwrap();
    tree.add_node(Some(2), node(3)).unwrap();
    tree
}

/// Builds a tree from `(parent, id)` pairs; `0` as parent marks the root.
pub(crate) fn tree_of(edges: &[(i32, i32)]) -> RootedTree<i32, DataNode> {
    let mut tree = RootedTree::new();
    for &(parent, id) in edges {
        let parent = (parent != 0).then_some(parent);
        tree.add_node(parent, node(id)).unwrap();
    }
    tree
}
