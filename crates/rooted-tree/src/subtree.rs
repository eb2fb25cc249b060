//! Subtree surgery: copying, cutting and re-attaching whole branches.
//!
//! A subtree keeps its root's parent id, so it still knows where it was
//! cut from and can be grafted back. A cut leaves the id in the parent's
//! child list; reports draw such dangling children with dashed branches.

use crate::node::Node;
use crate::tree::RootedTree;
use crate::{Error, Result};
use std::hash::Hash;

impl<I: Eq + Clone + Hash, N: Node<I> + Clone> RootedTree<I, N> {
    /// Copies the subtree rooted at `id`.
    ///
    /// Returns `None` if `id` is not stored. Cloning at the root yields a
    /// copy of the whole tree.
    pub fn clone_subtree(&self, id: &I) -> Option<RootedTree<I, N>> {
        self.clone_subtree_with_lvl(id, None)
    }

    /// Copies the subtree rooted at `id`, keeping `lvl` levels below it.
    ///
    /// Nodes at the cut still list their children, which then show up as
    /// partial children.
    pub fn clone_subtree_with_lvl(&self, id: &I, lvl: Option<u32>) -> Option<RootedTree<I, N>> {
        if lvl.is_none() && self.root_id().as_ref() == Some(id) {
            return Some(self.clone());
        }

        let mut sub_tree = RootedTree::new();
        sub_tree.set_root_node(self.get_node(id)?.clone());
        for child_id in self.list_child_ids_with_lvl(id, lvl) {
            if let Some(node) = self.child_nodes.get(&child_id) {
                sub_tree.child_nodes.insert(child_id, node.clone());
            }
        }
        Some(sub_tree)
    }
}

impl<I: Eq + Clone + Hash, N: Node<I>> RootedTree<I, N> {
    /// Moves the subtree rooted at `id` out of this tree.
    ///
    /// Taking the root empties this tree. Taking any other node leaves its
    /// id in the parent's child list. Returns `None` if `id` is not stored.
    pub fn take_subtree(&mut self, id: &I) -> Option<RootedTree<I, N>> {
        let mut sub_tree = RootedTree::new();

        if self.root_id().as_ref() == Some(id) {
            sub_tree.root_node = self.root_node.take();
            sub_tree.child_nodes = std::mem::take(&mut self.child_nodes);
            log::debug!("Took whole tree ({} nodes)", sub_tree.len());
            return Some(sub_tree);
        }

        let descendants = self.list_child_ids(id);
        sub_tree.root_node = Some(self.child_nodes.remove(id)?);
        for child_id in descendants {
            if let Some(node) = self.child_nodes.remove(&child_id) {
                sub_tree.child_nodes.insert(child_id, node);
            }
        }
        log::debug!(
            "Took subtree of {} node(s), {} node(s) left",
            sub_tree.len(),
            self.len()
        );
        Some(sub_tree)
    }

    /// Re-attaches a subtree under the parent its root points at.
    ///
    /// The parent gains the root's id if it does not list it already, as is
    /// the case after [`take_subtree`](Self::take_subtree). Grafting an
    /// empty tree is a no-op.
    ///
    /// # Errors
    ///
    /// - [`Error::ChildNodeHasNoParent`] if `subtree` is not a subtree
    /// - [`Error::ParentNodeDoesNotExist`] if its parent is not stored here
    /// - [`Error::NodeAlreadyExists`] if any of its ids is already stored
    pub fn graft_subtree(&mut self, subtree: RootedTree<I, N>) -> Result<()> {
        let Some(sub_root) = subtree.root() else {
            return Ok(());
        };
        let parent_id = sub_root.parent_id().ok_or(Error::ChildNodeHasNoParent)?;
        if !self.contains(&parent_id) {
            return Err(Error::ParentNodeDoesNotExist);
        }
        if subtree.iter().any(|node| self.contains(&node.id())) {
            return Err(Error::NodeAlreadyExists);
        }

        let sub_root_id = sub_root.id();
        let grafted = subtree.len();
        let parent_node = self
            .get_mut_node(&parent_id)
            .ok_or(Error::ParentNodeDoesNotExist)?;
        parent_node.add_child_id(sub_root_id.clone());

        let RootedTree {
            root_node,
            child_nodes,
        } = subtree;
        if let Some(root_node) = root_node {
            self.child_nodes.insert(sub_root_id, root_node);
        }
        self.child_nodes.extend(child_nodes);
        log::debug!("Grafted {grafted} node(s), {} node(s) now", self.len());
        Ok(())
    }
}

impl<I: Clone, N: Clone> Clone for RootedTree<I, N> {
    fn clone(&self) -> Self {
        Self {
            root_node: self.root_node.clone(),
            child_nodes: self.child_nodes.clone(),
        }
    }
}
