//! The [`RootedTree`] container.
//!
//! Nodes are stored by id: the root on its own, every other node in a hash
//! map. Links live inside the nodes themselves (see [`Node`]), so the tree
//! is responsible for keeping both directions of every parent/child link in
//! agreement.

use crate::node::Node;
use crate::{Error, Result};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// A rooted tree of `N` nodes indexed by ids of type `I`.
///
/// A tree whose root still points at a parent is a *subtree*: it was cut
/// out of a larger tree (see [`RootedTree::take_subtree`]) and remembers
/// where it hangs.
///
/// # Example
///
/// ```rust
/// use rooted_tree::{RootedTree, TreeNode};
///
/// let mut tree = RootedTree::<u32, TreeNode<u32, u32>>::new();
/// tree.add_node(None, TreeNode::new(1)).unwrap();
/// tree.add_node(Some(1), TreeNode::new(2)).unwrap();
/// tree.add_node(Some(2), TreeNode::new(3)).unwrap();
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.list_parent_ids(&3), vec![2, 1]);
/// assert_eq!(tree.list_child_ids(&1), vec![2, 3]);
/// ```
pub struct RootedTree<I, N> {
    pub(crate) root_node: Option<N>,
    pub(crate) child_nodes: HashMap<I, N>,
}

impl<I, N> RootedTree<I, N> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            root_node: None,
            child_nodes: HashMap::new(),
        }
    }

    /// Returns the root node, if any.
    pub fn root(&self) -> Option<&N> {
        self.root_node.as_ref()
    }

    /// Number of stored nodes.
    pub fn len(&self) -> usize {
        debug_assert!(
            self.root_node.is_some() || self.child_nodes.is_empty(),
            "rooted tree holds child nodes without a root node"
        );
        match self.root_node {
            Some(_) => self.child_nodes.len() + 1,
            None => 0,
        }
    }

    /// Whether the tree has no root (and therefore no nodes).
    pub fn is_empty(&self) -> bool {
        self.root_node.is_none()
    }

    /// Iterates over all stored nodes: root first, the rest in no
    /// particular order.
    pub fn iter(&self) -> impl Iterator<Item = &N> {
        self.root_node.iter().chain(self.child_nodes.values())
    }
}

impl<I, N> Default for RootedTree<I, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Eq + Clone + Hash, N: Node<I>> RootedTree<I, N> {
    /// Adds `node` under `parent_id`, or as the root when `parent_id` is
    /// `None`.
    ///
    /// The parent gains the node's id as a child and the node is pointed at
    /// the parent.
    ///
    /// # Errors
    ///
    /// - [`Error::RootNodeAlreadyExists`] when adding a second root
    /// - [`Error::RootNodeHasParent`] when the new root carries a parent id
    /// - [`Error::NodeAlreadyExists`] when the id is already stored
    /// - [`Error::ParentNodeDoesNotExist`] when `parent_id` is unknown
    pub fn add_node(&mut self, parent_id: Option<I>, mut node: N) -> Result<()> {
        let Some(parent_id) = parent_id else {
            if self.root_node.is_some() {
                return Err(Error::RootNodeAlreadyExists);
            }
            if node.parent_id().is_some() {
                return Err(Error::RootNodeHasParent);
            }
            log::trace!("Root node set");
            self.root_node = Some(node);
            return Ok(());
        };

        let id = node.id();
        if self.contains(&id) {
            return Err(Error::NodeAlreadyExists);
        }
        let parent_node = self
            .get_mut_node(&parent_id)
            .ok_or(Error::ParentNodeDoesNotExist)?;
        parent_node.add_child_id(id.clone());
        node.set_parent_id(parent_id);
        self.child_nodes.insert(id, node);
        log::trace!("Child node added ({} nodes)", self.len());
        Ok(())
    }

    /// Gets a node by id.
    pub fn get_node(&self, id: &I) -> Option<&N> {
        self.child_nodes
            .get(id)
            .or_else(|| self.root_node.as_ref().filter(|root| root.id() == *id))
    }

    /// Gets a mutable node by id.
    ///
    /// Editing links through this handle bypasses the tree's checks.
    pub fn get_mut_node(&mut self, id: &I) -> Option<&mut N> {
        match self.child_nodes.get_mut(id) {
            Some(node) => Some(node),
            None => self.root_node.as_mut().filter(|root| root.id() == *id),
        }
    }

    /// Checks if a node is stored.
    pub fn contains(&self, id: &I) -> bool {
        self.get_node(id).is_some()
    }

    /// Id of the root node, if any.
    pub fn root_id(&self) -> Option<I> {
        self.root_node.as_ref().map(|root| root.id())
    }

    /// Removes a node together with all of its stored descendants.
    ///
    /// The node's id is dropped from its parent's child list. Removing the
    /// root empties the tree. Returns the removed node, or `None` if the id
    /// is unknown.
    pub fn remove_node(&mut self, id: &I) -> Option<N> {
        if self.root_node.as_ref().is_some_and(|root| root.id() == *id) {
            self.child_nodes.clear();
            log::debug!("Root node removed, tree emptied");
            return self.root_node.take();
        }
        if !self.child_nodes.contains_key(id) {
            return None;
        }

        let descendants = self.list_child_ids(id);
        let node = self.child_nodes.remove(id)?;
        for child_id in &descendants {
            self.child_nodes.remove(child_id);
        }
        if let Some(parent_id) = node.parent_id() {
            if let Some(parent_node) = self.get_mut_node(&parent_id) {
                parent_node.remove_child_id(id);
            }
        }
        log::debug!(
            "Node removed with {} descendant(s), {} node(s) left",
            descendants.len(),
            self.len()
        );
        Some(node)
    }

    /// Whether the root points at a parent outside this tree.
    pub fn is_subtree(&self) -> bool {
        self.root_node
            .as_ref()
            .is_some_and(|root| root.parent_id().is_some())
    }

    pub(crate) fn set_root_node(&mut self, node: N) {
        self.root_node = Some(node);
    }

    /// Stores an already-linked child node.
    ///
    /// Unlike [`add_node`](Self::add_node) nothing is rewritten: the node
    /// must name its parent and the parent must already list it.
    pub(crate) fn set_child_node(&mut self, node: N) -> Result<()> {
        let parent_id = node.parent_id().ok_or(Error::ChildNodeHasNoParent)?;
        let parent_node = self
            .get_node(&parent_id)
            .ok_or(Error::ParentNodeDoesNotExist)?;
        let id = node.id();
        if !parent_node.child_ids_vec().contains(&id) {
            return Err(Error::ParentNodeDoesNotContainChild);
        }
        if self.contains(&id) {
            return Err(Error::NodeAlreadyExists);
        }
        self.child_nodes.insert(id, node);
        Ok(())
    }

    /// All descendants of `id` in depth-first pre-order.
    ///
    /// Child ids a node declares without the child being stored are listed
    /// too; they simply have no descendants.
    pub fn list_child_ids(&self, id: &I) -> Vec<I> {
        self.list_child_ids_with_lvl(id, None)
    }

    /// Descendants of `id` down to `lvl` levels (`None` for no limit).
    ///
    /// `Some(0)` yields nothing and `Some(1)` yields the direct children.
    pub fn list_child_ids_with_lvl(&self, id: &I, lvl: Option<u32>) -> Vec<I> {
        let mut out = Vec::new();
        if lvl == Some(0) {
            return out;
        }
        let Some(node) = self.get_node(id) else {
            return out;
        };

        let mut seen: HashSet<I> = HashSet::new();
        seen.insert(id.clone());
        let below = lvl.map(|lvl| lvl - 1);
        let mut stack: Vec<(I, Option<u32>)> = node
            .child_ids_vec()
            .into_iter()
            .rev()
            .map(|child_id| (child_id, below))
            .collect();

        while let Some((child_id, remaining)) = stack.pop() {
            // Links are user-editable through get_mut_node.
            if !seen.insert(child_id.clone()) {
                continue;
            }
            if remaining != Some(0) {
                if let Some(child) = self.get_node(&child_id) {
                    let below = remaining.map(|lvl| lvl - 1);
                    stack.extend(
                        child
                            .child_ids_vec()
                            .into_iter()
                            .rev()
                            .map(|grandchild_id| (grandchild_id, below)),
                    );
                }
            }
            out.push(child_id);
        }
        out
    }

    /// All ancestors of `id`, nearest first.
    ///
    /// For a subtree the root's external parent id closes the list.
    pub fn list_parent_ids(&self, id: &I) -> Vec<I> {
        self.list_parent_ids_with_lvl(id, None)
    }

    /// At most `lvl` ancestors of `id`, nearest first (`None` for no
    /// limit).
    pub fn list_parent_ids_with_lvl(&self, id: &I, lvl: Option<u32>) -> Vec<I> {
        let mut out = Vec::new();
        let Some(mut node) = self.get_node(id) else {
            return out;
        };

        let mut remaining = lvl;
        while remaining != Some(0) && out.len() <= self.len() {
            let Some(parent_id) = node.parent_id() else {
                break;
            };
            out.push(parent_id.clone());
            remaining = remaining.map(|lvl| lvl - 1);
            match self.get_node(&parent_id) {
                Some(parent_node) => node = parent_node,
                None => break,
            }
        }
        out
    }
}

impl<I: Eq + Hash, N: PartialEq> PartialEq for RootedTree<I, N> {
    fn eq(&self, other: &Self) -> bool {
        self.root_node == other.root_node && self.child_nodes == other.child_nodes
    }
}

impl<I: Eq + Hash, N: Eq> Eq for RootedTree<I, N> {}
