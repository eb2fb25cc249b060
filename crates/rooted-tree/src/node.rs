//! Node abstraction for rooted trees.
//!
//! A [`RootedTree`](crate::RootedTree) never looks inside user payloads. It
//! only needs to read and rewrite the parent/child links of each node, which
//! is what the [`Node`] trait exposes. [`TreeNode`] is a ready-made
//! implementation wrapping any payload that can produce its own id.

use std::path::PathBuf;

// ============================================================================
// Traits
// ============================================================================

/// Link accessors a tree needs from its nodes.
///
/// Implementations must keep `add_child_id` idempotent: adding an id that
/// is already listed leaves the child list unchanged.
pub trait Node<I> {
    /// Id of this node.
    fn id(&self) -> I;
    /// Id of the parent, if any.
    fn parent_id(&self) -> Option<I>;
    /// Child ids in display order.
    fn child_ids_vec(&self) -> Vec<I>;
    /// Points this node at `parent`.
    fn set_parent_id(&mut self, parent: I);
    /// Appends `child_id` unless it is already listed.
    fn add_child_id(&mut self, child_id: I);
    /// Drops `child_id` from the child list.
    fn remove_child_id(&mut self, child_id: &I);
}

/// Derives a node id from a payload value.
///
/// # Example
///
/// ```rust
/// use rooted_tree::Identify;
/// use std::path::PathBuf;
///
/// assert_eq!(PathBuf::from("/home").id(), "/home");
/// assert_eq!(7_u32.id(), 7);
/// ```
pub trait Identify<I> {
    /// Id derived from `self`.
    fn id(&self) -> I;
}

impl Identify<String> for PathBuf {
    fn id(&self) -> String {
        self.to_string_lossy().into_owned()
    }
}

impl Identify<String> for String {
    fn id(&self) -> String {
        self.clone()
    }
}

macro_rules! identify_self {
    ($($ty:ty),*) => {
        $(
            impl Identify<$ty> for $ty {
                fn id(&self) -> $ty {
                    *self
                }
            }
        )*
    };
}

identify_self!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// ============================================================================
// TreeNode
// ============================================================================

/// Stock [`Node`] implementation wrapping an identifiable payload.
///
/// Children are kept in insertion order and never duplicated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeNode<I, T> {
    inner: T,
    #[cfg_attr(feature = "serde", serde(default))]
    parent_id: Option<I>,
    #[cfg_attr(feature = "serde", serde(default))]
    child_ids: Vec<I>,
}

impl<I, T: Identify<I>> TreeNode<I, T> {
    /// Creates a detached node around `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: value,
            parent_id: None,
            child_ids: Vec::new(),
        }
    }

    /// Sets the parent id (builder form of [`Node::set_parent_id`]).
    pub fn with_parent(mut self, parent_id: I) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Borrows the payload.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Consumes the node and returns the payload.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Child ids in insertion order.
    pub fn child_ids(&self) -> &[I] {
        &self.child_ids
    }
}

impl<I: Clone + PartialEq, T: Identify<I>> TreeNode<I, T> {
    /// Appends a child id (builder form of [`Node::add_child_id`]).
    pub fn with_child(mut self, child_id: I) -> Self {
        Node::add_child_id(&mut self, child_id);
        self
    }
}

impl<I: Clone + PartialEq, T: Identify<I>> Node<I> for TreeNode<I, T> {
    fn id(&self) -> I {
        self.inner.id()
    }

    fn parent_id(&self) -> Option<I> {
        self.parent_id.clone()
    }

    fn child_ids_vec(&self) -> Vec<I> {
        self.child_ids.clone()
    }

    fn set_parent_id(&mut self, parent: I) {
        self.parent_id = Some(parent);
    }

    fn add_child_id(&mut self, child_id: I) {
        if self.child_ids.contains(&child_id) {
            return;
        }
        self.child_ids.push(child_id);
    }

    fn remove_child_id(&mut self, child_id: &I) {
        self.child_ids.retain(|id| id != child_id);
    }
}
