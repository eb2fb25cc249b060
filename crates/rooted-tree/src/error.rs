//! Error types for rooted-tree

use thiserror::Error;

/// Result type alias for rooted-tree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or reshaping a [`RootedTree`](crate::RootedTree).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A second root was offered to a tree that already has one.
    #[error("Root node already exists")]
    RootNodeAlreadyExists,

    /// A node offered as root already points at a parent.
    #[error("Root node has a parent")]
    RootNodeHasParent,

    /// The referenced parent is not stored in the tree.
    #[error("Parent node does not exist")]
    ParentNodeDoesNotExist,

    /// The parent does not list the node among its children.
    #[error("Parent node does not contain child")]
    ParentNodeDoesNotContainChild,

    /// A non-root node carries no parent id.
    #[error("Child node has no parent")]
    ChildNodeHasNoParent,

    /// A node with the same id is already stored.
    #[error("Node already exists")]
    NodeAlreadyExists,
}
