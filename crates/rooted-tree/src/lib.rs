#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Rooted Tree
//!
//! A generic, id-indexed rooted tree. Callers bring their own node type by
//! implementing [`Node`]; the tree keeps parent and child links consistent
//! and layers structural tooling on top:
//!
//! - ancestor / descendant queries, optionally depth-limited
//! - subtree surgery: [`clone_subtree`](RootedTree::clone_subtree),
//!   [`take_subtree`](RootedTree::take_subtree) and
//!   [`graft_subtree`](RootedTree::graft_subtree)
//! - conversion from and to flat node lists
//! - structural [`diff`](RootedTree::diff)
//! - box-drawing text [`report`](RootedTree::report)s, also used by
//!   `Display` and `Debug`
//! - filesystem path trees via [`from_paths`]
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`TreeNode`], [`ChildWrap`] and
//!   [`Config`], so node lists from [`RootedTree::to_nodes`] can be stored
//!   and read back.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`node`]: The `Node` trait and the stock `TreeNode`
//! - [`report`]: Text rendering configuration

pub mod error;
pub mod node;
pub mod report;

mod convert;
mod diff;
mod paths;
mod subtree;
mod tree;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod test_data;

// Re-export key types at crate root for convenience
pub use diff::TreeDiff;
pub use error::{Error, Result};
pub use node::{Identify, Node, TreeNode};
pub use paths::{PathNode, from_paths};
pub use report::{ChildWrap, Config};
pub use tree::RootedTree;
