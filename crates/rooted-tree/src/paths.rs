//! Filesystem path trees.
//!
//! Every path contributes one node per component, hung under `/`. Node ids
//! are the `/`-joined path strings regardless of the host separator, so a
//! tree built on Windows renders the same as one built on Unix.

use crate::node::{Node, TreeNode};
use crate::tree::RootedTree;
use std::path::{Component, Path, PathBuf};

/// Node type of path trees: a `PathBuf` payload keyed by its string form.
pub type PathNode = TreeNode<String, PathBuf>;

const ROOT: &str = "/";

/// Builds a tree of every directory level named by `paths`.
///
/// Relative paths are anchored at `/`; `.` is ignored and `..` climbs one
/// level without ever leaving `/`. Shared prefixes become shared nodes and
/// children keep the order in which they were first seen.
///
/// # Example
///
/// ```rust
/// use rooted_tree::from_paths;
///
/// let tree = from_paths(["/home/user/Documents", "/home/user/Downloads"]);
/// assert_eq!(tree.len(), 5);
/// assert_eq!(
///     tree.list_parent_ids(&"/home/user/Documents".to_string()),
///     vec!["/home/user", "/home", "/"],
/// );
/// ```
pub fn from_paths<P, It>(paths: It) -> RootedTree<String, PathNode>
where
    P: AsRef<Path>,
    It: IntoIterator<Item = P>,
{
    let mut tree = RootedTree::new();
    tree.set_root_node(TreeNode::new(PathBuf::from(ROOT)));

    let mut path_count = 0_usize;
    for path in paths {
        path_count += 1;
        let mut current = ROOT.to_string();
        for component in path.as_ref().components() {
            match component {
                Component::Normal(name) => {
                    let next = join(&current, &name.to_string_lossy());
                    if !tree.contains(&next) {
                        if let Some(parent_node) = tree.get_mut_node(&current) {
                            parent_node.add_child_id(next.clone());
                        }
                        let node = TreeNode::new(PathBuf::from(&next)).with_parent(current.clone());
                        tree.child_nodes.insert(next.clone(), node);
                    }
                    current = next;
                }
                Component::ParentDir => pop(&mut current),
                Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
            }
        }
    }
    log::debug!(
        "Built path tree of {} node(s) from {path_count} path(s)",
        tree.len()
    );
    tree
}

fn join(parent: &str, name: &str) -> String {
    if parent == ROOT {
        format!("{ROOT}{name}")
    } else {
        format!("{parent}/{name}")
    }
}

fn pop(current: &mut String) {
    match current.rfind('/') {
        Some(0) | None => *current = ROOT.to_string(),
        Some(index) => current.truncate(index),
    }
}
