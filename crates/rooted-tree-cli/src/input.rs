//! Reading trees from path lists and JSON node lists.
//!
//! Both formats end up as a [`CliTree`] keyed by strings. Path lists go
//! through [`rooted_tree::from_paths`] and are relabelled so that every
//! command, including `export`, sees a single node type.

use crate::error::{Error, Result};
use clap::ValueEnum;
use rooted_tree::{Node, PathNode, RootedTree, TreeNode};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// Node type of trees read by the CLI.
pub type CliNode = TreeNode<String, String>;

/// Tree type read by the CLI.
pub type CliTree = RootedTree<String, CliNode>;

/// Input format of a tree source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// One filesystem path per line
    #[default]
    Paths,
    /// A JSON array of nodes, root first
    Json,
}

/// Reads the whole source: a file, or stdin when `input` is absent or `-`.
pub fn read_source(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => {
            std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Parses `text` as `format` into a tree.
pub fn parse_tree(text: &str, format: InputFormat) -> Result<CliTree> {
    let tree = match format {
        InputFormat::Paths => parse_paths(text)?,
        InputFormat::Json => parse_json(text)?,
    };
    log::debug!("Parsed {} node(s) from {format:?} input", tree.len());
    Ok(tree)
}

/// Reads and parses a tree source in one step.
pub fn load_tree(input: Option<&Path>, format: InputFormat) -> Result<CliTree> {
    parse_tree(&read_source(input)?, format)
}

fn parse_paths(text: &str) -> Result<CliTree> {
    let paths = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));
    let tree = rooted_tree::from_paths(paths);
    let nodes: Vec<CliNode> = tree.to_nodes().into_iter().map(relabel).collect();
    Ok(CliTree::try_from(nodes)?)
}

fn parse_json(text: &str) -> Result<CliTree> {
    let nodes: Vec<CliNode> = serde_json::from_str(text)?;
    if nodes.is_empty() {
        return Err(Error::input("JSON node list is empty"));
    }
    Ok(CliTree::try_from(nodes)?)
}

fn relabel(node: PathNode) -> CliNode {
    let mut relabelled = TreeNode::new(node.id());
    if let Some(parent_id) = node.parent_id() {
        relabelled = relabelled.with_parent(parent_id);
    }
    for child_id in node.child_ids() {
        relabelled = relabelled.with_child(child_id.clone());
    }
    relabelled
}
