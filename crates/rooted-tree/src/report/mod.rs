//! Text reports of rooted trees.
//!
//! A report draws one line per node with box-drawing branches:
//!
//! ```text
//!  1
//!  ├── 1 ↜ 2
//!  │   └── 2 ↜ 3
//!  └╌╌╌╌╌╌ 4
//! ```
//!
//! Child nodes are labelled `parent ↜ id`. Dashed branches mark children a
//! node declares without the tree storing them, and a dashed bar (`╎`)
//! stands for children hidden by [`Config::with_max_children`] or, at the
//! very top, for the parent a subtree was cut from.
//!
//! [`Config::with_select_node`] narrows the report to a window around one
//! node and keeps that node's branch visible in every wrapped child list.

mod display;
mod lvl_char;

use crate::node::Node;
use crate::tree::RootedTree;
use lvl_char::LvlChar;
use std::collections::HashSet;
use std::fmt::{Display, Write};
use std::hash::Hash;
use std::str::FromStr;
use thiserror::Error;
use unicode_width::UnicodeWidthStr;

/// Result type alias for report operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while rendering a report.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Writing into the output buffer failed.
    #[error("Formatting error")]
    Formatting(#[from] std::fmt::Error),

    /// A child-wrap name did not parse.
    #[error("Unknown child wrap: {0} (expected `top` or `bottom`)")]
    UnknownChildWrap(String),
}

// ============================================================================
// Configuration
// ============================================================================

/// Which end of a long child list stays visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ChildWrap {
    /// Hide the first children, show the last ones.
    Top,
    /// Show the first children, hide the rest.
    #[default]
    Bottom,
}

impl FromStr for ChildWrap {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            _ => Err(Error::UnknownChildWrap(s.to_string())),
        }
    }
}

/// Report settings.
///
/// # Example
///
/// ```rust
/// use rooted_tree::{ChildWrap, Config};
///
/// let config = Config::default()
///     .with_max_children(2)
///     .with_child_wrap(ChildWrap::Top)
///     .with_select_node(4_u32, 1);
/// assert_eq!(config.max_children(), Some(2));
/// assert_eq!(config.select_node(), Some(&(4, 1)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config<I> {
    #[cfg_attr(feature = "serde", serde(default))]
    max_children: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    child_wrap: ChildWrap,
    // (node_id, levels shown above and below it)
    #[cfg_attr(feature = "serde", serde(default))]
    select_node: Option<(I, u32)>,
}

impl<I> Default for Config<I> {
    fn default() -> Self {
        Self {
            max_children: None,
            child_wrap: ChildWrap::default(),
            select_node: None,
        }
    }
}

impl<I> Config<I> {
    /// Shows at most `max_children` children per node.
    pub fn with_max_children(mut self, max_children: u32) -> Self {
        self.max_children = Some(max_children);
        self
    }

    /// Chooses which end of a long child list is hidden.
    pub fn with_child_wrap(mut self, child_wrap: ChildWrap) -> Self {
        self.child_wrap = child_wrap;
        self
    }

    /// Focuses the report on `node_id`, `lvl` levels up and down.
    pub fn with_select_node(mut self, node_id: I, lvl: u32) -> Self {
        self.select_node = Some((node_id, lvl));
        self
    }

    /// Child limit per node, if any.
    pub fn max_children(&self) -> Option<u32> {
        self.max_children
    }

    /// Wrap direction for long child lists.
    pub fn child_wrap(&self) -> ChildWrap {
        self.child_wrap
    }

    /// Focused node and window depth, if any.
    pub fn select_node(&self) -> Option<&(I, u32)> {
        self.select_node.as_ref()
    }
}

/// Per-render state.
struct Meta<I> {
    // The selected node followed by its shown ancestors.
    select_nodes: Vec<I>,
    // Ids from the root down to the node being drawn.
    branch: HashSet<I>,
}

impl<I> Default for Meta<I> {
    fn default() -> Self {
        Self {
            select_nodes: Vec::new(),
            branch: HashSet::new(),
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

impl<I: Eq + Clone + Hash + Display, N: Node<I> + Clone> RootedTree<I, N> {
    /// Renders the tree as text.
    ///
    /// The output starts and ends with a newline; an empty tree renders as
    /// `"\n"`. An unknown selected node falls back to the whole tree.
    pub fn report(&self, config: &Config<I>) -> Result<String> {
        if let Some((node_id, lvl)) = &config.select_node {
            if self.contains(node_id) {
                let ancestors: Vec<I> = self
                    .list_parent_ids_with_lvl(node_id, Some(*lvl))
                    .into_iter()
                    .filter(|id| self.contains(id))
                    .collect();
                let window_root = ancestors.last().unwrap_or(node_id).clone();
                let depth = u32::try_from(ancestors.len())
                    .unwrap_or(u32::MAX)
                    .saturating_add(*lvl);

                if let Some(window) = self.clone_subtree_with_lvl(&window_root, Some(depth)) {
                    let mut select_nodes = vec![node_id.clone()];
                    select_nodes.extend(ancestors);
                    let meta = Meta {
                        select_nodes,
                        ..Meta::default()
                    };
                    return window.render(config, meta);
                }
            }
            log::debug!("Selected node {node_id} not in tree, reporting whole tree");
        }
        self.render(config, Meta::default())
    }
}

impl<I: Eq + Clone + Hash + Display, N: Node<I>> RootedTree<I, N> {
    fn render(&self, config: &Config<I>, mut meta: Meta<I>) -> Result<String> {
        let mut out = String::new();
        if let Some(root) = self.root() {
            if let (Some(_), len) = parent_id_and_len(root) {
                write!(out, "\n{}", LvlChar::DashBar(0))?;
                self.format_node(&mut out, config, &mut meta, root, &[LvlChar::DashBar(len)], "")?;
            } else {
                self.format_node(&mut out, config, &mut meta, root, &[], "")?;
            }
        }
        out.push('\n');
        Ok(out)
    }

    /// Writes `node` and its children.
    ///
    /// A child id already on `meta.branch` closes a cycle and is drawn like
    /// a missing child.
    fn format_node(
        &self,
        out: &mut String,
        config: &Config<I>,
        meta: &mut Meta<I>,
        node: &N,
        lvl_prefixes: &[LvlChar],
        suffix: &str,
    ) -> std::fmt::Result {
        let node_id = node.id();
        write!(out, "\n{} ", compute_prefixes(lvl_prefixes, suffix))?;
        let (parent_id, parent_len) = parent_id_and_len(node);
        if let Some(parent_id) = parent_id {
            write!(out, "{parent_id} ↜ ")?;
        }
        write!(out, "{node_id}")?;
        meta.branch.insert(node_id.clone());

        let child_ids = node.child_ids_vec();
        let (start, end) = child_window(config, meta, &child_ids);
        if start > 0 {
            write_wrap_marker(out, lvl_prefixes, parent_len)?;
        }

        for (index, child_id) in child_ids.iter().enumerate().take(end).skip(start) {
            let is_last = index + 1 == child_ids.len();
            let mut child_prefixes = lvl_prefixes.to_vec();
            child_prefixes.push(if is_last {
                LvlChar::Space(parent_len)
            } else {
                LvlChar::SolidBar(parent_len)
            });

            let child = self
                .get_node(child_id)
                .filter(|_| !meta.branch.contains(child_id));
            if let Some(child) = child {
                let suffix = if is_last {
                    LvlChar::SolidAngle(parent_len)
                } else {
                    LvlChar::SolidCross(parent_len)
                };
                let suffix = suffix.to_string();
                self.format_node(out, config, meta, child, &child_prefixes, &suffix)?;
            } else {
                if meta.branch.contains(child_id) {
                    log::debug!("Child {child_id} of {node_id} closes a cycle, not descending");
                }
                let suffix = if is_last {
                    LvlChar::SolidDashAngle(parent_len)
                } else {
                    LvlChar::SolidDashCross(parent_len)
                };
                write!(
                    out,
                    "\n{} {child_id}",
                    compute_prefixes(&child_prefixes, &suffix.to_string())
                )?;
            }
        }

        if end < child_ids.len() {
            write_wrap_marker(out, lvl_prefixes, parent_len)?;
        }
        meta.branch.remove(&node_id);
        Ok(())
    }
}

/// Range `[start, end)` of the children to draw.
fn child_window<I: PartialEq>(config: &Config<I>, meta: &Meta<I>, child_ids: &[I]) -> (usize, usize) {
    let len = child_ids.len();
    let Some(max_children) = config.max_children else {
        return (0, len);
    };
    let max_children = max_children as usize;
    if len <= max_children {
        return (0, len);
    }

    let start = if !meta.select_nodes.is_empty() {
        meta.select_nodes
            .iter()
            .find_map(|selected| child_ids.iter().position(|id| id == selected))
            .map_or(0, |index| {
                index
                    .saturating_sub(max_children / 2)
                    .min(len - max_children)
            })
    } else {
        match config.child_wrap {
            ChildWrap::Top => len - max_children,
            ChildWrap::Bottom => 0,
        }
    };
    (start, start + max_children)
}

fn write_wrap_marker(out: &mut String, lvl_prefixes: &[LvlChar], parent_len: u32) -> std::fmt::Result {
    let mut prefixes = lvl_prefixes.to_vec();
    prefixes.push(LvlChar::DashBar(parent_len));
    prefixes.push(LvlChar::Empty);
    write!(out, "\n{}", compute_prefixes(&prefixes, ""))
}

fn parent_id_and_len<I: Display, N: Node<I>>(node: &N) -> (Option<I>, u32) {
    match node.parent_id() {
        Some(parent_id) => {
            let width = UnicodeWidthStr::width(parent_id.to_string().as_str());
            (Some(parent_id), u32::try_from(width).unwrap_or(u32::MAX))
        }
        None => (None, 0),
    }
}

/// Draws every column but the last, then `suffix` in its place.
fn compute_prefixes(lvl_prefixes: &[LvlChar], suffix: &str) -> String {
    let mut result = String::new();
    if let Some((_, ancestors)) = lvl_prefixes.split_last() {
        for lvl_prefix in ancestors {
            result.push_str(&lvl_prefix.to_string());
        }
    }
    result.push_str(suffix);
    result
}
