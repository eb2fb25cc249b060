//! Command dispatch and tree commands.

use crate::cli::{Cli, Command, InputArgs, ReportArgs};
use crate::config::CliConfig;
use crate::config_handlers::handle_config_command;
use crate::error::{Error, Result};
use crate::input::{CliTree, load_tree};
use rooted_tree::Config;
use std::io::Write;

/// Window depth around `--select` when neither flag nor config sets one.
pub const DEFAULT_SELECT_DEPTH: u32 = 1;

// ============================================================================
// Command dispatch
// ============================================================================

/// Runs the parsed command, writing its output to `out`.
pub fn run<W: Write>(cli: &Cli, config: &CliConfig, out: &mut W) -> Result<()> {
    match &cli.command {
        Command::Show { input, report } => {
            let tree = read_tree(input, config)?;
            cmd_show(&tree, report, config, out)
        }
        Command::Ancestors { id, input, depth } => {
            let tree = read_tree(input, config)?;
            cmd_ancestors(&tree, id, *depth, out)
        }
        Command::Descendants { id, input, depth } => {
            let tree = read_tree(input, config)?;
            cmd_descendants(&tree, id, *depth, out)
        }
        Command::Export { input } => {
            let tree = read_tree(input, config)?;
            cmd_export(&tree, out)
        }
        Command::Config { action } => {
            handle_config_command(cli.config.as_deref(), action, config, out)
        }
    }
}

fn read_tree(input: &InputArgs, config: &CliConfig) -> Result<CliTree> {
    let format = input.format.unwrap_or(config.input.format);
    load_tree(input.input.as_deref(), format)
}

// ============================================================================
// Tree commands
// ============================================================================

/// Prints the report of `tree`, flags taking precedence over `config`.
pub fn cmd_show<W: Write>(
    tree: &CliTree,
    args: &ReportArgs,
    config: &CliConfig,
    out: &mut W,
) -> Result<()> {
    let depth = args.depth.or(config.report.depth);
    let mut report_config =
        Config::default().with_child_wrap(args.wrap.unwrap_or(config.report.child_wrap));
    if let Some(max_children) = args.max_children.or(config.report.max_children) {
        report_config = report_config.with_max_children(max_children);
    }

    let text = match (&args.select, depth, tree.root_id()) {
        (Some(id), _, _) => {
            require_node(tree, id)?;
            report_config =
                report_config.with_select_node(id.clone(), depth.unwrap_or(DEFAULT_SELECT_DEPTH));
            tree.report(&report_config)?
        }
        (None, Some(lvl), Some(root_id)) => {
            let limited = tree
                .clone_subtree_with_lvl(&root_id, Some(lvl))
                .ok_or_else(|| Error::not_found(root_id.clone()))?;
            limited.report(&report_config)?
        }
        _ => tree.report(&report_config)?,
    };
    write!(out, "{}", text.strip_prefix('\n').unwrap_or(&text))?;
    Ok(())
}

/// Prints the ancestors of `id`, nearest first.
pub fn cmd_ancestors<W: Write>(
    tree: &CliTree,
    id: &str,
    depth: Option<u32>,
    out: &mut W,
) -> Result<()> {
    let id = require_node(tree, id)?;
    for ancestor in tree.list_parent_ids_with_lvl(&id, depth) {
        writeln!(out, "{ancestor}")?;
    }
    Ok(())
}

/// Prints the descendants of `id` in pre-order.
pub fn cmd_descendants<W: Write>(
    tree: &CliTree,
    id: &str,
    depth: Option<u32>,
    out: &mut W,
) -> Result<()> {
    let id = require_node(tree, id)?;
    for descendant in tree.list_child_ids_with_lvl(&id, depth) {
        writeln!(out, "{descendant}")?;
    }
    Ok(())
}

/// Prints the stored nodes as a pretty JSON array, root first.
pub fn cmd_export<W: Write>(tree: &CliTree, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &tree.to_nodes())?;
    writeln!(out)?;
    Ok(())
}

fn require_node(tree: &CliTree, id: &str) -> Result<String> {
    let id = id.to_string();
    if tree.contains(&id) {
        Ok(id)
    } else {
        Err(Error::not_found(id))
    }
}
