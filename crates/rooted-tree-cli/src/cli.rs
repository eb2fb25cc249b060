//! Command-line arguments.

use crate::input::InputFormat;
use clap::{ArgAction, Args, Parser, Subcommand};
use rooted_tree::ChildWrap;
use std::path::PathBuf;

/// rtree - inspect rooted trees built from path lists or JSON node lists
#[derive(Parser, Debug)]
#[command(name = "rtree", version)]
#[command(about = "Inspect rooted trees built from path lists or JSON node lists", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a tree report
    Show {
        /// Tree source
        #[command(flatten)]
        input: InputArgs,

        /// Report options
        #[command(flatten)]
        report: ReportArgs,
    },

    /// Print the ancestors of a node, nearest first
    Ancestors {
        /// Node id
        id: String,

        /// Tree source
        #[command(flatten)]
        input: InputArgs,

        /// Levels to walk up
        #[arg(long, value_name = "N")]
        depth: Option<u32>,
    },

    /// Print the descendants of a node in pre-order
    Descendants {
        /// Node id
        id: String,

        /// Tree source
        #[command(flatten)]
        input: InputArgs,

        /// Levels to walk down
        #[arg(long, value_name = "N")]
        depth: Option<u32>,
    },

    /// Print the tree as a JSON node list, root first
    Export {
        /// Tree source
        #[command(flatten)]
        input: InputArgs,
    },

    /// Configuration management
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Where a tree is read from.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Input file; stdin when absent or `-`
    pub input: Option<PathBuf>,

    /// Input format (default from config, else `paths`)
    #[arg(short, long, value_enum)]
    pub format: Option<InputFormat>,
}

/// Report rendering overrides.
#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Show at most N children per node
    #[arg(long, value_name = "N")]
    pub max_children: Option<u32>,

    /// Which end of a long child list stays visible
    #[arg(long, value_name = "top|bottom")]
    pub wrap: Option<ChildWrap>,

    /// Focus the report on this node id
    #[arg(long, value_name = "ID")]
    pub select: Option<String>,

    /// Levels shown around the selected node, or below the root
    #[arg(long, value_name = "N")]
    pub depth: Option<u32>,
}

/// `rtree config` subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
