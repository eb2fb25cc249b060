//! # rooted-tree-cli
//!
//! Library half of the `rtree` binary:
//! - [`cli`]: clap argument definitions
//! - [`input`]: reading trees from path lists and JSON node lists
//! - [`commands`]: `show`, `ancestors`, `descendants`, `export`
//! - [`config`] and [`config_handlers`]: the TOML config file

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod input;

pub use cli::Cli;
pub use config::CliConfig;
pub use error::{Error, Result};
