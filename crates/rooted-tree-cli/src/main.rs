//! rtree
//!
//! Command-line reports for rooted trees.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use rooted_tree_cli::cli::{Command, ConfigAction};
use rooted_tree_cli::{Cli, CliConfig, commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // A broken config file must not block `config init`.
    let config = match &cli.command {
        Command::Config {
            action: ConfigAction::Init { .. },
        } => CliConfig::default(),
        _ => CliConfig::load(cli.config.as_deref())?,
    };

    // RUST_LOG wins over -v, which wins over the config file.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter(cli.verbose))),
        )
        .init();

    tracing::debug!(command = ?cli.command, "Starting rtree");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&cli, &config, &mut out)?;
    Ok(())
}
