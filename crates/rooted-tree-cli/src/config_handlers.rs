//! Handler functions for config CLI commands.

use crate::cli::ConfigAction;
use crate::config::CliConfig;
use crate::error::{Error, Result};
use std::io::Write;
use std::path::PathBuf;

/// Handle a config subcommand.
pub fn handle_config_command<W: Write>(
    config_path: Option<&str>,
    action: &ConfigAction,
    config: &CliConfig,
    out: &mut W,
) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path, out),
        ConfigAction::Show => cmd_config_show(config, out),
        ConfigAction::Init { force } => cmd_config_init(config_path, *force, out).map(|_| ()),
    }
}

/// Show the resolved config file path.
pub fn cmd_config_path<W: Write>(config_path: Option<&str>, out: &mut W) -> Result<()> {
    let path = resolved_path(config_path)?;
    writeln!(out, "{}", path.display())?;
    if !path.exists() {
        eprintln!("(file does not exist; run `rtree config init` to create it)");
    }
    Ok(())
}

/// Print the effective configuration.
pub fn cmd_config_show<W: Write>(config: &CliConfig, out: &mut W) -> Result<()> {
    write!(out, "{}", config.to_toml_string()?)?;
    Ok(())
}

/// Create a default configuration file and return its path.
pub fn cmd_config_init<W: Write>(
    config_path: Option<&str>,
    force: bool,
    out: &mut W,
) -> Result<PathBuf> {
    let path = resolved_path(config_path)?;
    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }
    let toml_str = CliConfig::default().to_toml_string()?;
    std::fs::write(&path, toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    writeln!(out, "Config file created at {}", path.display())?;
    Ok(path)
}

fn resolved_path(config_path: Option<&str>) -> Result<PathBuf> {
    CliConfig::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory for this platform"))
}
