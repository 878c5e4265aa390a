//! Palette command implementation

use std::path::Path;

use super::load_config;
use crate::cli::error::CliError;

/// Handle the `palette` command: print the effective configuration as TOML
pub fn handle_palette(config: Option<&Path>) -> Result<(), CliError> {
    print!("{}", render_palette(config)?);
    Ok(())
}

/// Effective configuration as TOML
pub fn render_palette(config: Option<&Path>) -> Result<String, CliError> {
    let config = load_config(config)?;
    Ok(config.to_toml_string()?)
}
