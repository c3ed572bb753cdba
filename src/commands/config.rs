use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::Config;

/// Write a commented default config file unless one already exists.
pub fn run(path: Option<&Path>) -> Result<()> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => Config::config_path()?,
    };

    if path.exists() {
        println!("{}", format!("Config already exists: {}", path.display()).dimmed());
        return Ok(());
    }

    Config::create_default_config(&path)?;
    println!("{}", format!("Created: {}", path.display()).green());

    Ok(())
}
