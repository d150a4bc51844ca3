//! @acp:module "Init Command"
//! @acp:summary "Write a default .action-docs.json"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::config::{Config, CONFIG_FILE_NAME};

/// Options for the init command
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Repository root to write the config into
    pub root: PathBuf,
    /// Overwrite an existing config
    pub force: bool,
}

/// Execute the init command, returning the config path when written
pub fn execute_init(options: InitOptions) -> Result<Option<PathBuf>> {
    let config_path = options.root.join(CONFIG_FILE_NAME);

    if config_path.exists() && !options.force {
        eprintln!(
            "{} {} already exists (use --force to overwrite)",
            style("!").yellow(),
            config_path.display()
        );
        return Ok(None);
    }

    Config::default().save(&config_path)?;
    println!(
        "{} Created {}",
        style("✓").green(),
        config_path.display()
    );

    Ok(Some(config_path))
}
