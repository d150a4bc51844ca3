//! @acp:module "Render Command"
//! @acp:summary "Print the generated block for a single action"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::config::Config;
use crate::metadata::{load_metadata, ActionIdentity};
use crate::render::render_block;
use crate::splice::wrap_with_markers;

/// Options for the render command
#[derive(Debug, Clone)]
pub struct RenderCommandOptions {
    /// Metadata file to render
    pub metadata: PathBuf,
    /// Omit the begin/end markers
    pub bare: bool,
}

/// Render the block for one metadata file
pub fn render_action(options: &RenderCommandOptions, config: &Config) -> Result<String> {
    let path = std::path::absolute(&options.metadata)
        .with_context(|| format!("Failed to resolve {}", options.metadata.display()))?;
    let identity = ActionIdentity::from_metadata_path(&path).ok_or_else(|| {
        anyhow!(
            "Cannot derive <namespace>/<action> from {}",
            options.metadata.display()
        )
    })?;
    let meta = load_metadata(&path)?;

    let mut render_options = config.render_options();
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        render_options.metadata_file = name.to_string();
    }

    let block = render_block(&identity, &meta, &render_options);
    Ok(if options.bare {
        block
    } else {
        wrap_with_markers(&block)
    })
}

/// Execute the render command
pub fn execute_render(options: RenderCommandOptions, config: &Config) -> Result<()> {
    print!("{}", render_action(&options, config)?);
    Ok(())
}
