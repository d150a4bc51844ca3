//! @acp:module "Renderer"
//! @acp:summary "Markdown rendering of the generated README block"
//! @acp:domain cli
//! @acp:layer output

pub mod block;
pub mod markdown;

pub use block::render_block;
pub use markdown::{escape_cell, neutralize_comments, normalize_markdown};

/// Repository placeholder embedded in usage references
pub const REPO_SLUG_PLACEHOLDER: &str = "${{ github.repository }}";

/// Version placeholder embedded in usage references
pub const DEFAULT_VERSION: &str = "v1";

/// Metadata file name discovered under each action directory
pub const DEFAULT_METADATA_FILE: &str = "action.yml";

/// Placeholders and names embedded in the generated block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub repo_slug: String,
    pub version: String,
    /// File name cited as the source of truth
    pub metadata_file: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            repo_slug: REPO_SLUG_PLACEHOLDER.to_string(),
            version: DEFAULT_VERSION.to_string(),
            metadata_file: DEFAULT_METADATA_FILE.to_string(),
        }
    }
}
