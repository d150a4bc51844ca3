//! @acp:module "Configuration"
//! @acp:summary "Project configuration loading and defaults"
//! @acp:domain cli
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::render::{RenderOptions, DEFAULT_METADATA_FILE, DEFAULT_VERSION, REPO_SLUG_PLACEHOLDER};

/// Default config file name, looked up under the repository root
pub const CONFIG_FILE_NAME: &str = ".action-docs.json";

/// Discovery pattern: `<namespace>/<action>/action.yml`
pub const DEFAULT_METADATA_PATTERN: &str = "*/*/action.yml";

/// README file written next to each metadata file
pub const DEFAULT_README_NAME: &str = "README.md";

/// @acp:summary "Main action-docs configuration structure"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glob (relative to the root) matching action metadata files
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// README file name written next to each metadata file
    #[serde(default = "default_readme")]
    pub readme: String,

    /// Repository placeholder used in usage references
    #[serde(default = "default_repo_slug")]
    pub repo_slug: String,

    /// Version placeholder used in usage references
    #[serde(default = "default_version")]
    pub version: String,

    /// Error handling configuration
    #[serde(default)]
    pub error_handling: ErrorHandling,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            readme: default_readme(),
            repo_slug: default_repo_slug(),
            version: default_version(),
            error_handling: ErrorHandling::default(),
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a .action-docs.json file"
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load the config at `path` if it exists, defaults otherwise
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// File name component of the discovery pattern
    pub fn metadata_file_name(&self) -> &str {
        self.pattern
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty() && !name.contains(|c: char| matches!(c, '*' | '?' | '[')))
            .unwrap_or(DEFAULT_METADATA_FILE)
    }

    /// Placeholders and names embedded in generated blocks
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            repo_slug: self.repo_slug.clone(),
            version: self.version.clone(),
            metadata_file: self.metadata_file_name().to_string(),
        }
    }
}

fn default_pattern() -> String {
    DEFAULT_METADATA_PATTERN.to_string()
}

fn default_readme() -> String {
    DEFAULT_README_NAME.to_string()
}

fn default_repo_slug() -> String {
    REPO_SLUG_PLACEHOLDER.to_string()
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

/// @acp:summary "Error handling configuration"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorHandling {
    /// What to do when a metadata file cannot be parsed
    #[serde(default)]
    pub strictness: Strictness,
}

/// Policy for malformed metadata files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Report the file, skip it, and continue with the others
    #[default]
    Permissive,
    /// Abort the run on the first malformed file
    Strict,
}
