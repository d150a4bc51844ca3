//! @acp:module "Errors"
//! @acp:summary "Error types for metadata loading, discovery and README writes"
//! @acp:domain cli
//! @acp:layer model

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the action-docs library
#[derive(Debug, Error)]
pub enum ActionDocsError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to parse {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid metadata in {path}: {reason}")]
    InvalidMetadata { path: PathBuf, reason: String },

    #[error("invalid discovery pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("repository root not found: {0}")]
    RootNotFound(PathBuf),
}

impl ActionDocsError {
    /// Whether this error came from a single malformed metadata file
    /// (as opposed to the environment or the filesystem)
    pub fn is_metadata_error(&self) -> bool {
        matches!(
            self,
            ActionDocsError::Yaml { .. } | ActionDocsError::InvalidMetadata { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ActionDocsError>;
