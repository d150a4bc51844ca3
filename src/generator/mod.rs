//! @acp:module "README Generator"
//! @acp:summary "Discovers actions and regenerates their README sections"
//! @acp:domain cli
//! @acp:layer service
//!
//! ## Overview
//!
//! For every `<namespace>/<action>/action.yml` under the repository root the
//! generator loads the metadata, renders the documentation block, splices it
//! into the sibling README and writes the README only when its bytes change.
//! Runs are idempotent: a second run over unchanged metadata writes nothing.

pub mod discover;

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

pub use discover::discover_metadata;

use crate::config::{Config, Strictness};
use crate::error::{ActionDocsError, Result};
use crate::metadata::{load_metadata, ActionIdentity};
use crate::render::{render_block, RenderOptions};
use crate::splice::{splice_block, wrap_with_markers};

/// Whether changed READMEs are written back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    #[default]
    Write,
    /// Compute everything, write nothing
    DryRun,
}

/// Settings resolved from config and CLI flags
#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    pub pattern: String,
    pub readme: String,
    pub render: RenderOptions,
    pub strictness: Strictness,
    pub mode: WriteMode,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for GeneratorSettings {
    fn from(config: &Config) -> Self {
        Self {
            pattern: config.pattern.clone(),
            readme: config.readme.clone(),
            render: config.render_options(),
            strictness: config.error_handling.strictness,
            mode: WriteMode::Write,
        }
    }
}

/// Main generator - coordinates discovery, rendering and README writes
pub struct ReadmeGenerator {
    root: PathBuf,
    settings: GeneratorSettings,
}

impl ReadmeGenerator {
    /// Create a generator for the repository at `root`
    pub fn new(root: impl Into<PathBuf>, settings: GeneratorSettings) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(ActionDocsError::RootNotFound(root));
        }
        Ok(Self { root, settings })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// All metadata files under the root, sorted
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        discover_metadata(&self.root, &self.settings.pattern)
    }

    /// Path relative to the repository root, for display
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }

    /// Render the full README text for one metadata file without touching disk
    pub fn render_readme(&self, metadata_path: &Path) -> Result<RenderedReadme> {
        let identity = ActionIdentity::from_metadata_path(metadata_path).ok_or_else(|| {
            ActionDocsError::InvalidMetadata {
                path: metadata_path.to_path_buf(),
                reason: "expected a <namespace>/<action>/<metadata file> layout".to_string(),
            }
        })?;
        let meta = load_metadata(metadata_path)?;

        let readme_path = metadata_path
            .parent()
            .map(|dir| dir.join(&self.settings.readme))
            .unwrap_or_else(|| PathBuf::from(&self.settings.readme));

        let existing = if readme_path.exists() {
            Some(std::fs::read_to_string(&readme_path)?)
        } else {
            None
        };

        let block = wrap_with_markers(&render_block(&identity, &meta, &self.settings.render));
        let content = splice_block(existing.as_deref().unwrap_or(""), &block);

        Ok(RenderedReadme {
            metadata_path: metadata_path.to_path_buf(),
            readme_path,
            existing,
            content,
        })
    }

    /// Regenerate the README for one metadata file
    pub fn process(&self, metadata_path: &Path) -> Result<ReadmeResult> {
        tracing::debug!(path = %metadata_path.display(), "processing action metadata");
        let rendered = self.render_readme(metadata_path)?;

        let action = match (&rendered.existing, rendered.is_changed()) {
            (_, false) => ReadmeAction::Unchanged,
            (_, true) if self.settings.mode == WriteMode::DryRun => ReadmeAction::Stale,
            (None, true) => {
                write_atomic(&rendered.readme_path, &rendered.content)?;
                ReadmeAction::Created
            }
            (Some(_), true) => {
                write_atomic(&rendered.readme_path, &rendered.content)?;
                ReadmeAction::Updated
            }
        };

        Ok(ReadmeResult {
            metadata_path: rendered.metadata_path,
            readme_path: rendered.readme_path,
            action,
        })
    }

    /// Process every discovered metadata file
    ///
    /// Malformed metadata is skipped and recorded under `Strictness::Permissive`
    /// and aborts the run under `Strictness::Strict`. Filesystem errors always
    /// abort.
    pub fn run(&self) -> Result<RunSummary> {
        let files = self.discover()?;
        let mut summary = RunSummary {
            discovered: files.len(),
            ..Default::default()
        };

        for path in files {
            match self.process(&path) {
                Ok(result) => summary.results.push(result),
                Err(err)
                    if err.is_metadata_error()
                        && self.settings.strictness == Strictness::Permissive =>
                {
                    tracing::warn!(path = %path.display(), error = %err, "skipping malformed action metadata");
                    summary.skipped.push(SkippedFile {
                        path,
                        reason: err.to_string(),
                    });
                }
                Err(err) => return Err(err),
            }
        }

        Ok(summary)
    }
}

/// README text computed for one action
#[derive(Debug, Clone)]
pub struct RenderedReadme {
    pub metadata_path: PathBuf,
    pub readme_path: PathBuf,
    /// README content on disk before regeneration, if the file existed
    pub existing: Option<String>,
    pub content: String,
}

impl RenderedReadme {
    pub fn is_changed(&self) -> bool {
        self.existing.as_deref() != Some(self.content.as_str())
    }
}

/// Result of regenerating one README
#[derive(Debug, Clone)]
pub struct ReadmeResult {
    pub metadata_path: PathBuf,
    pub readme_path: PathBuf,
    pub action: ReadmeAction,
}

/// Action taken for a README
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadmeAction {
    /// README did not exist and was written
    Created,
    /// Existing README was rewritten
    Updated,
    /// README already up to date
    Unchanged,
    /// README out of date; not written (dry run)
    Stale,
}

impl ReadmeAction {
    /// Whether the README differs (or differed) from the generated content
    pub fn is_change(&self) -> bool {
        !matches!(self, ReadmeAction::Unchanged)
    }
}

/// A metadata file that could not be processed
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of a full run
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub discovered: usize,
    pub results: Vec<ReadmeResult>,
    pub skipped: Vec<SkippedFile>,
}

impl RunSummary {
    /// READMEs that were (or would be) rewritten
    pub fn changed(&self) -> impl Iterator<Item = &ReadmeResult> {
        self.results.iter().filter(|r| r.action.is_change())
    }

    pub fn changed_count(&self) -> usize {
        self.changed().count()
    }
}

/// Replace `path` with `content` via a temp file in the same directory
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
