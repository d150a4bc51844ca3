#![forbid(unsafe_code)]

//! @acp:module "Action Docs Library"
//! @acp:summary "README documentation blocks generated from action metadata"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # action-docs
//!
//! Regenerates the documentation section of every action README from its
//! `action.yml`, leaving hand-written content outside the markers untouched.
//!
//! ## Pipeline
//!
//! - **Discovery**: `<namespace>/<action>/action.yml` under a repository root
//! - **Loading**: YAML metadata into [`ActionMetadata`]
//! - **Rendering**: a deterministic Markdown block via [`render_block`]
//! - **Splicing**: the block replaces the region between
//!   [`BEGIN_MARKER`] and [`END_MARKER`] via [`splice_block`]
//! - **Writing**: only when the README bytes change
//!
//! ## Example
//!
//! ```rust,no_run
//! use action_docs::{GeneratorSettings, ReadmeGenerator};
//!
//! fn main() -> anyhow::Result<()> {
//!     let generator = ReadmeGenerator::new(".", GeneratorSettings::default())?;
//!     let summary = generator.run()?;
//!
//!     println!("README files updated: {}", summary.changed_count());
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod generator;
pub mod heuristics;
pub mod metadata;
pub mod render;
pub mod splice;

// Re-exports
pub use config::{Config, Strictness};
pub use error::{ActionDocsError, Result};
pub use generator::{
    GeneratorSettings, ReadmeAction, ReadmeGenerator, ReadmeResult, RunSummary, WriteMode,
};
pub use heuristics::{infer_project_selection, looks_boolean_input, ProjectSelection};
pub use metadata::{
    load_metadata, parse_metadata, ActionIdentity, ActionMetadata, InputSpec, OutputSpec,
    RunsSpec,
};
pub use render::{render_block, RenderOptions};
pub use splice::{split_document, splice_block, wrap_with_markers, BEGIN_MARKER, END_MARKER};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
