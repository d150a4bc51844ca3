//! @acp:module "Check Command"
//! @acp:summary "Verify README documentation blocks are up to date"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `action-docs check` for CI: nothing is written, stale READMEs are
//! listed (optionally with a unified diff) and the caller fails the build.

use std::path::PathBuf;

use anyhow::Result;
use console::style;
use similar::TextDiff;

use crate::config::{Config, Strictness};
use crate::generator::{GeneratorSettings, ReadmeGenerator, RenderedReadme, WriteMode};

/// Options for the check command
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Repository root to scan
    pub root: PathBuf,
    /// Print a unified diff for each stale README
    pub diff: bool,
    /// Abort on the first malformed metadata file
    pub strict: bool,
}

/// Result of a check run
#[derive(Debug, Default)]
pub struct CheckReport {
    pub checked: usize,
    pub stale: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

impl CheckReport {
    /// Whether every README is current and every metadata file parsed
    pub fn is_clean(&self) -> bool {
        self.stale.is_empty() && self.skipped.is_empty()
    }
}

/// Execute the check command
pub fn execute_check(options: CheckOptions, config: &Config) -> Result<CheckReport> {
    let mut settings = GeneratorSettings::from(config);
    settings.mode = WriteMode::DryRun;
    if options.strict {
        settings.strictness = Strictness::Strict;
    }

    let generator = ReadmeGenerator::new(&options.root, settings)?;
    let files = generator.discover()?;

    let mut report = CheckReport::default();
    if files.is_empty() {
        println!("No {} files found. Nothing to do.", config.pattern);
        return Ok(report);
    }

    for path in files {
        let rendered = match generator.render_readme(&path) {
            Ok(rendered) => rendered,
            Err(err)
                if err.is_metadata_error()
                    && generator.settings().strictness == Strictness::Permissive =>
            {
                eprintln!(
                    "{} Skipped {}: {}",
                    style("✗").red(),
                    generator.relative(&path).display(),
                    err
                );
                report.skipped.push(path);
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        report.checked += 1;
        if rendered.is_changed() {
            let readme = generator.relative(&rendered.readme_path).to_path_buf();
            println!("{} Out of date: {}", style("✗").red(), readme.display());
            if options.diff {
                print!("{}", unified_diff(&rendered, &readme.to_string_lossy()));
            }
            report.stale.push(readme);
        }
    }

    if report.is_clean() {
        println!(
            "{} All {} README files are up to date",
            style("✓").green(),
            report.checked
        );
    } else {
        println!(
            "README files out of date: {} (run `action-docs generate` to fix)",
            report.stale.len()
        );
    }

    Ok(report)
}

/// Unified diff between the README on disk and the regenerated one
pub fn unified_diff(rendered: &RenderedReadme, label: &str) -> String {
    let old = rendered.existing.as_deref().unwrap_or("");
    TextDiff::from_lines(old, rendered.content.as_str())
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{}", label), &format!("b/{}", label))
        .to_string()
}
