//! @acp:module "Generate Command"
//! @acp:summary "Regenerate README documentation blocks for all actions"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `action-docs generate`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use crate::config::{Config, Strictness};
use crate::generator::{GeneratorSettings, ReadmeAction, ReadmeGenerator, RunSummary, WriteMode};

/// Options for the generate command
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Repository root to scan
    pub root: PathBuf,
    /// Report changes without writing
    pub dry_run: bool,
    /// Abort on the first malformed metadata file
    pub strict: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            dry_run: false,
            strict: false,
        }
    }
}

/// Execute the generate command
pub fn execute_generate(options: GenerateOptions, config: &Config) -> Result<RunSummary> {
    let mut settings = GeneratorSettings::from(config);
    if options.strict {
        settings.strictness = Strictness::Strict;
    }
    if options.dry_run {
        settings.mode = WriteMode::DryRun;
    }

    let generator = ReadmeGenerator::new(&options.root, settings)?;
    let summary = generator
        .run()
        .with_context(|| format!("Failed to generate READMEs under {}", options.root.display()))?;

    if summary.discovered == 0 {
        println!("No {} files found. Nothing to do.", config.pattern);
        return Ok(summary);
    }

    for result in summary.changed() {
        let path = generator.relative(&result.readme_path).display();
        match result.action {
            ReadmeAction::Stale => println!("{} {}", style("Would update").cyan(), path),
            _ => println!("{} {}", style("Updated").green(), path),
        }
    }

    for skipped in &summary.skipped {
        eprintln!(
            "{} Skipped {}: {}",
            style("✗").red(),
            generator.relative(&skipped.path).display(),
            skipped.reason
        );
    }

    let verb = if options.dry_run { "that would be updated" } else { "updated" };
    println!("Done. README files {}: {}", verb, summary.changed_count());

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_counts_updates() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("ns/act");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("action.yml"), "name: Act\n").unwrap();

        let options = GenerateOptions {
            root: temp.path().to_path_buf(),
            ..Default::default()
        };
        let summary = execute_generate(options.clone(), &Config::default()).unwrap();
        assert_eq!(summary.changed_count(), 1);

        let summary = execute_generate(options, &Config::default()).unwrap();
        assert_eq!(summary.changed_count(), 0);
    }

    #[test]
    fn test_generate_missing_root_fails() {
        let temp = TempDir::new().unwrap();
        let options = GenerateOptions {
            root: temp.path().join("missing"),
            ..Default::default()
        };
        assert!(execute_generate(options, &Config::default()).is_err());
    }
}
