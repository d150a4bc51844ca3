#![forbid(unsafe_code)]
//! Action Docs Command Line Interface

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use console::style;

use action_docs::commands::{
    execute_check, execute_generate, execute_init, execute_render, CheckOptions,
    GenerateOptions, InitOptions, RenderCommandOptions,
};
use action_docs::config::CONFIG_FILE_NAME;
use action_docs::{ActionDocsError, Config};

/// Check found stale READMEs, or a strict run hit malformed metadata
const EXIT_FAILURE: i32 = 1;

/// Unrecoverable setup failure (missing root, bad config, bad pattern)
const EXIT_SETUP: i32 = 2;

#[derive(Parser)]
#[command(name = "action-docs")]
#[command(about = "Regenerate action README documentation from action.yml metadata")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path (default: <root>/.action-docs.json)
    #[arg(short, long, global = true, env = "ACTION_DOCS_CONFIG")]
    config: Option<PathBuf>,

    /// Repository placeholder used in usage references
    #[arg(long, global = true)]
    repo_slug: Option<String>,

    /// Version placeholder used in usage references
    #[arg(long, global = true)]
    version_placeholder: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate README documentation blocks (default)
    Generate {
        /// Repository root to scan
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Report READMEs that would change without writing them
        #[arg(long)]
        dry_run: bool,

        /// Abort on the first malformed action.yml instead of skipping it
        #[arg(long)]
        strict: bool,
    },

    /// Fail if any README documentation block is out of date (CI mode)
    Check {
        /// Repository root to scan
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Show a unified diff for each out-of-date README
        #[arg(long)]
        diff: bool,

        /// Abort on the first malformed action.yml instead of reporting it
        #[arg(long)]
        strict: bool,
    },

    /// Print the generated block for a single action.yml
    Render {
        /// Path to <namespace>/<action>/action.yml
        metadata: PathBuf,

        /// Omit the begin/end markers
        #[arg(long)]
        bare: bool,
    },

    /// Write a default .action-docs.json
    Init {
        /// Repository root
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", style("✗").red(), err);
            exit_code_for(&err)
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let overrides = ConfigOverrides {
        path: cli.config,
        repo_slug: cli.repo_slug,
        version: cli.version_placeholder,
    };
    let command = cli.command.unwrap_or(Commands::Generate {
        root: PathBuf::from("."),
        dry_run: false,
        strict: false,
    });

    match command {
        Commands::Generate { root, dry_run, strict } => {
            let config = overrides.load(&root)?;
            let options = GenerateOptions { root, dry_run, strict };
            execute_generate(options, &config)?;
            Ok(0)
        }

        Commands::Check { root, diff, strict } => {
            let config = overrides.load(&root)?;
            let options = CheckOptions { root, diff, strict };
            let report = execute_check(options, &config)?;
            Ok(if report.is_clean() { 0 } else { EXIT_FAILURE })
        }

        Commands::Render { metadata, bare } => {
            let config = overrides.load(Path::new("."))?;
            execute_render(RenderCommandOptions { metadata, bare }, &config)?;
            Ok(0)
        }

        Commands::Init { root, force } => {
            execute_init(InitOptions { root, force })?;
            Ok(0)
        }
    }
}

/// Config location and values given on the command line
struct ConfigOverrides {
    path: Option<PathBuf>,
    repo_slug: Option<String>,
    version: Option<String>,
}

impl ConfigOverrides {
    /// Load config from `--config` or `<root>/.action-docs.json`, then apply CLI overrides
    fn load(&self, root: &Path) -> anyhow::Result<Config> {
        let path = self
            .path
            .clone()
            .unwrap_or_else(|| root.join(CONFIG_FILE_NAME));

        let mut config = if self.path.is_some() {
            Config::load(&path)
        } else {
            Config::load_or_default(&path)
        }
        .with_context(|| format!("Failed to load config from {}", path.display()))?;

        if let Some(slug) = &self.repo_slug {
            config.repo_slug = slug.clone();
        }
        if let Some(version) = &self.version {
            config.version = version.clone();
        }

        Ok(config)
    }
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ActionDocsError>() {
        Some(e) if e.is_metadata_error() => EXIT_FAILURE,
        _ => EXIT_SETUP,
    }
}
