//! CLI entry point for the import normalizer.
//!
//! Provides one command per rewrite pass plus `all`, which runs them in
//! dependency order: normalize, widgets, correct-depth, resolve.

use anyhow::Context as _;
use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use importnorm::io::{ExitCode, OutputFormat, OutputManager};
use importnorm::{
    CrossReferenceResolver, DepthCorrector, FileWalker, Pass, PrefixNormalizer, RewriteError,
    RewriteResult, RunReport, Runner, Settings,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{Level, debug, warn};

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Import path normalizer
#[derive(Parser)]
#[command(
    name = "importnorm",
    version = env!("CARGO_PKG_VERSION"),
    about = "Normalize relative import paths across feature folders",
    long_about = "Rewrites relative imports so shared modules use the right number of \
                  parent hops and their aggregator files, and moved sibling screens \
                  resolve to their new folders. Every pass is safe to re-run.",
    next_line_help = true,
    styles = clap_cargo_style()
)]
struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Show what would change without writing files
    #[arg(long, global = true)]
    dry_run: bool,

    /// Output the run report as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Initialize project
    #[command(about = "Set up .importnorm directory with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration settings
    #[command(about = "Display active settings from .importnorm/settings.toml")]
    Config,

    /// Fix hop prefixes and collapse shared-module imports
    #[command(about = "Normalize shared-module imports under the screens subtree")]
    Normalize {
        /// Subtree to walk (defaults to paths.screens_root)
        root: Option<PathBuf>,
    },

    /// Same normalization over the widgets subtree
    #[command(about = "Normalize shared-module imports under the widgets subtree")]
    Widgets {
        /// Subtree to walk (defaults to paths.widgets_root)
        root: Option<PathBuf>,
    },

    /// Move one-hop aggregator imports to two hops in nested files
    #[command(about = "Correct import depth for the listed nested files")]
    CorrectDepth {
        /// Files to correct (defaults to depth.nested_files)
        files: Vec<PathBuf>,
    },

    /// Retarget sibling imports of screens that moved folders
    #[command(about = "Resolve cross-folder sibling imports under the screens subtree")]
    Resolve {
        /// Subtree to walk (defaults to paths.screens_root)
        root: Option<PathBuf>,
    },

    /// Run every pass in order
    #[command(about = "Run normalize, widgets, correct-depth and resolve")]
    All,
}

fn init_logging(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(cli: &Cli) -> Settings {
    let mut settings = if let Some(config_path) = &cli.config {
        Settings::load_from(config_path).unwrap_or_else(|e| {
            let error = RewriteError::ConfigError {
                reason: format!("{}: {e}", config_path.display()),
            };
            eprintln!("Error: {error}");
            for suggestion in error.recovery_suggestions() {
                eprintln!("  Suggestion: {suggestion}");
            }
            std::process::exit(ExitCode::from_error(&error).into());
        })
    } else {
        Settings::load().unwrap_or_else(|e| {
            eprintln!("Configuration error: {e}");
            Settings::default()
        })
    };

    if cli.dry_run {
        settings.output.dry_run = true;
    }
    if cli.verbose {
        settings.debug = true;
    }
    settings
}

/// Shared state for running passes
struct Session {
    settings: Arc<Settings>,
    runner: Runner,
    walker: FileWalker,
    output: OutputManager,
}

impl Session {
    fn new(mut settings: Settings, format: OutputFormat) -> Self {
        settings.resolve_paths();
        let settings = Arc::new(settings);
        Self {
            runner: Runner::new(settings.output.dry_run),
            walker: FileWalker::new(Arc::clone(&settings)),
            output: OutputManager::new(format),
            settings,
        }
    }

    fn tree(&mut self, pass: &dyn Pass, root: &Path) -> RewriteResult<RunReport> {
        let output = &mut self.output;
        self.runner.run_tree(pass, &self.walker, root, |file| {
            if let Err(e) = output.file(file) {
                warn!("Failed to report progress: {e}");
            }
        })
    }

    fn files(&mut self, pass: &dyn Pass, files: &[PathBuf]) -> RunReport {
        let output = &mut self.output;
        self.runner.run_files(pass, files, |file| {
            if let Err(e) = output.file(file) {
                warn!("Failed to report progress: {e}");
            }
        })
    }

    fn normalize(&mut self, root: Option<PathBuf>) -> RewriteResult<RunReport> {
        let root = root.unwrap_or_else(|| self.settings.paths.screens_root.clone());
        let pass = PrefixNormalizer::new(self.settings.layout());
        self.tree(&pass, &root)
    }

    fn widgets(&mut self, root: Option<PathBuf>) -> RewriteResult<RunReport> {
        let root = root.unwrap_or_else(|| self.settings.paths.widgets_root.clone());
        let pass = PrefixNormalizer::new(self.settings.layout()).named("widgets");
        self.tree(&pass, &root)
    }

    fn correct_depth(&mut self, files: Vec<PathBuf>) -> RewriteResult<RunReport> {
        let files = if files.is_empty() {
            self.settings.depth.nested_files.clone()
        } else {
            files
        };
        Ok(self.files(&DepthCorrector, &files))
    }

    fn resolve(&mut self, root: Option<PathBuf>) -> RewriteResult<RunReport> {
        let root = root.unwrap_or_else(|| self.settings.paths.screens_root.clone());
        self.tree(&CrossReferenceResolver::default(), &root)
    }

    /// Print the report of a single pass, or the error that stopped it
    fn finish(&mut self, result: RewriteResult<RunReport>) -> anyhow::Result<ExitCode> {
        match result {
            Ok(report) => self.output.report(&report).context("writing run report"),
            Err(err) => self.output.error(&err).context("writing error"),
        }
    }

    /// Run every pass in order and print their reports together.
    ///
    /// A pass that cannot start is reported on its own and the rest still run.
    fn all(&mut self) -> anyhow::Result<ExitCode> {
        let results = [
            self.normalize(None),
            self.widgets(None),
            self.correct_depth(Vec::new()),
            self.resolve(None),
        ];

        let mut codes = Vec::new();
        let mut reports = Vec::new();
        for result in results {
            match result {
                Ok(report) => reports.push(report),
                Err(err) => codes.push(self.output.error(&err).context("writing error")?),
            }
        }
        codes.push(self.output.reports(&reports).context("writing run reports")?);

        Ok(codes
            .into_iter()
            .find(|code| !code.is_success())
            .unwrap_or(ExitCode::Success))
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let settings = load_settings(&cli);
    init_logging(settings.debug);
    debug!("Loaded settings: {settings:?}");

    let format = OutputFormat::from_json_flag(cli.json);

    match cli.command {
        Commands::Init { force } => {
            let path = Settings::init_config_file(force)
                .map_err(|e| anyhow::anyhow!("{e}"))
                .context("creating configuration file")?;
            println!("Created configuration file at: {}", path.display());
            println!("Edit this file to customize your settings.");
            Ok(ExitCode::Success)
        }

        Commands::Config => {
            println!("Current Configuration:");
            println!("{}", "=".repeat(50));
            println!("{}", toml::to_string_pretty(&settings)?);
            Ok(ExitCode::Success)
        }

        Commands::Normalize { root } => {
            let mut session = Session::new(settings, format);
            let result = session.normalize(root);
            session.finish(result)
        }
        Commands::Widgets { root } => {
            let mut session = Session::new(settings, format);
            let result = session.widgets(root);
            session.finish(result)
        }
        Commands::CorrectDepth { files } => {
            let mut session = Session::new(settings, format);
            let result = session.correct_depth(files);
            session.finish(result)
        }
        Commands::Resolve { root } => {
            let mut session = Session::new(settings, format);
            let result = session.resolve(root);
            session.finish(result)
        }
        Commands::All => Session::new(settings, format).all(),
    }
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => std::process::exit(code.into()),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(ExitCode::GeneralError.into());
        }
    }
}
