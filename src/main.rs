//! strawberry CLI
//!
//! Animated widget playgrounds, theme scaffolding and class inspection.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use strawberry_tui::config::Config;
use strawberry_tui::error::Result;
use strawberry_tui::scaffold;
use strawberry_tui::theme::{Theme, parse_class, resolve};
use strawberry_tui::tui::{self, ListDemo, Playground};

#[derive(Parser)]
#[command(name = "strawberry")]
#[command(about = "Design tokens, animation and widgets for terminal UIs")]
#[command(version)]
struct Cli {
    /// Config file (default: <config_dir>/strawberry-tui/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the widget playground
    Playground {
        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Run the select list on its own
    List {
        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Write a theme skeleton into <dir>/theme
    Init {
        dir: PathBuf,

        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Write a component template into <dir>
    Add {
        /// button, select-list, highlight-row or panel
        component: String,

        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Parse a utility-class string and print it as JSON
    Parse {
        classes: String,

        /// Also resolve token names against the theme
        #[arg(long)]
        resolve: bool,
    },
}

#[derive(clap::Args)]
struct DisplayArgs {
    /// Theme TOML (overrides the config file)
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Animation frame rate (overrides the config file)
    #[arg(long)]
    fps: Option<u32>,
}

impl DisplayArgs {
    /// Apply the flags and load the theme.
    ///
    /// A theme named on the command line must load; one named only in the
    /// config file falls back to the default.
    fn apply(self, config: &mut Config) -> Result<Arc<Theme>> {
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        match self.theme {
            Some(theme) => {
                config.theme = Some(theme);
                config.try_load_theme()
            }
            None => Ok(config.load_theme()),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Playground { display } => {
            let _guard = init_file_logging(&config)?;
            let theme = display.apply(&mut config)?;
            info!(fps = config.fps, theme = %theme.name, "starting playground");
            tui::run(Playground::new(theme, config.fps))
        }
        Commands::List { display } => {
            let _guard = init_file_logging(&config)?;
            let theme = display.apply(&mut config)?;
            info!(fps = config.fps, theme = %theme.name, "starting list demo");
            tui::run(ListDemo::new(theme, config.fps))
        }
        Commands::Init { dir, force } => {
            init_stderr_logging(&config);
            cmd_init(&dir, force)
        }
        Commands::Add { component, dir, force } => {
            init_stderr_logging(&config);
            cmd_add(&component, &dir, force)
        }
        Commands::Parse { classes, resolve } => {
            init_stderr_logging(&config);
            cmd_parse(&classes, resolve, &config)
        }
    }
}

// ============================================================================
// LOGGING
// ============================================================================

fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// The TUI owns stdout and stderr, so interactive runs log to a file.
fn init_file_logging(config: &Config) -> Result<WorkerGuard> {
    let log_path = config.log_file_path();
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&log_path)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
        .init();

    Ok(guard)
}

fn init_stderr_logging(config: &Config) {
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_init(dir: &Path, force: bool) -> Result<()> {
    for path in scaffold::init(dir, force)? {
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_add(component: &str, dir: &Path, force: bool) -> Result<()> {
    let path = scaffold::add(component, dir, force)?;
    println!("wrote {}", path.display());
    Ok(())
}

fn cmd_parse(classes: &str, with_resolved: bool, config: &Config) -> Result<()> {
    let spec = parse_class(classes);
    let json = if with_resolved {
        let theme = config.load_theme();
        serde_json::to_string_pretty(&serde_json::json!({
            "spec": spec,
            "resolved": resolve(&spec, &theme.tokens),
        }))?
    } else {
        serde_json::to_string_pretty(&spec)?
    };
    println!("{}", json);
    Ok(())
}
