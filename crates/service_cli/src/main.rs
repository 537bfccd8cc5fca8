//! valuekit CLI - Command Line Demonstration of the Value Utilities
//!
//! # Commands
//!
//! - `valuekit demo` - Print the value-utilities walkthrough (default)
//! - `valuekit check` - Print the resolved configuration
//!
//! # Architecture
//!
//! As the service layer, this crate wires configuration, logging, and the
//! generator together and hands them to `valuekit_core`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::DemoConfig;

/// valuekit demonstration CLI
#[derive(Parser, Debug)]
#[command(name = "valuekit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (must exist when given; defaults to valuekit.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Generator seed (overrides configuration and environment)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Print the value-utilities walkthrough
    Demo,

    /// Print the resolved configuration
    Check,
}

impl Cli {
    /// The command to run; a bare invocation runs the demo
    fn selected_command(&self) -> Commands {
        self.command.unwrap_or(Commands::Demo)
    }

    /// Resolve configuration: file, then `lookup` overrides, then `--seed`
    fn resolve(&self, lookup: impl Fn(&str) -> Option<String>) -> Result<DemoConfig> {
        let mut config = DemoConfig::resolve(self.config.as_deref(), lookup)?;
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        Ok(config)
    }
}

/// Log filter from `RUST_LOG` when it parses, otherwise the configured level
fn log_filter(rust_log: Option<&str>, config: &DemoConfig) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(config.log_level.to_lowercase()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve(|key| std::env::var(key).ok())?;

    // Logs go to stderr so stdout carries only command output
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(rust_log.as_deref(), &config))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.selected_command() {
        Commands::Demo => commands::demo::run(&config),
        Commands::Check => commands::check::run(&config),
    }
}
