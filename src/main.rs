//! Binary entry point for nftlib.
//!
//! This binary hosts a catalog session on the command line: it loads the
//! catalog and about documents, applies filters and prints the result.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow unnecessary_wraps for consistent command function signatures
#![allow(clippy::unnecessary_wraps)]
// Allow needless_pass_by_value for command functions
#![allow(clippy::needless_pass_by_value)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use commands::{ListArgs, OutputFormat};
use nftlib::config::LibraryConfig;
use nftlib::io::Source;
use nftlib::observability;
use nftlib::rendering::Locale;

/// nftlib - Browse, filter and sort an NFT gallery catalog.
#[derive(Parser)]
#[command(name = "nftlib")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Catalog document (path or URL).
    #[arg(long, global = true)]
    catalog: Option<String>,

    /// About document (path or URL).
    #[arg(long, global = true)]
    about: Option<String>,

    /// Display language: fr or en.
    #[arg(long, global = true)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// List the visible records.
    List(ListArgs),

    /// Show totals per collection and blockchain.
    Stats {
        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show the known tags.
    Tags {
        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show the about document.
    About {
        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show the effective configuration.
    Config {
        /// Show current configuration.
        #[arg(long)]
        show: bool,
    },
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };

    if let Err(e) = observability::init_from_settings(&config.logging, cli.verbose) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    match run_command(cli.command, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        },
    }
}

/// Builds the configuration: file, then environment, then flags.
fn load_config(cli: &Cli) -> anyhow::Result<LibraryConfig> {
    let mut config = LibraryConfig::load(cli.config.as_deref())?.with_env_overrides();

    if let Some(catalog) = &cli.catalog {
        config = config.with_catalog(Source::parse(catalog));
    }
    if let Some(about) = &cli.about {
        config = config.with_about(Source::parse(about));
    }
    if let Some(locale) = &cli.locale {
        let locale = Locale::parse(locale)
            .ok_or_else(|| nftlib::Error::InvalidInput(format!("unsupported locale: {locale}")))?;
        config = config.with_locale(locale);
    }

    Ok(config)
}

/// Runs the selected command.
fn run_command(command: Commands, config: LibraryConfig) -> anyhow::Result<()> {
    match command {
        Commands::List(args) => commands::cmd_list(&config, args),
        Commands::Stats { format } => commands::cmd_stats(&config, format),
        Commands::Tags { format } => commands::cmd_tags(&config, format),
        Commands::About { format } => commands::cmd_about(&config, format),
        Commands::Config { show } => commands::cmd_config(&config, show),
    }
}
