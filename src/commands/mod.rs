//! Command handlers module.
//!
//! - `list.rs`: filtered, sorted listing of the catalog
//! - `info.rs`: stats, tags and about
//! - `config.rs`: configuration display

mod config;
mod info;
mod list;

use anyhow::Context;
use clap::ValueEnum;

pub use config::cmd_config;
pub use info::{cmd_about, cmd_stats, cmd_tags};
pub use list::{ListArgs, cmd_list};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text.
    Text,
    /// JSON on stdout.
    Json,
}

/// Serializes a value as pretty JSON on stdout.
fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value).context("failed to serialize output")?);
    Ok(())
}
