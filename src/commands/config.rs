//! Config command handler.
//!
//! Contains the implementation of the `config` CLI command.

use anyhow::Context;
use nftlib::config::LibraryConfig;

/// Config command.
pub fn cmd_config(config: &LibraryConfig, show: bool) -> anyhow::Result<()> {
    if !show {
        println!("Use --show to display the current configuration.");
        return Ok(());
    }

    println!("Current Configuration");
    println!("=====================");
    println!();

    println!("Config File:");
    match &config.path {
        Some(path) => println!("  {}", path.display()),
        None => println!("  (none - using defaults)"),
    }
    println!();

    let rendered =
        toml::to_string(&config.to_config_file()).context("failed to render configuration")?;
    print!("{rendered}");
    Ok(())
}
