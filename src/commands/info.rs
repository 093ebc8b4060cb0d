//! Stats, tags and about command handlers.

use serde::Serialize;

use nftlib::LibrarySession;
use nftlib::config::LibraryConfig;
use nftlib::io::Loader;
use nftlib::rendering::{RenderDescription, Stats};

use super::{OutputFormat, print_json};

/// JSON payload of the `stats` command.
#[derive(Debug, Serialize)]
struct StatsReport<'a> {
    #[serde(flatten)]
    stats: &'a Stats,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl<'a> StatsReport<'a> {
    fn new(view: &'a RenderDescription) -> Self {
        Self {
            stats: &view.stats,
            error: view.error.as_deref(),
        }
    }
}

/// JSON payload of the `tags` command.
#[derive(Debug, Serialize)]
struct TagsReport<'a> {
    tags: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl<'a> TagsReport<'a> {
    fn new(session: &'a LibrarySession) -> Self {
        Self {
            tags: session.store().catalog().tags(),
            error: session.load_error(),
        }
    }
}

/// Stats command.
pub fn cmd_stats(config: &LibraryConfig, format: OutputFormat) -> anyhow::Result<()> {
    let session = Loader::default().open_session(config);
    let view = session.render();

    if format == OutputFormat::Json {
        return print_json(&StatsReport::new(&view));
    }
    if let Some(error) = &view.error {
        println!("{error}");
        return Ok(());
    }

    print_stats(&view.stats);
    Ok(())
}

fn print_stats(stats: &Stats) {
    println!("Total: {}", stats.total);
    println!();
    println!("Collections:");
    for (name, count) in &stats.by_collection {
        println!("  {}: {count}", display_name(name));
    }
    println!();
    println!("Blockchains:");
    for (name, count) in &stats.by_blockchain {
        println!("  {}: {count}", display_name(name));
    }
}

fn display_name(name: &str) -> &str {
    if name.is_empty() { "(none)" } else { name }
}

/// Tags command.
pub fn cmd_tags(config: &LibraryConfig, format: OutputFormat) -> anyhow::Result<()> {
    let session = Loader::default().open_session(config);

    if format == OutputFormat::Json {
        return print_json(&TagsReport::new(&session));
    }
    if let Some(error) = session.load_error() {
        println!("{error}");
        return Ok(());
    }

    for tag in session.store().catalog().tags() {
        println!("{tag}");
    }
    Ok(())
}

/// About command.
pub fn cmd_about(config: &LibraryConfig, format: OutputFormat) -> anyhow::Result<()> {
    let about = Loader::default()
        .load_about(&config.about)
        .unwrap_or_default();

    if format == OutputFormat::Json {
        return print_json(&about);
    }
    if about.is_empty() {
        println!("No about information available.");
        return Ok(());
    }

    if let Some(vision) = &about.vision {
        println!("Vision: {vision}");
    }
    if let Some(mission) = &about.mission {
        println!("Mission: {mission}");
    }
    if let Some(url) = &about.lenid_url {
        println!("Lenid: {url}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nftlib::Source;
    use nftlib::rendering::Locale;
    use serde_json::json;
    use tempfile::TempDir;

    fn session_for(contents: &str) -> (TempDir, LibrarySession) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nfts.json");
        std::fs::write(&path, contents).unwrap();
        let config = LibraryConfig::new()
            .with_catalog(Source::File(path))
            .with_about(Source::File(dir.path().join("missing.json")))
            .with_locale(Locale::En);
        let session = Loader::default().open_session(&config);
        (dir, session)
    }

    #[test]
    fn test_json_reports_carry_load_error() {
        let (_dir, session) = session_for("[{");

        let stats = serde_json::to_value(StatsReport::new(&session.render())).unwrap();
        assert_eq!(stats["total"], 0);
        assert_eq!(stats["error"], "Error loading data.");

        let tags = serde_json::to_value(TagsReport::new(&session)).unwrap();
        assert_eq!(tags, json!({"tags": [], "error": "Error loading data."}));
    }

    #[test]
    fn test_json_reports_omit_error_on_success() {
        let (_dir, session) = session_for(
            &json!([{"title": "Aube", "collection": "M-Vox", "tags": ["rare"]}]).to_string(),
        );

        let stats = serde_json::to_value(StatsReport::new(&session.render())).unwrap();
        assert_eq!(stats["total"], 1);
        assert_eq!(stats["by_collection"]["M-Vox"], 1);
        assert!(stats.get("error").is_none());

        let tags = serde_json::to_value(TagsReport::new(&session)).unwrap();
        assert_eq!(tags, json!({"tags": ["rare"]}));
    }
}
