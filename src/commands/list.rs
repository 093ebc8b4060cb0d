//! List command handler.

use clap::Args;

use nftlib::config::LibraryConfig;
use nftlib::io::Loader;
use nftlib::models::{FilterConfig, Record, Selection, SortOrder};
use nftlib::rendering::Locale;
use nftlib::services::parse_filter_query;

use super::{OutputFormat, print_json};

/// Arguments of the `list` command.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Filter query, e.g. `collection:M-Vox tag:rare sort:oldest aube`.
    ///
    /// Explicit flags override the matching parts of the query.
    #[arg(short, long)]
    query: Option<String>,

    /// Collection to show (`all` for every collection).
    #[arg(long)]
    collection: Option<String>,

    /// Blockchain to show (`all` for every chain).
    #[arg(long)]
    chain: Option<String>,

    /// Required tag; repeat to require several.
    #[arg(short, long)]
    tag: Vec<String>,

    /// Free-text search over title, description and tags.
    #[arg(short, long)]
    search: Option<String>,

    /// Sort order: newest, oldest, alpha-asc, alpha-desc.
    #[arg(long)]
    sort: Option<SortOrder>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl ListArgs {
    /// Builds the filter configuration from the query and the flags.
    fn filter_config(&self) -> FilterConfig {
        let mut filter = self
            .query
            .as_deref()
            .map(parse_filter_query)
            .unwrap_or_default();

        if let Some(collection) = &self.collection {
            filter.collection = Selection::parse(collection);
        }
        if let Some(chain) = &self.chain {
            filter.blockchain = Selection::parse(chain);
        }
        for tag in &self.tag {
            filter = filter.with_tag(tag.as_str());
        }
        if let Some(search) = &self.search {
            filter.search = search.trim().to_string();
        }
        if let Some(sort) = self.sort {
            filter.sort = sort;
        }
        filter
    }
}

/// List command.
pub fn cmd_list(config: &LibraryConfig, args: ListArgs) -> anyhow::Result<()> {
    let mut session = Loader::default().open_session(config);
    let view = session.apply_config(args.filter_config());

    if args.format == OutputFormat::Json {
        return print_json(&view);
    }

    if let Some(error) = &view.error {
        println!("{error}");
        return Ok(());
    }

    if view.empty {
        println!("{}", config.locale.empty_message());
    } else {
        for record in session.store().visible() {
            print_record(record, config.locale);
        }
    }
    println!("{}", view.result_count.message);

    Ok(())
}

fn print_record(record: &Record, locale: Locale) {
    println!("{}", record.title);

    let mut meta = vec![record.collection.as_str(), record.blockchain.as_str()];
    let date = locale.format_date(&record.date);
    if !date.is_empty() {
        meta.push(&date);
    }
    println!("  {}", meta.join(" · "));

    if !record.tags.is_empty() {
        println!("  #{}", record.tags.join(" #"));
    }
    if !record.description_short.is_empty() {
        println!("  {}", record.description_short);
    }
    if let Some(pdf) = &record.pdf {
        println!("  pdf: {pdf}");
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: ListArgs,
    }

    fn parse(argv: &[&str]) -> FilterConfig {
        let harness = Harness::parse_from(std::iter::once("list").chain(argv.iter().copied()));
        harness.args.filter_config()
    }

    #[test]
    fn test_flags_override_query() {
        let filter = parse(&[
            "--query",
            "collection:M-Vox tag:rare sort:oldest aube",
            "--collection",
            "M-Numeris",
            "--tag",
            "gen1",
            "--tag",
            "rare",
        ]);
        assert_eq!(filter.collection.value(), Some("M-Numeris"));
        assert_eq!(filter.tags, vec!["rare", "gen1"]);
        assert_eq!(filter.sort, SortOrder::Oldest);
        assert_eq!(filter.search, "aube");
    }

    #[test]
    fn test_no_flags_is_default() {
        assert!(parse(&[]).is_default());
        assert_eq!(parse(&["--sort", "alpha-desc"]).sort, SortOrder::AlphaDesc);
        assert!(parse(&["--chain", "all"]).blockchain.is_all());
    }
}
