//! Benchmarks for the filter pipeline.
//!
//! Benchmark targets:
//! - `apply_filters` over 1k records: <1ms
//! - `describe_view` over 1k records: <2ms
//! - Filter query parsing: <10us

// Criterion macros generate items without docs - this is expected for benchmarks
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use nftlib::models::Record;
use nftlib::{Catalog, FilterConfig, Locale, SortOrder, apply_filters, describe_view, parse_filter_query};

const COLLECTIONS: [&str; 4] = ["M-Vox", "M-Numeris", "M-Lumen", "Archives"];
const CHAINS: [&str; 3] = ["Ethereum", "Polygon", "Tezos"];
const TAGS: [&str; 6] = ["rare", "gen1", "audio", "sculpture", "portrait", "édition"];

/// Builds a deterministic catalog of `size` published records.
fn catalog(size: usize) -> Catalog {
    Catalog::from_records((0..size).map(|i| {
        let tags: Vec<&str> = TAGS.iter().copied().skip(i % 3).step_by(2).collect();
        Record::new(format!("Œuvre n°{i} {}", TAGS[i % TAGS.len()]))
            .with_collection(COLLECTIONS[i % COLLECTIONS.len()])
            .with_blockchain(CHAINS[i % CHAINS.len()])
            .with_tags(tags)
            .with_date(&format!("20{:02}-{:02}-{:02}", 18 + i % 7, 1 + i % 12, 1 + i % 28))
            .with_status("published")
    }))
}

// ============================================================================
// Filter Benchmarks
// ============================================================================

fn bench_apply_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_filters");

    let configs = [
        ("default", FilterConfig::new()),
        ("collection", FilterConfig::new().with_collection("M-Vox")),
        (
            "collection_chain_tag",
            FilterConfig::new()
                .with_collection("M-Vox")
                .with_blockchain("Polygon")
                .with_tag("rare"),
        ),
        ("search", FilterConfig::new().with_search("ŒUVRE N°1")),
        ("alpha", FilterConfig::new().with_sort(SortOrder::AlphaAsc)),
    ];

    for size in [100usize, 1_000, 10_000] {
        let catalog = catalog(size);
        group.throughput(Throughput::Elements(size as u64));

        for (name, config) in &configs {
            group.bench_with_input(BenchmarkId::new(*name, size), &catalog, |b, catalog| {
                b.iter(|| apply_filters(black_box(catalog.records()), black_box(config)));
            });
        }
    }

    group.finish();
}

// ============================================================================
// Render Benchmarks
// ============================================================================

fn bench_describe_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("describe_view");

    for size in [100usize, 1_000] {
        let catalog = catalog(size);
        let config = FilterConfig::new().with_tag("gen1");
        let visible = apply_filters(catalog.records(), &config);

        group.bench_with_input(BenchmarkId::new("fr", size), &visible, |b, visible| {
            b.iter(|| {
                describe_view(
                    black_box(catalog.records()),
                    black_box(visible),
                    &config,
                    catalog.tags(),
                    Locale::Fr,
                )
            });
        });
    }

    group.finish();
}

// ============================================================================
// Query Parser Benchmarks
// ============================================================================

fn bench_query_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_parsing");

    let queries = [
        ("empty", ""),
        ("simple", "tag:rare"),
        ("medium", "collection:M-Vox chain:Polygon tag:rare,gen1"),
        (
            "complex",
            "col:M-Vox blockchain:Ethereum tag:rare tag:gen1,audio sort:alpha-asc écho du nord",
        ),
    ];

    for (name, query) in queries {
        group.bench_with_input(BenchmarkId::new("parse", name), &query, |b, query| {
            b.iter(|| parse_filter_query(black_box(query)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_apply_filters,
    bench_describe_view,
    bench_query_parsing
);
criterion_main!(benches);
