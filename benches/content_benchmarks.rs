//! Criterion benchmarks for content engine operations.
//!
//! Run with: `cargo bench`
//!
//! These measure the pure editor operations on growing pages, the JSON
//! round-trip, and full-page rendering.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::json;

use content_blocks::core::registry::TemplateRegistry;
use content_blocks::core::schema::ALL_KINDS;
use content_blocks::editor::{add_block, move_block, update_block, Direction};
use content_blocks::render::{render, PageTemplate};
use content_blocks::{BlockKind, PageContent};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn page_of(n: usize, registry: &TemplateRegistry) -> PageContent {
    let mut content = PageContent::new();
    for i in 0..n {
        let kind = ALL_KINDS[i % ALL_KINDS.len()];
        let (next, _) = add_block(&content, kind, registry).unwrap();
        content = next;
    }
    content
}

// ---------------------------------------------------------------------------
// Editor benchmarks
// ---------------------------------------------------------------------------

fn bench_add_block(c: &mut Criterion) {
    let registry = TemplateRegistry::builtin();
    let mut group = c.benchmark_group("add_block");

    for count in [10, 100, 1_000] {
        let content = page_of(count, &registry);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                let (next, index) =
                    add_block(&content, BlockKind::Paragraph, &registry).unwrap();
                black_box((next.len(), index))
            });
        });
    }
    group.finish();
}

fn bench_update_block(c: &mut Criterion) {
    let registry = TemplateRegistry::builtin();
    let mut group = c.benchmark_group("update_block");

    for count in [10, 100, 1_000] {
        let content = page_of(count, &registry);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                let mut partial = serde_json::Map::new();
                partial.insert("text".into(), json!("updated"));
                black_box(update_block(&content, count / 2, partial).unwrap().len())
            });
        });
    }
    group.finish();
}

fn bench_move_block(c: &mut Criterion) {
    let registry = TemplateRegistry::builtin();
    let mut group = c.benchmark_group("move_block");

    for count in [10, 100, 1_000] {
        let content = page_of(count, &registry);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| black_box(move_block(&content, count / 2, Direction::Up).unwrap().len()));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Serialization benchmarks
// ---------------------------------------------------------------------------

fn bench_json_round_trip(c: &mut Criterion) {
    let registry = TemplateRegistry::builtin();
    let mut group = c.benchmark_group("json_round_trip");

    for count in [10, 100, 1_000] {
        let content = page_of(count, &registry);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                let text = content.to_json_string();
                black_box(PageContent::from_json_str(&text).unwrap().len())
            });
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Renderer benchmarks
// ---------------------------------------------------------------------------

fn bench_render_page(c: &mut Criterion) {
    let registry = TemplateRegistry::builtin();
    let mut group = c.benchmark_group("render_page");

    for count in [10, 100, 1_000] {
        let content = page_of(count, &registry);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                let page = render(&content, PageTemplate::Default);
                black_box(page.to_html().len())
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_add_block,
    bench_update_block,
    bench_move_block,
    bench_json_round_trip,
    bench_render_page
);
criterion_main!(benches);
