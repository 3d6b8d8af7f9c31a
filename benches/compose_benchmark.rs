//! Benchmarks for rowpress composition and rendering.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic row sequences shaped like real uploads:
//! a dated title, a few paragraphs, and an image per publication.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rowpress::render::{to_html, RenderOptions};
use rowpress::{compose, ContentRow};

/// Creates a synthetic row sequence with the given number of publications.
fn create_test_rows(publications: usize, paragraphs_per_publication: usize) -> Vec<ContentRow> {
    let mut rows = Vec::new();
    for publication in 1..=publications {
        rows.push(
            ContentRow::new(publication as i64, "T", format!("Publication {}", publication))
                .with_date(21, "Octubre", 2025)
                .with_style("color:#2c3e50; text-align:center"),
        );
        for paragraph in 0..paragraphs_per_publication {
            rows.push(ContentRow::new(
                publication as i64,
                "P",
                format!("Paragraph {} of publication {}.\nSecond line.", paragraph, publication),
            ));
        }
        rows.push(ContentRow::new(
            publication as i64,
            "I",
            format!("https://example.com/{}.png", publication),
        ));
    }
    rows
}

fn bench_compose(c: &mut Criterion) {
    let small = create_test_rows(10, 5);
    let large = create_test_rows(200, 10);

    c.bench_function("compose_10_publications", |b| {
        b.iter(|| compose(black_box(&small)))
    });
    c.bench_function("compose_200_publications", |b| {
        b.iter(|| compose(black_box(&large)))
    });
}

fn bench_render_html(c: &mut Criterion) {
    let rows = create_test_rows(50, 8);
    let doc = compose(&rows).expect("compose");
    let options = RenderOptions::default();

    c.bench_function("render_html_50_publications", |b| {
        b.iter(|| to_html(black_box(&doc), black_box(&options)))
    });
}

criterion_group!(benches, bench_compose, bench_render_html);
criterion_main!(benches);
