//! Performance benchmarks for founders-sample.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - The letter fixture used by the integration tests
//! - A synthetic long document with many paragraphs and footnotes
//! - Encoding detection alone

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use founders_sample::encoding::detect_encoding;
use founders_sample::{extract_main_text, extract_main_text_str};

const LETTER_HTML: &[u8] = include_bytes!("../tests/fixtures/washington_to_hamilton.html");

fn long_document(paragraphs: usize) -> String {
    let mut html = String::from(
        "<html><head><title>Journal</title></head><body><div id=\"nav\"><p>Menu</p></div>\
         <div class=\"innerdiv docbody\">",
    );
    for i in 0..paragraphs {
        html.push_str(&format!(
            "<p>Entry {i}. Rode to the   mill and dined at home<a class=\"ptr\" href=\"#fn{i}\">{i}</a>with \
             company; the weather clear and\n warm.</p>"
        ));
    }
    html.push_str("</div></body></html>");
    html
}

fn bench_extract_letter(c: &mut Criterion) {
    c.bench_function("extract_letter", |b| {
        b.iter(|| extract_main_text(black_box(LETTER_HTML), "bench"));
    });
}

fn bench_detect_encoding(c: &mut Criterion) {
    c.bench_function("detect_encoding_letter", |b| {
        b.iter(|| detect_encoding(black_box(LETTER_HTML)));
    });
}

/// Benchmark documents of growing length
fn bench_long_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("long_documents");

    for paragraphs in [10, 100, 1000] {
        let html = long_document(paragraphs);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("extract", format!("{paragraphs} paragraphs")),
            &html,
            |b, html| {
                b.iter(|| extract_main_text_str(black_box(html)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_extract_letter,
    bench_detect_encoding,
    bench_long_documents
);
criterion_main!(benches);
