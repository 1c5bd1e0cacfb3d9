//! Performance benchmarks for lessonmark
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

/// Sample lesson documents of various sizes
mod samples {
    pub const TINY: &str = "Hello, **world**!";

    pub const SMALL: &str =
        "## Lesson 1\n\nThis paragraph has **strong** text.\n\n- Item 1\n- Item 2\n- Item 3\n";

    pub const HTML: &str = "<h2>Lesson 1</h2><p>Already <strong>formatted</strong> content.</p>";

    /// Generate a large lesson by repeating sections
    pub fn large() -> String {
        let section = "## Section Title\n\nThis paragraph contains **bold** runs and plain text.\n\n\
                       ### Checklist\n- First bullet with **bold** text\n- Second bullet\n- Third bullet\n\n";
        section.repeat(64)
    }
}

fn bench_to_html(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_html");

    for (name, input) in [("tiny", samples::TINY), ("small", samples::SMALL)] {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(name, |b| b.iter(|| lessonmark::to_html(black_box(input))));
    }

    let large = samples::large();
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("large", |b| {
        b.iter(|| lessonmark::to_html(black_box(&large)))
    });

    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let large = samples::large();

    let mut group = c.benchmark_group("stages");
    group.throughput(Throughput::Bytes(large.len() as u64));

    group.bench_function("detect_miss", |b| {
        b.iter(|| lessonmark::detect(black_box(&large)))
    });
    group.bench_function("detect_hit", |b| {
        b.iter(|| lessonmark::detect(black_box(samples::HTML)))
    });
    group.bench_function("assemble", |b| {
        b.iter(|| lessonmark::assemble(black_box(&large)))
    });
    group.bench_function("assemble_and_build", |b| {
        b.iter(|| {
            let blocks = lessonmark::assemble(black_box(&large));
            lessonmark::build_nodes(&blocks)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_to_html, bench_stages);
criterion_main!(benches);
