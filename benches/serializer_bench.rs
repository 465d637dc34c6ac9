// benches/serializer_bench.rs
//! Benchmarks for rendering custom media in each export format.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use custom_media_export::{
    default_transform, escape_for_js, render, CustomMediaJson, CustomMediaMap, ExportFormat,
};

/// Create a mapping with `count` breakpoints
fn create_sample_media(count: usize) -> CustomMediaJson {
    let map: CustomMediaMap = (0..count)
        .map(|i| {
            (
                format!("--mq-breakpoint-{}", i),
                format!("(min-width: {}px) and (max-width: {}px)", i * 40, i * 40 + 39),
            )
        })
        .collect();
    default_transform(&map)
}

fn bench_formats(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for count in [10, 100, 1000] {
        let media = create_sample_media(count);
        for format in [
            ExportFormat::Css,
            ExportFormat::Json,
            ExportFormat::CommonJs,
            ExportFormat::EsModule,
        ] {
            group.bench_with_input(
                BenchmarkId::new(format.as_str(), count),
                &media,
                |b, media| b.iter(|| render(format, black_box(media)).unwrap()),
            );
        }
    }

    group.finish();
}

fn bench_escaping(c: &mut Criterion) {
    let plain = "(min-width: 400px) and (orientation: landscape)";
    let awkward = "it's a \\'quoted\\' query\nacross\r\nlines";

    c.bench_function("escape_plain", |b| b.iter(|| escape_for_js(black_box(plain))));
    c.bench_function("escape_awkward", |b| {
        b.iter(|| escape_for_js(black_box(awkward)))
    });
}

criterion_group!(benches, bench_formats, bench_escaping);
criterion_main!(benches);
