use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kintuni_chart::config::RadixConfig;
use kintuni_chart::radix::{draw_radix, spread_angles};
use kintuni_chart::{ChartData, Config, Document, Paper, Settings, Symbol, render_chart};
use std::hint::black_box;

fn fixture(name: &str) -> &'static str {
    match name {
        "natal_basic" => include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/tests/fixtures/natal_basic.json"
        )),
        "stellium" => include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/tests/fixtures/stellium.json"
        )),
        "houses_only" => include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/tests/fixtures/houses_only.json"
        )),
        _ => panic!("unknown fixture"),
    }
}

/// `count` points packed into a narrow arc, the worst case for spreading.
fn crowded_angles(count: usize) -> Vec<f32> {
    (0..count).map(|i| 100.0 + (i % 7) as f32 * 0.3).collect()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for name in ["natal_basic", "stellium", "houses_only"] {
        let input = fixture(name);
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, data| {
            b.iter(|| {
                let parsed = ChartData::from_json(black_box(data)).expect("parse failed");
                black_box(parsed.planets.len());
            });
        });
    }
    group.finish();
}

fn bench_glyphs(c: &mut Criterion) {
    let doc = Document::new().with_container("paper");
    let paper = Paper::new(&doc, "paper", 800.0, 800.0, Settings::default()).expect("paper");
    c.bench_function("glyphs/all_symbols", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for symbol in Symbol::ALL {
                total += paper.draw_symbol(black_box(symbol), 400.0, 400.0).count();
            }
            black_box(total);
        });
    });
}

fn bench_spread(c: &mut Criterion) {
    let mut group = c.benchmark_group("spread");
    for count in [15usize, 60, 240] {
        let angles = crowded_angles(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &angles, |b, angles| {
            b.iter(|| black_box(spread_angles(black_box(angles), 4.0)));
        });
    }
    group.finish();
}

fn bench_radix(c: &mut Criterion) {
    let mut group = c.benchmark_group("radix");
    let config = RadixConfig::default();
    for name in ["natal_basic", "stellium", "houses_only"] {
        let data = ChartData::from_json(fixture(name)).expect("parse failed");
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| {
                let doc = Document::new().with_container("paper");
                let mut paper =
                    Paper::new(&doc, "paper", 800.0, 800.0, Settings::default()).expect("paper");
                let layout = draw_radix(&mut paper, black_box(data), &config).expect("radix");
                black_box(layout.points.len());
            });
        });
    }
    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_to_end");
    let config = Config::default();
    for name in ["natal_basic", "stellium"] {
        let input = fixture(name);
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, data| {
            b.iter(|| {
                let parsed = ChartData::from_json(black_box(data)).expect("parse failed");
                let svg = render_chart(&parsed, &config).expect("render failed");
                black_box(svg.len());
            });
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_parse, bench_glyphs, bench_spread, bench_radix, bench_end_to_end
);
criterion_main!(benches);
