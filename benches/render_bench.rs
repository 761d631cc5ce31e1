//! Benchmarks for the dashboard pipeline
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use datatech_dashboard::config::DashboardConfig;
use datatech_dashboard::dashboard;
use datatech_dashboard::data::DataGenerator;
use datatech_dashboard::prefs::{ChartColor, UserPreferences};
use datatech_dashboard::render::{bar_chart, line_chart, render_map, ChartLayout, MapOptions};

fn bench_generator(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator");

    group.bench_function("generate", |b| {
        b.iter(|| DataGenerator::new(black_box(42)).generate())
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let dataset = DataGenerator::default().generate();
    let color = ChartColor::default();
    let layout = ChartLayout::default();
    let map_options = MapOptions::default();

    group.bench_function("line_chart", |b| {
        b.iter(|| line_chart(black_box(&dataset.sales), &color, &layout))
    });

    group.bench_function("bar_chart", |b| {
        b.iter(|| bar_chart(black_box(&dataset.performance), &color, &layout))
    });

    group.bench_function("map", |b| {
        b.iter(|| render_map(black_box(&dataset.customers), &map_options).unwrap())
    });

    group.finish();
}

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard");

    let config = DashboardConfig::default();
    let prefs = UserPreferences::default();

    group.throughput(Throughput::Elements(1));
    group.bench_function("run", |b| {
        b.iter(|| dashboard::run(black_box(&config), black_box(&prefs)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_generator, bench_render, bench_full_run);
criterion_main!(benches);
