use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rate_grid::config::GridConfig;
use rate_grid::models::{
    ComparisonEntry, ComparisonSet, PropertyId, PropertyMetadata, PropertyRateSeries, RateRecord,
};
use rate_grid::services::axis_scale::RangeBarConfig;
use rate_grid::services::{compute_axis_scale, compute_range_bar, generate_date_window, RateGrid};

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn comparison(properties: usize, days: u64) -> ComparisonSet {
    let entries = (0..properties)
        .map(|p| {
            let records = (0..days).map(|d| {
                let rate = 150.0 + ((p as u64 * 37 + d * 13) % 200) as f64;
                RateRecord::open(start() + Days::new(d), rate).with_band(rate - 20.0, rate + 35.0)
            });
            ComparisonEntry::new(
                PropertyMetadata::new(format!("p{}", p), format!("Hotel {}", p)),
                PropertyRateSeries::from_records(records),
            )
            .lowest_on((0..days).filter(|d| d % properties as u64 == p as u64).map(|d| start() + Days::new(d)))
        })
        .collect();
    ComparisonSet::new(entries)
}

fn bench_axis_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("axis_scale");

    let rates: Vec<f64> = (0..9).map(|i| 180.0 + i as f64 * 17.5).collect();
    group.bench_function("compute_axis_scale_9", |b| {
        b.iter(|| compute_axis_scale(black_box(rates.iter().copied())));
    });

    let scale = compute_axis_scale(rates.iter().copied());
    let config = RangeBarConfig::default();
    group.bench_function("compute_range_bar", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let lo = 170.0 + (i % 50) as f64;
                black_box(compute_range_bar(
                    black_box(lo),
                    black_box(lo + 40.0),
                    black_box(lo + 10.0),
                    &scale,
                    &config,
                ));
            }
        });
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_render");

    for properties in [5usize, 20, 80] {
        let set = comparison(properties, 90);
        let window = generate_date_window(start(), start() + Days::new(89)).unwrap();
        let mut grid = RateGrid::new(GridConfig::default(), window, 1920);
        for p in (0..properties).step_by(2) {
            grid.toggle_expanded(&PropertyId::new(format!("p{}", p)));
        }

        group.bench_with_input(
            BenchmarkId::new("render_page", properties),
            &set,
            |b, set| {
                b.iter(|| grid.render(black_box(set), &[]));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_axis_scale, bench_render);
criterion_main!(benches);
