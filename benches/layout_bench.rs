use chart_extents::api::ExtentsEngineConfig;
use chart_extents::core::{
    ExtentSeriesOptions, LinearScale, PlotArea, PlotOffset, RawExtent, Viewport,
    normalize_extents, project_series,
};
use chart_extents::render::NullRenderer;
use chart_extents::ExtentsEngine;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn generated_extents(count: usize) -> Vec<RawExtent> {
    (0..count)
        .map(|i| {
            let start = (i * 7 % 997) as f64;
            let length = 5.0 + (i * 13 % 41) as f64;
            let raw = RawExtent::new(start, start + length).with_label(format!("task-{i}"));
            if i > 0 && i % 3 == 0 {
                raw.with_depends_on([(i - 1) as i64])
            } else {
                raw
            }
        })
        .collect()
}

fn bench_first_fit_packing_2k(c: &mut Criterion) {
    let raw = generated_extents(2_000);
    let options = ExtentSeriesOptions::shown().with_rows(0);

    c.bench_function("first_fit_packing_2k", |b| {
        b.iter(|| {
            let set = normalize_extents(black_box(&raw), black_box(&options));
            black_box(set.row_count());
        })
    });
}

fn bench_series_projection_2k(c: &mut Criterion) {
    let raw = generated_extents(2_000);
    let options = ExtentSeriesOptions::shown().with_rows(12);
    let set = normalize_extents(&raw, &options);
    let axis = LinearScale::new(0.0, 1_050.0, 1_600.0).expect("valid axis");
    let plot = PlotArea::new(Viewport::new(1_600, 900), PlotOffset::default());

    c.bench_function("series_projection_2k", |b| {
        b.iter(|| {
            let geometry = project_series(
                black_box(&set),
                black_box(&options),
                black_box(&axis),
                black_box(plot),
                None,
            );
            black_box(geometry.len());
        })
    });
}

fn bench_pointer_sweep_2k(c: &mut Criterion) {
    let mut engine = ExtentsEngine::new(
        NullRenderer::default(),
        ExtentsEngineConfig::new(Viewport::new(1_600, 900)),
    )
    .expect("engine init");
    engine
        .set_series(
            "tasks",
            ExtentSeriesOptions::shown().with_rows(12),
            generated_extents(2_000),
        )
        .expect("series");
    let axis = LinearScale::new(0.0, 1_050.0, 1_600.0).expect("valid axis");

    c.bench_function("pointer_sweep_2k", |b| {
        b.iter(|| {
            for step in 0..64 {
                let x = f64::from(step) * 25.0;
                black_box(engine.pointer_move(black_box(x), 130.0, &axis));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_first_fit_packing_2k,
    bench_series_projection_2k,
    bench_pointer_sweep_2k
);
criterion_main!(benches);
