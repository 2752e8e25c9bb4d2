use curve_core::{CurveRenderer, RecordingSurface};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_series(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001))
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_recording");
    for &n in &[10_000usize, 50_000usize] {
        group.bench_function(format!("adc_{n}"), |b| {
            let data = build_series(n);
            let renderer = CurveRenderer::default();
            let mut surface = RecordingSurface::new(800.0, 500.0, 2.0);
            b.iter(|| {
                surface.reset();
                renderer.render(&mut surface, black_box(&data), "数据点", "电压值");
                black_box(surface.ops().len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
