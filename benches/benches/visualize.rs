//! Benchmarks for spectrum rendering

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spectra::{FourierPipeline, SpectrumVisualizer, VisualOptions};
use spectra_benches::{test_image, test_plane};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("Render");
    let image = test_image(128, 128);

    let cosine = SpectrumVisualizer::new(VisualOptions::cosine());
    group.bench_function("cosine_16bit", |b| {
        b.iter(|| cosine.render_real(black_box(&image)).unwrap());
    });

    let pipeline = FourierPipeline::new(VisualOptions::fourier());
    let spectrum = pipeline.forward(&test_plane(64, 64).into_dyn()).unwrap();
    group.bench_function("fourier_centered_8bit", |b| {
        b.iter(|| pipeline.render(black_box(&spectrum)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
