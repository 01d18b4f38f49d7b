//! Benchmarks for the direct-summation transforms
//!
//! Run with: cargo bench -p spectra-benches

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spectra_benches::{test_image, test_signal};
use spectra_core::Direction;
use spectra_transform::{dct_image, dft_1d, Dft, Kernel1d};

fn bench_dft_1d(c: &mut Criterion) {
    let mut group = c.benchmark_group("DFT 1D");

    for len in [64, 256, 1024] {
        let signal = test_signal(len).into_dyn();
        group.bench_with_input(BenchmarkId::new("forward", len), &signal, |b, signal| {
            b.iter(|| dft_1d(black_box(signal), Direction::Forward).unwrap());
        });
    }

    // Cache kept warm across iterations
    let signal = test_signal(1024);
    group.bench_function("forward_reused_cache_1024", |b| {
        let mut dft = Dft::new(1024, Direction::Forward).unwrap();
        b.iter(|| dft.transform(black_box(signal.view())));
    });

    group.finish();
}

fn bench_dct_image(c: &mut Criterion) {
    let mut group = c.benchmark_group("DCT image");

    for size in [32, 64, 128] {
        let image = test_image(size, size);
        group.bench_with_input(BenchmarkId::new("forward", size), &image, |b, image| {
            b.iter(|| dct_image(black_box(image), Direction::Forward).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dft_1d, bench_dct_image);
criterion_main!(benches);
