//! Benchmarks for the block transform against the full-image DCT

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spectra_benches::test_image;
use spectra_core::Direction;
use spectra_transform::{block_transform, dct_image, TransformMatrix};

fn bench_block_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("Block transform 256x256");
    let image = test_image(256, 256);

    for block in [4, 8, 16, 32] {
        let matrix = TransformMatrix::dct(block).unwrap();
        group.bench_with_input(BenchmarkId::new("forward", block), &matrix, |b, matrix| {
            b.iter(|| block_transform(matrix, black_box(&image), Direction::Forward).unwrap());
        });
    }

    group.finish();
}

fn bench_block_vs_full(c: &mut Criterion) {
    let mut group = c.benchmark_group("Block vs full 64x64");
    let image = test_image(64, 64);
    let matrix = TransformMatrix::dct(8).unwrap();

    group.bench_function("block_8", |b| {
        b.iter(|| block_transform(&matrix, black_box(&image), Direction::Forward).unwrap());
    });
    group.bench_function("full_image", |b| {
        b.iter(|| dct_image(black_box(&image), Direction::Forward).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_block_sizes, bench_block_vs_full);
criterion_main!(benches);
