//! Shared inputs for the spectra benchmarks

use ndarray::{Array1, Array2};
use num_complex::Complex64;
use spectra_core::ImageArray;

/// Deterministic pseudo-texture in `[0, 255]`
pub fn test_plane(height: usize, width: usize) -> Array2<f64> {
    Array2::from_shape_fn((height, width), |(y, x)| ((x * 7 + y * 13 + x * y) % 256) as f64)
}

pub fn test_image(height: usize, width: usize) -> ImageArray<f64> {
    ImageArray::Grayscale(test_plane(height, width))
}

pub fn test_signal(len: usize) -> Array1<Complex64> {
    Array1::from_shape_fn(len, |i| Complex64::new((i % 17) as f64, (i % 5) as f64))
}
