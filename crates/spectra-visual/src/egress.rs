//! Conversion of reconstructed samples back to 8-bit images

use ndarray::{Array, Dimension};
use num_complex::Complex64;
use spectra_core::Sample;

/// `round(|z|)` saturated to `[0, 255]`
pub fn complex_to_u8<D: Dimension>(array: &Array<Complex64, D>) -> Array<u8, D> {
    array.mapv(|z| u8::from_f64_saturating(z.norm()))
}

/// `round(x)` saturated to `[0, 255]`
pub fn real_to_u8<D: Dimension>(array: &Array<f64, D>) -> Array<u8, D> {
    array.mapv(u8::from_f64_saturating)
}
