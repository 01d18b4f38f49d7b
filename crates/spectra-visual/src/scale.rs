//! Magnitude, dynamic range compression and linear rescaling

use log::debug;
use ndarray::{Array, Dimension};
use num_complex::Complex64;
use spectra_core::Sample;

/// `|z|` of every complex sample
pub fn magnitude<D: Dimension>(spectrum: &Array<Complex64, D>) -> Array<f64, D> {
    spectrum.mapv(|z| z.norm())
}

/// `|x|` of every real sample
pub fn absolute<D: Dimension>(values: &Array<f64, D>) -> Array<f64, D> {
    values.mapv(f64::abs)
}

/// `log(|x| + 1)`; the offset keeps zero finite
pub fn log_compress<D: Dimension>(values: &Array<f64, D>) -> Array<f64, D> {
    values.mapv(|v| v.abs().ln_1p())
}

/// Smallest and largest value, ignoring NaN
pub fn value_range<'a, I>(values: I) -> (f64, f64)
where
    I: IntoIterator<Item = &'a f64>,
{
    values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

/// Linear map from an observed `[min, max]` onto `[0, peak]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rescale {
    min: f64,
    scale: Option<f64>,
}

impl Rescale {
    pub fn new(min: f64, max: f64, peak: f64) -> Self {
        let range = max - min;
        // Zero, negative or NaN range: nothing to stretch
        let scale = (range > 0.0 && range.is_finite()).then(|| peak / range);
        if scale.is_none() {
            debug!("degenerate range [{min}, {max}], rendering flat output");
        }
        Self { min, scale }
    }

    pub fn from_values<'a, I>(values: I, peak: f64) -> Self
    where
        I: IntoIterator<Item = &'a f64>,
    {
        let (min, max) = value_range(values);
        Self::new(min, max, peak)
    }

    pub fn is_flat(&self) -> bool {
        self.scale.is_none()
    }

    pub fn apply<T: Sample>(&self, value: f64) -> T {
        match self.scale {
            Some(scale) => T::from_f64_saturating((value - self.min) * scale),
            None => T::from_f64_saturating(0.0),
        }
    }
}

/// Stretch `values` so min maps to 0 and max maps to `peak`
pub fn rescale<T: Sample, D: Dimension>(values: &Array<f64, D>, peak: f64) -> Array<T, D> {
    let rescale = Rescale::from_values(values.iter(), peak);
    values.map(|&v| rescale.apply(v))
}
