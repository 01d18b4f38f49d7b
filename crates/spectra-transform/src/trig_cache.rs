//! Memoized cosine/sine pairs for the Fourier kernel
//!
//! The kernel `exp(∓i·2π·m·u/M)` only depends on `(m·u) mod M`, so at most `M`
//! distinct angles are ever evaluated for a transform of length `M`.

use spectra_core::{SpectraError, SpectraResult};
use std::f64::consts::PI;

/// Lazily filled `(cos, sin)` table keyed by residue modulo the period
///
/// The sine is stored with a positive sign; the transform direction decides the
/// sign after lookup, so one cache serves both forward and inverse passes.
#[derive(Debug, Clone)]
pub struct TrigCache {
    period: usize,
    entries: Vec<Option<(f64, f64)>>,
    cached: usize,
}

impl TrigCache {
    pub fn new(period: usize) -> SpectraResult<Self> {
        if period == 0 {
            return Err(SpectraError::InvalidSize(period));
        }

        Ok(Self {
            period,
            entries: vec![None; period],
            cached: 0,
        })
    }

    /// `(cos, sin)` of `2π·(mu mod M)/M`
    #[inline]
    pub fn get(&mut self, mu: usize) -> (f64, f64) {
        let k = mu % self.period;
        if let Some(pair) = self.entries[k] {
            return pair;
        }

        let angle = 2.0 * PI * k as f64 / self.period as f64;
        let pair = (angle.cos(), angle.sin());
        self.entries[k] = Some(pair);
        self.cached += 1;
        pair
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// Number of residues evaluated so far
    pub fn cached(&self) -> usize {
        self.cached
    }
}
