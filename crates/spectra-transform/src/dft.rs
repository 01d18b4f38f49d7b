//! Discrete Fourier Transform by direct summation
//!
//! `G[m] = (1/√M) · Σ_u g[u] · exp(∓i·2π·m·u/M)`, minus for forward, plus for inverse.
//! Every output bin is an O(M) sum, so a full transform is O(M²). The unitary
//! `1/√M` scale is applied in both directions.

use crate::separable::{apply_separable, Kernel1d};
use crate::trig_cache::TrigCache;
use log::debug;
use ndarray::{Array, Array1, ArrayD, ArrayView1, ArrayViewMut1, Dimension, Ix1};
use num_complex::Complex64;
use spectra_core::{Direction, SpectraError, SpectraResult};

/// Direct-summation DFT of a fixed length
#[derive(Debug, Clone)]
pub struct Dft {
    cache: TrigCache,
    direction: Direction,
    scale: f64,
}

impl Dft {
    /// Switch direction while keeping the cached angles
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn cache(&self) -> &TrigCache {
        &self.cache
    }

    /// Transform one signal into a freshly allocated spectrum
    pub fn transform(&mut self, input: ArrayView1<'_, Complex64>) -> Array1<Complex64> {
        let mut output = Array1::zeros(self.len());
        self.process(input, output.view_mut());
        output
    }
}

impl Kernel1d for Dft {
    type Sample = Complex64;

    fn new(len: usize, direction: Direction) -> SpectraResult<Self> {
        let cache = TrigCache::new(len)?;
        Ok(Self {
            cache,
            direction,
            scale: 1.0 / (len as f64).sqrt(),
        })
    }

    fn len(&self) -> usize {
        self.cache.period()
    }

    fn process(
        &mut self,
        input: ArrayView1<'_, Complex64>,
        mut output: ArrayViewMut1<'_, Complex64>,
    ) {
        let len = self.len();
        debug_assert_eq!(input.len(), len);
        debug_assert_eq!(output.len(), len);
        let sign = self.direction.sine_sign();

        for m in 0..len {
            let mut total = Complex64::new(0.0, 0.0);
            // (m·u) mod M, advanced incrementally
            let mut mu = 0;
            for &g in input.iter() {
                let (cos, sin) = self.cache.get(mu);
                total += g * Complex64::new(cos, sign * sin);
                mu = (mu + m) % len;
            }
            output[m] = total * self.scale;
        }
    }
}

/// Promote a real array to complex samples with zero imaginary part
pub fn to_complex<D: Dimension>(array: &Array<f64, D>) -> Array<Complex64, D> {
    array.mapv(|v| Complex64::new(v, 0.0))
}

/// 1D DFT of a signal; the input must be rank 1 and non-empty
pub fn dft_1d(signal: &ArrayD<Complex64>, direction: Direction) -> SpectraResult<Array1<Complex64>> {
    if signal.ndim() != 1 {
        return Err(SpectraError::InvalidRank {
            expected: "1",
            actual: signal.ndim(),
        });
    }

    let signal = signal.view().into_dimensionality::<Ix1>()?;
    debug!("dft_1d: {} samples, {:?}", signal.len(), direction);
    let mut dft = Dft::new(signal.len(), direction)?;
    Ok(dft.transform(signal))
}

/// n-D DFT: the 1D DFT along every axis of the array
pub fn dft_nd(array: ArrayD<Complex64>, direction: Direction) -> SpectraResult<ArrayD<Complex64>> {
    debug!("dft_nd: shape {:?}, {:?}", array.shape(), direction);
    apply_separable::<Dft>(array, direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, IxDyn};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use test_log::test;

    fn random_signal(rng: &mut StdRng, len: usize) -> ArrayD<Complex64> {
        let samples: Vec<Complex64> = (0..len)
            .map(|_| Complex64::new(rng.random_range(-10.0..10.0), rng.random_range(-10.0..10.0)))
            .collect();
        ArrayD::from_shape_vec(IxDyn(&[len]), samples).unwrap()
    }

    #[test]
    fn test_roundtrip_random_lengths() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for len in [1, 2, 3, 5, 8, 13, 32, 45] {
            let signal = random_signal(&mut rng, len);
            let spectrum = dft_1d(&signal, Direction::Forward).unwrap();
            let back = dft_1d(&spectrum.into_dyn(), Direction::Inverse).unwrap();

            let peak = signal.iter().map(|z| z.norm()).fold(0.0, f64::max);
            for (i, (a, b)) in signal.iter().zip(back.iter()).enumerate() {
                assert!(
                    (a - b).norm() <= 1e-9 * peak.max(1.0),
                    "len {len}, index {i}: {a} vs {b}"
                );
            }
        }
    }

    #[test]
    fn test_constant_signal_energy_in_dc() {
        let len = 16;
        let signal = ArrayD::from_elem(IxDyn(&[len]), Complex64::new(3.0, 0.0));
        let spectrum = dft_1d(&signal, Direction::Forward).unwrap();

        let total: f64 = spectrum.iter().map(|z| z.norm_sqr()).sum();
        assert!((spectrum[0].norm_sqr() - total).abs() < 1e-9);
        assert!((spectrum[0].re - 3.0 * (len as f64).sqrt()).abs() < 1e-9);
        for bin in spectrum.iter().skip(1) {
            assert!(bin.norm() < 1e-9, "leakage: {bin}");
        }
    }

    #[test]
    fn test_forward_sign_convention() {
        // A single positive-frequency tone lands in bin 1 on the forward pass
        let len = 8;
        let tone: Vec<Complex64> = (0..len)
            .map(|u| Complex64::from_polar(1.0, 2.0 * std::f64::consts::PI * u as f64 / len as f64))
            .collect();
        let spectrum = dft_1d(&arr1(&tone).into_dyn(), Direction::Forward).unwrap();
        assert!((spectrum[1].re - (len as f64).sqrt()).abs() < 1e-9);
        assert!(spectrum[len - 1].norm() < 1e-9);
    }

    #[test]
    fn test_cache_reused_across_directions() {
        let mut rng = StdRng::seed_from_u64(7);
        let signal = random_signal(&mut rng, 10);
        let view = signal.view().into_dimensionality::<Ix1>().unwrap();

        let mut dft = Dft::new(10, Direction::Forward).unwrap();
        let spectrum = dft.transform(view);
        let cached = dft.cache().cached();
        assert!(cached <= 10);

        let mut dft = dft.with_direction(Direction::Inverse);
        assert_eq!(dft.direction(), Direction::Inverse);
        let back = dft.transform(spectrum.view());
        assert_eq!(dft.cache().cached(), cached);
        for (a, b) in signal.iter().zip(back.iter()) {
            assert!((a - b).norm() < 1e-9);
        }
    }

    #[test]
    fn test_rejects_non_1d() {
        let image = ArrayD::<Complex64>::zeros(IxDyn(&[2, 2]));
        assert!(matches!(
            dft_1d(&image, Direction::Forward),
            Err(SpectraError::InvalidRank { actual: 2, .. })
        ));
        let empty = ArrayD::<Complex64>::zeros(IxDyn(&[0]));
        assert!(matches!(
            dft_1d(&empty, Direction::Forward),
            Err(SpectraError::InvalidSize(0))
        ));
    }

    #[test]
    fn test_nd_roundtrip() {
        let data: Vec<f64> = (0..60).map(|v| ((v * 37) % 17) as f64).collect();
        let array = ArrayD::from_shape_vec(IxDyn(&[4, 5, 3]), data).unwrap();
        let spectrum = dft_nd(to_complex(&array), Direction::Forward).unwrap();
        let back = dft_nd(spectrum, Direction::Inverse).unwrap();
        for (a, b) in array.iter().zip(back.iter()) {
            assert!((a - b.re).abs() < 1e-9 && b.im.abs() < 1e-9);
        }
    }
}
