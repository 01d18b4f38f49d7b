//! DCT (Discrete Cosine Transform) implementation
//!
//! Forward is the orthonormal DCT-II, inverse is the matching DCT-III. Both are
//! direct O(M²) sums over the basis produced by [`TransformMatrix::dct`].

use crate::matrix::TransformMatrix;
use crate::separable::{apply_separable, Kernel1d};
use log::debug;
use ndarray::{Array1, ArrayD, ArrayView1, ArrayViewMut1, Ix1, Ix2};
use spectra_core::{Direction, ImageArray, SpectraError, SpectraResult};

/// Direct-summation DCT of a fixed length
#[derive(Debug, Clone)]
pub struct Dct {
    basis: TransformMatrix,
    direction: Direction,
}

impl Dct {
    /// Transform one signal into a freshly allocated output
    pub fn transform(&mut self, input: ArrayView1<'_, f64>) -> Array1<f64> {
        let mut output = Array1::zeros(self.len());
        self.process(input, output.view_mut());
        output
    }
}

impl Kernel1d for Dct {
    type Sample = f64;

    fn new(len: usize, direction: Direction) -> SpectraResult<Self> {
        Ok(Self {
            basis: TransformMatrix::dct(len)?,
            direction,
        })
    }

    fn len(&self) -> usize {
        self.basis.size()
    }

    fn process(&mut self, input: ArrayView1<'_, f64>, mut output: ArrayViewMut1<'_, f64>) {
        let len = self.len();
        debug_assert_eq!(input.len(), len);
        debug_assert_eq!(output.len(), len);
        let a = self.basis.matrix();

        match self.direction {
            // G[m] = Σ_u A[m,u]·g[u]
            Direction::Forward => {
                for m in 0..len {
                    let mut sum = 0.0;
                    for (u, &g) in input.iter().enumerate() {
                        sum += a[[m, u]] * g;
                    }
                    output[m] = sum;
                }
            }
            // g[u] = Σ_m A[m,u]·G[m]
            Direction::Inverse => {
                for u in 0..len {
                    let mut sum = 0.0;
                    for (m, &coeff) in input.iter().enumerate() {
                        sum += a[[m, u]] * coeff;
                    }
                    output[u] = sum;
                }
            }
        }
    }
}

/// 1D DCT of a signal; the input must be rank 1 and non-empty
pub fn dct_1d(signal: &ArrayD<f64>, direction: Direction) -> SpectraResult<Array1<f64>> {
    if signal.ndim() != 1 {
        return Err(SpectraError::InvalidRank {
            expected: "1",
            actual: signal.ndim(),
        });
    }

    let signal = signal.view().into_dimensionality::<Ix1>()?;
    debug!("dct_1d: {} samples, {:?}", signal.len(), direction);
    let mut dct = Dct::new(signal.len(), direction)?;
    Ok(dct.transform(signal))
}

/// Full-image 2D DCT, each channel transformed on its own
pub fn dct_image(image: &ImageArray<f64>, direction: Direction) -> SpectraResult<ImageArray<f64>> {
    debug!("dct_image: {:?}, {:?}", image.shape(), direction);
    image.map_channels(|plane| {
        let out = apply_separable::<Dct>(plane.to_owned().into_dyn(), direction)?;
        Ok(out.into_dimensionality::<Ix2>()?)
    })
}
