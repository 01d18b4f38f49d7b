//! Orthonormal DCT-II basis matrix

use ndarray::Array2;
use spectra_core::{SpectraError, SpectraResult};
use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// Basis entry `A[m, u] = √(2/M) · c_m · cos(π·m·(2u+1) / 2M)`, with `c_0 = 1/√2`
#[inline]
pub fn dct_coefficient(m: usize, u: usize, size: usize) -> f64 {
    let c_m = if m == 0 { FRAC_1_SQRT_2 } else { 1.0 };
    let phi = PI * m as f64 * (2 * u + 1) as f64 / (2 * size) as f64;
    (2.0 / size as f64).sqrt() * c_m * phi.cos()
}

/// Square transform matrix applied as `A·B·Aᵗ` to blocks
///
/// Rows of the DCT basis are orthonormal, so `A·Aᵗ = I` and the transpose is the inverse.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformMatrix {
    matrix: Array2<f64>,
}

impl TransformMatrix {
    /// Build the `size`×`size` DCT-II basis
    pub fn dct(size: usize) -> SpectraResult<Self> {
        if size == 0 {
            return Err(SpectraError::InvalidSize(size));
        }

        let matrix = Array2::from_shape_fn((size, size), |(m, u)| dct_coefficient(m, u, size));
        Ok(Self { matrix })
    }

    /// Wrap an arbitrary square matrix
    pub fn from_array(matrix: Array2<f64>) -> SpectraResult<Self> {
        let (rows, cols) = matrix.dim();
        if rows == 0 || rows != cols {
            return Err(SpectraError::InvalidParameter(format!(
                "transform matrix must be square and non-empty, got {rows}x{cols}"
            )));
        }
        Ok(Self { matrix })
    }

    pub fn size(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn matrix(&self) -> &Array2<f64> {
        &self.matrix
    }

    pub fn transpose(&self) -> Self {
        Self {
            matrix: self.matrix.t().to_owned(),
        }
    }

    /// Largest absolute deviation of `A·Aᵗ` from the identity
    pub fn orthonormality_error(&self) -> f64 {
        let product = self.matrix.dot(&self.matrix.t());
        product
            .indexed_iter()
            .map(|((i, j), &v)| (v - if i == j { 1.0 } else { 0.0 }).abs())
            .fold(0.0, f64::max)
    }
}
