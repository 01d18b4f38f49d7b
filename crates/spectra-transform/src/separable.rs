//! Separable multi-axis application of 1D transforms
//!
//! An n-D DFT or DCT equals the 1D transform applied along each axis in turn. Axes
//! are always visited in ascending order so rounding is reproducible.

use log::trace;
use ndarray::{ArrayD, ArrayView1, ArrayViewMut1, Axis, Zip};
use num_traits::Zero;
use spectra_core::{Direction, SpectraError, SpectraResult};

/// A 1D transform of fixed length that can be run over many lanes
pub trait Kernel1d: Sized {
    type Sample: Clone + Zero;

    /// Build a kernel for signals of `len` samples
    fn new(len: usize, direction: Direction) -> SpectraResult<Self>;

    fn len(&self) -> usize;

    /// Transform `input` into `output`; both have exactly `len()` samples
    fn process(
        &mut self,
        input: ArrayView1<'_, Self::Sample>,
        output: ArrayViewMut1<'_, Self::Sample>,
    );
}

/// Apply `K` along every axis of `array`, lowest axis first
///
/// One kernel is built per axis and reused for every lane along it.
pub fn apply_separable<K: Kernel1d>(
    array: ArrayD<K::Sample>,
    direction: Direction,
) -> SpectraResult<ArrayD<K::Sample>> {
    if array.ndim() == 0 {
        return Err(SpectraError::InvalidRank {
            expected: "at least 1",
            actual: 0,
        });
    }

    let mut current = array;
    for axis in 0..current.ndim() {
        let len = current.len_of(Axis(axis));
        let mut kernel = K::new(len, direction)?;
        trace!("separable pass: axis {axis}, length {len}, {direction:?}");

        let mut next = ArrayD::zeros(current.raw_dim());
        Zip::from(current.lanes(Axis(axis)))
            .and(next.lanes_mut(Axis(axis)))
            .for_each(|input, output| kernel.process(input, output));
        current = next;
    }

    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::IxDyn;

    /// Reverses each lane; makes axis coverage easy to observe
    struct Reverse {
        len: usize,
    }

    impl Kernel1d for Reverse {
        type Sample = f64;

        fn new(len: usize, _direction: Direction) -> SpectraResult<Self> {
            if len == 0 {
                return Err(SpectraError::InvalidSize(len));
            }
            Ok(Self { len })
        }

        fn len(&self) -> usize {
            self.len
        }

        fn process(&mut self, input: ArrayView1<'_, f64>, mut output: ArrayViewMut1<'_, f64>) {
            for (i, &v) in input.iter().enumerate() {
                output[self.len - 1 - i] = v;
            }
        }
    }

    #[test]
    fn test_every_axis_visited() {
        let data: Vec<f64> = (0..24).map(|v| v as f64).collect();
        let array = ArrayD::from_shape_vec(IxDyn(&[2, 3, 4]), data).unwrap();
        let out = apply_separable::<Reverse>(array.clone(), Direction::Forward).unwrap();
        for i in 0..2 {
            for j in 0..3 {
                for k in 0..4 {
                    assert_eq!(out[[i, j, k]], array[[1 - i, 2 - j, 3 - k]]);
                }
            }
        }
    }

    #[test]
    fn test_zero_length_axis_rejected() {
        let array = ArrayD::<f64>::zeros(IxDyn(&[3, 0]));
        assert!(matches!(
            apply_separable::<Reverse>(array, Direction::Forward),
            Err(SpectraError::InvalidSize(0))
        ));
    }

    #[test]
    fn test_scalar_rejected() {
        let array = ArrayD::<f64>::zeros(IxDyn(&[]));
        assert!(apply_separable::<Reverse>(array, Direction::Inverse).is_err());
    }
}
