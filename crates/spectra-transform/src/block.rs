//! Block transform processing
//!
//! The image is cropped to whole blocks, split into non-overlapping `M×M` tiles,
//! and every tile `B` is replaced by `A·B·Aᵗ` (forward) or `Aᵗ·B·A` (inverse).
//! Rows and columns past the last whole block are discarded, never padded.

use crate::matrix::TransformMatrix;
use log::debug;
use ndarray::{s, Array2, ArrayView2};
use rayon::prelude::*;
use spectra_core::{Direction, ImageArray, SpectraError, SpectraResult};

/// Number of whole blocks that fit in a dimension
pub fn num_blocks(size: usize, block_size: usize) -> usize {
    size / block_size
}

/// Height and width after discarding partial blocks
pub fn cropped_extent(
    height: usize,
    width: usize,
    block_size: usize,
) -> SpectraResult<(usize, usize)> {
    if block_size == 0 {
        return Err(SpectraError::InvalidSize(block_size));
    }

    Ok((
        num_blocks(height, block_size) * block_size,
        num_blocks(width, block_size) * block_size,
    ))
}

/// Top-left corners of every block in a cropped plane, row-major
pub fn block_origins(height: usize, width: usize, block_size: usize) -> Vec<(usize, usize)> {
    (0..height)
        .step_by(block_size)
        .flat_map(|y| (0..width).step_by(block_size).map(move |x| (y, x)))
        .collect()
}

/// Apply a transform matrix to every whole block of an image
pub fn block_transform(
    matrix: &TransformMatrix,
    image: &ImageArray<f64>,
    direction: Direction,
) -> SpectraResult<ImageArray<f64>> {
    let block_size = matrix.size();
    let (height, width) = (image.height(), image.width());
    let (crop_h, crop_w) = cropped_extent(height, width, block_size)?;
    if crop_h == 0 || crop_w == 0 {
        return Err(SpectraError::EmptyCrop {
            block: block_size,
            width,
            height,
        });
    }

    debug!(
        "block_transform: {}x{} cropped to {}x{}, {}x{} blocks, {:?}",
        width, height, crop_w, crop_h, block_size, block_size, direction
    );

    let a = matrix.matrix();
    let at = a.t().to_owned();
    let (left, right) = match direction {
        Direction::Forward => (a, &at),
        Direction::Inverse => (&at, a),
    };

    image.map_channels(|plane| {
        Ok(transform_plane(
            left,
            right,
            plane.slice(s![..crop_h, ..crop_w]),
            block_size,
        ))
    })
}

/// `left · B · right` for every block of an already cropped plane
fn transform_plane(
    left: &Array2<f64>,
    right: &Array2<f64>,
    plane: ArrayView2<'_, f64>,
    block_size: usize,
) -> Array2<f64> {
    let (height, width) = plane.dim();
    let origins = block_origins(height, width, block_size);

    let blocks: Vec<Array2<f64>> = origins
        .par_iter()
        .map(|&(y, x)| {
            let block = plane.slice(s![y..y + block_size, x..x + block_size]);
            left.dot(&block).dot(right)
        })
        .collect();

    let mut output = Array2::zeros((height, width));
    for (&(y, x), block) in origins.iter().zip(&blocks) {
        output
            .slice_mut(s![y..y + block_size, x..x + block_size])
            .assign(block);
    }
    output
}
