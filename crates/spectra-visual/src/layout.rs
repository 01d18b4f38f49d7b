//! Spatial rearrangements of a spectrum plane

use ndarray::{Array2, ArrayView2};

/// Exchange diagonally opposite quadrants so the zero-frequency term sits at the center
///
/// Each axis is halved with the first half taking the extra row or column when the
/// length is odd. On even×even planes the swap is its own inverse.
pub fn quadrant_swap<T: Clone>(plane: ArrayView2<'_, T>) -> Array2<T> {
    let (height, width) = plane.dim();
    let (dy, dx) = (height - height / 2, width - width / 2);
    roll(plane, dy, dx)
}

/// Undo [`quadrant_swap`], including on odd-sized planes
pub fn quadrant_unswap<T: Clone>(plane: ArrayView2<'_, T>) -> Array2<T> {
    let (height, width) = plane.dim();
    roll(plane, height / 2, width / 2)
}

/// `out[y, x] = plane[(y + dy) mod H, (x + dx) mod W]`
fn roll<T: Clone>(plane: ArrayView2<'_, T>, dy: usize, dx: usize) -> Array2<T> {
    let (height, width) = plane.dim();
    Array2::from_shape_fn((height, width), |(y, x)| {
        plane[[(y + dy) % height, (x + dx) % width]].clone()
    })
}

/// Resample the longer axis down to the shorter one (nearest neighbour)
pub fn square<T: Clone>(plane: ArrayView2<'_, T>) -> Array2<T> {
    let (height, width) = plane.dim();
    let size = height.min(width);
    Array2::from_shape_fn((size, size), |(y, x)| {
        plane[[y * height / size, x * width / size]].clone()
    })
}
