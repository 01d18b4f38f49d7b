//! Error types for transform operations

use thiserror::Error;

/// Result type for transform operations
pub type SpectraResult<T> = Result<T, SpectraError>;

/// Errors that can occur while transforming or rendering an array
///
/// Non-finite samples are not an error: NaN and infinity flow through the
/// arithmetic unchanged.
#[derive(Error, Debug)]
pub enum SpectraError {
    #[error("Invalid rank: expected {expected}, got {actual}")]
    InvalidRank { expected: &'static str, actual: usize },

    #[error("Invalid transform size: {0}")]
    InvalidSize(usize),

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Shape mismatch: expected {expected} samples, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Block size {block} exceeds image extent {width}x{height}")]
    EmptyCrop {
        block: usize,
        width: usize,
        height: usize,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Array shape error: {0}")]
    Array(#[from] ndarray::ShapeError),
}
