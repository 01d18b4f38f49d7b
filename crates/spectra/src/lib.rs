//! # spectra - direct-summation spectral transforms for images
//!
//! This crate provides a high-level API for taking images into the Fourier and cosine
//! domains, rendering the resulting spectra, and reconstructing the images again.
//!
//! ## Quick Start
//!
//! ### Cosine transform with 8×8 blocks
//!
//! ```no_run
//! use spectra::{CosinePipeline, ImageArray, ImageShape, TransformOptions};
//!
//! let shape = ImageShape::Grayscale { height: 64, width: 64 };
//! let pixels = vec![128u8; shape.sample_count()];
//! let image = ImageArray::from_interleaved(shape, pixels).unwrap();
//!
//! let pipeline = CosinePipeline::new(TransformOptions::new().matrix_size(8)).unwrap();
//! let output = pipeline.process(&image).unwrap();
//! println!("rendered {:?}", output.display.shape());
//! ```
//!
//! ### Fourier spectrum
//!
//! ```no_run
//! use spectra::{FourierPipeline, ImageArray, ImageShape, VisualOptions};
//!
//! let shape = ImageShape::MultiChannel { height: 32, width: 48, channels: 3 };
//! let image = ImageArray::from_interleaved(shape, vec![0u8; shape.sample_count()]).unwrap();
//!
//! let pipeline = FourierPipeline::new(VisualOptions::fourier().square(true));
//! let output = pipeline.process(&image).unwrap();
//! assert_eq!(output.reconstruction.shape(), &[32, 48, 3]);
//! ```
//!
//! ## Architecture
//!
//! - `spectra-core`: image arrays, direction flags, bit depths, errors
//! - `spectra-transform`: trig cache, DFT, DCT, separable driver, basis matrix, block transform
//! - `spectra-visual`: magnitude, log compression, rescaling, quadrant swap, egress
//!
//! All transforms are O(M²) direct sums per 1D pass. Decoding and encoding image
//! files is left to the caller; this crate only sees in-memory sample arrays.

pub mod cosine;
pub mod fourier;
pub mod options;

pub use cosine::{CosineOutput, CosinePipeline};
pub use fourier::{FourierOutput, FourierPipeline};
pub use options::TransformOptions;

// Re-export core types
pub use spectra_core::{
    BitDepth, Direction, DisplayImage, ImageArray, ImageShape, InverseMode, Sample,
    SpectraError, SpectraResult,
};

// Re-export transform and visualization building blocks
pub use spectra_transform::{
    block_transform, cropped_extent, dct_1d, dct_image, dft_1d, dft_nd, TransformMatrix,
    TrigCache,
};
pub use spectra_visual::{quadrant_swap, SpectrumVisualizer, VisualOptions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
