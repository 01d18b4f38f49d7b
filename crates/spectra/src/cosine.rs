//! Cosine pipeline: full-image DCT or block transform, rendering and reconstruction

use crate::options::TransformOptions;
use log::{debug, warn};
use spectra_core::{Direction, DisplayImage, ImageArray, InverseMode, SpectraResult};
use spectra_transform::{block_transform, dct_image, TransformMatrix};
use spectra_visual::{real_to_u8, SpectrumVisualizer};

/// Everything produced by one forward/inverse round trip
#[derive(Debug, Clone)]
pub struct CosineOutput {
    pub coefficients: ImageArray<f64>,
    pub display: DisplayImage,
    pub reconstruction: ImageArray<u8>,
}

/// Discrete cosine transform of images
#[derive(Debug, Clone)]
pub struct CosinePipeline {
    options: TransformOptions,
    matrix: Option<TransformMatrix>,
    visualizer: SpectrumVisualizer,
}

impl CosinePipeline {
    pub fn new(options: TransformOptions) -> SpectraResult<Self> {
        let matrix = if options.uses_blocks() {
            Some(TransformMatrix::dct(options.matrix_size)?)
        } else {
            None
        };

        Ok(Self {
            options,
            matrix,
            visualizer: SpectrumVisualizer::new(options.visual),
        })
    }

    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    pub fn forward(&self, image: &ImageArray<f64>) -> SpectraResult<ImageArray<f64>> {
        match &self.matrix {
            Some(matrix) => block_transform(matrix, image, Direction::Forward),
            None => dct_image(image, Direction::Forward),
        }
    }

    /// Block inverse is always `Aᵗ·B·A`; the full-image inverse follows [`InverseMode`]
    pub fn inverse(&self, coefficients: &ImageArray<f64>) -> SpectraResult<ImageArray<f64>> {
        match (&self.matrix, self.options.inverse_mode) {
            (Some(matrix), _) => block_transform(matrix, coefficients, Direction::Inverse),
            (None, InverseMode::Exact) => dct_image(coefficients, Direction::Inverse),
            (None, InverseMode::ReferenceCompat) => {
                warn!("reference-compatible inverse applies the forward DCT-II");
                dct_image(coefficients, Direction::Forward)
            }
        }
    }

    pub fn render(&self, coefficients: &ImageArray<f64>) -> SpectraResult<DisplayImage> {
        self.visualizer.render_real(coefficients)
    }

    /// Inverse transform followed by saturating 8-bit egress
    pub fn reconstruct(&self, coefficients: &ImageArray<f64>) -> SpectraResult<ImageArray<u8>> {
        Ok(match self.inverse(coefficients)? {
            ImageArray::Grayscale(plane) => ImageArray::Grayscale(real_to_u8(&plane)),
            ImageArray::MultiChannel(planes) => ImageArray::MultiChannel(real_to_u8(&planes)),
        })
    }

    /// Forward transform, render, and reconstruct an 8-bit image
    pub fn process(&self, image: &ImageArray<u8>) -> SpectraResult<CosineOutput> {
        debug!(
            "cosine pipeline on {:?}, matrix size {}",
            image.shape(),
            self.options.matrix_size
        );
        let coefficients = self.forward(&image.to_f64())?;
        let display = self.render(&coefficients)?;
        let reconstruction = self.reconstruct(&coefficients)?;
        Ok(CosineOutput {
            coefficients,
            display,
            reconstruction,
        })
    }
}
