//! Spectrum rendering pipeline

use crate::layout::{quadrant_swap, square};
use crate::scale::{absolute, log_compress, magnitude, rescale};
use log::debug;
use num_complex::Complex64;
use spectra_core::{BitDepth, DisplayImage, ImageArray, Sample, SpectraResult};

/// Rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisualOptions {
    /// Compress magnitudes with `log(|x|+1)` before rescaling
    pub log_compress: bool,
    /// Move the zero-frequency term to the center
    pub center: bool,
    /// Resample the longer spatial axis to match the shorter one
    pub square: bool,
    /// Integer depth of the rendered image
    pub bit_depth: BitDepth,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self::fourier()
    }
}

impl VisualOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log-compressed, centered, 8-bit: how Fourier spectra are usually shown
    pub fn fourier() -> Self {
        Self {
            log_compress: true,
            center: true,
            square: false,
            bit_depth: BitDepth::Eight,
        }
    }

    /// Log-compressed, uncentered, 16-bit: DCT energy already sits in the corner
    pub fn cosine() -> Self {
        Self {
            log_compress: true,
            center: false,
            square: false,
            bit_depth: BitDepth::Sixteen,
        }
    }

    pub fn log_compress(mut self, log_compress: bool) -> Self {
        self.log_compress = log_compress;
        self
    }

    pub fn center(mut self, center: bool) -> Self {
        self.center = center;
        self
    }

    pub fn square(mut self, square: bool) -> Self {
        self.square = square;
        self
    }

    pub fn bit_depth(mut self, bit_depth: BitDepth) -> Self {
        self.bit_depth = bit_depth;
        self
    }
}

/// Renders spectra as displayable integer images
///
/// Steps run in order: magnitude, optional log compression, optional quadrant
/// swap, min–max rescale over all channels together, optional square resample.
#[derive(Debug, Clone, Default)]
pub struct SpectrumVisualizer {
    options: VisualOptions,
}

impl SpectrumVisualizer {
    pub fn new(options: VisualOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &VisualOptions {
        &self.options
    }

    /// Render a complex (Fourier) spectrum from its magnitudes
    pub fn render_complex(&self, spectrum: &ImageArray<Complex64>) -> SpectraResult<DisplayImage> {
        let magnitudes = match spectrum {
            ImageArray::Grayscale(plane) => ImageArray::Grayscale(magnitude(plane)),
            ImageArray::MultiChannel(planes) => ImageArray::MultiChannel(magnitude(planes)),
        };
        self.render_magnitudes(magnitudes)
    }

    /// Render a real (cosine) spectrum from its absolute values
    pub fn render_real(&self, spectrum: &ImageArray<f64>) -> SpectraResult<DisplayImage> {
        let magnitudes = match spectrum {
            ImageArray::Grayscale(plane) => ImageArray::Grayscale(absolute(plane)),
            ImageArray::MultiChannel(planes) => ImageArray::MultiChannel(absolute(planes)),
        };
        self.render_magnitudes(magnitudes)
    }

    fn render_magnitudes(&self, magnitudes: ImageArray<f64>) -> SpectraResult<DisplayImage> {
        debug!(
            "rendering {:?} spectrum at {} bits with {:?}",
            magnitudes.shape(),
            self.options.bit_depth.bits(),
            self.options
        );

        let mut values = magnitudes;
        if self.options.log_compress {
            values = match values {
                ImageArray::Grayscale(plane) => ImageArray::Grayscale(log_compress(&plane)),
                ImageArray::MultiChannel(planes) => {
                    ImageArray::MultiChannel(log_compress(&planes))
                }
            };
        }
        if self.options.center {
            values = values.map_channels(|plane| Ok(quadrant_swap(plane)))?;
        }

        match self.options.bit_depth {
            BitDepth::Eight => Ok(DisplayImage::U8(self.finish::<u8>(&values)?)),
            BitDepth::Sixteen => Ok(DisplayImage::U16(self.finish::<u16>(&values)?)),
        }
    }

    /// Rescale over all channels at once, then resample if asked
    fn finish<T: Sample>(&self, values: &ImageArray<f64>) -> SpectraResult<ImageArray<T>> {
        let peak = self.options.bit_depth.peak();
        let samples = match values {
            ImageArray::Grayscale(plane) => ImageArray::Grayscale(rescale::<T, _>(plane, peak)),
            ImageArray::MultiChannel(planes) => {
                ImageArray::MultiChannel(rescale::<T, _>(planes, peak))
            }
        };
        if self.options.square {
            samples.map_channels(|plane| Ok(square(plane)))
        } else {
            Ok(samples)
        }
    }
}
