//! Fourier pipeline: n-D and flattened DFT, rendering and reconstruction

use log::debug;
use ndarray::{Array1, ArrayD};
use num_complex::Complex64;
use spectra_core::{Direction, DisplayImage, ImageArray, SpectraResult};
use spectra_transform::{dft_1d, dft_nd, to_complex};
use spectra_visual::{complex_to_u8, SpectrumVisualizer, VisualOptions};

/// Everything produced by one forward/inverse round trip
#[derive(Debug, Clone)]
pub struct FourierOutput {
    pub spectrum: ArrayD<Complex64>,
    pub display: DisplayImage,
    pub reconstruction: ArrayD<u8>,
}

/// Discrete Fourier transform of whole arrays
#[derive(Debug, Clone, Default)]
pub struct FourierPipeline {
    visualizer: SpectrumVisualizer,
}

impl FourierPipeline {
    pub fn new(visual: VisualOptions) -> Self {
        Self {
            visualizer: SpectrumVisualizer::new(visual),
        }
    }

    /// DFT along every axis, channel axis included
    pub fn forward(&self, array: &ArrayD<f64>) -> SpectraResult<ArrayD<Complex64>> {
        dft_nd(to_complex(array), Direction::Forward)
    }

    pub fn inverse(&self, spectrum: &ArrayD<Complex64>) -> SpectraResult<ArrayD<Complex64>> {
        dft_nd(spectrum.clone(), Direction::Inverse)
    }

    /// 1D DFT of the array read as one row-major signal, reshaped back
    pub fn flat_forward(&self, array: &ArrayD<f64>) -> SpectraResult<ArrayD<Complex64>> {
        self.flat(&to_complex(array), Direction::Forward)
    }

    pub fn flat_inverse(&self, spectrum: &ArrayD<Complex64>) -> SpectraResult<ArrayD<Complex64>> {
        self.flat(spectrum, Direction::Inverse)
    }

    fn flat(
        &self,
        array: &ArrayD<Complex64>,
        direction: Direction,
    ) -> SpectraResult<ArrayD<Complex64>> {
        debug!("flattened dft over shape {:?}", array.shape());
        let signal: Array1<Complex64> = array.iter().copied().collect();
        let out = dft_1d(&signal.into_dyn(), direction)?;
        Ok(ArrayD::from_shape_vec(array.raw_dim(), out.to_vec())?)
    }

    /// Render an image-shaped spectrum for display
    pub fn render(&self, spectrum: &ArrayD<Complex64>) -> SpectraResult<DisplayImage> {
        let image = ImageArray::try_from_dyn(spectrum.clone())?;
        self.visualizer.render_complex(&image)
    }

    /// Inverse transform followed by saturating 8-bit egress
    pub fn reconstruct(&self, spectrum: &ArrayD<Complex64>) -> SpectraResult<ArrayD<u8>> {
        Ok(complex_to_u8(&self.inverse(spectrum)?))
    }

    /// Forward transform, render, and reconstruct an 8-bit image
    pub fn process(&self, image: &ImageArray<u8>) -> SpectraResult<FourierOutput> {
        let samples = image.to_f64().into_dyn();
        let spectrum = self.forward(&samples)?;
        let display = self.render(&spectrum)?;
        let reconstruction = self.reconstruct(&spectrum)?;
        Ok(FourierOutput {
            spectrum,
            display,
            reconstruction,
        })
    }

    /// Flattened 1D round trip of an 8-bit image
    pub fn process_flat(&self, image: &ImageArray<u8>) -> SpectraResult<ArrayD<u8>> {
        let samples = image.to_f64().into_dyn();
        let spectrum = self.flat_forward(&samples)?;
        let back = self.flat_inverse(&spectrum)?;
        Ok(complex_to_u8(&back))
    }
}
