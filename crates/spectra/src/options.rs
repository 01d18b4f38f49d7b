//! Transform configuration

use spectra_core::consts::FULL_IMAGE;
use spectra_core::InverseMode;
use spectra_visual::VisualOptions;

/// Options for the cosine pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformOptions {
    /// Block size of the transform matrix; 0 selects the full-image DCT
    pub matrix_size: usize,
    /// Inverse used by the full-image path
    pub inverse_mode: InverseMode,
    /// How coefficient spectra are rendered
    pub visual: VisualOptions,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            matrix_size: FULL_IMAGE,
            inverse_mode: InverseMode::Exact,
            visual: VisualOptions::cosine(),
        }
    }
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn matrix_size(mut self, matrix_size: usize) -> Self {
        self.matrix_size = matrix_size;
        self
    }

    pub fn inverse_mode(mut self, inverse_mode: InverseMode) -> Self {
        self.inverse_mode = inverse_mode;
        self
    }

    pub fn visual(mut self, visual: VisualOptions) -> Self {
        self.visual = visual;
        self
    }

    /// Whether a block transform is used instead of the full-image DCT
    pub fn uses_blocks(&self) -> bool {
        self.matrix_size != FULL_IMAGE
    }
}
