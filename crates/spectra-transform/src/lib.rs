//! Transform operations for the spectra engine
//!
//! This crate implements the direct-summation DFT and DCT, the separable driver that
//! runs a 1D kernel along every axis of an array, the orthonormal DCT basis matrix,
//! and the JPEG-style block transform built on it.

pub mod block;
pub mod dct;
pub mod dft;
pub mod matrix;
pub mod separable;
pub mod trig_cache;

pub use block::*;
pub use dct::*;
pub use dft::*;
pub use matrix::*;
pub use separable::*;
pub use trig_cache::*;
