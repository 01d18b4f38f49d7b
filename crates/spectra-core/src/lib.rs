//! Core types and utilities for the spectra transform engine
//!
//! This crate provides the fundamental data structures shared by the transform and
//! visualization crates: the tagged image array, transform direction flags, display bit
//! depths, and the error type.

pub mod consts;
pub mod error;
pub mod image;
pub mod types;

pub use error::{SpectraError, SpectraResult};
pub use image::*;
pub use types::*;
