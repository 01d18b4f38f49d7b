//! Spectrum visualization
//!
//! Turns wide-dynamic-range transform output into integer images:
//! - magnitude and `log(|x|+1)` compression
//! - min–max rescale to an 8-bit or 16-bit range
//! - quadrant swap to center the zero-frequency term
//! - square resampling for display
//! - saturating egress of reconstructed samples

pub mod egress;
pub mod layout;
pub mod scale;
pub mod visualizer;

pub use egress::*;
pub use layout::*;
pub use scale::*;
pub use visualizer::*;
