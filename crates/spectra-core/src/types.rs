//! Core types for the transform engine

use crate::consts::{U16_PEAK, U8_PEAK};
use crate::{SpectraError, SpectraResult};
use num_traits::NumCast;

/// Direction of a transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Signal domain to transform domain
    Forward,
    /// Transform domain back to signal domain
    Inverse,
}

impl Direction {
    /// Sign applied to the sine term of the Fourier kernel
    pub fn sine_sign(&self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Inverse => 1.0,
        }
    }
}

/// How the full-image cosine path performs its inverse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InverseMode {
    /// DCT-III, the true inverse of the forward DCT-II
    #[default]
    Exact,
    /// Applies the forward DCT-II again, reproducing legacy reconstructions
    ReferenceCompat,
}

/// Integer depth of a rendered display image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BitDepth {
    /// 8-bit samples, 0..=255
    #[default]
    Eight,
    /// 16-bit samples, 0..=65535
    Sixteen,
}

impl BitDepth {
    /// Largest representable sample value
    pub fn peak(&self) -> f64 {
        match self {
            BitDepth::Eight => U8_PEAK,
            BitDepth::Sixteen => U16_PEAK,
        }
    }

    pub fn bits(&self) -> u8 {
        match self {
            BitDepth::Eight => 8,
            BitDepth::Sixteen => 16,
        }
    }
}

impl TryFrom<u8> for BitDepth {
    type Error = SpectraError;

    fn try_from(bits: u8) -> SpectraResult<Self> {
        match bits {
            8 => Ok(BitDepth::Eight),
            16 => Ok(BitDepth::Sixteen),
            other => Err(SpectraError::InvalidParameter(format!(
                "unsupported bit depth {other}"
            ))),
        }
    }
}

/// Shape of an image-level array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageShape {
    /// `[H, W]`
    Grayscale { height: usize, width: usize },
    /// `[H, W, C]`, channels interleaved
    MultiChannel {
        height: usize,
        width: usize,
        channels: usize,
    },
}

impl ImageShape {
    pub fn height(&self) -> usize {
        match *self {
            ImageShape::Grayscale { height, .. } | ImageShape::MultiChannel { height, .. } => {
                height
            }
        }
    }

    pub fn width(&self) -> usize {
        match *self {
            ImageShape::Grayscale { width, .. } | ImageShape::MultiChannel { width, .. } => width,
        }
    }

    pub fn channels(&self) -> usize {
        match *self {
            ImageShape::Grayscale { .. } => 1,
            ImageShape::MultiChannel { channels, .. } => channels,
        }
    }

    /// Total number of samples across all channels
    pub fn sample_count(&self) -> usize {
        self.height() * self.width() * self.channels()
    }
}

/// Image sample type
pub trait Sample: Copy + NumCast + PartialOrd + Send + Sync {
    fn to_f64(self) -> f64;

    /// Rounds and saturates a real value into this sample type
    fn from_f64_saturating(value: f64) -> Self;
}

impl Sample for u8 {
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64_saturating(value: f64) -> Self {
        value.round().clamp(0.0, U8_PEAK) as u8
    }
}

impl Sample for u16 {
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64_saturating(value: f64) -> Self {
        value.round().clamp(0.0, U16_PEAK) as u16
    }
}

impl Sample for f64 {
    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64_saturating(value: f64) -> Self {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_depth_conversion() {
        assert_eq!(BitDepth::try_from(8).unwrap(), BitDepth::Eight);
        assert_eq!(BitDepth::try_from(16).unwrap().peak(), 65535.0);
        assert!(BitDepth::try_from(12).is_err());
        for depth in [BitDepth::Eight, BitDepth::Sixteen] {
            assert_eq!(BitDepth::try_from(depth.bits()).unwrap(), depth);
        }
    }

    #[test]
    fn test_saturating_samples() {
        assert_eq!(u8::from_f64_saturating(-3.2), 0);
        assert_eq!(u8::from_f64_saturating(254.6), 255);
        assert_eq!(u8::from_f64_saturating(1e9), 255);
        assert_eq!(u8::from_f64_saturating(f64::NAN), 0);
        assert_eq!(u16::from_f64_saturating(70000.0), 65535);
    }

    #[test]
    fn test_shape_accessors() {
        let shape = ImageShape::MultiChannel {
            height: 4,
            width: 5,
            channels: 3,
        };
        assert_eq!(shape.sample_count(), 60);
        let gray = ImageShape::Grayscale {
            height: 2,
            width: 7,
        };
        assert_eq!(gray.channels(), 1);
        assert_eq!(gray.width(), 7);
    }
}
