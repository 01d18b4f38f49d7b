//! Constants used throughout the transform engine

/// Matrix size that selects the full-image separable DCT instead of a block transform
pub const FULL_IMAGE: usize = 0;

/// Block size used by JPEG-style codecs
pub const JPEG_BLOCK_SIZE: usize = 8;

/// Top of the 8-bit display range
pub const U8_PEAK: f64 = 255.0;

/// Top of the 16-bit display range
pub const U16_PEAK: f64 = 65535.0;
