//! Image data structures

use crate::{ImageShape, Sample, SpectraError, SpectraResult};
use ndarray::{stack, Array2, Array3, ArrayD, ArrayView2, Axis, Ix2, Ix3};

/// An image-level array, tagged by its shape
///
/// Multi-channel operations are expressed as a map over the single-channel
/// planes, restacked in their original channel order.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageArray<T> {
    /// `[H, W]`
    Grayscale(Array2<T>),
    /// `[H, W, C]`
    MultiChannel(Array3<T>),
}

impl<T> ImageArray<T> {
    pub fn shape(&self) -> ImageShape {
        match self {
            ImageArray::Grayscale(plane) => {
                let (height, width) = plane.dim();
                ImageShape::Grayscale { height, width }
            }
            ImageArray::MultiChannel(planes) => {
                let (height, width, channels) = planes.dim();
                ImageShape::MultiChannel {
                    height,
                    width,
                    channels,
                }
            }
        }
    }

    pub fn height(&self) -> usize {
        self.shape().height()
    }

    pub fn width(&self) -> usize {
        self.shape().width()
    }

    pub fn channel_count(&self) -> usize {
        self.shape().channels()
    }

    /// Wrap a dynamic-rank array, accepting only rank 2 and rank 3
    pub fn try_from_dyn(array: ArrayD<T>) -> SpectraResult<Self> {
        match array.ndim() {
            2 => Ok(ImageArray::Grayscale(array.into_dimensionality::<Ix2>()?)),
            3 => Ok(ImageArray::MultiChannel(array.into_dimensionality::<Ix3>()?)),
            actual => Err(SpectraError::InvalidRank {
                expected: "2 or 3",
                actual,
            }),
        }
    }

    pub fn into_dyn(self) -> ArrayD<T> {
        match self {
            ImageArray::Grayscale(plane) => plane.into_dyn(),
            ImageArray::MultiChannel(planes) => planes.into_dyn(),
        }
    }

    /// Views of each channel plane, in channel order
    pub fn planes(&self) -> Vec<ArrayView2<'_, T>> {
        match self {
            ImageArray::Grayscale(plane) => vec![plane.view()],
            ImageArray::MultiChannel(planes) => planes.axis_iter(Axis(2)).collect(),
        }
    }

    /// Sample-wise map that keeps the shape tag
    pub fn map<U, F>(&self, f: F) -> ImageArray<U>
    where
        F: FnMut(&T) -> U,
    {
        match self {
            ImageArray::Grayscale(plane) => ImageArray::Grayscale(plane.map(f)),
            ImageArray::MultiChannel(planes) => ImageArray::MultiChannel(planes.map(f)),
        }
    }

    /// Apply a single-channel operation to every plane and restack the results
    pub fn map_channels<U, F>(&self, mut f: F) -> SpectraResult<ImageArray<U>>
    where
        U: Clone,
        F: FnMut(ArrayView2<'_, T>) -> SpectraResult<Array2<U>>,
    {
        match self {
            ImageArray::Grayscale(plane) => Ok(ImageArray::Grayscale(f(plane.view())?)),
            ImageArray::MultiChannel(planes) => {
                let outputs = planes
                    .axis_iter(Axis(2))
                    .map(&mut f)
                    .collect::<SpectraResult<Vec<_>>>()?;
                let views: Vec<_> = outputs.iter().map(|plane| plane.view()).collect();
                Ok(ImageArray::MultiChannel(stack(Axis(2), &views)?))
            }
        }
    }
}

impl<T: Clone> ImageArray<T> {
    /// Build an array from row-major samples with interleaved channels
    pub fn from_interleaved(shape: ImageShape, data: Vec<T>) -> SpectraResult<Self> {
        if shape.width() == 0 || shape.height() == 0 || shape.channels() == 0 {
            return Err(SpectraError::InvalidDimensions {
                width: shape.width(),
                height: shape.height(),
            });
        }
        if data.len() != shape.sample_count() {
            return Err(SpectraError::ShapeMismatch {
                expected: shape.sample_count(),
                actual: data.len(),
            });
        }

        match shape {
            ImageShape::Grayscale { height, width } => Ok(ImageArray::Grayscale(
                Array2::from_shape_vec((height, width), data)?,
            )),
            ImageShape::MultiChannel {
                height,
                width,
                channels,
            } => Ok(ImageArray::MultiChannel(Array3::from_shape_vec(
                (height, width, channels),
                data,
            )?)),
        }
    }

    /// Row-major samples with interleaved channels, ready for an encoder
    pub fn to_interleaved(&self) -> Vec<T> {
        match self {
            ImageArray::Grayscale(plane) => plane.iter().cloned().collect(),
            ImageArray::MultiChannel(planes) => planes.iter().cloned().collect(),
        }
    }
}

impl<T: Sample> ImageArray<T> {
    /// Promote integer samples to reals for the duration of a transform
    pub fn to_f64(&self) -> ImageArray<f64> {
        self.map(|&v| v.to_f64())
    }
}

/// A rendered image ready for an external encoder
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayImage {
    U8(ImageArray<u8>),
    U16(ImageArray<u16>),
}

impl DisplayImage {
    pub fn shape(&self) -> ImageShape {
        match self {
            DisplayImage::U8(image) => image.shape(),
            DisplayImage::U16(image) => image.shape(),
        }
    }

    /// Samples widened to `u16`, whatever the stored depth
    pub fn samples(&self) -> Vec<u16> {
        match self {
            DisplayImage::U8(image) => image.to_interleaved().into_iter().map(u16::from).collect(),
            DisplayImage::U16(image) => image.to_interleaved(),
        }
    }
}
