use image::RgbImage;

use crate::error::PixcryptError;
use crate::result::Result;

/// Number of color channels per pixel, always RGB.
pub const CHANNELS: usize = 3;

/// A height x width x 3 array of 8-bit RGB samples.
///
/// Samples are stored row-major, so the sample at `[row][col][channel]` lives at
/// `(row * width + col) * 3 + channel`.
///
/// ## Example of usage
/// ```rust
/// use pixcrypt_core::PixelBuffer;
///
/// let buffer = PixelBuffer::new(1, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
/// assert_eq!(buffer.shape(), (1, 2, 3));
/// assert_eq!(buffer.get(0, 1), Some([4, 5, 6]));
///
/// // a buffer without a channel axis is rejected
/// assert!(PixelBuffer::from_shape(&[2, 3], vec![0; 6]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    height: usize,
    width: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(height: usize, width: usize, data: Vec<u8>) -> Result<Self> {
        let expected = height * width * CHANNELS;
        if data.len() != expected {
            return Err(PixcryptError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            height,
            width,
            data,
        })
    }

    /// Builds a buffer from an ndarray-like shape, which must be `[height, width, 3]`.
    pub fn from_shape(shape: &[usize], data: Vec<u8>) -> Result<Self> {
        match shape {
            [height, width, CHANNELS] => Self::new(*height, *width, data),
            _ => Err(PixcryptError::InvalidShape(shape.to_vec())),
        }
    }

    pub fn zeroed(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            data: vec![0; height * width * CHANNELS],
        }
    }

    /// Builds a buffer by calling `f(row, col)` for every pixel.
    pub fn from_fn<F>(height: usize, width: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> [u8; CHANNELS],
    {
        let mut data = Vec::with_capacity(height * width * CHANNELS);
        for row in 0..height {
            for col in 0..width {
                data.extend_from_slice(&f(row, col));
            }
        }

        Self {
            height,
            width,
            data,
        }
    }

    /// Same shape as `self`, new sample data. Callers guarantee the length.
    pub(crate) fn with_same_shape(&self, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), self.data.len());
        Self {
            height: self.height,
            width: self.width,
            data,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn shape(&self) -> (usize, usize, usize) {
        (self.height, self.width, CHANNELS)
    }

    pub fn pixel_count(&self) -> usize {
        self.height * self.width
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Iterates over all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; CHANNELS]> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|p| [p[0], p[1], p[2]])
    }

    pub fn get(&self, row: usize, col: usize) -> Option<[u8; CHANNELS]> {
        if row >= self.height || col >= self.width {
            return None;
        }
        let i = (row * self.width + col) * CHANNELS;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    pub fn to_rgb_image(&self) -> Result<RgbImage> {
        let (Ok(width), Ok(height)) = (u32::try_from(self.width), u32::try_from(self.height))
        else {
            return Err(PixcryptError::UnsupportedDimensions(self.width, self.height));
        };

        RgbImage::from_raw(width, height, self.data.clone())
            .ok_or(PixcryptError::UnsupportedDimensions(self.width, self.height))
    }
}

impl From<RgbImage> for PixelBuffer {
    fn from(image: RgbImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            height: height as usize,
            width: width as usize,
            data: image.into_raw(),
        }
    }
}
