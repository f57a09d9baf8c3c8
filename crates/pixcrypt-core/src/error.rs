use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixcryptError {
    /// Represents a method name that is none of `xor`, `swap`, `math` or `shuffle`
    #[error("Invalid method `{0}`. Choose: xor, swap, math, shuffle")]
    InvalidMethod(String),

    /// Represents a flat sample buffer whose length does not match height x width x 3
    #[error("Shape mismatch: expected {expected} samples for the given dimensions, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Represents a shape that is not (height, width, 3), for example a missing channel axis
    #[error("Invalid pixel buffer shape {0:?}, expected (height, width, 3)")]
    InvalidShape(Vec<usize>),

    /// Represents an input media path that does not exist
    #[error("File '{}' not found", .0.display())]
    MediaNotFound(PathBuf),

    /// Represents an unsupported media format. For example, a text file or an unknown extension
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents an image whose dimensions cannot be represented by the image codec
    #[error("Image dimensions {0}x{1} are not supported")]
    UnsupportedDimensions(usize, usize),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No input image set")]
    CarrierNotSet,
}
