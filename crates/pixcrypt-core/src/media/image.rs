use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use image::io::Reader;
use image::ImageFormat;
use log::{error, info, warn};

use crate::error::PixcryptError;
use crate::pixel_buffer::PixelBuffer;
use crate::result::Result;

use super::Persist;

/// Reads an image file into a [`PixelBuffer`], converting any color type to RGB8.
///
/// ## Example of usage
/// ```rust
/// use pixcrypt_core::media::open_image;
///
/// assert!(open_image("does/not/exist.png").is_err());
/// ```
pub fn open_image(path: impl AsRef<Path>) -> Result<PixelBuffer> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(PixcryptError::MediaNotFound(path.to_path_buf()));
    }

    // the format comes from the file content, the extension is only a fallback
    let reader = Reader::open(path)
        .and_then(Reader::with_guessed_format)
        .map_err(|source| PixcryptError::ReadError { source })?;
    if reader.format().is_none() {
        return Err(PixcryptError::UnsupportedMedia);
    }

    let image = reader.decode().map_err(|e| {
        error!("Error reading image {path:?}: {e}");
        match e {
            image::ImageError::IoError(source) => PixcryptError::ReadError { source },
            image::ImageError::Unsupported(_) => PixcryptError::UnsupportedMedia,
            _ => PixcryptError::InvalidImageMedia,
        }
    })?;

    Ok(PixelBuffer::from(image.to_rgb8()))
}

fn output_format(path: &Path) -> Result<ImageFormat> {
    let format = ImageFormat::from_path(path).map_err(|_| PixcryptError::UnsupportedMedia)?;
    if format == ImageFormat::Jpeg {
        warn!("{path:?} uses a lossy format, the scrambled pixels will not survive a round trip");
    }

    Ok(format)
}

impl PixelBuffer {
    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W, format: ImageFormat) -> Result<()> {
        self.to_rgb_image()?
            .write_to(&mut writer, format)
            .map_err(|e| {
                error!("Error saving image: {e}");
                PixcryptError::ImageEncodingError
            })
    }
}

impl Persist for PixelBuffer {
    fn save_as(&self, file: &Path) -> Result<()> {
        let format = output_format(file)?;
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            PixcryptError::WriteError { source: e }
        })?;

        let mut writer = BufWriter::new(f);
        self.save_to_writer(&mut writer, format)?;
        writer
            .flush()
            .map_err(|source| PixcryptError::WriteError { source })?;
        info!("image written to {file:?}");

        Ok(())
    }
}
