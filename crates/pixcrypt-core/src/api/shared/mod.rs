use std::ffi::OsString;
use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};

use log::info;

use crate::media::{open_image, Persist};
use crate::{CipherOptions, Key, Method, PixcryptError, TransformEngine};

/// Which way an image goes through the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    /// Suffix appended to the file stem of a default output path.
    pub fn suffix(&self) -> &'static str {
        match self {
            Direction::Encrypt => "_encrypted",
            Direction::Decrypt => "_decrypted",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => f.write_str("encrypted"),
            Direction::Decrypt => f.write_str("decrypted"),
        }
    }
}

/// `<input-stem>_encrypted<ext>` or `<input-stem>_decrypted<ext>`, next to the input.
///
/// ```rust
/// use std::path::Path;
/// use pixcrypt_core::api::{default_output_path, Direction};
///
/// assert_eq!(
///     default_output_path("photos/cat.png", Direction::Encrypt),
///     Path::new("photos/cat_encrypted.png")
/// );
/// assert_eq!(
///     default_output_path("cat", Direction::Decrypt),
///     Path::new("cat_decrypted")
/// );
/// ```
pub fn default_output_path(input: impl AsRef<Path>, direction: Direction) -> PathBuf {
    let input = input.as_ref();
    let mut file_name: OsString = input.file_stem().unwrap_or_default().to_owned();
    file_name.push(direction.suffix());
    if let Some(ext) = input.extension() {
        file_name.push(".");
        file_name.push(ext);
    }

    input.with_file_name(file_name)
}

/// Builder for scrambling or restoring one image file.
#[derive(Debug)]
pub struct ImageCipherApi {
    direction: Direction,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CipherOptions,
}

impl ImageCipherApi {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            image: None,
            output: None,
            options: CipherOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CipherOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_key<K: Into<Key>>(mut self, key: K) -> Self {
        self.options.key = key.into();
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.options.method = method;
        self
    }

    /// This is the image that gets read, it is never modified
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// This is where the resulting image gets written to
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// If `None` is passed, the output lands next to the input, see [`default_output_path`]
    pub fn use_output<A: AsRef<Path>>(mut self, output: Option<A>) -> Self {
        self.output = output.map(|o| o.as_ref().to_path_buf());
        self
    }

    /// Executes the transformation and returns the path of the written image
    pub fn execute(self) -> Result<PathBuf, PixcryptError> {
        let Some(image) = self.image else {
            return Err(PixcryptError::CarrierNotSet);
        };
        let output = self
            .output
            .unwrap_or_else(|| default_output_path(&image, self.direction));

        let pixels = open_image(&image)?;
        info!(
            "{} image {image:?} of {}x{} pixels with {}",
            match self.direction {
                Direction::Encrypt => "encrypting",
                Direction::Decrypt => "decrypting",
            },
            pixels.width(),
            pixels.height(),
            self.options.method,
        );

        let engine = TransformEngine::new(self.options.key);
        let result = match self.direction {
            Direction::Encrypt => engine.encode(&pixels, self.options.method),
            Direction::Decrypt => engine.decode(&pixels, self.options.method),
        };
        result.save_as(&output)?;

        Ok(output)
    }
}
