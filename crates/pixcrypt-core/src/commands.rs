use std::path::{Path, PathBuf};

use crate::{CipherOptions, PixcryptError};

/// Scrambles `image` and writes the result to `output`, or next to the input
/// when `output` is `None`. Returns the path written.
pub fn encrypt(
    image: &Path,
    output: Option<&Path>,
    options: CipherOptions,
) -> Result<PathBuf, PixcryptError> {
    crate::api::encrypt::prepare()
        .with_options(options)
        .with_image(image)
        .use_output(output)
        .execute()
}

/// Restores an image scrambled by [`encrypt`] with the same options.
pub fn decrypt(
    image: &Path,
    output: Option<&Path>,
    options: CipherOptions,
) -> Result<PathBuf, PixcryptError> {
    crate::api::decrypt::prepare()
        .with_options(options)
        .with_image(image)
        .use_output(output)
        .execute()
}
