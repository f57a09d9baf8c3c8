use super::{Direction, ImageCipherApi};

/// Starts building an image decryption, the counterpart of [`super::encrypt::prepare`].
pub fn prepare() -> ImageCipherApi {
    ImageCipherApi::new(Direction::Decrypt)
}
