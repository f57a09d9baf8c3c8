use super::{Direction, ImageCipherApi};

/// Starts building an image encryption.
pub fn prepare() -> ImageCipherApi {
    ImageCipherApi::new(Direction::Encrypt)
}
