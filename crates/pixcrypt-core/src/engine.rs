use log::debug;

use crate::key::Key;
use crate::pixel_buffer::PixelBuffer;
use crate::result::Result;
use crate::transform::{Method, PixelTransform};

/// Applies and reverts the pixel transforms for one fixed [`Key`].
///
/// The engine holds no random state of its own, each call reseeds a fresh
/// generator from the key. A single engine can therefore be shared between
/// threads and calls never influence each other.
///
/// ## Example of usage
/// ```rust
/// use pixcrypt_core::{Method, PixelBuffer, TransformEngine};
///
/// let engine = TransformEngine::new(7);
/// let plain = PixelBuffer::new(1, 1, vec![10, 20, 30]).unwrap();
///
/// let scrambled = engine.encode(&plain, Method::SWAP);
/// assert_eq!(engine.decode(&scrambled, Method::SWAP), plain);
///
/// assert!(engine.encode_named(&plain, "rot13").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformEngine {
    key: Key,
}

impl TransformEngine {
    pub fn new(key: impl Into<Key>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> Key {
        self.key
    }

    pub fn encode(&self, buffer: &PixelBuffer, method: Method) -> PixelBuffer {
        debug!("encoding {:?} pixel buffer with {method}", buffer.shape());
        method.encode(&self.key, buffer)
    }

    pub fn decode(&self, buffer: &PixelBuffer, method: Method) -> PixelBuffer {
        debug!("decoding {:?} pixel buffer with {method}", buffer.shape());
        method.decode(&self.key, buffer)
    }

    /// Like [`TransformEngine::encode`], but with the method given by name.
    /// Unknown names fail before any pixel is touched.
    pub fn encode_named(&self, buffer: &PixelBuffer, method: &str) -> Result<PixelBuffer> {
        let method: Method = method.parse()?;
        Ok(self.encode(buffer, method))
    }

    /// Like [`TransformEngine::decode`], but with the method given by name.
    pub fn decode_named(&self, buffer: &PixelBuffer, method: &str) -> Result<PixelBuffer> {
        let method: Method = method.parse()?;
        Ok(self.decode(buffer, method))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PixcryptError;
    use crate::test_utils::prepare_gradient_buffer;

    #[test]
    fn should_round_trip_with_every_method() {
        let engine = TransformEngine::new(123);
        let plain = prepare_gradient_buffer(9, 13);

        for method in Method::ALL.into_iter().filter(Method::is_exact) {
            let encoded = engine.encode(&plain, method);
            assert_ne!(encoded, plain, "{method} did not change the buffer");
            assert_eq!(engine.decode(&encoded, method), plain, "{method}");
        }
    }

    #[test]
    fn should_reject_invalid_method_names() {
        let engine = TransformEngine::default();
        let plain = prepare_gradient_buffer(2, 2);

        assert!(matches!(
            engine.encode_named(&plain, "invalid"),
            Err(PixcryptError::InvalidMethod(_))
        ));
        assert!(matches!(
            engine.decode_named(&plain, "XORR"),
            Err(PixcryptError::InvalidMethod(_))
        ));
        assert_eq!(
            engine.encode_named(&plain, "math").unwrap(),
            engine.encode(&plain, Method::MATH)
        );
    }

    #[test]
    fn should_pass_empty_buffers_through() {
        let engine = TransformEngine::new(1);
        let empty = PixelBuffer::zeroed(0, 0);

        for method in Method::ALL {
            assert_eq!(engine.encode(&empty, method), empty);
            assert_eq!(engine.decode(&empty, method), empty);
        }
    }

    #[test]
    fn should_not_mutate_the_input() {
        let engine = TransformEngine::new(8);
        let plain = prepare_gradient_buffer(4, 4);
        let copy = plain.clone();

        for method in Method::ALL {
            let _ = engine.encode(&plain, method);
        }
        assert_eq!(plain, copy);
    }
}
