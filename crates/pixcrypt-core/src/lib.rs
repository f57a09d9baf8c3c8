//! # Pixcrypt Core API
//!
//! Reversible, key-seeded scrambling of RGB pixel buffers. The central piece is the
//! [`TransformEngine`], built from a numeric [`Key`], offering four [`Method`]s:
//! - `xor` XORs every sample with a random byte pattern
//! - `swap` moves whole pixels to random positions
//! - `math` adds the key and masks with `key mod 256`, no randomness involved
//! - `shuffle` permutes the color channels and adds random noise
//!
//! Decoding with the same key and method restores the original buffer. The one
//! exception is `shuffle`, where samples close to 0 or 255 may come back slightly
//! off because the noise gets clipped.
//!
//! This is obfuscation, not cryptography. Do not use it to protect secrets.
//!
//! # Usage Examples
//!
//! ## Scramble a pixel buffer in memory
//!
//! ```rust
//! use pixcrypt_core::{Method, PixelBuffer, TransformEngine};
//!
//! let engine = TransformEngine::new(123);
//! let plain = PixelBuffer::from_fn(4, 4, |row, col| [row as u8, col as u8, 128]);
//!
//! let scrambled = engine.encode(&plain, Method::XOR);
//! assert_ne!(scrambled, plain);
//! assert_eq!(engine.decode(&scrambled, Method::XOR), plain);
//! ```
//!
//! ## Scramble an image file
//!
//! ```rust
//! use tempfile::tempdir;
//! use pixcrypt_core::{Method, PixelBuffer};
//! use pixcrypt_core::media::Persist;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let image = temp_dir.path().join("photo.png");
//! PixelBuffer::from_fn(8, 8, |row, col| [row as u8 * 30, col as u8 * 30, 0])
//!     .save_as(&image)
//!     .expect("Failed to write the image");
//!
//! let scrambled = pixcrypt_core::api::encrypt::prepare()
//!     .with_key(42)
//!     .with_method(Method::SWAP)
//!     .with_image(&image)          // the output defaults to photo_encrypted.png
//!     .execute()
//!     .expect("Failed to encrypt image");
//!
//! pixcrypt_core::api::decrypt::prepare()
//!     .with_key(42)
//!     .with_method(Method::SWAP)
//!     .with_image(&scrambled)
//!     .with_output(temp_dir.path().join("photo_restored.png"))
//!     .execute()
//!     .expect("Failed to decrypt image");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod commands;
pub mod engine;
pub mod error;
pub mod key;
pub mod media;
pub mod options;
pub mod permutation;
pub mod pixel_buffer;
pub mod result;
pub mod rng;
pub mod transform;

pub use crate::engine::TransformEngine;
pub use crate::error::PixcryptError;
pub use crate::key::{Key, DEFAULT_KEY};
pub use crate::options::CipherOptions;
pub use crate::pixel_buffer::{PixelBuffer, CHANNELS};
pub use crate::result::Result;
pub use crate::transform::{Method, PixelTransform, LOSSLESS_BAND};
