pub mod decrypt;
pub mod encrypt;
pub mod interactive;

use std::path::Path;

use pixcrypt_core::api::Direction;
use pixcrypt_core::Method;

pub(crate) fn print_success(direction: Direction, written: &Path, method: Method) {
    println!("✓ Image {direction} successfully!");
    println!("✓ {} image saved at: {}", capitalize(direction), written.display());
    println!("✓ Method used: {}", method.name().to_uppercase());
}

fn capitalize(direction: Direction) -> &'static str {
    match direction {
        Direction::Encrypt => "Encrypted",
        Direction::Decrypt => "Decrypted",
    }
}
