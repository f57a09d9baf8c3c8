pub mod decrypt;
pub mod encrypt;
mod shared;

pub use shared::*;
