use crate::error::PixcryptError;

pub type Result<T> = std::result::Result<T, PixcryptError>;
