pub mod image;

use std::path::Path;

pub use self::image::open_image;

pub trait Persist {
    fn save_as(&self, _: &Path) -> crate::Result<()>;
}
