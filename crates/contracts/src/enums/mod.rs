pub mod category_tag;
pub mod image_size;
pub mod vibe_tag;

pub use category_tag::CategoryTag;
pub use image_size::ImageSize;
pub use vibe_tag::VibeTag;
