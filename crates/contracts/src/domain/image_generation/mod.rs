//! "Create your vibe": prompt + resolution in, wallpaper out.

pub mod flow;
pub mod request;

pub use flow::{GeneratedImage, ImageGenerationError, ImageGenerationFlow, ImageSubmission};
pub use request::{build_image_prompt, classify_key_selection_error, download_file_name};
