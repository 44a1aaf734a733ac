use crate::enums::ImageSize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImageGenerationError {
    #[error("key selection session expired")]
    SessionExpired,
    #[error("model returned no image")]
    NoImage,
    #[error("image request failed: {0}")]
    Request(String),
    #[error("unexpected error")]
    Unexpected,
}

impl ImageGenerationError {
    /// Inline message shown under the form
    pub fn user_message(&self) -> String {
        match self {
            ImageGenerationError::SessionExpired => {
                "Session expired. Please try connecting again.".to_string()
            }
            ImageGenerationError::NoImage => "No image generated.".to_string(),
            ImageGenerationError::Request(message) if !message.trim().is_empty() => {
                message.clone()
            }
            ImageGenerationError::Request(_) => "Failed to generate image.".to_string(),
            ImageGenerationError::Unexpected => "An unexpected error occurred.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    /// `data:` URL of the picture
    pub url: String,
    pub size: ImageSize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSubmission {
    pub prompt: String,
    pub size: ImageSize,
}

/// Form state of the image generator. A failed attempt keeps the previously
/// generated picture on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageGenerationFlow {
    loading: bool,
    image: Option<GeneratedImage>,
    error: Option<String>,
}

impl ImageGenerationFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn image(&self) -> Option<&GeneratedImage> {
        self.image.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Blank prompts and submits while loading are ignored
    pub fn submit(&mut self, prompt: &str, size: ImageSize) -> Option<ImageSubmission> {
        if self.loading || prompt.trim().is_empty() {
            return None;
        }
        self.error = None;
        self.loading = true;
        Some(ImageSubmission {
            prompt: prompt.to_string(),
            size,
        })
    }

    pub fn finish(&mut self, size: ImageSize, result: Result<String, ImageGenerationError>) {
        self.loading = false;
        match result {
            Ok(url) => self.image = Some(GeneratedImage { url, size }),
            Err(e) => self.error = Some(e.user_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_prompt_is_ignored() {
        let mut flow = ImageGenerationFlow::new();
        assert_eq!(flow.submit("   ", ImageSize::OneK), None);
        assert!(!flow.is_loading());
    }

    #[test]
    fn test_success_stores_image() {
        let mut flow = ImageGenerationFlow::new();
        let submission = flow.submit("neon bar", ImageSize::FourK).unwrap();
        assert!(flow.is_loading());
        assert!(flow.submit("again", ImageSize::OneK).is_none());

        flow.finish(submission.size, Ok("data:image/png;base64,AAA".into()));
        assert!(!flow.is_loading());
        assert_eq!(flow.image().unwrap().size, ImageSize::FourK);
        assert_eq!(flow.error(), None);
    }

    #[test]
    fn test_failure_keeps_previous_image() {
        let mut flow = ImageGenerationFlow::new();
        flow.submit("one", ImageSize::OneK).unwrap();
        flow.finish(ImageSize::OneK, Ok("data:image/png;base64,AAA".into()));

        flow.submit("two", ImageSize::TwoK).unwrap();
        flow.finish(ImageSize::TwoK, Err(ImageGenerationError::NoImage));
        assert_eq!(flow.error(), Some("No image generated."));
        assert_eq!(flow.image().unwrap().size, ImageSize::OneK);

        flow.submit("three", ImageSize::TwoK).unwrap();
        assert_eq!(flow.error(), None);
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            ImageGenerationError::Request(String::new()).user_message(),
            "Failed to generate image."
        );
        assert_eq!(
            ImageGenerationError::Request("quota exceeded".into()).user_message(),
            "quota exceeded"
        );
        assert_eq!(
            ImageGenerationError::Unexpected.user_message(),
            "An unexpected error occurred."
        );
    }
}
