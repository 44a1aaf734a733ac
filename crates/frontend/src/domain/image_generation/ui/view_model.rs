//! Vibe generator - ViewModel

use super::model::{ensure_api_key_selected, generate_image};
use contracts::domain::image_generation::{GeneratedImage, ImageGenerationFlow};
use contracts::enums::ImageSize;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct VibeGeneratorVm {
    pub prompt: RwSignal<String>,
    pub size: RwSignal<ImageSize>,
    pub flow: RwSignal<ImageGenerationFlow>,
}

impl VibeGeneratorVm {
    pub fn new() -> Self {
        Self {
            prompt: RwSignal::new(String::new()),
            size: RwSignal::new(ImageSize::default()),
            flow: RwSignal::new(ImageGenerationFlow::new()),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.flow.with(|flow| flow.is_loading())
    }

    pub fn error(&self) -> Option<String> {
        self.flow.with(|flow| flow.error().map(str::to_string))
    }

    pub fn image(&self) -> Option<GeneratedImage> {
        self.flow.with(|flow| flow.image().cloned())
    }

    pub fn generate(&self) {
        let prompt = self.prompt.get_untracked();
        let size = self.size.get_untracked();
        let Some(submission) = self.flow.try_update(|flow| flow.submit(&prompt, size)).flatten() else {
            return;
        };

        log!("🔷 vibe generator: {} '{}'", submission.size, submission.prompt);
        let flow = self.flow;
        spawn_local(async move {
            let result = match ensure_api_key_selected().await {
                Ok(()) => generate_image(&submission.prompt, submission.size).await,
                Err(e) => Err(e),
            };
            if let Err(e) = &result {
                log!("❌ vibe generator: {}", e);
            }
            flow.try_update(|flow| flow.finish(submission.size, result));
        });
    }
}

impl Default for VibeGeneratorVm {
    fn default() -> Self {
        Self::new()
    }
}
