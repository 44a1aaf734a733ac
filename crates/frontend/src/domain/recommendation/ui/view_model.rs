//! Virtual mixologist - ViewModel
//!
//! Reactive wrapper around `RecommendationFlow`.

use super::model::get_recommendation;
use crate::shared::config::app_config;
use crate::shared::timers::as_millis;
use contracts::domain::recommendation::{
    new_recipe_id, RecommendationFlow, RecommendationPhase, RecommendationRequest,
};
use contracts::enums::VibeTag;
use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct ConciergeVm {
    pub request: RwSignal<RecommendationRequest>,
    pub flow: RwSignal<RecommendationFlow>,
    /// Shown in the recipe card footer, regenerated per result
    pub recipe_id: RwSignal<String>,
}

impl ConciergeVm {
    pub fn new() -> Self {
        Self {
            request: RwSignal::new(RecommendationRequest::default()),
            flow: RwSignal::new(RecommendationFlow::new()),
            recipe_id: RwSignal::new(String::new()),
        }
    }

    pub fn phase(&self) -> RecommendationPhase {
        self.flow.with(|flow| flow.phase().clone())
    }

    pub fn is_loading(&self) -> bool {
        self.flow.with(|flow| flow.phase().is_loading())
    }

    pub fn can_submit(&self) -> bool {
        let request = self.request.get();
        self.flow.with(|flow| flow.can_submit(&request))
    }

    pub fn is_vibe_selected(&self, vibe: VibeTag) -> bool {
        self.request.with(|request| request.is_selected(vibe))
    }

    pub fn toggle_vibe(&self, vibe: VibeTag) {
        self.request.update(|request| {
            request.toggle_vibe(vibe);
        });
    }

    pub fn set_text(&self, text: String) {
        self.request.update(|request| request.text = text);
    }

    /// Starts one request. The loading phase lasts at least the configured
    /// minimum even when the answer comes back sooner.
    pub fn submit(&self) {
        let request = self.request.get_untracked();
        let Some(submission) = self.flow.try_update(|flow| flow.submit(&request)).flatten() else {
            return;
        };

        log!("🔷 concierge #{}: '{}'", submission.seq, submission.query);
        let vm = *self;
        let min_loading = app_config().concierge.min_loading();

        spawn_local(async move {
            // started before the request so both run together
            let min_delay = TimeoutFuture::new(as_millis(min_loading));
            let result = get_recommendation(&submission.query).await;
            min_delay.await;

            vm.recipe_id.try_set(new_recipe_id());
            match result {
                Ok(raw) => {
                    log!("✅ concierge #{} answered", submission.seq);
                    vm.flow.try_update(|flow| flow.resolve(submission.seq, &raw));
                }
                Err(e) => {
                    log::error!("❌ concierge #{} failed: {}", submission.seq, e);
                    vm.flow.try_update(|flow| flow.fail(submission.seq));
                }
            }
        });
    }

    pub fn reset(&self) {
        self.flow.update(|flow| flow.reset());
    }
}

impl Default for ConciergeVm {
    fn default() -> Self {
        Self::new()
    }
}
