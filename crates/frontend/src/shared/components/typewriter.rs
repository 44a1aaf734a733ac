//! Hero typewriter: drives `contracts::shared::typewriter::Typewriter` with
//! browser timers.

use crate::shared::config::app_config;
use crate::shared::timers::as_millis;
use contracts::shared::typewriter::Typewriter as TypewriterState;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[component]
pub fn Typewriter(
    /// Phrases cycled in order; must not be empty
    phrases: Vec<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let config = &app_config().typewriter;
    let text = RwSignal::new(String::new());
    let caret_visible = RwSignal::new(true);

    match TypewriterState::new(phrases, config.timing()) {
        Ok(mut state) => {
            let alive = Arc::new(AtomicBool::new(true));
            let running = alive.clone();
            spawn_local(async move {
                let mut delay = state.initial_delay();
                loop {
                    TimeoutFuture::new(as_millis(delay)).await;
                    if !running.load(Ordering::Relaxed) {
                        break;
                    }
                    delay = state.tick();
                    text.set(state.visible_text());
                }
            });
            on_cleanup(move || alive.store(false, Ordering::Relaxed));
        }
        Err(e) => log::warn!("typewriter disabled: {}", e),
    }

    match set_interval_with_handle(
        move || caret_visible.update(|visible| *visible = !*visible),
        config.caret_blink(),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::error!("caret timer failed: {:?}", e),
    }

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("typewriter {}", additional_class())>
            <span class="typewriter__text">{move || text.get()}</span>
            <span
                class="typewriter__caret"
                class:typewriter__caret--hidden=move || !caret_visible.get()
                aria-hidden="true"
            >
                "|"
            </span>
        </span>
    }
}
