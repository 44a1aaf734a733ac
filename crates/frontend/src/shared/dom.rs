//! Thin wrappers over window scrolling.

use contracts::shared::navigation::{NavEffect, Section};
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn scroll_to_top(behavior: ScrollBehavior) {
    if let Some(window) = web_sys::window() {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(behavior);
        window.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Smooth-scrolls to a section. Returns false when the anchor is not mounted.
pub fn scroll_into_view(section: Section) -> bool {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.anchor_id()));
    match element {
        Some(element) => {
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&opts);
            true
        }
        None => false,
    }
}

pub fn apply_nav_effect(effect: NavEffect) {
    match effect {
        // after the new view has rendered
        NavEffect::ScrollToTop => request_animation_frame(|| scroll_to_top(ScrollBehavior::Instant)),
        NavEffect::SmoothScrollToTop => scroll_to_top(ScrollBehavior::Smooth),
        NavEffect::ScrollIntoView { section, delay } if delay.is_zero() => {
            scroll_into_view(section);
        }
        NavEffect::ScrollIntoView { section, delay } => {
            set_timeout(
                move || {
                    if !scroll_into_view(section) {
                        log::warn!(
                            "anchor '{}' not mounted after {:?}, scroll skipped",
                            section.anchor_id(),
                            delay
                        );
                    }
                },
                delay,
            );
        }
    }
}
