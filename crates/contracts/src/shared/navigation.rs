//! Top-level view switching and in-page anchor navigation.
//!
//! [`navigate`] is pure: it returns the next view together with the scroll
//! effects the browser layer has to perform, in order.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settle delay between mounting Home and scrolling to one of its anchors
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum View {
    #[default]
    Home,
    Lab,
}

/// Anchored sections of the home view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Hero,
    About,
    Menu,
    Reviews,
}

impl Section {
    /// DOM id of the section element
    pub fn anchor_id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Menu => "menu",
            Section::Reviews => "reviews",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Menu => "Menu",
            Section::Reviews => "Reviews",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.anchor_id())
    }

    pub fn all() -> Vec<Section> {
        vec![Section::Hero, Section::About, Section::Menu, Section::Reviews]
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.trim_start_matches('#');
        Self::all().into_iter().find(|s| s.anchor_id() == anchor)
    }
}

/// User navigation actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    /// Nav link or hero button leading to the lab page
    EnterLab,
    /// "Back to Lounge" on the lab page
    Back,
    /// Section link in the nav bar or mobile menu
    Section(Section),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEffect {
    /// Instant jump to the top, issued whenever the view changes
    ScrollToTop,
    SmoothScrollToTop,
    /// Smooth scroll to an anchor once `delay` has elapsed
    ScrollIntoView { section: Section, delay: Duration },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationOutcome {
    pub view: View,
    pub effects: Vec<NavEffect>,
}

impl NavigationOutcome {
    pub fn changed_view(&self, from: View) -> bool {
        self.view != from
    }
}

pub fn navigate(current: View, intent: NavIntent, settle_delay: Duration) -> NavigationOutcome {
    let target = match intent {
        NavIntent::EnterLab => View::Lab,
        NavIntent::Back | NavIntent::Section(_) => View::Home,
    };

    let mut effects = Vec::new();
    if target != current {
        effects.push(NavEffect::ScrollToTop);
    }

    match intent {
        NavIntent::EnterLab | NavIntent::Back => {}
        NavIntent::Section(Section::Hero) => effects.push(NavEffect::SmoothScrollToTop),
        NavIntent::Section(section) => {
            // the anchor only exists once Home is mounted, hence the settle delay
            let delay = if current == View::Lab {
                settle_delay
            } else {
                Duration::ZERO
            };
            effects.push(NavEffect::ScrollIntoView { section, delay });
        }
    }

    NavigationOutcome {
        view: target,
        effects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_lab_and_back_scroll_to_top() {
        let outcome = navigate(View::Home, NavIntent::EnterLab, DEFAULT_SETTLE_DELAY);
        assert_eq!(outcome.view, View::Lab);
        assert_eq!(outcome.effects, vec![NavEffect::ScrollToTop]);

        let outcome = navigate(View::Lab, NavIntent::Back, DEFAULT_SETTLE_DELAY);
        assert_eq!(outcome.view, View::Home);
        assert_eq!(outcome.effects, vec![NavEffect::ScrollToTop]);
    }

    #[test]
    fn test_enter_lab_from_lab_is_noop() {
        let outcome = navigate(View::Lab, NavIntent::EnterLab, DEFAULT_SETTLE_DELAY);
        assert_eq!(outcome.view, View::Lab);
        assert!(outcome.effects.is_empty());
        assert!(!outcome.changed_view(View::Lab));
    }

    #[test]
    fn test_anchor_from_home_scrolls_immediately() {
        let outcome = navigate(
            View::Home,
            NavIntent::Section(Section::Reviews),
            DEFAULT_SETTLE_DELAY,
        );
        assert_eq!(outcome.view, View::Home);
        assert_eq!(
            outcome.effects,
            vec![NavEffect::ScrollIntoView {
                section: Section::Reviews,
                delay: Duration::ZERO
            }]
        );
    }

    #[test]
    fn test_anchor_from_lab_switches_then_waits() {
        let outcome = navigate(
            View::Lab,
            NavIntent::Section(Section::Menu),
            DEFAULT_SETTLE_DELAY,
        );
        assert_eq!(outcome.view, View::Home);
        assert_eq!(
            outcome.effects,
            vec![
                NavEffect::ScrollToTop,
                NavEffect::ScrollIntoView {
                    section: Section::Menu,
                    delay: Duration::from_millis(100)
                }
            ]
        );
    }

    #[test]
    fn test_hero_always_smooth_scrolls_to_top() {
        let from_home = navigate(View::Home, NavIntent::Section(Section::Hero), DEFAULT_SETTLE_DELAY);
        assert_eq!(from_home.effects, vec![NavEffect::SmoothScrollToTop]);

        let from_lab = navigate(View::Lab, NavIntent::Section(Section::Hero), DEFAULT_SETTLE_DELAY);
        assert_eq!(from_lab.view, View::Home);
        assert_eq!(
            from_lab.effects,
            vec![NavEffect::ScrollToTop, NavEffect::SmoothScrollToTop]
        );
    }

    #[test]
    fn test_section_anchor_parsing() {
        assert_eq!(Section::from_anchor("#menu"), Some(Section::Menu));
        assert_eq!(Section::from_anchor("about"), Some(Section::About));
        assert_eq!(Section::from_anchor("#lab"), None);
        assert_eq!(Section::Reviews.href(), "#reviews");
    }
}
