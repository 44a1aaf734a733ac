use crate::shared::config::app_config;
use crate::shared::dom;
use contracts::domain::catalog::CatalogItem;
use contracts::enums::CategoryTag;
use contracts::shared::navigation::{navigate, NavIntent, Section, View};
use leptos::ev;
use leptos::logging::log;
use leptos::prelude::*;

/// Scroll offset after which the nav bar switches to its compact style
const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Application state shared through context. Every field is owned here and
/// mutated only through the methods below.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub view: RwSignal<View>,
    pub active_category: RwSignal<CategoryTag>,
    pub selected_product: RwSignal<Option<&'static CatalogItem>>,
    pub mobile_menu_open: RwSignal<bool>,
    pub scrolled: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(View::Home),
            active_category: RwSignal::new(CategoryTag::default()),
            selected_product: RwSignal::new(None),
            mobile_menu_open: RwSignal::new(false),
            scrolled: RwSignal::new(false),
        }
    }

    pub fn init_scroll_tracking(&self) {
        let scrolled = self.scrolled;
        let handle = window_event_listener(ev::scroll, move |_| {
            let is_scrolled = dom::scroll_y() > SCROLLED_THRESHOLD_PX;
            if scrolled.get_untracked() != is_scrolled {
                scrolled.set(is_scrolled);
            }
        });
        on_cleanup(move || handle.remove());
    }

    /// Applies a navigation intent: switches the view if needed, closes the
    /// mobile menu and runs the resulting scroll effects.
    pub fn navigate(&self, intent: NavIntent) {
        let current = self.view.get_untracked();
        let settle_delay = app_config().navigation.settle_delay();
        let outcome = navigate(current, intent, settle_delay);

        self.mobile_menu_open.set(false);
        if outcome.changed_view(current) {
            log!("🔷 view: {:?} -> {:?}", current, outcome.view);
            self.view.set(outcome.view);
        }
        for effect in outcome.effects {
            dom::apply_nav_effect(effect);
        }
    }

    pub fn enter_lab(&self) {
        self.navigate(NavIntent::EnterLab);
    }

    pub fn back_to_lounge(&self) {
        self.navigate(NavIntent::Back);
    }

    pub fn go_to(&self, section: Section) {
        self.navigate(NavIntent::Section(section));
    }

    pub fn select_category(&self, tag: CategoryTag) {
        if self.active_category.get_untracked() != tag {
            self.active_category.set(tag);
        }
    }

    pub fn open_product(&self, item: &'static CatalogItem) {
        log!("🔶 open product: '{}'", item.id);
        self.selected_product.set(Some(item));
    }

    pub fn close_product(&self) {
        self.selected_product.set(None);
    }

    pub fn toggle_mobile_menu(&self) {
        self.mobile_menu_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Shortcut used by every component below `App`
pub fn use_app_context() -> AppGlobalContext {
    leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
