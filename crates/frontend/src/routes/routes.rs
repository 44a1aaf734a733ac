use crate::layout::global_context::use_app_context;
use crate::pages::home::HomePage;
use crate::pages::lab::LabPage;
use contracts::shared::navigation::View;
use leptos::prelude::*;

/// Mounts exactly one top-level view. Switching views unmounts the other one,
/// which tears down its timers.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Show
            when=move || ctx.view.get() == View::Lab
            fallback=|| view! { <HomePage /> }
        >
            <LabPage />
        </Show>
    }
}
