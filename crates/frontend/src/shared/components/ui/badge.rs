use leptos::prelude::*;

/// Frosted caption chip laid over images
#[component]
pub fn Badge(#[prop(optional, into)] class: MaybeProp<String>, children: Children) -> impl IntoView {
    view! {
        <span class=move || format!("badge {}", class.get().unwrap_or_default())>
            {children()}
        </span>
    }
}
