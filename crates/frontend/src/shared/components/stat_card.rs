use crate::shared::icons::icon;
use leptos::prelude::*;

/// Compact figure + caption tile
#[component]
pub fn StatCard(
    /// Figure shown large, e.g. "200+"
    #[prop(into)]
    value: String,
    /// Caption below the figure
    #[prop(into)]
    label: String,
    /// Optional icon name from the icon() helper
    #[prop(optional, into)]
    icon_name: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            {icon_name.map(|name| view! { <div class="stat-card__icon">{icon(&name)}</div> })}
            <div class="stat-card__content">
                <div class="stat-card__value">{value}</div>
                <div class="stat-card__label">{label}</div>
            </div>
        </div>
    }
}
