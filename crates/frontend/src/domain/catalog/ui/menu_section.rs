use super::product_card::ProductCard;
use crate::layout::global_context::use_app_context;
use contracts::domain::catalog::{catalog, filter_by_category, CatalogItem};
use contracts::enums::CategoryTag;
use contracts::shared::navigation::Section;
use leptos::prelude::*;

#[component]
fn CategoryTabs() -> impl IntoView {
    let ctx = use_app_context();

    let tabs = CategoryTag::all()
        .into_iter()
        .map(|tag| {
            let is_active = move || ctx.active_category.get() == tag;
            view! {
                <button
                    class="menu-tab"
                    class:menu-tab--active=is_active
                    on:click=move |_| ctx.select_category(tag)
                >
                    {tag.display_name()}
                    {tag.price_label().map(|price| view! { <span class="menu-tab__price">{price}</span> })}
                </button>
            }
        })
        .collect_view();

    view! { <div class="menu-tabs">{tabs}</div> }
}

/// "Curated Flavours": category tabs over the filtered product grid
#[component]
pub fn MenuSection() -> impl IntoView {
    let ctx = use_app_context();
    let visible_items =
        move || -> Vec<&'static CatalogItem> { filter_by_category(&catalog().items, ctx.active_category.get()) };

    view! {
        <section id=Section::Menu.anchor_id() class="section menu-section">
            <div class="menu-section__glow" aria-hidden="true"></div>
            <div class="container">
                <div class="section__heading">
                    <h3 class="section__eyebrow">"Our Collection"</h3>
                    <h2 class="section__title">"Curated Flavours"</h2>
                </div>

                <CategoryTabs/>

                <div class="menu-grid">
                    <For
                        each=visible_items
                        key=|item| item.id.clone()
                        children=move |item| view! { <ProductCard item=item/> }
                    />
                </div>
            </div>
        </section>
    }
}
