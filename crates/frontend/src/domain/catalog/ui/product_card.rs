use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use contracts::domain::catalog::CatalogItem;
use leptos::prelude::*;

/// Number of feature chips shown on a card
const CARD_FEATURES: usize = 3;

#[component]
pub fn ProductCard(item: &'static CatalogItem) -> impl IntoView {
    let ctx = use_app_context();

    let features = item
        .headline_features(CARD_FEATURES)
        .iter()
        .map(|feature| view! { <span class="product-card__feature">{feature.clone()}</span> })
        .collect_view();

    view! {
        <article class="product-card" on:click=move |_| ctx.open_product(item)>
            <div class="product-card__media">
                <img src=item.image.clone() alt=item.name.clone() loading="lazy"/>
                <span class="product-card__category">{item.category.display_name()}</span>
            </div>
            <div class="product-card__body">
                <div class="product-card__header">
                    <h4 class="product-card__name">{item.name.clone()}</h4>
                    <div class="product-card__meta">
                        {item.price.clone().map(|price| view! { <span class="product-card__price">{price}</span> })}
                        <span class="product-card__chevron">{icon("chevron-right")}</span>
                    </div>
                </div>
                <p class="product-card__description">{item.description.clone()}</p>
                <div class="product-card__features">{features}</div>
            </div>
        </article>
    }
}
