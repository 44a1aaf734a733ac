use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::{Button, ButtonVariant};
use crate::shared::modal::Modal;
use contracts::domain::catalog::{catalog, CatalogItem};
use leptos::prelude::*;

#[component]
fn IntensityMeter(segments: [bool; 5]) -> impl IntoView {
    view! {
        <div class="intensity">
            <div class="intensity__scale">
                <span>"Light"</span>
                <span>"Heavy"</span>
            </div>
            <div class="intensity__bar">
                {segments
                    .into_iter()
                    .map(|filled| view! {
                        <div class="intensity__segment" class:intensity__segment--filled=filled></div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

fn chip_list(title: &'static str, values: &[String]) -> Option<impl IntoView> {
    if values.is_empty() {
        return None;
    }
    let chips = values
        .iter()
        .map(|value| view! { <li class="product-modal__chip">{value.clone()}</li> })
        .collect_view();
    Some(view! {
        <div class="product-modal__group">
            <h5 class="product-modal__group-title">{title}</h5>
            <ul class="product-modal__chips">{chips}</ul>
        </div>
    })
}

/// Detail dialog for one menu item
#[component]
pub fn ProductModal(item: &'static CatalogItem, on_close: Callback<()>) -> impl IntoView {
    let business = &catalog().business;

    view! {
        <Modal on_close=on_close class="product-modal">
            <div class="product-modal__layout">
                <div class="product-modal__media">
                    <img src=item.image.clone() alt=item.name.clone()/>
                </div>
                <div class="product-modal__info">
                    <div class="product-modal__category">{item.category.display_name()}</div>
                    <div class="product-modal__title-row">
                        <h2 class="product-modal__name">{item.name.clone()}</h2>
                        {item.price.clone().map(|price| view! { <span class="product-modal__price">{price}</span> })}
                    </div>
                    <p class="product-modal__description">{item.description.clone()}</p>

                    {item.intensity_segments().map(|segments| view! { <IntensityMeter segments=segments/> })}
                    {chip_list("Features", &item.features)}
                    {chip_list("Ingredients", item.ingredients())}

                    <div class="product-modal__actions">
                        <p class="product-modal__hint">
                            "Contact us directly to reserve your mix or book a table"
                        </p>
                        <a href=business.links.instagram.clone() target="_blank" rel="noopener noreferrer">
                            <Button block=true icon_name="instagram">"Message on Instagram"</Button>
                        </a>
                        <div class="product-modal__secondary">
                            <a href=business.tel_href()>
                                <Button variant=ButtonVariant::Outline block=true icon_name="phone">"Call to Order"</Button>
                            </a>
                            <a href=business.links.maps.clone() target="_blank" rel="noopener noreferrer">
                                <Button variant=ButtonVariant::Outline block=true icon_name="map-pin">"Map"</Button>
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </Modal>
    }
}

/// Renders `ProductModal` for the product selected in app state
#[component]
pub fn ProductModalHost() -> impl IntoView {
    let ctx = use_app_context();
    let on_close = Callback::new(move |_| ctx.close_product());

    move || {
        ctx.selected_product
            .get()
            .map(|item| view! { <ProductModal item=item on_close=on_close/> })
    }
}
