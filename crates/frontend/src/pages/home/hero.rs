use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::{Button, ButtonVariant};
use crate::shared::components::Typewriter;
use crate::shared::icons::icon;
use contracts::domain::catalog::catalog;
use contracts::shared::navigation::Section;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[component]
pub fn HeroSection() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header id=Section::Hero.anchor_id() class="hero">
            <div class="hero__backdrop" aria-hidden="true">
                <div class="hero__shade"></div>
                <div class="hero__smoke">
                    <div class="smoke-layer smoke-layer--slow"></div>
                    <div class="smoke-layer smoke-layer--slower"></div>
                </div>
                <picture class="hero__picture">
                    <source media="(min-width: 768px)" srcset="https://github.com/janyaski-byte/chatgpt/blob/main/myst%20hero.jpg?raw=true"/>
                    <img src="https://github.com/janyaski-byte/chatgpt/blob/main/myst%20heroo.jpg?raw=true" alt="MYST Lounge Atmosphere"/>
                </picture>
            </div>

            <div class="container hero__content">
                <h2 class="hero__eyebrow">"Western Sydney's Finest"</h2>
                <h1 class="hero__title">"MYST LOUNGE"</h1>

                <div class="hero__typewriter">
                    <Typewriter phrases=catalog().taglines.clone() class="hero__tagline"/>
                </div>

                <div class="hero__actions">
                    <a
                        href=Section::Menu.href()
                        on:click=move |ev: MouseEvent| {
                            ev.prevent_default();
                            ctx.go_to(Section::Menu);
                        }
                    >
                        <Button class="hero__button">"View Menu"</Button>
                    </a>
                    <Button
                        variant=ButtonVariant::Outline
                        icon_name="flask"
                        class="hero__button hero__button--wiggle"
                        on_click=Callback::new(move |_| ctx.enter_lab())
                    >
                        "Take Me to the Shisha Lab"
                    </Button>
                </div>
            </div>

            <button class="hero__scroll" on:click=move |_| ctx.go_to(Section::About)>
                <span>"Scroll"</span>
                {icon("chevron-down")}
            </button>
        </header>
    }
}

/// Hours / location / phone strip under the hero
#[component]
pub fn InfoStrip() -> impl IntoView {
    let business = &catalog().business;

    view! {
        <div class="info-strip">
            <div class="container info-strip__items">
                <div class="info-strip__item">
                    {icon("clock")}
                    <span>"Open Daily from 7PM"</span>
                </div>
                <a href=business.links.maps.clone() target="_blank" rel="noreferrer" class="info-strip__item">
                    {icon("map-pin")}
                    <span>"Kings Park, NSW"</span>
                </a>
                <a href=business.tel_href() class="info-strip__item">
                    {icon("phone")}
                    <span>{business.phone.clone()}</span>
                </a>
            </div>
        </div>
    }
}
