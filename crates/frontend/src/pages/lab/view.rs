use crate::domain::image_generation::ui::VibeGenerator;
use crate::domain::recommendation::ui::AiConcierge;
use crate::layout::global_context::use_app_context;
use crate::shared::components::{CardAnimated, StatCard};
use crate::shared::icons::icon;
use leptos::logging::log;
use leptos::prelude::*;

const LAB_FEATURES: [(&str, &str, &str); 4] = [
    ("palette", "200+ Flavours", "Unlimited mix combinations from brands worldwide."),
    ("flask", "Custom Mixes", "Create your own signature blend or try ours."),
    ("fingerprint", "Personalised", "Adjust heaviness and strength to your liking."),
    ("sparkles", "Hygiene First", "Disposable mouth tips and sanitised equipment."),
];

/// Stagger between feature cards
const FEATURE_STAGGER_MS: u32 = 150;

#[component]
fn LabHero() -> impl IntoView {
    view! {
        <div class="lab-hero">
            <div class="lab-hero__copy">
                <div class="lab-hero__tag">
                    {icon("flask")}
                    <span>"Western Sydney Exclusive"</span>
                </div>
                <h1 class="lab-hero__title">"The Shisha Lab"</h1>
                <p class="lab-hero__lead">
                    "Where science meets tradition. Experience the only dedicated Shisha Mixology Lab in Western Sydney."
                </p>
                <div class="lab-hero__stats">
                    <StatCard value="200+" label="Flavours"/>
                    <StatCard value="100%" label="Customisable"/>
                </div>
            </div>

            <div class="lab-hero__media">
                <img src="https://github.com/janyaski-byte/chatgpt/blob/main/myst%20labb.jpg?raw=true" alt="The Shisha Lab"/>
                <div class="lab-hero__signature">
                    {icon("fingerprint")}
                    <div>
                        <p class="lab-hero__signature-title">"Signature"</p>
                        <p class="lab-hero__signature-text">"Mixology"</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn LabFeatures() -> impl IntoView {
    let cards = LAB_FEATURES
        .iter()
        .enumerate()
        .map(|(i, (icon_name, title, text))| {
            let delay = i as u32 * FEATURE_STAGGER_MS;
            view! {
                <CardAnimated class="lab-feature" delay_ms=delay>
                    <div class="lab-feature__icon">{icon(icon_name)}</div>
                    <h3 class="lab-feature__title">{*title}</h3>
                    <p class="lab-feature__text">{*text}</p>
                </CardAnimated>
            }
        })
        .collect_view();

    view! {
        <div class="lab-features">
            <div class="lab-features__copy">
                <h2 class="lab-section__title">"Engineered for Perfection"</h2>
                <p>
                    "At MYST, we believe shisha is an art form. Our one-of-a-kind Shisha Lab brings a unique experience that allows you to fully customise your smoke."
                </p>
                <p>
                    "From selecting your preferred head type to choosing from over 200 premium flavours, we give you control through the entire process."
                </p>
            </div>
            <div class="lab-features__grid">{cards}</div>
        </div>
    }
}

#[component]
pub fn LabPage() -> impl IntoView {
    let ctx = use_app_context();
    log!("🧪 lab mounted");

    view! {
        <div class="lab-page">
            <div class="lab-page__glow" aria-hidden="true"></div>
            <div class="container">
                <button class="lab-back" on:click=move |_| ctx.back_to_lounge()>
                    <span class="lab-back__icon">{icon("arrow-left")}</span>
                    <span>"Back to Lounge"</span>
                </button>

                <LabHero/>

                <div class="lab-concierge">
                    <div class="lab-section__heading">
                        <h2 class="lab-section__title">"Meet Your Virtual Sommelier"</h2>
                        <p>
                            "Not sure what to mix? Let our AI Concierge scan our 200+ flavour database to generate the perfect recipe for your session."
                        </p>
                    </div>
                    <AiConcierge/>
                </div>

                <LabFeatures/>
            </div>

            <VibeGenerator/>
        </div>
    }
}
