use super::view_model::ConciergeVm;
use crate::shared::components::ui::Input;
use crate::shared::icons::icon;
use contracts::domain::recommendation::Recommendation;
use contracts::enums::VibeTag;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

fn vibe_icon(vibe: VibeTag) -> &'static str {
    match vibe {
        VibeTag::Fruity => "grape",
        VibeTag::Icy => "snowflake",
        VibeTag::Dark => "coffee",
        VibeTag::Strong => "flame",
        VibeTag::SurpriseMe => "zap",
    }
}

fn vibe_class(vibe: VibeTag) -> &'static str {
    match vibe {
        VibeTag::Fruity => "vibe-chip--fruity",
        VibeTag::Icy => "vibe-chip--icy",
        VibeTag::Dark => "vibe-chip--dark",
        VibeTag::Strong => "vibe-chip--strong",
        VibeTag::SurpriseMe => "vibe-chip--surprise",
    }
}

#[component]
fn RecipeCard(recommendation: Recommendation, recipe_id: String, on_reset: Callback<()>) -> impl IntoView {
    view! {
        <div class="recipe-card">
            <div class="recipe-card__header">
                <div>
                    <h4 class="recipe-card__eyebrow">"Recommended Mix"</h4>
                    <h2 class="recipe-card__name">{recommendation.name}</h2>
                </div>
                <div class="recipe-card__badge">{icon("flame")}</div>
            </div>

            <div class="recipe-card__body">
                <div class="recipe-card__panel">
                    <span class="recipe-card__label">"Ingredients"</span>
                    <p class="recipe-card__ingredients">{recommendation.ingredients}</p>
                </div>
                <div class="recipe-card__panel">
                    <span class="recipe-card__label">"Flavor Profile"</span>
                    <p class="recipe-card__description">{format!("\"{}\"", recommendation.description)}</p>
                </div>
                <div class="recipe-card__pairing">
                    {icon("coffee")}
                    <span class="recipe-card__pairing-label">"Best Paired With: "</span>
                    <span>{recommendation.pairing}</span>
                </div>
            </div>

            <div class="recipe-card__footer">
                <span class="recipe-card__id">{format!("ID: {}", recipe_id)}</span>
                <button class="recipe-card__reset" on:click=move |_| on_reset.run(())>
                    {icon("refresh")} "Reset"
                </button>
            </div>
        </div>
    }
}

/// Virtual mixologist dashboard: vibe chips + mood text in, recipe card out
#[component]
pub fn AiConcierge() -> impl IntoView {
    let vm = ConciergeVm::new();

    let chips = VibeTag::all()
        .into_iter()
        .map(|vibe| {
            view! {
                <button
                    type="button"
                    class=format!("vibe-chip {}", vibe_class(vibe))
                    class:vibe-chip--selected=move || vm.is_vibe_selected(vibe)
                    on:click=move |_| vm.toggle_vibe(vibe)
                >
                    {icon(vibe_icon(vibe))}
                    <span>{vibe.label()}</span>
                </button>
            }
        })
        .collect_view();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    let on_reset = Callback::new(move |_| vm.reset());

    let output = move || {
        if vm.is_loading() {
            return view! {
                <div class="concierge__loading">
                    <div class="spinner" aria-hidden="true"></div>
                    <p class="concierge__loading-text">"GENERATING MIX..."</p>
                </div>
            }
            .into_any();
        }
        match vm.phase().result().cloned() {
            Some(recommendation) => view! {
                <RecipeCard
                    recommendation=recommendation
                    recipe_id=vm.recipe_id.get_untracked()
                    on_reset=on_reset
                />
            }
            .into_any(),
            None => view! {
                <div class="concierge__empty">
                    <div class="concierge__empty-icon">{icon("sparkles")}</div>
                    <h4>"Ready to Mix"</h4>
                    <p>"Select a vibe or type your preferences to generate a custom recipe card."</p>
                </div>
            }
            .into_any(),
        }
    };

    view! {
        <div class="concierge">
            <div class="concierge__header">
                <div class="concierge__title">
                    <div class="concierge__icon">{icon("sparkles")}</div>
                    <div>
                        <h3>"Virtual Mixologist"</h3>
                        <p class="concierge__subtitle">"AI Powered Engine v2.5"</p>
                    </div>
                </div>
                <div class="concierge__status">
                    "STATUS: "
                    {move || if vm.is_loading() {
                        view! { <span class="concierge__status--busy">"ANALYSING..."</span> }.into_any()
                    } else {
                        view! { <span class="concierge__status--online">"ONLINE"</span> }.into_any()
                    }}
                </div>
            </div>

            <div class="concierge__body">
                <div class="concierge__inputs">
                    <div>
                        <label class="concierge__label">"Select your Vibe:"</label>
                        <div class="vibe-chips">{chips}</div>
                    </div>

                    <form class="concierge__form" on:submit=on_submit>
                        <label class="concierge__label">"Or describe your mood:"</label>
                        <div class="concierge__query">
                            <Input
                                value=Signal::derive(move || vm.request.with(|r| r.text.clone()))
                                on_input=Callback::new(move |text| vm.set_text(text))
                                placeholder="e.g. 'Something sweet but not too heavy...'"
                                aria_label="Describe your mood"
                                class="concierge__input"
                            />
                            <button
                                type="submit"
                                class="concierge__send"
                                aria-label="Generate mix"
                                disabled=move || !vm.can_submit()
                            >
                                {icon("send")}
                            </button>
                        </div>
                    </form>
                </div>

                <div class="concierge__output">{output}</div>
            </div>
        </div>
    }
}
