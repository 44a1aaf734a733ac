use super::view_model::VibeGeneratorVm;
use crate::shared::components::ui::{Badge, Button, Textarea};
use crate::shared::icons::icon;
use contracts::domain::image_generation::{download_file_name, GeneratedImage};
use contracts::enums::ImageSize;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

#[component]
fn ImagePreview(image: GeneratedImage) -> impl IntoView {
    let file_name = download_file_name(chrono::Utc::now().timestamp_millis());

    view! {
        <img src=image.url.clone() alt="Generated Vibe" class="vibe-preview__image"/>
        <div class="vibe-preview__overlay">
            <a href=image.url download=file_name>
                <Button icon_name="download">"Download"</Button>
            </a>
        </div>
        <Badge class="vibe-preview__badge">
            {format!("Generated by Gemini ({})", image.size)}
        </Badge>
    }
}

/// "Create Your Vibe": prompt + resolution in, wallpaper out
#[component]
pub fn VibeGenerator() -> impl IntoView {
    let vm = VibeGeneratorVm::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.generate();
    };

    let size_buttons = ImageSize::all()
        .into_iter()
        .map(|size| {
            view! {
                <button
                    type="button"
                    class="size-option"
                    class:size-option--active=move || vm.size.get() == size
                    on:click=move |_| vm.size.set(size)
                >
                    {size.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <section class="vibe-generator">
            <div class="container vibe-generator__layout">
                <div class="vibe-generator__controls">
                    <div>
                        <h2 class="vibe-generator__title">"Create Your Vibe"</h2>
                        <p class="vibe-generator__intro">
                            "Visualize your perfect lounge experience. Generate custom wallpapers in high definition using our AI engine."
                        </p>
                    </div>

                    <form class="vibe-generator__form" on:submit=on_submit>
                        <Textarea
                            label="Prompt"
                            value=vm.prompt
                            on_input=Callback::new(move |text| vm.prompt.set(text))
                            placeholder="e.g. A futuristic neon shisha bar with purple smoke and gold accents..."
                            rows=5
                        />

                        <div class="form__group">
                            <label class="form__label">"Resolution"</label>
                            <div class="size-options">{size_buttons}</div>
                        </div>

                        {move || vm.error().map(|message| view! {
                            <MessageBar intent=MessageBarIntent::Error class="vibe-generator__error">
                                {icon("alert-circle")}
                                <span>{message}</span>
                            </MessageBar>
                        })}

                        <Button submit=true block=true disabled=Signal::derive(move || vm.is_loading())>
                            {move || if vm.is_loading() {
                                view! { <span class="spin">{icon("loader")}</span> " Generating..." }.into_any()
                            } else {
                                view! { {icon("sparkles")} " Generate Art" }.into_any()
                            }}
                        </Button>
                    </form>
                </div>

                <div class="vibe-preview">
                    {move || match vm.image() {
                        Some(image) => view! { <ImagePreview image=image/> }.into_any(),
                        None => view! {
                            <div class="vibe-preview__empty">
                                <div class="vibe-preview__empty-icon">{icon("image")}</div>
                                <p>"Your generated artwork will appear here."</p>
                            </div>
                        }
                        .into_any(),
                    }}
                </div>
            </div>
        </section>
    }
}
