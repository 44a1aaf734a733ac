use crate::shared::icons::icon;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled accent pill
    #[default]
    Primary,
    /// Transparent with a light border, accent on hover
    Outline,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button--primary",
            ButtonVariant::Outline => "button--outline",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Medium => "",
            ButtonSize::Large => "button--lg",
        }
    }
}

/// Rounded call-to-action button.
///
/// Often wrapped in an `<a>` (tel:, maps, anchors); `on_click` is only needed
/// when the button acts on its own.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    /// Stretch to the container width
    #[prop(optional)]
    block: bool,
    /// Icon from `icon()` shown after the label
    #[prop(optional)]
    icon_name: Option<&'static str>,
    /// Render as `type="submit"`
    #[prop(optional)]
    submit: bool,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional, into)] class: MaybeProp<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let button_type = if submit { "submit" } else { "button" };
    let classes = move || {
        let mut classes = vec!["button", variant.class(), size.class()];
        if block {
            classes.push("button--block");
        }
        let extra = class.get().unwrap_or_default();
        format!("{} {}", classes.join(" "), extra)
    };

    view! {
        <button
            type=button_type
            class=classes
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.run(ev);
                }
            }
        >
            {children()}
            {icon_name.map(|name| view! { <span class="button__icon">{icon(name)}</span> })}
        </button>
    }
}
