use leptos::prelude::*;

/// Single-line text box bound to a signal.
///
/// No label of its own: callers place it next to a visible label and pass
/// `aria_label` for assistive tech.
#[component]
pub fn Input(
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] aria_label: &'static str,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <input
            type="text"
            class=move || format!("form__input {}", class.get().unwrap_or_default())
            placeholder=placeholder
            aria-label=aria_label
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}
