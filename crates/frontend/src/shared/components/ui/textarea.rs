use leptos::prelude::*;

/// Labelled multi-line text box bound to a signal
#[component]
pub fn Textarea(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = 3)] rows: u32,
) -> impl IntoView {
    // label text doubles as the element id
    let id = format!("field-{}", label.to_lowercase().replace(' ', "-"));

    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>{label}</label>
            <textarea
                id=id
                class="form__textarea"
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </div>
    }
}
