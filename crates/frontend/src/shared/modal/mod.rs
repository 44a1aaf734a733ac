use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Modal(
    /// Title shown in the header; the header is omitted when absent
    #[prop(optional, into)]
    title: Option<String>,
    /// Extra class on the dialog element
    #[prop(optional, into)]
    class: Option<String>,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Escape closes; the listener lives as long as the modal is mounted
    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    let handle_overlay_click = move |_| {
        on_close.run(());
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let handle_close = move |_| {
        on_close.run(());
    };

    let dialog_class = format!("modal {}", class.unwrap_or_default());

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class=dialog_class role="dialog" aria-modal="true" on:click=stop_propagation>
                <button class="button button--icon modal__close" aria-label="Close" on:click=handle_close>
                    {icon("x")}
                </button>
                {title.map(|title| view! {
                    <div class="modal-header">
                        <h2 class="modal-title">{title}</h2>
                    </div>
                })}
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
