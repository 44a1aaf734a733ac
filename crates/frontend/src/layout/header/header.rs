use crate::layout::global_context::use_app_context;
use crate::layout::header::mobile_menu::MobileMenu;
use crate::shared::icons::icon;
use contracts::shared::navigation::Section;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Circular MYST wordmark
#[component]
pub fn MystLogo(#[prop(optional, into)] class: MaybeProp<String>) -> impl IntoView {
    view! {
        <svg
            viewBox="0 0 200 200"
            class=move || format!("myst-logo {}", class.get().unwrap_or_default())
            fill="none"
            aria-label="MYST Lounge"
        >
            <circle cx="100" cy="100" r="95" stroke="currentColor" stroke-width="5"/>
            <text x="100" y="112" text-anchor="middle" font-family="'Playfair Display', serif" font-size="65" fill="currentColor">
                "MYST"
            </text>
            <text x="100" y="148" text-anchor="middle" font-family="'Outfit', sans-serif" font-size="16" fill="currentColor" letter-spacing="0.4em">
                "LOUNGE"
            </text>
        </svg>
    }
}

/// Anchor link that routes through the navigator instead of the browser
#[component]
pub fn SectionLink(section: Section, #[prop(into)] class: String) -> impl IntoView {
    let ctx = use_app_context();
    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        ctx.go_to(section);
    };

    view! {
        <a href=section.href() class=class on:click=on_click>
            {section.label()}
        </a>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="navbar" class:navbar--scrolled=move || ctx.scrolled.get()>
            <div class="container navbar__content">
                <a
                    href=Section::Hero.href()
                    class="navbar__brand"
                    on:click=move |ev: MouseEvent| {
                        ev.prevent_default();
                        ctx.go_to(Section::Hero);
                    }
                >
                    <MystLogo class="navbar__logo"/>
                </a>

                <div class="navbar__links">
                    <SectionLink section=Section::Hero class="navbar__link"/>
                    <button class="navbar__link" on:click=move |_| ctx.enter_lab()>
                        "Shisha Lab"
                    </button>
                    <SectionLink section=Section::About class="navbar__link"/>
                    <SectionLink section=Section::Menu class="navbar__link"/>
                    <SectionLink section=Section::Reviews class="navbar__link"/>
                </div>

                <button
                    class="navbar__toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| ctx.toggle_mobile_menu()
                >
                    {move || if ctx.mobile_menu_open.get() { icon("x") } else { icon("menu") }}
                </button>
            </div>
        </nav>

        <Show when=move || ctx.mobile_menu_open.get()>
            <MobileMenu/>
        </Show>
    }
}
