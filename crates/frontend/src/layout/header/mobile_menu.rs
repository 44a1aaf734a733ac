use crate::layout::global_context::use_app_context;
use crate::layout::header::header::SectionLink;
use crate::shared::components::ui::{Button, ButtonSize};
use contracts::domain::catalog::catalog;
use contracts::shared::navigation::Section;
use leptos::prelude::*;

/// Full-screen menu shown below the `md` breakpoint
#[component]
pub fn MobileMenu() -> impl IntoView {
    let ctx = use_app_context();
    let tel_href = catalog().business.tel_href();

    view! {
        <div class="mobile-menu">
            <div class="mobile-menu__links">
                <SectionLink section=Section::Hero class="mobile-menu__link"/>
                <button class="mobile-menu__link" on:click=move |_| ctx.enter_lab()>
                    "Shisha Lab"
                </button>
                <SectionLink section=Section::About class="mobile-menu__link"/>
                <SectionLink section=Section::Menu class="mobile-menu__link"/>
                <SectionLink section=Section::Reviews class="mobile-menu__link"/>

                <a href=tel_href class="mobile-menu__call">
                    <Button size=ButtonSize::Large block=true>"Call Now"</Button>
                </a>
            </div>
        </div>
    }
}
