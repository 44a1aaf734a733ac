pub mod footer;
pub mod global_context;
pub mod header;

use crate::domain::catalog::ui::ProductModalHost;
use footer::Footer;
use header::Header;
use leptos::prelude::*;

/// Page shell.
///
/// ```text
/// +------------------------------------------+
/// |        Header (fixed nav + mobile menu)  |
/// +------------------------------------------+
/// |        Current view (Home | Lab)         |
/// +------------------------------------------+
/// |        Footer (visit, hours, connect)    |
/// +------------------------------------------+
/// ```
///
/// The product modal is hosted here so it overlays whichever view is mounted.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <div class="smoke-container" aria-hidden="true">
                <div class="smoke-layer"></div>
                <div class="smoke-layer"></div>
            </div>

            <Header />

            <main class="app-main">
                {children()}
            </main>

            <Footer />

            <ProductModalHost />
        </div>
    }
}
