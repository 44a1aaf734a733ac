use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    // Compact nav bar once the page is scrolled
    ctx.init_scroll_tracking();

    view! {
        <Shell>
            <AppRoutes />
        </Shell>
    }
}
