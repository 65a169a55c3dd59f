pub mod navbar;

use leptos::prelude::*;
use navbar::Navbar;

/// Top navigation bar above the routed page.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <Navbar />
            <main class="app-shell__content">
                {children()}
            </main>
        </div>
    }
}
