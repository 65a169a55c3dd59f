use crate::shared::icons::icon;
use leptos::prelude::*;

/// Previous/next pager with a "Page X of Y" label. Pages are 1-based.
#[component]
pub fn PaginationControls(
    #[prop(into)]
    current_page: Signal<u32>,

    #[prop(into)]
    total_pages: Signal<u32>,

    /// Disables both buttons, e.g. while a request is in flight
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,

    /// Called with the requested page number
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let is_disabled = move || disabled.get().unwrap_or(false);
    let at_first = move || current_page.get() <= 1;
    let at_last = move || current_page.get() >= total_pages.get().max(1);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || at_first() || is_disabled()
                title="Previous page"
            >
                {icon("chevron-left")}
                <span>"Previous"</span>
            </button>
            <span class="pagination-info">
                {move || format!("Page {} of {}", current_page.get(), total_pages.get().max(1))}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || at_last() || is_disabled()
                title="Next page"
            >
                <span>"Next"</span>
                {icon("chevron-right")}
            </button>
        </div>
    }
}
