use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Overlay dialog. Closes on Escape, on the close button and on a click
/// outside the dialog box.
#[component]
pub fn Modal(
    #[prop(into)]
    title: String,
    /// Called when the dialog asks to be closed
    on_close: Callback<()>,
    /// Wider dialog for record details
    #[prop(optional)]
    wide: bool,
    children: Children,
) -> impl IntoView {
    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div
                class=if wide { "modal modal--wide" } else { "modal" }
                role="dialog"
                aria-modal="true"
                on:click=stop_propagation
            >
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button
                        class="button button--icon modal__close"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
