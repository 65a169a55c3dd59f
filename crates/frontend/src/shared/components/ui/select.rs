use leptos::prelude::*;

use crate::shared::list_results::SelectOption;

/// Dropdown with an inline label, driven by `SelectOption`s
#[component]
pub fn Select(
    /// Label shown before the dropdown (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Currently selected value
    #[prop(into)]
    value: Signal<String>,
    /// Fired with the chosen option value
    on_change: Callback<String>,
    options: Vec<SelectOption>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();

    let option_views = options
        .into_iter()
        .map(|option| {
            let option_value = option.value.clone();
            let is_selected = move || value.get() == option_value;
            view! {
                <option value=option.value selected=is_selected>
                    {option.label}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="form__group form__group--inline">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class=move || format!("form__select {}", additional_class())
                disabled=move || disabled.get().unwrap_or(false)
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {option_views}
            </select>
        </div>
    }
}
