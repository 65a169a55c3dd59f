use contracts::bot_analytics::ContactSubmission;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::api_utils::use_api_config;
use crate::shared::components::ui::{Button, Input, Textarea};

const SUCCESS_MESSAGE: &str = "Thanks! Your payload has been logged.";

#[derive(Debug, Clone, PartialEq)]
enum SubmitStatus {
    Idle,
    Loading,
    Success(String),
    Error(String),
}

/// Decoy contact form. `middle_name` and `company` are invisible to people
/// and skipped by keyboard navigation, so only bots fill them in.
#[component]
pub fn ContactBait() -> impl IntoView {
    let api_config = StoredValue::new(use_api_config());
    let form = RwSignal::new(ContactSubmission::default());
    let status = RwSignal::new(SubmitStatus::Idle);

    let field = move |pick: fn(&ContactSubmission) -> String| Signal::derive(move || form.with(pick));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        status.set(SubmitStatus::Loading);
        let payload = form.get_untracked();
        let config = api_config.get_value();
        spawn_local(async move {
            match api::submit_contact(&config, &payload).await {
                Ok(()) => {
                    status.set(SubmitStatus::Success(SUCCESS_MESSAGE.to_string()));
                    form.set(ContactSubmission::default());
                }
                Err(err) => {
                    log::warn!("contact submission failed: {}", err);
                    status.set(SubmitStatus::Error(err.to_string()));
                }
            }
        });
    };

    let is_loading = Signal::derive(move || status.with(|s| *s == SubmitStatus::Loading));

    view! {
        <div class="page page--narrow">
            <header class="contact-header">
                <h1 class="contact-header__title">"Totally real contact form"</h1>
                <p class="contact-header__subtitle">
                    "Bots love it. Humans probably shouldn't submit real data."
                </p>
            </header>
            <div class="card">
                <form class="form" on:submit=on_submit>
                    <Input
                        id="name"
                        name="name"
                        label="Name"
                        value=field(|f| f.name.clone())
                        on_input=Callback::new(move |v| form.update(|f| f.name = v))
                        required=true
                    />
                    <Input
                        id="email"
                        name="email"
                        label="Email"
                        input_type="email"
                        value=field(|f| f.email.clone())
                        on_input=Callback::new(move |v| form.update(|f| f.email = v))
                        required=true
                    />
                    <div class="form__group form__group--bait" aria-hidden="true">
                        <label class="form__label" for="middle_name">"Middle name"</label>
                        <input
                            id="middle_name"
                            name="middle_name"
                            class="form__input"
                            tabindex="-1"
                            autocomplete="off"
                            prop:value=move || form.with(|f| f.middle_name.clone())
                            on:input=move |ev| form.update(|f| f.middle_name = event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group form__group--bait" aria-hidden="true">
                        <label class="form__label" for="company">"Company"</label>
                        <input
                            id="company"
                            name="company"
                            class="form__input"
                            tabindex="-1"
                            autocomplete="off"
                            prop:value=move || form.with(|f| f.company.clone())
                            on:input=move |ev| form.update(|f| f.company = event_target_value(&ev))
                        />
                    </div>
                    <Textarea
                        id="message"
                        name="message"
                        label="Message"
                        rows=6
                        value=field(|f| f.message.clone())
                        on_input=Callback::new(move |v| form.update(|f| f.message = v))
                        required=true
                    />
                    <Button button_type="submit" disabled=is_loading>
                        {move || if is_loading.get() { "Sending..." } else { "Send message" }}
                    </Button>
                </form>
                {move || match status.get() {
                    SubmitStatus::Idle | SubmitStatus::Loading => None,
                    SubmitStatus::Success(message) => Some(view! {
                        <div class="alert alert--success">{message}</div>
                    }.into_any()),
                    SubmitStatus::Error(message) => Some(view! {
                        <div class="alert alert--error">{message}</div>
                    }.into_any()),
                }}
            </div>
        </div>
    }
}
