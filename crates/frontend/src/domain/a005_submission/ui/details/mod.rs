use contracts::bot_analytics::Record;
use leptos::prelude::*;

use crate::shared::components::ui::{Badge, BadgeTone};
use crate::shared::date_utils::format_datetime;
use crate::shared::list_results::PLACEHOLDER;
use crate::shared::modal::Modal;

fn non_empty<'a>(record: &'a Record, key: &str) -> Option<&'a str> {
    record.text(key).filter(|value| !value.is_empty())
}

/// `email_submitted`, else `email_preview`, else the placeholder.
pub fn submission_email(record: &Record) -> String {
    non_empty(record, "email_submitted")
        .or_else(|| non_empty(record, "email_preview"))
        .unwrap_or(PLACEHOLDER)
        .to_string()
}

/// Detection tags with their badge tone; `clean` when none were recorded.
pub fn detection_tags(record: &Record) -> Vec<(String, BadgeTone)> {
    let tags = match record.value("detection_tags") {
        Some(value) if !value.is_null() => record.string_list("detection_tags"),
        _ => vec!["clean".to_string()],
    };
    tags.into_iter()
        .map(|tag| {
            let tone = tag_tone(&tag);
            (tag, tone)
        })
        .collect()
}

/// `honeypot-hit` is a failure, `clean` is muted, anything else informational.
pub fn tag_tone(tag: &str) -> BadgeTone {
    match tag {
        "honeypot-hit" => BadgeTone::Failure,
        "clean" => BadgeTone::Neutral,
        _ => BadgeTone::Info,
    }
}

/// Pretty-printed `headers_json`, when the record carries one.
pub fn headers_block(record: &Record) -> Option<String> {
    let headers = record.value("headers_json").filter(|v| !v.is_null())?;
    Some(serde_json::to_string_pretty(headers).unwrap_or_else(|_| headers.to_string()))
}

#[component]
pub fn SubmissionModal(submission: Record, on_close: Callback<()>) -> impl IntoView {
    let title = format!(
        "Submission #{}",
        submission.id().unwrap_or_else(|| PLACEHOLDER.to_string())
    );
    let submitted = submission
        .text("created_at")
        .map(format_datetime)
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    let field = |key: &str| non_empty(&submission, key).unwrap_or(PLACEHOLDER).to_string();
    let ip = field("ip_address");
    let referer = field("referer");
    let user_agent = field("user_agent");
    let email = submission_email(&submission);
    let tags = detection_tags(&submission)
        .into_iter()
        .map(|(tag, tone)| view! { <Badge tone=tone>{tag}</Badge> })
        .collect_view();
    let headers = headers_block(&submission);
    let raw_body = non_empty(&submission, "raw_body").map(str::to_string);

    view! {
        <Modal title=title on_close=on_close>
            <div class="submission-detail">
                <div class="submission-detail__item">
                    <p class="submission-detail__label">"Submitted"</p>
                    <p class="submission-detail__value">{submitted}</p>
                </div>
                <div class="submission-detail__grid">
                    <div class="submission-detail__item">
                        <p class="submission-detail__label">"IP Address"</p>
                        <p class="submission-detail__value">{ip}</p>
                    </div>
                    <div class="submission-detail__item">
                        <p class="submission-detail__label">"Email"</p>
                        <p class="submission-detail__value">{email}</p>
                    </div>
                    <div class="submission-detail__item">
                        <p class="submission-detail__label">"Referer"</p>
                        <p class="submission-detail__value submission-detail__value--wrap">{referer}</p>
                    </div>
                    <div class="submission-detail__item">
                        <p class="submission-detail__label">"User Agent"</p>
                        <p class="submission-detail__value submission-detail__value--wrap">{user_agent}</p>
                    </div>
                </div>
                <div class="submission-detail__item">
                    <p class="submission-detail__label">"Detection Tags"</p>
                    <div class="submission-detail__badges">{tags}</div>
                </div>
                {headers.map(|headers| view! {
                    <div class="submission-detail__item">
                        <p class="submission-detail__label">"Headers"</p>
                        <pre class="json-block">{headers}</pre>
                    </div>
                })}
                {raw_body.map(|body| view! {
                    <div class="submission-detail__item">
                        <p class="submission-detail__label">"Body"</p>
                        <pre class="json-block json-block--plain">{body}</pre>
                    </div>
                })}
            </div>
        </Modal>
    }
}
