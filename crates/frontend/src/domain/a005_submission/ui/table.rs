use contracts::bot_analytics::Record;
use leptos::prelude::*;

use crate::shared::components::ui::{Badge, BadgeTone};
use crate::shared::date_utils::format_datetime;
use crate::shared::list_results::{BadgeSpec, PLACEHOLDER};

const AGENT_PREVIEW_CHARS: usize = 50;

/// `attack` when one was attempted, one badge per category, or `clean`.
pub fn submission_tags(row: &Record) -> Vec<BadgeSpec> {
    let attacked = row.flag("attack_attempted") == Some(true);
    let categories = row.string_list("attack_categories");

    let mut tags = Vec::new();
    if attacked {
        tags.push(BadgeSpec::new("attack", BadgeTone::Failure));
    }
    tags.extend(
        categories
            .iter()
            .map(|category| BadgeSpec::new(category.clone(), BadgeTone::Info)),
    );
    if !attacked && categories.is_empty() {
        tags.push(BadgeSpec::new("clean", BadgeTone::Neutral));
    }
    tags
}

/// First 50 characters of the user agent.
pub fn agent_preview(row: &Record) -> String {
    match row.text("agent").filter(|agent| !agent.is_empty()) {
        Some(agent) => agent.chars().take(AGENT_PREVIEW_CHARS).collect(),
        None => PLACEHOLDER.to_string(),
    }
}

fn text_or_placeholder(row: &Record, key: &str) -> String {
    row.text(key)
        .filter(|value| !value.is_empty())
        .unwrap_or(PLACEHOLDER)
        .to_string()
}

/// Compact submissions table used by the dashboard and the admin view.
#[component]
pub fn SubmissionTable(
    #[prop(into)]
    submissions: Signal<Vec<Record>>,
    on_select: Callback<Record>,
) -> impl IntoView {
    view! {
        <div class="table">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"Timestamp"</th>
                        <th class="table__header-cell">"IP"</th>
                        <th class="table__header-cell">"Email"</th>
                        <th class="table__header-cell">"User Agent"</th>
                        <th class="table__header-cell">"Tags"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || submissions.get().into_iter().map(|row| {
                        let created = row.text("created_at").map(format_datetime).unwrap_or_else(|| PLACEHOLDER.to_string());
                        let ip = text_or_placeholder(&row, "ip_address");
                        let email = text_or_placeholder(&row, "email");
                        let agent = agent_preview(&row);
                        let tags = submission_tags(&row)
                            .into_iter()
                            .map(|tag| view! { <Badge tone=tag.tone>{tag.label}</Badge> })
                            .collect_view();
                        view! {
                            <tr
                                class="table__row table__row--clickable"
                                on:click=move |_| on_select.run(row.clone())
                            >
                                <td class="table__cell table__cell--strong">{created}</td>
                                <td class="table__cell">{ip}</td>
                                <td class="table__cell">{email}</td>
                                <td class="table__cell">{agent}</td>
                                <td class="table__cell table__cell--badges">{tags}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
            <Show when=move || submissions.with(|rows| rows.is_empty())>
                <p class="table__empty">"No submissions yet."</p>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn record(value: Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    fn labels(tags: Vec<BadgeSpec>) -> Vec<String> {
        tags.into_iter().map(|t| t.label).collect()
    }

    #[test]
    fn empty_categories_are_clean() {
        let row = record(json!({ "attack_attempted": false, "attack_categories": [] }));
        assert_eq!(submission_tags(&row), vec![BadgeSpec::new("clean", BadgeTone::Neutral)]);
        assert_eq!(labels(submission_tags(&record(json!({})))), vec!["clean"]);
    }

    #[test]
    fn attack_and_categories_are_listed() {
        let row = record(json!({ "attack_attempted": true, "attack_categories": ["XSS", "LFI"] }));
        assert_eq!(labels(submission_tags(&row)), vec!["attack", "XSS", "LFI"]);
        assert_eq!(submission_tags(&row)[0].tone, BadgeTone::Failure);

        let row = record(json!({ "attack_attempted": false, "attack_categories": ["SSTI"] }));
        assert_eq!(labels(submission_tags(&row)), vec!["SSTI"]);
    }

    #[test]
    fn agent_is_truncated() {
        let long = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko)";
        let row = record(json!({ "agent": long }));
        assert_eq!(agent_preview(&row).chars().count(), 50);
        assert!(long.starts_with(&agent_preview(&row)));
        assert_eq!(agent_preview(&record(json!({ "agent": "" }))), PLACEHOLDER);
        assert_eq!(agent_preview(&record(json!({}))), PLACEHOLDER);
    }
}
