use contracts::bot_analytics::Record;
use leptos::prelude::*;
use serde::Deserialize;

use crate::domain::filters::{
    attack_attempted_filter, attack_category_filter, method_filter, OTHER_CATEGORY,
};
use crate::shared::api_utils::{endpoints, use_api_config};
use crate::shared::browser;
use crate::shared::components::ui::BadgeTone;
use crate::shared::list_results::{
    options, BadgeSpec, CellContent, ColumnDescriptor, DetailField, DetailFieldType, ListConfig,
    ListResults,
};

/// Query parameters other pages link here with.
#[derive(Debug, Default, Deserialize)]
struct DeepLink {
    ip_address: Option<String>,
    exact_request_path: Option<String>,
}

/// Additional list params seeded from the address bar. `ip_address` wins
/// when both are present.
fn deep_link_params(query: &str) -> Vec<(String, String)> {
    let link: DeepLink = match serde_qs::from_str(query) {
        Ok(link) => link,
        Err(err) => {
            log::warn!("ignoring malformed query string {:?}: {}", query, err);
            return Vec::new();
        }
    };
    if let Some(ip) = link.ip_address.filter(|ip| !ip.is_empty()) {
        return vec![("ip_address".to_string(), ip)];
    }
    if let Some(path) = link.exact_request_path.filter(|path| !path.is_empty()) {
        return vec![("request_path".to_string(), path)];
    }
    Vec::new()
}

fn attack_category_badges(row: &Record, _column: &ColumnDescriptor) -> CellContent {
    let categories = row.string_list("attack_categories");
    if categories.is_empty() {
        return CellContent::Badges(vec![BadgeSpec::new("none", BadgeTone::Neutral)]);
    }
    CellContent::Badges(
        categories
            .into_iter()
            .map(|category| BadgeSpec::new(category, BadgeTone::Info))
            .collect(),
    )
}

fn bot_event_list_config(base_url: String, additional: Vec<(String, String)>) -> ListConfig {
    ListConfig::new(base_url)
        .columns(vec![
            ColumnDescriptor::date("created_at", "Timestamp"),
            ColumnDescriptor::new("ip_address", "IP Address"),
            ColumnDescriptor::new("agent_snapshot", "Browser"),
            ColumnDescriptor::new("geo_location", "Location"),
            ColumnDescriptor::new("event_category", "Activity"),
            ColumnDescriptor::new("request_path", "Path"),
            ColumnDescriptor::new("method", "Method"),
            ColumnDescriptor::new("attack_categories", "Attack Categories"),
            ColumnDescriptor::new("attack_count", "Attack Count"),
        ])
        .ordering_options(options(&[
            ("-created_at", "Newest First"),
            ("created_at", "Oldest First"),
            ("-ip_address", "IP Address (Highest)"),
            ("ip_address", "IP Address (Lowest)"),
            ("-geo_location", "Location (A-Z)"),
            ("geo_location", "Location (Z-A)"),
            ("-attack_count", "Most Attacks"),
            ("attack_count", "Least Attacks"),
        ]))
        .filters(vec![
            attack_category_filter("attack_categories", OTHER_CATEGORY),
            method_filter(),
            attack_attempted_filter(),
        ])
        .default_ordering("-created_at")
        .additional_params(additional)
        .cell_renderer("attack_categories", attack_category_badges)
        .detail_fields(vec![
            DetailField::typed("created_at", "Timestamp", DetailFieldType::Date),
            DetailField::new("ip_address", "IP Address"),
            DetailField::new("email", "Email"),
            DetailField::new("agent", "Browser"),
            DetailField::new("geo_location", "Location"),
            DetailField::new("language", "Language"),
            DetailField::new("referer", "Referer"),
            DetailField::new("request_path", "Path"),
            DetailField::new("method", "Method"),
            DetailField::new("target_fields", "Target Fields"),
            DetailField::typed("data_details", "Data Present", DetailFieldType::Json),
        ])
        .title("All Bot Events")
        .description("Browse all bot submission events with pagination")
        .search_placeholder("Search by IP, location, path...")
        .empty_message("No bot events found.")
        .loading_message("Loading bot events...")
}

#[component]
pub fn BotEventList() -> impl IntoView {
    let api = use_api_config();
    let additional = deep_link_params(&browser::current_query());
    let config = bot_event_list_config(api.endpoint(endpoints::BOT_EVENTS), additional);

    view! {
        <div class="page">
            <ListResults config=config />
        </div>
    }
}
