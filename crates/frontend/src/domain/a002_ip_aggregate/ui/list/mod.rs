use contracts::bot_analytics::Record;
use leptos::prelude::*;
use serde_json::Value;

use crate::shared::api_utils::{endpoints, use_api_config};
use crate::shared::list_results::{options, CellContent, ColumnDescriptor, ListConfig, ListResults};

/// Link into the bot event list filtered to one address.
fn ip_link(row: &Record) -> CellContent {
    match row.text("ip_address") {
        Some(ip) if !ip.is_empty() => CellContent::Link {
            text: ip.to_string(),
            href: format!("/bot-event-list?ip_address={}", urlencoding::encode(ip)),
        },
        _ => CellContent::Placeholder,
    }
}

/// Aggregated rows carry every email seen from the address as an array.
fn joined_emails(row: &Record) -> Value {
    match row.value("email") {
        Some(Value::Array(_)) => Value::String(row.string_list("email").join(", ")),
        Some(other) => other.clone(),
        None => Value::Null,
    }
}

fn ip_list_config(base_url: String) -> ListConfig {
    ListConfig::new(base_url)
        .columns(vec![
            ColumnDescriptor::new("ip_address", "IP Address").render(ip_link),
            ColumnDescriptor::new("geo_location", "Location"),
            ColumnDescriptor::new("language", "Language"),
            ColumnDescriptor::new("referer", "Referer").cell_class("table__cell--truncate"),
            ColumnDescriptor::new("email", "Email")
                .accessor(joined_emails)
                .cell_class("table__cell--truncate"),
            ColumnDescriptor::new("traffic_count", "Traffic Count"),
            ColumnDescriptor::new("scan_count", "Scan Count"),
            ColumnDescriptor::new("spam_count", "Spam Count"),
            ColumnDescriptor::new("attack_count", "Attack Count"),
        ])
        .ordering_options(options(&[
            ("-traffic_count", "Total Hits"),
            ("-attack_count", "Attack Count"),
            ("-spam_count", "Spam Count"),
            ("-scan_count", "Scan Count"),
            ("-created_at", "Newest First"),
            ("created_at", "Oldest First"),
        ]))
        .default_ordering("-traffic_count")
        .use_detail_view(false)
        .title("IP Addresses")
        .description("Browse all IP addresses with pagination")
        .search_placeholder("Search by IP, email, location...")
        .empty_message("No IP addresses found.")
        .loading_message("Loading IP list...")
}

#[component]
pub fn IpList() -> impl IntoView {
    let api = use_api_config();
    let config = ip_list_config(api.endpoint(endpoints::AGGREGATE_IPS));

    view! {
        <div class="page">
            <ListResults config=config />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_results::render::render_cell;
    use crate::shared::list_results::RowClickAction;
    use crate::shared::list_results::controller::resolve_row_click;
    use serde_json::json;
    use std::collections::HashMap;

    fn record(value: Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn ip_cell_links_to_filtered_events() {
        let row = record(json!({ "id": 4, "ip_address": "2001:db8::1" }));
        assert_eq!(
            ip_link(&row),
            CellContent::Link {
                text: "2001:db8::1".into(),
                href: "/bot-event-list?ip_address=2001%3Adb8%3A%3A1".into(),
            }
        );
    }

    #[test]
    fn email_column_joins_arrays() {
        let config = ip_list_config("http://api.test/api/aggregate-ips/".into());
        let email = config.columns.iter().find(|c| c.key == "email").unwrap();
        let none = HashMap::new();

        let row = record(json!({ "email": ["a@x.test", "b@x.test"] }));
        assert_eq!(render_cell(&row, email, &none), CellContent::Text("a@x.test, b@x.test".into()));

        let row = record(json!({ "email": [] }));
        assert_eq!(render_cell(&row, email, &none), CellContent::Placeholder);

        let row = record(json!({ "ip_address": "10.0.0.1" }));
        assert_eq!(render_cell(&row, email, &none), CellContent::Placeholder);
    }

    #[test]
    fn rows_do_not_open_details() {
        let config = ip_list_config("http://api.test/api/aggregate-ips/".into());
        let row = record(json!({ "id": 1, "ip_address": "10.0.0.1" }));
        assert!(matches!(resolve_row_click(&config, &row), RowClickAction::DetailDisabled));
    }
}
