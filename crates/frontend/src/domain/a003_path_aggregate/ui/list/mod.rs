use contracts::bot_analytics::Record;
use leptos::prelude::*;

use crate::shared::api_utils::{endpoints, use_api_config};
use crate::shared::browser;
use crate::shared::list_results::{options, ColumnDescriptor, ListConfig, ListResults};

fn events_for_path_href(row: &Record) -> Option<String> {
    let path = row.text("request_path")?;
    Some(format!(
        "/bot-event-list?exact_request_path={}",
        urlencoding::encode(path)
    ))
}

fn path_list_config(base_url: String) -> ListConfig {
    ListConfig::new(base_url)
        .columns(vec![
            ColumnDescriptor::new("request_path", "Path"),
            ColumnDescriptor::new("traffic_count", "Traffic Count"),
            ColumnDescriptor::new("attack_count", "Attack Count"),
            ColumnDescriptor::new("spam_count", "Spam Count"),
            ColumnDescriptor::new("scan_count", "Scan Count"),
            ColumnDescriptor::new("most_popular_attack", "Most Popular Attack"),
            ColumnDescriptor::new("attacks_used", "Attacks Found"),
        ])
        .ordering_options(options(&[
            ("-traffic_count", "Total Hits"),
            ("-scan_count", "Scan Count"),
            ("-spam_count", "Spam Count"),
            ("-attack_count", "Attack Count"),
            ("request_path", "Path (A-Z)"),
        ]))
        .default_ordering("-traffic_count")
        .on_row_click(|row| match events_for_path_href(row) {
            Some(href) => browser::navigate_to(&href),
            None => log::warn!("path row without request_path"),
        })
        .title("Path List")
        .description("Browse all paths with pagination")
}

#[component]
pub fn PathList() -> impl IntoView {
    let api = use_api_config();
    let config = path_list_config(api.endpoint(endpoints::AGGREGATE_PATHS));

    view! {
        <div class="page">
            <ListResults config=config />
        </div>
    }
}
