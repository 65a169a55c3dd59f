use leptos::prelude::*;

use crate::domain::filters::{attack_category_filter, OTHER_ATTACK_CATEGORY};
use crate::shared::api_utils::{endpoints, use_api_config};
use crate::shared::list_results::{options, ColumnDescriptor, ListConfig, ListResults};

fn attack_list_config(base_url: String) -> ListConfig {
    ListConfig::new(base_url)
        .columns(vec![
            ColumnDescriptor::date("created_at", "Timestamp"),
            ColumnDescriptor::new("category", "Category"),
            ColumnDescriptor::new("pattern", "Pattern"),
            ColumnDescriptor::new("request_path", "Request Path"),
            ColumnDescriptor::new("target_field", "Target Field"),
        ])
        .ordering_options(options(&[
            ("-created_at", "Newest First"),
            ("created_at", "Oldest First"),
        ]))
        .filters(vec![attack_category_filter("category", OTHER_ATTACK_CATEGORY)])
        .default_ordering("-created_at")
        .title("All Attacks")
        .description("Browse all attacks with pagination")
        .search_placeholder("Search by pattern, target field...")
        .empty_message("No attacks found.")
        .loading_message("Loading attacks...")
}

#[component]
pub fn AttackList() -> impl IntoView {
    let api = use_api_config();
    let config = attack_list_config(api.endpoint(endpoints::ATTACKS));

    view! {
        <div class="page">
            <ListResults config=config />
        </div>
    }
}
