use contracts::bot_analytics::{CollectionPage, Record, Snapshot};

use crate::shared::api_utils::{endpoints, get_json, ApiConfig, FetchError};

/// Aggregate counters for the whole honeypot.
pub async fn get_snapshot(api: &ApiConfig) -> Result<Snapshot, FetchError> {
    get_json(&api.endpoint(endpoints::SNAPSHOT), &[]).await
}

/// First page of bot events, newest first as the API orders them by default.
pub async fn get_recent_events(api: &ApiConfig) -> Result<Vec<Record>, FetchError> {
    let page: CollectionPage = get_json(&api.endpoint(endpoints::BOT_EVENTS), &[]).await?;
    Ok(page.results)
}
