//! State machine behind a list view.
//!
//! Every user action mutates the state and hands back a [`FetchTicket`]; the
//! view performs the request and feeds the result back through
//! `complete_*`. Tickets carry a sequence number so a response that arrives
//! after a newer request was issued is dropped instead of overwriting it.

use contracts::bot_analytics::{CollectionPage, Record, DEFAULT_PAGE_SIZE};
use std::fmt;

use super::descriptors::{ListConfig, RowClickHandler};
use super::query::{
    build_url, detail_url, resolve_current_page, total_pages, QueryParams, URL_DERIVED_PARAMS,
};
use crate::shared::api_utils::FetchError;

/// One request the view has to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub url: String,
    pub seq: u64,
}

/// Outcome of clicking a row, highest priority first.
#[derive(Clone)]
pub enum RowClickAction {
    /// Page-supplied handler; default behavior is skipped.
    Custom(RowClickHandler),
    /// `use_detail_view` was switched off.
    DetailDisabled,
    OpenDetail { url: String },
    /// No detail fields configured, or the row has no id.
    NoDetail,
}

impl fmt::Debug for RowClickAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowClickAction::Custom(_) => f.write_str("Custom(..)"),
            RowClickAction::DetailDisabled => f.write_str("DetailDisabled"),
            RowClickAction::OpenDetail { url } => f.debug_struct("OpenDetail").field("url", url).finish(),
            RowClickAction::NoDetail => f.write_str("NoDetail"),
        }
    }
}

pub fn resolve_row_click(config: &ListConfig, row: &Record) -> RowClickAction {
    if let Some(handler) = &config.custom_row_click {
        return RowClickAction::Custom(handler.clone());
    }
    if !config.use_detail_view {
        return RowClickAction::DetailDisabled;
    }
    if config.detail_fields.is_some() {
        match row.id() {
            Some(id) => {
                return RowClickAction::OpenDetail {
                    url: detail_url(&config.base_url, &id),
                }
            }
            None => log::warn!("row without id, detail view skipped"),
        }
    }
    RowClickAction::NoDetail
}

/// Whether rows should be styled as clickable.
pub fn rows_clickable(config: &ListConfig) -> bool {
    config.custom_row_click.is_some() || (config.use_detail_view && config.detail_fields.is_some())
}

/// Detail drawer state, independent of the list's loading/error state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailState {
    pub open: bool,
    pub selected: Option<Record>,
    pub record: Option<Record>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct ListController {
    config: ListConfig,
    filter_values: Vec<(String, String)>,
    ordering: String,
    search_query: String,
    additional_params: Vec<(String, String)>,

    items: Vec<Record>,
    total_count: u64,
    page_size: u64,
    next: Option<String>,
    previous: Option<String>,
    current_page: u32,
    loading: bool,
    error: Option<String>,
    list_seq: u64,

    detail: DetailState,
    detail_seq: u64,
}

impl ListController {
    pub fn new(config: ListConfig) -> Self {
        Self {
            filter_values: config.default_filter_values(),
            ordering: config.default_ordering.clone(),
            search_query: String::new(),
            additional_params: config.additional_params.clone(),
            items: Vec::new(),
            total_count: 0,
            page_size: DEFAULT_PAGE_SIZE,
            next: None,
            previous: None,
            current_page: 1,
            loading: true,
            error: None,
            list_seq: 0,
            detail: DetailState::default(),
            detail_seq: 0,
            config,
        }
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn items(&self) -> &[Record] {
        &self.items
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_count, self.page_size)
    }

    pub fn cursors(&self) -> (Option<&str>, Option<&str>) {
        (self.previous.as_deref(), self.next.as_deref())
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn ordering(&self) -> &str {
        &self.ordering
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn filter_value(&self, key: &str) -> &str {
        self.filter_values
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    fn query_url(&self, page: Option<u32>) -> String {
        build_url(
            &self.config.base_url,
            &QueryParams {
                page,
                search: &self.search_query,
                ordering: &self.ordering,
                filters: &self.filter_values,
                additional: &self.additional_params,
            },
        )
    }

    fn begin_list_fetch(&mut self, url: String) -> FetchTicket {
        self.list_seq += 1;
        self.loading = true;
        self.error = None;
        FetchTicket {
            url,
            seq: self.list_seq,
        }
    }

    /// First load: page 1 with defaults and every additional param.
    pub fn mount(&mut self) -> FetchTicket {
        let url = self.query_url(Some(1));
        self.begin_list_fetch(url)
    }

    pub fn change_page(&mut self, page: u32) -> FetchTicket {
        let url = self.query_url(Some(page.max(1)));
        self.begin_list_fetch(url)
    }

    pub fn change_ordering(&mut self, ordering: impl Into<String>) -> FetchTicket {
        self.ordering = ordering.into();
        let url = self.query_url(Some(1));
        self.begin_list_fetch(url)
    }

    pub fn submit_search(&mut self, query: impl Into<String>) -> FetchTicket {
        self.search_query = query.into();
        let url = self.query_url(Some(1));
        self.begin_list_fetch(url)
    }

    pub fn change_filter(&mut self, key: &str, value: impl Into<String>) -> FetchTicket {
        let value = value.into();
        match self.filter_values.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.filter_values.push((key.to_string(), value)),
        }
        let url = self.query_url(Some(1));
        self.begin_list_fetch(url)
    }

    /// Back to the declared defaults. Deep-link params are dropped for the
    /// rest of this view's lifetime; the caller clears the address bar.
    pub fn refresh(&mut self) -> FetchTicket {
        self.filter_values = self.config.default_filter_values();
        self.search_query.clear();
        self.ordering = self.config.default_ordering.clone();
        self.additional_params
            .retain(|(key, _)| !URL_DERIVED_PARAMS.contains(&key.as_str()));
        let url = self.query_url(None);
        self.begin_list_fetch(url)
    }

    /// Applies a list response. Returns `false` when the ticket was superseded.
    pub fn complete_list_fetch(
        &mut self,
        ticket: &FetchTicket,
        result: Result<CollectionPage, FetchError>,
    ) -> bool {
        if ticket.seq != self.list_seq {
            log::debug!("dropping stale response for {}", ticket.url);
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.current_page = resolve_current_page(
                    &ticket.url,
                    page.next.as_deref(),
                    page.previous.as_deref(),
                );
                self.page_size = page.effective_page_size();
                self.total_count = page.count;
                self.next = page.next;
                self.previous = page.previous;
                self.items = page.results;
            }
            Err(err) => {
                log::error!("Error fetching data: {}", err);
                self.error = Some(err.to_string());
            }
        }
        true
    }

    /// Opens the drawer for `row` and returns the detail request.
    pub fn open_detail(&mut self, row: Record, url: String) -> FetchTicket {
        self.detail_seq += 1;
        self.detail = DetailState {
            open: true,
            selected: Some(row),
            record: None,
            loading: true,
            error: None,
        };
        FetchTicket {
            url,
            seq: self.detail_seq,
        }
    }

    pub fn complete_detail_fetch(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Record, FetchError>,
    ) -> bool {
        if ticket.seq != self.detail_seq || !self.detail.open {
            log::debug!("dropping stale detail response for {}", ticket.url);
            return false;
        }
        self.detail.loading = false;
        match result {
            Ok(record) => self.detail.record = Some(record),
            Err(err) => {
                log::error!("Error fetching detail data: {}", err);
                self.detail.error = Some(err.to_string());
            }
        }
        true
    }

    pub fn close_detail(&mut self) {
        self.detail_seq += 1;
        self.detail = DetailState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_results::descriptors::{
        options, ColumnDescriptor, DetailField, FilterDescriptor,
    };
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const BASE: &str = "http://api.test/api/attacks/";

    fn record(value: Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    fn page(value: Value) -> CollectionPage {
        serde_json::from_value(value).unwrap()
    }

    fn config() -> ListConfig {
        ListConfig::new(BASE)
            .columns(vec![ColumnDescriptor::new("category", "Category")])
            .filters(vec![FilterDescriptor::new(
                "category",
                "Category",
                options(&[("", "All"), ("XSS", "XSS"), ("SQLI", "SQL Injection")]),
            )])
            .default_ordering("-created_at")
    }

    fn server_error() -> FetchError {
        FetchError::Http {
            url: BASE.into(),
            status: 500,
            status_text: "Internal Server Error".into(),
            body: String::new(),
        }
    }

    #[test]
    fn mount_requests_first_page_with_defaults() {
        let mut c = ListController::new(config().additional_param("page_size", "50"));
        assert!(c.is_loading());
        let ticket = c.mount();
        assert_eq!(ticket.url, format!("{BASE}?page=1&ordering=-created_at&page_size=50"));
    }

    #[test]
    fn initial_load_resolves_page_and_totals() {
        let mut c = ListController::new(config());
        let ticket = c.mount();
        let applied = c.complete_list_fetch(
            &ticket,
            Ok(page(json!({
                "count": 53,
                "page_size": 25,
                "next": format!("{BASE}?page=2"),
                "previous": null,
                "results": [{ "id": 1 }, { "id": 2 }]
            }))),
        );
        assert!(applied);
        assert!(!c.is_loading());
        assert_eq!(c.current_page(), 1);
        assert_eq!(c.total_pages(), 3);
        assert_eq!(c.items().len(), 2);
        assert_eq!(c.cursors(), (None, Some("http://api.test/api/attacks/?page=2")));
    }

    #[test]
    fn filter_then_search_always_restarts_at_page_one() {
        let mut c = ListController::new(config());
        let t = c.mount();
        c.complete_list_fetch(&t, Ok(page(json!({ "count": 100, "results": [] }))));
        let t = c.change_page(3);
        assert!(t.url.contains("page=3"));
        c.complete_list_fetch(&t, Ok(page(json!({ "count": 100, "results": [] }))));
        assert_eq!(c.current_page(), 3);

        let t = c.change_filter("category", "XSS");
        assert!(t.url.contains("page=1"));
        let t = c.submit_search("union select");
        assert!(t.url.contains("category=XSS"));
        assert!(t.url.contains("search=union+select"));
        assert!(t.url.contains("page=1"));
        assert!(!t.url.contains("page=3"));
    }

    #[test]
    fn page_change_keeps_current_state() {
        let mut c = ListController::new(config());
        c.change_ordering("created_at");
        c.change_filter("category", "SQLI");
        c.submit_search("admin");
        let t = c.change_page(2);
        assert_eq!(
            t.url,
            format!("{BASE}?page=2&search=admin&ordering=created_at&category=SQLI")
        );
    }

    #[test]
    fn refresh_restores_defaults_and_drops_deep_link_params() {
        let mut c = ListController::new(
            config()
                .additional_param("page_size", "10")
                .additional_param("ip_address", "203.0.113.9")
                .additional_param("request_path", "/contact/"),
        );
        c.change_ordering("created_at");
        c.change_filter("category", "XSS");
        c.submit_search("select");

        let t = c.refresh();
        assert_eq!(c.ordering(), "-created_at");
        assert_eq!(c.search_query(), "");
        assert_eq!(c.filter_value("category"), "");
        assert_eq!(t.url, format!("{BASE}?ordering=-created_at&page_size=10"));

        // Later actions keep the deep-link params out as well.
        let t = c.change_page(2);
        assert!(!t.url.contains("ip_address"));
    }

    #[test]
    fn refresh_resets_filters_to_declared_defaults() {
        let cfg = ListConfig::new(BASE).filters(vec![FilterDescriptor::new(
            "attack_attempted",
            "Attack Attempted",
            options(&[("", "All"), ("True", "Yes"), ("False", "No")]),
        )
        .default_value("True")]);
        let mut c = ListController::new(cfg);
        c.change_filter("attack_attempted", "False");
        let t = c.refresh();
        assert!(t.url.contains("attack_attempted=True"));
    }

    #[test]
    fn list_failure_keeps_previous_items() {
        let mut c = ListController::new(config());
        let t = c.mount();
        c.complete_list_fetch(&t, Ok(page(json!({ "count": 1, "results": [{ "id": 9 }] }))));

        let t = c.change_page(2);
        assert!(c.error().is_none());
        c.complete_list_fetch(&t, Err(server_error()));
        assert!(!c.is_loading());
        assert_eq!(c.items().len(), 1);
        assert!(c.error().unwrap().contains("Internal Server Error"));

        c.change_page(2);
        assert!(c.error().is_none(), "next action clears the error");
    }

    #[test]
    fn stale_list_response_is_discarded() {
        let mut c = ListController::new(config());
        let slow = c.mount();
        let fast = c.change_filter("category", "XSS");

        assert!(c.complete_list_fetch(&fast, Ok(page(json!({ "count": 1, "results": [{ "id": "new" }] })))));
        assert!(!c.complete_list_fetch(&slow, Ok(page(json!({ "count": 7, "results": [{ "id": "old" }] })))));
        assert_eq!(c.total_count(), 1);
        assert_eq!(c.items()[0].id().as_deref(), Some("new"));
    }

    #[test]
    fn custom_row_click_wins_over_detail_fields() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let cfg = config()
            .detail_fields(vec![DetailField::new("category", "Category")])
            .on_row_click(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            });
        let row = record(json!({ "id": 5 }));
        match resolve_row_click(&cfg, &row) {
            RowClickAction::Custom(handler) => handler(&row),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(rows_clickable(&cfg));
    }

    #[test]
    fn row_click_priority_order() {
        let row = record(json!({ "id": 5 }));

        let disabled = config()
            .detail_fields(vec![DetailField::new("category", "Category")])
            .use_detail_view(false);
        assert!(matches!(resolve_row_click(&disabled, &row), RowClickAction::DetailDisabled));
        assert!(!rows_clickable(&disabled));

        let detail = config().detail_fields(vec![DetailField::new("category", "Category")]);
        match resolve_row_click(&detail, &row) {
            RowClickAction::OpenDetail { url } => assert_eq!(url, format!("{BASE}5/")),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            resolve_row_click(&detail, &record(json!({ "category": "XSS" }))),
            RowClickAction::NoDetail
        ));

        assert!(matches!(resolve_row_click(&config(), &row), RowClickAction::NoDetail));
        assert!(!rows_clickable(&config()));
    }

    #[test]
    fn detail_failure_leaves_list_untouched() {
        let mut c = ListController::new(config().detail_fields(vec![DetailField::new("category", "Category")]));
        let t = c.mount();
        c.complete_list_fetch(&t, Ok(page(json!({ "count": 2, "results": [{ "id": 1 }, { "id": 2 }] }))));

        let row = c.items()[0].clone();
        let detail = c.open_detail(row.clone(), format!("{BASE}1/"));
        assert!(c.detail().open && c.detail().loading);
        assert_eq!(c.detail().selected.as_ref(), Some(&row));

        assert!(c.complete_detail_fetch(&detail, Err(FetchError::Network("offline".into()))));
        assert_eq!(c.detail().error.as_deref(), Some("Network error: offline"));
        assert!(!c.detail().loading);
        assert_eq!(c.items().len(), 2);
        assert!(!c.is_loading());
        assert!(c.error().is_none());
    }

    #[test]
    fn closing_drawer_discards_late_detail() {
        let mut c = ListController::new(config());
        let row = record(json!({ "id": 3 }));
        let t = c.open_detail(row.clone(), format!("{BASE}3/"));
        c.close_detail();
        assert!(!c.complete_detail_fetch(&t, Ok(row.clone())));
        assert_eq!(c.detail(), &DetailState::default());

        let first = c.open_detail(row.clone(), format!("{BASE}3/"));
        let second = c.open_detail(record(json!({ "id": 4 })), format!("{BASE}4/"));
        assert!(!c.complete_detail_fetch(&first, Ok(row)));
        assert!(c.complete_detail_fetch(&second, Ok(record(json!({ "id": 4, "category": "SSTI" })))));
        assert_eq!(c.detail().record.as_ref().and_then(|r| r.text("category")), Some("SSTI"));
    }
}
