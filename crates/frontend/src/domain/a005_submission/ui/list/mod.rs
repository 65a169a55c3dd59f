use base64::{engine::general_purpose, Engine as _};
use contracts::bot_analytics::{CollectionPage, Record};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;
use thaw::{Flex, FlexGap, Spinner};

use super::details::SubmissionModal;
use super::table::SubmissionTable;
use crate::shared::api_utils::{endpoints, get_json, get_text, use_api_config, ApiConfig, FetchError};
use crate::shared::components::ui::{Badge, BadgeTone, Button, ButtonVariant, Input};
use crate::shared::components::PageHeader;
use crate::shared::export::download_csv;
use crate::shared::icons::icon;

pub const UNAUTHORIZED_MESSAGE: &str = "Authentication required or insufficient permissions.";
const MISSING_CREDENTIALS: &str = "Provide username and password.";
const EXPORT_FILENAME: &str = "bot-submissions.csv";

/// Text filters of the submissions endpoint. Empty ones are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubmissionFilters {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ip: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tag: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterField {
    Email,
    Ip,
    Tag,
}

impl SubmissionFilters {
    fn field(&self, field: FilterField) -> &str {
        match field {
            FilterField::Email => &self.email,
            FilterField::Ip => &self.ip,
            FilterField::Tag => &self.tag,
        }
    }

    fn set_field(&mut self, field: FilterField, value: String) {
        match field {
            FilterField::Email => self.email = value,
            FilterField::Ip => self.ip = value,
            FilterField::Tag => self.tag = value,
        }
    }

    fn query(&self) -> String {
        serde_qs::to_string(self).unwrap_or_else(|err| {
            log::warn!("cannot encode submission filters: {}", err);
            String::new()
        })
    }
}

/// `Authorization` header value for the admin credentials.
pub fn basic_authorization(username: &str, password: &str) -> Result<String, &'static str> {
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    let token = general_purpose::STANDARD.encode(format!("{}:{}", username, password));
    Ok(format!("Basic {}", token))
}

/// Submissions page URL; `page` is always present.
pub fn submissions_url(api: &ApiConfig, filters: &SubmissionFilters, page: u32) -> String {
    let query = filters.query();
    let base = api.endpoint(endpoints::SUBMISSIONS);
    if query.is_empty() {
        format!("{}?page={}", base, page)
    } else {
        format!("{}?{}&page={}", base, query, page)
    }
}

pub fn export_url(api: &ApiConfig, filters: &SubmissionFilters) -> String {
    let query = filters.query();
    let base = api.endpoint(endpoints::SUBMISSIONS_EXPORT);
    if query.is_empty() {
        base
    } else {
        format!("{}?{}", base, query)
    }
}

pub fn submission_detail_url(api: &ApiConfig, id: &str) -> String {
    format!("{}{}/", api.endpoint(endpoints::SUBMISSIONS), id)
}

/// User-facing message for a failed admin request.
fn admin_error_message(err: &FetchError) -> String {
    if err.is_unauthorized() {
        UNAUTHORIZED_MESSAGE.to_string()
    } else {
        err.to_string()
    }
}

/// Stamps submission detail requests so only the latest one for an open
/// modal is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct DetailRequests {
    latest: u64,
}

impl DetailRequests {
    fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Invalidates whatever is in flight, e.g. when the modal closes.
    fn cancel(&mut self) {
        self.latest += 1;
    }

    fn accepts(&self, stamp: u64) -> bool {
        stamp == self.latest
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct PageState {
    count: u64,
    page: u32,
    next: Option<String>,
    previous: Option<String>,
}

#[component]
pub fn AdminSubmissions() -> impl IntoView {
    let api = StoredValue::new(use_api_config());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let authorization = RwSignal::new(None::<String>);

    let draft_filters = RwSignal::new(SubmissionFilters::default());
    let applied_filters = RwSignal::new(SubmissionFilters::default());

    let submissions = RwSignal::new(Vec::<Record>::new());
    let page_state = RwSignal::new(PageState::default());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let selected_summary = RwSignal::new(None::<Record>);
    let selected_detail = RwSignal::new(None::<Record>);
    let detail_requests = RwSignal::new(DetailRequests::default());

    let auth_headers = move || -> Vec<(&'static str, String)> {
        authorization
            .get_untracked()
            .map(|value| vec![("Authorization", value)])
            .unwrap_or_default()
    };

    let fetch_submissions = move |page: u32| {
        if authorization.get_untracked().is_none() {
            return;
        }
        let url = api.with_value(|api| submissions_url(api, &applied_filters.get_untracked(), page));
        let headers = auth_headers();
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let result = get_json::<CollectionPage>(&url, &headers).await;
            match result {
                Ok(data) => {
                    page_state.set(PageState {
                        count: data.count,
                        page,
                        next: data.next,
                        previous: data.previous,
                    });
                    submissions.set(data.results);
                }
                Err(err) => {
                    log::error!("Error fetching submissions: {}", err);
                    if err.is_unauthorized() {
                        submissions.set(Vec::new());
                    }
                    error.set(Some(admin_error_message(&err)));
                }
            }
            loading.set(false);
        });
    };

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        match basic_authorization(&username.get_untracked(), &password.get_untracked()) {
            Ok(value) => {
                authorization.set(Some(value));
                fetch_submissions(1);
            }
            Err(message) => error.set(Some(message.to_string())),
        }
    };

    let on_filter = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        applied_filters.set(draft_filters.get_untracked());
        fetch_submissions(1);
    };

    let on_clear = move |_: leptos::ev::MouseEvent| {
        draft_filters.set(SubmissionFilters::default());
        applied_filters.set(SubmissionFilters::default());
        fetch_submissions(1);
    };

    let on_select = Callback::new(move |row: Record| {
        let Some(id) = row.id() else {
            return;
        };
        let Some(stamp) = detail_requests.try_update(DetailRequests::begin) else {
            return;
        };
        selected_summary.set(Some(row));
        selected_detail.set(None);
        let url = api.with_value(|api| submission_detail_url(api, &id));
        let headers = auth_headers();
        spawn_local(async move {
            let result = get_json::<Record>(&url, &headers).await;
            if !detail_requests.with_untracked(|r| r.accepts(stamp)) {
                log::debug!("dropping stale detail for submission {}", id);
                return;
            }
            match result {
                Ok(record) => selected_detail.set(Some(record)),
                Err(err) => {
                    log::error!("Error fetching submission {}: {}", id, err);
                    error.set(Some(admin_error_message(&err)));
                }
            }
        });
    });

    let on_export = move |_: leptos::ev::MouseEvent| {
        if authorization.get_untracked().is_none() {
            return;
        }
        let url = api.with_value(|api| export_url(api, &applied_filters.get_untracked()));
        let headers = auth_headers();
        spawn_local(async move {
            let result = get_text(&url, &headers)
                .await
                .map_err(|err| admin_error_message(&err))
                .and_then(|csv| download_csv(&csv, EXPORT_FILENAME));
            if let Err(message) = result {
                log::error!("Export failed: {}", message);
                error.set(Some(message));
            }
        });
    };

    let close_modal = Callback::new(move |_: ()| {
        detail_requests.update(DetailRequests::cancel);
        selected_detail.set(None);
        selected_summary.set(None);
    });

    let active_submission = move || selected_detail.get().or_else(|| selected_summary.get());

    let filter_input = move |label: &'static str, placeholder: &'static str, field: FilterField| {
        view! {
            <Input
                label=label
                placeholder=placeholder
                value=Signal::derive(move || draft_filters.with(|f| f.field(field).to_string()))
                on_input=Callback::new(move |value: String| draft_filters.update(|f| f.set_field(field, value)))
            />
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Full submission telemetry" subtitle="Admin Dashboard" />

            <Show when=move || authorization.with(Option::is_none)>
                <div class="card">
                    <form class="form" on:submit=on_login>
                        <Input
                            id="username"
                            name="username"
                            label="Admin Username"
                            placeholder="admin"
                            value=username
                            on_input=Callback::new(move |v| username.set(v))
                            required=true
                        />
                        <Input
                            id="password"
                            name="password"
                            label="Password"
                            placeholder="••••••••"
                            input_type="password"
                            value=password
                            on_input=Callback::new(move |v| password.set(v))
                            required=true
                        />
                        <Button button_type="submit">"Connect"</Button>
                    </form>
                </div>
            </Show>

            <Show when=move || authorization.with(Option::is_some)>
                <div class="card">
                    <form class="form form--grid" on:submit=on_filter>
                        {filter_input("Email contains", "bot@", FilterField::Email)}
                        {filter_input("IP contains", "203.0.113.", FilterField::Ip)}
                        {filter_input("Tag", "honeypot-hit", FilterField::Tag)}
                        <div class="form__actions">
                            <Button variant=ButtonVariant::Secondary button_type="submit">"Filter"</Button>
                            <Button variant=ButtonVariant::Ghost on_click=Callback::new(on_clear)>"Clear"</Button>
                        </div>
                    </form>
                </div>

                <div class="list-results__toolbar">
                    <Badge tone=BadgeTone::Accent>
                        {move || format!("Total: {}", page_state.with(|p| p.count))}
                    </Badge>
                    <div class="list-results__actions">
                        <Button
                            variant=ButtonVariant::Secondary
                            disabled=Signal::derive(move || page_state.with(|p| p.previous.is_none()))
                            on_click=Callback::new(move |_: leptos::ev::MouseEvent| {
                                let page = page_state.with_untracked(|p| p.page);
                                fetch_submissions(page.saturating_sub(1).max(1));
                            })
                        >
                            "Previous"
                        </Button>
                        <Button
                            variant=ButtonVariant::Secondary
                            disabled=Signal::derive(move || page_state.with(|p| p.next.is_none()))
                            on_click=Callback::new(move |_: leptos::ev::MouseEvent| {
                                let page = page_state.with_untracked(|p| p.page);
                                fetch_submissions(page + 1);
                            })
                        >
                            "Next"
                        </Button>
                        <Button variant=ButtonVariant::Ghost on_click=Callback::new(on_export)>
                            {icon("download")}
                            "Export CSV"
                        </Button>
                    </div>
                </div>

                {move || if loading.get() {
                    view! {
                        <Flex gap=FlexGap::Small class="list-results__loading">
                            <Spinner />
                            <span>"Loading submissions..."</span>
                        </Flex>
                    }.into_any()
                } else {
                    view! { <SubmissionTable submissions=submissions on_select=on_select /> }.into_any()
                }}
            </Show>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            {move || active_submission().map(|submission| view! {
                <SubmissionModal submission=submission on_close=close_modal />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> ApiConfig {
        ApiConfig::new("http://api.test/api")
    }

    #[test]
    fn credentials_are_required() {
        assert_eq!(basic_authorization("", "secret"), Err(MISSING_CREDENTIALS));
        assert_eq!(basic_authorization("admin", ""), Err(MISSING_CREDENTIALS));
        assert_eq!(
            basic_authorization("admin", "secret").as_deref(),
            Ok("Basic YWRtaW46c2VjcmV0")
        );
    }

    #[test]
    fn page_is_always_sent() {
        assert_eq!(
            submissions_url(&api(), &SubmissionFilters::default(), 1),
            "http://api.test/api/submissions/?page=1"
        );
        let filters = SubmissionFilters {
            ip: "203.0.113.".into(),
            tag: "honeypot-hit".into(),
            ..SubmissionFilters::default()
        };
        assert_eq!(
            submissions_url(&api(), &filters, 3),
            "http://api.test/api/submissions/?ip=203.0.113.&tag=honeypot-hit&page=3"
        );
    }

    #[test]
    fn export_carries_filters_only() {
        assert_eq!(
            export_url(&api(), &SubmissionFilters::default()),
            "http://api.test/api/submissions/export/"
        );
        let filters = SubmissionFilters {
            tag: "clean".into(),
            ..SubmissionFilters::default()
        };
        assert_eq!(
            export_url(&api(), &filters),
            "http://api.test/api/submissions/export/?tag=clean"
        );
    }

    #[test]
    fn detail_url_appends_id() {
        assert_eq!(submission_detail_url(&api(), "42"), "http://api.test/api/submissions/42/");
    }

    #[test]
    fn only_latest_open_detail_is_applied() {
        let mut requests = DetailRequests::default();
        let first = requests.begin();
        let second = requests.begin();
        assert!(!requests.accepts(first), "older row click is superseded");
        assert!(requests.accepts(second));

        requests.cancel();
        assert!(!requests.accepts(second), "closing the modal drops the pending detail");

        let reopened = requests.begin();
        assert!(requests.accepts(reopened));
    }

    #[test]
    fn forbidden_maps_to_auth_message() {
        let err = FetchError::Http {
            url: "http://api.test/api/submissions/?page=1".into(),
            status: 403,
            status_text: "Forbidden".into(),
            body: String::new(),
        };
        assert_eq!(admin_error_message(&err), UNAUTHORIZED_MESSAGE);
        assert_eq!(
            admin_error_message(&FetchError::Network("offline".into())),
            "Network error: offline"
        );
    }
}
