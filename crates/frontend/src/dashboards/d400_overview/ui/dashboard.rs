use crate::dashboards::d400_overview::api;
use crate::domain::a005_submission::ui::details::SubmissionModal;
use crate::domain::a005_submission::ui::table::SubmissionTable;
use crate::shared::api_utils::use_api_config;
use crate::shared::components::ui::{Badge, BadgeTone, Button, ButtonVariant};
use crate::shared::components::{PageHeader, StatCard};
use crate::shared::icons::icon;
use contracts::bot_analytics::{AttackCategorySnapshot, Record, Snapshot};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Flex, FlexGap, Spinner};

/// Snapshot metrics, per-category breakdown and the latest bot events.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let api_config = StoredValue::new(use_api_config());

    let (snapshot, set_snapshot) = signal(None::<Snapshot>);
    let (recent, set_recent) = signal(Vec::<Record>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (selected, set_selected) = signal(None::<Record>);

    let fetch_summary = move || {
        set_loading.set(true);
        set_error.set(None);
        let config = api_config.get_value();
        spawn_local(async move {
            match api::get_snapshot(&config).await {
                Ok(data) => {
                    set_snapshot.set(Some(data));
                    // Recent events are best effort; the table just stays as it was.
                    match api::get_recent_events(&config).await {
                        Ok(rows) => set_recent.set(rows),
                        Err(err) => log::warn!("recent events unavailable: {}", err),
                    }
                }
                Err(err) => {
                    log::error!("Failed to load snapshot: {}", err);
                    set_error.set(Some(err.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    fetch_summary();

    let metric = move |pick: fn(&Snapshot) -> Option<u64>| {
        Signal::derive(move || snapshot.with(|s| s.as_ref().and_then(pick)))
    };

    let categories = move || {
        snapshot.with(|s| {
            s.as_ref()
                .map(|s| s.attack_category_snapshot.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Live bot submission telemetry" subtitle="Bot Analytics">
                <Button
                    variant=ButtonVariant::Secondary
                    on_click=Callback::new(move |_: leptos::ev::MouseEvent| fetch_summary())
                >
                    {icon("refresh")}
                    "Refresh"
                </Button>
            </PageHeader>
            <p class="page__lead">
                "Everything that spam bots submit to our fake contact form. No humans harmed."
            </p>

            <Show when=move || loading.get()>
                <Flex gap=FlexGap::Small class="list-results__loading">
                    <Spinner />
                    <span>"Loading submission telemetry..."</span>
                </Flex>
            </Show>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <Show when=move || !loading.get() && error.with(Option::is_none)>
                <section class="stat-grid">
                    <StatCard label="Total Events" icon_name="events" value=metric(|s| s.total_events) />
                    <StatCard
                        label="Injection Attempts"
                        icon_name="shield"
                        value=metric(|s| s.total_injection_attempts)
                        alert=true
                    />
                    <StatCard label="Unique IPs" icon_name="globe" value=metric(|s| s.total_ips) />
                </section>

                <section class="dashboard-section">
                    <h2 class="dashboard-section__title">"Attack categories"</h2>
                    <div class="category-grid">
                        {move || categories().into_iter().map(|entry| view! { <CategoryCard entry=entry /> }).collect_view()}
                    </div>
                </section>

                <section class="dashboard-section">
                    <h2 class="dashboard-section__title">"Recent submissions"</h2>
                    <p class="dashboard-section__hint">
                        {move || format!(
                            "Showing up to {} most recent events. Tags are sanitized and no raw HTML is rendered.",
                            recent.with(Vec::len)
                        )}
                    </p>
                    <SubmissionTable
                        submissions=recent
                        on_select=Callback::new(move |row: Record| set_selected.set(Some(row)))
                    />
                </section>
            </Show>

            {move || selected.get().map(|submission| view! {
                <SubmissionModal
                    submission=submission
                    on_close=Callback::new(move |_: ()| set_selected.set(None))
                />
            })}
        </div>
    }
}

#[component]
fn CategoryCard(entry: AttackCategorySnapshot) -> impl IntoView {
    let paths = entry
        .most_popular_paths
        .into_iter()
        .map(|path| view! {
            <li class="category-card__path">
                <code>{path.request_path}</code>
                <Badge tone=BadgeTone::Neutral>{path.path_count.to_string()}</Badge>
            </li>
        })
        .collect_view();

    view! {
        <div class="category-card">
            <div class="category-card__header">
                <span class="category-card__name">{entry.category}</span>
                <Badge tone=BadgeTone::Failure>{entry.total_count.to_string()}</Badge>
            </div>
            <ul class="category-card__paths">{paths}</ul>
        </div>
    }
}
