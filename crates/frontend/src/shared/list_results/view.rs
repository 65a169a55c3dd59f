use contracts::bot_analytics::{CollectionPage, Record};
use leptos::prelude::*;
use thaw::{Flex, FlexGap, Spinner};
use leptos::task::spawn_local;

use super::controller::{resolve_row_click, rows_clickable, FetchTicket, ListController, RowClickAction};
use super::descriptors::{DetailField, ListConfig};
use super::render::{
    detail_extras, render_cell, render_detail_field, row_has_attack, CellContent, DetailValue,
    PLACEHOLDER,
};
use crate::shared::api_utils::get_json;
use crate::shared::browser;
use crate::shared::components::ui::{Badge, BadgeTone, Button, ButtonVariant, Input, Select};
use crate::shared::components::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;

/// Paginated, searchable, filterable table over one collection endpoint,
/// with an optional detail drawer.
#[component]
pub fn ListResults(config: ListConfig) -> impl IntoView {
    let cfg = StoredValue::new(config.clone());
    let controller = RwSignal::new(ListController::new(config));
    let search_input = RwSignal::new(String::new());

    let run_list_fetch = move |ticket: Option<FetchTicket>| {
        let Some(ticket) = ticket else {
            return;
        };
        spawn_local(async move {
            let result = get_json::<CollectionPage>(&ticket.url, &[]).await;
            controller.try_update(|c| c.complete_list_fetch(&ticket, result));
        });
    };

    let run_detail_fetch = move |ticket: Option<FetchTicket>| {
        let Some(ticket) = ticket else {
            return;
        };
        spawn_local(async move {
            let result = get_json::<Record>(&ticket.url, &[]).await;
            controller.try_update(|c| c.complete_detail_fetch(&ticket, result));
        });
    };

    run_list_fetch(controller.try_update(|c| c.mount()));

    let on_page_change = Callback::new(move |page: u32| {
        run_list_fetch(controller.try_update(|c| c.change_page(page)));
    });

    let on_ordering_change = Callback::new(move |ordering: String| {
        run_list_fetch(controller.try_update(|c| c.change_ordering(ordering)));
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let query = search_input.get_untracked().trim().to_string();
        run_list_fetch(controller.try_update(|c| c.submit_search(query)));
    };

    let on_refresh = move |_: leptos::ev::MouseEvent| {
        search_input.set(String::new());
        browser::clear_query_string();
        run_list_fetch(controller.try_update(|c| c.refresh()));
    };

    let on_row_click = move |row: Record| {
        let action = controller.with_untracked(|c| resolve_row_click(c.config(), &row));
        match action {
            RowClickAction::Custom(handler) => handler(&row),
            RowClickAction::OpenDetail { url } => {
                run_detail_fetch(controller.try_update(|c| c.open_detail(row, url)));
            }
            RowClickAction::DetailDisabled | RowClickAction::NoDetail => {}
        }
    };

    let close_detail = Callback::new(move |_: ()| controller.update(|c| c.close_detail()));

    let clickable = cfg.with_value(rows_clickable);
    let compact = cfg.with_value(|c| c.compact);

    let header = cfg.with_value(|c| {
        (!c.hide_header).then(|| {
            let title = c.title.clone();
            let description = c.description.clone();
            view! {
                <div class="list-results__header">
                    <h2 class="list-results__title">{title}</h2>
                    <p class="list-results__description">{description}</p>
                </div>
            }
        })
    });

    let search_bar = cfg.with_value(|c| {
        (!c.hide_search).then(|| {
            let placeholder = c.search_placeholder.clone();
            view! {
                <form class="list-results__search" on:submit=on_search>
                    <Input
                        value=search_input
                        on_input=Callback::new(move |v| search_input.set(v))
                        placeholder=placeholder
                        input_type="search"
                        name="search"
                    />
                    <Button button_type="submit">
                        {icon("search")}
                        "Search"
                    </Button>
                    <Button variant=ButtonVariant::Secondary on_click=Callback::new(on_refresh)>
                        {icon("refresh")}
                        "Refresh"
                    </Button>
                </form>
            }
        })
    });

    let toolbar_refresh = cfg.with_value(|c| {
        shows_toolbar_refresh(c).then(|| {
            view! {
                <Button variant=ButtonVariant::Secondary on_click=Callback::new(on_refresh)>
                    {icon("refresh")}
                    "Refresh"
                </Button>
            }
        })
    });

    let filter_controls = cfg.with_value(|c| {
        c.filters
            .iter()
            .cloned()
            .map(|filter| {
                let key = filter.key.clone();
                let value_key = filter.key.clone();
                view! {
                    <Select
                        label=format!("{}:", filter.label)
                        value=Signal::derive(move || {
                            controller.with(|c| c.filter_value(&value_key).to_string())
                        })
                        options=filter.options
                        on_change=Callback::new(move |value: String| {
                            run_list_fetch(controller.try_update(|c| c.change_filter(&key, value)));
                        })
                    />
                }
            })
            .collect_view()
    });

    let ordering_control = cfg.with_value(|c| {
        (!c.ordering_options.is_empty()).then(|| {
            let options = c.ordering_options.clone();
            view! {
                <Select
                    label="Sort by:"
                    value=Signal::derive(move || controller.with(|c| c.ordering().to_string()))
                    options=options
                    on_change=on_ordering_change
                />
            }
        })
    });

    let column_headers = move || {
        cfg.with_value(|c| {
            c.columns
                .iter()
                .map(|column| {
                    let label = column.label.clone();
                    view! { <th class="table__header-cell">{label}</th> }
                })
                .collect_view()
        })
    };

    let rows = move || {
        let items = controller.with(|c| c.items().to_vec());
        cfg.with_value(|c| {
            items
                .into_iter()
                .map(|row| {
                    let cells = c
                        .columns
                        .iter()
                        .map(|column| {
                            let class = format!(
                                "table__cell {}",
                                column.cell_class.clone().unwrap_or_default()
                            );
                            let content = render_cell(&row, column, &c.custom_cell_renderers);
                            view! { <td class=class><CellView content=content /></td> }
                        })
                        .collect_view();
                    let attack = row_has_attack(&row);
                    view! {
                        <tr
                            class="table__row"
                            class:table__row--clickable=clickable
                            class:table__row--attack=attack
                            on:click=move |_| on_row_click(row.clone())
                        >
                            {cells}
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    let body = move || {
        let (loading, has_items) = controller.with(|c| (c.is_loading(), !c.items().is_empty()));
        if loading {
            let message = cfg.with_value(|c| c.loading_message.clone());
            return view! {
                <Flex gap=FlexGap::Small class="list-results__loading">
                    <Spinner />
                    <span>{message}</span>
                </Flex>
            }
            .into_any();
        }
        if !has_items {
            let message = cfg.with_value(|c| c.empty_message.clone());
            return view! { <div class="list-results__empty">{message}</div> }.into_any();
        }
        view! {
            <div class="table" class:table--compact=compact>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>{column_headers}</tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        }
        .into_any()
    };

    let pagination = cfg.with_value(|c| {
        (!c.hide_pagination).then(|| {
            view! {
                <PaginationControls
                    current_page=Signal::derive(move || controller.with(|c| c.current_page()))
                    total_pages=Signal::derive(move || controller.with(|c| c.total_pages()))
                    disabled=Signal::derive(move || controller.with(|c| c.is_loading()))
                    on_page_change=on_page_change
                />
            }
        })
    });

    view! {
        <div class="list-results">
            {header}
            {search_bar}

            <div class="list-results__toolbar">
                <div class="list-results__filters">
                    {toolbar_refresh}
                    {filter_controls}
                    {ordering_control}
                </div>
                <div class="list-results__summary">
                    <Badge tone=BadgeTone::Info>
                        {move || format!("Total: {}", controller.with(|c| c.total_count()))}
                    </Badge>
                    <span class="list-results__page">
                        {move || controller.with(|c| format!("Page {} of {}", c.current_page(), c.total_pages()))}
                    </span>
                </div>
            </div>

            {move || controller.with(|c| c.error().map(str::to_string)).map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            {body}
            {pagination}

            <Show when=move || controller.with(|c| c.detail().open)>
                <Modal title="Details" on_close=close_detail wide=true>
                    {move || detail_body(controller, cfg)}
                </Modal>
            </Show>
        </div>
    }
}

/// With the search bar hidden, refresh moves into the toolbar as long as
/// there is filter or ordering state to reset.
fn shows_toolbar_refresh(config: &ListConfig) -> bool {
    config.hide_search && (!config.filters.is_empty() || !config.ordering_options.is_empty())
}

fn detail_body(controller: RwSignal<ListController>, cfg: StoredValue<ListConfig>) -> AnyView {
    let detail = controller.with(|c| c.detail().clone());
    if detail.loading {
        return view! {
            <Flex gap=FlexGap::Small class="list-results__loading">
                <Spinner />
                <span>"Loading details..."</span>
            </Flex>
        }
        .into_any();
    }
    if let Some(err) = detail.error {
        return view! {
            <div class="warning-box warning-box--error">
                <span class="warning-box__text">{err}</span>
            </div>
        }
        .into_any();
    }
    match detail.record {
        Some(record) => {
            let fields = cfg.with_value(|c| c.detail_fields.clone().unwrap_or_default());
            view! { <RecordDetail record=record fields=fields /> }.into_any()
        }
        None => view! { <p class="list-results__empty">"No data available."</p> }.into_any(),
    }
}

#[component]
fn RecordDetail(record: Record, fields: Vec<DetailField>) -> impl IntoView {
    let declared = fields
        .iter()
        .map(|field| (field.label.clone(), render_detail_field(&record, field)))
        .collect::<Vec<_>>();
    let extras = detail_extras(&record)
        .into_iter()
        .map(|(label, value)| (label.to_string(), value));

    view! {
        <dl class="record-detail">
            {declared
                .into_iter()
                .chain(extras)
                .map(|(label, value)| view! {
                    <div class="record-detail__row">
                        <dt class="record-detail__label">{label}</dt>
                        <dd class="record-detail__value"><DetailValueView value=value /></dd>
                    </div>
                })
                .collect_view()}
        </dl>
    }
}

#[component]
pub fn CellView(content: CellContent) -> impl IntoView {
    match content {
        CellContent::Text(text) => view! { <span>{text}</span> }.into_any(),
        CellContent::Placeholder => view! { <span class="text-muted">{PLACEHOLDER}</span> }.into_any(),
        CellContent::Badges(badges) => badges
            .into_iter()
            .map(|badge| view! { <Badge tone=badge.tone>{badge.label}</Badge> })
            .collect_view()
            .into_any(),
        CellContent::Link { text, href } => view! {
            <a
                class="table__link"
                href=href
                rel="external"
                on:click=|ev| ev.stop_propagation()
            >
                {text}
            </a>
        }
        .into_any(),
    }
}

#[component]
fn DetailValueView(value: DetailValue) -> impl IntoView {
    match value {
        DetailValue::Placeholder => view! { <span class="text-muted">{PLACEHOLDER}</span> }.into_any(),
        DetailValue::Text(text) => view! { <span>{text}</span> }.into_any(),
        DetailValue::Json(json) => view! { <pre class="json-block">{json}</pre> }.into_any(),
        DetailValue::Badges(items) => items
            .into_iter()
            .map(|item| view! { <Badge tone=BadgeTone::Info>{item}</Badge> })
            .collect_view()
            .into_any(),
        DetailValue::Flag(true) => view! { <Badge tone=BadgeTone::Failure>"Yes"</Badge> }.into_any(),
        DetailValue::Flag(false) => view! { <Badge tone=BadgeTone::Success>"No"</Badge> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_results::descriptors::{options, FilterDescriptor};

    const BASE: &str = "http://api.test/api/bot-events/";

    #[test]
    fn toolbar_refresh_only_when_search_is_hidden() {
        let with_ordering = ListConfig::new(BASE).ordering_options(options(&[("-created_at", "Newest First")]));
        assert!(!shows_toolbar_refresh(&with_ordering));
        assert!(shows_toolbar_refresh(&with_ordering.hide_search(true)));

        let with_filter = ListConfig::new(BASE)
            .filters(vec![FilterDescriptor::new("method", "Method", options(&[("", "All")]))])
            .hide_search(true);
        assert!(shows_toolbar_refresh(&with_filter));

        assert!(!shows_toolbar_refresh(&ListConfig::new(BASE).hide_search(true)));
    }
}
