//! Securities table wired to the filter bar and the paged query coordinator.

use dioxus::{logger::tracing, prelude::*};

use common::{
    filter_bar::FilterConfig,
    filter_criteria::FilterEmission,
    paged_query::{CoordinatorOptions, FetchOutcome, FetchTicket, PagedQueryCoordinator},
};
use crate::{
    api::securities_api::{query_failure_from_server_error, query_securities},
    components::{
        error_boundary::ComponentErrorDisplay,
        loading_indicator::LoadingIndicator,
        securities_components::{filter_bar::FilterBar, pagination_controls::PaginationControls},
    },
    data_definitions::security_column::SecurityColumn,
};


/// Sends the ticket's query to the server and hands the answer back to the coordinator.
///
/// Fetches are never cancelled; the coordinator decides whether a late answer still applies.
async fn run_fetch(mut coordinator: Signal<PagedQueryCoordinator>, ticket: FetchTicket) {
    let generation = ticket.generation;
    let result = query_securities(ticket.query).await.map_err(query_failure_from_server_error);
    let outcome = coordinator.write().complete_fetch(generation, result);
    match outcome {
        FetchOutcome::Applied => tracing::debug!("securities fetch {generation} applied"),
        FetchOutcome::Discarded => tracing::debug!("securities fetch {generation} superseded"),
        FetchOutcome::Failed => {
            if let Some(failure) = coordinator.peek().last_error() {
                tracing::warn!("securities fetch {generation} failed: {failure}");
            }
        }
    }
}

#[component]
pub fn FilterableTable(columns: Vec<SecurityColumn>, filter_config: Vec<FilterConfig>, options: CoordinatorOptions) -> Element {
    let mut coordinator = use_signal(move || {
        PagedQueryCoordinator::new(options).unwrap_or_else(|e| {
            tracing::error!("invalid table options {options:?}: {e}; using defaults");
            PagedQueryCoordinator::default()
        })
    });
    let dispatch = Callback::new(move |ticket: FetchTicket| {
        spawn(run_fetch(coordinator, ticket));
    });

    // initial fetch when the table is mounted
    use_effect(move || {
        let ticket = coordinator.write().activate();
        dispatch.call(ticket);
    });

    let filters_changed = Callback::new(move |filters: FilterEmission| {
        let ticket = coordinator.write().on_filters_changed(filters);
        dispatch.call(ticket);
    });
    let page_changed = Callback::new(move |(page_index, page_size): (i64, i64)| {
        let request = coordinator.write().on_page_changed(page_index, page_size);
        match request {
            Ok(ticket) => dispatch.call(ticket),
            Err(e) => tracing::warn!("ignoring page change: {e}"),
        }
    });
    let retry = move |_| {
        let ticket = coordinator.write().fetch();
        dispatch.call(ticket);
    };

    let state = coordinator.read();
    let securities = state.securities().to_vec();
    let is_loading = state.is_loading();
    let last_error = state.last_error().map(|failure| failure.to_string());
    let displayed = state.displayed_window();
    let (page_count, total_count) = (state.page_count(), state.total_count());
    drop(state);

    rsx! {
        div {
            id: "x-filterable-table-wrapper",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                flex-grow: 1;
                min-height: 0;
            ",
            FilterBar { config: filter_config.clone(), filters_changed }

            if let Some(error_txt) = last_error {
                ComponentErrorDisplay {
                    error_txt,
                    button {
                        style: "color:blue; font-size: 18px; border: 1px solid blue; padding: 6px 12px; border-radius: 5px; margin: 10px;",
                        onclick: retry,
                        "Try Again"
                    }
                }
            }

            div {
                style: "
                    position: relative;
                    flex-grow: 1;
                    overflow-y: auto;
                    background-color: white;
                    border-radius: 10px;
                ",
                table {
                    class: "x-securities-table",
                    thead {
                        tr {
                            for column in columns.iter() {
                                th { key: "{column.header()}", "{column.header()}" }
                            }
                        }
                    }
                    tbody {
                        for (row_index, security) in securities.iter().enumerate() {
                            tr {
                                key: "{row_index}-{security.name}",
                                for column in columns.iter() {
                                    td { key: "{column.header()}", "{column.cell(security)}" }
                                }
                            }
                        }
                        if securities.is_empty() && !is_loading {
                            tr {
                                td {
                                    colspan: "{columns.len()}",
                                    style: "color: rgba(0,0,0,0.5);",
                                    "No securities match the current filters"
                                }
                            }
                        }
                    }
                }
                if is_loading {
                    div {
                        style: "
                            position: absolute;
                            top: 0px;
                            left: 0px;
                            width: 100%;
                            height: 100%;
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            background-color: rgba(255,255,255,0.6);
                        ",
                        LoadingIndicator {}
                    }
                }
            }

            PaginationControls { page_index: displayed.page_index, page_size: displayed.page_size, page_count, total_count, page_changed }
        }
    }
}
