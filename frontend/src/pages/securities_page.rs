use dioxus::prelude::*;

use common::{filter_bar::securities_filter_config, paged_query::CoordinatorOptions};
use crate::{components::securities_components::filterable_table::FilterableTable, data_definitions::security_column::DEFAULT_SECURITY_COLUMNS};

/// Securities list page
#[component]
pub fn SecuritiesPage() -> Element {
    rsx! {
        Title { "Securities" }
        div {
            id: "x-securities-page-root-component",
            style: "
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
                padding: 16px;
                box-sizing: border-box;
            ",
            h1 {
                style: "font-size: 24px; font-weight: 300; color:rgb(75, 87, 112);",
                "Securities"
            }
            FilterableTable {
                columns: DEFAULT_SECURITY_COLUMNS.to_vec(),
                filter_config: securities_filter_config(),
                options: CoordinatorOptions::default(),
            }
        }
    }
}
