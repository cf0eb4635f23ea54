//! Page navigation and page size controls for the securities table.

use common::securities_const::PAGE_SIZE_OPTIONS;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};


#[component]
pub fn PaginationControls(page_index: u64, page_size: u64, page_count: u64, total_count: u64, page_changed: Callback<(i64, i64)>) -> Element {
    let selected_page = if page_count == 0 { 0 } else { (page_index + 1).min(page_count) };
    let can_go_to_previous_page = page_index > 0;
    let can_go_to_next_page = page_index + 1 < page_count;
    let page_index = page_index as i64;
    let page_size = page_size as i64;

    rsx! {
        div {
            id: "x-securities-pagination-row",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 16px;
                padding: 7px;
                height: 56px;
                width: 100%;
            ",
            h2 {
                style: "font-size: 18px; font-weight: 300; color:rgb(75, 87, 112);",
                "{total_count} securities found"
            }
            // empty space
            div {
                style: "flex-grow: 1;"
            }
            label {
                style: "font-size: 14px; color: rgba(0,0,0,0.6);",
                "Rows per page"
            }
            select {
                onchange: move |event: Event<FormData>| {
                    if let Ok(size) = event.value().parse::<i64>() {
                        // first page of the new size
                        page_changed((0, size));
                    }
                },
                for size in PAGE_SIZE_OPTIONS {
                    option {
                        key: "{size}",
                        value: "{size}",
                        selected: size as i64 == page_size,
                        "{size}"
                    }
                }
            }
            NavigationButton {
                icon: MdArrowBack,
                label: "Previous Page",
                disabled: !can_go_to_previous_page,
                onclick: move |_| page_changed((page_index - 1, page_size)),
            }
            div {
                style: "
                    font-size: 16px;
                    line-height: 21px;
                    font-weight: 400;
                    background-color: white;
                    border-radius: 2px;
                    padding: 4px 12px;
                ",
                "{selected_page}"
                span {
                    style: "color: rgba(0,0,0,0.5);",
                    "/{page_count}"
                }
            }
            NavigationButton {
                icon: MdArrowForward,
                label: "Next Page",
                disabled: !can_go_to_next_page,
                onclick: move |_| page_changed((page_index + 1, page_size)),
            }
        }
    }
}

#[component]
pub fn NavigationButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: bool, onclick: Callback<()>) -> Element {
    let btn_color = if disabled { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" };
    let btn_cursor = if disabled { "not-allowed" } else { "pointer" };
    rsx! {
        button {
            disabled: disabled,
            title: "{label}",
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border-radius: 8px;
                padding: 4px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !disabled {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 22px; height: 22px; color: {btn_color};" }
        }
    }
}
