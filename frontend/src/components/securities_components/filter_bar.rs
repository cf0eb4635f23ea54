//! Filter inputs above the securities table.

use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use common::{
    filter_bar::{FilterBarModel, FilterConfig, FilterKind, FilterOption},
    filter_criteria::{FilterEmission, FilterValue},
};


#[component]
pub fn FilterBar(config: Vec<FilterConfig>, filters_changed: Callback<FilterEmission>) -> Element {
    let mut model = use_signal(FilterBarModel::new);
    let has_active_filters = use_memo(move || model.read().has_active_filters());
    // keyed on the clear count so chip inputs drop unsent drafts after "Clear filters"
    let clear_count = use_memo(move || model.read().clear_count());
    let emit = Callback::new(move |emission: FilterEmission| {
        tracing::debug!("filters changed: {:?}", emission);
        filters_changed.call(emission);
    });

    rsx! {
        div {
            id: "x-filter-bar",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                align-items: flex-end;
                gap: 16px;
                padding: 10px;
                margin-bottom: 10px;
                background-color: white;
                border-radius: 10px;
                box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.1);
            ",
            for filter in config.iter().cloned() {
                FilterInput { key: "{filter.key}-{clear_count}", filter, model, emit }
            }
            if has_active_filters() {
                button {
                    style: "
                        cursor: pointer;
                        border: 1px solid rgba(0,0,0,0.5);
                        border-radius: 1000px;
                        background-color: white;
                        padding: 6px 14px;
                    ",
                    onclick: move |_| {
                        let emission = model.write().clear_all();
                        emit.call(emission);
                    },
                    "Clear filters"
                }
            }
        }
    }
}

#[component]
fn FilterInput(filter: FilterConfig, model: Signal<FilterBarModel>, emit: Callback<FilterEmission>) -> Element {
    let filter_key = filter.key.clone();
    let input = match filter.kind {
        FilterKind::Text => rsx! { TextFilterInput { filter_key, model, emit } },
        FilterKind::ChipInput => rsx! { ChipFilterInput { filter_key, model, emit } },
        FilterKind::Checkbox => rsx! { CheckboxFilterInput { filter_key, model, emit } },
        FilterKind::Dropdown => rsx! { DropdownFilterInput { filter_key, options: filter.options.clone(), model, emit } },
    };

    rsx! {
        div {
            class: "x-filter-input",
            style: "
                display: flex;
                flex-direction: column;
                gap: 4px;
                min-width: 160px;
            ",
            label {
                style: "font-size: 13px; color: rgba(28, 33, 45, 0.7);",
                "{filter.label}"
            }
            {input}
        }
    }
}

#[component]
fn TextFilterInput(filter_key: String, mut model: Signal<FilterBarModel>, emit: Callback<FilterEmission>) -> Element {
    let value = match model.read().raw_value(&filter_key) {
        Some(FilterValue::Text(text)) => text.clone(),
        _ => String::new(),
    };

    rsx! {
        input {
            r#type: "text",
            style: "font-size: 16px; padding: 6px; border: 1px solid rgba(101, 101, 101, 0.8); border-radius: 4px;",
            value: "{value}",
            oninput: move |event: Event<FormData>| {
                let emission = model.write().set_filter(&filter_key, FilterValue::Text(event.value()));
                emit.call(emission);
            },
        }
    }
}

#[component]
fn ChipFilterInput(filter_key: String, mut model: Signal<FilterBarModel>, emit: Callback<FilterEmission>) -> Element {
    let mut draft = use_signal(String::new);
    let chips = match model.read().raw_value(&filter_key) {
        Some(FilterValue::Tags(tags)) => tags.iter().cloned().collect::<Vec<_>>(),
        _ => Vec::new(),
    };
    let add_key = filter_key.clone();

    rsx! {
        div {
            style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 6px; align-items: center;",
            for chip in chips {
                FilterChip { key: "{chip}", filter_key: filter_key.clone(), value: chip.clone(), model, emit }
            }
            input {
                r#type: "text",
                placeholder: "Add and press Enter",
                style: "font-size: 16px; padding: 6px; border: 1px solid rgba(101, 101, 101, 0.8); border-radius: 4px;",
                value: "{draft}",
                oninput: move |event: Event<FormData>| draft.set(event.value()),
                onkeydown: move |event: Event<KeyboardData>| {
                    if event.key() == Key::Enter {
                        let raw_value = draft.read().clone();
                        if let Some(emission) = model.write().add_to_set_filter(&add_key, &raw_value) {
                            emit.call(emission);
                        }
                        draft.set(String::new());
                    }
                },
            }
        }
    }
}

#[component]
fn FilterChip(filter_key: String, value: String, mut model: Signal<FilterBarModel>, emit: Callback<FilterEmission>) -> Element {
    let label = value.clone();
    rsx! {
        span {
            class: "x-filter-chip",
            style: "
                display: flex;
                align-items: center;
                gap: 4px;
                padding: 2px 4px 2px 10px;
                border: 1px solid rgba(0,0,255,0.9);
                border-radius: 1000px;
                font-size: 14px;
            ",
            "{label}"
            button {
                title: "Remove",
                style: "border: none; background: none; cursor: pointer; display: flex;",
                onclick: move |_| {
                    let emission = model.write().remove_from_set_filter(&filter_key, &value);
                    emit.call(emission);
                },
                Icon { icon: MdClose, style: "width: 14px; height: 14px; color:rgba(0,0,0,0.7);" }
            }
        }
    }
}

#[component]
fn CheckboxFilterInput(filter_key: String, mut model: Signal<FilterBarModel>, emit: Callback<FilterEmission>) -> Element {
    let checked = matches!(model.read().raw_value(&filter_key), Some(FilterValue::Tri(Some(true))));

    rsx! {
        input {
            r#type: "checkbox",
            checked: checked,
            onchange: move |_| {
                let emission = model.write().set_filter(&filter_key, FilterValue::Tri(Some(!checked)));
                emit.call(emission);
            },
        }
    }
}

#[component]
fn DropdownFilterInput(filter_key: String, options: Vec<FilterOption>, mut model: Signal<FilterBarModel>, emit: Callback<FilterEmission>) -> Element {
    let current = model.read().raw_value(&filter_key).cloned().unwrap_or(FilterValue::Tri(None));
    let selected_index = options.iter().position(|choice| choice.value == current);
    let choices = options.clone();

    rsx! {
        select {
            style: "font-size: 16px; padding: 6px; border: 1px solid rgba(101, 101, 101, 0.8); border-radius: 4px;",
            onchange: move |event: Event<FormData>| {
                let Ok(index) = event.value().parse::<usize>() else { return };
                let Some(choice) = choices.get(index) else { return };
                let emission = model.write().set_filter(&filter_key, choice.value.clone());
                emit.call(emission);
            },
            for (index, choice) in options.iter().enumerate() {
                option {
                    key: "{index}",
                    value: "{index}",
                    selected: selected_index == Some(index),
                    "{choice.label}"
                }
            }
        }
    }
}
