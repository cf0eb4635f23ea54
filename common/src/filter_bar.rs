//! Filter bar model and configuration.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::filter_criteria::{FilterEmission, FilterValue, normalize_filters};
use crate::securities_const::{CURRENCIES_FILTER_KEY, IS_PRIVATE_FILTER_KEY, NAME_FILTER_KEY, TYPES_FILTER_KEY};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterKind {
    Text,
    ChipInput,
    Checkbox,
    Dropdown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: FilterValue,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub key: String,
    pub kind: FilterKind,
    pub label: String,
    pub options: Vec<FilterOption>,
}

impl FilterConfig {
    pub fn new(key: impl Into<String>, kind: FilterKind, label: impl Into<String>) -> Self {
        Self { key: key.into(), kind, label: label.into(), options: vec![] }
    }

    pub fn with_option(mut self, value: FilterValue, label: impl Into<String>) -> Self {
        self.options.push(FilterOption { value, label: label.into() });
        self
    }
}

/// Filters shown above the securities table.
pub fn securities_filter_config() -> Vec<FilterConfig> {
    vec![
        FilterConfig::new(NAME_FILTER_KEY, FilterKind::Text, "Name"),
        FilterConfig::new(TYPES_FILTER_KEY, FilterKind::ChipInput, "Types"),
        FilterConfig::new(CURRENCIES_FILTER_KEY, FilterKind::ChipInput, "Currencies"),
        FilterConfig::new(IS_PRIVATE_FILTER_KEY, FilterKind::Dropdown, "Private")
            .with_option(FilterValue::Tri(Some(true)), "Yes")
            .with_option(FilterValue::Tri(Some(false)), "No")
            .with_option(FilterValue::Tri(None), "Any"),
    ]
}


/// Raw input state of the filter bar.
///
/// Every mutation returns the normalized emission the table should react to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterBarModel {
    filters: BTreeMap<String, FilterValue>,
    // bumped by clear_all so inputs holding unsent text can be rebuilt
    clear_count: u64,
}

impl FilterBarModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw_value(&self, key: &str) -> Option<&FilterValue> {
        self.filters.get(key)
    }

    /// Adds a chip to the set at `key`. Blank input emits nothing.
    pub fn add_to_set_filter(&mut self, key: &str, raw_value: &str) -> Option<FilterEmission> {
        let value = raw_value.trim();
        if value.is_empty() {
            return None;
        }
        match self.filters.get_mut(key) {
            Some(FilterValue::Tags(tags)) => {
                tags.insert(value.to_string());
            }
            _ => {
                self.filters.insert(key.to_string(), FilterValue::Tags(BTreeSet::from([value.to_string()])));
            }
        }
        Some(self.emission())
    }

    pub fn remove_from_set_filter(&mut self, key: &str, value: &str) -> FilterEmission {
        if let Some(FilterValue::Tags(tags)) = self.filters.get_mut(key) {
            tags.remove(value);
            if tags.is_empty() {
                self.filters.remove(key);
            }
        }
        self.emission()
    }

    pub fn set_filter(&mut self, key: &str, value: FilterValue) -> FilterEmission {
        self.filters.insert(key.to_string(), value);
        self.emission()
    }

    pub fn clear_filter(&mut self, key: &str) -> FilterEmission {
        self.filters.remove(key);
        self.emission()
    }

    pub fn clear_all(&mut self) -> FilterEmission {
        self.filters.clear();
        self.clear_count += 1;
        self.emission()
    }

    pub fn clear_count(&self) -> u64 {
        self.clear_count
    }

    pub fn has_active_filters(&self) -> bool {
        self.filters.values().any(|value| value.normalized().is_some())
    }

    pub fn emission(&self) -> FilterEmission {
        normalize_filters(&self.filters)
    }
}
