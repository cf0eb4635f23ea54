//! Filter values, normalized criteria and the filter bar emission.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};


/// Value held by a single filter key.
///
/// On the wire this is untagged: a string, an array of strings, or `true` / `false` / `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Text(String),
    Tags(BTreeSet<String>),
    /// `None` is the "any" choice of a tri-state input.
    Tri(Option<bool>),
}

impl FilterValue {
    pub fn tags<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterValue::Tags(values.into_iter().map(|v| v.into()).collect())
    }

    /// Normalized form of this value, or `None` when the value carries no constraint.
    pub fn normalized(&self) -> Option<FilterValue> {
        match self {
            FilterValue::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    None
                } else {
                    Some(FilterValue::Text(text.to_string()))
                }
            }
            FilterValue::Tags(tags) => {
                if tags.is_empty() {
                    None
                } else {
                    Some(FilterValue::Tags(tags.clone()))
                }
            }
            FilterValue::Tri(Some(flag)) => Some(FilterValue::Tri(Some(*flag))),
            FilterValue::Tri(None) => None,
        }
    }
}

/// Mapping from filter key to value, ordered by key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterCriteria(BTreeMap<String, FilterValue>);

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: FilterValue) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FilterValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drops every entry without a constraint and trims text values.
    pub fn normalized(&self) -> FilterCriteria {
        self.0
            .iter()
            .filter_map(|(key, value)| value.normalized().map(|value| (key.clone(), value)))
            .collect()
    }
}

impl FromIterator<(String, FilterValue)> for FilterCriteria {
    fn from_iter<T: IntoIterator<Item = (String, FilterValue)>>(iter: T) -> Self {
        FilterCriteria(iter.into_iter().collect())
    }
}

impl From<BTreeMap<String, FilterValue>> for FilterCriteria {
    fn from(value: BTreeMap<String, FilterValue>) -> Self {
        FilterCriteria(value)
    }
}

/// What the filter bar hands downstream after every edit.
///
/// `NoFilters` is never sent as an empty `Criteria`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterEmission {
    #[default]
    NoFilters,
    Criteria(FilterCriteria),
}

impl FilterEmission {
    pub fn from_criteria(criteria: FilterCriteria) -> Self {
        if criteria.is_empty() {
            FilterEmission::NoFilters
        } else {
            FilterEmission::Criteria(criteria)
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, FilterEmission::Criteria(_))
    }

    pub fn criteria(&self) -> Option<&FilterCriteria> {
        match self {
            FilterEmission::Criteria(criteria) => Some(criteria),
            FilterEmission::NoFilters => None,
        }
    }

    pub fn to_criteria(&self) -> FilterCriteria {
        self.criteria().cloned().unwrap_or_default()
    }
}

pub fn normalize_filters(raw: &BTreeMap<String, FilterValue>) -> FilterEmission {
    let criteria = raw
        .iter()
        .filter_map(|(key, value)| value.normalized().map(|value| (key.clone(), value)))
        .collect::<FilterCriteria>();
    FilterEmission::from_criteria(criteria)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn messy_filters() -> BTreeMap<String, FilterValue> {
        BTreeMap::from([
            ("name".to_string(), FilterValue::Text("  Bond ".to_string())),
            ("blank".to_string(), FilterValue::Text("   ".to_string())),
            ("types".to_string(), FilterValue::tags(["Equity"])),
            ("currencies".to_string(), FilterValue::Tags(BTreeSet::new())),
            ("isPrivate".to_string(), FilterValue::Tri(Some(false))),
            ("archived".to_string(), FilterValue::Tri(None)),
        ])
    }

    #[test]
    fn normalization_drops_values_without_constraint() {
        let emission = normalize_filters(&messy_filters());

        let expected = FilterCriteria::new()
            .with("name", FilterValue::Text("Bond".to_string()))
            .with("types", FilterValue::tags(["Equity"]))
            .with("isPrivate", FilterValue::Tri(Some(false)));
        assert_eq!(emission, FilterEmission::Criteria(expected));
    }

    #[test]
    fn normalization_keeps_both_boolean_values() {
        let raw = BTreeMap::from([
            ("a".to_string(), FilterValue::Tri(Some(true))),
            ("b".to_string(), FilterValue::Tri(Some(false))),
        ]);

        let criteria = normalize_filters(&raw).to_criteria();

        assert_eq!(criteria.get("a"), Some(&FilterValue::Tri(Some(true))));
        assert_eq!(criteria.get("b"), Some(&FilterValue::Tri(Some(false))));
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = FilterCriteria::from(messy_filters()).normalized();
        let twice = once.normalized();

        assert_eq!(once, twice);
    }

    #[test]
    fn normalized_criteria_never_hold_empty_values() {
        let criteria = FilterCriteria::from(messy_filters()).normalized();

        for (key, value) in criteria.iter() {
            match value {
                FilterValue::Text(text) => assert!(!text.trim().is_empty(), "{key} is blank"),
                FilterValue::Tags(tags) => assert!(!tags.is_empty(), "{key} is an empty set"),
                FilterValue::Tri(flag) => assert!(flag.is_some(), "{key} is unset"),
            }
        }
    }

    #[test]
    fn all_empty_filters_emit_no_filters_sentinel() {
        let raw = BTreeMap::from([
            ("name".to_string(), FilterValue::Text(String::new())),
            ("isPrivate".to_string(), FilterValue::Tri(None)),
        ]);

        assert_eq!(normalize_filters(&raw), FilterEmission::NoFilters);
        assert_eq!(normalize_filters(&BTreeMap::new()), FilterEmission::NoFilters);
    }

    #[test]
    fn filter_values_use_untagged_wire_form() {
        let criteria = FilterCriteria::new()
            .with("name", FilterValue::Text("Bond".to_string()))
            .with("types", FilterValue::tags(["Equity", "Bond"]))
            .with("isPrivate", FilterValue::Tri(Some(true)))
            .with("any", FilterValue::Tri(None));

        let json = serde_json::to_value(&criteria).expect("criteria should serialize");

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Bond",
                "types": ["Bond", "Equity"],
                "isPrivate": true,
                "any": null,
            })
        );
        let parsed: FilterCriteria = serde_json::from_value(json).expect("criteria should parse");
        assert_eq!(parsed, criteria);
    }
}
