//! Typed view of the filter criteria understood by the securities service.

use std::collections::BTreeSet;

use common::{
    filter_criteria::{FilterCriteria, FilterValue},
    query_error::QueryFailure,
    securities_const::{CURRENCIES_FILTER_KEY, IS_PRIVATE_FILTER_KEY, NAME_FILTER_KEY, TYPES_FILTER_KEY},
    security::Security,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SecuritiesFilter {
    pub name: Option<String>,
    pub types: Option<BTreeSet<String>>,
    pub currencies: Option<BTreeSet<String>>,
    pub is_private: Option<bool>,
}

impl SecuritiesFilter {
    /// Unknown keys are ignored. A known key with the wrong kind of value is rejected.
    pub fn from_criteria(criteria: &FilterCriteria) -> Result<Self, QueryFailure> {
        let mut filter = SecuritiesFilter::default();
        for (key, value) in criteria.normalized().iter() {
            match (key.as_str(), value) {
                (NAME_FILTER_KEY, FilterValue::Text(name)) => filter.name = Some(name.clone()),
                (TYPES_FILTER_KEY, FilterValue::Tags(types)) => filter.types = Some(types.clone()),
                (CURRENCIES_FILTER_KEY, FilterValue::Tags(currencies)) => filter.currencies = Some(currencies.clone()),
                (IS_PRIVATE_FILTER_KEY, FilterValue::Tri(is_private)) => filter.is_private = *is_private,
                (NAME_FILTER_KEY | TYPES_FILTER_KEY | CURRENCIES_FILTER_KEY | IS_PRIVATE_FILTER_KEY, value) => {
                    return Err(QueryFailure::InvalidQuery(format!("unexpected value for filter {key}: {value:?}")));
                }
                _ => {}
            }
        }
        Ok(filter)
    }

    pub fn matches(&self, security: &Security) -> bool {
        if let Some(name) = &self.name {
            if !security.name.contains(name.as_str()) {
                return false;
            }
        }
        if let Some(types) = &self.types {
            if !types.contains(&security.security_type) {
                return false;
            }
        }
        if let Some(currencies) = &self.currencies {
            if !currencies.contains(&security.currency) {
                return false;
            }
        }
        if let Some(is_private) = self.is_private {
            if security.is_private != is_private {
                return false;
            }
        }
        true
    }
}
