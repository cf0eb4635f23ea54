//! Query sent to the securities service and the page it answers with.

use serde::{Deserialize, Serialize};

use crate::filter_criteria::{FilterCriteria, FilterEmission};
use crate::securities_const::DEFAULT_QUERY_LIMIT;
use crate::security::Security;


/// Filters and page window, serialized flat: `{ ...filters, skip, limit }`.
///
/// `limit` is the exclusive upper index of the window (`skip + page_size`), not a count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityQuery {
    #[serde(flatten)]
    pub filters: FilterCriteria,
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    DEFAULT_QUERY_LIMIT
}

impl Default for SecurityQuery {
    fn default() -> Self {
        Self { filters: FilterCriteria::new(), skip: 0, limit: DEFAULT_QUERY_LIMIT }
    }
}

impl SecurityQuery {
    pub fn for_page(filters: &FilterEmission, page_index: u64, page_size: u64) -> Self {
        let (skip, limit) = page_window(page_index, page_size);
        Self { filters: filters.to_criteria(), skip, limit }
    }
}

/// `(skip, limit)` for a page, with `limit` as an upper index.
pub fn page_window(page_index: u64, page_size: u64) -> (u64, u64) {
    let skip = page_index.saturating_mul(page_size);
    (skip, skip.saturating_add(page_size))
}


#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityPage {
    pub securities: Vec<Security>,
    pub total_count: u64,
}
