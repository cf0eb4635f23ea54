//! Shared constants for the securities table and query service.

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const PAGE_SIZE_OPTIONS: [u64; 4] = [5, 10, 25, 50];

/// Upper bound used by the service when a query carries no `limit`.
pub const DEFAULT_QUERY_LIMIT: u64 = 100;

pub const DEFAULT_MOCK_LATENCY_MS: u64 = 1000;

pub const NAME_FILTER_KEY: &str = "name";
pub const TYPES_FILTER_KEY: &str = "types";
pub const CURRENCIES_FILTER_KEY: &str = "currencies";
pub const IS_PRIVATE_FILTER_KEY: &str = "isPrivate";
