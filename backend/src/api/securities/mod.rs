//! Securities API and module exports.

mod query_securities;
pub use query_securities::{InMemorySecurityService, query_securities, shared_service};

pub mod securities_filter;
