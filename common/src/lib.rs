//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod securities_const;
pub mod security;
pub mod filter_criteria;
pub mod filter_bar;
pub mod security_query;
pub mod query_error;
pub mod security_service;
pub mod paged_query;
