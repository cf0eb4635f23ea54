//! Static data and environment configuration for the in-memory securities service.

pub mod securities_mock;
pub mod service_config;
