use std::time::Duration;

use anyhow::Context;
use common::securities_const::DEFAULT_MOCK_LATENCY_MS;

pub const LATENCY_ENV_VAR: &str = "SECURITIES_MOCK_LATENCY_MS";
pub const TIMEOUT_ENV_VAR: &str = "SECURITIES_QUERY_TIMEOUT_MS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Simulated round trip of every query.
    pub latency: Duration,
    pub timeout: Option<Duration>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { latency: Duration::from_millis(DEFAULT_MOCK_LATENCY_MS), timeout: None }
    }
}

pub fn service_config_from_env() -> anyhow::Result<ServiceConfig> {
    parse_service_config(std::env::var(LATENCY_ENV_VAR).ok(), std::env::var(TIMEOUT_ENV_VAR).ok())
}

pub fn parse_service_config(latency_ms: Option<String>, timeout_ms: Option<String>) -> anyhow::Result<ServiceConfig> {
    let mut config = ServiceConfig::default();
    if let Some(latency_ms) = latency_ms {
        config.latency = Duration::from_millis(parse_millis(LATENCY_ENV_VAR, &latency_ms)?);
    }
    if let Some(timeout_ms) = timeout_ms {
        config.timeout = Some(Duration::from_millis(parse_millis(TIMEOUT_ENV_VAR, &timeout_ms)?));
    }
    Ok(config)
}

fn parse_millis(var_name: &str, value: &str) -> anyhow::Result<u64> {
    value.trim().parse::<u64>().with_context(|| format!("{var_name} must be a number of milliseconds, got {value:?}"))
}
