//! Error kinds surfaced by the securities query path.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryFailure {
    Timeout,
    Transport(String),
    InvalidQuery(String),
}

impl QueryFailure {
    /// HTTP-like status used to carry the failure kind over the server function boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            QueryFailure::InvalidQuery(_) => 400,
            QueryFailure::Timeout => 504,
            QueryFailure::Transport(_) => 502,
        }
    }

    /// Message without the kind prefix; empty for timeouts.
    pub fn detail(&self) -> &str {
        match self {
            QueryFailure::Timeout => "",
            QueryFailure::Transport(message) | QueryFailure::InvalidQuery(message) => message,
        }
    }

    pub fn from_status(code: u16, message: impl Into<String>) -> Self {
        match code {
            400 => QueryFailure::InvalidQuery(message.into()),
            504 => QueryFailure::Timeout,
            _ => QueryFailure::Transport(message.into()),
        }
    }
}

impl std::fmt::Display for QueryFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout => write!(f, "securities query timed out"),
            Self::Transport(message) => write!(f, "securities query failed: {message}"),
            Self::InvalidQuery(message) => write!(f, "invalid securities query: {message}"),
        }
    }
}

impl std::error::Error for QueryFailure {}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequestError {
    NegativePageIndex(i64),
    NonPositivePageSize(i64),
}

impl std::fmt::Display for PageRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativePageIndex(index) => write!(f, "page index must not be negative, got {index}"),
            Self::NonPositivePageSize(size) => write!(f, "page size must be positive, got {size}"),
        }
    }
}

impl std::error::Error for PageRequestError {}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_kind_survives_status_code() {
        let failures = [
            QueryFailure::Timeout,
            QueryFailure::InvalidQuery("limit is before skip".to_string()),
            QueryFailure::Transport("connection reset".to_string()),
        ];

        for failure in failures {
            assert_eq!(QueryFailure::from_status(failure.status_code(), failure.detail()), failure);
        }
    }

    #[test]
    fn unknown_status_is_transport_failure() {
        assert_eq!(QueryFailure::from_status(500, "boom"), QueryFailure::Transport("boom".to_string()));
    }
}
