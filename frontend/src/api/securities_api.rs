//! Client API calls for the securities endpoint.

use common::{query_error::QueryFailure, security_query::{SecurityPage, SecurityQuery}};
use dioxus::prelude::*;


#[server]
pub async fn query_securities(query: SecurityQuery) -> Result<SecurityPage, ServerFnError> {
    let x = backend::api::securities::query_securities(query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.detail().to_string(), code: e.status_code(), details: None })
}

/// Recovers the failure kind from the status code the server attached.
pub fn query_failure_from_server_error(error: ServerFnError) -> QueryFailure {
    match error {
        ServerFnError::ServerError { message, code, .. } => QueryFailure::from_status(code, message),
        other => QueryFailure::Transport(other.to_string()),
    }
}
