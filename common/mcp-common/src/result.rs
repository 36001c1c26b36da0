//! Result helpers for JSON responses
//!
//! Every body the servers send is JSON with `Content-Type: application/json`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Create a 200 response from any serializable data
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::json_success;
///
/// async fn health() -> Response {
///     json_success(&serde_json::json!({ "status": "healthy" }))
/// }
/// ```
pub fn json_success<T: Serialize>(data: &T) -> Response {
    json_response(StatusCode::OK, data)
}

/// Create a response with an explicit status from any serializable data
pub fn json_response<T: Serialize>(status: StatusCode, data: &T) -> Response {
    (status, Json(data)).into_response()
}
