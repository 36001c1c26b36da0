//! Error handling utilities for HTTP MCP servers
//!
//! Every failure a handler reports is rendered as a JSON body of the shape
//! `{"error": "<message>"}` together with an HTTP status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// An error that knows which HTTP status it maps to
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{status}: {message}")]
pub struct HttpError {
    /// Status code sent to the client
    pub status: StatusCode,
    /// Message placed in the `error` field of the body
    pub message: String,
}

/// Type alias for handler results
pub type HttpResult<T> = Result<T, HttpError>;

impl HttpError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!("Error processing request: {}", self.message);
        }
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Trait for converting errors into HTTP errors
///
/// Implement this trait for external error types to enable the `?` operator
/// in handlers via [`ResultExt::to_http_err`]. Everything converted this way
/// is treated as an internal (500) failure.
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::{HttpError, IntoHttpError, internal_error};
///
/// impl IntoHttpError for MyError {
///     fn into_http_error(self) -> HttpError {
///         internal_error(self.to_string())
///     }
/// }
/// ```
pub trait IntoHttpError {
    /// Convert this error into an HTTP error
    fn into_http_error(self) -> HttpError;
}

impl IntoHttpError for anyhow::Error {
    fn into_http_error(self) -> HttpError {
        // Alternate form keeps the context chain: "outer: inner"
        internal_error(format!("{:#}", self))
    }
}

/// Extension trait for Result types to convert to HTTP errors
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::ResultExt;
///
/// async fn handler() -> HttpResult<Response> {
///     let data = load_document().await.context("Failed to load").to_http_err()?;
///     // ...
/// }
/// ```
pub trait ResultExt<T> {
    /// Convert the error to an HTTP error
    fn to_http_err(self) -> Result<T, HttpError>;
}

impl<T, E: IntoHttpError> ResultExt<T> for Result<T, E> {
    fn to_http_err(self) -> Result<T, HttpError> {
        self.map_err(|e| e.into_http_error())
    }
}

/// 400 with the given message
pub fn bad_request(message: impl Into<String>) -> HttpError {
    HttpError::new(StatusCode::BAD_REQUEST, message)
}

/// 404 with the given message
pub fn not_found(message: impl Into<String>) -> HttpError {
    HttpError::new(StatusCode::NOT_FOUND, message)
}

/// 500 with the given message
pub fn internal_error(message: impl Into<String>) -> HttpError {
    HttpError::new(StatusCode::INTERNAL_SERVER_ERROR, message)
}
