//! MCP Common - Shared utilities for HTTP MCP servers
//!
//! This crate provides common functionality used across the HTTP-facing MCP
//! servers:
//!
//! - **Initialization**: [`init_tracing`] and [`serve_http`] for standardized
//!   server startup and graceful shutdown
//! - **Results**: Helper functions for creating JSON responses
//! - **Errors**: [`HttpError`] and traits for converting errors into
//!   `{"error": "..."}` responses with the right status code
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::{routing::get, Router};
//! use mcp_common::{json_success, HttpResult};
//!
//! async fn health() -> HttpResult<axum::response::Response> {
//!     Ok(json_success(&serde_json::json!({ "status": "healthy" })))
//! }
//!
//! mcp_common::init_tracing("my_mcp")?;
//! let app = Router::new().route("/health", get(health));
//! mcp_common::serve_http(app, "localhost", 5000).await?;
//! ```

pub mod error;
pub mod init;
pub mod result;

// Re-export commonly used items at crate root
pub use error::{
    bad_request, internal_error, not_found, HttpError, HttpResult, IntoHttpError, ResultExt,
};
pub use init::{init_tracing, serve_http};
pub use result::{json_response, json_success};
