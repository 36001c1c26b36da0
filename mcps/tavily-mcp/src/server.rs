//! HTTP server for Tavily search
//!
//! Routes:
//! - `POST /mcp` - canonical endpoint, fields nested under `inputs`
//! - `POST /search` - legacy endpoint, fields at the top level
//! - `GET /health` - static health status
//! - `GET /mcp-config` - serves the configured MCP config document
//!
//! Everything else, including a known path with the wrong method, is a 404.

use anyhow::Context;
use axum::{
    body::Bytes,
    extract::State,
    response::Response,
    routing::{get, post},
    Router,
};
use mcp_common::{
    bad_request, internal_error, json_success, not_found, HttpError, HttpResult, ResultExt,
};
use serde_json::{json, Map, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::gateway::SearchGateway;
use crate::types::{
    McpSearchResponse, SearchOutcome, SearchRequest, DEFAULT_MAX_RESULTS, DEFAULT_SEARCH_DEPTH,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Gateway holding the provider credential
    pub gateway: Arc<SearchGateway>,
    /// Document served at `GET /mcp-config`
    pub mcp_config_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(gateway: SearchGateway, mcp_config_path: impl Into<PathBuf>) -> Self {
        Self {
            gateway: Arc::new(gateway),
            mcp_config_path: Arc::new(mcp_config_path.into()),
        }
    }
}

/// Where the search fields live in a POST body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestShape {
    /// `{"inputs": {"query": ...}}`
    Canonical,
    /// `{"query": ...}`
    Legacy,
}

impl RequestShape {
    fn missing_query(self) -> &'static str {
        match self {
            RequestShape::Canonical => "Missing 'query' parameter in inputs",
            RequestShape::Legacy => "Missing 'query' parameter",
        }
    }
}

/// Create the router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/mcp", post(mcp_handler).fallback(not_found_handler))
        .route("/search", post(search_handler).fallback(not_found_handler))
        .route("/health", get(health_handler).fallback(not_found_handler))
        .route(
            "/mcp-config",
            get(mcp_config_handler).fallback(not_found_handler),
        )
        .fallback(not_found_handler)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Validate a POST body and apply defaults
pub fn parse_search_request(body: &[u8], shape: RequestShape) -> HttpResult<SearchRequest> {
    if body.is_empty() {
        return Err(bad_request("Empty request body"));
    }

    let payload: Value =
        serde_json::from_slice(body).map_err(|_| bad_request("Invalid JSON in request body"))?;

    let fields: &Map<String, Value> = match shape {
        RequestShape::Canonical => match payload.get("inputs").filter(|v| !v.is_null()) {
            None => return Err(bad_request("Missing 'inputs' in MCP request")),
            Some(inputs) => inputs
                .as_object()
                .ok_or_else(|| bad_request(shape.missing_query()))?,
        },
        RequestShape::Legacy => payload
            .as_object()
            .ok_or_else(|| bad_request(shape.missing_query()))?,
    };

    let query = match present(fields, "query") {
        None => return Err(bad_request(shape.missing_query())),
        Some(Value::String(query)) if query.trim().is_empty() => {
            return Err(bad_request("'query' must not be empty"))
        }
        Some(Value::String(query)) => query.clone(),
        Some(_) => return Err(bad_request("'query' must be a string")),
    };

    let max_results = match present(fields, "max_results") {
        None => DEFAULT_MAX_RESULTS,
        Some(value) => value
            .as_i64()
            .ok_or_else(|| bad_request("'max_results' must be an integer"))?,
    };

    let search_depth = match present(fields, "search_depth") {
        None => DEFAULT_SEARCH_DEPTH.to_string(),
        Some(Value::String(depth)) => depth.clone(),
        Some(_) => return Err(bad_request("'search_depth' must be a string")),
    };

    Ok(SearchRequest {
        query,
        max_results,
        search_depth,
    })
}

// `null` counts as absent
fn present<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    fields.get(key).filter(|value| !value.is_null())
}

async fn mcp_handler(State(state): State<AppState>, body: Bytes) -> HttpResult<Response> {
    let request = parse_search_request(&body, RequestShape::Canonical)?;

    match state.gateway.search_request(&request).await {
        SearchOutcome::Success(response) => Ok(json_success(&McpSearchResponse::new(
            response,
            request.search_depth,
        ))),
        // The canonical envelope needs `results` and `query`; an error payload
        // has neither, so this stays a 500 unlike the legacy endpoint.
        SearchOutcome::Error { error } => Err(internal_error(format!(
            "Search response missing 'results': {}",
            error
        ))),
    }
}

async fn search_handler(State(state): State<AppState>, body: Bytes) -> HttpResult<Response> {
    let request = parse_search_request(&body, RequestShape::Legacy)?;

    // Legacy clients get the outcome as-is, error payloads included, with a 200
    let outcome = state.gateway.search_request(&request).await;
    Ok(json_success(&outcome))
}

async fn health_handler() -> Response {
    json_success(&json!({ "status": "healthy" }))
}

async fn mcp_config_handler(State(state): State<AppState>) -> HttpResult<Response> {
    let document = load_mcp_config(&state.mcp_config_path)
        .await
        .context("Failed to serve MCP config")
        .to_http_err()?;
    Ok(json_success(&document))
}

async fn load_mcp_config(path: &Path) -> anyhow::Result<Value> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("cannot read {}", path.display()))?;
    Ok(serde_json::from_str(&content)?)
}

async fn not_found_handler() -> HttpError {
    not_found("Not found")
}
