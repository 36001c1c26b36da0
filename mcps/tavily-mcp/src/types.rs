//! Request and result types shared by the gateway, backends and HTTP layer
//!
//! Provider payloads are kept as raw JSON. Only the presence of `query` and
//! a `results` list is checked, so the legacy endpoint can hand the payload
//! back exactly as it arrived.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Default number of results requested from the provider
pub const DEFAULT_MAX_RESULTS: i64 = 10;

/// Default search depth
pub const DEFAULT_SEARCH_DEPTH: &str = "basic";

/// A validated search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// The search query, never empty
    pub query: String,
    /// Passed through to the provider, which rejects values it doesn't accept
    pub max_results: i64,
    /// "basic" or "advanced"; other values are left for the provider to reject
    pub search_depth: String,
}

impl SearchRequest {
    /// Build a request with default `max_results` and `search_depth`
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            max_results: DEFAULT_MAX_RESULTS,
            search_depth: DEFAULT_SEARCH_DEPTH.to_string(),
        }
    }

    pub fn with_max_results(mut self, max_results: i64) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_search_depth(mut self, search_depth: impl Into<String>) -> Self {
        self.search_depth = search_depth.into();
        self
    }
}

/// Why a provider payload was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("search response has no 'query' field")]
    MissingQuery,
    #[error("search response has no 'results' list")]
    MissingResults,
}

/// A successful provider response, untouched apart from the shape check
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct SearchResponse(Map<String, Value>);

impl TryFrom<Map<String, Value>> for SearchResponse {
    type Error = PayloadError;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        if !fields.contains_key("query") {
            return Err(PayloadError::MissingQuery);
        }
        if !fields.get("results").is_some_and(Value::is_array) {
            return Err(PayloadError::MissingResults);
        }
        Ok(Self(fields))
    }
}

impl TryFrom<Value> for SearchResponse {
    type Error = PayloadError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Self::try_from(fields),
            _ => Err(PayloadError::MissingQuery),
        }
    }
}

impl Serialize for SearchResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl SearchResponse {
    /// The query echoed back by the provider
    pub fn query(&self) -> &Value {
        &self.0["query"]
    }

    /// The search results, in provider order
    pub fn results(&self) -> &[Value] {
        self.0["results"].as_array().map(Vec::as_slice).unwrap_or_default()
    }

    /// Every field of the payload
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Split into the echoed query and the result list
    pub fn into_parts(mut self) -> (Value, Vec<Value>) {
        let query = self.0.remove("query").unwrap_or(Value::Null);
        let results = match self.0.remove("results") {
            Some(Value::Array(results)) => results,
            _ => Vec::new(),
        };
        (query, results)
    }
}

/// Outcome of one gateway call
///
/// Serializes untagged: a success renders as the provider payload, an error
/// as `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SearchOutcome {
    Success(SearchResponse),
    Error { error: String },
}

impl SearchOutcome {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }
}

/// Body returned by the canonical `/mcp` endpoint
#[derive(Debug, Clone, Serialize)]
pub struct McpSearchResponse {
    pub results: Vec<Value>,
    pub query: Value,
    pub count: usize,
    pub search_depth: String,
}

impl McpSearchResponse {
    pub fn new(response: SearchResponse, search_depth: String) -> Self {
        let (query, results) = response.into_parts();
        Self {
            count: results.len(),
            results,
            query,
            search_depth,
        }
    }
}
