//! Search gateway
//!
//! Owns the search provider (and through it the API credential) and turns
//! every provider failure into a [`SearchOutcome::Error`] value, so the HTTP
//! layer always has something to answer with.

use std::sync::Arc;

use crate::backends::{tavily::TavilyBackend, SearchProvider};
use crate::config::TavilyConfig;
use crate::types::{SearchOutcome, SearchRequest};

/// Errors raised while constructing a [`SearchGateway`]
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// No usable API key was supplied
    #[error("Tavily API key is required (use --api-key or set TAVILY_API_KEY)")]
    MissingApiKey,

    /// The HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Delegates searches to a provider, one call per request
#[derive(Clone)]
pub struct SearchGateway {
    provider: Arc<dyn SearchProvider>,
}

impl SearchGateway {
    /// Create a gateway backed by the Tavily API
    ///
    /// An absent, empty or blank key fails with [`GatewayError::MissingApiKey`].
    pub fn new(api_key: Option<&str>, config: &TavilyConfig) -> Result<Self, GatewayError> {
        let api_key = api_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(GatewayError::MissingApiKey)?;

        let backend = TavilyBackend::new(api_key, config)?;
        Ok(Self::with_provider(Arc::new(backend)))
    }

    /// Create a gateway around an arbitrary provider
    pub fn with_provider(provider: Arc<dyn SearchProvider>) -> Self {
        Self { provider }
    }

    /// Name of the underlying provider
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Perform a search
    pub async fn search(
        &self,
        query: &str,
        max_results: i64,
        search_depth: &str,
    ) -> SearchOutcome {
        let request = SearchRequest::new(query)
            .with_max_results(max_results)
            .with_search_depth(search_depth);
        self.search_request(&request).await
    }

    /// Perform a search from an already built request
    pub async fn search_request(&self, request: &SearchRequest) -> SearchOutcome {
        tracing::info!(
            "Searching {} for: {} (max_results: {}, depth: {})",
            self.provider.name(),
            request.query,
            request.max_results,
            request.search_depth
        );

        match self.provider.search(request).await {
            Ok(response) => {
                tracing::debug!(
                    "{} returned {} results",
                    self.provider.name(),
                    response.results().len()
                );
                SearchOutcome::Success(response)
            }
            Err(e) => {
                tracing::error!("{} search error: {:#}", self.provider.name(), e);
                SearchOutcome::error(format!("{:#}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SearchResponse;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Provider that records every request and replies from a fixed script
    struct RecordingProvider {
        calls: Mutex<Vec<SearchRequest>>,
        fail_with: Option<String>,
    }

    impl RecordingProvider {
        fn ok() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_with: None,
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_with: Some(message.to_string()),
            }
        }
    }

    #[async_trait]
    impl SearchProvider for RecordingProvider {
        fn name(&self) -> &str {
            "recording"
        }

        async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
            self.calls.lock().unwrap().push(request.clone());
            if let Some(message) = &self.fail_with {
                return Err(anyhow!(message.clone()));
            }
            Ok(SearchResponse::try_from(json!({
                "query": request.query,
                "results": [{
                    "title": "Test Result",
                    "url": "https://example.com/test",
                    "content": "This is a test result content",
                    "score": 0.95
                }]
            }))?)
        }
    }

    #[tokio::test]
    async fn test_search_basic_uses_defaults() {
        let provider = Arc::new(RecordingProvider::ok());
        let gateway = SearchGateway::with_provider(provider.clone());

        let outcome = gateway.search_request(&SearchRequest::new("test query")).await;

        match outcome {
            SearchOutcome::Success(response) => {
                assert_eq!(response.results().len(), 1);
                assert_eq!(response.results[0].title, "Test Result");
            }
            SearchOutcome::Error { error } => panic!("unexpected error: {}", error),
        }

        let calls = provider.calls.lock().unwrap();
        assert_eq!(*calls, vec![SearchRequest::new("test query")]);
        assert_eq!(calls[0].max_results, 10);
        assert_eq!(calls[0].search_depth, "basic");
    }

    #[tokio::test]
    async fn test_search_with_parameters() {
        let provider = Arc::new(RecordingProvider::ok());
        let gateway = SearchGateway::with_provider(provider.clone());

        gateway.search("test query", 5, "advanced").await;

        let calls = provider.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].max_results, 5);
        assert_eq!(calls[0].search_depth, "advanced");
    }

    #[tokio::test]
    async fn test_provider_failure_becomes_error_value() {
        let provider = Arc::new(RecordingProvider::failing("connection refused"));
        let gateway = SearchGateway::with_provider(provider.clone());

        let outcome = gateway.search("test query", 10, "basic").await;

        assert_eq!(outcome, SearchOutcome::error("connection refused"));
        // No retry
        assert_eq!(provider.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_depth_is_passed_through() {
        let provider = Arc::new(RecordingProvider::ok());
        let gateway = SearchGateway::with_provider(provider.clone());

        gateway.search("q", 3, "deep").await;

        assert_eq!(provider.calls.lock().unwrap()[0].search_depth, "deep");
    }

    #[test]
    fn test_missing_api_key() {
        let config = TavilyConfig::default();
        assert!(matches!(
            SearchGateway::new(None, &config),
            Err(GatewayError::MissingApiKey)
        ));
        assert!(matches!(
            SearchGateway::new(Some(""), &config),
            Err(GatewayError::MissingApiKey)
        ));
        assert!(matches!(
            SearchGateway::new(Some("   "), &config),
            Err(GatewayError::MissingApiKey)
        ));
    }

    #[test]
    fn test_new_with_key() {
        let gateway = SearchGateway::new(Some("tvly-test"), &TavilyConfig::default()).unwrap();
        assert_eq!(gateway.provider_name(), "tavily");
    }
}
