//! Tavily backend
//!
//! Implements the SearchProvider trait against the Tavily search API.
//! See: https://docs.tavily.com/documentation/api-reference/endpoint/search

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use super::SearchProvider;
use crate::config::TavilyConfig;
use crate::types::{SearchRequest, SearchResponse};

/// Tavily backend
pub struct TavilyBackend {
    client: Client,
    api_key: String,
    base_url: String,
}

// Tavily API request body
#[derive(Debug, Serialize)]
struct TavilySearchRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: i64,
    search_depth: &'a str,
}

impl TavilyBackend {
    pub fn new(api_key: impl Into<String>, config: &TavilyConfig) -> reqwest::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("tavily-mcp/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl SearchProvider for TavilyBackend {
    fn name(&self) -> &str {
        "tavily"
    }

    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let url = format!("{}/search", self.base_url);

        let body = TavilySearchRequest {
            api_key: &self.api_key,
            query: &request.query,
            max_results: request.max_results,
            search_depth: &request.search_depth,
        };

        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow!("Tavily API error {}: {}", status, text));
        }

        let search_response: SearchResponse = response.json().await?;
        Ok(search_response)
    }
}
