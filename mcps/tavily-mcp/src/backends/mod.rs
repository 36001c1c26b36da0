//! Search backend implementations
//!
//! This module provides a trait-based abstraction for search providers.
//! Currently supports Tavily (https://tavily.com).

use anyhow::Result;
use async_trait::async_trait;

use crate::types::{SearchRequest, SearchResponse};

pub mod tavily;

/// Trait for search providers
///
/// A provider performs exactly one remote call per `search` and reports any
/// failure as an error; retrying and error shaping are the caller's concern.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Get the name of this provider
    fn name(&self) -> &str;

    /// Perform a web search
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse>;
}
