//! Tavily MCP Library
//!
//! HTTP server that forwards search requests to the Tavily API and reshapes
//! the results into the MCP response envelope.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use tavily_mcp::{create_router, AppState, SearchGateway, TavilyConfig};
//!
//! let gateway = SearchGateway::new(Some("tvly-..."), &TavilyConfig::default())?;
//! let app = create_router(AppState::new(gateway, "tavily_mcp_config.json"));
//! ```
//!
//! # Configuration
//! Set `TAVILY_API_KEY` env var or configure in `~/.binks/tavily-mcp.toml`

pub mod backends;
pub mod config;
pub mod gateway;
pub mod server;
pub mod types;

// Re-export main server types
pub use config::{Config, TavilyConfig};
pub use gateway::{GatewayError, SearchGateway};
pub use server::{create_router, AppState};

// Re-export request/response types for direct API usage
pub use types::{PayloadError, SearchOutcome, SearchRequest, SearchResponse};
