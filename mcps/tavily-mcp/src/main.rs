//! Tavily MCP Server
//!
//! Web search via the Tavily API, exposed over HTTP.
//!
//! # Configuration
//! Set `TAVILY_API_KEY` env var (or `--api-key`) and optionally configure
//! in `~/.binks/tavily-mcp.toml`

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use tavily_mcp::config::{Config, Overrides};
use tavily_mcp::{create_router, AppState, SearchGateway};

/// Tavily MCP Server
#[derive(Debug, Parser)]
#[command(name = "tavily-mcp", version, about)]
struct Args {
    /// Host to bind the server to [default: localhost]
    #[arg(long, env = "TAVILY_MCP_HOST")]
    host: Option<String>,

    /// Port to bind the server to [default: 5000]
    #[arg(long, env = "TAVILY_MCP_PORT")]
    port: Option<u16>,

    /// Tavily API key
    #[arg(long, env = "TAVILY_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// JSON document served at /mcp-config [default: tavily_mcp_config.json]
    #[arg(long = "mcp-config", env = "TAVILY_MCP_CONFIG_DOC")]
    mcp_config: Option<PathBuf>,
}

impl From<Args> for Overrides {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            api_key: args.api_key,
            mcp_config_path: args.mcp_config,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    mcp_common::init_tracing("tavily_mcp")?;

    tracing::info!("Starting Tavily MCP Server");

    let mut config = Config::load()?;
    config.apply(args.into());

    let gateway = match SearchGateway::new(config.tavily.api_key(), &config.tavily) {
        Ok(gateway) => gateway,
        Err(e) => {
            tracing::error!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    tracing::info!("Using {} backend", gateway.provider_name());
    tracing::info!(
        "Serving MCP config from: {}",
        config.server.mcp_config_path.display()
    );

    let state = AppState::new(gateway, config.server.mcp_config_path.clone());
    let app = create_router(state);

    tracing::info!(
        "Starting Tavily MCP server on {}:{}",
        config.server.host,
        config.server.port
    );
    mcp_common::serve_http(app, &config.server.host, config.server.port).await?;

    Ok(ExitCode::SUCCESS)
}
