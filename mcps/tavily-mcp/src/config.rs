//! Configuration loading for tavily-mcp
//!
//! Configuration is layered, highest priority first:
//! 1. Command-line flags and their environment variables (see `main.rs`)
//! 2. Environment variable TAVILY_MCP_CONFIG_PATH pointing at a TOML file
//! 3. ~/.binks/tavily-mcp.toml
//! 4. Default values

use anyhow::Result;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// HTTP listener configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Tavily specific configuration
    #[serde(default)]
    pub tavily: TavilyConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,
    /// JSON document served verbatim at `GET /mcp-config`
    #[serde(default = "default_mcp_config_path")]
    pub mcp_config_path: PathBuf,
}

/// Tavily configuration
#[derive(Clone, Deserialize)]
pub struct TavilyConfig {
    /// API key; usually supplied through `--api-key` or TAVILY_API_KEY instead
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL of the Tavily API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Timeout for a single search call in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Values taken from the command line, each overriding the file when set
#[derive(Debug, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub api_key: Option<String>,
    pub mcp_config_path: Option<PathBuf>,
}

// Default value functions
fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_mcp_config_path() -> PathBuf {
    PathBuf::from("tavily_mcp_config.json")
}

fn default_base_url() -> String {
    "https://api.tavily.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            mcp_config_path: default_mcp_config_path(),
        }
    }
}

impl Default for TavilyConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl fmt::Debug for TavilyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TavilyConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl TavilyConfig {
    /// The configured API key, treating an empty or blank value as missing
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_path();

        let config = if let Some(path) = config_path {
            if path.exists() {
                tracing::info!("Loading config from: {}", path.display());
                let content = std::fs::read_to_string(&path)?;
                Self::from_toml_str(&content)?
            } else {
                tracing::info!("Config file not found, using defaults");
                Self::default()
            }
        } else {
            tracing::info!("No config path specified, using defaults");
            Self::default()
        };

        Ok(config)
    }

    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply command-line values on top of the loaded configuration
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(host) = overrides.host {
            self.server.host = host;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(path) = overrides.mcp_config_path {
            self.server.mcp_config_path = path;
        }
        // A blank key on the command line must not hide one from the file
        if let Some(key) = overrides.api_key.filter(|k| !k.trim().is_empty()) {
            self.tavily.api_key = Some(key);
        }
    }

    /// Find the configuration file path
    fn find_config_path() -> Option<PathBuf> {
        // 1. Check environment variable
        if let Ok(path) = std::env::var("TAVILY_MCP_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        // 2. Check ~/.binks/tavily-mcp.toml
        if let Ok(home) = std::env::var("HOME") {
            let path = PathBuf::from(home).join(".binks").join("tavily-mcp.toml");
            return Some(path);
        }

        None
    }
}
