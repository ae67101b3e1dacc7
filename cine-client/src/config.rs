//! Client configuration

use std::path::PathBuf;

use crate::error::{ClientError, ClientResult};

/// Default rows per list page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default width of the page-number window
pub const DEFAULT_PAGE_WINDOW: usize = 5;

/// Client configuration for connecting to the cinema REST API
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | CINE_API_URL | http://localhost:3000 | REST API base URL |
/// | CINE_TIMEOUT_SECS | 30 | Per-request timeout |
/// | CINE_TOKEN_PATH | (unset) | JSON file holding the bearer token |
/// | CINE_PAGE_SIZE | 10 | Rows per list page |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:3000")
    pub base_url: String,

    /// Bearer token to start with (restored sessions)
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Where the bearer token is persisted between runs
    pub token_path: Option<PathBuf>,

    /// Rows per list page
    pub page_size: usize,

    /// Width of the page-number window
    pub page_window: usize,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
            token_path: None,
            page_size: DEFAULT_PAGE_SIZE,
            page_window: DEFAULT_PAGE_WINDOW,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::new(
            std::env::var("CINE_API_URL").unwrap_or_else(|_| "http://localhost:3000".into()),
        );
        config.timeout = std::env::var("CINE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);
        config.token_path = std::env::var("CINE_TOKEN_PATH").ok().map(PathBuf::from);
        config.page_size = std::env::var("CINE_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        config
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the token file path
    pub fn with_token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_path = Some(path.into());
        self
    }

    /// Set the list page size
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Check the values that would otherwise fail late
    pub fn validate(&self) -> ClientResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "base_url must start with http:// or https://, got {}",
                self.base_url
            )));
        }
        if self.timeout == 0 {
            return Err(ClientError::Config("timeout must be positive".into()));
        }
        if self.page_size == 0 || self.page_window == 0 {
            return Err(ClientError::Config(
                "page_size and page_window must be positive".into(),
            ));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000")
    }
}
