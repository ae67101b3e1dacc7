//! Builder for `CineClient` construction.

use std::path::PathBuf;

use crate::config::ClientConfig;
use crate::credential::TokenStore;
use crate::error::ClientResult;
use crate::session::SessionContext;
use crate::types::{Guest, StateMarker};

use super::CineClient;
use super::http::NetworkHttpClient;

/// Builder for `CineClient<Guest>`.
///
/// Starts from [`ClientConfig::default`]; use [`CineClientBuilder::config`]
/// to start from an environment-derived config instead.
#[derive(Debug, Clone, Default)]
pub struct CineClientBuilder {
    config: ClientConfig,
}

impl CineClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    pub fn timeout(mut self, seconds: u64) -> Self {
        self.config.timeout = seconds;
        self
    }

    /// Persist the bearer token at `path` across runs
    pub fn token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.token_path = Some(path.into());
        self
    }

    /// Token to try in `restore_session()` when nothing is stored
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config.token = Some(token.into());
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.config.page_size = page_size;
        self
    }

    /// # Errors
    ///
    /// Returns `ClientError::Config` for an invalid configuration and
    /// `ClientError::Http` if the HTTP client cannot be created.
    pub fn build(self) -> ClientResult<CineClient<Guest>> {
        self.config.validate()?;
        let session = SessionContext::new();
        let http = NetworkHttpClient::new(&self.config, session.clone())?;
        let tokens = self.config.token_path.clone().map(TokenStore::new);
        tracing::debug!(base_url = %self.config.base_url, "client built");
        Ok(CineClient {
            marker: StateMarker::new(),
            http,
            session,
            tokens,
            config: self.config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SessionPhase;

    #[test]
    fn test_build_guest_client() {
        let client = CineClient::builder()
            .base_url("http://cine.local")
            .timeout(5)
            .page_size(20)
            .build()
            .unwrap();
        assert_eq!(client.config().base_url, "http://cine.local");
        assert_eq!(client.list_view().page_size(), 20);
        let status = client.status();
        assert_eq!(status.phase, SessionPhase::Unauthenticated);
        assert!(!status.has_stored_token);
    }

    #[test]
    fn test_build_rejects_bad_url() {
        assert!(CineClient::builder().base_url("cine.local").build().is_err());
    }
}
