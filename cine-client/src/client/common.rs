//! Core `CineClient` definition and methods shared by every state.

use shared::models::User;

use crate::config::ClientConfig;
use crate::credential::TokenStore;
use crate::error::ClientResult;
use crate::listing::ListView;
use crate::resource::{Employees, Movies, Products, Resource, Showtimes};
use crate::session::SessionContext;
use crate::store::ResourceStore;
use crate::types::{ClientState, ClientStatus, Guest, StateMarker};

use super::builder::CineClientBuilder;
use super::http::{AuthPolicy, HttpClient, NetworkHttpClient};

// ============================================================================
// Core CineClient Definition
// ============================================================================

/// Type-safe client for the cinema REST API.
///
/// `CineClient` uses the typestate pattern:
/// - **Guest**: catalog reads, `login()`, `register()`, `restore_session()`.
/// - **Authenticated**: bearer token on every call, account and staff stores,
///   settings and chat. `logout()` goes back to `Guest`.
///
/// # Example
///
/// ```no_run
/// use cine_client::CineClient;
///
/// # async fn example() -> Result<(), cine_client::ClientError> {
/// let client = CineClient::builder()
///     .base_url("http://localhost:3000")
///     .build()?;
///
/// let client = client.login("ana@cine.io", "secret123").await.map_err(|(e, _)| e)?;
/// let mut reviews = client.reviews();
/// reviews.fetch_all().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CineClient<S: ClientState = Guest> {
    #[allow(dead_code)] // Used for typestate pattern at compile time
    pub(crate) marker: StateMarker<S>,
    pub(crate) http: NetworkHttpClient,
    pub(crate) session: SessionContext,
    pub(crate) tokens: Option<TokenStore>,
    pub(crate) config: ClientConfig,
}

// ============================================================================
// Builder Entry Point
// ============================================================================

impl CineClient<Guest> {
    pub fn builder() -> CineClientBuilder {
        CineClientBuilder::new()
    }
}

// ============================================================================
// Common Methods (Available in All States)
// ============================================================================

impl<S: ClientState> CineClient<S> {
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Shared session handle; clones observe login and logout
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn http(&self) -> &NetworkHttpClient {
        &self.http
    }

    pub fn token(&self) -> Option<String> {
        self.session.token()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn status(&self) -> ClientStatus {
        ClientStatus {
            phase: self.session.phase(),
            has_stored_token: self.tokens.as_ref().is_some_and(TokenStore::exists),
            is_authenticated: self.is_authenticated(),
        }
    }

    /// Empty list state using the configured page size and window
    pub fn list_view(&self) -> ListView {
        ListView::new()
            .with_page_size(self.config.page_size)
            .with_page_window(self.config.page_window)
    }

    pub(crate) fn store_for<R: Resource>(&self, resource: R) -> ResourceStore<R> {
        ResourceStore::new(resource, self.http.clone())
    }

    pub fn movies(&self) -> ResourceStore<Movies> {
        self.store_for(Movies)
    }

    pub fn showtimes(&self) -> ResourceStore<Showtimes> {
        self.store_for(Showtimes)
    }

    pub fn products(&self) -> ResourceStore<Products> {
        self.store_for(Products)
    }

    /// Staff directory read without a token
    pub fn employee_directory(&self) -> ResourceStore<Employees> {
        self.store_for(Employees::public_listing())
    }

    /// `GET /user/email?email=`
    pub async fn user_by_email(&self, email: &str) -> ClientResult<User> {
        let auth = if self.is_authenticated() {
            AuthPolicy::Bearer
        } else {
            AuthPolicy::None
        };
        self.http
            .get_query("/user/email", &[("email", email)], auth)
            .await
    }

    /// Transforms the client to a new state (internal use only).
    pub(crate) fn transition<NewS: ClientState>(self) -> CineClient<NewS> {
        CineClient {
            marker: StateMarker::new(),
            http: self.http,
            session: self.session,
            tokens: self.tokens,
            config: self.config,
        }
    }
}
