//! Type markers for CineClient's typestate pattern, plus session data.
//!
//! The state markers enforce at compile time that account-only calls are
//! made on a signed-in client. The runtime [`SessionPhase`] mirrors the same
//! lifecycle for UI code that only holds a [`crate::SessionContext`].

use std::marker::PhantomData;

use serde::{Deserialize, Serialize};
use shared::client::UserInfo;

// ============================================================================
// State Markers
// ============================================================================

/// Guest state - no token, only public catalog calls.
///
/// Available transitions:
/// - `login()` / `restore_session()` -> Authenticated
#[derive(Debug, Clone, Copy, Default)]
pub struct Guest;

/// Authenticated state - bearer token attached to every request.
///
/// Available transitions:
/// - `logout()` -> Guest
#[derive(Debug, Clone, Copy)]
pub struct Authenticated;

/// Sealed trait for client states.
pub trait ClientState: private_state::Sealed + Send + Sync + 'static {}
impl ClientState for Guest {}
impl ClientState for Authenticated {}

mod private_state {
    pub trait Sealed {}
    impl Sealed for super::Guest {}
    impl Sealed for super::Authenticated {}
}

// ============================================================================
// Session Phase
// ============================================================================

/// Runtime session lifecycle
///
/// `Unauthenticated -> Authenticating -> Authenticated -> (logout) -> Unauthenticated`.
/// A failed login goes from `Authenticating` back to `Unauthenticated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    #[default]
    Unauthenticated,
    Authenticating,
    Authenticated,
}

// ============================================================================
// Client Status
// ============================================================================

/// Runtime status information for the client.
#[derive(Debug, Clone, Default)]
pub struct ClientStatus {
    pub phase: SessionPhase,
    /// Whether a token file is configured and present
    pub has_stored_token: bool,
    /// Whether the client holds a bearer token
    pub is_authenticated: bool,
}

// ============================================================================
// Session Data
// ============================================================================

/// Session data held while the client runs.
#[derive(Debug, Clone, Default)]
pub struct SessionData {
    pub phase: SessionPhase,
    /// Bearer token for HTTP API authentication.
    pub token: Option<String>,
    /// Current user information after login.
    pub user_info: Option<UserInfo>,
}

impl SessionData {
    /// Creates a new empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the token and user info after successful login.
    pub fn set_login(&mut self, token: String, user: UserInfo) {
        self.phase = SessionPhase::Authenticated;
        self.token = Some(token);
        self.user_info = Some(user);
    }

    /// Clears the session data on logout.
    pub fn clear(&mut self) {
        self.phase = SessionPhase::Unauthenticated;
        self.token = None;
        self.user_info = None;
    }

    /// Returns the token if available.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the current user info if available.
    pub fn user(&self) -> Option<&UserInfo> {
        self.user_info.as_ref()
    }
}

// ============================================================================
// Phantom State Wrapper
// ============================================================================

/// Internal wrapper to hold the phantom state marker.
#[derive(Debug)]
pub(crate) struct StateMarker<S> {
    pub(crate) _state: PhantomData<S>,
}

impl<S> StateMarker<S> {
    pub(crate) fn new() -> Self {
        Self {
            _state: PhantomData,
        }
    }
}

impl<S> Clone for StateMarker<S> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<S> Default for StateMarker<S> {
    fn default() -> Self {
        Self::new()
    }
}
