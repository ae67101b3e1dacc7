//! Shared session context
//!
//! One `SessionContext` is created per client and cloned into every store
//! and the HTTP transport. Clones share state.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use shared::client::UserInfo;

use crate::error::{ClientError, ClientResult};
use crate::types::{SessionData, SessionPhase};

/// Cloneable handle over the current session
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    inner: Arc<RwLock<SessionData>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock only means a writer panicked mid-update; the data is
    // plain values so reading it afterwards is fine.
    fn read(&self) -> RwLockReadGuard<'_, SessionData> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionData> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn phase(&self) -> SessionPhase {
        self.read().phase
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase() == SessionPhase::Authenticated
    }

    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.read().user_info.clone()
    }

    /// Snapshot of the session data
    pub fn snapshot(&self) -> SessionData {
        self.read().clone()
    }

    /// `Unauthenticated -> Authenticating`
    pub fn begin_login(&self) -> ClientResult<()> {
        let mut data = self.write();
        match data.phase {
            SessionPhase::Unauthenticated => {
                data.phase = SessionPhase::Authenticating;
                Ok(())
            }
            phase => Err(illegal("begin login", phase)),
        }
    }

    /// `Authenticating -> Authenticated`
    pub fn complete_login(&self, token: String, user: UserInfo) -> ClientResult<()> {
        let mut data = self.write();
        match data.phase {
            SessionPhase::Authenticating => {
                tracing::debug!(user_id = %user.id, role = %user.role, "session authenticated");
                data.set_login(token, user);
                Ok(())
            }
            phase => Err(illegal("complete login", phase)),
        }
    }

    /// `Authenticating -> Unauthenticated`
    pub fn fail_login(&self) -> ClientResult<()> {
        let mut data = self.write();
        match data.phase {
            SessionPhase::Authenticating => {
                data.clear();
                Ok(())
            }
            phase => Err(illegal("fail login", phase)),
        }
    }

    /// `Authenticated -> Unauthenticated`
    pub fn logout(&self) -> ClientResult<()> {
        let mut data = self.write();
        match data.phase {
            SessionPhase::Authenticated => {
                data.clear();
                Ok(())
            }
            phase => Err(illegal("logout", phase)),
        }
    }
}

fn illegal(action: &str, phase: SessionPhase) -> ClientError {
    ClientError::InvalidState(format!("cannot {action} while {phase:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Role;

    fn user() -> UserInfo {
        UserInfo {
            id: "u1".into(),
            name: "Ana".into(),
            email: "ana@cine.io".into(),
            role: Role::Customer,
        }
    }

    #[test]
    fn test_full_lifecycle() {
        let session = SessionContext::new();
        assert_eq!(session.phase(), SessionPhase::Unauthenticated);

        session.begin_login().unwrap();
        assert_eq!(session.phase(), SessionPhase::Authenticating);
        assert!(session.token().is_none());

        session.complete_login("tok".into(), user()).unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("tok"));
        assert_eq!(session.user().unwrap().id, "u1");

        session.logout().unwrap();
        assert_eq!(session.phase(), SessionPhase::Unauthenticated);
        assert!(session.token().is_none());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_failed_login_returns_to_unauthenticated() {
        let session = SessionContext::new();
        session.begin_login().unwrap();
        session.fail_login().unwrap();
        assert_eq!(session.phase(), SessionPhase::Unauthenticated);
    }

    #[test]
    fn test_illegal_transitions_rejected() {
        let session = SessionContext::new();
        assert!(matches!(session.logout(), Err(ClientError::InvalidState(_))));
        assert!(matches!(session.fail_login(), Err(ClientError::InvalidState(_))));
        assert!(matches!(
            session.complete_login("tok".into(), user()),
            Err(ClientError::InvalidState(_))
        ));

        session.begin_login().unwrap();
        assert!(matches!(session.begin_login(), Err(ClientError::InvalidState(_))));
        assert!(matches!(session.logout(), Err(ClientError::InvalidState(_))));
    }

    #[test]
    fn test_clones_share_state() {
        let session = SessionContext::new();
        let other = session.clone();
        session.begin_login().unwrap();
        session.complete_login("tok".into(), user()).unwrap();
        assert_eq!(other.token().as_deref(), Some("tok"));
    }
}
