//! Token persistence
//!
//! The bearer token is kept in a small JSON file so a later run can restore
//! the session without asking for the password again.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use shared::client::UserInfo;

use crate::error::ClientResult;

/// Persisted session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredToken {
    pub token: String,
    /// Unix seconds, taken from the JWT `exp` claim when present
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

impl StoredToken {
    pub fn new(token: impl Into<String>, user: Option<UserInfo>) -> Self {
        let token = token.into();
        let expires_at = parse_jwt_exp(&token);
        Self {
            token,
            expires_at,
            user,
        }
    }

    /// Tokens without an `exp` claim never expire locally; the server still
    /// rejects them with 401 when they are stale.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp())
    }

    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at.is_some_and(|exp| now >= exp)
    }
}

/// Decode the JWT payload without verifying the signature
pub fn jwt_claims(token: &str) -> Option<serde_json::Value> {
    // header.payload.signature
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
    let payload_bytes = URL_SAFE_NO_PAD.decode(parts[1]).ok()?;
    serde_json::from_slice(&payload_bytes).ok()
}

/// `exp` claim in Unix seconds
pub fn parse_jwt_exp(token: &str) -> Option<i64> {
    jwt_claims(token)?.get("exp")?.as_i64()
}

/// `email` claim, used to look up the profile of a bare token
pub fn parse_jwt_email(token: &str) -> Option<String> {
    jwt_claims(token)?
        .get("email")?
        .as_str()
        .map(String::from)
}

/// JSON file holding one [`StoredToken`]
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn save(&self, token: &StoredToken) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(token)?;
        fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), "token saved");
        Ok(())
    }

    /// Load the stored token
    ///
    /// A missing file is `Ok(None)`. An expired token is deleted and also
    /// reported as `Ok(None)`.
    pub fn load(&self) -> ClientResult<Option<StoredToken>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)?;
        let stored: StoredToken = serde_json::from_str(&json)?;
        if stored.is_expired() {
            tracing::info!(path = %self.path.display(), "stored token expired, discarding");
            self.delete()?;
            return Ok(None);
        }
        Ok(Some(stored))
    }

    pub fn delete(&self) -> ClientResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
