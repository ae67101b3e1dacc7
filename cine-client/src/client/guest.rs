//! Guest state: sign-in, sign-up and session restore.

use shared::client::{LoginRequest, LoginResponse, RegisterRequest, UserInfo};
use shared::models::User;
use validator::Validate;

use crate::credential::{StoredToken, parse_jwt_email};
use crate::error::{ClientError, ClientResult};
use crate::types::{Authenticated, Guest};

use super::common::CineClient;
use super::http::{AuthPolicy, HttpClient};

impl CineClient<Guest> {
    /// Logs in with email and password.
    ///
    /// When the login response carries no profile, it is fetched with
    /// `GET /user/email?email=` using the new token.
    ///
    /// # Returns
    /// - `Ok(Authenticated)` on success
    /// - `Err((error, Guest))` on failure, returning the original client for retry
    pub async fn login(
        self,
        email: &str,
        password: &str,
    ) -> Result<CineClient<Authenticated>, (ClientError, Self)> {
        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        if let Err(errors) = request.validate() {
            return Err((errors.into(), self));
        }
        if let Err(e) = self.session.begin_login() {
            return Err((e, self));
        }

        tracing::info!(email = %request.email, "logging in");
        let result = self.authenticate(&request).await;
        match result {
            Ok((token, user)) => self.finish_login(token, user),
            Err(e) => {
                tracing::warn!(email = %request.email, error = %e, "login failed");
                // begin_login succeeded above, so the session is Authenticating
                let _ = self.session.fail_login();
                Err((e, self))
            }
        }
    }

    async fn authenticate(&self, request: &LoginRequest) -> ClientResult<(String, UserInfo)> {
        let response: LoginResponse = self
            .http
            .post("/auth/login", request, AuthPolicy::None)
            .await?;
        let user = match response.user {
            Some(user) => user,
            None => self.fetch_profile(&response.token, &request.email).await?,
        };
        Ok((response.token, user))
    }

    async fn fetch_profile(&self, token: &str, email: &str) -> ClientResult<UserInfo> {
        let user: User = self
            .http
            .get_query_with_token("/user/email", &[("email", email)], token)
            .await?;
        Ok(UserInfo {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        })
    }

    fn finish_login(
        self,
        token: String,
        user: UserInfo,
    ) -> Result<CineClient<Authenticated>, (ClientError, Self)> {
        if let Some(store) = &self.tokens
            && let Err(e) = store.save(&StoredToken::new(token.clone(), Some(user.clone())))
        {
            tracing::warn!(path = %store.path().display(), error = %e, "failed to persist token");
        }
        tracing::info!(user_id = %user.id, role = %user.role, "logged in");
        if let Err(e) = self.session.complete_login(token, user) {
            return Err((e, self));
        }
        Ok(self.transition())
    }

    /// Creates a customer account (`POST /auth/register`).
    ///
    /// The form is validated before any request is sent.
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<User> {
        request.validate()?;
        let user: User = self
            .http
            .post("/auth/register", request, AuthPolicy::None)
            .await
            .inspect_err(|e| tracing::warn!(email = %request.email, error = %e, "register failed"))?;
        tracing::info!(user_id = %user.id, "registered");
        Ok(user)
    }

    /// Signs in with a token from a previous run.
    ///
    /// Looks at the token store first, then at the configured token. The
    /// profile is re-read from the server, which also proves the token is
    /// still accepted; a rejected stored token is deleted.
    pub async fn restore_session(self) -> Result<CineClient<Authenticated>, (ClientError, Self)> {
        let stored = match self.stored_token() {
            Ok(stored) => stored,
            Err(e) => return Err((e, self)),
        };
        let Some(stored) = stored else {
            return Err((ClientError::Unauthorized("No saved session".into()), self));
        };
        let email = stored
            .user
            .as_ref()
            .map(|u| u.email.clone())
            .or_else(|| parse_jwt_email(&stored.token));
        let Some(email) = email else {
            return Err((
                ClientError::Unauthorized("Saved token has no profile, log in again".into()),
                self,
            ));
        };

        if let Err(e) = self.session.begin_login() {
            return Err((e, self));
        }
        let profile = self.fetch_profile(&stored.token, &email).await;
        match profile {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "session restored");
                self.finish_login(stored.token, user)
            }
            Err(e) => {
                let _ = self.session.fail_login();
                if matches!(e, ClientError::Unauthorized(_))
                    && let Some(store) = &self.tokens
                {
                    let _ = store.delete();
                }
                Err((e, self))
            }
        }
    }

    /// Deletes the saved token without contacting the server.
    ///
    /// Returns whether a token file was there to delete.
    pub fn forget_session(&self) -> ClientResult<bool> {
        let Some(store) = &self.tokens else {
            return Ok(false);
        };
        let existed = store.exists();
        store.delete()?;
        if existed {
            tracing::info!(path = %store.path().display(), "saved session forgotten");
        }
        Ok(existed)
    }

    fn stored_token(&self) -> ClientResult<Option<StoredToken>> {
        if let Some(store) = &self.tokens
            && let Some(stored) = store.load()?
        {
            return Ok(Some(stored));
        }
        Ok(self
            .config
            .token
            .as_ref()
            .map(|t| StoredToken::new(t.clone(), None))
            .filter(|t| !t.is_expired()))
    }
}
