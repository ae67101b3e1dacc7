//! Authenticated state: account, staff stores, settings and chat.

use shared::client::UserInfo;
use shared::models::{ChatReply, ChatRequest, Role, Settings, SettingsUpdate};

use crate::error::{ClientError, ClientResult};
use crate::resource::{Employees, Resource, Reviews, Users};
use crate::store::ResourceStore;
use crate::types::{Authenticated, Guest};

use super::common::CineClient;
use super::http::{AuthPolicy, HttpClient};

impl CineClient<Authenticated> {
    /// Returns the signed-in user.
    pub fn current_user(&self) -> ClientResult<UserInfo> {
        self.session
            .user()
            .ok_or_else(|| ClientError::InvalidState("No user info available".into()))
    }

    /// Store for any resource; the token is attached where the resource asks for it
    pub fn store<R: Resource>(&self, resource: R) -> ResourceStore<R> {
        self.store_for(resource)
    }

    pub fn users(&self, role: Role) -> ResourceStore<Users> {
        self.store_for(Users::new(role))
    }

    pub fn employees(&self) -> ResourceStore<Employees> {
        self.store_for(Employees::new())
    }

    pub fn reviews(&self) -> ResourceStore<Reviews> {
        self.store_for(Reviews)
    }

    /// `GET /setting`
    pub async fn settings(&self) -> ClientResult<Settings> {
        self.http.get("/setting", AuthPolicy::Bearer).await
    }

    /// `PATCH /setting`, returning the server's merged settings
    pub async fn update_settings(&self, changes: &SettingsUpdate) -> ClientResult<Settings> {
        let settings: Settings = self
            .http
            .patch("/setting", changes, AuthPolicy::Bearer)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "settings update failed"))?;
        tracing::info!(ticket_price = %settings.ticket_price, "settings updated");
        Ok(settings)
    }

    /// `POST /chatbot`
    pub async fn chat(&self, message: &str) -> ClientResult<ChatReply> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ClientError::Validation("Message must not be empty".into()));
        }
        let request = ChatRequest {
            message: message.to_string(),
        };
        self.http.post("/chatbot", &request, AuthPolicy::Bearer).await
    }

    /// Ends the session and forgets the stored token.
    ///
    /// There is no server call; the token simply stops being sent.
    pub fn logout(self) -> CineClient<Guest> {
        if let Err(e) = self.session.logout() {
            tracing::warn!(error = %e, "session was not authenticated at logout");
        }
        if let Some(store) = &self.tokens
            && let Err(e) = store.delete()
        {
            tracing::warn!(path = %store.path().display(), error = %e, "failed to delete token");
        }
        tracing::info!("logged out");
        self.transition()
    }
}
