//! HTTP transport
//!
//! Every REST call of the client goes through [`HttpClient`]. The network
//! implementation reads the bearer token from the shared [`SessionContext`]
//! at request time, so a login performed through one handle is visible to
//! every store holding a clone.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::ApiErrorBody;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::session::SessionContext;

/// Whether a call carries the bearer token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPolicy {
    /// `Authorization: Bearer <token>`; fails fast without a token
    Bearer,
    /// Anonymous request
    None,
}

/// HTTP client trait
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str, auth: AuthPolicy) -> ClientResult<T>;

    async fn get_query<T: DeserializeOwned, Q: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        query: &Q,
        auth: AuthPolicy,
    ) -> ClientResult<T>;

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        auth: AuthPolicy,
    ) -> ClientResult<T>;

    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        auth: AuthPolicy,
    ) -> ClientResult<T>;

    /// DELETE; the response body is ignored
    async fn delete(&self, path: &str, auth: AuthPolicy) -> ClientResult<()>;
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    session: SessionContext,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig, session: SessionContext) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, req: RequestBuilder, auth: AuthPolicy) -> ClientResult<RequestBuilder> {
        match auth {
            AuthPolicy::None => Ok(req),
            AuthPolicy::Bearer => {
                let token = self
                    .session
                    .token()
                    .ok_or_else(|| ClientError::Unauthorized("Not signed in".into()))?;
                Ok(req.bearer_auth(token))
            }
        }
    }

    async fn send(&self, req: RequestBuilder, auth: AuthPolicy) -> ClientResult<reqwest::Response> {
        let response = self.authorize(req, auth)?.send().await?;
        tracing::debug!(status = %response.status(), url = %response.url(), "response");
        check_status(response).await
    }

    /// GET with an explicit token, for calls made before the session holds one
    pub async fn get_query_with_token<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
        token: &str,
    ) -> ClientResult<T> {
        let req = self
            .client
            .get(self.url(path))
            .query(query)
            .bearer_auth(token);
        self.handle_response(req, AuthPolicy::None).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        auth: AuthPolicy,
    ) -> ClientResult<T> {
        let response = self.send(req, auth).await?;
        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| ClientError::InvalidResponse(format!("{e}: {}", truncate(&text))))
    }
}

/// Map a non-2xx response to a [`ClientError`]
///
/// The backend's `{statusCode, message, error}` body supplies the message;
/// bodies that do not parse are used as raw text.
async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&text)
        .map(|body| body.text())
        .unwrap_or(text);
    Err(match status {
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized(message),
        StatusCode::FORBIDDEN => ClientError::Forbidden(message),
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            ClientError::Validation(message)
        }
        StatusCode::CONFLICT => ClientError::Conflict(message),
        _ => ClientError::Api {
            status: status.as_u16(),
            message,
        },
    })
}

fn truncate(text: &str) -> &str {
    match text.char_indices().nth(200) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str, auth: AuthPolicy) -> ClientResult<T> {
        let req = self.client.get(self.url(path));
        self.handle_response(req, auth).await
    }

    async fn get_query<T: DeserializeOwned, Q: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        query: &Q,
        auth: AuthPolicy,
    ) -> ClientResult<T> {
        let req = self.client.get(self.url(path)).query(query);
        self.handle_response(req, auth).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        auth: AuthPolicy,
    ) -> ClientResult<T> {
        let req = self.client.post(self.url(path)).json(body);
        self.handle_response(req, auth).await
    }

    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        auth: AuthPolicy,
    ) -> ClientResult<T> {
        let req = self.client.patch(self.url(path)).json(body);
        self.handle_response(req, auth).await
    }

    async fn delete(&self, path: &str, auth: AuthPolicy) -> ClientResult<()> {
        let req = self.client.delete(self.url(path));
        self.send(req, auth).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let config = ClientConfig::new("http://localhost:3000/");
        let http = NetworkHttpClient::new(&config, SessionContext::new()).unwrap();
        assert_eq!(http.base_url(), "http://localhost:3000");
        assert_eq!(http.url("/movies"), "http://localhost:3000/movies");
        assert_eq!(http.url("user/role/admin"), "http://localhost:3000/user/role/admin");
    }

    #[test]
    fn test_bearer_without_token_fails_fast() {
        let http = NetworkHttpClient::new(&ClientConfig::default(), SessionContext::new()).unwrap();
        let req = http.client.get(http.url("/employees"));
        assert!(matches!(
            http.authorize(req, AuthPolicy::Bearer),
            Err(ClientError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_truncate_long_bodies() {
        let long = "x".repeat(500);
        assert_eq!(truncate(&long).len(), 200);
        assert_eq!(truncate("short"), "short");
    }
}
