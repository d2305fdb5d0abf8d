//! REST calls against the external invoice backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: calls return
//! [`AuthError::Unavailable`] since the backend is only reachable from the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is mapped into [`AuthError`]; nothing here panics or reloads
//! the page. Callers decide how to display the message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::error::AuthError;
#[cfg(any(test, feature = "hydrate"))]
use super::types::ApiErrorBody;
use super::types::{LoginRequest, LoginResponse};
use crate::state::role::Role;

/// Authentication endpoints, abstracted so the session lifecycle can be driven
/// by a fake backend in tests.
#[async_trait(?Send)]
pub trait AuthApi {
    /// `POST {base}/login`.
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, AuthError>;
    /// `POST {base}/{role-slug}/logout` with the bearer token.
    async fn logout(&self, role: Role, token: &str) -> Result<(), AuthError>;
}

/// `{base}/login`.
#[must_use]
pub fn login_endpoint(base: &str) -> String {
    format!("{}/login", base.trim_end_matches('/'))
}

/// Role-scoped API path: `{base}/{role-slug}/{path}`.
#[must_use]
pub fn role_endpoint(base: &str, role: Role, path: &str) -> String {
    format!("{}/{}/{}", base.trim_end_matches('/'), role.slug(), path.trim_start_matches('/'))
}

/// `Authorization` header value for a bearer token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Turn a non-2xx response into an error, preferring the backend's message.
#[cfg(any(test, feature = "hydrate"))]
fn failure_from_body(status: u16, body: &str) -> AuthError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .map(|m| m.trim().to_owned())
        .filter(|m| !m.is_empty());
    match message {
        Some(message) => AuthError::Rejected { status, message },
        None => AuthError::Status(status),
    }
}

/// [`AuthApi`] over HTTP.
#[derive(Clone, Copy, Debug)]
pub struct HttpAuthApi {
    base: &'static str,
}

impl HttpAuthApi {
    #[must_use]
    pub fn new(base: &'static str) -> Self {
        Self { base }
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&login_endpoint(self.base))
                .json(credentials)
                .map_err(|e| AuthError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;
            if !resp.ok() {
                let body = resp.text().await.unwrap_or_default();
                return Err(failure_from_body(resp.status(), &body));
            }
            resp.json::<LoginResponse>()
                .await
                .map_err(|e| AuthError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.base, credentials);
            Err(AuthError::Unavailable)
        }
    }

    async fn logout(&self, role: Role, token: &str) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let body = super::types::LogoutRequest { access_token: token.to_owned() };
            let resp = gloo_net::http::Request::post(&role_endpoint(self.base, role, "logout"))
                .header("Authorization", &bearer(token))
                .json(&body)
                .map_err(|e| AuthError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;
            if !resp.ok() {
                let body = resp.text().await.unwrap_or_default();
                return Err(failure_from_body(resp.status(), &body));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.base, role, token);
            Err(AuthError::Unavailable)
        }
    }
}
