//! Wire DTOs for the authentication endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::error::AuthError;
use crate::state::role::Role;

/// `POST {base}/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login payload.
///
/// `role` is kept raw so an unregistered role surfaces as
/// [`AuthError::UnknownRole`] rather than a generic decode failure.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub role: serde_json::Value,
    #[serde(default)]
    pub name: Option<String>,
}

impl LoginResponse {
    /// Resolve the role claimed by the backend.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::UnknownRole`] when the value is not a registered id.
    pub fn role(&self) -> Result<Role, AuthError> {
        serde_json::from_value::<Role>(self.role.clone()).map_err(|_| AuthError::UnknownRole(self.role.to_string()))
    }

    /// Bearer token, which must be non-blank for the session to be usable.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Decode`] for an empty or whitespace-only token.
    pub fn token(&self) -> Result<&str, AuthError> {
        let token = self.access_token.trim();
        if token.is_empty() {
            return Err(AuthError::Decode("empty access_token".to_owned()));
        }
        Ok(token)
    }

    /// Display name, falling back to an empty string when the backend omits it.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// `POST {base}/{role}/logout` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LogoutRequest {
    pub access_token: String,
}

/// Error body shape returned by the backend on non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
