//! Auth-session state and the session lifecycle that drives it.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthState` is the reactive mirror read by route guards and the layout
//! shell. `SessionManager` owns the transitions: restore on mount, login,
//! logout and the expiry check. It is generic over storage and the auth API so
//! the whole lifecycle runs natively in tests.
//!
//! STATE MACHINE
//! =============
//! `Initializing -> {Authenticated, Unauthenticated}` once storage has been
//! read, then `Authenticated <-> Unauthenticated` via login, logout and
//! expiry. Nothing returns to `Initializing`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::time::Duration;

use super::role::Role;
use super::session::{KeyValueStore, Session, SessionStore};
use crate::config::ClientConfig;
use crate::net::api::AuthApi;
use crate::net::error::AuthError;
use crate::net::types::LoginRequest;

/// Lifecycle phase of the auth context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    /// Storage has not been read yet.
    #[default]
    Initializing,
    Authenticated,
    Unauthenticated,
}

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub phase: AuthPhase,
    pub role: Option<Role>,
    pub display_name: Option<String>,
    /// `true` until the first storage read completes and while a login
    /// request is in flight.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { phase: AuthPhase::Initializing, role: None, display_name: None, loading: true }
    }
}

impl AuthState {
    #[must_use]
    pub fn authenticated(session: &Session) -> Self {
        Self {
            phase: AuthPhase::Authenticated,
            role: Some(session.role),
            display_name: session.display_name.clone(),
            loading: false,
        }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self { phase: AuthPhase::Unauthenticated, role: None, display_name: None, loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.phase == AuthPhase::Authenticated && self.role.is_some()
    }

    #[must_use]
    pub fn user_role(&self) -> Option<Role> {
        if self.is_authenticated() { self.role } else { None }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

/// Result of one expiry check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpiryCheck {
    /// No session held; nothing to do.
    Idle,
    Valid,
    /// Session had no expiry timestamp and was discarded.
    Missing,
    /// Session passed its expiry and was discarded.
    Expired,
}

/// Drives session transitions over a key/value store.
#[derive(Clone, Copy, Debug)]
pub struct SessionManager<S> {
    sessions: SessionStore<S>,
    check_interval: Duration,
}

impl<S: KeyValueStore> SessionManager<S> {
    pub fn new(store: S, config: &ClientConfig) -> Self {
        Self {
            sessions: SessionStore::new(store, config.session_ttl),
            check_interval: config.expiry_check_interval,
        }
    }

    #[must_use]
    pub fn store(&self) -> &SessionStore<S> {
        &self.sessions
    }

    /// State derived from whatever storage holds right now.
    #[must_use]
    pub fn restore(&self) -> AuthState {
        match self.sessions.load() {
            Some(session) => AuthState::authenticated(&session),
            None => AuthState::signed_out(),
        }
    }

    /// Exchange credentials for a persisted session.
    ///
    /// Emptiness of `username`/`password` is the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns the API error, [`AuthError::Decode`] for a blank token,
    /// [`AuthError::UnknownRole`] when the backend names an unregistered role,
    /// or a storage error. Storage is untouched on failure.
    pub async fn login<A: AuthApi + ?Sized>(
        &self,
        api: &A,
        username: &str,
        password: &str,
        now_ms: i64,
    ) -> Result<AuthState, AuthError> {
        let credentials = LoginRequest { username: username.to_owned(), password: password.to_owned() };
        let response = api.login(&credentials).await?;
        let token = response.token()?;
        let role = response.role()?;
        let session = self.sessions.save(token, role, response.display_name(), now_ms)?;
        Ok(AuthState::authenticated(&session))
    }

    /// Best-effort remote logout followed by an unconditional local clear.
    ///
    /// Returns the remote error, if any, for logging; the returned state is
    /// always signed out.
    pub async fn logout<A: AuthApi + ?Sized>(&self, api: &A) -> (AuthState, Option<AuthError>) {
        let remote = match self.sessions.load() {
            Some(session) => api.logout(session.role, &session.token).await.err(),
            None => None,
        };
        self.sessions.clear();
        (AuthState::signed_out(), remote)
    }

    /// Enforce the authenticated-implies-unexpired invariant.
    pub fn check_expiry(&self, now_ms: i64) -> ExpiryCheck {
        let Some(session) = self.sessions.load() else {
            return ExpiryCheck::Idle;
        };
        if session.expires_at.is_none() {
            self.sessions.clear();
            return ExpiryCheck::Missing;
        }
        if session.is_expired_at(now_ms) {
            self.sessions.clear();
            return ExpiryCheck::Expired;
        }
        ExpiryCheck::Valid
    }

    /// How long to sleep before the next check: until the expiry instant, but
    /// never longer than the configured interval.
    #[must_use]
    pub fn next_check_delay(&self, now_ms: i64) -> Duration {
        let until_expiry = self
            .sessions
            .load()
            .and_then(|session| session.expires_at)
            .map(|expires_at| {
                // Wake just past the instant so the strict `now > expires_at` check fires.
                let remaining = expires_at.saturating_sub(now_ms).saturating_add(1);
                Duration::from_millis(u64::try_from(remaining).unwrap_or(0))
            });
        match until_expiry {
            Some(delay) => delay.min(self.check_interval),
            None => self.check_interval,
        }
    }
}
