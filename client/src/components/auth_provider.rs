//! Process-wide auth context and its provider component.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthProvider` is mounted once at the application root. It provides a
//! single `AuthContext` to every route, restores the persisted session after
//! hydration and runs the expiry loop for as long as it stays mounted.
//!
//! TRADE-OFFS
//! ==========
//! The server render always sees the `Initializing` state (local storage only
//! exists in the browser), so guards render nothing until the client has read
//! storage. That costs one frame of blank content but never flashes a
//! "logged out" redirect at a signed-in user.

#[cfg(test)]
#[path = "auth_provider_test.rs"]
mod auth_provider_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::api::HttpAuthApi;
use crate::net::error::AuthError;
use crate::routes::ROOT_PATH;
use crate::state::auth::{AuthState, ExpiryCheck, SessionManager};
use crate::state::session::{BrowserStore, KeyValueStore};
use crate::state::ui::NoticeState;
use crate::util::clock::now_millis;
use crate::util::location::hard_navigate;

/// Handle to the session lifecycle, shared through Leptos context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
    pub notices: RwSignal<NoticeState>,
    sessions: SessionManager<BrowserStore>,
    api: HttpAuthApi,
}

impl AuthContext {
    #[must_use]
    pub fn new(config: &ClientConfig, notices: RwSignal<NoticeState>) -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
            notices,
            sessions: SessionManager::new(BrowserStore, config),
            api: HttpAuthApi::new(config.api_base),
        }
    }

    /// Read storage and leave the `Initializing` phase.
    pub fn restore(self) {
        let restored = self.sessions.restore();
        log::info!("session restored: authenticated={}", restored.is_authenticated());
        self.state.set(restored);
    }

    /// Sign in; on failure the error is returned for the caller to display.
    ///
    /// # Errors
    ///
    /// Propagates [`AuthError`] from the backend call or from storage.
    pub async fn login(self, username: String, password: String) -> Result<(), AuthError> {
        self.state.update(|s| s.loading = true);
        let outcome = self.sessions.login(&self.api, &username, &password, now_millis()).await;
        match &outcome {
            Ok(next) => log::info!("login succeeded for role {:?}", next.role),
            Err(e) => log::warn!("login failed: {e}"),
        }
        self.state.update(|s| *s = settle_login(s, &outcome));
        outcome.map(|_| ())
    }

    /// Sign out locally (after a best-effort remote call) and reload at `/`.
    pub async fn logout(self) {
        let (next, remote) = self.sessions.logout(&self.api).await;
        if let Some(e) = remote {
            log::warn!("remote logout failed, signed out locally: {e}");
        }
        self.state.set(next);
        hard_navigate(ROOT_PATH);
    }

    /// One expiry-loop iteration.
    pub fn run_expiry_check(self, now_ms: i64) {
        let current = self.state.get_untracked();
        if let Some(transition) = expiry_transition(&self.sessions, &current, now_ms) {
            self.state.set(transition.next);
            if transition.notify_expired {
                self.notices.update(NoticeState::session_expired);
            }
        }
    }

    #[must_use]
    pub fn next_check_delay(self, now_ms: i64) -> std::time::Duration {
        self.sessions.next_check_delay(now_ms)
    }
}

/// State change produced by one expiry check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ExpiryTransition {
    pub next: AuthState,
    pub notify_expired: bool,
}

/// Run the expiry check for `current`; `None` leaves the state alone.
///
/// Storage is only inspected while authenticated.
pub(crate) fn expiry_transition<S: KeyValueStore>(
    sessions: &SessionManager<S>,
    current: &AuthState,
    now_ms: i64,
) -> Option<ExpiryTransition> {
    if !current.is_authenticated() {
        return None;
    }
    let notify_expired = match sessions.check_expiry(now_ms) {
        ExpiryCheck::Valid => return None,
        ExpiryCheck::Expired => {
            log::info!("session expired");
            true
        }
        ExpiryCheck::Missing => {
            log::warn!("session has no expiry; signing out");
            false
        }
        // Storage was cleared underneath us (e.g. logout in another tab).
        ExpiryCheck::Idle => {
            log::info!("session removed from storage; signing out");
            false
        }
    };
    Some(ExpiryTransition { next: AuthState::signed_out(), notify_expired })
}

/// State after a login attempt: the new session, or the prior state with the
/// loading flag released.
pub(crate) fn settle_login(current: &AuthState, outcome: &Result<AuthState, AuthError>) -> AuthState {
    match outcome {
        Ok(next) => next.clone(),
        Err(_) => AuthState { loading: false, ..current.clone() },
    }
}

/// Fetch the context provided by [`AuthProvider`].
///
/// # Panics
///
/// Panics when called outside an `AuthProvider` subtree.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Root provider for auth and notice state.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let notices = RwSignal::new(NoticeState::default());
    let auth = AuthContext::new(&ClientConfig::from_build_env(), notices);
    provide_context(notices);
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            auth.restore();
            loop {
                gloo_timers::future::sleep(auth.next_check_delay(now_millis())).await;
                if !alive_task.load(Ordering::Relaxed) {
                    break;
                }
                auth.run_expiry_check(now_millis());
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    children()
}
