use std::cell::RefCell;

use async_trait::async_trait;
use futures::executor::block_on;

use super::*;
use crate::net::types::LoginResponse;
use crate::state::session::{KEY_ACCESS_TOKEN, KEY_ROLE, KEY_TOKEN_EXPIRATION, MemoryStore};

const NOW: i64 = 1_700_000_000_000;
const TTL_MS: i64 = 3_599_000;

// =============================================================
// Helpers
// =============================================================

/// Scripted backend recording every call it receives.
#[derive(Default)]
struct FakeApi {
    login_result: Option<Result<serde_json::Value, AuthError>>,
    logout_error: Option<AuthError>,
    logins: RefCell<Vec<LoginRequest>>,
    logouts: RefCell<Vec<(Role, String)>>,
}

impl FakeApi {
    fn accepting(body: serde_json::Value) -> Self {
        Self { login_result: Some(Ok(body)), ..Self::default() }
    }

    fn rejecting(err: AuthError) -> Self {
        Self { login_result: Some(Err(err)), ..Self::default() }
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeApi {
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, AuthError> {
        self.logins.borrow_mut().push(credentials.clone());
        match self.login_result.clone().unwrap_or(Err(AuthError::Unavailable)) {
            Ok(body) => serde_json::from_value(body).map_err(|e| AuthError::Decode(e.to_string())),
            Err(e) => Err(e),
        }
    }

    async fn logout(&self, role: Role, token: &str) -> Result<(), AuthError> {
        self.logouts.borrow_mut().push((role, token.to_owned()));
        match self.logout_error.clone() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

fn manager() -> (MemoryStore, SessionManager<MemoryStore>) {
    let backing = MemoryStore::new();
    let manager = SessionManager::new(backing.clone(), &ClientConfig::default());
    (backing, manager)
}

fn signed_in(role: Role) -> (MemoryStore, SessionManager<MemoryStore>) {
    let (backing, manager) = manager();
    manager.store().save("tok-1", role, "Dewi", NOW).expect("save");
    (backing, manager)
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_is_initializing_and_loading() {
    let state = AuthState::default();
    assert_eq!(state.phase, AuthPhase::Initializing);
    assert!(state.is_loading());
    assert!(!state.is_authenticated());
    assert_eq!(state.user_role(), None);
}

#[test]
fn signed_out_state_is_settled() {
    let state = AuthState::signed_out();
    assert_eq!(state.phase, AuthPhase::Unauthenticated);
    assert!(!state.is_loading());
    assert!(!state.is_authenticated());
}

#[test]
fn user_role_hidden_unless_authenticated() {
    let state = AuthState {
        phase: AuthPhase::Unauthenticated,
        role: Some(Role::Finance),
        display_name: None,
        loading: false,
    };
    assert_eq!(state.user_role(), None);
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_with_session_is_authenticated() {
    let (_, manager) = signed_in(Role::Finance);
    let state = manager.restore();
    assert!(state.is_authenticated());
    assert!(!state.is_loading());
    assert_eq!(state.user_role(), Some(Role::Finance));
    assert_eq!(state.display_name.as_deref(), Some("Dewi"));
}

#[test]
fn restore_without_session_is_unauthenticated() {
    let (_, manager) = manager();
    assert_eq!(manager.restore(), AuthState::signed_out());
}

#[test]
fn restore_with_half_written_session_is_unauthenticated() {
    let (backing, manager) = manager();
    backing.set(KEY_ACCESS_TOKEN, "tok").expect("set");
    assert_eq!(manager.restore(), AuthState::signed_out());
}

// =============================================================
// login
// =============================================================

#[test]
fn login_success_persists_session_and_authenticates() {
    let (_, manager) = manager();
    let api = FakeApi::accepting(serde_json::json!({ "access_token": "jwt-1", "role": 2, "name": "Dewi" }));

    let state = block_on(manager.login(&api, "dewi", "pw", NOW)).expect("login");

    assert!(state.is_authenticated());
    assert_eq!(state.user_role(), Some(Role::Finance));
    let session = manager.store().load().expect("persisted");
    assert_eq!(session.token, "jwt-1");
    assert_eq!(session.role, Role::Finance);
    assert_eq!(session.expires_at, Some(NOW + TTL_MS));
    assert_eq!(
        api.logins.borrow().as_slice(),
        &[LoginRequest { username: "dewi".to_owned(), password: "pw".to_owned() }]
    );
}

#[test]
fn login_rejection_is_returned_and_nothing_persisted() {
    let (backing, manager) = manager();
    let api = FakeApi::rejecting(AuthError::Rejected { status: 401, message: "Invalid credentials".to_owned() });

    let err = block_on(manager.login(&api, "dewi", "bad", NOW)).expect_err("rejected");

    assert_eq!(err.to_string(), "Invalid credentials");
    assert!(backing.is_empty());
}

#[test]
fn login_network_failure_is_returned() {
    let (backing, manager) = manager();
    let api = FakeApi::rejecting(AuthError::Network("connection refused".to_owned()));
    let err = block_on(manager.login(&api, "dewi", "pw", NOW)).expect_err("network");
    assert!(matches!(err, AuthError::Network(_)));
    assert!(backing.is_empty());
}

#[test]
fn login_with_unknown_role_fails_without_persisting() {
    let (backing, manager) = manager();
    let api = FakeApi::accepting(serde_json::json!({ "access_token": "jwt-1", "role": 9, "name": "Ghost" }));
    let err = block_on(manager.login(&api, "ghost", "pw", NOW)).expect_err("unknown role");
    assert_eq!(err, AuthError::UnknownRole("9".to_owned()));
    assert!(backing.is_empty());
}

#[test]
fn login_with_empty_token_fails_without_persisting() {
    let (backing, manager) = manager();
    let api = FakeApi::accepting(serde_json::json!({ "access_token": "", "role": 2, "name": "Dewi" }));

    let err = block_on(manager.login(&api, "dewi", "pw", NOW)).expect_err("empty token");

    assert!(matches!(err, AuthError::Decode(_)));
    assert!(backing.is_empty());
    assert_eq!(manager.restore(), AuthState::signed_out());
}

#[test]
fn login_replaces_previous_session() {
    let (_, manager) = signed_in(Role::SuperAdmin);
    let api = FakeApi::accepting(serde_json::json!({ "access_token": "jwt-2", "role": "3", "name": "Vendor" }));
    block_on(manager.login(&api, "vendor", "pw", NOW + 10)).expect("login");
    let session = manager.store().load().expect("session");
    assert_eq!(session.token, "jwt-2");
    assert_eq!(session.role, Role::SupplierFinance);
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_calls_remote_with_role_and_token_then_clears() {
    let (backing, manager) = signed_in(Role::SuperAdmin);
    let api = FakeApi::default();

    let (state, remote_err) = block_on(manager.logout(&api));

    assert_eq!(state, AuthState::signed_out());
    assert_eq!(remote_err, None);
    assert_eq!(api.logouts.borrow().as_slice(), &[(Role::SuperAdmin, "tok-1".to_owned())]);
    assert!(backing.is_empty());
}

#[test]
fn logout_without_token_skips_remote_call() {
    let (backing, manager) = manager();
    backing.set(KEY_ROLE, "1").expect("set");
    let api = FakeApi::default();

    let (state, remote_err) = block_on(manager.logout(&api));

    assert_eq!(state, AuthState::signed_out());
    assert_eq!(remote_err, None);
    assert!(api.logouts.borrow().is_empty());
    assert!(backing.is_empty());
}

#[test]
fn logout_remote_failure_still_clears_locally() {
    let (backing, manager) = signed_in(Role::Finance);
    let api = FakeApi { logout_error: Some(AuthError::Status(500)), ..FakeApi::default() };

    let (state, remote_err) = block_on(manager.logout(&api));

    assert_eq!(state, AuthState::signed_out());
    assert_eq!(remote_err, Some(AuthError::Status(500)));
    assert!(backing.is_empty());
    assert_eq!(manager.restore(), AuthState::signed_out());
}

// =============================================================
// expiry
// =============================================================

#[test]
fn expiry_check_is_idle_without_session() {
    let (_, manager) = manager();
    assert_eq!(manager.check_expiry(NOW), ExpiryCheck::Idle);
}

#[test]
fn expiry_check_keeps_valid_session() {
    let (_, manager) = signed_in(Role::Finance);
    assert_eq!(manager.check_expiry(NOW + TTL_MS), ExpiryCheck::Valid);
    assert!(manager.restore().is_authenticated());
}

#[test]
fn expiry_check_signs_out_past_expiry() {
    let (backing, manager) = signed_in(Role::Finance);
    let outcome = manager.check_expiry(NOW + TTL_MS + 1);
    assert_eq!(outcome, ExpiryCheck::Expired);
    assert!(backing.is_empty());
    assert_eq!(manager.restore(), AuthState::signed_out());
}

#[test]
fn expiry_is_reported_once() {
    let (_, manager) = signed_in(Role::Finance);
    assert_eq!(manager.check_expiry(NOW + TTL_MS + 1), ExpiryCheck::Expired);
    assert_eq!(manager.check_expiry(NOW + TTL_MS + 2), ExpiryCheck::Idle);
}

#[test]
fn expiry_check_signs_out_when_expiry_missing() {
    let (backing, manager) = signed_in(Role::Finance);
    backing.remove(KEY_TOKEN_EXPIRATION);
    let outcome = manager.check_expiry(NOW);
    assert_eq!(outcome, ExpiryCheck::Missing);
    assert!(backing.is_empty());
}

// =============================================================
// next_check_delay
// =============================================================

#[test]
fn next_check_delay_is_interval_without_session() {
    let (_, manager) = manager();
    assert_eq!(manager.next_check_delay(NOW), Duration::from_secs(1));
}

#[test]
fn next_check_delay_never_exceeds_interval() {
    let (_, manager) = signed_in(Role::Finance);
    assert_eq!(manager.next_check_delay(NOW), Duration::from_secs(1));
}

#[test]
fn next_check_delay_wakes_just_after_expiry() {
    let (_, manager) = signed_in(Role::Finance);
    let expires_at = NOW + TTL_MS;
    assert_eq!(manager.next_check_delay(expires_at - 300), Duration::from_millis(301));
    assert_eq!(manager.next_check_delay(expires_at), Duration::from_millis(1));
}

#[test]
fn next_check_delay_is_zero_once_expired() {
    let (_, manager) = signed_in(Role::Finance);
    assert_eq!(manager.next_check_delay(NOW + TTL_MS + 50), Duration::ZERO);
}
