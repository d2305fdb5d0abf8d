//! Route guard decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded route asks this function what to render, reactively, on each
//! navigation. Wrong-role and signed-out users get the same redirect; there is
//! no separate forbidden page.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes::LOGIN_PATH;
use crate::state::auth::AuthState;
use crate::state::role::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth is still loading; render nothing and decide later.
    Pending,
    Redirect(&'static str),
    Render,
}

#[must_use]
pub fn decide(state: &AuthState, allowed: &[Role]) -> GuardDecision {
    if state.is_loading() {
        return GuardDecision::Pending;
    }
    match state.user_role() {
        Some(role) if allowed.contains(&role) => GuardDecision::Render,
        _ => GuardDecision::Redirect(LOGIN_PATH),
    }
}
