//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components provide the auth context, the guarded-route wrapper and the
//! shared chrome, reading shared state from Leptos context providers.

pub mod auth_provider;
pub mod layout;
pub mod protected_route;
pub mod toast;
