//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`role`, `session`, `auth`, `ui`) so guards,
//! pages and the layout shell depend on small focused models.

pub mod auth;
pub mod role;
pub mod session;
pub mod ui;
