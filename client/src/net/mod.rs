//! Networking modules for the external invoice backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs REST calls, `types` defines the wire schema, and `error`
//! is the failure taxonomy surfaced to pages.

pub mod api;
pub mod error;
pub mod types;
