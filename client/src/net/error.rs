//! Errors surfaced by login/logout.

use crate::state::session::StorageError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Backend refused the request and said why.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// Non-2xx response without a readable message.
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("unrecognized role {0} in login response")]
    UnknownRole(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("not available on server")]
    Unavailable,
}
