//! Transient UI notices (toasts).
//!
//! DESIGN
//! ======
//! At most one notice is visible; a newer one replaces the older. Each push
//! bumps `seq` so the toast can tell a repeated message from a stale one.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub current: Option<Notice>,
    pub seq: u64,
}

impl NoticeState {
    pub fn push(&mut self, message: impl Into<String>) {
        self.current = Some(Notice { message: message.into() });
        self.seq += 1;
    }

    pub fn session_expired(&mut self) {
        self.push(SESSION_EXPIRED_MESSAGE);
    }

    /// Clear the notice only if it is still the one identified by `seq`.
    pub fn dismiss(&mut self, seq: u64) {
        if self.seq == seq {
            self.current = None;
        }
    }
}
