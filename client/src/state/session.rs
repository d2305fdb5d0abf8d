//! Persisted session record (token, role, display name, expiry).
//!
//! DESIGN
//! ======
//! The session lives in browser local storage under four flat keys so it
//! survives reloads. Storage access goes through [`KeyValueStore`]; the
//! browser implementation is a no-op outside the `hydrate` build, which keeps
//! server rendering deterministic, and [`MemoryStore`] backs the tests.
//!
//! Loading is all-or-nothing on token and role: a half-written record is
//! treated as no session at all.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use super::role::Role;

pub const KEY_ACCESS_TOKEN: &str = "access_token";
pub const KEY_ROLE: &str = "role";
pub const KEY_NAME: &str = "name";
pub const KEY_TOKEN_EXPIRATION: &str = "token_expiration";

const SESSION_KEYS: [&str; 4] = [KEY_ACCESS_TOKEN, KEY_ROLE, KEY_NAME, KEY_TOKEN_EXPIRATION];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("storage write failed for `{key}`: {reason}")]
pub struct StorageError {
    pub key: String,
    pub reason: String,
}

/// Minimal string key/value persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

// =============================================================================
// STORES
// =============================================================================

/// `window.localStorage`. Reads return `None` and writes succeed silently when
/// no browser window exists.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return Err(StorageError { key: key.to_owned(), reason: "local storage unavailable".to_owned() });
            };
            storage
                .set_item(key, value)
                .map_err(|e| StorageError { key: key.to_owned(), reason: format!("{e:?}") })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// A loaded session. Token and role are always present; expiry and display
/// name may be missing in records written by older builds or edited by hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub role: Role,
    pub display_name: Option<String>,
    /// Epoch milliseconds.
    pub expires_at: Option<i64>,
}

impl Session {
    /// `true` once `now` has passed the expiry instant. A session without an
    /// expiry is not "expired"; callers handle that case separately.
    #[must_use]
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        self.expires_at.is_some_and(|expires_at| now_ms > expires_at)
    }
}

/// Session persistence over a [`KeyValueStore`].
#[derive(Clone, Copy, Debug)]
pub struct SessionStore<S> {
    store: S,
    ttl: Duration,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    /// Persist a fresh session expiring `ttl` after `now_ms`.
    ///
    /// # Errors
    ///
    /// Returns the first failed write; keys written before it are restored to
    /// their previous values, so an existing session survives intact.
    pub fn save(&self, token: &str, role: Role, display_name: &str, now_ms: i64) -> Result<Session, StorageError> {
        let expires_at = now_ms.saturating_add(i64::try_from(self.ttl.as_millis()).unwrap_or(i64::MAX));
        let writes = [
            (KEY_ACCESS_TOKEN, token.to_owned()),
            (KEY_ROLE, role.id().to_string()),
            (KEY_NAME, display_name.to_owned()),
            (KEY_TOKEN_EXPIRATION, expires_at.to_string()),
        ];
        let previous = SESSION_KEYS.map(|key| self.store.get(key));
        for (written, (key, value)) in writes.iter().enumerate() {
            if let Err(e) = self.store.set(key, value) {
                self.restore_keys(&previous[..written]);
                return Err(e);
            }
        }
        Ok(Session {
            token: token.to_owned(),
            role,
            display_name: Some(display_name.to_owned()).filter(|name| !name.is_empty()),
            expires_at: Some(expires_at),
        })
    }

    /// Current session, or `None` if token or role is missing or unreadable.
    #[must_use]
    pub fn load(&self) -> Option<Session> {
        let token = self.token()?;
        let role = self.store.get(KEY_ROLE)?.parse::<Role>().ok()?;
        let display_name = self.store.get(KEY_NAME).filter(|name| !name.is_empty());
        let expires_at = self
            .store
            .get(KEY_TOKEN_EXPIRATION)
            .and_then(|raw| raw.trim().parse::<i64>().ok());
        Some(Session { token, role, display_name, expires_at })
    }

    /// Raw bearer token, if one is stored.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.get(KEY_ACCESS_TOKEN).filter(|token| !token.is_empty())
    }

    /// Put back the values captured for the first `previous.len()` keys.
    fn restore_keys(&self, previous: &[Option<String>]) {
        for (key, value) in SESSION_KEYS.iter().zip(previous) {
            let restored = match value {
                Some(value) => self.store.set(key, value),
                None => {
                    self.store.remove(key);
                    Ok(())
                }
            };
            if let Err(e) = restored {
                log::warn!("session rollback incomplete: {e}");
            }
        }
    }

    pub fn clear(&self) {
        for key in SESSION_KEYS {
            self.store.remove(key);
        }
    }
}
