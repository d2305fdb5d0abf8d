//! Role registry for the three portal roles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Roles drive two things: route authorization (by numeric id, which is also
//! what the backend returns and what local storage persists) and API path
//! construction (by slug, e.g. `super-admin/logout`).

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Label returned for role ids outside the registry.
pub const UNKNOWN_ROLE_LABEL: &str = "Unknown Role";

/// Portal user role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    SuperAdmin,
    Finance,
    SupplierFinance,
}

impl Role {
    /// Every role, in id order.
    pub const ALL: [Role; 3] = [Role::SuperAdmin, Role::Finance, Role::SupplierFinance];

    #[must_use]
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::SuperAdmin),
            2 => Some(Self::Finance),
            3 => Some(Self::SupplierFinance),
            _ => None,
        }
    }

    #[must_use]
    pub fn id(self) -> u8 {
        match self {
            Self::SuperAdmin => 1,
            Self::Finance => 2,
            Self::SupplierFinance => 3,
        }
    }

    /// Human-readable label shown in the UI.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SuperAdmin => "Super Admin",
            Self::Finance => "Finance",
            Self::SupplierFinance => "Supplier Finance",
        }
    }

    /// URL path segment: the label lowercased with spaces replaced by hyphens.
    #[must_use]
    pub fn slug(self) -> String {
        self.label().to_ascii_lowercase().replace(' ', "-")
    }

    /// Reverse lookup by exact label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.label() == label)
    }
}

/// Label for a raw role id, or [`UNKNOWN_ROLE_LABEL`].
#[must_use]
pub fn role_label(id: i64) -> &'static str {
    u8::try_from(id)
        .ok()
        .and_then(Role::from_id)
        .map_or(UNKNOWN_ROLE_LABEL, Role::label)
}

/// Role id for a label, or `None` when the label is not registered.
#[must_use]
pub fn role_id_for_label(label: &str) -> Option<u8> {
    Role::from_label(label).map(Role::id)
}

/// API path segment for a raw role id.
#[must_use]
pub fn role_path(id: i64) -> Option<String> {
    u8::try_from(id).ok().and_then(Role::from_id).map(Role::slug)
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for role strings that are not a registered numeric id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized role `{0}`")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    /// Parses the persisted form: the numeric id as a string (`"1"`..`"3"`).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.trim()
            .parse::<u8>()
            .ok()
            .and_then(Role::from_id)
            .ok_or_else(|| ParseRoleError(raw.to_owned()))
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.id())
    }
}

/// Accepts either a JSON number (`2`) or a numeric string (`"2"`); the backend
/// has been seen to send both.
impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let role = match &value {
            serde_json::Value::Number(number) => number
                .as_u64()
                .and_then(|id| u8::try_from(id).ok())
                .and_then(Role::from_id),
            serde_json::Value::String(raw) => raw.parse().ok(),
            _ => None,
        };
        role.ok_or_else(|| D::Error::custom(format!("unrecognized role {value}")))
    }
}
