//! Authenticated user identity.

use serde::{Deserialize, Serialize};

/// Access level granted to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    Admin,
    Service,
    #[default]
    User,
    Guest,
}

/// Identity record returned by the login collaborator and kept in the
/// session store.
///
/// Every field has a default so that minimal identity records deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub username: String,

    #[serde(alias = "accessLevel")]
    pub access_level: AccessLevel,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl User {
    /// Creates a user with the given name and access level.
    pub fn new(username: impl Into<String>, access_level: AccessLevel) -> Self {
        Self {
            username: username.into(),
            access_level,
            ..Self::default()
        }
    }

    pub fn is_admin(&self) -> bool {
        self.access_level == AccessLevel::Admin
    }

    /// Full name when known, otherwise the username.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            _ => self.username.clone(),
        }
    }
}
