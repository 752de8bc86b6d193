//! Remote collaborators of the engine.
//!
//! The engine never talks to the network itself. These traits are
//! implemented by the HTTP client crate and by in-memory doubles in tests.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use showbuild_models::{ColorProfile, EpisodeId, RundownItem, User};

use crate::error::Result;

/// Remote store of named color profiles.
#[async_trait]
pub trait RemoteColorStore: Send + Sync {
    /// Fetches the colors of a profile.
    async fn fetch_profile(&self, profile_id: &str) -> Result<ColorProfile>;

    /// Replaces the colors of a profile.
    async fn push_profile(&self, profile_id: &str, profile: &ColorProfile) -> Result<()>;
}

/// Username/password pair sent to the login collaborator.
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Successful login: an opaque token and the identity it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Exchanges credentials for a token.
#[async_trait]
pub trait LoginClient: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse>;
}

/// Loads and saves episode rundowns.
#[async_trait]
pub trait RundownRepository: Send + Sync {
    /// Fetches the items of an episode.
    async fn fetch(&self, episode: &EpisodeId) -> Result<Vec<RundownItem>>;

    /// Commits the item order of an episode.
    async fn save(&self, episode: &EpisodeId, items: &[RundownItem]) -> Result<()>;
}
