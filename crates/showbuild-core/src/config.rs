//! Runtime configuration.
//!
//! # Storage Structure
//!
//! Local state lives under `~/.showbuild/`:
//!
//! ```text
//! ~/.showbuild/
//! └── store/        # Local key-value store (session, color cache)
//! ```
//!
//! # Environment Variables
//!
//! - `SHOWBUILD_STATE_DIR`: Override the base state directory
//! - `SHOWBUILD_API_URL`: Base URL of the show API
//! - `SHOWBUILD_COLOR_PROFILE`: Color profile loaded from the API
//! - `SHOWBUILD_TOKEN_TTL_MINUTES`: Lifetime given to login tokens

use std::path::{Path, PathBuf};

use chrono::Duration;
use url::Url;

use crate::auth::DEFAULT_TOKEN_TTL_MINUTES;
use crate::colors::DEFAULT_PROFILE_ID;
use crate::error::{CoreError, Result};

/// Environment variable for custom state directory.
pub const STATE_DIR_ENV: &str = "SHOWBUILD_STATE_DIR";

/// Environment variable for the API base URL.
pub const API_URL_ENV: &str = "SHOWBUILD_API_URL";

/// Environment variable for the color profile id.
pub const COLOR_PROFILE_ENV: &str = "SHOWBUILD_COLOR_PROFILE";

/// Environment variable for the token lifetime in minutes.
pub const TOKEN_TTL_ENV: &str = "SHOWBUILD_TOKEN_TTL_MINUTES";

/// Default API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default state directory name under home.
const DEFAULT_STATE_DIR: &str = ".showbuild";

const STORE_SUBDIR: &str = "store";

/// Get the default state directory.
///
/// `~/.showbuild` if the home directory is known, otherwise `.showbuild`
/// in the current directory.
pub fn default_state_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(DEFAULT_STATE_DIR))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub state_dir: PathBuf,
    pub api_url: Url,
    pub color_profile: String,
    pub token_ttl_minutes: i64,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`; unset or blank values take
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let state_dir = var(STATE_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(default_state_dir);
        let api_url = parse_api_url(&var(API_URL_ENV).unwrap_or_else(|| DEFAULT_API_URL.to_string()))?;
        let color_profile = var(COLOR_PROFILE_ENV)
            .map(|p| p.trim().to_string())
            .unwrap_or_else(|| DEFAULT_PROFILE_ID.to_string());
        let token_ttl_minutes = match var(TOKEN_TTL_ENV) {
            Some(ttl) => ttl
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|m| *m > 0 && Duration::try_minutes(*m).is_some())
                .ok_or_else(|| {
                    CoreError::Configuration(format!(
                        "{} must be a positive number of minutes in range, got {:?}",
                        TOKEN_TTL_ENV, ttl
                    ))
                })?,
            None => DEFAULT_TOKEN_TTL_MINUTES,
        };

        let config = Config {
            state_dir,
            api_url,
            color_profile,
            token_ttl_minutes,
        };
        Ok(config)
    }

    /// Sets the state directory.
    pub fn with_state_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.state_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Directory of the local key-value store.
    pub fn store_dir(&self) -> PathBuf {
        self.state_dir.join(STORE_SUBDIR)
    }

    /// Login token lifetime; out-of-range minutes fall back to the default.
    pub fn token_ttl(&self) -> Duration {
        Duration::try_minutes(self.token_ttl_minutes)
            .unwrap_or_else(|| Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES))
    }
}

/// Parses an http(s) API base URL.
pub fn parse_api_url(input: &str) -> Result<Url> {
    let url = Url::parse(input.trim())
        .map_err(|e| CoreError::Configuration(format!("invalid API URL {:?}: {}", input, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(CoreError::Configuration(format!(
            "unsupported API URL scheme: {}",
            other
        ))),
    }
}
