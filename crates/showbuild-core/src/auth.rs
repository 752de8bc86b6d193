//! Credential lifecycle.
//!
//! The session is either anonymous or holds a token, its expiry and the
//! identity it belongs to. The three values are persisted together under
//! separate keys and cleared together: a store holding only some of them is
//! treated as corrupt and wiped.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use showbuild_models::User;
use showbuild_persistence::{keys, LocalStore};
use tracing::{debug, info, warn};

use crate::error::{CoreError, Result};
use crate::remote::{LoginClient, LoginRequest};

/// Default token lifetime (two days).
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 2880;

/// A valid token with its expiry and identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub expiry: DateTime<Utc>,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Anonymous,
    Authenticated(Credentials),
}

/// Authentication state backed by a local store.
pub struct AuthSession {
    store: Arc<dyn LocalStore>,
    state: AuthState,
    token_ttl: Duration,
}

impl AuthSession {
    /// Creates an anonymous session. Nothing is read from the store until
    /// [`AuthSession::check_auth_status`] is called.
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self {
            store,
            state: AuthState::Anonymous,
            token_ttl: Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES),
        }
    }

    /// Sets the lifetime given to tokens obtained through [`AuthSession::login`].
    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// In-memory state only; does not consult the store or the clock.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, AuthState::Authenticated(_))
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        match &self.state {
            AuthState::Authenticated(credentials) => Some(credentials),
            AuthState::Anonymous => None,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.credentials().map(|c| &c.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.credentials().map(|c| c.token.as_str())
    }

    /// Authorization header value.
    pub fn bearer(&self) -> Option<String> {
        self.token().map(|token| format!("Bearer {}", token))
    }

    /// Stores credentials and enters the authenticated state.
    ///
    /// If any of the values cannot be stored the session is cleared.
    pub fn set_auth(&mut self, token: &str, user: User, expiry: DateTime<Utc>) -> Result<()> {
        if token.trim().is_empty() {
            return Err(CoreError::invalid("Token is required"));
        }

        let written = serde_json::to_string(&user)
            .map_err(CoreError::from)
            .and_then(|user_json| {
                self.store.set(keys::AUTH_TOKEN, token)?;
                self.store
                    .set(keys::AUTH_TOKEN_EXPIRY, &expiry.timestamp_millis().to_string())?;
                self.store.set(keys::USER_DATA, &user_json)?;
                Ok(())
            });
        if let Err(e) = written {
            warn!(error = %e, "Failed to store credentials");
            self.clear();
            return Err(e);
        }

        debug!(username = %user.username, expiry = %expiry, "Credentials stored");
        self.state = AuthState::Authenticated(Credentials {
            token: token.to_string(),
            expiry,
            user,
        });
        Ok(())
    }

    /// Validates the stored session against the current time.
    pub fn check_auth_status(&mut self) -> bool {
        self.check_auth_status_at(Utc::now())
    }

    /// Validates the stored session against `now`.
    ///
    /// An empty store is simply anonymous. Partial, unparsable or expired
    /// sessions are cleared.
    pub fn check_auth_status_at(&mut self, now: DateTime<Utc>) -> bool {
        let stored = keys::SESSION_KEYS.map(|key| self.read(key));

        let [token, expiry, user_json] = match stored {
            [None, None, None] => {
                self.state = AuthState::Anonymous;
                return false;
            }
            [Some(token), Some(expiry), Some(user_json)] => [token, expiry, user_json],
            _ => {
                warn!("Incomplete stored session, clearing");
                self.clear();
                return false;
            }
        };

        let Some(expiry) = expiry
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single())
        else {
            warn!("Unreadable token expiry, clearing session");
            self.clear();
            return false;
        };

        let user = match serde_json::from_str::<User>(&user_json) {
            Ok(user) => user,
            Err(e) => {
                warn!(error = %e, "Unreadable stored identity, clearing session");
                self.clear();
                return false;
            }
        };

        if token.trim().is_empty() {
            warn!("Empty stored token, clearing session");
            self.clear();
            return false;
        }

        if now >= expiry {
            info!(username = %user.username, expired = %expiry, "Session expired");
            self.clear();
            return false;
        }

        self.state = AuthState::Authenticated(Credentials { token, expiry, user });
        true
    }

    /// Exchanges credentials for a token and stores it.
    ///
    /// The token expires after the configured lifetime, counted from `now`.
    /// Any failure leaves the session anonymous.
    pub async fn login(
        &mut self,
        client: &dyn LoginClient,
        request: &LoginRequest,
        now: DateTime<Utc>,
    ) -> Result<&User> {
        let response = match client.login(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(username = %request.username, error = %e, "Login failed");
                self.clear();
                return Err(e);
            }
        };

        let Some(expiry) = now.checked_add_signed(self.token_ttl) else {
            warn!(username = %request.username, "Token lifetime overflows the expiry time");
            self.clear();
            return Err(CoreError::Configuration(
                "token lifetime is out of range".to_string(),
            ));
        };
        self.set_auth(&response.token, response.user, expiry)?;
        info!(username = %request.username, "Logged in");
        self.user().ok_or(CoreError::NotAuthenticated)
    }

    /// Ends the session.
    pub fn logout(&mut self) {
        if let Some(user) = self.user() {
            info!(username = %user.username, "Logged out");
        }
        self.clear();
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Failed to read session value");
                None
            }
        }
    }

    /// Removes every session key and resets the in-memory state.
    fn clear(&mut self) {
        for key in keys::SESSION_KEYS {
            if let Err(e) = self.store.remove(key) {
                warn!(key, error = %e, "Failed to remove session value");
            }
        }
        self.state = AuthState::Anonymous;
    }
}
