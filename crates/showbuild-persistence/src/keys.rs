//! Well-known keys of the local store.

/// Opaque bearer token.
pub const AUTH_TOKEN: &str = "auth-token";

/// Token expiry as epoch milliseconds.
pub const AUTH_TOKEN_EXPIRY: &str = "auth-token-expiry";

/// Serialized identity (JSON).
pub const USER_DATA: &str = "user-data";

/// Serialized color profile (JSON).
pub const COLOR_MAP: &str = "rundownColorMap";

/// Keys removed together when a session is cleared.
pub const SESSION_KEYS: [&str; 3] = [AUTH_TOKEN, AUTH_TOKEN_EXPIRY, USER_DATA];
