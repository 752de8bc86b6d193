//! Local persistence layer for showbuild.
//!
//! The engine persists a handful of opaque string values (auth token, token
//! expiry, serialized identity, serialized color profile) under string keys.
//! Absence of a key is a normal state, never an error.
//!
//! # Example
//!
//! ```no_run
//! use showbuild_persistence::{keys, FileStore, LocalStore};
//!
//! let store = FileStore::new("/home/user/.showbuild/store");
//! store.set(keys::AUTH_TOKEN, "abc123").unwrap();
//! assert_eq!(store.get(keys::AUTH_TOKEN).unwrap().as_deref(), Some("abc123"));
//! ```

pub mod atomic;
pub mod error;
pub mod keys;
pub mod store;

pub use error::{PersistenceError, Result};
pub use store::{FileStore, LocalStore, MemoryStore};
