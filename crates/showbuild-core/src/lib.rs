//! Rundown editing engine for showbuild.
//!
//! This crate holds the editorial state of a show rundown and the rules
//! around it:
//!
//! - [`duration`]: parsing, formatting and aggregation of item durations
//! - [`cue`]: broadcast cue markup and splicing into script text
//! - [`colors`]: layered color profiles and the static palette
//! - [`rundown`]: the item collection, selection, buffers and layout
//! - [`auth`]: the credential lifecycle
//! - [`navigation`]: the route table and its auth guard
//! - [`workspace`]: the context tying the sessions together
//!
//! Remote collaborators (color profile store, login, rundown repository)
//! are traits in [`remote`]; HTTP implementations live in the client crate.
//!
//! # Example
//!
//! ```
//! use showbuild_core::cue::{compose, Cue, CueDetail};
//! use showbuild_core::duration;
//!
//! assert_eq!(duration::format(duration::parse_seconds("1:30") + 45), "2:15");
//!
//! let cue = Cue::new(CueDetail::Gfx, "lower-third", "Name and title");
//! assert!(compose(&cue).starts_with("### GFX: lower-third"));
//! ```

pub mod auth;
pub mod colors;
pub mod config;
pub mod cue;
pub mod duration;
pub mod error;
pub mod navigation;
pub mod notify;
pub mod remote;
pub mod rundown;
pub mod validation;
pub mod workspace;

// Re-export main types
pub use auth::{AuthSession, AuthState, Credentials};
pub use colors::ColorEngine;
pub use config::Config;
pub use cue::{Cue, CueDetail, CueKind};
pub use error::{CoreError, Result};
pub use navigation::Navigation;
pub use notify::{FlashColor, Notifier, TracingNotifier};
pub use remote::{LoginClient, LoginRequest, LoginResponse, RemoteColorStore, RundownRepository};
pub use rundown::{EditorMode, PanelWidth, RundownSession, SaveOutcome};
pub use validation::RuleViolation;
pub use workspace::Workspace;
