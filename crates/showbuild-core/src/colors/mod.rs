//! Color Resolution Engine.
//!
//! Maps semantic keys (item types, statuses, interface roles) to color
//! tokens, and tokens to hex colors.

pub mod defaults;
pub mod engine;
pub mod palette;

pub use defaults::{default_profile, status_key, NEUTRAL_TOKEN};
pub use engine::{ColorEngine, DEFAULT_PROFILE_ID};
pub use palette::{to_hex, NEUTRAL_HEX};
