//! Core data models for showbuild.
//!
//! This crate provides the plain data types shared by the rundown engine:
//! item ids, the item type catalog, rundown items, users, and color profiles.

pub mod color;
pub mod ids;
pub mod item;
pub mod item_type;
pub mod user;

// Re-export main types
pub use color::ColorProfile;
pub use ids::{EpisodeId, ItemId};
pub use item::{ItemDuration, ItemStatus, RundownItem};
pub use item_type::{Category, ItemType, ItemTypeInfo, ITEM_TYPES};
pub use user::{AccessLevel, User};
