//! Rundown item types.
//!
//! A rundown item is one timed entry of an episode (segment, ad, package, ...).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::ids::ItemId;
use crate::item_type::ItemType;

/// Production status of a rundown item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// Item is still being written.
    #[default]
    Draft,
    /// Item has been approved by an editor.
    Approved,
    /// Item is in production.
    Production,
    /// Item is finished.
    Completed,
}

impl ItemStatus {
    pub const ALL: [ItemStatus; 4] = [
        ItemStatus::Draft,
        ItemStatus::Approved,
        ItemStatus::Production,
        ItemStatus::Completed,
    ];

    /// Wire value of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            ItemStatus::Draft => "draft",
            ItemStatus::Approved => "approved",
            ItemStatus::Production => "production",
            ItemStatus::Completed => "completed",
        }
    }

    /// Display title of the status.
    pub fn title(self) -> &'static str {
        match self {
            ItemStatus::Draft => "Draft",
            ItemStatus::Approved => "Approved",
            ItemStatus::Production => "Production",
            ItemStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Duration of a rundown item as it arrives from the editor or the server.
///
/// Either a clock string (`"M:SS"`, `"H:MM:SS"`, or a bare integer string)
/// or a number of seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemDuration {
    Seconds(f64),
    Text(String),
}

impl From<&str> for ItemDuration {
    fn from(s: &str) -> Self {
        ItemDuration::Text(s.to_string())
    }
}

impl From<String> for ItemDuration {
    fn from(s: String) -> Self {
        ItemDuration::Text(s)
    }
}

impl From<u64> for ItemDuration {
    fn from(secs: u64) -> Self {
        ItemDuration::Seconds(secs as f64)
    }
}

/// One entry of an episode rundown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RundownItem {
    /// Unique identifier for the item.
    #[serde(default)]
    pub id: ItemId,

    /// Type tag of the item.
    #[serde(rename = "type", default)]
    pub item_type: ItemType,

    /// Short lowercase identifier, unique within the episode.
    #[serde(default)]
    pub slug: String,

    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<ItemDuration>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub tags: BTreeSet<String>,

    #[serde(default)]
    pub status: ItemStatus,

    /// Advisory ordering index; the collection order is authoritative.
    #[serde(default, alias = "order")]
    pub position: i64,

    /// Script body of the item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,

    /// Backing file name on the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl RundownItem {
    /// Creates a new draft item with a fresh id.
    pub fn new(item_type: ItemType, slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            item_type,
            slug: slug.into(),
            title: title.into(),
            duration: None,
            description: String::new(),
            tags: BTreeSet::new(),
            status: ItemStatus::Draft,
            position: 0,
            script: None,
            filename: None,
        }
    }

    /// Sets the duration.
    pub fn with_duration(mut self, duration: impl Into<ItemDuration>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    /// Adds a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }
}
