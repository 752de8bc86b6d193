//! Color profile: mapping from semantic key to color token.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// A named mapping from semantic key (item type, status, interface role)
/// to a color token such as `"info"`, `"red-darken-2"` or `"#112233"`.
///
/// Keys are stored lowercase so lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ColorProfile(BTreeMap<String, String>);

impl ColorProfile {
    /// Creates an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    fn normalize(key: &str) -> String {
        key.trim().to_lowercase()
    }

    /// Returns the token for a key, ignoring empty tokens.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(&Self::normalize(key))
            .map(String::as_str)
            .filter(|token| !token.trim().is_empty())
    }

    /// Sets the token for a key, returning the previous token.
    pub fn insert(&mut self, key: &str, token: impl Into<String>) -> Option<String> {
        self.0.insert(Self::normalize(key), token.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(&Self::normalize(key))
    }

    /// Overlays every entry of `other` onto this profile.
    pub fn merge(&mut self, other: &ColorProfile) {
        for (key, token) in &other.0 {
            self.0.insert(key.clone(), token.clone());
        }
    }

    /// Returns this profile overlaid by `other`.
    pub fn merged_with(&self, other: &ColorProfile) -> ColorProfile {
        let mut merged = self.clone();
        merged.merge(other);
        merged
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for ColorProfile {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut profile = ColorProfile::new();
        for (key, token) in iter {
            profile.insert(key.as_ref(), token);
        }
        profile
    }
}

impl<'de> Deserialize<'de> for ColorProfile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
        Ok(raw.into_iter().collect())
    }
}
