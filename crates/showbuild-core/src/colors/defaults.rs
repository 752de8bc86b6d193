//! Compiled default color profile.

use showbuild_models::{ColorProfile, ItemStatus, ItemType};

/// Token used when a key resolves nowhere.
pub const NEUTRAL_TOKEN: &str = "grey";

/// Server-side default profile, overlaid on the item type catalog colors.
const SERVER_DEFAULTS: [(&str, &str); 15] = [
    ("segment", "info"),
    ("ad", "primary"),
    ("promo", "success"),
    ("cta", "accent"),
    ("trans", "secondary"),
    ("unknown", NEUTRAL_TOKEN),
    ("selection-interface", "warning"),
    ("hover-interface", "blue-lighten-4"),
    ("highlight-interface", "yellow-lighten-3"),
    ("dropline-interface", "green-lighten-4"),
    ("draglight-interface", "cyan-lighten-4"),
    ("draft-script", "grey-darken-2"),
    ("approved-script", "green-accent"),
    ("production-script", "blue-accent"),
    ("completed-script", "yellow-accent"),
];

/// Key holding the script color of a status.
pub fn status_key(status: ItemStatus) -> String {
    format!("{}-script", status.as_str())
}

/// Builds the default profile.
pub fn default_profile() -> ColorProfile {
    let mut profile: ColorProfile = ItemType::color_mappings().into_iter().collect();
    for (key, token) in SERVER_DEFAULTS {
        profile.insert(key, token);
    }
    profile
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_catalog_and_server_keys() {
        let profile = default_profile();
        assert_eq!(profile.get("segment"), Some("info"));
        assert_eq!(profile.get("pkg"), Some("purple"));
        assert_eq!(profile.get("Selection-interface"), Some("warning"));
        assert_eq!(profile.get("unknown"), Some("grey"));
    }

    #[test]
    fn test_every_status_has_a_script_color() {
        let profile = default_profile();
        for status in ItemStatus::ALL {
            assert!(profile.get(&status_key(status)).is_some(), "{}", status);
        }
        assert_eq!(status_key(ItemStatus::Approved), "approved-script");
    }
}
