//! Rundown item type catalog.
//!
//! The catalog is the single source of truth for item types: their display
//! titles, categories, default color tokens, icons and sort order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Catalog grouping of item types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Core,
    Production,
    Technical,
    Content,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Core,
        Category::Production,
        Category::Technical,
        Category::Content,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Category::Core => "Core",
            Category::Production => "Production",
            Category::Technical => "Technical",
            Category::Content => "Content",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::Core => "Essential content types for any show",
            Category::Production => "Production workflow elements",
            Category::Technical => "Technical and audio/visual elements",
            Category::Content => "Specialized content categories",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Core => "mdi-television-classic",
            Category::Production => "mdi-broadcast",
            Category::Technical => "mdi-cog",
            Category::Content => "mdi-newspaper-variant",
        }
    }
}

/// Type tag of a rundown item.
///
/// Wire values are the lowercase tag (`"segment"`, `"openclose"`, ...).
/// Unrecognized tags deserialize to [`ItemType::Unknown`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    #[default]
    Segment,
    Ad,
    Promo,
    Cta,
    Trans,
    Pkg,
    Vo,
    Sot,
    Interview,
    Live,
    Break,
    Tease,
    Tag,
    Bump,
    Music,
    Gfx,
    Fsq,
    Nat,
    Vox,
    Credits,
    Weather,
    Sports,
    Brief,
    Reader,
    OpenClose,
    #[serde(other)]
    Unknown,
}

/// Catalog metadata for one item type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemTypeInfo {
    pub item_type: ItemType,
    pub title: &'static str,
    pub value: &'static str,
    pub category: Category,
    pub description: &'static str,
    /// Default color token (resolved through the palette).
    pub color: &'static str,
    pub icon: &'static str,
    pub sort_order: u32,
}

macro_rules! entry {
    ($ty:ident, $title:literal, $value:literal, $cat:ident, $desc:literal, $color:literal, $icon:literal, $order:literal) => {
        ItemTypeInfo {
            item_type: ItemType::$ty,
            title: $title,
            value: $value,
            category: Category::$cat,
            description: $desc,
            color: $color,
            icon: $icon,
            sort_order: $order,
        }
    };
}

/// The item type catalog.
pub static ITEM_TYPES: [ItemTypeInfo; 25] = [
    entry!(Segment, "Segment", "segment", Core, "Main content segments of the show", "info", "mdi-television-classic", 1),
    entry!(Ad, "Advertisement", "ad", Core, "Commercial advertisement breaks", "primary", "mdi-currency-usd", 2),
    entry!(Promo, "Promo", "promo", Core, "Promotional content for upcoming shows", "success", "mdi-bullhorn", 3),
    entry!(Cta, "Call to Action", "cta", Core, "Direct viewer engagement prompts", "accent", "mdi-hand-pointing-right", 4),
    entry!(Trans, "Transition", "trans", Core, "Smooth transitions between segments", "secondary", "mdi-arrow-right", 5),
    entry!(Pkg, "Package (PKG)", "pkg", Production, "Pre-produced story packages", "purple", "mdi-package-variant", 10),
    entry!(Vo, "Voice Over (VO)", "vo", Production, "Narrator voice over content", "deep-orange", "mdi-microphone", 11),
    entry!(Sot, "Sound on Tape (SOT)", "sot", Production, "Pre-recorded audio/video content", "amber", "mdi-tape-drive", 12),
    entry!(Interview, "Interview", "interview", Production, "Guest interviews and conversations", "teal", "mdi-account-voice", 13),
    entry!(Live, "Live Shot", "live", Production, "Live remote broadcasts and reports", "red", "mdi-broadcast", 14),
    entry!(Break, "Break", "break", Production, "Commercial or station breaks", "brown", "mdi-pause", 15),
    entry!(Tease, "Tease", "tease", Production, "Content teasers and previews", "pink", "mdi-eye-outline", 16),
    entry!(Tag, "Tag", "tag", Production, "Closing remarks and tags", "indigo", "mdi-tag", 17),
    entry!(Bump, "Bump", "bump", Production, "Short transition elements", "deep-purple", "mdi-arrow-decision", 18),
    entry!(Music, "Music Bed", "music", Technical, "Background music and audio beds", "orange", "mdi-music", 20),
    entry!(Gfx, "Graphics (GFX)", "gfx", Technical, "Visual graphics and animations", "cyan", "mdi-image", 21),
    entry!(Fsq, "Full Screen Quote (FSQ)", "fsq", Technical, "Full screen quote displays", "lime", "mdi-format-quote-close", 22),
    entry!(Nat, "Natural Sound (NAT)", "nat", Technical, "Natural ambient sound", "light-green", "mdi-volume-high", 23),
    entry!(Vox, "Vox Pop", "vox", Technical, "Person-on-the-street interviews", "yellow", "mdi-account-group", 24),
    entry!(Credits, "Credits", "credits", Technical, "End credits and acknowledgments", "blue-grey", "mdi-format-list-bulleted", 25),
    entry!(Weather, "Weather", "weather", Content, "Weather reports and forecasts", "light-blue", "mdi-weather-partly-cloudy", 30),
    entry!(Sports, "Sports", "sports", Content, "Sports news and highlights", "green-darken-2", "mdi-soccer", 31),
    entry!(Brief, "News Brief", "brief", Content, "Short news updates", "grey-lighten-2", "mdi-newspaper-variant", 32),
    entry!(Reader, "Reader", "reader", Content, "Anchor-read news content", "amber-lighten-2", "mdi-script-text", 33),
    entry!(OpenClose, "Open/Close", "openclose", Content, "Show opening and closing segments", "purple-darken-2", "mdi-television-play", 34),
];

/// Item types hidden from the color selector.
const COLOR_SELECTOR_EXCLUDED: [ItemType; 9] = [
    ItemType::Gfx,
    ItemType::Fsq,
    ItemType::Nat,
    ItemType::Vox,
    ItemType::Credits,
    ItemType::Weather,
    ItemType::Sports,
    ItemType::Brief,
    ItemType::OpenClose,
];

/// Wire value of [`ItemType::Unknown`].
pub const UNKNOWN_VALUE: &str = "unknown";

impl ItemType {
    /// Catalog metadata, `None` for [`ItemType::Unknown`].
    pub fn info(self) -> Option<&'static ItemTypeInfo> {
        ITEM_TYPES.iter().find(|info| info.item_type == self)
    }

    /// Wire value of the tag.
    pub fn as_str(self) -> &'static str {
        self.info().map_or(UNKNOWN_VALUE, |info| info.value)
    }

    pub fn category(self) -> Option<Category> {
        self.info().map(|info| info.category)
    }

    /// Icon name, `mdi-help-circle` for unknown types.
    pub fn icon(self) -> &'static str {
        self.info().map_or("mdi-help-circle", |info| info.icon)
    }

    /// Default color token, `grey` for unknown types.
    pub fn default_color(self) -> &'static str {
        self.info().map_or("grey", |info| info.color)
    }

    /// Looks up a type by wire value (case-insensitive).
    pub fn from_value(value: &str) -> Option<Self> {
        let value = value.trim();
        ITEM_TYPES
            .iter()
            .find(|info| info.value.eq_ignore_ascii_case(value))
            .map(|info| info.item_type)
    }

    /// All catalog entries in a category, in catalog order.
    pub fn by_category(category: Category) -> Vec<&'static ItemTypeInfo> {
        ITEM_TYPES
            .iter()
            .filter(|info| info.category == category)
            .collect()
    }

    /// All catalog entries ordered by sort order.
    pub fn all_sorted() -> Vec<&'static ItemTypeInfo> {
        let mut all: Vec<_> = ITEM_TYPES.iter().collect();
        all.sort_by_key(|info| info.sort_order);
        all
    }

    /// `(title, value)` pairs ordered alphabetically by title.
    pub fn dropdown() -> Vec<(&'static str, &'static str)> {
        let mut entries: Vec<_> = ITEM_TYPES.iter().map(|i| (i.title, i.value)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Types that can be recolored from the color selector.
    pub fn color_selectable() -> Vec<ItemType> {
        ITEM_TYPES
            .iter()
            .map(|info| info.item_type)
            .filter(|ty| !COLOR_SELECTOR_EXCLUDED.contains(ty))
            .collect()
    }

    /// Mapping of every catalog value to its default color token.
    pub fn color_mappings() -> BTreeMap<&'static str, &'static str> {
        ITEM_TYPES.iter().map(|i| (i.value, i.color)).collect()
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemType::from_value(s).ok_or_else(|| format!("unknown item type: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_unique_values() {
        let mut values: Vec<_> = ITEM_TYPES.iter().map(|i| i.value).collect();
        values.sort();
        values.dedup();
        assert_eq!(values.len(), ITEM_TYPES.len());
    }

    #[test]
    fn test_every_variant_has_catalog_entry() {
        for info in ITEM_TYPES.iter() {
            assert_eq!(info.item_type.info(), Some(info));
            assert_eq!(info.item_type.as_str(), info.value);
        }
        assert!(ItemType::Unknown.info().is_none());
    }

    #[test]
    fn test_serde_uses_wire_values() {
        assert_eq!(serde_json::to_string(&ItemType::OpenClose).unwrap(), "\"openclose\"");
        let ty: ItemType = serde_json::from_str("\"pkg\"").unwrap();
        assert_eq!(ty, ItemType::Pkg);
    }

    #[test]
    fn test_unrecognized_tag_is_unknown() {
        let ty: ItemType = serde_json::from_str("\"hologram\"").unwrap();
        assert_eq!(ty, ItemType::Unknown);
        assert_eq!(ty.icon(), "mdi-help-circle");
        assert_eq!(ty.default_color(), "grey");
    }

    #[test]
    fn test_from_value_is_case_insensitive() {
        assert_eq!(ItemType::from_value("SOT"), Some(ItemType::Sot));
        assert_eq!("Weather".parse::<ItemType>(), Ok(ItemType::Weather));
        assert!("nope".parse::<ItemType>().is_err());
    }

    #[test]
    fn test_by_category() {
        let core = ItemType::by_category(Category::Core);
        let values: Vec<_> = core.iter().map(|i| i.value).collect();
        assert_eq!(values, vec!["segment", "ad", "promo", "cta", "trans"]);

        let total: usize = Category::ALL
            .iter()
            .map(|c| ItemType::by_category(*c).len())
            .sum();
        assert_eq!(total, ITEM_TYPES.len());
    }

    #[test]
    fn test_dropdown_sorted_by_title() {
        let entries = ItemType::dropdown();
        assert_eq!(entries.first(), Some(&("Advertisement", "ad")));
        assert!(entries.windows(2).all(|w| w[0].0 <= w[1].0));
    }

    #[test]
    fn test_color_selectable_excludes_technical_types() {
        let selectable = ItemType::color_selectable();
        assert!(selectable.contains(&ItemType::Segment));
        assert!(!selectable.contains(&ItemType::Gfx));
        assert!(!selectable.contains(&ItemType::OpenClose));
        assert_eq!(selectable.len(), ITEM_TYPES.len() - COLOR_SELECTOR_EXCLUDED.len());
    }

    #[test]
    fn test_color_mappings() {
        let map = ItemType::color_mappings();
        assert_eq!(map.get("segment"), Some(&"info"));
        assert_eq!(map.get("sports"), Some(&"green-darken-2"));
        assert_eq!(map.len(), 25);
    }
}
