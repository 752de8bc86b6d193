//! Static color palette: token to hex conversion.
//!
//! Tokens follow the Material naming: `<family>` (base shade),
//! `<family>-lighten-N` (1..5), `<family>-darken-N` (1..4) and
//! `<family>-accent-N` (1..4). The short aliases `<family>-base`,
//! `<family>-accent`, `<family>-dark` and `<family>-light` are accepted as
//! well, next to the theme names (`primary`, `info`, ...) and literal hex
//! colors.

/// Hex returned for any token that cannot be resolved.
pub const NEUTRAL_HEX: &str = "#9E9E9E";

/// Shades 50..900 and, where the family has them, accents A100..A700.
struct Family {
    name: &'static str,
    shades: [&'static str; 10],
    accents: Option<[&'static str; 4]>,
}

const fn family(
    name: &'static str,
    shades: [&'static str; 10],
    accents: Option<[&'static str; 4]>,
) -> Family {
    Family {
        name,
        shades,
        accents,
    }
}

#[rustfmt::skip]
static FAMILIES: [Family; 19] = [
    family("red",
        ["#FFEBEE", "#FFCDD2", "#EF9A9A", "#E57373", "#EF5350", "#F44336", "#E53935", "#D32F2F", "#C62828", "#B71C1C"],
        Some(["#FF8A80", "#FF5252", "#FF1744", "#D50000"])),
    family("pink",
        ["#FCE4EC", "#F8BBD0", "#F48FB1", "#F06292", "#EC407A", "#E91E63", "#D81B60", "#C2185B", "#AD1457", "#880E4F"],
        Some(["#FF80AB", "#FF4081", "#F50057", "#C51162"])),
    family("purple",
        ["#F3E5F5", "#E1BEE7", "#CE93D8", "#BA68C8", "#AB47BC", "#9C27B0", "#8E24AA", "#7B1FA2", "#6A1B9A", "#4A148C"],
        Some(["#EA80FC", "#E040FB", "#D500F9", "#AA00FF"])),
    family("deep-purple",
        ["#EDE7F6", "#D1C4E9", "#B39DDB", "#9575CD", "#7E57C2", "#673AB7", "#5E35B1", "#512DA8", "#4527A0", "#311B92"],
        Some(["#B388FF", "#7C4DFF", "#651FFF", "#6200EA"])),
    family("indigo",
        ["#E8EAF6", "#C5CAE9", "#9FA8DA", "#7986CB", "#5C6BC0", "#3F51B5", "#3949AB", "#303F9F", "#283593", "#1A237E"],
        Some(["#8C9EFF", "#536DFE", "#3D5AFE", "#304FFE"])),
    family("blue",
        ["#E3F2FD", "#BBDEFB", "#90CAF9", "#64B5F6", "#42A5F5", "#2196F3", "#1E88E5", "#1976D2", "#1565C0", "#0D47A1"],
        Some(["#82B1FF", "#448AFF", "#2979FF", "#2962FF"])),
    family("light-blue",
        ["#E1F5FE", "#B3E5FC", "#81D4FA", "#4FC3F7", "#29B6F6", "#03A9F4", "#039BE5", "#0288D1", "#0277BD", "#01579B"],
        Some(["#80D8FF", "#40C4FF", "#00B0FF", "#0091EA"])),
    family("cyan",
        ["#E0F7FA", "#B2EBF2", "#80DEEA", "#4DD0E1", "#26C6DA", "#00BCD4", "#00ACC1", "#0097A7", "#00838F", "#006064"],
        Some(["#84FFFF", "#18FFFF", "#00E5FF", "#00B8D4"])),
    family("teal",
        ["#E0F2F1", "#B2DFDB", "#80CBC4", "#4DB6AC", "#26A69A", "#009688", "#00897B", "#00796B", "#00695C", "#004D40"],
        Some(["#A7FFEB", "#64FFDA", "#1DE9B6", "#00BFA5"])),
    family("green",
        ["#E8F5E9", "#C8E6C9", "#A5D6A7", "#81C784", "#66BB6A", "#4CAF50", "#43A047", "#388E3C", "#2E7D32", "#1B5E20"],
        Some(["#B9F6CA", "#69F0AE", "#00E676", "#00C853"])),
    family("light-green",
        ["#F1F8E9", "#DCEDC8", "#C5E1A5", "#AED581", "#9CCC65", "#8BC34A", "#7CB342", "#689F38", "#558B2F", "#33691E"],
        Some(["#CCFF90", "#B2FF59", "#76FF03", "#64DD17"])),
    family("lime",
        ["#F9FBE7", "#F0F4C3", "#E6EE9C", "#DCE775", "#D4E157", "#CDDC39", "#C0CA33", "#AFB42B", "#9E9D24", "#827717"],
        Some(["#F4FF81", "#EEFF41", "#C6FF00", "#AEEA00"])),
    family("yellow",
        ["#FFFDE7", "#FFF9C4", "#FFF59D", "#FFF176", "#FFEE58", "#FFEB3B", "#FDD835", "#FBC02D", "#F9A825", "#F57F17"],
        Some(["#FFFF8D", "#FFFF00", "#FFEA00", "#FFD600"])),
    family("amber",
        ["#FFF8E1", "#FFECB3", "#FFE082", "#FFD54F", "#FFCA28", "#FFC107", "#FFB300", "#FFA000", "#FF8F00", "#FF6F00"],
        Some(["#FFE57F", "#FFD740", "#FFC400", "#FFAB00"])),
    family("orange",
        ["#FFF3E0", "#FFE0B2", "#FFCC80", "#FFB74D", "#FFA726", "#FF9800", "#FB8C00", "#F57C00", "#EF6C00", "#E65100"],
        Some(["#FFD180", "#FFAB40", "#FF9100", "#FF6D00"])),
    family("deep-orange",
        ["#FBE9E7", "#FFCCBC", "#FFAB91", "#FF8A65", "#FF7043", "#FF5722", "#F4511E", "#E64A19", "#D84315", "#BF360C"],
        Some(["#FF9E80", "#FF6E40", "#FF3D00", "#DD2C00"])),
    family("brown",
        ["#EFEBE9", "#D7CCC8", "#BCAAA4", "#A1887F", "#8D6E63", "#795548", "#6D4C41", "#5D4037", "#4E342E", "#3E2723"],
        None),
    family("blue-grey",
        ["#ECEFF1", "#CFD8DC", "#B0BEC5", "#90A4AE", "#78909C", "#607D8B", "#546E7A", "#455A64", "#37474F", "#263238"],
        None),
    family("grey",
        ["#FAFAFA", "#F5F5F5", "#EEEEEE", "#E0E0E0", "#BDBDBD", "#9E9E9E", "#757575", "#616161", "#424242", "#212121"],
        None),
];

const THEME: [(&str, &str); 9] = [
    ("primary", "#1976D2"),
    ("secondary", "#424242"),
    ("accent", "#82B1FF"),
    ("error", "#FF5252"),
    ("info", "#2196F3"),
    ("success", "#4CAF50"),
    ("warning", "#FB8C00"),
    ("white", "#FFFFFF"),
    ("black", "#000000"),
];

// Short aliases that do not follow the shade rule.
const ALIAS_OVERRIDES: [(&str, &str); 1] = [("yellow-accent", "#FFD740")];

const BASE: usize = 5;
const LIGHT: usize = 1;
const DARK: usize = 7;
/// Shade used as accent by families without accents.
const ACCENTLESS: usize = 4;

impl Family {
    fn shade(&self, suffix: &str) -> Option<&'static str> {
        let numbered = |prefix: &str| {
            suffix
                .strip_prefix(prefix)
                .and_then(|n| n.parse::<usize>().ok())
        };

        match suffix {
            "base" => Some(self.shades[BASE]),
            "light" => Some(self.shades[LIGHT]),
            "dark" => Some(self.shades[DARK]),
            "accent" => Some(match self.accents {
                Some(accents) => accents[1],
                None => self.shades[ACCENTLESS],
            }),
            _ => {
                if let Some(n) = numbered("lighten-") {
                    (1..=5).contains(&n).then(|| self.shades[BASE - n])
                } else if let Some(n) = numbered("darken-") {
                    (1..=4).contains(&n).then(|| self.shades[BASE + n])
                } else if let Some(n) = numbered("accent-") {
                    let accents = self.accents?;
                    (1..=4).contains(&n).then(|| accents[n - 1])
                } else {
                    None
                }
            }
        }
    }
}

fn normalize(token: &str) -> String {
    token.trim().to_ascii_lowercase().replace("gray", "grey")
}

fn literal_hex(token: &str) -> Option<String> {
    let digits = token.strip_prefix('#')?;
    let valid = matches!(digits.len(), 3 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit());
    valid.then(|| format!("#{}", digits.to_ascii_uppercase()))
}

/// Resolves a color token to a hex string, `None` when the token is unknown.
pub fn lookup(token: &str) -> Option<String> {
    let token = normalize(token);
    if token.is_empty() {
        return None;
    }
    if let Some(hex) = literal_hex(&token) {
        return Some(hex);
    }

    let known = THEME
        .iter()
        .chain(ALIAS_OVERRIDES.iter())
        .find(|(name, _)| *name == token)
        .map(|(_, hex)| *hex)
        .or_else(|| {
            FAMILIES.iter().find_map(|family| {
                if token == family.name {
                    return Some(family.shades[BASE]);
                }
                token
                    .strip_prefix(family.name)
                    .and_then(|rest| rest.strip_prefix('-'))
                    .and_then(|suffix| family.shade(suffix))
            })
        });

    known.map(str::to_string)
}

/// Resolves a color token to a hex string.
///
/// Unknown tokens degrade to [`NEUTRAL_HEX`].
pub fn to_hex(token: &str) -> String {
    lookup(token).unwrap_or_else(|| NEUTRAL_HEX.to_string())
}

/// Names of every palette family.
pub fn families() -> impl Iterator<Item = &'static str> {
    FAMILIES.iter().map(|family| family.name)
}
