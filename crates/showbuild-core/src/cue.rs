//! Broadcast cue markup.
//!
//! A cue is a typed insert in script content (voice-over, sound-on-tape,
//! full screen quote, ...). Cues are composed into markdown fragments and
//! spliced into the script buffer; they are not stored as structured data.

use std::collections::HashMap;
use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

/// Closed set of cue kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CueKind {
    /// Voice over.
    Vo,
    /// Natural sound.
    Nat,
    /// Pre-produced package.
    Pkg,
    /// Graphics.
    Gfx,
    /// Full screen quote.
    Fsq,
    /// Sound on tape.
    Sot,
    /// Vox pop.
    Vox,
    /// Music.
    Mus,
    /// Live shot.
    Live,
}

impl CueKind {
    pub const ALL: [CueKind; 9] = [
        CueKind::Vo,
        CueKind::Nat,
        CueKind::Pkg,
        CueKind::Gfx,
        CueKind::Fsq,
        CueKind::Sot,
        CueKind::Vox,
        CueKind::Mus,
        CueKind::Live,
    ];

    /// Heading tag of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            CueKind::Vo => "VO",
            CueKind::Nat => "NAT",
            CueKind::Pkg => "PKG",
            CueKind::Gfx => "GFX",
            CueKind::Fsq => "FSQ",
            CueKind::Sot => "SOT",
            CueKind::Vox => "VOX",
            CueKind::Mus => "MUS",
            CueKind::Live => "LIVE",
        }
    }
}

impl fmt::Display for CueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CueKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        CueKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown cue type: {}", s))
    }
}

/// Kind-specific optional fields of a cue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CueDetail {
    Vo {
        script: Option<String>,
    },
    Nat {
        location: Option<String>,
        ambient_type: Option<String>,
    },
    Pkg {
        reporter: Option<String>,
        pkg_duration: Option<String>,
        notes: Option<String>,
    },
    Gfx,
    Fsq {
        quote_text: Option<String>,
        attribution: Option<String>,
    },
    Sot {
        source_file: Option<String>,
        timecode: Option<String>,
    },
    Vox,
    Mus,
    Live,
}

impl CueDetail {
    /// Detail of `kind` with every optional field absent.
    pub fn empty(kind: CueKind) -> Self {
        match kind {
            CueKind::Vo => CueDetail::Vo { script: None },
            CueKind::Nat => CueDetail::Nat {
                location: None,
                ambient_type: None,
            },
            CueKind::Pkg => CueDetail::Pkg {
                reporter: None,
                pkg_duration: None,
                notes: None,
            },
            CueKind::Gfx => CueDetail::Gfx,
            CueKind::Fsq => CueDetail::Fsq {
                quote_text: None,
                attribution: None,
            },
            CueKind::Sot => CueDetail::Sot {
                source_file: None,
                timecode: None,
            },
            CueKind::Vox => CueDetail::Vox,
            CueKind::Mus => CueDetail::Mus,
            CueKind::Live => CueDetail::Live,
        }
    }

    pub fn kind(&self) -> CueKind {
        match self {
            CueDetail::Vo { .. } => CueKind::Vo,
            CueDetail::Nat { .. } => CueKind::Nat,
            CueDetail::Pkg { .. } => CueKind::Pkg,
            CueDetail::Gfx => CueKind::Gfx,
            CueDetail::Fsq { .. } => CueKind::Fsq,
            CueDetail::Sot { .. } => CueKind::Sot,
            CueDetail::Vox => CueKind::Vox,
            CueDetail::Mus => CueKind::Mus,
            CueDetail::Live => CueKind::Live,
        }
    }
}

/// A typed cue ready to be composed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    pub slug: String,
    /// Display duration; `TBD` when absent.
    pub duration: Option<String>,
    /// Primary text (description, narration, quote lead-in).
    pub body: String,
    pub detail: CueDetail,
}

impl Cue {
    /// Creates a cue with no duration.
    pub fn new(detail: CueDetail, slug: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            duration: None,
            body: body.into(),
            detail,
        }
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn kind(&self) -> CueKind {
        self.detail.kind()
    }
}

/// Untyped field bag as produced by the cue entry forms.
pub type CueFields = HashMap<String, String>;

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn header(tag: &str, slug: &str, duration: Option<&str>, body: &str) -> String {
    let duration = duration.filter(|d| !d.trim().is_empty()).unwrap_or("TBD");
    format!("### {}: {}\n**Duration:** {}\n\n{}\n", tag, slug, duration, body)
}

/// Composes the markdown fragment of a cue.
pub fn compose(cue: &Cue) -> String {
    let mut md = header(cue.kind().as_str(), &cue.slug, cue.duration.as_deref(), &cue.body);

    // Writing to a String cannot fail.
    match &cue.detail {
        CueDetail::Sot {
            source_file,
            timecode,
        } => {
            if let Some(file) = present(source_file) {
                let _ = write!(md, "\n**Source:** {}", file);
                if let Some(tc) = present(timecode) {
                    let _ = write!(md, " @ {}", tc);
                }
            }
        }
        CueDetail::Vo { script } => {
            if let Some(script) = present(script) {
                let _ = write!(md, "\n**Script:**\n{}", script);
            }
        }
        CueDetail::Fsq {
            quote_text,
            attribution,
        } => {
            if let Some(quote) = present(quote_text) {
                let _ = write!(md, "\n> {}", quote);
                if let Some(who) = present(attribution) {
                    let _ = write!(md, "\n> — {}", who);
                }
            }
        }
        CueDetail::Nat {
            location,
            ambient_type,
        } => {
            if let Some(location) = present(location) {
                let _ = write!(md, "\n**Location:** {}", location);
                if let Some(ambient) = present(ambient_type) {
                    let _ = write!(md, " ({})", ambient);
                }
            }
        }
        CueDetail::Pkg {
            reporter,
            pkg_duration,
            notes,
        } => {
            if let Some(reporter) = present(reporter) {
                let _ = write!(md, "\n**Reporter:** {}", reporter);
            }
            if let Some(length) = present(pkg_duration) {
                let _ = write!(md, "\n**Package Duration:** {}", length);
            }
            if let Some(notes) = present(notes) {
                let _ = write!(md, "\n**Notes:** {}", notes);
            }
        }
        CueDetail::Gfx | CueDetail::Vox | CueDetail::Mus | CueDetail::Live => {}
    }

    md
}

/// Composes a cue from an untyped field bag.
///
/// Unrecognized kinds still get the heading, duration and body lines, with
/// the kind uppercased, but no kind-specific appendix.
pub fn compose_fields(kind: &str, fields: &CueFields) -> String {
    let field = |name: &str| {
        fields
            .get(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let slug = field("slug").unwrap_or_default();
    let duration = field("duration");
    let body = field("description")
        .or_else(|| field("text"))
        .or_else(|| field("title"))
        .unwrap_or_default();

    let Ok(kind) = kind.parse::<CueKind>() else {
        return header(&kind.trim().to_uppercase(), &slug, duration.as_deref(), &body);
    };

    let detail = match kind {
        CueKind::Vo => CueDetail::Vo {
            script: field("script"),
        },
        CueKind::Nat => CueDetail::Nat {
            location: field("location"),
            ambient_type: field("ambientType"),
        },
        CueKind::Pkg => CueDetail::Pkg {
            reporter: field("reporter"),
            pkg_duration: field("pkgDuration"),
            notes: field("notes"),
        },
        CueKind::Fsq => CueDetail::Fsq {
            quote_text: field("quoteText"),
            attribution: field("attribution"),
        },
        CueKind::Sot => CueDetail::Sot {
            source_file: field("sourceFile"),
            timecode: field("timecode"),
        },
        other => CueDetail::empty(other),
    };

    compose(&Cue {
        slug,
        duration,
        body,
        detail,
    })
}

/// Splices composed markup into a text buffer.
///
/// The markup is wrapped in blank-line separators and inserted at `caret`
/// (a byte offset, clamped to the buffer and moved back to a character
/// boundary), or appended when there is no caret.
pub fn insert_at_caret(buffer: &str, markup: &str, caret: Option<usize>) -> String {
    let block = format!("\n\n{}\n\n", markup);
    let Some(caret) = caret else {
        return format!("{}{}", buffer, block);
    };

    let mut at = caret.min(buffer.len());
    while !buffer.is_char_boundary(at) {
        at -= 1;
    }

    let (before, after) = buffer.split_at(at);
    format!("{}{}{}", before, block, after)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> CueFields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_generic_lines() {
        let cue = Cue::new(CueDetail::Gfx, "lower-third", "Name and title").with_duration("0:05");
        assert_eq!(
            compose(&cue),
            "### GFX: lower-third\n**Duration:** 0:05\n\nName and title\n"
        );
    }

    #[test]
    fn test_missing_duration_is_tbd() {
        let cue = Cue::new(CueDetail::Live, "remote", "Reporter on scene");
        assert!(compose(&cue).contains("**Duration:** TBD\n"));
    }

    #[test]
    fn test_pkg_with_only_reporter() {
        let cue = Cue::new(
            CueDetail::Pkg {
                reporter: Some("Dana Lee".into()),
                pkg_duration: None,
                notes: None,
            },
            "flood-pkg",
            "Flood recovery package",
        );
        let md = compose(&cue);

        assert!(md.ends_with("\n**Reporter:** Dana Lee"));
        assert_eq!(md.matches("**Reporter:**").count(), 1);
        assert!(!md.contains("Notes:"));
        assert!(!md.contains("Package Duration:"));
    }

    #[test]
    fn test_pkg_appendix_order() {
        let cue = Cue::new(
            CueDetail::Pkg {
                reporter: Some("Dana".into()),
                pkg_duration: Some("2:10".into()),
                notes: Some("Check audio".into()),
            },
            "pkg",
            "Body",
        );
        assert!(compose(&cue).ends_with(
            "Body\n\n**Reporter:** Dana\n**Package Duration:** 2:10\n**Notes:** Check audio"
        ));
    }

    #[test]
    fn test_sot_source_and_timecode_share_line() {
        let cue = Cue::new(
            CueDetail::Sot {
                source_file: Some("mayor.mp4".into()),
                timecode: Some("00:01:12".into()),
            },
            "mayor-sot",
            "Mayor on the budget",
        );
        assert!(compose(&cue).ends_with("\n**Source:** mayor.mp4 @ 00:01:12"));
    }

    #[test]
    fn test_sot_timecode_without_source_is_dropped() {
        let cue = Cue::new(
            CueDetail::Sot {
                source_file: None,
                timecode: Some("00:01:12".into()),
            },
            "sot",
            "Body",
        );
        assert!(!compose(&cue).contains("00:01:12"));
    }

    #[test]
    fn test_fsq_quote_and_attribution() {
        let cue = Cue::new(
            CueDetail::Fsq {
                quote_text: Some("We will rebuild.".into()),
                attribution: Some("Gov. Smith".into()),
            },
            "quote",
            "Governor quote",
        );
        assert!(compose(&cue).ends_with("\n> We will rebuild.\n> — Gov. Smith"));
    }

    #[test]
    fn test_vo_script_block() {
        let cue = Cue::new(
            CueDetail::Vo {
                script: Some("Crews worked overnight.".into()),
            },
            "crews-vo",
            "Video of crews",
        );
        assert!(compose(&cue).ends_with("\n**Script:**\nCrews worked overnight."));
    }

    #[test]
    fn test_nat_location_with_ambient() {
        let cue = Cue::new(
            CueDetail::Nat {
                location: Some("Main St".into()),
                ambient_type: Some("crowd".into()),
            },
            "nat",
            "Parade",
        );
        assert!(compose(&cue).ends_with("\n**Location:** Main St (crowd)"));
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let cue = Cue::new(
            CueDetail::Pkg {
                reporter: Some(String::new()),
                pkg_duration: Some("  ".into()),
                notes: None,
            },
            "pkg",
            "Body",
        );
        assert_eq!(compose(&cue), "### PKG: pkg\n**Duration:** TBD\n\nBody\n");
    }

    #[test]
    fn test_compose_fields_known_kind() {
        let md = compose_fields(
            "sot",
            &fields(&[
                ("slug", "mayor"),
                ("duration", "0:20"),
                ("description", "Mayor"),
                ("sourceFile", "mayor.mp4"),
            ]),
        );
        assert!(md.starts_with("### SOT: mayor\n**Duration:** 0:20\n\nMayor\n"));
        assert!(md.ends_with("**Source:** mayor.mp4"));
    }

    #[test]
    fn test_compose_fields_unknown_kind_is_generic() {
        let md = compose_fields(
            "weather",
            &fields(&[("slug", "wx"), ("description", "Forecast"), ("reporter", "Sam")]),
        );
        assert_eq!(md, "### WEATHER: wx\n**Duration:** TBD\n\nForecast\n");
    }

    #[test]
    fn test_cue_kind_parse_case_insensitive() {
        assert_eq!("fsq".parse::<CueKind>(), Ok(CueKind::Fsq));
        assert_eq!("Live".parse::<CueKind>(), Ok(CueKind::Live));
        assert!("tag".parse::<CueKind>().is_err());
    }

    #[test]
    fn test_insert_appends_without_caret() {
        assert_eq!(insert_at_caret("Intro", "CUE", None), "Intro\n\nCUE\n\n");
    }

    #[test]
    fn test_insert_at_caret() {
        assert_eq!(insert_at_caret("AB", "CUE", Some(1)), "A\n\nCUE\n\nB");
        assert_eq!(insert_at_caret("AB", "CUE", Some(0)), "\n\nCUE\n\nAB");
    }

    #[test]
    fn test_insert_clamps_caret() {
        assert_eq!(insert_at_caret("AB", "CUE", Some(99)), "AB\n\nCUE\n\n");
        // 'é' is two bytes; offset 1 falls inside it.
        assert_eq!(insert_at_caret("é", "C", Some(1)), "\n\nC\n\né");
    }
}
