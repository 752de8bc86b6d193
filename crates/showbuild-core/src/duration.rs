//! Duration parsing, formatting and aggregation.
//!
//! Item durations arrive as clock strings (`"M:SS"`, `"H:MM:SS"`), bare
//! integer strings, or numbers of seconds. Nothing here fails: malformed or
//! negative fragments count as zero.

use showbuild_models::{ItemDuration, RundownItem};

/// Converts an item duration to whole seconds.
pub fn to_seconds(duration: &ItemDuration) -> u64 {
    match duration {
        ItemDuration::Text(text) => parse_seconds(text),
        ItemDuration::Seconds(secs) if secs.is_finite() && *secs > 0.0 => secs.trunc() as u64,
        ItemDuration::Seconds(_) => 0,
    }
}

/// Parses a clock string or bare integer string into whole seconds.
///
/// One colon reads as `M:SS`, two as `H:MM:SS`; anything with more colons
/// is zero.
pub fn parse_seconds(input: &str) -> u64 {
    let input = input.trim();
    if input.is_empty() {
        return 0;
    }

    let parts: Vec<u64> = input.split(':').map(fragment).collect();
    match parts.as_slice() {
        [secs] => *secs,
        [mins, secs] => mins.saturating_mul(60).saturating_add(*secs),
        [hours, mins, secs] => hours
            .saturating_mul(3600)
            .saturating_add(mins.saturating_mul(60))
            .saturating_add(*secs),
        _ => 0,
    }
}

fn fragment(part: &str) -> u64 {
    part.trim().parse::<i64>().map_or(0, |n| n.max(0) as u64)
}

/// Formats seconds as `M:SS`, or `H:MM:SS` once there is at least an hour.
pub fn format(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Sums the durations of all items that have one.
pub fn total_seconds<'a>(items: impl IntoIterator<Item = &'a RundownItem>) -> u64 {
    items
        .into_iter()
        .filter_map(|item| item.duration.as_ref())
        .map(to_seconds)
        .fold(0u64, u64::saturating_add)
}

/// Total running time of `items`, formatted.
pub fn aggregate<'a>(items: impl IntoIterator<Item = &'a RundownItem>) -> String {
    format(total_seconds(items))
}

/// Display form of a single item duration.
///
/// Clock strings are shown as entered; numbers and bare integer strings are
/// formatted; a missing duration shows `0:00`.
pub fn display(duration: Option<&ItemDuration>) -> String {
    match duration {
        None => format(0),
        Some(ItemDuration::Text(text)) if text.contains(':') => text.clone(),
        Some(other) => format(to_seconds(other)),
    }
}
