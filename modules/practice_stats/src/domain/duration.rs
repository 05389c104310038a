//! Stored practice durations are interval text of the form `H:MM:SS`.
//! Anything else counts as zero minutes so one bad row never breaks aggregation.

use once_cell::sync::Lazy;
use regex::Regex;

static INTERVAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+):([0-9]{2}):([0-9]{2})$").expect("interval regex"));

/// Whole minutes encoded by `raw`; seconds are truncated.
pub fn normalize_minutes(raw: Option<&str>) -> u64 {
    raw.and_then(parse_interval).unwrap_or(0)
}

/// Same as [`normalize_minutes`] for loosely-typed payloads; non-strings yield 0.
pub fn normalize_json(raw: &serde_json::Value) -> u64 {
    normalize_minutes(raw.as_str())
}

fn parse_interval(raw: &str) -> Option<u64> {
    let caps = INTERVAL_RE.captures(raw)?;
    let hours: u64 = caps[1].parse().ok()?;
    let minutes: u64 = caps[2].parse().ok()?;
    hours.checked_mul(60)?.checked_add(minutes)
}

/// Render minutes as the stored interval form (`H:MM:00`).
pub fn format_interval(minutes: u32) -> String {
    format!("{}:{:02}:00", minutes / 60, minutes % 60)
}
