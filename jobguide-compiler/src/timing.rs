//! Duration string normalization.
//!
//! The guide pages express timings in a handful of shapes: a number with a
//! unit suffix ("2.5s", "3m"), a bare number ("45"), the placeholders
//! "Instant" and "-", the open-ended "Infinite", and two fixed tooltip
//! sentences meaning the effect inherits the remaining duration of another
//! effect. Everything is folded into seconds; "Infinite" becomes the
//! sentinel `-1.0`. Anything else is a data-shape violation and fails the
//! pass rather than defaulting, since downstream consumers assume a
//! resolved numeric value.

use crate::error::CompileError;

/// Sentinel for an unbounded duration ("Infinite").
pub const INFINITE: f64 = -1.0;

/// Tooltip sentences that inherit the remaining duration of another effect.
/// Normalized to `0.0` like "Instant".
const INHERITED_DURATION_TEXTS: [&str; 2] = [
    "Remaining duration of the original effect",
    "Duration of the effect it is replacing",
];

/// Normalize a raw timing string to seconds.
pub fn parse_duration(raw: &str) -> Result<f64, CompileError> {
    let raw = raw.trim();

    if let Some(seconds) = parse_suffixed(raw) {
        return Ok(seconds);
    }

    match raw {
        "Instant" | "-" => Ok(0.0),
        "Infinite" => Ok(INFINITE),
        _ if INHERITED_DURATION_TEXTS.contains(&raw) => Ok(0.0),
        _ => parse_decimal(raw).ok_or_else(|| CompileError::MalformedTiming(raw.to_string())),
    }
}

/// Strict numeric-with-suffix form: unsigned decimal followed by
/// `s` (seconds) or `m` (minutes).
fn parse_suffixed(raw: &str) -> Option<f64> {
    let (number, factor) = if let Some(number) = raw.strip_suffix('s') {
        (number, 1.0)
    } else if let Some(number) = raw.strip_suffix('m') {
        (number, 60.0)
    } else {
        return None;
    };
    parse_decimal(number).map(|value| value * factor)
}

/// Unsigned decimal number. Rejects signs, exponents, and the `inf`/`NaN`
/// spellings `f64::from_str` would otherwise accept.
fn parse_decimal(s: &str) -> Option<f64> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    s.parse().ok()
}
