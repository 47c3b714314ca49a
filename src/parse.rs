//! Type coercion for raw environment variable values.
//!
//! This module provides:
//! - A fallback combinator that turns any parse failure into the field's
//!   documented default
//! - A duration-literal parser (e.g. "15m", "24h", "1h30m")
//! - Comma-separated list splitting with whitespace trimming

use std::time::Duration;

/// Why a raw configuration value could not be coerced to its typed form.
///
/// This error never escapes the loader: every parse failure is absorbed by
/// [`or_default`] before a `Config` is assembled.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The duration string was empty (or whitespace only).
    #[error("empty duration")]
    EmptyDuration,

    /// A magnitude had no unit suffix (e.g. "15").
    #[error("missing unit suffix")]
    MissingUnit,

    /// A unit suffix was not one of ms, s, m, h.
    #[error("unknown duration unit: {0:?}")]
    UnknownUnit(String),

    /// A magnitude was not a base-10 integer.
    #[error("invalid magnitude: {0}")]
    InvalidMagnitude(#[from] std::num::ParseIntError),

    /// The combined duration overflowed.
    #[error("duration out of range")]
    OutOfRange,
}

/// Apply `parser` to `raw`, falling back to `default` on failure.
///
/// Configuration loading never fails: a malformed value is logged at warn
/// level (naming the variable, not echoing the value, since some fields are
/// secrets) and replaced by the field's documented default.
pub fn or_default<T, E>(key: &str, raw: &str, default: T, parser: impl FnOnce(&str) -> Result<T, E>) -> T
where
    E: std::fmt::Display,
{
    match parser(raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!("Invalid value for {} ({}), using default", key, err);
            default
        }
    }
}

/// Parse a duration literal: one or more integer-magnitude/unit-suffix
/// tokens, summed together.
///
/// Supported units are `ms`, `s`, `m`, and `h`.
///
/// # Examples
///
/// - `"15m"` → 15 minutes
/// - `"24h"` → 24 hours
/// - `"1h30m"` → 90 minutes
/// - `"250ms"` → 250 milliseconds
///
/// # Errors
///
/// Returns a [`ParseError`] for empty input, a missing or unknown unit, a
/// non-integer magnitude, or an out-of-range total.
pub fn parse_duration(s: &str) -> Result<Duration, ParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseError::EmptyDuration);
    }

    let mut total = Duration::ZERO;
    let mut rest = s;
    while !rest.is_empty() {
        // Magnitude: the leading run of ASCII digits. An empty run (input
        // starts with a letter or sign) fails the integer parse below.
        let digits = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        let (magnitude, tail) = rest.split_at(digits);
        if tail.is_empty() {
            return Err(ParseError::MissingUnit);
        }
        let magnitude: u64 = magnitude.parse()?;

        // Unit: everything up to the next digit (or end of input).
        let unit_len = tail.find(|c: char| c.is_ascii_digit()).unwrap_or(tail.len());
        let (unit, next) = tail.split_at(unit_len);

        let millis = match unit {
            "ms" => magnitude,
            "s" => magnitude.checked_mul(1_000).ok_or(ParseError::OutOfRange)?,
            "m" => magnitude.checked_mul(60_000).ok_or(ParseError::OutOfRange)?,
            "h" => magnitude.checked_mul(3_600_000).ok_or(ParseError::OutOfRange)?,
            other => return Err(ParseError::UnknownUnit(other.to_string())),
        };
        total = total
            .checked_add(Duration::from_millis(millis))
            .ok_or(ParseError::OutOfRange)?;

        rest = next;
    }

    Ok(total)
}

/// Parse a base-10 integer.
pub fn parse_u32(s: &str) -> Result<u32, std::num::ParseIntError> {
    s.parse()
}

/// Split a comma-separated value into trimmed, non-empty tokens.
///
/// Order is preserved; tokens that are empty after trimming are dropped.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_unit_durations() {
        assert_eq!(parse_duration("15m").unwrap(), Duration::from_secs(15 * 60));
        assert_eq!(parse_duration("24h").unwrap(), Duration::from_secs(24 * 3600));
        assert_eq!(parse_duration("90s").unwrap(), Duration::from_secs(90));
        assert_eq!(parse_duration("250ms").unwrap(), Duration::from_millis(250));
    }

    #[test]
    fn parses_combined_durations() {
        assert_eq!(parse_duration("1h30m").unwrap(), Duration::from_secs(90 * 60));
        assert_eq!(parse_duration("1m30s").unwrap(), Duration::from_secs(90));
        assert_eq!(parse_duration("0h15m0s").unwrap(), Duration::from_secs(15 * 60));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(parse_duration("  5m  ").unwrap(), Duration::from_secs(300));
    }

    #[test]
    fn rejects_malformed_durations() {
        assert!(matches!(parse_duration(""), Err(ParseError::EmptyDuration)));
        assert!(matches!(parse_duration("   "), Err(ParseError::EmptyDuration)));
        assert!(matches!(parse_duration("15"), Err(ParseError::MissingUnit)));
        assert!(matches!(parse_duration("15d"), Err(ParseError::UnknownUnit(_))));
        assert!(matches!(
            parse_duration("garbage"),
            Err(ParseError::InvalidMagnitude(_))
        ));
        assert!(matches!(
            parse_duration("-5m"),
            Err(ParseError::InvalidMagnitude(_))
        ));
        // Trailing junk after a valid token still fails.
        assert!(parse_duration("5mx").is_err());
    }

    #[test]
    fn rejects_overflowing_durations() {
        assert!(matches!(
            parse_duration("18446744073709551615h"),
            Err(ParseError::OutOfRange)
        ));
    }

    #[test]
    fn or_default_keeps_parsed_values() {
        assert_eq!(or_default("RATE_LIMIT", "250", 100, parse_u32), 250);
    }

    #[test]
    fn or_default_substitutes_on_failure() {
        assert_eq!(or_default("RATE_LIMIT", "not_a_number", 100, parse_u32), 100);
        assert_eq!(
            or_default("JWT_EXPIRATION", "garbage", Duration::from_secs(60), parse_duration),
            Duration::from_secs(60)
        );
    }

    #[test]
    fn splits_and_trims_lists() {
        assert_eq!(
            split_list(" http://a.com , http://b.com ,,"),
            vec!["http://a.com".to_string(), "http://b.com".to_string()]
        );
    }

    #[test]
    fn split_preserves_order_and_drops_empties() {
        assert_eq!(split_list("c,a,b"), vec!["c", "a", "b"]);
        assert!(split_list("").is_empty());
        assert!(split_list(" , ,").is_empty());
    }
}
