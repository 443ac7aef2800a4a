//! Millisecond <-> `M:SS` conversion

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::TimingError;

/// `M:SS`, `MM:SS` or either with a fractional seconds part, ASCII digits only
static TIME_TEXT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+):([0-9]{1,2})(?:\.([0-9]+))?$").expect("valid time regex"));

/// Render milliseconds as `minutes:seconds`, e.g. `75000` -> `"1:15"`.
///
/// Sub-second precision is dropped.
pub fn format(ms: u64) -> String {
    let total_seconds = ms / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Render milliseconds as `MM:SS.cc` (centiseconds), the form used by
/// bracketed timing lines.
///
/// From 100 minutes on the minutes field widens to three digits, which
/// timing lines cannot hold.
pub fn format_precise(ms: u64) -> String {
    let total_seconds = ms / 1000;
    let centis = (ms % 1000) / 10;
    format!(
        "{:02}:{:02}.{:02}",
        total_seconds / 60,
        total_seconds % 60,
        centis
    )
}

/// Parse `M:SS` / `MM:SS`, optionally with fractional seconds, into
/// milliseconds.
///
/// Seconds must be below 60. Fraction digits beyond milliseconds are
/// truncated.
pub fn parse(text: &str) -> Result<u64, TimingError> {
    let trimmed = text.trim();
    let invalid = || TimingError::InvalidTime(text.to_string());

    let caps = TIME_TEXT_REGEX.captures(trimmed).ok_or_else(invalid)?;

    let minutes: u64 = caps[1].parse().map_err(|_| invalid())?;
    let seconds: u64 = caps[2].parse().map_err(|_| invalid())?;
    if seconds >= 60 {
        return Err(invalid());
    }

    let fraction_ms = match caps.get(3) {
        Some(m) => decimal_fraction_ms(m.as_str()),
        None => 0,
    };

    minutes
        .checked_mul(60)
        .and_then(|m| m.checked_add(seconds))
        .and_then(|s| s.checked_mul(1000))
        .and_then(|ms| ms.checked_add(fraction_ms))
        .ok_or_else(invalid)
}

/// Decimal fraction digits to milliseconds: `"5"` -> 500, `"25"` -> 250,
/// `"1234"` -> 123.
fn decimal_fraction_ms(digits: &str) -> u64 {
    digits
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(3)
        .fold(0, |acc, b| acc * 10 + u64::from(b - b'0'))
}

/// Milliseconds for the pieces of a bracketed `MM:SS.f` / `MM:SS.ff`
/// timestamp.
///
/// A one-digit fraction counts in units of 100 ms, a two-digit fraction
/// in units of 10 ms. Callers guarantee each piece is 1-2 ASCII digits.
pub(crate) fn bracket_timestamp_ms(minutes: &str, seconds: &str, fraction: &str) -> Option<u64> {
    let minutes: u64 = minutes.parse().ok()?;
    let seconds: u64 = seconds.parse().ok()?;
    let multiplier = if fraction.len() == 1 { 100 } else { 10 };
    let fraction: u64 = fraction.parse().ok()?;
    Some((minutes * 60 + seconds) * 1000 + fraction * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!(format(0), "0:00");
        assert_eq!(format(75_000), "1:15");
        assert_eq!(format(75_999), "1:15");
        assert_eq!(format(600_000), "10:00");
    }

    #[test]
    fn test_format_precise() {
        assert_eq!(format_precise(5_250), "00:05.25");
        assert_eq!(format_precise(65_500), "01:05.50");
        assert_eq!(format_precise(0), "00:00.00");
        assert_eq!(format_precise(6_000_000), "100:00.00");
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse("1:15").unwrap(), 75_000);
        assert_eq!(parse("01:15").unwrap(), 75_000);
        assert_eq!(parse("0:05.5").unwrap(), 5_500);
        assert_eq!(parse("0:05.25").unwrap(), 5_250);
        assert_eq!(parse(" 2:03.125 ").unwrap(), 123_125);
        assert_eq!(parse("0:01.23456").unwrap(), 1_234);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for text in ["", "abc", "1", "1:", ":15", "1:75", "1:5x", "1:05.", "-1:05", "1:05:07"] {
            assert!(parse(text).is_err(), "{text:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_rejects_non_ascii_digits() {
        // Full-width digits, as typed through a Japanese IME
        for text in ["0:01.５", "0:０1", "１:05", "0:01.٥"] {
            assert!(parse(text).is_err(), "{text:?} should be rejected");
        }
    }

    #[test]
    fn test_format_parse_keeps_minutes_and_seconds() {
        for ms in [0, 999, 5_250, 59_990, 61_000, 754_320, 5_999_990] {
            let reparsed = parse(&format(ms)).unwrap();
            assert_eq!(reparsed / 1000, ms / 1000, "round trip of {ms}");
        }
    }

    #[test]
    fn test_bracket_fraction_multiplier() {
        assert_eq!(bracket_timestamp_ms("00", "05", "25"), Some(5_250));
        assert_eq!(bracket_timestamp_ms("00", "05", "5"), Some(5_500));
        assert_eq!(bracket_timestamp_ms("00", "05", "05"), Some(5_050));
        assert_eq!(bracket_timestamp_ms("1", "2", "3"), Some(62_300));
    }
}
