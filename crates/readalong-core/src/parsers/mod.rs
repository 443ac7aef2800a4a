//! Timing-file parsers

mod line;
mod structured;

pub use line::LineTimingParser;
pub use structured::StructuredTimingParser;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::TimingError;
use crate::time::bracket_timestamp_ms;
use crate::types::Segment;

/// End-time fallback when nothing else determines it (ms)
pub const DEFAULT_SEGMENT_MS: u64 = 5000;

/// `[MM:SS.cc] text`, minutes/seconds/fraction each 1-2 ASCII digits
static TIMING_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[([0-9]{1,2}):([0-9]{1,2})\.([0-9]{1,2})\]\s*(.*)$").expect("valid timing line regex")
});

/// The timestamp part of a timing line on its own, e.g. `"01:02.50"`
static TIMESTAMP_VALUE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2}):([0-9]{1,2})\.([0-9]{1,2})$").expect("valid timestamp regex")
});

/// A parser turning raw timing-file content into canonical segments.
///
/// Only structured input can fail (a malformed document); the line parser
/// skips what it cannot read.
pub trait TimingParser {
    fn parse(&self, input: &str) -> Result<Vec<Segment>, TimingError>;
}

/// Returns true if the (already trimmed) line is a bracketed timing line.
pub fn is_timing_line(line: &str) -> bool {
    TIMING_LINE_REGEX.is_match(line)
}

/// Split a trimmed timing line into its start time (ms) and text.
pub(crate) fn parse_timing_line(line: &str) -> Option<(u64, &str)> {
    let caps = TIMING_LINE_REGEX.captures(line)?;
    let start = bracket_timestamp_ms(&caps[1], &caps[2], &caps[3])?;
    let text = caps.get(4).map_or("", |m| m.as_str());
    Some((start, text))
}

/// Parse a bare `MM:SS.cc` timestamp value.
pub(crate) fn parse_timestamp_value(value: &str) -> Option<u64> {
    let caps = TIMESTAMP_VALUE_REGEX.captures(value)?;
    bracket_timestamp_ms(&caps[1], &caps[2], &caps[3])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_timing_line() {
        assert!(is_timing_line("[00:12.34] hello"));
        assert!(is_timing_line("[0:1.2]"));
        assert!(is_timing_line("[01:02.03]#tag text"));
        assert!(!is_timing_line("[00:12] hello"));
        assert!(!is_timing_line("[123:12.34] hello"));
        assert!(!is_timing_line("00:12.34 hello"));
        assert!(!is_timing_line(r#"[{"start": 0}]"#));
        assert!(!is_timing_line("[００:１２.３４] hello"));
    }

    #[test]
    fn test_parse_timing_line() {
        assert_eq!(parse_timing_line("[00:05.25] B"), Some((5_250, "B")));
        assert_eq!(parse_timing_line("[01:00.5]   spaced"), Some((60_500, "spaced")));
        assert_eq!(parse_timing_line("[00:00.00]"), Some((0, "")));
        assert_eq!(parse_timing_line("nope"), None);
    }

    #[test]
    fn test_parse_timestamp_value() {
        assert_eq!(parse_timestamp_value("01:02.50"), Some(62_500));
        assert_eq!(parse_timestamp_value("1:02.5"), Some(62_500));
        assert_eq!(parse_timestamp_value("1:02"), None);
        assert_eq!(parse_timestamp_value("[01:02.50]"), None);
        assert_eq!(parse_timestamp_value("01:02.５0"), None);
    }
}
