//! Timing-file format detection

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::parsers::is_timing_line;
use crate::types::TimingSource;

/// Default number of leading characters tried as a standalone JSON value
pub const DEFAULT_SAMPLE_CHARS: usize = 100;

/// `[` followed by a number, e.g. a JSON array of timestamps
static NUMERIC_ARRAY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[\s*[0-9]+").expect("valid numeric array regex"));

/// Classifies raw timing content as structured (JSON) or line-based.
///
/// Line-based files start with `[` as well, so the bracketed timestamp
/// check on the first line runs before the generic JSON indicators.
#[derive(Debug, Clone)]
pub struct FormatSniffer {
    sample_chars: usize,
}

impl FormatSniffer {
    pub fn new(sample_chars: usize) -> Self {
        Self { sample_chars }
    }

    /// Classify `content`. `None` and blank content are [`TimingSource::Absent`].
    pub fn sniff(&self, content: Option<&str>) -> TimingSource {
        let Some(content) = content else {
            return TimingSource::Absent;
        };
        if content.trim().is_empty() {
            return TimingSource::Absent;
        }

        let source = if self.is_structured(content) {
            TimingSource::Structured(content.to_string())
        } else {
            TimingSource::LineBased(content.to_string())
        };
        debug!("Sniffed timing content as {}", source.kind());
        source
    }

    fn is_structured(&self, content: &str) -> bool {
        let trimmed = content.trim();

        if trimmed.starts_with('{') {
            return true;
        }

        if trimmed.starts_with('[') {
            if matches!(trimmed.chars().nth(1), Some('{') | Some('[')) {
                return true;
            }

            if trimmed.contains("\"start\"")
                || trimmed.contains("\"text\"")
                || trimmed.contains("\"end\"")
            {
                return true;
            }

            let first_line = trimmed.lines().next().unwrap_or_default().trim();
            if is_timing_line(first_line) {
                return false;
            }

            if NUMERIC_ARRAY_REGEX.is_match(trimmed) {
                return true;
            }
        }

        let sample: String = trimmed.chars().take(self.sample_chars).collect();
        if serde_json::from_str::<Value>(&sample).is_ok() {
            return true;
        }

        trimmed.contains("\"segments\"")
            || trimmed.contains("\"startTime\"")
            || trimmed.contains("\"endTime\"")
            || (trimmed.contains('{') && trimmed.contains('}'))
            || (trimmed.contains('[') && trimmed.contains(']'))
    }
}

impl Default for FormatSniffer {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_CHARS)
    }
}

/// Classify with the default sample length.
pub fn sniff(content: Option<&str>) -> TimingSource {
    FormatSniffer::default().sniff(content)
}
