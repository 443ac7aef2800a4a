use tracing::debug;

use super::{parse_timing_line, TimingParser, DEFAULT_SEGMENT_MS};
use crate::error::TimingError;
use crate::types::Segment;

/// Parser for `[MM:SS.cc] text` timing lines.
///
/// A segment ends where the line directly below it starts. When that line
/// is not a timing line (or there is none) the segment gets a default
/// length instead. Blank and non-matching lines produce no segment, so
/// parsing never returns an error.
#[derive(Debug, Clone)]
pub struct LineTimingParser {
    default_segment_ms: u64,
}

impl LineTimingParser {
    pub fn new(default_segment_ms: u64) -> Self {
        Self { default_segment_ms }
    }
}

impl Default for LineTimingParser {
    fn default() -> Self {
        Self::new(DEFAULT_SEGMENT_MS)
    }
}

impl TimingParser for LineTimingParser {
    fn parse(&self, input: &str) -> Result<Vec<Segment>, TimingError> {
        let lines: Vec<&str> = input.split('\n').map(str::trim).collect();
        let mut segments = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }

            let Some((start, text)) = parse_timing_line(line) else {
                debug!("Ignoring non-timing line {}: {:?}", i + 1, line);
                continue;
            };

            let end = lines
                .get(i + 1)
                .and_then(|next| parse_timing_line(next))
                .map(|(next_start, _)| next_start)
                .unwrap_or_else(|| start.saturating_add(self.default_segment_ms));

            segments.push(Segment::new(start, end, text));
        }

        Ok(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Vec<Segment> {
        LineTimingParser::default().parse(input).unwrap()
    }

    #[test]
    fn test_two_lines() {
        let segments = parse("[00:00.00] A\n[00:05.25] B");
        assert_eq!(
            segments,
            vec![Segment::new(0, 5_250, "A"), Segment::new(5_250, 10_250, "B")]
        );
    }

    #[test]
    fn test_one_digit_fraction() {
        let segments = parse("[00:01.5] A");
        assert_eq!(segments, vec![Segment::new(1_500, 6_500, "A")]);
    }

    #[test]
    fn test_crlf_and_garbage_lines() {
        let segments = parse("[00:01.00] A\r\nnot a timing line\r\n[00:03.00] B\r\n");
        assert_eq!(
            segments,
            vec![Segment::new(1_000, 6_000, "A"), Segment::new(3_000, 8_000, "B")]
        );
    }

    #[test]
    fn test_blank_line_breaks_end_inference() {
        let segments = parse("[00:01.00] A\n\n[00:02.00] B");
        assert_eq!(segments[0], Segment::new(1_000, 6_000, "A"));
        assert_eq!(segments[1], Segment::new(2_000, 7_000, "B"));
    }

    #[test]
    fn test_custom_default_length() {
        let segments = LineTimingParser::new(2_000).parse("[00:01.00] A").unwrap();
        assert_eq!(segments, vec![Segment::new(1_000, 3_000, "A")]);
    }

    #[test]
    fn test_no_timing_lines() {
        assert!(LineTimingParser::default().parse("{ not json\n[bad]").is_ok());
        assert!(parse("").is_empty());
        assert!(parse("just some prose\nand more").is_empty());
    }

    #[test]
    fn test_text_keeps_symbols() {
        let segments = parse("[00:00.10] #1 「こんにちは」");
        assert_eq!(segments[0].text, "#1 「こんにちは」");
    }
}
