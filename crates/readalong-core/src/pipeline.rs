//! Timing file -> canonical segment list

use tracing::{debug, info, warn};

use crate::config::TimingConfig;
use crate::parsers::{LineTimingParser, StructuredTimingParser, TimingParser};
use crate::segmenter::auto_segment;
use crate::sniffer::FormatSniffer;
use crate::types::{LoadedSegments, Segment, SegmentSource, TimingSource};

/// Runs sniff -> parse -> auto-segment.
///
/// Structured input that fails to parse, or parses to nothing, is retried
/// as line-based text. If that also yields nothing the story text is
/// auto-segmented over the audio duration. Malformed input never fails
/// the load.
pub struct SegmentPipeline {
    sniffer: FormatSniffer,
    line_parser: LineTimingParser,
    structured_parser: StructuredTimingParser,
}

impl SegmentPipeline {
    pub fn new(config: &TimingConfig) -> Self {
        Self {
            sniffer: FormatSniffer::new(config.sniff_sample_chars),
            line_parser: LineTimingParser::new(config.default_segment_ms),
            structured_parser: StructuredTimingParser::new(config.default_segment_ms),
        }
    }

    /// Build the segment list for a story.
    pub fn load(&self, timing: Option<&str>, text: &str, duration_ms: u64) -> LoadedSegments {
        let (segments, source) = match self.sniffer.sniff(timing) {
            TimingSource::Structured(raw) => self.load_structured(&raw),
            TimingSource::LineBased(raw) => (self.load_lines(&raw), SegmentSource::LineBased),
            TimingSource::Absent => (Vec::new(), SegmentSource::Empty),
        };

        if !segments.is_empty() {
            info!("Loaded {} segments ({})", segments.len(), source);
            return LoadedSegments { segments, source };
        }

        let segments = auto_segment(text, duration_ms);
        let source = if segments.is_empty() {
            SegmentSource::Empty
        } else {
            SegmentSource::AutoSegmented
        };
        info!("Loaded {} segments ({})", segments.len(), source);
        LoadedSegments { segments, source }
    }

    fn load_structured(&self, raw: &str) -> (Vec<Segment>, SegmentSource) {
        match self.structured_parser.parse(raw) {
            Ok(segments) if !segments.is_empty() => return (segments, SegmentSource::Structured),
            Ok(_) => debug!("Structured timing yielded no segments, trying line format"),
            Err(e) => warn!("Falling back to line format: {}", e),
        }
        (self.load_lines(raw), SegmentSource::LineBased)
    }

    fn load_lines(&self, raw: &str) -> Vec<Segment> {
        // Never fails: lines that don't match are skipped
        self.line_parser.parse(raw).unwrap_or_default()
    }
}

impl Default for SegmentPipeline {
    fn default() -> Self {
        Self::new(&TimingConfig::default())
    }
}
