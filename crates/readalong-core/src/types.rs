//! Shared type definitions

use serde::{Deserialize, Serialize};

/// One chunk of narrated text with its playback interval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Start time (ms)
    pub start: u64,
    /// End time (ms)
    pub end: u64,
    /// Text content
    pub text: String,
}

impl Segment {
    /// Create a new segment
    pub fn new(start: u64, end: u64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// Length of the interval (ms), zero when `end < start`
    pub fn duration(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// Half-open interval test `[start, end)`
    pub fn contains(&self, position_ms: u64) -> bool {
        position_ms >= self.start && position_ms < self.end
    }
}

/// Raw timing-file content, classified by the sniffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimingSource {
    /// `[MM:SS.cc] text` lines
    LineBased(String),
    /// JSON array or object
    Structured(String),
    /// No timing data supplied
    Absent,
}

impl TimingSource {
    /// Short label used in logs and CLI output
    pub fn kind(&self) -> &'static str {
        match self {
            TimingSource::LineBased(_) => "line_based",
            TimingSource::Structured(_) => "structured",
            TimingSource::Absent => "absent",
        }
    }
}

/// Where a loaded segment list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentSource {
    /// Parsed from a JSON timing file
    Structured,
    /// Parsed from bracketed timestamp lines
    LineBased,
    /// Evenly distributed over the audio duration
    AutoSegmented,
    /// Nothing usable (no timing data and no text or duration)
    Empty,
}

impl std::fmt::Display for SegmentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SegmentSource::Structured => write!(f, "structured"),
            SegmentSource::LineBased => write!(f, "line_based"),
            SegmentSource::AutoSegmented => write!(f, "auto_segmented"),
            SegmentSource::Empty => write!(f, "empty"),
        }
    }
}

/// Canonical segment list plus its provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadedSegments {
    /// Segments in playback order
    pub segments: Vec<Segment>,
    /// Which stage produced them
    pub source: SegmentSource,
}

/// Audio file information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioInfo {
    /// File path
    pub path: String,
    /// Duration (ms)
    pub duration_ms: u64,
    /// Sample rate
    pub sample_rate: u32,
    /// Channel count
    pub channels: u16,
}
