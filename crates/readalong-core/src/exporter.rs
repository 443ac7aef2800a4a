//! Segment list export

use std::fs;
use std::path::Path;

use chrono::Local;
use serde::Serialize;
use thiserror::Error;

use crate::time;
use crate::types::Segment;

/// Export errors
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Segment {index} starts at {start_ms} ms, past the last [MM:SS.cc] timestamp")]
    LineTimestampRange { index: usize, start_ms: u64 },
}

/// First start time a timing line cannot hold (100 minutes)
pub const LINE_START_LIMIT_MS: u64 = 100 * 60 * 1000;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// `{"segments": [...]}` document
    Json,
    /// `[MM:SS.cc] text` lines
    Lines,
}

/// Segment list exporter
pub struct Exporter;

impl Exporter {
    /// Write segments to `output_path` in the given format
    pub fn write<P: AsRef<Path>>(
        segments: &[Segment],
        output_path: P,
        format: ExportFormat,
    ) -> Result<(), ExportError> {
        let output_path = output_path.as_ref();

        // Make sure the directory exists
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = match format {
            ExportFormat::Json => Self::render_json(segments, true)?,
            ExportFormat::Lines => Self::render_lines(segments)?,
        };

        fs::write(output_path, content)?;
        Ok(())
    }

    /// Render the JSON document
    pub fn render_json(segments: &[Segment], pretty: bool) -> Result<String, ExportError> {
        let document = JsonDocument::from_segments(segments);

        let json = if pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        Ok(json)
    }

    /// Render bracketed timing lines.
    ///
    /// Only start times are written. On reload each end becomes the next
    /// line's start and the last end is start plus the default length, so
    /// gaps and custom end times do not survive. Timing lines have two
    /// minute digits; a start at or past [`LINE_START_LIMIT_MS`] is an error.
    pub fn render_lines(segments: &[Segment]) -> Result<String, ExportError> {
        let mut content = String::new();

        for (index, segment) in segments.iter().enumerate() {
            if segment.start >= LINE_START_LIMIT_MS {
                return Err(ExportError::LineTimestampRange {
                    index,
                    start_ms: segment.start,
                });
            }
            let text = segment.text.replace(['\r', '\n'], " ");
            content.push_str(&format!("[{}] {}\n", time::format_precise(segment.start), text));
        }

        Ok(content)
    }
}

/// JSON export structure
#[derive(Serialize)]
struct JsonDocument<'a> {
    version: String,
    generated_at: String,
    segment_count: usize,
    segments: &'a [Segment],
}

impl<'a> JsonDocument<'a> {
    fn from_segments(segments: &'a [Segment]) -> Self {
        Self {
            version: "1.0".to_string(),
            generated_at: Local::now().to_rfc3339(),
            segment_count: segments.len(),
            segments,
        }
    }
}
