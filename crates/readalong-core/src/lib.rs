//! readalong-core - timing and segmentation for narrated text
//!
//! Turns timing files (bracketed timestamp lines or loosely shaped JSON)
//! into ordered segment lists, falls back to even auto-segmentation, and
//! maps playback positions to segments.

pub mod audio;
pub mod config;
pub mod error;
pub mod exporter;
pub mod index;
pub mod parsers;
pub mod pipeline;
pub mod segmenter;
pub mod sniffer;
pub mod time;
pub mod types;

pub use config::TimingConfig;
pub use error::TimingError;
pub use exporter::{ExportFormat, Exporter};
pub use index::{find_active, ActiveSegmentTracker};
pub use parsers::{LineTimingParser, StructuredTimingParser, TimingParser};
pub use pipeline::SegmentPipeline;
pub use segmenter::auto_segment;
pub use sniffer::{sniff, FormatSniffer};
pub use types::*;
