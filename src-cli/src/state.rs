//! Application state shared by commands

use readalong_core::SegmentPipeline;

use crate::config::ReadalongConfig;

/// Main application state
pub struct AppState {
    /// Effective configuration
    pub config: ReadalongConfig,
    /// Segment loader built from `config.timing`
    pub pipeline: SegmentPipeline,
}

impl AppState {
    pub fn new(config: ReadalongConfig) -> Self {
        let pipeline = SegmentPipeline::new(&config.timing);
        Self { config, pipeline }
    }
}
