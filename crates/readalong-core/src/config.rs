//! Timing configuration

use serde::{Deserialize, Serialize};

use crate::parsers::DEFAULT_SEGMENT_MS;
use crate::sniffer::DEFAULT_SAMPLE_CHARS;

/// Settings for sniffing and parsing timing files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Length given to a segment whose end cannot be determined (ms)
    pub default_segment_ms: u64,
    /// Leading characters tried as a standalone JSON value when sniffing
    pub sniff_sample_chars: usize,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            default_segment_ms: DEFAULT_SEGMENT_MS,
            sniff_sample_chars: DEFAULT_SAMPLE_CHARS,
        }
    }
}
