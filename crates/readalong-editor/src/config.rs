//! Editor configuration

use serde::{Deserialize, Serialize};

/// Edit session settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Skip backward/forward step (ms)
    pub skip_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self { skip_ms: 5000 }
    }
}
