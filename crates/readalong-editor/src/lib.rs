//! Timestamp correction for readalong segment lists
//!
//! An edit session works on its own copy of the segments. Times are
//! captured from an external playback clock, which the host samples
//! periodically and feeds in.

pub mod capture;
pub mod config;
pub mod error;
pub mod playback;

pub use capture::{CaptureEditor, CaptureState, EditOutcome, EditorState, TimeField, ToggleOutcome};
pub use config::EditorConfig;
pub use error::EditorError;
pub use playback::Playback;

// Re-export types from readalong-core
pub use readalong_core::Segment;
