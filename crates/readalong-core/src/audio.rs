//! Audio metadata probe

use std::path::Path;

use hound::WavReader;
use thiserror::Error;

use crate::types::AudioInfo;

/// Audio probe errors
#[derive(Error, Debug)]
pub enum AudioError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("WAV error: {0}")]
    Hound(#[from] hound::Error),
}

/// Read duration and format details from an audio file header.
///
/// Only WAV is supported; other containers are left to the host's media
/// collaborator.
pub fn probe<P: AsRef<Path>>(path: P) -> Result<AudioInfo, AudioError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(AudioError::FileNotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    if extension.as_deref() != Some("wav") {
        return Err(AudioError::UnsupportedFormat(path.display().to_string()));
    }

    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    if spec.sample_rate == 0 {
        return Err(AudioError::UnsupportedFormat(format!(
            "{} (sample rate 0)",
            path.display()
        )));
    }
    // `duration` counts frames, i.e. samples per channel
    let duration_ms = u64::from(reader.duration()) * 1000 / u64::from(spec.sample_rate);

    Ok(AudioInfo {
        path: path.display().to_string(),
        duration_ms,
        sample_rate: spec.sample_rate,
        channels: spec.channels,
    })
}
