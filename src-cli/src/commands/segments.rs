//! `sniff`, `parse` and `locate` commands

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use readalong_core::{audio, find_active, sniff as sniff_content, time, ExportFormat};
use tracing::{info, warn};

use super::{emit, load_segment_file, read_text};
use crate::state::AppState;

/// Inputs for `parse`
pub struct ParseArgs {
    pub timing: Option<PathBuf>,
    pub text: Option<PathBuf>,
    pub duration_ms: Option<u64>,
    pub audio: Option<PathBuf>,
}

pub async fn sniff(timing: &Path) -> Result<()> {
    let content = read_text(timing).await?;
    println!("{}", sniff_content(Some(&content)).kind());
    Ok(())
}

pub async fn parse(
    state: &AppState,
    args: ParseArgs,
    format: ExportFormat,
    out: Option<&Path>,
) -> Result<()> {
    let timing = match &args.timing {
        Some(path) => Some(read_text(path).await?),
        None => None,
    };
    let text = match &args.text {
        Some(path) => read_text(path).await?,
        None => String::new(),
    };
    let duration_ms = resolve_duration(args.duration_ms, args.audio).await?;

    if timing.is_none() && (text.is_empty() || duration_ms == 0) {
        warn!("No timing file and no text/duration to auto-segment");
    }

    let loaded = state.pipeline.load(timing.as_deref(), &text, duration_ms);
    info!("{} segments from {}", loaded.segments.len(), loaded.source);

    emit(&loaded.segments, format, out)
}

pub async fn locate(state: &AppState, segments: &Path, position: &str) -> Result<()> {
    let position_ms = parse_position(position)?;
    let segments = load_segment_file(state, segments).await?;

    match find_active(&segments, position_ms) {
        Some(index) => {
            let segment = &segments[index];
            println!(
                "{}\t{}-{}\t{}",
                index,
                time::format(segment.start),
                time::format(segment.end),
                segment.text
            );
        }
        None => println!("none"),
    }
    Ok(())
}

async fn resolve_duration(duration_ms: Option<u64>, audio_path: Option<PathBuf>) -> Result<u64> {
    if let Some(ms) = duration_ms {
        return Ok(ms);
    }
    let Some(path) = audio_path else {
        return Ok(0);
    };

    let display = path.display().to_string();
    let info = tokio::task::spawn_blocking(move || audio::probe(path))
        .await
        .context("Audio probe task failed")?
        .with_context(|| format!("Failed to read audio info from {}", display))?;
    Ok(info.duration_ms)
}

/// Plain milliseconds or `M:SS(.fff)`
fn parse_position(text: &str) -> Result<u64> {
    let text = text.trim();
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        return text.parse().context("Position out of range");
    }
    match time::parse(text) {
        Ok(ms) => Ok(ms),
        Err(e) => bail!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("1500").unwrap(), 1_500);
        assert_eq!(parse_position("1:15").unwrap(), 75_000);
        assert_eq!(parse_position(" 0:05.25 ").unwrap(), 5_250);
        assert!(parse_position("soon").is_err());
        assert!(parse_position("").is_err());
    }

    #[tokio::test]
    async fn test_resolve_duration_prefers_explicit() {
        assert_eq!(resolve_duration(Some(42), None).await.unwrap(), 42);
        assert_eq!(resolve_duration(None, None).await.unwrap(), 0);
        assert!(resolve_duration(None, Some(PathBuf::from("/no/such.wav")))
            .await
            .is_err());
    }
}
