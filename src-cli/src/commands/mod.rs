//! Command handlers

pub mod config;
pub mod edit;
pub mod segments;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use readalong_core::{ExportFormat, Exporter, Segment};
use tokio::fs;

use crate::cli::{Cli, Commands};
use crate::state::AppState;

pub async fn handle_command(cli: Cli, state: AppState) -> Result<()> {
    match cli.command {
        Commands::Sniff { timing } => segments::sniff(&timing).await,
        Commands::Parse {
            timing,
            text,
            duration_ms,
            audio,
            format,
            out,
        } => {
            segments::parse(
                &state,
                segments::ParseArgs {
                    timing,
                    text,
                    duration_ms,
                    audio,
                },
                format.into(),
                out.as_deref(),
            )
            .await
        }
        Commands::Locate { segments, position } => {
            segments::locate(&state, &segments, &position).await
        }
        Commands::Edit {
            segments,
            set_start,
            set_end,
            merge,
            format,
            out,
        } => {
            edit::edit(
                &state,
                &segments,
                edit::EditPlan {
                    set_start,
                    set_end,
                    merge,
                },
                format.into(),
                out.as_deref(),
            )
            .await
        }
        Commands::Config => config::show(&state, cli.config),
    }
}

async fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}

/// Load a segment file through the pipeline without any fallback text
async fn load_segment_file(state: &AppState, path: &Path) -> Result<Vec<Segment>> {
    let content = read_text(path).await?;
    let loaded = state.pipeline.load(Some(&content), "", 0);
    Ok(loaded.segments)
}

/// Write segments to `out`, or print them
fn emit(segments: &[Segment], format: ExportFormat, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            Exporter::write(segments, path, format)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote {} segments to {}", segments.len(), path.display());
        }
        None => {
            let rendered = match format {
                ExportFormat::Json => Exporter::render_json(segments, true)?,
                ExportFormat::Lines => Exporter::render_lines(segments)?,
            };
            print!("{}", rendered);
            if format == ExportFormat::Json {
                println!();
            }
        }
    }
    Ok(())
}

fn display_path(path: Option<PathBuf>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "(defaults)".to_string())
}
