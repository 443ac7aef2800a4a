//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use readalong_core::ExportFormat;

#[derive(Parser)]
#[command(name = "readalong")]
#[command(author, version, about = "Timing files for read-along audio stories")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to the platform config directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report whether a timing file is structured or line-based
    Sniff {
        /// Timing file
        timing: PathBuf,
    },

    /// Build the segment list for a story
    Parse {
        /// Timing file (JSON or `[MM:SS.cc] text` lines)
        #[arg(short, long)]
        timing: Option<PathBuf>,

        /// Story text, used when no timing data is usable
        #[arg(long)]
        text: Option<PathBuf>,

        /// Audio duration in milliseconds
        #[arg(short, long, conflicts_with = "audio")]
        duration_ms: Option<u64>,

        /// WAV file to read the audio duration from
        #[arg(short, long)]
        audio: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Find the segment playing at a position
    Locate {
        /// Segment file (any accepted timing format)
        segments: PathBuf,

        /// Position in milliseconds or `M:SS(.fff)`
        position: String,
    },

    /// Correct segment times and merge segments
    Edit {
        /// Segment file (any accepted timing format)
        segments: PathBuf,

        /// Set a start time, e.g. `3=1:05.5`
        #[arg(long = "set-start", value_parser = parse_time_edit)]
        set_start: Vec<(usize, String)>,

        /// Set an end time (moves the next start too), e.g. `3=1:09`
        #[arg(long = "set-end", value_parser = parse_time_edit)]
        set_end: Vec<(usize, String)>,

        /// Merge a segment into the one before it
        #[arg(long)]
        merge: Vec<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the effective configuration
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Lines,
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => ExportFormat::Json,
            OutputFormat::Lines => ExportFormat::Lines,
        }
    }
}

/// `INDEX=TIME`
fn parse_time_edit(arg: &str) -> Result<(usize, String), String> {
    let (index, time) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected INDEX=TIME, got {arg:?}"))?;
    let index = index
        .trim()
        .parse()
        .map_err(|_| format!("invalid segment index {index:?}"))?;
    Ok((index, time.trim().to_string()))
}
