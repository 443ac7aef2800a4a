//! readalong command-line host
//!
//! Reads timing files, builds segment lists and applies timestamp
//! corrections.

mod cli;
mod commands;
mod config;
mod state;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use state::AppState;

#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout carries command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    let config = match config::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = commands::handle_command(cli, AppState::new(config)).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
