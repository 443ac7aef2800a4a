//! `config` command

use std::path::PathBuf;

use anyhow::Result;

use super::display_path;
use crate::config::config_path;
use crate::state::AppState;

pub fn show(state: &AppState, explicit: Option<PathBuf>) -> Result<()> {
    let path = match explicit {
        Some(path) => Some(path),
        None => config_path().ok().filter(|p| p.exists()),
    };

    println!("# source: {}", display_path(path));
    print!("{}", toml::to_string_pretty(&state.config)?);
    Ok(())
}
