use anyhow::{Result, anyhow};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

pub mod app_core;
pub mod config;
pub mod database;
pub mod domain;
pub mod key_handler;
pub mod library;
pub mod logging;
pub mod player;
pub mod tui;
pub mod ui_state;

pub use config::Settings;
pub use database::Database;
pub use library::Library;
pub use ui_state::UiState;

// ~30fps
pub const REFRESH_RATE: Duration = Duration::from_millis(33);

pub enum DurationStyle {
    Clean,
    Compact,
}

pub fn get_readable_duration(duration: Duration, style: DurationStyle) -> String {
    let mut secs = duration.as_secs();
    let mins = secs / 60;
    secs %= 60;

    match style {
        DurationStyle::Clean => match mins {
            0 => format!("{secs:02}s"),
            _ => format!("{mins}m {secs:02}s"),
        },
        DurationStyle::Compact => format!("{mins}:{secs:02}"),
    }
}

pub fn strip_win_prefix(path: &str) -> String {
    path.strip_prefix(r"\\?\").unwrap_or(path).to_string()
}

pub fn expand_tilde<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    if path_str == "~" {
        return Err(anyhow!(
            "Scanning the home directory would read every file you own. Please provide a more specific path!"
        ));
    }

    if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        let home =
            dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory!"))?;
        return Ok(home.join(&path_str[2..]));
    }

    Err(anyhow!("Error reading directory with tilde (~)"))
}

/// Resolve user input from the folder prompt into a clean, absolute path.
///
/// Paths that do not exist are returned as-is (after tilde expansion); the
/// scanner treats a missing root as a no-op.
pub fn resolve_folder_input(input: &str) -> Result<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("No folder given"));
    }

    let expanded = expand_tilde(trimmed)?;
    match expanded.canonicalize() {
        Ok(canon) => Ok(PathBuf::from(strip_win_prefix(&canon.to_string_lossy()))),
        Err(_) => Ok(expanded),
    }
}
