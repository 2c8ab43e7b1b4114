use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::database::Database;

const APP_DIRECTORY: &str = "minitune";
const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_ENV: &str = "MINITUNE_CONFIG";

/// User settings read from `config.toml`. Every field is optional in the
/// file; missing ones take the defaults below.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Library database file, `<data dir>/minitune/library.db` when unset
    pub database_path: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub log_level: String,
    /// Refresh the whole library in the background at startup
    pub refresh_on_start: bool,
    pub seek_step_secs: u64,
    /// Pressing "previous" later than this into a song restarts it instead
    pub restart_threshold_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            database_path: None,
            log_dir: None,
            log_level: String::from("info"),
            refresh_on_start: false,
            seek_step_secs: 5,
            restart_threshold_secs: 3,
        }
    }
}

impl Settings {
    /// Load from `$MINITUNE_CONFIG`, or `<config dir>/minitune/config.toml`.
    pub fn load() -> Result<Self> {
        Self::load_from_path(resolve_config_path())
    }

    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load_from_path(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(p) if p.exists() => Self::load_from_file(&p),
            _ => Ok(Settings::default()),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file_str = fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;

        toml::from_str::<Settings>(&file_str)
            .with_context(|| format!("Invalid settings in {}", path.display()))
    }

    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database_path {
            Some(p) => crate::expand_tilde(p),
            None => Database::default_path(),
        }
    }

    pub fn log_dir(&self) -> Result<PathBuf> {
        match &self.log_dir {
            Some(p) => crate::expand_tilde(p),
            None => dirs::data_local_dir()
                .map(|d| d.join(APP_DIRECTORY).join("logs"))
                .context("No data directory present on system!"),
        }
    }

    pub fn restart_threshold(&self) -> Duration {
        Duration::from_secs(self.restart_threshold_secs)
    }

    pub fn seek_step(&self) -> f64 {
        self.seek_step_secs as f64
    }
}

pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(p));
    }
    dirs::config_dir().map(|d| d.join(APP_DIRECTORY).join(CONFIG_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings =
            Settings::load_from_path(Some(dir.path().join("nope.toml"))).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.restart_threshold(), Duration::from_secs(3));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
                database_path = "/tmp/music.db"
                refresh_on_start = true
                seek_step_secs = 10
            "#,
        )
        .unwrap();

        let settings = Settings::load_from_path(Some(path)).unwrap();
        assert_eq!(settings.database_path, Some(PathBuf::from("/tmp/music.db")));
        assert!(settings.refresh_on_start);
        assert_eq!(settings.seek_step(), 10.0);
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.restart_threshold_secs, 3);
        assert_eq!(
            settings.database_path().unwrap(),
            PathBuf::from("/tmp/music.db")
        );
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "seek_step_secs = \"fast\"").unwrap();

        assert!(Settings::load_from_path(Some(path)).is_err());
    }
}
