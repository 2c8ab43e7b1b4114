mod backend_rodio;
mod core;
mod handle;
mod metrics;

pub use backend_rodio::RodioBackend;
pub use self::core::PlayerCore;
pub use handle::PlayerHandle;
pub use metrics::PlaybackMetrics;

use anyhow::Result;
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

/// Low-level audio output owned by the player thread.
pub trait AudioBackend {
    /// Replace whatever is playing with `path`, starting from the beginning.
    fn load(&mut self, path: &Path) -> Result<()>;
    fn pause(&mut self);
    fn resume(&mut self);
    fn stop(&mut self);
    fn seek(&mut self, pos: Duration) -> Result<()>;
    fn position(&self) -> Duration;
    /// The loaded track has played to the end.
    fn track_ended(&self) -> bool;
}

/// What the playback controller needs from a player.
pub trait Transport {
    /// Load `path` and start playing it from 0.
    fn load(&mut self, path: &Path) -> Result<()>;
    fn play(&mut self) -> Result<()>;
    fn pause(&mut self) -> Result<()>;
    fn seek(&mut self, pos: Duration) -> Result<()>;
    fn position(&self) -> Duration;
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    Load(PathBuf),
    Play,
    Pause,
    Seek(Duration),
    Stop,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    TrackEnded,
    Error(String),
}
