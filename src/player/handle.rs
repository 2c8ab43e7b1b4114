use std::{path::Path, sync::Arc, time::Duration};

use anyhow::{Result, anyhow};
use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::player::{
    AudioBackend, PlaybackMetrics, PlayerCommand, PlayerCore, PlayerEvent,
    RodioBackend, Transport,
};

/// The app's side of the player thread.
pub struct PlayerHandle {
    commands: Sender<PlayerCommand>,
    events: Receiver<PlayerEvent>,
    metrics: Arc<PlaybackMetrics>,
}

impl PlayerHandle {
    pub fn spawn() -> Self {
        Self::spawn_with(|| Ok(Box::new(RodioBackend::new()?) as Box<dyn AudioBackend>))
    }

    pub fn spawn_with<F>(init: F) -> Self
    where
        F: FnOnce() -> Result<Box<dyn AudioBackend>> + Send + 'static,
    {
        let (cmd_tx, cmd_rx) = unbounded();
        let (evt_tx, evt_rx) = unbounded();
        let metrics = PlaybackMetrics::new();

        PlayerCore::spawn(init, cmd_rx, evt_tx, Arc::clone(&metrics));

        Self {
            commands: cmd_tx,
            events: evt_rx,
            metrics,
        }
    }

    pub fn events(&self) -> &Receiver<PlayerEvent> {
        &self.events
    }

    fn send(&self, cmd: PlayerCommand) -> Result<()> {
        self.commands
            .send(cmd)
            .map_err(|_| anyhow!("Audio player is not running"))
    }
}

// =====================
//    COMMAND HANDLER
// =====================
impl PlayerHandle {
    pub fn stop(&self) -> Result<()> {
        self.metrics.reset();
        self.send(PlayerCommand::Stop)
    }
}

impl Transport for PlayerHandle {
    fn load(&mut self, path: &Path) -> Result<()> {
        // Position must read 0 before the player thread catches up
        self.metrics.set_elapsed(Duration::ZERO);
        self.send(PlayerCommand::Load(path.to_path_buf()))
    }

    fn play(&mut self) -> Result<()> {
        self.send(PlayerCommand::Play)
    }

    fn pause(&mut self) -> Result<()> {
        self.send(PlayerCommand::Pause)
    }

    fn seek(&mut self, pos: Duration) -> Result<()> {
        self.metrics.set_elapsed(pos);
        self.send(PlayerCommand::Seek(pos))
    }

    fn position(&self) -> Duration {
        self.metrics.get_elapsed()
    }
}
