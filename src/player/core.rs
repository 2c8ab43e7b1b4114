use crate::{
    REFRESH_RATE,
    player::{AudioBackend, PlaybackMetrics, PlayerCommand, PlayerEvent},
};
use anyhow::Result;
use crossbeam_channel::{Receiver, Sender, TryRecvError};
use std::{
    path::PathBuf,
    sync::Arc,
    thread::{self, JoinHandle},
    time::Duration,
};
use tracing::{debug, error, info};

pub struct PlayerCore {
    backend: Box<dyn AudioBackend>,
    commands: Receiver<PlayerCommand>,
    events: Sender<PlayerEvent>,
    metrics: Arc<PlaybackMetrics>,

    current: Option<PathBuf>,
    // Last position this thread wrote to `metrics`
    published: Duration,
}

impl PlayerCore {
    pub fn new(
        backend: Box<dyn AudioBackend>,
        commands: Receiver<PlayerCommand>,
        events: Sender<PlayerEvent>,
        metrics: Arc<PlaybackMetrics>,
    ) -> Self {
        PlayerCore {
            backend,
            commands,
            events,
            metrics,
            current: None,
            published: Duration::ZERO,
        }
    }

    /// Start the player thread. The backend is built on that thread, so it
    /// never has to cross threads itself.
    pub fn spawn<F>(
        init: F,
        commands: Receiver<PlayerCommand>,
        events: Sender<PlayerEvent>,
        metrics: Arc<PlaybackMetrics>,
    ) -> JoinHandle<()>
    where
        F: FnOnce() -> Result<Box<dyn AudioBackend>> + Send + 'static,
    {
        thread::spawn(move || {
            let backend = match init() {
                Ok(b) => b,
                Err(e) => {
                    error!("Could not open audio output: {e:#}");
                    let _ = events.send(PlayerEvent::Error(format!(
                        "Could not open audio output: {e}"
                    )));
                    return;
                }
            };

            PlayerCore::new(backend, commands, events, metrics).run();
        })
    }

    fn run(&mut self) {
        info!("Player thread started");
        while self.tick() {
            thread::sleep(REFRESH_RATE);
        }
        self.backend.stop();
        info!("Player thread stopped");
    }

    /// One pass of the player loop. Returns false once the command channel
    /// has been disconnected.
    pub fn tick(&mut self) -> bool {
        let connected = self.process_commands();
        self.check_track_end();
        self.update_metrics();
        connected
    }

    fn process_commands(&mut self) -> bool {
        loop {
            match self.commands.try_recv() {
                Ok(cmd) => self.handle(cmd),
                Err(TryRecvError::Empty) => return true,
                Err(TryRecvError::Disconnected) => return false,
            }
        }
    }

    #[rustfmt::skip]
    fn handle(&mut self, cmd: PlayerCommand) {
        match cmd {
            PlayerCommand::Load(path) => self.load(path),
            PlayerCommand::Play       => self.resume(),
            PlayerCommand::Pause      => self.pause(),
            PlayerCommand::Seek(pos)  => self.seek(pos),
            PlayerCommand::Stop       => self.stop(),
        }
    }

    fn check_track_end(&mut self) {
        // Clearing `current` ensures the event is sent once per track
        if self.current.is_some() && self.backend.track_ended() {
            if let Some(path) = self.current.take() {
                debug!("Finished {}", path.display());
            }
            self.reset_metrics();
            self.emit(PlayerEvent::TrackEnded);
        }
    }

    // A position stored by the UI since our last write belongs to a load or
    // seek still queued behind it, so the old track's position must not
    // overwrite it.
    fn update_metrics(&mut self) {
        if self.current.is_none() {
            return;
        }
        let pos = self.backend.position();
        if self.metrics.publish_elapsed(self.published, pos) {
            self.published = pos;
        }
    }

    fn set_elapsed(&mut self, pos: Duration) {
        self.metrics.set_elapsed(pos);
        self.published = pos;
    }

    fn reset_metrics(&mut self) {
        self.metrics.reset();
        self.published = Duration::ZERO;
    }

    fn load(&mut self, path: PathBuf) {
        if let Err(e) = self.backend.load(&path) {
            self.current = None;
            self.reset_metrics();
            self.emit(PlayerEvent::Error(format!(
                "Could not play {}: {e}",
                path.display()
            )));
            return;
        }

        debug!("Playing {}", path.display());
        self.current = Some(path);
        self.set_elapsed(Duration::ZERO);
    }

    fn resume(&mut self) {
        if self.current.is_none() {
            return;
        }
        self.backend.resume();
    }

    fn pause(&mut self) {
        if self.current.is_none() {
            return;
        }
        self.backend.pause();
    }

    fn stop(&mut self) {
        self.backend.stop();
        self.current = None;
        self.reset_metrics();
    }

    fn seek(&mut self, pos: Duration) {
        if self.current.is_none() {
            return;
        }
        match self.backend.seek(pos) {
            Ok(()) => self.set_elapsed(pos),
            Err(e) => self.emit(PlayerEvent::Error(format!("Seek failed: {e}"))),
        }
    }

    fn emit(&self, event: PlayerEvent) {
        let _ = self.events.send(event);
    }
}
