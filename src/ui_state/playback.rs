use crate::{
    domain::Song,
    player::{PlayerEvent, Transport},
};
use anyhow::{Result, anyhow};
use std::{sync::Arc, time::Duration};

pub const DEFAULT_RESTART_THRESHOLD: Duration = Duration::from_secs(3);

/// The now-playing song and the queue it was started from.
pub struct PlaybackSession {
    current: Option<Arc<Song>>,
    is_playing: bool,
    position: Duration,
    duration: f64,

    queue: Vec<Arc<Song>>,
    queue_index: Option<usize>,

    restart_threshold: Duration,
}

impl Default for PlaybackSession {
    fn default() -> Self {
        PlaybackSession::new(DEFAULT_RESTART_THRESHOLD)
    }
}

impl PlaybackSession {
    pub fn new(restart_threshold: Duration) -> Self {
        PlaybackSession {
            current: None,
            is_playing: false,
            position: Duration::ZERO,
            duration: 0.0,
            queue: Vec::new(),
            queue_index: None,
            restart_threshold,
        }
    }

    /// Play `song`. A `context` replaces the queue; the song's place in it
    /// becomes the queue index. Choosing the song that is already current
    /// toggles pause instead of restarting it.
    pub fn play(
        &mut self,
        song: Arc<Song>,
        context: Option<Vec<Arc<Song>>>,
        transport: &mut dyn Transport,
    ) -> Result<()> {
        if let Some(queue) = context {
            self.queue_index = queue.iter().position(|s| s.id == song.id);
            self.queue = queue;
        }

        if self.current.as_ref().is_some_and(|c| c.id == song.id) {
            return self.toggle(transport);
        }

        self.start(song, transport)
    }

    pub fn toggle(&mut self, transport: &mut dyn Transport) -> Result<()> {
        if self.current.is_none() {
            return Ok(());
        }

        match self.is_playing {
            true => transport.pause()?,
            false => transport.play()?,
        }
        self.is_playing = !self.is_playing;

        Ok(())
    }

    /// Advance to the next queued song, wrapping to the start.
    pub fn next(&mut self, transport: &mut dyn Transport) -> Result<()> {
        let Some(idx) = self.queue_index else {
            return Ok(());
        };
        if self.queue.is_empty() {
            return Ok(());
        }

        let next = (idx + 1) % self.queue.len();
        self.jump_to(next, transport)
    }

    /// Restart the current song if it has played past the restart threshold,
    /// otherwise step back one song, wrapping to the end.
    pub fn prev(&mut self, transport: &mut dyn Transport) -> Result<()> {
        let Some(idx) = self.queue_index else {
            return Ok(());
        };
        if self.queue.is_empty() {
            return Ok(());
        }

        if transport.position() > self.restart_threshold {
            transport.seek(Duration::ZERO)?;
            self.position = Duration::ZERO;
            return Ok(());
        }

        let len = self.queue.len();
        let prev = (idx + len - 1) % len;
        self.jump_to(prev, transport)
    }

    /// Seek to `fraction` of the current song, clamped to [0, 1].
    pub fn seek(&mut self, fraction: f64, transport: &mut dyn Transport) -> Result<()> {
        if self.current.is_none() || self.duration <= 0.0 || fraction.is_nan() {
            return Ok(());
        }

        let secs = fraction.clamp(0.0, 1.0) * self.duration;
        let pos = Duration::try_from_secs_f64(secs).unwrap_or_default();

        transport.seek(pos)?;
        self.position = pos;

        Ok(())
    }

    /// Seek relative to the current position.
    pub fn seek_by(&mut self, delta_secs: f64, transport: &mut dyn Transport) -> Result<()> {
        if self.duration <= 0.0 {
            return Ok(());
        }

        let target = transport.position().as_secs_f64() + delta_secs;
        self.seek(target / self.duration, transport)
    }

    pub fn handle_event(&mut self, event: PlayerEvent, transport: &mut dyn Transport) -> Result<()> {
        match event {
            PlayerEvent::TrackEnded => {
                self.is_playing = false;
                self.next(transport)
            }
            PlayerEvent::Error(msg) => {
                self.is_playing = false;
                Err(anyhow!(msg))
            }
        }
    }

    pub fn sync_position(&mut self, transport: &dyn Transport) {
        if self.current.is_some() {
            self.position = transport.position();
        }
    }

    pub fn stop(&mut self) {
        self.current = None;
        self.is_playing = false;
        self.position = Duration::ZERO;
        self.duration = 0.0;
    }

    fn jump_to(&mut self, idx: usize, transport: &mut dyn Transport) -> Result<()> {
        self.queue_index = Some(idx);
        let song = Arc::clone(&self.queue[idx]);
        self.start(song, transport)
    }

    fn start(&mut self, song: Arc<Song>, transport: &mut dyn Transport) -> Result<()> {
        transport.load(song.get_path())?;

        self.duration = song.duration;
        self.current = Some(song);
        self.is_playing = true;
        self.position = Duration::ZERO;

        Ok(())
    }
}

// ===============
//    ACCESSORS
// ===============
impl PlaybackSession {
    pub fn current(&self) -> Option<&Arc<Song>> {
        self.current.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn position(&self) -> Duration {
        self.position
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn queue(&self) -> &[Arc<Song>] {
        &self.queue
    }

    pub fn queue_index(&self) -> Option<usize> {
        self.queue_index
    }

    /// Played fraction of the current song, for progress display.
    pub fn progress(&self) -> f64 {
        match self.duration > 0.0 {
            true => (self.position.as_secs_f64() / self.duration).clamp(0.0, 1.0),
            false => 0.0,
        }
    }
}
