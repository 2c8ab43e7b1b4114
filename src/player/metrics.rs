use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

/// Playback position of the player thread, readable from the UI thread.
///
/// Both threads write it: the UI when it asks for a new position (load,
/// seek, stop) and the player thread as the track advances.
pub struct PlaybackMetrics {
    elapsed_ms: AtomicU64,
}

impl PlaybackMetrics {
    pub fn new() -> Arc<Self> {
        Arc::new(PlaybackMetrics {
            elapsed_ms: AtomicU64::new(0),
        })
    }

    pub fn get_elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms.load(Ordering::Relaxed))
    }

    pub fn set_elapsed(&self, d: Duration) {
        self.elapsed_ms.store(as_ms(d), Ordering::Relaxed)
    }

    /// Replace `expected` with `d`. Fails if someone else stored a
    /// position since `expected` was published.
    pub fn publish_elapsed(&self, expected: Duration, d: Duration) -> bool {
        self.elapsed_ms
            .compare_exchange(as_ms(expected), as_ms(d), Ordering::AcqRel, Ordering::Relaxed)
            .is_ok()
    }

    pub fn reset(&self) {
        self.set_elapsed(Duration::ZERO);
    }
}

fn as_ms(d: Duration) -> u64 {
    d.as_millis() as u64
}
