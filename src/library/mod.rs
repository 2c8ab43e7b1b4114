mod library;
mod tags;

pub use library::Library;
pub use tags::{LoftyReader, TagReader};

use std::path::PathBuf;

/// Messages sent from a running library job to whoever started it.
#[derive(Debug)]
pub enum ScanProgress {
    /// Title of a song that was just stored
    Scanned(String),
    Finished(ScanReport),
    Failed(String),
}

/// Outcome of a scan or refresh. Individual files that could not be read or
/// stored do not fail the whole run; they are collected in `failed`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScanReport {
    pub scanned: usize,
    pub removed: usize,
    pub failed: Vec<(PathBuf, String)>,
}

impl ScanReport {
    pub fn merge(&mut self, other: ScanReport) {
        self.scanned += other.scanned;
        self.removed += other.removed;
        self.failed.extend(other.failed);
    }

    pub fn summary(&self) -> String {
        let mut out = format!("Scanned {} songs", self.scanned);
        if self.removed > 0 {
            out.push_str(&format!(", removed {}", self.removed));
        }
        if !self.failed.is_empty() {
            out.push_str(&format!(", {} unreadable", self.failed.len()));
        }
        out
    }
}
