use super::{LoftyReader, ScanProgress, ScanReport, TagReader};
use crate::{
    database::Database,
    domain::{FileType, ScannedSong, Song},
    strip_win_prefix,
};
use anyhow::Result;
use crossbeam_channel::Sender;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Keeps the song store in step with what is on disk.
pub struct Library {
    reader: Box<dyn TagReader>,
    progress: Option<Sender<ScanProgress>>,
}

impl Default for Library {
    fn default() -> Self {
        Library::new(Box::new(LoftyReader))
    }
}

impl Library {
    pub fn new(reader: Box<dyn TagReader>) -> Self {
        Library {
            reader,
            progress: None,
        }
    }

    pub fn with_progress(mut self, tx: Sender<ScanProgress>) -> Self {
        self.progress = Some(tx);
        self
    }

    /// Walk `root` depth-first and upsert every readable audio file.
    ///
    /// A root that does not exist is not an error; nothing is scanned.
    pub fn scan(&self, db: &mut Database, root: impl AsRef<Path>) -> Result<ScanReport> {
        let mut report = ScanReport::default();

        let root = match root.as_ref().canonicalize() {
            Ok(canon) => PathBuf::from(strip_win_prefix(&canon.to_string_lossy())),
            Err(_) => {
                debug!("Skipping missing folder {}", root.as_ref().display());
                return Ok(report);
            }
        };

        info!("Scanning {}", root.display());

        for entry in WalkDir::new(&root).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    // Includes symlink loops
                    warn!("Skipping unreadable entry under {}: {e}", root.display());
                    continue;
                }
            };

            if !entry.file_type().is_file() || FileType::from_path(entry.path()).is_none() {
                continue;
            }

            let path = entry.path();
            let tags = match self.reader.read(path) {
                Ok(tags) => tags,
                Err(e) => {
                    warn!("Failed to read {}: {e:#}", path.display());
                    report.failed.push((path.to_path_buf(), e.to_string()));
                    continue;
                }
            };

            let song = ScannedSong::build(path, tags);
            if let Err(e) = db.upsert_song(&song) {
                warn!("{e:#}");
                report.failed.push((path.to_path_buf(), e.to_string()));
                continue;
            }

            report.scanned += 1;
            self.notify(song.title);
        }

        info!(
            "Finished scanning {}: {} stored, {} failed",
            root.display(),
            report.scanned,
            report.failed.len()
        );

        Ok(report)
    }

    /// Drop every song whose file is gone, then rescan each known folder.
    pub fn refresh(&self, db: &mut Database) -> Result<ScanReport> {
        let mut report = ScanReport::default();

        for (id, path) in db.get_paths()? {
            if Path::new(&path).exists() {
                continue;
            }

            debug!("Removing missing file {path}");
            match db.delete_song(id) {
                Ok(()) => report.removed += 1,
                Err(e) => {
                    warn!("Could not remove {path}: {e:#}");
                    report.failed.push((PathBuf::from(path), e.to_string()));
                }
            }
        }

        for folder in db.get_folders()? {
            report.merge(self.scan(db, &folder)?);
        }

        info!("Library refresh complete: {}", report.summary());
        Ok(report)
    }

    pub fn clean(&self, db: &mut Database) -> Result<()> {
        db.clear()
    }

    pub fn scan_folder(
        &self,
        db: &mut Database,
        root: impl AsRef<Path>,
    ) -> Result<Vec<Arc<Song>>> {
        self.scan(db, root)?;
        db.get_all_songs()
    }

    pub fn refresh_library(&self, db: &mut Database) -> Result<Vec<Arc<Song>>> {
        self.refresh(db)?;
        db.get_all_songs()
    }

    pub fn clear_library(&self, db: &mut Database) -> Result<Vec<Arc<Song>>> {
        self.clean(db)?;
        Ok(Vec::new())
    }

    fn notify(&self, title: String) {
        if let Some(tx) = &self.progress {
            // Nobody listening or channel full: drop it
            let _ = tx.try_send(ScanProgress::Scanned(title));
        }
    }
}
