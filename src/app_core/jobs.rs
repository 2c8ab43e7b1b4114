use crate::{
    Database, Library,
    app_core::Minitune,
    library::{ScanProgress, ScanReport},
};
use anyhow::{Result, anyhow};
use crossbeam_channel::bounded;
use std::{path::PathBuf, thread};
use tracing::{error, info};

const PROGRESS_CAPACITY: usize = 64;

/// Library work that runs off the UI thread.
#[derive(Debug, Clone, PartialEq)]
pub enum LibraryJob {
    Scan(PathBuf),
    Refresh,
}

impl LibraryJob {
    /// Run against a fresh connection to `db_path`.
    fn run(self, db_path: PathBuf, library: Library) -> Result<ScanReport> {
        let mut db = Database::open(&db_path)?;
        match self {
            LibraryJob::Scan(root) => library.scan(&mut db, &root),
            LibraryJob::Refresh => library.refresh(&mut db),
        }
    }
}

impl Minitune {
    pub(crate) fn start_library_job(&mut self, job: LibraryJob) -> Result<()> {
        if self.library_job.is_some() {
            return Err(anyhow!("A library update is already running"));
        }

        info!("Starting library job: {job:?}");
        let (tx, rx) = bounded(PROGRESS_CAPACITY);
        let db_path = self.db_path.clone();
        let library = Library::default().with_progress(tx.clone());

        thread::spawn(move || {
            let outcome = match job.run(db_path, library) {
                Ok(report) => ScanProgress::Finished(report),
                Err(e) => {
                    error!("Library job failed: {e:#}");
                    ScanProgress::Failed(format!("{e:#}"))
                }
            };
            let _ = tx.send(outcome);
        });

        self.library_job = Some(rx);
        self.ui.set_scanning(true);
        self.ui.set_scan_status("Scanning...");

        Ok(())
    }

    pub(crate) fn handle_library_progress(&mut self, progress: ScanProgress) {
        match progress {
            ScanProgress::Scanned(title) => self.ui.set_scan_status(format!("Scanned: {title}")),
            ScanProgress::Finished(report) => {
                self.finish_library_job();
                info!("Library job finished: {}", report.summary());
                self.ui.set_scan_status(report.summary());

                if let Err(e) = self.ui.reload(&self.db) {
                    self.ui.set_error(e);
                }
            }
            ScanProgress::Failed(msg) => {
                self.finish_library_job();
                self.ui.set_scan_status("Library update failed");
                self.ui.set_error(anyhow!(msg));
            }
        }
    }

    /// The worker went away without reporting back.
    pub(crate) fn library_job_lost(&mut self) {
        self.finish_library_job();
        self.ui.set_error(anyhow!("Library update stopped unexpectedly"));
    }

    fn finish_library_job(&mut self) {
        self.library_job = None;
        self.ui.set_scanning(false);
    }

    pub(crate) fn clear_library(&mut self) -> Result<()> {
        if self.library_job.is_some() {
            return Err(anyhow!("Cannot clear the library while it is being updated"));
        }

        Library::default().clear_library(&mut self.db)?;
        self.player.stop()?;
        self.ui.playback.stop();
        self.ui.reload(&self.db)?;
        self.ui.set_scan_status("Library cleared");

        Ok(())
    }
}
