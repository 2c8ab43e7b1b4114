use super::view::{HOME_ENTRIES, ViewFrame, ViewKind};
use crate::{
    database::Database,
    domain::{AlbumSummary, ArtistSummary, Song, SongFilter},
};
use anyhow::Result;
use std::sync::Arc;

/// Stack of browse views plus the listing cached for each kind of view.
///
/// The home frame sits at the bottom of the stack and is never popped.
pub struct Navigator {
    stack: Vec<ViewFrame>,

    pub songs: Vec<Arc<Song>>,
    pub artists: Vec<ArtistSummary>,
    pub albums: Vec<AlbumSummary>,
    pub folders: Vec<String>,
}

impl Default for Navigator {
    fn default() -> Self {
        Navigator::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Navigator {
            stack: vec![ViewFrame::default()],
            songs: Vec::new(),
            artists: Vec::new(),
            albums: Vec::new(),
            folders: Vec::new(),
        }
    }

    pub fn current(&self) -> &ViewFrame {
        // Stack is never empty
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn frames(&self) -> &[ViewFrame] {
        &self.stack
    }

    /// Fetch the listing for `kind` and push it as the new current view.
    /// On a fetch error nothing changes.
    pub fn navigate_to(
        &mut self,
        db: &Database,
        kind: ViewKind,
        filter: Option<SongFilter>,
    ) -> Result<()> {
        self.fetch(db, kind, filter.as_ref())?;
        self.stack.push(ViewFrame::new(kind, filter));
        Ok(())
    }

    /// Returns false when already at the home view.
    pub fn navigate_back(&mut self) -> bool {
        match self.stack.len() > 1 {
            true => {
                self.stack.pop();
                true
            }
            false => false,
        }
    }

    /// Re-fetch the listing shown by the current view.
    pub fn reload(&mut self, db: &Database) -> Result<()> {
        let ViewFrame { kind, filter } = self.current().clone();
        self.fetch(db, kind, filter.as_ref())
    }

    /// Number of rows the current view shows.
    pub fn len(&self) -> usize {
        match self.current().kind {
            ViewKind::Home => HOME_ENTRIES.len(),
            ViewKind::Artists => self.artists.len(),
            ViewKind::Albums => self.albums.len(),
            ViewKind::Folders => self.folders.len(),
            ViewKind::Songs => self.songs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn fetch(&mut self, db: &Database, kind: ViewKind, filter: Option<&SongFilter>) -> Result<()> {
        match kind {
            ViewKind::Home => (),
            ViewKind::Artists => self.artists = db.get_artists()?,
            ViewKind::Albums => self.albums = db.get_albums()?,
            ViewKind::Folders => self.folders = db.get_folders()?,
            ViewKind::Songs => self.songs = db.get_songs(filter.unwrap_or(&SongFilter::All))?,
        }

        Ok(())
    }
}
