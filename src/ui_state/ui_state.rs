use super::{
    Mode, Navigator, PlaybackSession,
    popup::PopupState,
    view::{HOME_ENTRIES, ViewKind},
};
use crate::{
    database::Database,
    domain::SongFilter,
    player::Transport,
};
use anyhow::Result;
use ratatui::widgets::ListState;
use std::{sync::Arc, time::Duration};

pub struct UiState {
    pub(crate) nav: Navigator,
    pub(crate) playback: PlaybackSession,

    // Visual Elements
    pub(crate) selection: ListState,
    pub(crate) popup: PopupState,
    mode: Mode,

    // Selected row of each frame below the current one
    positions: Vec<usize>,

    scan_status: Option<String>,
    scanning: bool,
}

impl UiState {
    pub fn new(restart_threshold: Duration) -> Self {
        UiState {
            nav: Navigator::new(),
            playback: PlaybackSession::new(restart_threshold),
            selection: ListState::default().with_selected(Some(0)),
            popup: PopupState::new(),
            mode: Mode::default(),
            positions: Vec::new(),
            scan_status: None,
            scanning: false,
        }
    }

    pub fn get_mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn is_scanning(&self) -> bool {
        self.scanning
    }

    pub fn set_scanning(&mut self, scanning: bool) {
        self.scanning = scanning;
    }

    pub fn scan_status(&self) -> Option<&str> {
        self.scan_status.as_deref()
    }

    pub fn set_scan_status(&mut self, status: impl Into<String>) {
        self.scan_status = Some(status.into());
    }
}

// ================
//    NAVIGATION
// ================
impl UiState {
    pub fn scroll(&mut self, delta: isize) {
        let len = self.nav.len();
        if len == 0 {
            self.selection.select(None);
            return;
        }

        let current = self.selection.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1);
        self.selection.select(Some(next as usize));
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.selected().filter(|&i| i < self.nav.len())
    }

    /// Open the highlighted row: descend into a listing, or play a song with
    /// the current song list as its queue.
    pub fn enter(&mut self, db: &Database, transport: &mut dyn Transport) -> Result<()> {
        let Some(idx) = self.selected_index() else {
            return Ok(());
        };

        let (kind, filter) = match self.nav.current().kind {
            ViewKind::Home => {
                let (_, kind) = HOME_ENTRIES[idx];
                let filter = (kind == ViewKind::Songs).then_some(SongFilter::All);
                (kind, filter)
            }
            ViewKind::Artists => {
                let artist = self.nav.artists[idx].artist.clone();
                (ViewKind::Songs, Some(SongFilter::Artist(artist)))
            }
            ViewKind::Albums => {
                let album = self.nav.albums[idx].album.clone();
                (ViewKind::Songs, Some(SongFilter::Album(album)))
            }
            ViewKind::Folders => {
                let folder = self.nav.folders[idx].clone();
                (ViewKind::Songs, Some(SongFilter::Folder(folder)))
            }
            ViewKind::Songs => {
                let song = Arc::clone(&self.nav.songs[idx]);
                let context = self.nav.songs.clone();
                return self.playback.play(song, Some(context), transport);
            }
        };

        self.nav.navigate_to(db, kind, filter)?;
        self.positions.push(idx);
        self.selection.select(Some(0));
        self.clamp_selection();

        Ok(())
    }

    pub fn back(&mut self) {
        if self.nav.navigate_back() {
            let idx = self.positions.pop().unwrap_or(0);
            self.selection.select(Some(idx));
            self.clamp_selection();
        }
    }

    /// Re-fetch the current listing, e.g. after a scan finished.
    pub fn reload(&mut self, db: &Database) -> Result<()> {
        self.nav.reload(db)?;
        self.clamp_selection();
        Ok(())
    }

    fn clamp_selection(&mut self) {
        let len = self.nav.len();
        match len {
            0 => self.selection.select(None),
            _ => {
                let idx = self.selection.selected().unwrap_or(0).min(len - 1);
                self.selection.select(Some(idx));
            }
        }
    }
}
