use super::SongInfo;
use std::{path::Path, time::Duration};

/// A catalogued audio file as stored in the library.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Song {
    pub id: i64,
    pub path: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: Option<String>,
    pub year: Option<u32>,
    pub track_no: Option<u32>,
    /// Seconds, 0 when unknown
    pub duration: f64,
    pub artwork: Option<Vec<u8>>,
}

impl Song {
    pub fn get_path(&self) -> &Path {
        Path::new(&self.path)
    }
}

impl SongInfo for Song {
    fn get_title(&self) -> &str {
        &self.title
    }

    fn get_artist(&self) -> &str {
        &self.artist
    }

    fn get_album(&self) -> &str {
        &self.album
    }

    fn get_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.duration).unwrap_or_default()
    }
}
