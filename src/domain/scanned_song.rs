use super::SongInfo;
use std::{path::Path, time::Duration};

pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

/// Raw tag fields as handed back by a tag reader. Every field is optional;
/// fallbacks are applied by [`ScannedSong::build`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SongTags {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub genre: Option<String>,
    pub year: Option<u32>,
    pub track_no: Option<u32>,
    pub duration: Option<Duration>,
    pub artwork: Option<Vec<u8>>,
}

/// A song read from disk that has not been written to the library yet.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScannedSong {
    pub path: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: Option<String>,
    pub year: Option<u32>,
    pub track_no: Option<u32>,
    pub duration: f64,
    pub artwork: Option<Vec<u8>>,
}

impl ScannedSong {
    pub fn build<P: AsRef<Path>>(path_raw: P, tags: SongTags) -> Self {
        let path = path_raw.as_ref();

        let title = non_blank(tags.title).unwrap_or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default()
        });

        ScannedSong {
            path: path.to_string_lossy().into_owned(),
            title,
            artist: non_blank(tags.artist).unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
            album: non_blank(tags.album).unwrap_or_else(|| UNKNOWN_ALBUM.to_string()),
            genre: non_blank(tags.genre),
            year: tags.year,
            track_no: tags.track_no,
            duration: tags.duration.map(|d| d.as_secs_f64()).unwrap_or(0.0),
            artwork: tags.artwork.filter(|a| !a.is_empty()),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl SongInfo for ScannedSong {
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
