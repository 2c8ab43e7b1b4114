use super::{UNKNOWN_ALBUM, UNKNOWN_ARTIST};
use std::fmt::Display;

/// Which subset of the library a song listing shows.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum SongFilter {
    #[default]
    All,
    Artist(Option<String>),
    Album(Option<String>),
    Folder(String),
}

impl Display for SongFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SongFilter::All => write!(f, "All Songs"),
            SongFilter::Artist(a) => write!(f, "{}", a.as_deref().unwrap_or(UNKNOWN_ARTIST)),
            SongFilter::Album(a) => write!(f, "{}", a.as_deref().unwrap_or(UNKNOWN_ALBUM)),
            SongFilter::Folder(p) => write!(f, "{p}"),
        }
    }
}
