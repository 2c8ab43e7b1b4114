/// One row of the album listing.
///
/// `artist` and `artwork` are taken from a single representative song of
/// the album (the one stored first), so albums shared between artists show
/// whichever artist was catalogued first. Legacy rows without an album are
/// grouped under `None`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AlbumSummary {
    pub album: Option<String>,
    pub artist: String,
    pub artwork: Option<Vec<u8>>,
}

impl AlbumSummary {
    pub fn display_name(&self) -> &str {
        self.album.as_deref().unwrap_or(super::UNKNOWN_ALBUM)
    }
}
