/// One row of the artist listing. Rows without an artist are grouped
/// together under `None`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ArtistSummary {
    pub artist: Option<String>,
    pub count: u32,
}

impl ArtistSummary {
    pub fn display_name(&self) -> &str {
        self.artist.as_deref().unwrap_or(super::UNKNOWN_ARTIST)
    }
}
