mod album;
mod artist;
mod filetype;
mod filter;
mod scanned_song;
mod song;

pub use album::AlbumSummary;
pub use artist::ArtistSummary;
pub use filetype::FileType;
pub use filter::SongFilter;
pub use scanned_song::{ScannedSong, SongTags, UNKNOWN_ALBUM, UNKNOWN_ARTIST};
pub use song::Song;

use crate::{DurationStyle, get_readable_duration};
use std::time::Duration;

pub trait SongInfo {
    fn get_title(&self) -> &str;
    fn get_artist(&self) -> &str;
    fn get_album(&self) -> &str;
    fn get_duration(&self) -> Duration;

    fn get_duration_str(&self) -> String {
        get_readable_duration(self.get_duration(), DurationStyle::Compact)
    }
}
