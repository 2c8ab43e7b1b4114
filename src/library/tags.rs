use crate::domain::SongTags;
use anyhow::{Context, Result};
use lofty::{
    file::{AudioFile, TaggedFileExt},
    tag::{Accessor, ItemKey, Tag},
};
use std::path::Path;

/// Extracts tag metadata from an audio file.
pub trait TagReader: Send {
    fn read(&self, path: &Path) -> Result<SongTags>;
}

#[derive(Default)]
pub struct LoftyReader;

impl TagReader for LoftyReader {
    fn read(&self, path: &Path) -> Result<SongTags> {
        let tagged = lofty::read_from_path(path)
            .with_context(|| format!("Could not read tags from {}", path.display()))?;

        let mut tags = SongTags {
            duration: Some(tagged.properties().duration()),
            ..Default::default()
        };

        if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
            tags.title = tag.title().map(|t| t.to_string());
            tags.artist = tag.artist().map(|a| a.to_string());
            tags.album = tag.album().map(|a| a.to_string());
            tags.genre = tag.genre().map(|g| g.to_string());
            tags.track_no = tag.track();
            tags.year = read_year(tag);
            tags.artwork = tag.pictures().first().map(|p| p.data().to_vec());
        }

        Ok(tags)
    }
}

// Dates come in as "1957", "1957-09-15" or similar
fn read_year(tag: &Tag) -> Option<u32> {
    [ItemKey::Year, ItemKey::RecordingDate]
        .iter()
        .filter_map(|key| tag.get_string(key))
        .find_map(parse_year)
}

fn parse_year(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    raw.get(..4)?.parse::<u32>().ok()
}
