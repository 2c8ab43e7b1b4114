use std::path::Path;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum FileType {
    MP3,
    M4A,
    OGG,
    WAV,
    FLAC,
}

impl FileType {
    /// Case-insensitive match against the supported audio extensions.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "mp3" => Some(Self::MP3),
            "m4a" => Some(Self::M4A),
            "ogg" => Some(Self::OGG),
            "wav" => Some(Self::WAV),
            "flac" => Some(Self::FLAC),
            _ => None,
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}
