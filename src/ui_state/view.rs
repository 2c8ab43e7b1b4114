use crate::domain::SongFilter;
use std::fmt::Display;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    #[default]
    Home,
    Artists,
    Albums,
    Folders,
    Songs,
}

impl Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Home => write!(f, "Library"),
            ViewKind::Artists => write!(f, "Artists"),
            ViewKind::Albums => write!(f, "Albums"),
            ViewKind::Folders => write!(f, "Folders"),
            ViewKind::Songs => write!(f, "Songs"),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ViewFrame {
    pub kind: ViewKind,
    pub filter: Option<SongFilter>,
}

impl ViewFrame {
    pub fn new(kind: ViewKind, filter: Option<SongFilter>) -> Self {
        ViewFrame { kind, filter }
    }

    pub fn title(&self) -> String {
        match (&self.kind, &self.filter) {
            (ViewKind::Songs, Some(filter)) => filter.to_string(),
            (kind, _) => kind.to_string(),
        }
    }
}

/// Entries shown on the home screen, in display order.
pub const HOME_ENTRIES: [(&str, ViewKind); 4] = [
    ("All Songs", ViewKind::Songs),
    ("Artists", ViewKind::Artists),
    ("Albums", ViewKind::Albums),
    ("Folders", ViewKind::Folders),
];
