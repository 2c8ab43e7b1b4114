use crate::ui_state::UiState;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub browser: Rect,
    pub now_playing: Rect,
    pub status_line: Rect,
}

impl AppLayout {
    pub fn new(area: Rect, state: &UiState) -> Self {
        let now_playing_height = match state.playback.current().is_some() {
            true => 4,
            false => 2,
        };

        let [header, browser, now_playing, status_line] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(5),
                Constraint::Length(now_playing_height),
                Constraint::Length(1),
            ])
            .areas(area);

        AppLayout {
            header,
            browser,
            now_playing,
            status_line,
        }
    }
}
