use super::{AppLayout, Browser, ErrorMsg, FolderPrompt, Header, NowPlaying, StatusLine};
use crate::{UiState, ui_state::PopupType};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    widgets::{Clear, StatefulWidget, Widget},
};

pub fn render(f: &mut Frame, state: &mut UiState) {
    let layout = AppLayout::new(f.area(), state);

    Header.render(layout.header, f.buffer_mut(), state);
    Browser.render(layout.browser, f.buffer_mut(), state);
    NowPlaying.render(layout.now_playing, f.buffer_mut(), state);
    StatusLine.render(layout.status_line, f.buffer_mut(), state);

    if state.popup.is_open() {
        let popup = state.popup.current.clone();
        let popup_rect = match popup {
            PopupType::FolderPrompt => centered_rect(50, 30, f.area()),
            PopupType::Error(_) => centered_rect(40, 30, f.area()),
            PopupType::None => return,
        };

        Clear.render(popup_rect, f.buffer_mut());
        match popup {
            PopupType::FolderPrompt => FolderPrompt.render(popup_rect, f.buffer_mut(), state),
            PopupType::Error(_) => ErrorMsg.render(popup_rect, f.buffer_mut(), state),
            PopupType::None => (),
        }
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
