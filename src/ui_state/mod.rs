mod navigation;
mod playback;
mod popup;
#[cfg(test)]
mod tests;
mod ui_state;
mod view;

pub use navigation::Navigator;
pub use playback::{DEFAULT_RESTART_THRESHOLD, PlaybackSession};
pub use popup::PopupType;
pub use ui_state::UiState;
pub use view::{HOME_ENTRIES, ViewFrame, ViewKind};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Browse,
    Quit,
}

fn new_textarea(placeholder: &str) -> tui_textarea::TextArea<'static> {
    let mut input = tui_textarea::TextArea::default();
    input.set_cursor_line_style(ratatui::style::Style::default());
    input.set_placeholder_text(format!(" {placeholder}: "));

    input
}
