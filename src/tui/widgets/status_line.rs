use super::{GOLD_FADED, MID_GRAY};
use crate::ui_state::UiState;
use ratatui::{
    layout::{Constraint, Layout},
    style::Stylize,
    text::Line,
    widgets::{StatefulWidget, Widget},
};

const HELP: &str = "[a]dd folder  [r]efresh  [X] clear  [q]uit ";

pub struct StatusLine;

impl StatefulWidget for StatusLine {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let [left, right] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(HELP.len() as u16)])
                .areas(area);

        let status = state.scan_status().unwrap_or_default().to_string();
        let status_color = match state.is_scanning() {
            true => GOLD_FADED,
            false => MID_GRAY,
        };

        Line::from(format!(" {status}"))
            .fg(status_color)
            .render(left, buf);
        Line::from(HELP).fg(MID_GRAY).right_aligned().render(right, buf);
    }
}
