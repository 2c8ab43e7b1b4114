use super::{GOLD, MID_GRAY};
use crate::ui_state::UiState;
use ratatui::{
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Borders, StatefulWidget, Widget},
};

/// Breadcrumb of the navigation stack.
pub struct Header;

impl StatefulWidget for Header {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let frames = state.nav.frames();
        let last = frames.len() - 1;

        let mut spans = vec![Span::from(" minitune  ").fg(GOLD).bold()];
        for (idx, frame) in frames.iter().enumerate() {
            let title = frame.title();
            match idx == last {
                true => spans.push(Span::from(title).bold()),
                false => {
                    spans.push(Span::from(title).fg(MID_GRAY));
                    spans.push(Span::from(" › ").fg(MID_GRAY));
                }
            }
        }

        Line::from(spans)
            .render(Block::new().borders(Borders::BOTTOM).inner(area), buf);
        Block::new()
            .borders(Borders::BOTTOM)
            .border_style(ratatui::style::Style::new().fg(MID_GRAY))
            .render(area, buf);
    }
}
