use super::{DARK_WHITE, GOLD, MID_GRAY, POPUP_PADDING};
use crate::ui_state::UiState;
use ratatui::{
    layout::{Constraint, Layout},
    style::{Style, Stylize},
    widgets::{Block, BorderType, Padding, Paragraph, StatefulWidget, Widget, Wrap},
};

pub struct FolderPrompt;

impl StatefulWidget for FolderPrompt {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let block = Block::bordered()
            .title(" Scan Music Folder ")
            .title_bottom(" [Enter] scan / [Esc] cancel ")
            .title_alignment(ratatui::layout::Alignment::Center)
            .border_type(BorderType::Double)
            .border_style(Style::new().fg(GOLD))
            .padding(POPUP_PADDING);

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::vertical([
            Constraint::Max(3),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .split(inner);

        Paragraph::new("Enter the path to a directory containing music files:")
            .wrap(Wrap { trim: false })
            .fg(DARK_WHITE)
            .render(chunks[0], buf);

        state.popup.input.set_block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .fg(GOLD)
                .padding(Padding {
                    left: 1,
                    right: 1,
                    top: 0,
                    bottom: 0,
                }),
        );
        state
            .popup
            .input
            .set_style(Style::new().fg(DARK_WHITE));

        state.popup.input.render(chunks[1], buf);

        Paragraph::new("Example: ~/Music or /home/user/music")
            .fg(MID_GRAY)
            .centered()
            .render(chunks[2], buf);
    }
}
