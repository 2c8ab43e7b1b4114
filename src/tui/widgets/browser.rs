use super::{DARK_WHITE, DUR_WIDTH, GOLD, GOLD_FADED, MID_GRAY, SELECTOR};
use crate::{
    domain::SongInfo,
    ui_state::{HOME_ENTRIES, UiState, ViewKind},
};
use ratatui::{
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, HighlightSpacing, List, ListItem, Padding, Paragraph, StatefulWidget, Widget},
};

/// The listing of whatever view is on top of the navigation stack.
pub struct Browser;

impl StatefulWidget for Browser {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let block = Block::new().padding(Padding::horizontal(1));

        if state.nav.is_empty() {
            let hint = match state.is_scanning() {
                true => "Scanning...",
                false => "Nothing here yet. Press [a] to add a music folder.",
            };
            Paragraph::new(hint)
                .fg(MID_GRAY)
                .centered()
                .block(block)
                .render(area, buf);
            return;
        }

        let width = area.width.saturating_sub(4) as usize;
        let items = match state.nav.current().kind {
            ViewKind::Home => HOME_ENTRIES
                .iter()
                .map(|(label, _)| ListItem::new(Span::from(*label).fg(DARK_WHITE)))
                .collect::<Vec<_>>(),
            ViewKind::Artists => state
                .nav
                .artists
                .iter()
                .map(|a| {
                    ListItem::new(Line::from_iter([
                        Span::from(a.display_name().to_string()).fg(DARK_WHITE),
                        Span::from(format!("  [{}]", a.count)).fg(MID_GRAY),
                    ]))
                })
                .collect(),
            ViewKind::Albums => state
                .nav
                .albums
                .iter()
                .map(|a| {
                    ListItem::new(Line::from_iter([
                        Span::from(a.display_name().to_string()).fg(DARK_WHITE),
                        Span::from(" ✧ ").fg(MID_GRAY),
                        Span::from(a.artist.clone()).fg(GOLD_FADED),
                    ]))
                })
                .collect(),
            ViewKind::Folders => state
                .nav
                .folders
                .iter()
                .map(|f| ListItem::new(Span::from(f.clone()).fg(DARK_WHITE)))
                .collect(),
            ViewKind::Songs => {
                let now_playing = state.playback.current().map(|s| s.id);
                state
                    .nav
                    .songs
                    .iter()
                    .map(|s| {
                        let title_color = match Some(s.id) == now_playing {
                            true => GOLD,
                            false => DARK_WHITE,
                        };
                        let title_width = width.saturating_sub(DUR_WIDTH as usize + 2) / 2;
                        ListItem::new(Line::from_iter([
                            Span::from(format!("{:<title_width$.title_width$}", s.get_title()))
                                .fg(title_color),
                            Span::from(format!(" {:<title_width$.title_width$}", s.get_artist()))
                                .fg(GOLD_FADED),
                            Span::from(format!(" {:>5}", s.get_duration_str())).fg(MID_GRAY),
                        ]))
                    })
                    .collect()
            }
        };

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::new().bold().reversed())
            .highlight_symbol(SELECTOR)
            .highlight_spacing(HighlightSpacing::Always);

        StatefulWidget::render(list, area, buf, &mut state.selection);
    }
}
