use super::{DARK_WHITE, DUR_WIDTH, GOLD, GOLD_FADED, MID_GRAY, PAUSE_ICON};
use crate::{
    DurationStyle,
    domain::SongInfo,
    get_readable_duration,
    ui_state::UiState,
};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span, Text},
    widgets::{LineGauge, StatefulWidget, Widget},
};

/// Current song, progress gauge and timer.
pub struct NowPlaying;

impl StatefulWidget for NowPlaying {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let Some(song) = state.playback.current() else {
            Line::from("Nothing playing")
                .fg(MID_GRAY)
                .centered()
                .render(area, buf);
            return;
        };

        let [title_area, _, progress_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let separator = match state.playback.is_playing() {
            true => Span::from(" ✧ ").fg(MID_GRAY),
            false => Span::from(format!(" {PAUSE_ICON} ")).fg(GOLD),
        };

        Line::from_iter([
            Span::from(song.get_title().to_string()).fg(DARK_WHITE).bold(),
            separator,
            Span::from(song.get_artist().to_string()).fg(GOLD_FADED),
            Span::from(" ✧ ").fg(MID_GRAY),
            Span::from(song.get_album().to_string()).fg(MID_GRAY),
        ])
        .centered()
        .render(title_area, buf);

        let elapsed = get_readable_duration(state.playback.position(), DurationStyle::Compact);
        let duration = song.get_duration_str();

        let [elapsed_area, gauge_area, duration_area] = Layout::horizontal([
            Constraint::Length(DUR_WIDTH + 2),
            Constraint::Fill(1),
            Constraint::Length(DUR_WIDTH + 2),
        ])
        .areas(progress_area);

        Text::from(elapsed)
            .fg(MID_GRAY)
            .right_aligned()
            .render(elapsed_area, buf);

        LineGauge::default()
            .filled_style(Style::new().fg(GOLD))
            .unfilled_style(Style::new().fg(MID_GRAY))
            .label("")
            .ratio(state.playback.progress())
            .render(pad(gauge_area), buf);

        Text::from(duration)
            .fg(MID_GRAY)
            .left_aligned()
            .render(pad(duration_area), buf);
    }
}

fn pad(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    }
}
