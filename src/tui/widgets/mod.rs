mod browser;
mod error;
mod folder_prompt;
mod header;
mod now_playing;
mod status_line;

pub use browser::Browser;
pub use error::ErrorMsg;
pub use folder_prompt::FolderPrompt;
pub use header::Header;
pub use now_playing::NowPlaying;
pub use status_line::StatusLine;

use ratatui::style::Color;

const DUR_WIDTH: u16 = 5;
const PAUSE_ICON: &str = "󰏤";
const SELECTOR: &str = "> ";

const DARK_WHITE: Color = Color::Rgb(210, 210, 210);
const MID_GRAY: Color = Color::Rgb(100, 100, 100);
const GOLD: Color = Color::Rgb(220, 220, 100);
const GOLD_FADED: Color = Color::Rgb(130, 130, 60);
const GOOD_RED: Color = Color::Rgb(255, 70, 70);

static POPUP_PADDING: ratatui::widgets::Padding = ratatui::widgets::Padding {
    left: 2,
    right: 2,
    top: 1,
    bottom: 1,
};
