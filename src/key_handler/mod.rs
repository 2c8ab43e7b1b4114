mod action;

pub use action::{handle_key_event, spawn_input_listener};

use ratatui::crossterm::event::{KeyEvent, KeyModifiers};

const X: KeyModifiers = KeyModifiers::NONE;
const S: KeyModifiers = KeyModifiers::SHIFT;
const C: KeyModifiers = KeyModifiers::CONTROL;

const SCROLL_MID: usize = 5;

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    // Player Controls
    TogglePause,
    PlayNext,
    PlayPrev,
    SeekForward,
    SeekBack,
    /// Jump to the given tenth of the song
    SeekTo(u8),

    // Browsing
    Open,
    Back,
    Scroll(Director),

    // Library
    OpenFolderPrompt,
    PromptInput(KeyEvent),
    PromptConfirm,
    RefreshLibrary,
    ClearLibrary,

    ClosePopup,
    QUIT,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Director {
    Up(usize),
    Down(usize),
    Top,
    Bottom,
}
