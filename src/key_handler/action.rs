use crate::{
    REFRESH_RATE,
    key_handler::*,
    ui_state::{PopupType, UiState},
};
use crossbeam_channel::{Receiver, unbounded};
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::thread;
use tracing::warn;

use KeyCode::*;

pub fn handle_key_event(key_event: KeyEvent, state: &UiState) -> Option<Action> {
    if let (C, Char('c')) = (key_event.modifiers, key_event.code) {
        return Some(Action::QUIT);
    }

    match &state.popup.current {
        PopupType::FolderPrompt => handle_prompt(&key_event),
        PopupType::Error(_) => handle_error_popup(&key_event),
        PopupType::None => handle_browser(&key_event),
    }
}

#[rustfmt::skip]
fn handle_browser(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (X, Char('q'))                  => Some(Action::QUIT),

        // PLAYBACK COMMANDS
        (X, Char(' '))                  => Some(Action::TogglePause),
        (X, Char('n'))                  => Some(Action::PlayNext),
        (X, Char('p'))                  => Some(Action::PlayPrev),
        (X, Char('.'))                  => Some(Action::SeekForward),
        (X, Char(','))                  => Some(Action::SeekBack),
        (X, Char(c)) if c.is_ascii_digit() => c.to_digit(10).map(|d| Action::SeekTo(d as u8)),

        // NAVIGATION
        (X, Enter) | (X, Char('l'))     => Some(Action::Open),
        (X, Backspace) | (X, Char('h')) => Some(Action::Back),

        // SCROLLING
        (X, Char('j')) | (X, Down)      => Some(Action::Scroll(Director::Down(1))),
        (X, Char('k')) | (X, Up)        => Some(Action::Scroll(Director::Up(1))),
        (X, Char('d'))                  => Some(Action::Scroll(Director::Down(SCROLL_MID))),
        (X, Char('u'))                  => Some(Action::Scroll(Director::Up(SCROLL_MID))),
        (X, Char('g'))                  => Some(Action::Scroll(Director::Top)),
        (S, Char('G'))                  => Some(Action::Scroll(Director::Bottom)),

        // LIBRARY
        (X, Char('a'))                  => Some(Action::OpenFolderPrompt),
        (X, Char('r'))                  => Some(Action::RefreshLibrary),
        (S, Char('X'))                  => Some(Action::ClearLibrary),

        _ => None,
    }
}

fn handle_prompt(key: &KeyEvent) -> Option<Action> {
    match key.code {
        Enter => Some(Action::PromptConfirm),
        Esc => Some(Action::ClosePopup),
        _ => Some(Action::PromptInput(*key)),
    }
}

fn handle_error_popup(key: &KeyEvent) -> Option<Action> {
    match key.code {
        Esc => Some(Action::ClosePopup),
        _ => None,
    }
}

/// Read terminal key presses on a background thread. The thread exits once
/// the receiver is dropped.
pub fn spawn_input_listener() -> Receiver<KeyEvent> {
    let (tx, rx) = unbounded();

    thread::spawn(move || {
        loop {
            match event::poll(REFRESH_RATE) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        if tx.send(key).is_err() {
                            break;
                        }
                    }
                    Ok(_) => (),
                    Err(e) => warn!("Failed to read terminal event: {e}"),
                },
                Ok(false) => (),
                Err(e) => {
                    warn!("Terminal input unavailable: {e}");
                    break;
                }
            }
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui_state::DEFAULT_RESTART_THRESHOLD;
    use ratatui::crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ui() -> UiState {
        UiState::new(DEFAULT_RESTART_THRESHOLD)
    }

    #[test]
    fn browser_keys() {
        let state = ui();

        assert_eq!(handle_key_event(key(Char('j')), &state), Some(Action::Scroll(Director::Down(1))));
        assert_eq!(handle_key_event(key(Enter), &state), Some(Action::Open));
        assert_eq!(handle_key_event(key(Char('h')), &state), Some(Action::Back));
        assert_eq!(handle_key_event(key(Char(' ')), &state), Some(Action::TogglePause));
        assert_eq!(handle_key_event(key(Char('7')), &state), Some(Action::SeekTo(7)));
        assert_eq!(handle_key_event(key(Char('q')), &state), Some(Action::QUIT));
        assert_eq!(
            handle_key_event(KeyEvent::new(Char('X'), KeyModifiers::SHIFT), &state),
            Some(Action::ClearLibrary)
        );
        assert_eq!(handle_key_event(key(Char('z')), &state), None);
    }

    #[test]
    fn prompt_captures_typing() {
        let mut state = ui();
        state.open_folder_prompt();

        assert_eq!(
            handle_key_event(key(Char('q')), &state),
            Some(Action::PromptInput(key(Char('q'))))
        );
        assert_eq!(handle_key_event(key(Enter), &state), Some(Action::PromptConfirm));
        assert_eq!(handle_key_event(key(Esc), &state), Some(Action::ClosePopup));
    }

    #[test]
    fn error_popup_only_closes() {
        let mut state = ui();
        state.set_error(anyhow::anyhow!("boom"));

        assert_eq!(handle_key_event(key(Char('n')), &state), None);
        assert_eq!(handle_key_event(key(Esc), &state), Some(Action::ClosePopup));
        assert_eq!(
            handle_key_event(KeyEvent::new(Char('c'), KeyModifiers::CONTROL), &state),
            Some(Action::QUIT)
        );
    }
}
