use tui_textarea::TextArea;

use crate::ui_state::{UiState, new_textarea};

#[derive(Debug, Clone, PartialEq)]
pub enum PopupType {
    None,
    FolderPrompt,
    Error(String),
}

pub struct PopupState {
    pub current: PopupType,
    pub input: TextArea<'static>,
}

impl PopupState {
    pub(crate) fn new() -> PopupState {
        PopupState {
            current: PopupType::None,
            input: new_textarea("Enter path to music folder"),
        }
    }

    fn open(&mut self, popup: PopupType) {
        if popup == PopupType::FolderPrompt {
            self.input.select_all();
            self.input.cut();
        }
        self.current = popup
    }

    pub fn is_open(&self) -> bool {
        self.current != PopupType::None
    }

    fn close(&mut self) {
        self.current = PopupType::None;
        self.input.select_all();
        self.input.cut();
    }
}

impl UiState {
    pub fn show_popup(&mut self, popup: PopupType) {
        self.popup.open(popup);
    }

    pub fn close_popup(&mut self) {
        self.popup.close();
    }

    pub fn open_folder_prompt(&mut self) {
        self.show_popup(PopupType::FolderPrompt);
    }

    /// Text typed into the folder prompt. Closes the prompt.
    pub fn take_folder_input(&mut self) -> String {
        let input = self.popup.input.lines().join("");
        self.close_popup();
        input
    }

    pub fn set_error(&mut self, e: anyhow::Error) {
        self.show_popup(PopupType::Error(format!("{e:#}")));
    }

    pub fn get_error(&self) -> Option<&str> {
        match &self.popup.current {
            PopupType::Error(e) => Some(e.as_str()),
            _ => None,
        }
    }

    pub fn dismiss_error(&mut self) {
        if self.get_error().is_some() {
            self.close_popup();
        }
    }
}
