//! Keyboard message handlers

use iced::Task;
use iced::keyboard::{Key, key::Named};

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle keyboard-related messages
    ///
    /// Enter and Escape dismiss the alert while it is open, mirroring
    /// its single "Close" action.
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, _modifiers) => {
                if !self.ui.alert.open {
                    return Some(Task::none());
                }

                match key {
                    Key::Named(Named::Escape) | Key::Named(Named::Enter) => {
                        Some(self.update(Message::CloseAlert))
                    }
                    _ => Some(Task::none()),
                }
            }

            _ => None,
        }
    }
}
