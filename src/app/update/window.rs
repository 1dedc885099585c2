//! Window and frame message handlers

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::AnimationTick => {
                self.ui.tick_animations(Instant::now());
                Some(Task::none())
            }

            Message::WindowClosed => {
                tracing::info!("Main window closed, exiting");
                Some(iced::exit())
            }

            Message::Noop => Some(Task::none()),

            _ => None,
        }
    }
}
