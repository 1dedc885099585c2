//! Send button and feedback alert handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle Send / alert messages
    pub fn handle_alert(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Submit => {
                // The alert is modal; a second submit never stacks another one
                if !self.ui.alert.open {
                    tracing::info!(
                        "Feedback sent (rating: {})",
                        self.ui.rating.rating()
                    );
                    self.ui.alert.open = true;
                    self.ui.alert.animation.start();
                }
                Some(Task::none())
            }

            Message::CloseAlert => {
                if self.ui.alert.open {
                    tracing::debug!("Alert closed");
                    self.ui.alert.open = false;
                    self.ui.alert.animation.stop();
                }
                Some(Task::none())
            }

            Message::SendHovered(hovered) => {
                if *hovered {
                    self.ui.send_hover.start();
                } else {
                    self.ui.send_hover.stop();
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
