//! Star rating message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle star row presses
    pub fn handle_rating(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::StarRowPressed { x, width } => {
                match self
                    .ui
                    .rating
                    .select(*x, *width, self.core.feedback.as_mut())
                {
                    Ok(selection) if selection.changed => {
                        tracing::info!(
                            "Rating selected: {} ({} stars highlighted)",
                            selection.rating,
                            self.ui.rating.highlighted_count()
                        );
                    }
                    Ok(_) => {}
                    Err(e) => {
                        // Layout not resolved yet (zero width), nothing to select
                        tracing::warn!("Ignoring star row press: {}", e);
                    }
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
