//! Message update handlers - thin dispatcher delegating to submodules

mod alert;
mod keyboard;
mod rating;
mod window;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_rating(&message) {
            return task;
        }
        if let Some(task) = self.handle_alert(&message) {
            return task;
        }
        if let Some(task) = self.handle_keyboard(&message) {
            return task;
        }
        if let Some(task) = self.handle_window(&message) {
            return task;
        }

        // Default: no task
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use iced::keyboard::{Key, Modifiers, key::Named};
    use iced::time::Instant;

    use super::*;
    use crate::app::{CoreState, UiState};
    use crate::features::{SelectionFeedback, Settings};
    use crate::i18n::Locale;

    /// Feedback sink sharing its pulse count with the test
    struct SharedCounter(Rc<Cell<usize>>);

    impl SelectionFeedback for SharedCounter {
        fn selection_changed(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn test_app() -> (App, Rc<Cell<usize>>) {
        let pulses = Rc::new(Cell::new(0));
        let core = CoreState::with_feedback(
            Settings::default(),
            Locale::default(),
            Box::new(SharedCounter(pulses.clone())),
        );
        let ui = UiState::new(false, Instant::now());
        (App { core, ui }, pulses)
    }

    fn press(app: &mut App, x: f32) {
        let _ = app.update(Message::StarRowPressed { x, width: 250.0 });
    }

    mod property_rating {
        use super::*;

        #[test]
        fn press_selects_and_highlights() {
            let (mut app, pulses) = test_app();

            press(&mut app, 125.0);

            assert_eq!(app.ui.rating.rating(), 3);
            assert_eq!(app.ui.rating.highlighted_count(), 3);
            assert_eq!(pulses.get(), 1);
        }

        #[test]
        fn repeated_press_fires_feedback_once() {
            let (mut app, pulses) = test_app();

            press(&mut app, 240.0);
            press(&mut app, 240.0);
            press(&mut app, 210.0);

            assert_eq!(app.ui.rating.rating(), 5);
            assert_eq!(pulses.get(), 1);
        }

        #[test]
        fn press_outside_row_is_clamped() {
            let (mut app, _) = test_app();

            press(&mut app, -15.0);
            assert_eq!(app.ui.rating.rating(), 1);

            press(&mut app, 400.0);
            assert_eq!(app.ui.rating.rating(), 5);
        }

        #[test]
        fn zero_width_press_is_ignored() {
            let (mut app, pulses) = test_app();

            let _ = app.update(Message::StarRowPressed { x: 10.0, width: 0.0 });

            assert_eq!(app.ui.rating.rating(), 0);
            assert_eq!(pulses.get(), 0);
        }
    }

    mod property_alert {
        use super::*;

        #[test]
        fn submit_without_rating_opens_alert() {
            let (mut app, _) = test_app();
            assert_eq!(app.ui.rating.rating(), 0);

            let _ = app.update(Message::Submit);

            assert!(app.ui.alert.open);
            assert!(app.ui.alert.animation.is_active());
        }

        #[test]
        fn repeated_submit_keeps_single_alert() {
            let (mut app, _) = test_app();
            press(&mut app, 60.0);

            let _ = app.update(Message::Submit);
            let _ = app.update(Message::Submit);
            assert!(app.ui.alert.open);

            // One Close is enough to dismiss it
            let _ = app.update(Message::CloseAlert);
            assert!(!app.ui.alert.open);
            assert!(!app.ui.alert.animation.is_active());
        }

        #[test]
        fn submit_and_close_leave_rating_untouched() {
            let (mut app, pulses) = test_app();
            press(&mut app, 160.0);

            let _ = app.update(Message::Submit);
            let _ = app.update(Message::CloseAlert);

            assert_eq!(app.ui.rating.rating(), 4);
            assert_eq!(pulses.get(), 1);
        }

        #[test]
        fn escape_closes_open_alert() {
            let (mut app, _) = test_app();
            let _ = app.update(Message::Submit);

            let _ = app.update(Message::KeyPressed(
                Key::Named(Named::Escape),
                Modifiers::default(),
            ));

            assert!(!app.ui.alert.open);
        }

        #[test]
        fn keys_do_nothing_without_alert() {
            let (mut app, _) = test_app();

            let _ = app.update(Message::KeyPressed(
                Key::Named(Named::Enter),
                Modifiers::default(),
            ));

            assert!(!app.ui.alert.open);
        }

        #[test]
        fn backdrop_press_does_not_dismiss() {
            let (mut app, _) = test_app();
            let _ = app.update(Message::Submit);

            let _ = app.update(Message::Noop);

            assert!(app.ui.alert.open);
        }
    }

    mod property_pulse {
        use super::*;

        #[test]
        fn pulse_is_independent_of_rating() {
            let (mut app, _) = test_app();
            let now = Instant::now();
            let before = app.ui.pulse_frame(now);

            press(&mut app, 125.0);
            let _ = app.update(Message::Submit);

            assert_eq!(app.ui.pulse_frame(now), before);
        }

        #[test]
        fn hover_targets_follow_pointer() {
            let (mut app, _) = test_app();

            let _ = app.update(Message::SendHovered(true));
            assert_eq!(app.ui.send_hover.target(), 1.0);

            let _ = app.update(Message::SendHovered(false));
            assert_eq!(app.ui.send_hover.target(), 0.0);
        }
    }

    #[test]
    fn title_shows_rating_once_selected() {
        let (mut app, _) = test_app();
        let id = iced::window::Id::unique();

        assert_eq!(app.title(id), "RateStars");

        press(&mut app, 125.0);
        assert_eq!(app.title(id), "RateStars - 3/5");
    }
}
