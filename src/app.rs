//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::time::Instant;
use iced::{Task, Theme};

use crate::features::Settings;
use crate::i18n::{Key, Language, Locale};
pub use message::Message;
pub use state::{App, CoreState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first to initialize locale correctly
        let settings = Settings::load();
        let locale = Locale::new(Language::from_code(&settings.display.language));
        tracing::info!(
            "Using language: {} ({})",
            locale.language.display_name(),
            locale.language.code()
        );

        // 2. Initialize sub-states
        let power_saving = settings.display.power_saving_mode;
        let core = CoreState::new(settings, locale);
        let ui = UiState::new(power_saving, Instant::now());

        let app = Self { core, ui };

        // 3. Open main window
        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: iced::Size::new(420.0, 640.0),
            min_size: Some(iced::Size::new(320.0, 480.0)),
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "ratestars".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        (app, open_window.discard())
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title, with the current rating once one is selected
    pub fn title(&self, _window_id: iced::window::Id) -> String {
        let name = self.core.locale.get(Key::AppName);
        match self.ui.rating.rating() {
            0 => name.to_string(),
            rating => format!("{} - {}/{}", name, rating, self.ui.rating.star_count()),
        }
    }

    /// Subscriptions for animation frames, keyboard events, and window close
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;

        let now = Instant::now();

        // 1. Animation frames (~60fps while the pulse or a transition runs)
        let animation_sub = if subscription_logic::needs_animation_subscription(
            self.ui.is_pulsing(now),
            self.ui.has_active_transitions(),
        ) {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        // 2. Keyboard events
        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        // 3. Window close
        let close_event_sub = iced::window::close_events().map(|_id| Message::WindowClosed);

        iced::Subscription::batch([animation_sub, keyboard_sub, close_event_sub])
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_animation_subscription(pulsing: bool, transitions_active: bool) -> bool {
        pulsing || transitions_active
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::subscription_logic::*;
    use super::*;

    #[test]
    fn frames_follow_any_animation_source() {
        assert!(!needs_animation_subscription(false, false));
        assert!(needs_animation_subscription(true, false));
        assert!(needs_animation_subscription(false, true));
        assert!(needs_animation_subscription(true, true));
    }

    #[test]
    fn attached_pulse_keeps_frames_running() {
        let now = Instant::now();
        let ui = UiState::new(false, now);
        let later = now + Duration::from_secs(30);

        assert!(ui.pulse.is_some());
        assert!(needs_animation_subscription(
            ui.is_pulsing(later),
            ui.has_active_transitions()
        ));
    }

    #[test]
    fn power_saving_screen_is_idle() {
        let now = Instant::now();
        let ui = UiState::new(true, now);

        assert!(ui.pulse.is_none());
        assert!(!needs_animation_subscription(
            ui.is_pulsing(now),
            ui.has_active_transitions()
        ));
        assert_eq!(ui.pulse_frame(now), crate::ui::animation::PulseFrame::REST);
    }
}
