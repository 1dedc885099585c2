//! Application state definitions

use iced::time::Instant;

use crate::features::{RatingSelector, STAR_COUNT, SelectionFeedback, Settings, feedback};
use crate::i18n::Locale;
use crate::ui::animation::{PulseAnimation, PulseFrame, SingleHoverAnimation};

/// Main application state
pub struct App {
    /// Core infrastructure (Settings, Locale, Feedback output)
    pub core: CoreState,
    /// Screen state (Rating, Alert, Animations)
    pub ui: UiState,
}

/// Core Infrastructure & Services
pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
    /// Cue fired when the rating changes
    pub feedback: Box<dyn SelectionFeedback>,
}

impl CoreState {
    /// Initialize core services with loaded settings
    pub fn new(settings: Settings, locale: Locale) -> Self {
        let feedback = feedback::from_settings(&settings.feedback);
        Self::with_feedback(settings, locale, feedback)
    }

    /// Initialize with an explicit feedback sink
    pub fn with_feedback(
        settings: Settings,
        locale: Locale,
        feedback: Box<dyn SelectionFeedback>,
    ) -> Self {
        Self {
            settings,
            locale,
            feedback,
        }
    }
}

/// Modal feedback alert
#[derive(Debug, Default)]
pub struct AlertState {
    pub open: bool,
    /// Fade in/out
    pub animation: SingleHoverAnimation,
}

impl AlertState {
    /// Whether the overlay must be drawn (open, or still fading out)
    pub fn is_visible(&self) -> bool {
        self.open || self.animation.progress() > 0.01
    }
}

/// UI state for the rating screen
pub struct UiState {
    /// Current rating and star highlight flags
    pub rating: RatingSelector,
    pub alert: AlertState,
    /// Hover highlight of the Send button
    pub send_hover: SingleHoverAnimation,
    /// Decorative Send button pulse, absent in power saving mode
    pub pulse: Option<PulseAnimation>,
}

impl UiState {
    /// Build the screen state, attaching the pulse once unless disabled
    pub fn new(power_saving: bool, now: Instant) -> Self {
        let pulse = if power_saving {
            tracing::info!("Power saving mode: button pulse disabled");
            None
        } else {
            Some(PulseAnimation::attached(now))
        };

        Self {
            rating: RatingSelector::new(STAR_COUNT),
            alert: AlertState::default(),
            send_hover: SingleHoverAnimation::new(),
            pulse,
        }
    }

    /// Current pulse sample, or the resting frame when no pulse is attached
    pub fn pulse_frame(&self, now: Instant) -> PulseFrame {
        self.pulse
            .as_ref()
            .map(|pulse| pulse.frame(now))
            .unwrap_or(PulseFrame::REST)
    }

    /// Whether the decorative pulse is running
    pub fn is_pulsing(&self, now: Instant) -> bool {
        self.pulse
            .as_ref()
            .map(|pulse| pulse.is_animating(now))
            .unwrap_or(false)
    }

    /// Whether the alert fade or button hover is mid-transition
    pub fn has_active_transitions(&self) -> bool {
        self.alert.animation.is_animating() || self.send_hover.is_animating()
    }

    /// Advance transition animations to `now`
    ///
    /// The pulse is sampled from its start time and needs no ticking.
    pub fn tick_animations(&mut self, now: Instant) {
        self.alert.animation.tick(now);
        self.send_hover.tick(now);
    }
}
