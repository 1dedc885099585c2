//! Selection feedback
//!
//! A short cue fired when the rating changes. On the desktop this is a
//! quiet click tone played through rodio; when sound is disabled or no
//! output device is available the event is only logged.

use std::time::Duration;

use anyhow::Context;
use rodio::source::SineWave;
use rodio::{OutputStream, OutputStreamBuilder, Source};

use super::settings::FeedbackSettings;

/// Click tone pitch in Hz
const CLICK_FREQUENCY: f32 = 1800.0;
/// Click tone length
const CLICK_DURATION: Duration = Duration::from_millis(18);

/// Receiver of "selection changed" cues
pub trait SelectionFeedback {
    fn selection_changed(&mut self);
}

/// Feedback that only logs
#[derive(Debug, Default)]
pub struct SilentFeedback;

impl SelectionFeedback for SilentFeedback {
    fn selection_changed(&mut self) {
        tracing::debug!("Selection changed (silent feedback)");
    }
}

/// Feedback that plays a short click tone on the default output
pub struct ClickFeedback {
    stream: OutputStream,
    volume: f32,
}

impl ClickFeedback {
    /// Open the default output device
    pub fn new(volume: f32) -> anyhow::Result<Self> {
        let stream = OutputStreamBuilder::open_default_stream()
            .context("Failed to open default audio output")?;

        Ok(Self {
            stream,
            volume: volume.clamp(0.0, 1.0),
        })
    }
}

impl SelectionFeedback for ClickFeedback {
    fn selection_changed(&mut self) {
        let click = SineWave::new(CLICK_FREQUENCY)
            .take_duration(CLICK_DURATION)
            .amplify(self.volume);
        self.stream.mixer().add(click);
    }
}

/// Which feedback sink the settings ask for
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeedbackKind {
    Silent,
    Click { volume: f32 },
}

impl FeedbackKind {
    pub fn from_settings(settings: &FeedbackSettings) -> Self {
        if settings.sound_enabled {
            FeedbackKind::Click {
                volume: settings.volume.clamp(0.0, 1.0),
            }
        } else {
            FeedbackKind::Silent
        }
    }
}

/// Build the feedback sink described by settings
///
/// Falls back to [`SilentFeedback`] when sound is off or the output
/// device cannot be opened.
pub fn from_settings(settings: &FeedbackSettings) -> Box<dyn SelectionFeedback> {
    let volume = match FeedbackKind::from_settings(settings) {
        FeedbackKind::Silent => {
            tracing::info!("Sound feedback disabled");
            return Box::new(SilentFeedback);
        }
        FeedbackKind::Click { volume } => volume,
    };

    match ClickFeedback::new(volume) {
        Ok(feedback) => {
            tracing::info!("Sound feedback ready (volume {:.2})", volume);
            Box::new(feedback)
        }
        Err(e) => {
            tracing::warn!("Using silent feedback: {:#}", e);
            Box::new(SilentFeedback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_sound_is_silent() {
        let settings = FeedbackSettings {
            sound_enabled: false,
            volume: 0.5,
        };
        assert_eq!(FeedbackKind::from_settings(&settings), FeedbackKind::Silent);

        // Silent path never touches the audio device
        let mut feedback = from_settings(&settings);
        feedback.selection_changed();
    }

    #[test]
    fn enabled_sound_clicks_at_clamped_volume() {
        let settings = FeedbackSettings {
            sound_enabled: true,
            volume: 1.7,
        };
        assert_eq!(
            FeedbackKind::from_settings(&settings),
            FeedbackKind::Click { volume: 1.0 }
        );

        let default_kind = FeedbackKind::from_settings(&FeedbackSettings::default());
        assert_eq!(default_kind, FeedbackKind::Click { volume: 0.3 });
    }
}
