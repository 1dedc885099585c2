//! Decorative button pulse
//!
//! Two independent channels (opacity and scale), each repeating forever
//! and reversing direction at the end of every pass. The pulse is
//! attached once and only ever sampled; nothing waits on it.

use std::time::{Duration, Instant};

use iced::animation::{Animation, Easing};

/// Length of one pass in either direction
const PULSE_DURATION: Duration = Duration::from_millis(1500);

/// Static description of one pulsing property
#[derive(Debug, Clone, Copy)]
pub struct PulseChannel {
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
    pub easing: Easing,
}

impl PulseChannel {
    /// Opacity 0.7 → 1.0, ease-out
    pub const OPACITY: PulseChannel = PulseChannel {
        from: 0.7,
        to: 1.0,
        duration: PULSE_DURATION,
        easing: Easing::EaseOut,
    };

    /// Scale 0.95 → 1.0, ease-in-out
    pub const SCALE: PulseChannel = PulseChannel {
        from: 0.95,
        to: 1.0,
        duration: PULSE_DURATION,
        easing: Easing::EaseInOut,
    };

    fn animation(&self, now: Instant) -> Animation<bool> {
        Animation::new(false)
            .duration(self.duration)
            .easing(self.easing)
            .repeat_forever()
            .auto_reverse()
            .go(true, now)
    }
}

/// Sampled pulse values for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseFrame {
    pub opacity: f32,
    pub scale: f32,
}

impl PulseFrame {
    /// Fully opaque, unscaled
    pub const REST: PulseFrame = PulseFrame {
        opacity: 1.0,
        scale: 1.0,
    };
}

/// Running opacity + scale pulse
pub struct PulseAnimation {
    opacity: Animation<bool>,
    scale: Animation<bool>,
}

impl std::fmt::Debug for PulseAnimation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PulseAnimation").finish_non_exhaustive()
    }
}

impl PulseAnimation {
    /// Attach a pulse that starts at `now`
    pub fn attached(now: Instant) -> Self {
        Self {
            opacity: PulseChannel::OPACITY.animation(now),
            scale: PulseChannel::SCALE.animation(now),
        }
    }

    /// Sample both channels at `now`
    pub fn frame(&self, now: Instant) -> PulseFrame {
        let opacity = PulseChannel::OPACITY;
        let scale = PulseChannel::SCALE;

        PulseFrame {
            opacity: self.opacity.interpolate(opacity.from, opacity.to, now),
            scale: self.scale.interpolate(scale.from, scale.to, now),
        }
    }

    /// Always true once attached; the pulse never finishes
    pub fn is_animating(&self, now: Instant) -> bool {
        self.opacity.is_animating(now) || self.scale.is_animating(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn within(value: f32, channel: PulseChannel) -> bool {
        let (lo, hi) = (channel.from.min(channel.to), channel.from.max(channel.to));
        value >= lo - 1e-4 && value <= hi + 1e-4
    }

    #[test]
    fn starts_at_from_values() {
        let now = Instant::now();
        let pulse = PulseAnimation::attached(now);
        let frame = pulse.frame(now);

        assert!((frame.opacity - 0.7).abs() < 1e-3, "opacity {}", frame.opacity);
        assert!((frame.scale - 0.95).abs() < 1e-3, "scale {}", frame.scale);
    }

    #[test]
    fn values_stay_in_bounds_over_many_cycles() {
        let start = Instant::now();
        let pulse = PulseAnimation::attached(start);

        // 10 passes, sampled every 50ms
        for step in 0..300 {
            let frame = pulse.frame(start + Duration::from_millis(step * 50));
            assert!(within(frame.opacity, PulseChannel::OPACITY), "opacity {}", frame.opacity);
            assert!(within(frame.scale, PulseChannel::SCALE), "scale {}", frame.scale);
        }
    }

    #[test]
    fn keeps_running_after_many_cycles() {
        let start = Instant::now();
        let pulse = PulseAnimation::attached(start);

        assert!(pulse.is_animating(start + Duration::from_secs(1)));
        assert!(pulse.is_animating(start + Duration::from_secs(600)));
    }

    #[test]
    fn rest_frame_is_neutral() {
        assert_eq!(PulseFrame::REST.opacity, 1.0);
        assert_eq!(PulseFrame::REST.scale, 1.0);
    }
}
