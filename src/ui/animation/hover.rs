//! Single-target fade animation using iced_anim
//!
//! Used for the feedback alert fade and the Send button hover highlight.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Fade duration (200ms for snappy feel)
const FADE_DURATION: Duration = Duration::from_millis(200);

/// Animated 0.0 ↔ 1.0 value for dialogs, buttons, etc.
#[derive(Debug)]
pub struct SingleHoverAnimation {
    animation: Animated<f32>,
    /// Whether the animation is heading to the active state
    active: bool,
}

fn fade_easing() -> Easing {
    Easing::EASE.with_duration(FADE_DURATION)
}

impl Default for SingleHoverAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl SingleHoverAnimation {
    pub fn new() -> Self {
        Self {
            animation: Animated::transition(0.0, fade_easing()),
            active: false,
        }
    }

    /// Start the animation (go to active state)
    pub fn start(&mut self) {
        self.active = true;
        self.animation.update(1.0.into());
    }

    /// Stop the animation (go to inactive state)
    pub fn stop(&mut self) {
        self.active = false;
        self.animation.update(0.0.into());
    }

    /// Whether the last request was `start`
    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Get progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        *self.animation.value()
    }

    /// Target progress the animation is moving toward
    #[cfg(test)]
    pub fn target(&self) -> f32 {
        *self.animation.target()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Tick the animation forward in time
    /// Must be called on each animation frame to update values
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let anim = SingleHoverAnimation::new();
        assert_eq!(anim.progress(), 0.0);
        assert!(!anim.is_active());
    }

    #[test]
    fn start_and_stop_set_target() {
        let mut anim = SingleHoverAnimation::new();

        anim.start();
        assert!(anim.is_active());
        assert_eq!(anim.target(), 1.0);

        anim.stop();
        assert!(!anim.is_active());
        assert_eq!(anim.target(), 0.0);
    }

    #[test]
    fn progress_stays_in_range() {
        let mut anim = SingleHoverAnimation::new();
        anim.start();
        let now = Instant::now();
        for step in 0..20 {
            anim.tick(now + Duration::from_millis(step * 20));
            assert!((0.0..=1.0).contains(&anim.progress()));
        }
    }
}
