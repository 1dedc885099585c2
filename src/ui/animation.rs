//! Animation system for RateStars
//!
//! Two kinds of motion live here:
//!
//! - Transitions driven by `iced_anim` (alert fade, button hover)
//! - The looping, auto-reversing button pulse built on
//!   `iced::animation::Animation`
//!
//! # Usage
//!
//! ```rust
//! use crate::ui::animation::{PulseAnimation, SingleHoverAnimation};
//!
//! let mut fade = SingleHoverAnimation::new();
//! fade.start();
//!
//! let pulse = PulseAnimation::attached(Instant::now());
//! ```

mod hover;
mod pulse;

pub use hover::SingleHoverAnimation;
pub use pulse::{PulseAnimation, PulseFrame};
