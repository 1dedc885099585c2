//! Feature modules - business logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod feedback;
pub mod rating;
pub mod settings;

pub use feedback::SelectionFeedback;
pub use rating::{RatingSelector, STAR_COUNT, StarIcon};
pub use settings::Settings;
