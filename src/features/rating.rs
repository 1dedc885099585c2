//! Star rating selection
//!
//! Maps a click offset inside the star row to a rating and keeps the
//! per-star highlight flags in sync with it.

use super::feedback::SelectionFeedback;

/// Number of stars shown in the rating row
pub const STAR_COUNT: u32 = 5;

/// Errors for calls that violate the selector's preconditions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatingError {
    /// Row width must be positive and finite
    InvalidRowWidth(f32),
    /// At least one star is required
    NoStars,
}

impl std::fmt::Display for RatingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RatingError::InvalidRowWidth(w) => write!(f, "Invalid star row width: {}", w),
            RatingError::NoStars => write!(f, "Star count must be at least 1"),
        }
    }
}

impl std::error::Error for RatingError {}

/// Compute the rating for a click at `tap_x` in a row `row_width` pixels wide
///
/// Offsets outside the row clamp to the first or last star.
pub fn select_rating(tap_x: f32, row_width: f32, star_count: u32) -> Result<u32, RatingError> {
    if star_count == 0 {
        return Err(RatingError::NoStars);
    }
    if !row_width.is_finite() || row_width <= 0.0 {
        return Err(RatingError::InvalidRowWidth(row_width));
    }

    let star_width = row_width / star_count as f32;
    // Float-to-int casts saturate, NaN becomes 0
    let index = (tap_x / star_width).floor() as i64;

    Ok(index.saturating_add(1).clamp(1, star_count as i64) as u32)
}

/// One star in the rating row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarIcon {
    /// Position in the row, starting at 1
    pub ordinal: u32,
    pub highlighted: bool,
}

/// Result of a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub rating: u32,
    /// Whether the stored rating changed (and feedback fired)
    pub changed: bool,
}

/// Current rating plus the ordered star icons it drives
#[derive(Debug, Clone)]
pub struct RatingSelector {
    /// 0 until the first selection
    rating: u32,
    stars: Vec<StarIcon>,
}

impl Default for RatingSelector {
    fn default() -> Self {
        Self::new(STAR_COUNT)
    }
}

impl RatingSelector {
    /// Create a selector with `star_count` unhighlighted stars
    pub fn new(star_count: u32) -> Self {
        let stars = (1..=star_count)
            .map(|ordinal| StarIcon {
                ordinal,
                highlighted: false,
            })
            .collect();

        Self { rating: 0, stars }
    }

    /// Current rating, 0 if nothing has been selected yet
    pub fn rating(&self) -> u32 {
        self.rating
    }

    pub fn stars(&self) -> &[StarIcon] {
        &self.stars
    }

    pub fn star_count(&self) -> u32 {
        self.stars.len() as u32
    }

    pub fn highlighted_count(&self) -> usize {
        self.stars.iter().filter(|s| s.highlighted).count()
    }

    /// Handle a click inside the star row
    ///
    /// Feedback fires only when the rating actually changes. Star highlight
    /// flags are refreshed on every call.
    pub fn select(
        &mut self,
        tap_x: f32,
        row_width: f32,
        feedback: &mut dyn SelectionFeedback,
    ) -> Result<Selection, RatingError> {
        let rating = select_rating(tap_x, row_width, self.star_count())?;

        let changed = rating != self.rating;
        if changed {
            feedback.selection_changed();
            tracing::debug!("Rating changed: {} -> {}", self.rating, rating);
            self.rating = rating;
        }

        for star in &mut self.stars {
            star.highlighted = star.ordinal <= rating;
        }

        Ok(Selection { rating, changed })
    }
}
