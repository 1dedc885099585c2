//! Reusable UI widgets - composable components without business logic
//!
//! Widgets combine primitives and basic iced elements into reusable UI patterns.
//! They should not contain any business logic or depend on `crate::app` directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Widgets must not import from `crate::app::Message`
//! - **Generic callbacks**: Use generic Message types or callback functions
//! - **Composable**: Build on primitives and iced's built-in widgets

mod pulse_button;
mod star_icon;

pub use pulse_button::pulse_button;
pub use star_icon::star_icon;
