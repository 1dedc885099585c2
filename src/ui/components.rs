//! UI Components module - business-specific composite components
//!
//! Components combine widgets and primitives with application logic.
//! They are the only layer that should import from `crate::app`.
//!
//! # Relationship to Other Layers
//!
//! - **Primitives** (`crate::ui::primitives`): Low-level Widget trait implementations
//! - **Widgets** (`crate::ui::widgets`): Composable UI patterns (no business logic)
//! - **Components** (this module): Business-specific UI with Message handling

pub mod feedback_alert;
pub mod send_button;
pub mod star_bar;
