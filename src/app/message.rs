//! Application messages

use iced::keyboard::{Key, Modifiers};

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// No-op message for event interception (modal backdrop clicks)
    Noop,

    // ============ Rating ============
    /// Press inside the star row, `x` measured from the row's left edge
    StarRowPressed { x: f32, width: f32 },

    // ============ Send / Alert ============
    /// Send button pressed
    Submit,
    /// Alert "Close" action
    CloseAlert,
    /// Pointer entered or left the Send button
    SendHovered(bool),

    // ============ Window / Frames ============
    /// Animation frame (~60fps while something is animating)
    AnimationTick,
    /// Keyboard key pressed
    KeyPressed(Key, Modifiers),
    /// Main window closed
    WindowClosed,
}
