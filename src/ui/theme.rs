//! Theme system for the rating screen
//! Supports both light and dark modes with a warm peach / plum palette

use iced::color;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffd5c2);
    pub const TITLE: Color = color!(0x9b70b7);
    pub const STAR_EMPTY: Color = color!(0x9b70b7);
    pub const SURFACE: Color = color!(0xfdf6f2);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
    pub const TEXT_SECONDARY: Color = color!(0x555555);
    pub const DIVIDER: Color = color!(0xe6d6ce);
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x211b26);
    pub const TITLE: Color = color!(0xc7a3dd);
    pub const STAR_EMPTY: Color = color!(0x8a7399);
    pub const SURFACE: Color = color!(0x2d2533);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
    pub const TEXT_SECONDARY: Color = color!(0xb3b3b3);
    pub const DIVIDER: Color = color!(0x3d3345);
}

/// Send button fill (same for both modes)
pub const SEND_BUTTON: Color = color!(0xce6a8c);

/// Send button fill while hovered
pub const SEND_BUTTON_HOVER: Color = color!(0xd97f9e);

/// Filled star color (same for both modes)
pub const STAR_FILLED: Color = color!(0xf5b729);

pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

pub fn title(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TITLE
    } else {
        light::TITLE
    }
}

/// Outline color for unhighlighted stars
pub fn star_empty(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::STAR_EMPTY
    } else {
        light::STAR_EMPTY
    }
}

pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

pub fn divider(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::DIVIDER
    } else {
        light::DIVIDER
    }
}

/// Same color with its alpha multiplied by `opacity`
pub fn with_opacity(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

/// Linear blend between two colors (t = 0 gives `from`)
pub fn mix(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color::from_rgba(
        from.r + (to.r - from.r) * t,
        from.g + (to.g - from.g) * t,
        from.b + (to.b - from.b) * t,
        from.a + (to.a - from.a) * t,
    )
}

// ============================================================================
// Container Styles
// ============================================================================

/// Full-window screen background
pub fn screen(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Alert card, faded by `opacity`
pub fn alert_card(theme: &Theme, opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_opacity(surface(theme), opacity))),
        border: Border {
            radius: 14.0.into(),
            width: 1.0,
            color: with_opacity(divider(theme), opacity),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25 * opacity),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

/// Dimmed backdrop behind the alert
pub fn alert_backdrop(opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            0.0,
            0.0,
            0.0,
            0.4 * opacity,
        ))),
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Alert action button - flat text button with a hover tint
pub fn alert_action_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: SEND_BUTTON,
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(with_opacity(divider(theme), 0.8))),
            ..base
        },
        _ => base,
    }
}
