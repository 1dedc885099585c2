//! Pulsing button widget
//!
//! A solid, rounded button whose opacity and scale follow a
//! [`PulseFrame`]. Scaling is done with stock layout: the button keeps
//! `scale` of the available width through fill portions and `scale` of
//! the slot height.

use iced::widget::{Space, button, container, row, text};
use iced::{Background, Border, Color, Element, Length};

use crate::ui::animation::PulseFrame;
use crate::ui::theme;

/// Resolution used to turn a scale factor into fill portions
const PORTION_SCALE: f32 = 1000.0;

/// Corner radius of the button
const CORNER_RADIUS: f32 = 8.0;

/// Fill portions `(side, body)` so that `body / (body + 2 * side) == scale`
fn fill_portions(scale: f32) -> (u16, u16) {
    let scale = scale.clamp(0.0, 1.0);
    let body = (scale * PORTION_SCALE).round() as u16;
    let side = ((1.0 - scale) * PORTION_SCALE / 2.0).round() as u16;
    (side, body.max(1))
}

/// Build a pulsing button
///
/// # Arguments
/// * `label` - Button title
/// * `frame` - Current pulse sample
/// * `hover` - Hover highlight progress (0.0 to 1.0)
/// * `height` - Height of the slot the button sits in
/// * `text_size` - Title size at full scale
pub fn pulse_button<'a, Message: Clone + 'a>(
    label: &'a str,
    frame: PulseFrame,
    hover: f32,
    height: f32,
    text_size: f32,
    on_press: Message,
) -> Element<'a, Message> {
    let PulseFrame { opacity, scale } = frame;

    let title = text(label)
        .size(text_size * scale)
        .font(iced::Font {
            weight: iced::font::Weight::Medium,
            ..Default::default()
        })
        .color(theme::with_opacity(Color::WHITE, opacity));

    let body = button(container(title).center_x(Length::Fill).center_y(Length::Fill))
        .width(Length::Fill)
        .height(height * scale)
        .padding(0)
        .style(move |_theme, _status| {
            let fill = theme::mix(theme::SEND_BUTTON, theme::SEND_BUTTON_HOVER, hover);
            button::Style {
                background: Some(Background::Color(theme::with_opacity(fill, opacity))),
                text_color: theme::with_opacity(Color::WHITE, opacity),
                border: Border {
                    radius: (CORNER_RADIUS * scale).into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .on_press(on_press);

    let (side, body_portion) = fill_portions(scale);
    let scaled: Element<'a, Message> = if side == 0 {
        body.into()
    } else {
        row![
            Space::new().width(Length::FillPortion(side)),
            container(body).width(Length::FillPortion(body_portion)),
            Space::new().width(Length::FillPortion(side)),
        ]
        .into()
    };

    container(scaled)
        .width(Length::Fill)
        .height(height)
        .center_y(height)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_scale_has_no_side_space() {
        assert_eq!(fill_portions(1.0), (0, 1000));
    }

    #[test]
    fn portions_preserve_scale() {
        let (side, body) = fill_portions(0.95);
        assert_eq!((side, body), (25, 950));

        let ratio = body as f32 / (body + 2 * side) as f32;
        assert!((ratio - 0.95).abs() < 1e-3);
    }

    #[test]
    fn out_of_range_scale_is_clamped() {
        assert_eq!(fill_portions(1.5), (0, 1000));
        assert_eq!(fill_portions(-1.0), (500, 1));
    }
}
