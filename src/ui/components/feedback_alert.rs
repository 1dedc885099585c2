//! Feedback confirmation alert component

use iced::mouse::Interaction;
use iced::widget::{Space, button, column, container, mouse_area, opaque, row, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme;

/// Width of the alert card
const ALERT_WIDTH: f32 = 300.0;

/// Build the feedback alert
///
/// A single "Close" action dismisses it. The backdrop swallows every
/// press so the screen underneath cannot be used while it is shown.
pub fn view(animation_progress: f32, locale: Locale) -> Element<'static, Message> {
    if animation_progress < 0.01 {
        return Space::new().height(0).into();
    }

    let opacity = animation_progress;

    let title = text(locale.get(Key::AlertTitle))
        .size(18)
        .width(Fill)
        .center()
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .style(move |iced_theme| text::Style {
            color: Some(theme::with_opacity(theme::text_primary(iced_theme), opacity)),
        });

    let message = text(locale.get(Key::AlertMessage))
        .size(14)
        .width(Fill)
        .center()
        .style(move |iced_theme| text::Style {
            color: Some(theme::with_opacity(theme::text_secondary(iced_theme), opacity)),
        });

    let divider = container(Space::new().width(Fill).height(1)).style(move |iced_theme| {
        iced::widget::container::Style {
            background: Some(iced::Background::Color(theme::with_opacity(
                theme::divider(iced_theme),
                opacity,
            ))),
            ..Default::default()
        }
    });

    let close_btn = button(
        text(locale.get(Key::AlertClose))
            .size(16)
            .width(Fill)
            .center()
            .font(iced::Font {
                weight: iced::font::Weight::Semibold,
                ..Default::default()
            }),
    )
    .width(Fill)
    .padding([10, 16])
    .style(theme::alert_action_button)
    .on_press(Message::CloseAlert);

    let dialog_content = column![
        title,
        Space::new().height(8),
        message,
        Space::new().height(20),
        divider,
        Space::new().height(6),
        row![close_btn].align_y(Alignment::Center),
    ]
    .width(ALERT_WIDTH)
    .padding([20, 16]);

    let dialog_box = container(dialog_content).style(move |iced_theme| theme::alert_card(iced_theme, opacity));

    // Backdrop with event interception
    let backdrop_content = container(dialog_box)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(move |_theme| theme::alert_backdrop(opacity));

    // Backdrop presses are swallowed; only the Close action dismisses
    let event_blocker = mouse_area(backdrop_content)
        .interaction(Interaction::Idle)
        .on_press(Message::Noop);

    // opaque to block all mouse button events from propagating
    opaque(event_blocker).into()
}
