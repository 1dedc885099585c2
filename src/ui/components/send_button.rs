//! Send button component

use iced::widget::mouse_area;
use iced::{Element, mouse};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::animation::PulseFrame;
use crate::ui::widgets::pulse_button;

/// Height of the Send button slot
pub const SEND_BUTTON_HEIGHT: f32 = 50.0;

/// Title size at full scale
const SEND_TEXT_SIZE: f32 = 20.0;

/// Build the pulsing Send button
pub fn view(frame: PulseFrame, hover_progress: f32, locale: Locale) -> Element<'static, Message> {
    let button = pulse_button(
        locale.get(Key::SendButton),
        frame,
        hover_progress,
        SEND_BUTTON_HEIGHT,
        SEND_TEXT_SIZE,
        Message::Submit,
    );

    mouse_area(button)
        .interaction(mouse::Interaction::Pointer)
        .on_enter(Message::SendHovered(true))
        .on_exit(Message::SendHovered(false))
        .into()
}
