//! Star rating row component

use iced::widget::Row;
use iced::{Element, Length};

use crate::app::Message;
use crate::features::StarIcon;
use crate::ui::primitives::tap_area;
use crate::ui::widgets::star_icon;

/// Height of the star row
pub const STAR_ROW_HEIGHT: f32 = 40.0;

/// Build the star row
///
/// Stars share the width equally. Presses anywhere in the row are
/// reported with their offset so the rating is derived from position,
/// not from which icon was hit.
pub fn view(stars: &[StarIcon]) -> Element<'static, Message> {
    let icons = stars.iter().map(|star| -> Element<'static, Message> {
        iced::widget::container(star_icon(star.highlighted))
            .width(Length::FillPortion(1))
            .height(Length::Fill)
            .into()
    });

    let row = Row::with_children(icons)
        .width(Length::Fill)
        .height(STAR_ROW_HEIGHT);

    tap_area(row, |x, width| Message::StarRowPressed { x, width }).into()
}
