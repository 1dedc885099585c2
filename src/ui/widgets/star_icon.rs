//! Star icon widget

use std::sync::LazyLock;

use iced::widget::svg;
use iced::{ContentFit, Element, Length};

use crate::ui::{icons, theme};

// Cached SVG handles
static STAR_FILLED_HANDLE: LazyLock<svg::Handle> =
    LazyLock::new(|| svg::Handle::from_memory(icons::STAR_FILLED.as_bytes()));
static STAR_OUTLINE_HANDLE: LazyLock<svg::Handle> =
    LazyLock::new(|| svg::Handle::from_memory(icons::STAR_OUTLINE.as_bytes()));

/// A single star filling its cell, filled when `highlighted`
pub fn star_icon<'a, Message: 'a>(highlighted: bool) -> Element<'a, Message> {
    let handle = if highlighted {
        STAR_FILLED_HANDLE.clone()
    } else {
        STAR_OUTLINE_HANDLE.clone()
    };

    svg(handle)
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Contain)
        .style(move |iced_theme, _status| svg::Style {
            color: Some(if highlighted {
                theme::STAR_FILLED
            } else {
                theme::star_empty(iced_theme)
            }),
        })
        .into()
}
