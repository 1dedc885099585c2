//! Application view rendering

use iced::time::Instant;
use iced::widget::{Space, column, container, stack, text};
use iced::{Element, Fill};

use super::App;
use super::message::Message;
use crate::i18n::Key;
use crate::ui::{components, theme};

/// Horizontal inset of the content column on each side
const CONTAINER_HORIZONTAL_INSET: f32 = 30.0;

/// Vertical spacing between title, stars and button
const CONTAINER_SPACING: f32 = 70.0;

/// Title text size
const TITLE_SIZE: f32 = 35.0;

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let now = Instant::now();
        let locale = self.core.locale;

        let title = text(locale.get(Key::RateTitle))
            .size(TITLE_SIZE)
            .width(Fill)
            .center()
            .font(iced::Font {
                weight: iced::font::Weight::Semibold,
                ..Default::default()
            })
            .style(|iced_theme| text::Style {
                color: Some(theme::title(iced_theme)),
            });

        let stars = components::star_bar::view(self.ui.rating.stars());

        let send_button = components::send_button::view(
            self.ui.pulse_frame(now),
            self.ui.send_hover.progress(),
            locale,
        );

        let content = column![title, stars, send_button]
            .spacing(CONTAINER_SPACING)
            .width(Fill);

        let screen = container(content)
            .width(Fill)
            .height(Fill)
            .padding([0.0, CONTAINER_HORIZONTAL_INSET])
            .center_y(Fill)
            .style(theme::screen);

        // Alert overlay (empty space if not visible)
        let alert_overlay: Element<'_, Message> = if self.ui.alert.is_visible() {
            components::feedback_alert::view(self.ui.alert.animation.progress(), locale)
        } else {
            Space::new().width(0).height(0).into()
        };

        // Always use consistent stack structure
        stack![screen, alert_overlay]
            .width(Fill)
            .height(Fill)
            .into()
    }
}
