// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! Renders the header shown above every screen: the localized application
//! title on the left and a single navigation button on the right (Settings
//! from the translator screen, Back from the settings screen).

use crate::app::Screen;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{Button, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    OpenSettings,
    Back,
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("window-title"))
        .size(typography::TITLE_MD)
        .width(Length::Fill);

    let navigation = match ctx.screen {
        Screen::Translator => Button::new(Text::new(ctx.i18n.tr("settings-button")))
            .style(styles::button::unselected)
            .on_press(Message::OpenSettings),
        Screen::Settings => Button::new(Text::new(ctx.i18n.tr("back-button")))
            .style(styles::button::unselected)
            .on_press(Message::Back),
    };

    let bar = Row::new()
        .push(title)
        .push(navigation)
        .align_y(Vertical::Center)
        .spacing(spacing::MD);

    Container::new(bar)
        .padding([spacing::XS, spacing::MD])
        .width(Length::Fill)
        .into()
}
