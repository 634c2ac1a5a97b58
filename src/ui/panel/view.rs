// SPDX-License-Identifier: MPL-2.0
//! View rendering for the translation panel.

use super::{Message, State};
use crate::i18n::I18n;
use crate::language::LANGUAGES;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{Button, Column, Container, PickList, Row, Text, TextInput};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

/// Context required to render the translation panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let state = ctx.state;

    let source_picker = PickList::new(
        &LANGUAGES[..],
        Some(state.source_language),
        Message::SourceLanguageSelected,
    )
    .width(Length::Fixed(sizing::LANGUAGE_PICKER_WIDTH))
    .text_size(typography::BODY);

    let swap_button = Button::new(
        Text::new("⇄")
            .size(typography::BODY_LG)
            .align_x(Horizontal::Center),
    )
    .style(styles::button::primary)
    .width(Length::Fixed(sizing::BUTTON_HEIGHT))
    .on_press(Message::SwapLanguages);

    let target_picker = PickList::new(
        &LANGUAGES[..],
        Some(state.target_language),
        Message::TargetLanguageSelected,
    )
    .width(Length::Fixed(sizing::LANGUAGE_PICKER_WIDTH))
    .text_size(typography::BODY);

    let language_row = Row::new()
        .push(source_picker)
        .push(swap_button)
        .push(target_picker)
        .spacing(spacing::SM)
        .align_y(Vertical::Center);

    let source_input = TextInput::new(
        &ctx.i18n.tr("source-text-placeholder"),
        &state.source_text,
    )
    .on_input(Message::SourceTextChanged)
    .size(typography::BODY_LG)
    .padding(spacing::SM);

    let panel = Column::new()
        .push(language_row)
        .push(source_input)
        .push(result_pane(ctx))
        .spacing(spacing::MD)
        .max_width(sizing::PANEL_MAX_WIDTH);

    Container::new(panel)
        .style(styles::container::panel)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

/// Result area: spinner while loading, the error string after a failure,
/// otherwise the translated text.
fn result_pane(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let state = ctx.state;

    if state.is_loading {
        let spinner =
            AnimatedSpinner::new(palette::PRIMARY_500, state.spinner_rotation()).into_element();
        return Container::new(spinner)
            .style(styles::container::result_pane)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::INPUT_HEIGHT))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into();
    }

    if state.last_error.is_some() {
        return Container::new(
            Text::new(ctx.i18n.tr("error-translation-failed")).size(typography::BODY_LG),
        )
        .style(styles::container::error_pane)
        .padding(spacing::SM)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::INPUT_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into();
    }

    Container::new(
        Text::new(state.translated_text.as_str())
            .size(typography::BODY_LG)
            .width(Length::Fill),
    )
    .style(styles::container::result_pane)
    .padding(spacing::SM)
    .width(Length::Fill)
    .height(Length::Fixed(sizing::INPUT_HEIGHT))
    .into()
}
