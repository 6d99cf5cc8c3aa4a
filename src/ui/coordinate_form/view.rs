// SPDX-License-Identifier: MPL-2.0
//! View rendering for the coordinate form.

use super::{Message, RawInput, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, text, text_input, Column, Row};
use iced::{alignment::Vertical, Element, Length};

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Render the form for the current state.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let is_valid = state.is_valid();

    let inputs: Element<'a, Message> = match state.input() {
        RawInput::Combined(value) => build_combined_input(ctx.i18n, value, is_valid),
        RawInput::Split {
            latitude,
            longitude,
        } => build_split_inputs(ctx.i18n, latitude, longitude, is_valid),
    };

    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Bottom)
        .width(Length::Fill)
        .push(iced::widget::container(inputs).width(Length::Fill))
        .push(build_confirm_button(ctx.i18n, is_valid))
        .into()
}

fn build_combined_input<'a>(i18n: &I18n, value: &str, is_valid: bool) -> Element<'a, Message> {
    let mut col = Column::new().spacing(spacing::XXS);

    col = col.push(text(i18n.tr("coordinate-form-combined-label")).size(typography::BODY_SM));

    let input = text_input(&i18n.tr("coordinate-form-combined-placeholder"), value)
        .on_input(Message::CoordinatesChanged)
        .on_submit_maybe(is_valid.then_some(Message::Confirm))
        .padding(spacing::XS)
        .size(typography::BODY);
    col = col.push(input);

    col = col.push(
        text(i18n.tr("coordinate-form-combined-hint"))
            .size(typography::CAPTION)
            .color(palette::GRAY_400),
    );

    col.into()
}

fn build_split_inputs<'a>(
    i18n: &I18n,
    latitude: &str,
    longitude: &str,
    is_valid: bool,
) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .push(build_labeled_input(
            i18n.tr("coordinate-form-latitude-label"),
            latitude,
            "48.8566",
            Message::LatitudeChanged,
            is_valid,
        ))
        .push(build_labeled_input(
            i18n.tr("coordinate-form-longitude-label"),
            longitude,
            "2.3522",
            Message::LongitudeChanged,
            is_valid,
        ))
        .into()
}

fn build_labeled_input<'a>(
    label: String,
    value: &str,
    placeholder: &str,
    on_input: fn(String) -> Message,
    is_valid: bool,
) -> Element<'a, Message> {
    let input = text_input(placeholder, value)
        .on_input(on_input)
        .on_submit_maybe(is_valid.then_some(Message::Confirm))
        .padding(spacing::XS)
        .size(typography::BODY);

    Column::new()
        .spacing(spacing::XXS)
        .width(Length::FillPortion(1))
        .push(text(label).size(typography::BODY_SM))
        .push(input)
        .into()
}

fn build_confirm_button<'a>(i18n: &I18n, is_valid: bool) -> Element<'a, Message> {
    let confirm_btn = button(text(i18n.tr("coordinate-form-confirm-button")).size(typography::BODY))
        .padding(spacing::XS);

    if is_valid {
        confirm_btn
            .on_press(Message::Confirm)
            .style(button_styles::primary)
            .into()
    } else {
        confirm_btn.style(button_styles::disabled()).into()
    }
}
