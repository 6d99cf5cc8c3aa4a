// SPDX-License-Identifier: MPL-2.0
//! Preview host layout: a field card holding the mounted form and the
//! value currently stored in the document.

use super::Message;
use crate::application::extension::MountedForm;
use crate::application::port::Field;
use crate::i18n::fluent::I18n;
use crate::infrastructure::preview_host::Document;
use crate::ui::design_tokens::{palette, radius, shadow, spacing, typography};
use iced::widget::{container, text, Column, Row};
use iced::{Background, Border, Element, Length, Theme};

/// Contextual data needed to render the preview.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub field: &'a Field,
    pub document: &'a Document,
    pub extension: Option<&'a MountedForm>,
    pub config_warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new().spacing(spacing::MD).width(Length::Fill);

    if let Some(key) = ctx.config_warning {
        content = content.push(
            text(ctx.i18n.tr(key))
                .size(typography::BODY_SM)
                .color(palette::WARNING_500),
        );
    }

    content = content.push(build_field_card(&ctx));
    content = content.push(build_stored_value(&ctx));

    container(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn build_field_card<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let header = Row::new()
        .spacing(spacing::XS)
        .align_y(iced::alignment::Vertical::Center)
        .push(text(ctx.i18n.tr("preview-field-title")).size(typography::TITLE_MD))
        .push(
            text(format!(
                "{} ({})",
                ctx.i18n.tr("preview-field-type"),
                ctx.field.api_key
            ))
            .size(typography::CAPTION)
            .color(palette::GRAY_400),
        );

    let mut card = Column::new().spacing(spacing::SM).push(header);

    match ctx.extension {
        Some(extension) => {
            card = card.push(extension.view(ctx.i18n).map(Message::Extension));
        }
        None => {
            card = card.push(
                text(ctx.i18n.tr("preview-no-extension"))
                    .size(typography::BODY)
                    .color(palette::GRAY_700),
            );
        }
    }

    container(card)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(card_style)
        .into()
}

fn build_stored_value<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut col = Column::new()
        .spacing(spacing::XXS)
        .push(text(ctx.i18n.tr("preview-stored-value")).size(typography::BODY_LG));

    match ctx.document.get(&ctx.field.api_key) {
        Some(coordinate) => {
            col = col
                .push(
                    text(coordinate.format())
                        .size(typography::BODY)
                        .color(palette::SUCCESS_500),
                )
                .push(
                    text(format!(
                        "{}: {}",
                        ctx.i18n.tr("preview-map-link"),
                        coordinate.map_url()
                    ))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
                );
        }
        None => {
            col = col.push(
                text(ctx.i18n.tr("preview-value-not-set"))
                    .size(typography::BODY)
                    .color(palette::GRAY_700),
            );
        }
    }

    col.into()
}

fn card_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}
