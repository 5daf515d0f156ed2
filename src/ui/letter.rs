// SPDX-License-Identifier: MPL-2.0
//! The letter section: a sealed envelope until tapped, then the letter body.
//! The reveal is one-way; repeat taps only re-trigger the celebration.

use crate::card;
use crate::content;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(revealed: bool, i18n: &'a I18n) -> Element<'a, card::Message> {
    let heading = Text::new(i18n.tr("section-letter-title"))
        .size(typography::TITLE_MD)
        .color(palette::PRIMARY_700);

    let body = if revealed {
        revealed_view(i18n)
    } else {
        sealed_view(i18n)
    };

    Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(body)
        .into()
}

fn sealed_view<'a>(i18n: &I18n) -> Element<'a, card::Message> {
    let face = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("\u{2709}").size(sizing::ICON_XL))
        .push(Text::new(i18n.tr("letter-sealed-hint")).size(typography::BODY));

    button(
        Container::new(face)
            .width(Length::Fixed(sizing::ENVELOPE_WIDTH))
            .height(Length::Fixed(sizing::ENVELOPE_HEIGHT))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::cover),
    )
    .padding(0)
    .style(styles::button::bare)
    .on_press(card::Message::LetterRevealTapped)
    .into()
}

fn revealed_view<'a>(i18n: &I18n) -> Element<'a, card::Message> {
    let column = Column::new()
        .spacing(spacing::SM)
        .push(
            Text::new(i18n.tr("letter-opening"))
                .size(typography::BODY_LG)
                .color(palette::GRAY_900),
        )
        .push(
            Text::new(content::LETTER_BODY)
                .size(typography::BODY_LG)
                .color(palette::GRAY_900),
        )
        .push(
            Text::new(format!("{} {}", i18n.tr("letter-closing"), content::SIGNATURE))
                .size(typography::BODY_LG)
                .color(palette::PRIMARY_600),
        );

    // Tapping the open letter celebrates again.
    button(
        Container::new(column)
            .width(Length::Fixed(sizing::ENVELOPE_WIDTH + spacing::XXL))
            .padding(spacing::LG)
            .style(styles::container::paper),
    )
    .padding(0)
    .style(styles::button::bare)
    .on_press(card::Message::LetterRevealTapped)
    .into()
}
