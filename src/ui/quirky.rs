// SPDX-License-Identifier: MPL-2.0
//! The bottom of the card: fun facts, the celebrate button, and the footer.

use crate::card;
use crate::content;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(tap_count: u32, i18n: &'a I18n) -> Element<'a, card::Message> {
    let heading = Text::new(i18n.tr("section-facts-title"))
        .size(typography::TITLE_MD)
        .color(palette::PRIMARY_700);

    let celebrate = button(
        Text::new(i18n.tr("confetti-button")).size(typography::BODY),
    )
    .padding([spacing::SM, spacing::LG])
    .style(styles::button::primary)
    .on_press(card::Message::CelebrationRequested);

    Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(facts_grid())
        .push(celebrate)
        .push(footer(tap_count, i18n))
        .into()
}

/// Two columns of fact cards.
fn facts_grid<'a>() -> Element<'a, card::Message> {
    let mut grid = Column::new().spacing(spacing::SM);
    for pair in content::FUN_FACTS.chunks(2) {
        let mut row = Row::new().spacing(spacing::SM);
        for (emoji, text) in pair {
            row = row.push(fact_card(emoji, text));
        }
        grid = grid.push(row);
    }
    grid.into()
}

fn fact_card<'a>(emoji: &'a str, text: &'a str) -> Element<'a, card::Message> {
    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(emoji).size(sizing::ICON_MD))
        .push(Text::new(text).size(typography::BODY));

    Container::new(content)
        .width(Length::Fixed(260.0))
        .padding(spacing::SM)
        .style(styles::container::panel)
        .into()
}

fn footer<'a>(tap_count: u32, i18n: &'a I18n) -> Element<'a, card::Message> {
    let mut column = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(format!(
                "{} {}",
                i18n.tr("signature-with-love"),
                content::SIGNATURE
            ))
            .size(typography::BODY)
            .color(palette::PRIMARY_600),
        )
        .push(
            Text::new(i18n.tr("footer-made-with"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .push(
            Text::new(i18n.tr("footer-year"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    if tap_count > 0 {
        column = column.push(
            Text::new(format!("{tap_count}"))
                .size(typography::CAPTION)
                .color(palette::GRAY_200),
        );
    }

    column.into()
}
