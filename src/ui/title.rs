// SPDX-License-Identifier: MPL-2.0
//! Title banner with the click easter egg.

use crate::card;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element};

/// Extra size applied to the title while it wiggles.
const WIGGLE_GROWTH: f32 = 4.0;

pub fn view<'a>(
    wiggling: bool,
    easter_egg_visible: bool,
    i18n: &'a I18n,
) -> Element<'a, card::Message> {
    let size = if wiggling {
        typography::TITLE_LG + WIGGLE_GROWTH
    } else {
        typography::TITLE_LG
    };
    let color = if wiggling {
        palette::GOLD
    } else {
        palette::PRIMARY_600
    };

    let banner = button(
        Text::new(i18n.tr("title-banner"))
            .size(size)
            .color(color)
            .align_x(alignment::Horizontal::Center),
    )
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::bare)
    .on_press(card::Message::TitleClicked);

    let mut column = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(banner);

    if easter_egg_visible {
        column = column.push(
            Container::new(
                Text::new(i18n.tr("easter-egg-message")).size(typography::BODY),
            )
            .padding([spacing::XS, spacing::MD])
            .style(styles::container::badge),
        );
    }

    column.into()
}
