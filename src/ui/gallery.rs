// SPDX-License-Identifier: MPL-2.0
//! Photo carousel section: framed photo, prev/next arrows, indicator dots,
//! caption and counter.

use crate::card::carousel::Carousel;
use crate::card::{carousel, Direction};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Color, Element, Length};

/// Most dots shown under the photo; larger albums reuse them cyclically.
const MAX_DOTS: usize = 10;

pub fn view<'a>(carousel: &'a Carousel, i18n: &'a I18n) -> Element<'a, carousel::Message> {
    let heading = Text::new(i18n.tr("section-photos-title"))
        .size(typography::TITLE_MD)
        .color(palette::PRIMARY_700);

    let album = carousel.album();
    let body: Element<'a, carousel::Message> = match album.current() {
        None => placeholder(i18n),
        Some(path) => {
            let photo = Container::new(
                image(path.to_path_buf())
                    .width(Length::Fixed(sizing::PHOTO_WIDTH))
                    .height(Length::Fixed(sizing::PHOTO_HEIGHT)),
            )
            .padding(spacing::XS)
            .style(styles::container::photo_frame);

            // Arrows sit on top of the photo frame.
            let arrows = Row::new()
                .width(Length::Fixed(sizing::PHOTO_WIDTH))
                .height(Length::Fixed(sizing::PHOTO_HEIGHT))
                .align_y(alignment::Vertical::Center)
                .push(arrow("<", Direction::Backward))
                .push(Space::new().width(Length::Fill).height(Length::Shrink))
                .push(arrow(">", Direction::Forward));

            let mut framed = Stack::new().push(photo);
            if carousel.transition().is_some() {
                // Dim the photo while a swap is in flight.
                framed = framed.push(
                    Container::new(Space::new().width(Length::Fill).height(Length::Fill))
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .style(|_theme| iced::widget::container::Style {
                            background: Some(iced::Background::Color(Color {
                                a: opacity::OVERLAY_SUBTLE,
                                ..palette::WHITE
                            })),
                            ..Default::default()
                        }),
                );
            }
            let framed = framed.push(arrows);

            let caption = Text::new(caption_text(album.current_index(), i18n))
                .size(typography::BODY)
                .color(palette::GRAY_700);

            let counter = Text::new(format!(
                "{} / {}",
                album.current_index() + 1,
                album.len()
            ))
            .size(typography::CAPTION)
            .color(palette::GRAY_400);

            Column::new()
                .spacing(spacing::SM)
                .align_x(alignment::Horizontal::Center)
                .push(framed)
                .push(dots(album.current_index(), album.len()))
                .push(caption)
                .push(counter)
                .into()
        }
    };

    Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(body)
        .into()
}

fn placeholder<'a>(i18n: &I18n) -> Element<'a, carousel::Message> {
    Container::new(
        Text::new(i18n.tr("gallery-loading"))
            .size(typography::BODY)
            .color(palette::GRAY_400),
    )
    .width(Length::Fixed(sizing::PHOTO_WIDTH))
    .height(Length::Fixed(sizing::PHOTO_HEIGHT))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(styles::container::photo_frame)
    .into()
}

fn arrow<'a>(glyph: &'a str, direction: Direction) -> Element<'a, carousel::Message> {
    button(
        Text::new(glyph)
            .size(typography::TITLE_MD)
            .align_x(alignment::Horizontal::Center),
    )
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_HOVER,
    ))
    .on_press(carousel::Message::ManualAdvance(direction))
    .into()
}

/// One dot per photo up to [`MAX_DOTS`]; the active dot cycles for larger
/// albums so the row never overflows.
fn dots<'a>(current_index: usize, len: usize) -> Element<'a, carousel::Message> {
    let shown = len.min(MAX_DOTS);
    let active = current_index % MAX_DOTS;

    let mut row = Row::new().spacing(spacing::XS);
    for i in 0..shown {
        let is_active = i == active;
        let size = if is_active {
            sizing::DOT_ACTIVE
        } else {
            sizing::DOT
        };
        row = row.push(
            button(
                Space::new()
                    .width(Length::Fixed(size))
                    .height(Length::Fixed(size)),
            )
                .padding(0)
                .style(styles::button::dot(is_active))
                .on_press(carousel::Message::SelectIndex(i)),
        );
    }
    row.into()
}

fn caption_text(current_index: usize, i18n: &I18n) -> String {
    format!("{}{}", i18n.tr("gallery-caption-prefix"), current_index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_numbers_photos_from_one() {
        let i18n = I18n::new(Some("en-US".into()), None, &crate::config::Config::default());
        assert!(caption_text(0, &i18n).ends_with('1'));
        assert!(caption_text(4, &i18n).ends_with('5'));
    }

    #[test]
    fn dot_count_is_capped() {
        assert_eq!(25usize.min(MAX_DOTS), 10);
        assert_eq!(3usize.min(MAX_DOTS), 3);
    }
}
