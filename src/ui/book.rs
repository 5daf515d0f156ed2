// SPDX-License-Identifier: MPL-2.0
//! Poem book section: closed cover, or the open book with one line per page.

use crate::card::book::{self, Book};
use crate::content;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(book: &'a Book, i18n: &'a I18n) -> Element<'a, book::Message> {
    let heading = Text::new(i18n.tr("section-poem-title"))
        .size(typography::TITLE_MD)
        .color(palette::PRIMARY_700);

    let body = if book.is_open() {
        open_view(book, i18n)
    } else {
        cover_view(i18n)
    };

    Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(body)
        .into()
}

fn cover_view<'a>(i18n: &I18n) -> Element<'a, book::Message> {
    let face = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr("book-cover-title")).size(typography::TITLE_MD))
        .push(Text::new(i18n.tr("book-cover-hint")).size(typography::BODY));

    button(
        Container::new(face)
            .width(Length::Fixed(sizing::BOOK_WIDTH))
            .height(Length::Fixed(sizing::BOOK_HEIGHT))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::cover),
    )
    .padding(0)
    .style(styles::button::bare)
    .on_press(book::Message::OpenRequested)
    .into()
}

fn open_view<'a>(book: &'a Book, i18n: &'a I18n) -> Element<'a, book::Message> {
    let page_text: Element<'a, book::Message> = if book.page() == 0 {
        Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(i18n.tr("book-cover-title")).size(typography::TITLE_MD))
            .push(
                Text::new(i18n.tr("book-cover-hint"))
                    .size(typography::BODY)
                    .color(palette::GRAY_400),
            )
            .into()
    } else {
        Text::new(content::POEM_LINES[book.page() - 1])
            .size(typography::BODY_LG)
            .color(palette::GRAY_900)
            .align_x(alignment::Horizontal::Center)
            .into()
    };

    let page = Container::new(page_text)
        .width(Length::Fixed(sizing::BOOK_WIDTH))
        .height(Length::Fixed(sizing::BOOK_HEIGHT))
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::paper);

    let indicator = Text::new(format!("{} / {}", book.page(), book.page_count()))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(page)
        .push(indicator)
        .push(controls(book, i18n))
        .into()
}

fn controls<'a>(book: &'a Book, i18n: &'a I18n) -> Element<'a, book::Message> {
    let mut prev = button(Text::new(i18n.tr("book-prev")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);
    // Turns are latched; the controls go inert while one is in flight.
    if !book.is_turning() && book.page() > 0 {
        prev = prev.on_press(book::Message::PrevRequested);
    }

    let forward: Element<'a, book::Message> = if book.at_last_page() {
        button(Text::new(i18n.tr("book-close")).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary)
            .on_press(book::Message::CloseRequested)
            .into()
    } else {
        let mut next = button(Text::new(i18n.tr("book-next")).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary);
        if !book.is_turning() {
            next = next.on_press(book::Message::NextRequested);
        }
        next.into()
    };

    Row::new()
        .spacing(spacing::MD)
        .push(prev)
        .push(Space::new().width(Length::Fixed(spacing::XL)).height(Length::Shrink))
        .push(forward)
        .into()
}
