// SPDX-License-Identifier: MPL-2.0
//! Result grid and its tiles.

use super::thumbnails::{Thumbnail, ThumbnailCache};
use super::Message;
use crate::domain::search::ImageResult;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, Column, Container, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length, Theme};

/// Renders `results` as rows of `columns` tiles, in result order.
pub fn view<'a>(
    results: &'a [ImageResult],
    thumbnails: &'a ThumbnailCache,
    columns: usize,
) -> Element<'a, Message> {
    let columns = columns.max(1);
    let rows = results.chunks(columns).map(|chunk| {
        let mut row = Row::new().spacing(spacing::SM).width(Length::Fill);
        for item in chunk {
            row = row.push(tile(item, thumbnails.peek(item.id)));
        }
        // Pad the last row so tiles keep the same width.
        for _ in chunk.len()..columns {
            row = row.push(Space::new().width(Length::FillPortion(1)));
        }
        Element::from(row)
    });

    Column::with_children(rows)
        .spacing(spacing::SM)
        .width(Length::Fill)
        .into()
}

/// Placeholder shown before the first search.
pub fn empty_state<'a>(i18n: &I18n) -> Element<'a, Message> {
    Container::new(
        Text::new(i18n.tr("gallery-empty"))
            .size(typography::BODY_LG)
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(theme.extended_palette().background.strong.text),
            }),
    )
    .width(Length::Fill)
    .padding(spacing::XXL)
    .align_x(alignment::Horizontal::Center)
    .into()
}

fn tile<'a>(item: &'a ImageResult, thumbnail: Option<&'a Thumbnail>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match thumbnail {
        Some(Thumbnail::Ready(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(Thumbnail::Failed) => placeholder("\u{2715}"),
        Some(Thumbnail::Loading) | None => placeholder(""),
    };

    let press = button(content)
        .padding(0)
        .width(Length::Fill)
        .on_press(Message::OpenPreview {
            full_url: item.full_url.clone(),
            alt: item.alt.clone(),
        })
        .style(styles::button::tile);

    styles::tooltip::alt_text(press, item.alt.as_str())
}

fn placeholder<'a>(label: &'a str) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::TITLE_SM))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::tile_placeholder)
        .into()
}
