// SPDX-License-Identifier: MPL-2.0
//! Full-size preview overlay.
//!
//! The overlay is a dimmed backdrop plus a centered card. A click on the
//! backdrop or the close button emits [`Message::ClosePreview`]; the card
//! itself swallows clicks so pressing the image keeps the overlay open.

use super::{Message, PreviewImage};
use crate::i18n::fluent::I18n;
use crate::search::PreviewSelection;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, image, mouse_area, opaque, stack, Column, Container, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length};

pub fn view<'a>(
    selection: &'a PreviewSelection,
    image_state: Option<&'a PreviewImage>,
    spinner_rotation: f32,
    colors: &ColorScheme,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let backdrop = opaque(
        mouse_area(
            Container::new(Space::new().width(Length::Fill).height(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::backdrop(colors.overlay_background)),
        )
        .on_press(Message::ClosePreview),
    );

    let picture: Element<'a, Message> = match image_state {
        Some(PreviewImage::Ready(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        Some(PreviewImage::Failed) => centered(
            Text::new(i18n.tr("preview-load-error"))
                .size(typography::BODY)
                .color(colors.error)
                .into(),
        ),
        Some(PreviewImage::Loading) | None => centered(
            AnimatedSpinner::new(colors.brand_primary, spinner_rotation)
                .size(sizing::ICON_XXL)
                .into_element(),
        ),
    };

    let close = button(Text::new(i18n.tr("preview-close")).size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::SM])
        .on_press(Message::ClosePreview)
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ));

    let header = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(close);

    let caption = Text::new(selection.alt.as_str())
        .size(typography::BODY)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let card = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header)
        .push(picture)
        .push(caption);

    let card = Container::new(card)
        .max_width(sizing::PREVIEW_MAX_WIDTH)
        .max_height(sizing::PREVIEW_MAX_HEIGHT)
        .style(styles::container::preview_card);

    let foreground = Container::new(opaque(card))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    stack![backdrop, foreground].into()
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
