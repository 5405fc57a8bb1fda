// SPDX-License-Identifier: MPL-2.0
//! Toast cards, stacked in the bottom-right corner of the window.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Glyph on the dismiss button.
const DISMISS_GLYPH: &str = "\u{2715}";

/// The visible toasts, newest at the bottom.
pub fn overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
    let toasts = Column::with_children(manager.visible().map(|n| card(n, i18n)))
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    Container::new(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

fn card<'a>(notification: &'a Notification, i18n: &I18n) -> Element<'a, Message> {
    let severity = notification.severity();

    let glyph = Text::new(severity.glyph())
        .size(typography::TITLE_SM)
        .color(severity.color());

    let body = Text::new(notification.text(i18n))
        .size(typography::BODY)
        .width(Length::Fill);

    let dismiss = button(Text::new(DISMISS_GLYPH).size(typography::BODY))
        .padding(spacing::XXS)
        .on_press(Message::Dismiss(notification.id()))
        .style(button::text);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(glyph)
        .push(body)
        .push(dismiss);

    Container::new(row)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::toast(severity.color()))
        .into()
}
