// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery fills the window; toasts float above it.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::notifications::{self, toast};
use crate::ui::theming::ColorScheme;
use iced::widget::{stack, Container};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub gallery: &'a gallery::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the gallery with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let gallery_view = ctx.gallery.view(ctx.i18n, ctx.colors).map(Message::Gallery);

    let content = Container::new(gallery_view)
        .width(Length::Fill)
        .height(Length::Fill);

    if ctx.notifications.has_notifications() {
        let toasts = toast::overlay(ctx.notifications, ctx.i18n).map(Message::Notification);
        stack![content, toasts].into()
    } else {
        content.into()
    }
}
