// SPDX-License-Identifier: MPL-2.0
//! Search input and submit button.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Renders the search bar. Submission is disabled while a search is pending.
pub fn view<'a>(input: &'a str, is_pending: bool, i18n: &'a I18n) -> Element<'a, Message> {
    let mut field = text_input(&i18n.tr("search-placeholder"), input)
        .on_input(Message::QueryChanged)
        .size(typography::BODY_LG)
        .padding(spacing::XS)
        .width(Length::Fill);

    let mut submit = button(
        Text::new(i18n.tr("search-button"))
            .size(typography::BODY)
            .align_y(alignment::Vertical::Center),
    )
    .height(Length::Fixed(sizing::INPUT_HEIGHT))
    .padding([spacing::XS, spacing::MD]);

    if is_pending {
        submit = submit.style(styles::button::inactive);
    } else {
        field = field.on_submit(Message::SubmitQuery);
        submit = submit
            .on_press(Message::SubmitQuery)
            .style(styles::button::primary);
    }

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(field)
        .push(submit);

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::search_panel)
        .into()
}
