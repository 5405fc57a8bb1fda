// SPDX-License-Identifier: MPL-2.0
//! Alt-text tooltips on grid tiles.

use crate::ui::design_tokens::{border, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Element, Theme};

/// Inverted surface so the caption stands out over any thumbnail.
pub fn caption(theme: &Theme) -> container::Style {
    let strong = theme.extended_palette().background.strong;

    container::Style {
        background: Some(Background::Color(strong.color)),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: theme.extended_palette().background.weak.color,
        },
        shadow: shadow::SM,
        text_color: Some(strong.text),
        ..Default::default()
    }
}

/// Wraps a tile so hovering shows the image's tags below it.
///
/// Images without tags get no tooltip at all.
pub fn alt_text<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    alt: &'a str,
) -> Element<'a, Message> {
    let content = content.into();
    if alt.trim().is_empty() {
        return content;
    }

    let label = Container::new(Text::new(alt).size(typography::BODY_SM))
        .padding(spacing::XS)
        .style(caption);

    tooltip(content, label, tooltip::Position::Bottom)
        .gap(spacing::XXS)
        .into()
}
