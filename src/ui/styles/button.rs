// SPDX-License-Identifier: MPL-2.0
//! Button styles: search and load-more, preview close, grid tiles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn filled(fill: Color, outline: Color, text_color: Color) -> button::Style {
    button::Style {
        background: Some(Background::Color(fill)),
        text_color,
        border: Border {
            color: outline,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Search and load-more: brand blue, lighter and lifted on hover.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => button::Style {
            shadow: shadow::MD,
            ..filled(palette::PRIMARY_400, palette::PRIMARY_500, palette::WHITE)
        },
        button::Status::Disabled => disabled(),
        button::Status::Active | button::Status::Pressed => {
            filled(palette::PRIMARY_500, palette::PRIMARY_600, palette::WHITE)
        }
    }
}

/// Search button while a search is pending.
pub fn inactive(_theme: &Theme, _status: button::Status) -> button::Style {
    disabled()
}

fn disabled() -> button::Style {
    button::Style {
        shadow: shadow::NONE,
        ..filled(palette::GRAY_200, palette::GRAY_400, palette::GRAY_400)
    }
}

/// Dark pill floating over the preview image. `rest` and `hover` are the
/// background alpha in those states.
pub fn overlay(
    text_color: Color,
    rest: f32,
    hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            button::Status::Active | button::Status::Disabled => rest,
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..palette::BLACK
            })),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Gallery tile: no background, accent border on hover.
pub fn tile(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => extended.primary.base.color,
        button::Status::Active | button::Status::Disabled => Color {
            a: opacity::TRANSPARENT,
            ..extended.background.base.color
        },
    };

    button::Style {
        background: None,
        text_color: extended.background.base.text,
        border: Border {
            color: border_color,
            width: border::WIDTH_MD,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
