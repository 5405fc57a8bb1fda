// SPDX-License-Identifier: MPL-2.0
//! Shared visual constants for the gallery.
//!
//! Widgets read sizes and colors from here instead of inlining numbers, so
//! the search bar, grid, footer, preview and toasts stay consistent.
//!
//! ```
//! use iced_gallery::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let dimmed = Color { a: opacity::OVERLAY_STRONG, ..palette::BLACK };
//! assert!(dimmed.a < 1.0);
//! assert_eq!(spacing::MD, 16.0);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Search and load-more buttons, spinner
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Preview load failure
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);

    // Toast accents
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Preview backdrop in light mode.
    pub const OVERLAY_STRONG: f32 = 0.7;
    /// Preview backdrop in dark mode, close button hover.
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    /// Search bar strip.
    pub const SURFACE: f32 = 0.95;
}

/// 8px grid.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

pub mod sizing {
    /// Footer spinner.
    pub const ICON_XL: f32 = 48.0;
    /// Preview spinner.
    pub const ICON_XXL: f32 = 64.0;

    pub const INPUT_HEIGHT: f32 = 40.0;

    /// Height of a grid tile; width follows the column count.
    pub const THUMBNAIL_HEIGHT: f32 = 180.0;
    pub const PREVIEW_MAX_WIDTH: f32 = 1280.0;
    pub const PREVIEW_MAX_HEIGHT: f32 = 900.0;

    pub const TOAST_WIDTH: f32 = 320.0;
}

pub mod typography {
    /// Error banner glyph.
    pub const TITLE_MD: f32 = 20.0;
    /// Toast glyphs, tile placeholders.
    pub const TITLE_SM: f32 = 18.0;
    /// Search input, banner title.
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    /// Tooltips, close and details buttons.
    pub const BODY_SM: f32 = 13.0;
    /// Result counter, raw error text.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

const _: () = {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD);
    assert!(spacing::MD < spacing::LG);

    assert!(opacity::OVERLAY_MEDIUM < opacity::OVERLAY_STRONG);
    assert!(opacity::OVERLAY_STRONG < opacity::OVERLAY_HOVER);
    assert!(opacity::SURFACE < 1.0);

    assert!(sizing::ICON_XXL > sizing::ICON_XL);
    assert!(sizing::PREVIEW_MAX_HEIGHT > sizing::THUMBNAIL_HEIGHT);

    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_accents_are_distinct() {
        assert_ne!(palette::WARNING_500, palette::INFO_500);
    }

    #[test]
    fn dark_backdrop_is_denser_than_light() {
        assert!(opacity::OVERLAY_HOVER > opacity::OVERLAY_STRONG);
    }
}
