// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every view.
//!
//! Colors, spacing and sizes live here so the browser grid, the detail
//! panel and the toasts stay visually consistent.
//!
//! ```
//! use cat_lens::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let backdrop = Color {
//!     a: opacity::OVERLAY_MEDIUM,
//!     ..palette::BLACK
//! };
//! assert!(backdrop.a < 1.0);
//! assert_eq!(spacing::MD, 16.0);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Warm amber brand scale
    pub const PRIMARY_400: Color = Color::from_rgb(0.98, 0.72, 0.35);
    pub const PRIMARY_500: Color = Color::from_rgb(0.93, 0.6, 0.2);
    pub const PRIMARY_600: Color = Color::from_rgb(0.82, 0.5, 0.12);

    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;

    /// Semi-transparent panels and cards.
    pub const SURFACE: f32 = 0.95;
}

/// 8px baseline grid.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Height of a thumbnail inside a grid card. Width follows the column.
    pub const THUMBNAIL_HEIGHT: f32 = 180.0;

    pub const SELECTOR_WIDTH: f32 = 220.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const DETAIL_PANEL_WIDTH: f32 = 440.0;
}

pub mod typography {
    //! Font sizes, largest first.

    pub const TITLE_LG: f32 = 30.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
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
}

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(sizing::DETAIL_PANEL_WIDTH > sizing::TOAST_WIDTH);
};
