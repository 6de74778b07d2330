// SPDX-License-Identifier: MPL-2.0
//! Design tokens: colors, spacing, sizes and type scale shared by the UI.
//!
//! Spacing follows a 4px grid. Values are checked at compile time so the
//! scales stay ordered.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Width of the control sidebar and the preset column.
    pub const SIDEBAR_WIDTH: f32 = 290.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    /// Severity stripe on the left edge of a toast.
    pub const TOAST_ACCENT: f32 = 4.0;
    /// Color chip next to each hex field.
    pub const CHIP: f32 = 24.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Section headers
    pub const TITLE_SM: f32 = 18.0;
    /// Form inputs
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    /// Field labels, small buttons
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border and Radius
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_SUBTLE);

    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(sizing::TOAST_ACCENT < sizing::CHIP);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 2.0);
    }
}
