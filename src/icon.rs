// SPDX-License-Identifier: MPL-2.0
//! Window/application icon.
//!
//! The icon is the default design rasterized at startup, so it always
//! matches what a fresh designer shows. Falls back to `None` if rendering
//! fails.

use crate::domain::design::DesignState;
use crate::export::{Rasterizer, ResvgRasterizer, DEFAULT_LABEL_COLOR};
use crate::render;
use iced::window::{icon, Icon};

const ICON_SIZE: u32 = 128;

/// Rasterize the default design to a 128x128 RGBA icon.
pub fn load_window_icon() -> Option<Icon> {
    // No system font scan here; the label is dropped when no font matches.
    let rasterizer = ResvgRasterizer::without_fonts(DEFAULT_LABEL_COLOR);
    let preview = render::preview(&DesignState::default());
    let image = rasterizer.rasterize(&preview, ICON_SIZE)?;
    icon::from_rgba(image.rgba, image.width, image.height).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_design_produces_an_icon() {
        assert!(load_window_icon().is_some());
    }
}
