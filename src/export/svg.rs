// SPDX-License-Identifier: MPL-2.0
//! SVG export by markup embedding.
//!
//! The preview surface is written as an XHTML `<div>` with inline CSS and
//! wrapped in a `<foreignObject>`. Gradients and corner rounding stay CSS;
//! nothing is converted to SVG primitives, so the file only renders in
//! viewers that support `foreignObject` (browsers do, resvg does not).

use crate::domain::design::HexColor;
use crate::render::PreviewView;
use quick_xml::escape::escape;

/// Side length of the exported frame, in pixels.
pub const FRAME_SIZE: u32 = 200;

/// Builds the SVG document for `preview`.
#[must_use]
pub fn document(preview: &PreviewView, label_color: HexColor) -> String {
    let style = format!(
        "background: {background}; border-radius: {radius}; color: {label_color}; \
         font-family: sans-serif; font-weight: bold; font-size: {font}px; \
         width: {FRAME_SIZE}px; height: {FRAME_SIZE}px; display: flex; \
         align-items: center; justify-content: center;",
        background = preview.background_css,
        radius = preview.border_radius(),
        font = FRAME_SIZE * 2 / 5,
    );
    let label = preview.label.as_deref().unwrap_or_default();

    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{FRAME_SIZE}" height="{FRAME_SIZE}">
    <foreignObject width="100%" height="100%">
        <div xmlns="http://www.w3.org/1999/xhtml" id="icon-preview" style="{style}">{label}</div>
    </foreignObject>
</svg>
"#,
        style = escape(style.as_str()),
        label = escape(label),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::design::{BackgroundType, DesignState, GradientDirection};
    use crate::render;

    fn linear_preview() -> PreviewView {
        let mut state = DesignState::default();
        state.set_label_input("4");
        state.set_background(BackgroundType::Linear);
        state.set_direction(GradientDirection::new(90));
        render::preview(&state)
    }

    #[test]
    fn wraps_preview_in_foreign_object() {
        let svg = document(&linear_preview(), HexColor::from_rgb(255, 255, 255));
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="200">"#));
        assert!(svg.contains(r#"<foreignObject width="100%" height="100%">"#));
        assert!(svg.contains(r#"xmlns="http://www.w3.org/1999/xhtml""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn frame_is_fixed_and_content_centered() {
        let svg = document(&linear_preview(), HexColor::from_rgb(255, 255, 255));
        assert!(svg.contains("width: 200px; height: 200px;"));
        assert!(svg.contains("display: flex;"));
        assert!(svg.contains("align-items: center; justify-content: center;"));
    }

    #[test]
    fn carries_background_shape_and_label() {
        let svg = document(&linear_preview(), HexColor::from_rgb(0, 0, 0));
        assert!(svg.contains("background: linear-gradient(90deg, #5a4fcf, #a38fff);"));
        assert!(svg.contains("border-radius: 20%;"));
        assert!(svg.contains("color: #000000;"));
        assert!(svg.contains(">04</div>"));
    }

    #[test]
    fn label_less_preview_has_empty_div() {
        let mut preview = linear_preview();
        preview.label = None;
        let svg = document(&preview, HexColor::from_rgb(255, 255, 255));
        assert!(svg.contains("></div>"));
    }
}
