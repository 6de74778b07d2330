// SPDX-License-Identifier: MPL-2.0
//! Rasterization of the preview surface.
//!
//! [`ResvgRasterizer`] rebuilds the preview as a native SVG scene (gradient
//! paint server, rounded rect, centered label) and renders it with resvg
//! into a transparent tiny-skia pixmap. Corners outside the shape stay fully
//! transparent.

use super::RasterImage;
use crate::domain::design::{GradientDirection, HexColor, Paint};
use crate::render::PreviewView;
use quick_xml::escape::escape;
use resvg::usvg;
use std::fmt::Write as _;
use std::sync::Arc;

/// Share of the side length used for the label's font size.
const LABEL_FONT_SCALE: f32 = 0.4;

/// Renders a preview surface into a bitmap.
pub trait Rasterizer: Send + Sync {
    /// Returns `None` when no bitmap can be produced.
    fn rasterize(&self, preview: &PreviewView, size: u32) -> Option<RasterImage>;
}

/// resvg-backed rasterizer.
#[derive(Clone)]
pub struct ResvgRasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
    label_color: HexColor,
}

impl std::fmt::Debug for ResvgRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResvgRasterizer")
            .field("font_faces", &self.fontdb.len())
            .field("label_color", &self.label_color)
            .finish()
    }
}

impl ResvgRasterizer {
    /// Creates a rasterizer with the system fonts loaded for the label.
    #[must_use]
    pub fn new(label_color: HexColor) -> Self {
        let mut fontdb = usvg::fontdb::Database::new();
        fontdb.load_system_fonts();
        tracing::debug!(faces = fontdb.len(), "loaded system fonts");
        Self {
            fontdb: Arc::new(fontdb),
            label_color,
        }
    }

    /// Creates a rasterizer without fonts; labels are skipped.
    #[must_use]
    pub fn without_fonts(label_color: HexColor) -> Self {
        Self {
            fontdb: Arc::new(usvg::fontdb::Database::new()),
            label_color,
        }
    }

    /// Native SVG scene for `preview` at `size`×`size` pixels.
    #[must_use]
    pub fn scene(&self, preview: &PreviewView, size: u32) -> String {
        #[allow(clippy::cast_precision_loss)]
        let side = size as f32;
        let radius = side * preview.shape.radius_fraction();

        let (defs, fill) = match &preview.paint {
            Paint::Solid(color) => (String::new(), color.to_string()),
            Paint::Linear { direction, stops } => {
                let (x1, y1, x2, y2) = linear_endpoints(*direction);
                (
                    format!(
                        r#"<linearGradient id="bg" x1="{x1:.4}" y1="{y1:.4}" x2="{x2:.4}" y2="{y2:.4}">{}</linearGradient>"#,
                        gradient_stops(stops)
                    ),
                    "url(#bg)".to_string(),
                )
            }
            Paint::Radial { stops } => (
                // CSS `circle` defaults to the farthest corner.
                format!(
                    r#"<radialGradient id="bg" cx="0.5" cy="0.5" r="{:.4}">{}</radialGradient>"#,
                    std::f32::consts::FRAC_1_SQRT_2,
                    gradient_stops(stops)
                ),
                "url(#bg)".to_string(),
            ),
        };

        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}"><defs>{defs}</defs><rect width="{size}" height="{size}" rx="{radius:.2}" ry="{radius:.2}" fill="{fill}"/>"#
        );
        if let Some(label) = &preview.label {
            let _ = write!(
                svg,
                r#"<text x="{half:.2}" y="{half:.2}" text-anchor="middle" dominant-baseline="central" font-family="sans-serif" font-weight="bold" font-size="{font:.2}" fill="{color}">{label}</text>"#,
                half = side / 2.0,
                font = side * LABEL_FONT_SCALE,
                color = self.label_color,
                label = escape(label.as_str()),
            );
        }
        svg.push_str("</svg>");
        svg
    }
}

impl Rasterizer for ResvgRasterizer {
    fn rasterize(&self, preview: &PreviewView, size: u32) -> Option<RasterImage> {
        if size == 0 {
            return None;
        }

        let mut options = usvg::Options::default();
        options.fontdb = Arc::clone(&self.fontdb);

        let scene = self.scene(preview, size);
        let tree = match usvg::Tree::from_data(scene.as_bytes(), &options) {
            Ok(tree) => tree,
            Err(err) => {
                tracing::error!(error = %err, "failed to parse icon scene");
                return None;
            }
        };

        let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        let rgba = pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let color = pixel.demultiply();
                [color.red(), color.green(), color.blue(), color.alpha()]
            })
            .collect();
        Some(RasterImage::new(size, size, rgba))
    }
}

/// Start and end of a CSS linear gradient line on a unit square, in
/// bounding-box units.
///
/// CSS angles run clockwise from "to top", and the gradient line is long
/// enough for the corners to receive the first and last stops exactly.
#[must_use]
pub fn linear_endpoints(direction: GradientDirection) -> (f32, f32, f32, f32) {
    #[allow(clippy::cast_precision_loss)]
    let radians = (direction.degrees() as f32).to_radians();
    let (sin, cos) = radians.sin_cos();
    let half = (sin.abs() + cos.abs()) / 2.0;
    (
        0.5 - half * sin,
        0.5 + half * cos,
        0.5 + half * sin,
        0.5 - half * cos,
    )
}

fn gradient_stops(stops: &[HexColor]) -> String {
    let last = stops.len().saturating_sub(1).max(1);
    stops
        .iter()
        .enumerate()
        .map(|(i, color)| {
            #[allow(clippy::cast_precision_loss)]
            let offset = i as f32 / last as f32;
            format!(r#"<stop offset="{offset:.4}" stop-color="{color}"/>"#)
        })
        .collect()
}
