// SPDX-License-Identifier: MPL-2.0
//! Icon export: PNG and SVG files, and PNG to the clipboard.
//!
//! Rasterization is CPU-bound and runs on tokio's blocking pool. Every
//! user-facing operation ends in an enumerated outcome that the app turns
//! into a toast.

pub mod clipboard;
pub mod raster;
pub mod svg;

pub use clipboard::{ClipboardError, ImageClipboard, MemoryClipboard, SystemClipboard};
pub use raster::{Rasterizer, ResvgRasterizer};

use crate::domain::design::HexColor;
use crate::error::{Error, Result};
use crate::render::PreviewView;
use std::fmt;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Label color used when the configuration does not set one.
pub const DEFAULT_LABEL_COLOR: HexColor = HexColor::from_rgb(0xff, 0xff, 0xff);

/// A straight-alpha RGBA8 bitmap.
#[derive(Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl fmt::Debug for RasterImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RasterImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

impl RasterImage {
    #[must_use]
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        Self {
            width,
            height,
            rgba,
        }
    }

    /// Returns the pixel at (`x`, `y`), or `None` outside the image.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let bytes = self.rgba.get(offset..offset + 4)?;
        Some([bytes[0], bytes[1], bytes[2], bytes[3]])
    }
}

/// File formats offered for download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Svg,
}

impl ExportFormat {
    /// File name suggested by the save dialog.
    #[must_use]
    pub fn default_file_name(self) -> &'static str {
        match self {
            ExportFormat::Png => "icon.png",
            ExportFormat::Svg => "icon.svg",
        }
    }

    /// Save dialog filter as `(name, extensions)`.
    #[must_use]
    pub fn filter(self) -> (&'static str, &'static [&'static str]) {
        match self {
            ExportFormat::Png => ("PNG image", &["png"]),
            ExportFormat::Svg => ("SVG image", &["svg"]),
        }
    }
}

/// Result of a copy-to-clipboard request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    RasterizationFailed,
    ClipboardUnavailable,
    WriteRejected(String),
}

impl CopyOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, CopyOutcome::Copied)
    }

    /// Text shown to the user.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            CopyOutcome::Copied => "Icon copied to clipboard as PNG!".to_string(),
            CopyOutcome::RasterizationFailed => {
                "Failed to create image data from the preview.".to_string()
            }
            CopyOutcome::ClipboardUnavailable => {
                "Clipboard is not supported in this environment.".to_string()
            }
            CopyOutcome::WriteRejected(reason) => format!("Clipboard write failed: {reason}"),
        }
    }
}

/// Result of a download request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    /// The user closed the save dialog.
    Cancelled,
    Failed(String),
}

impl SaveOutcome {
    /// Text shown to the user, `None` when nothing should be shown.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            SaveOutcome::Saved(path) => Some(format!("Icon saved to {}", path.display())),
            SaveOutcome::Cancelled => None,
            SaveOutcome::Failed(reason) => Some(format!("Failed to save icon: {reason}")),
        }
    }
}

/// Rasterizes `preview` off the UI thread.
pub async fn rasterize(
    rasterizer: Arc<dyn Rasterizer>,
    preview: PreviewView,
    size: u32,
) -> Option<RasterImage> {
    match tokio::task::spawn_blocking(move || rasterizer.rasterize(&preview, size)).await {
        Ok(image) => image,
        Err(err) => {
            tracing::error!(error = %err, "rasterization task failed");
            None
        }
    }
}

/// Rasterizes `preview` and encodes it as PNG.
///
/// # Errors
///
/// Returns [`Error::Export`] when no bitmap is produced or encoding fails.
pub async fn png_bytes(
    rasterizer: Arc<dyn Rasterizer>,
    preview: PreviewView,
    size: u32,
) -> Result<Vec<u8>> {
    let image = rasterize(rasterizer, preview, size)
        .await
        .ok_or_else(|| Error::Export("Failed to create image data from the preview".into()))?;
    encode_png(&image)
}

/// Encodes `image` as PNG.
///
/// # Errors
///
/// Returns [`Error::Export`] when the buffer does not match the dimensions
/// or the encoder fails.
pub fn encode_png(image: &RasterImage) -> Result<Vec<u8>> {
    let buffer = image_rs::RgbaImage::from_raw(image.width, image.height, image.rgba.clone())
        .ok_or_else(|| Error::Export("pixel buffer does not match image size".into()))?;
    let mut bytes = Vec::new();
    buffer.write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)?;
    Ok(bytes)
}

/// Places `image` on `clipboard`.
pub fn copy_to_clipboard(
    image: Option<&RasterImage>,
    clipboard: &mut dyn ImageClipboard,
) -> CopyOutcome {
    let Some(image) = image else {
        return CopyOutcome::RasterizationFailed;
    };
    match clipboard.write_image(image) {
        Ok(()) => CopyOutcome::Copied,
        Err(ClipboardError::Unavailable) => CopyOutcome::ClipboardUnavailable,
        Err(ClipboardError::Rejected(reason)) => {
            tracing::warn!(%reason, "clipboard rejected image");
            CopyOutcome::WriteRejected(reason)
        }
    }
}

/// Writes `bytes` to `path`.
pub fn write_file(path: &Path, bytes: &[u8]) -> SaveOutcome {
    match std::fs::write(path, bytes) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "icon exported");
            SaveOutcome::Saved(path.to_path_buf())
        }
        Err(err) => {
            tracing::error!(path = %path.display(), error = %err, "failed to write export");
            SaveOutcome::Failed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::design::{BackgroundType, DesignState};
    use crate::render;
    use tempfile::tempdir;

    struct Failing;

    impl Rasterizer for Failing {
        fn rasterize(&self, _preview: &PreviewView, _size: u32) -> Option<RasterImage> {
            None
        }
    }

    fn solid_preview() -> PreviewView {
        let mut state = DesignState::default();
        state.set_background(BackgroundType::Solid);
        render::preview(&state)
    }

    fn white_square() -> RasterImage {
        RasterImage::new(2, 2, vec![255; 16])
    }

    #[test]
    fn copy_outcome_messages() {
        assert_eq!(CopyOutcome::Copied.message(), "Icon copied to clipboard as PNG!");
        assert_eq!(
            CopyOutcome::RasterizationFailed.message(),
            "Failed to create image data from the preview."
        );
        assert_eq!(
            CopyOutcome::ClipboardUnavailable.message(),
            "Clipboard is not supported in this environment."
        );
        assert_eq!(
            CopyOutcome::WriteRejected("denied".into()).message(),
            "Clipboard write failed: denied"
        );
        assert!(CopyOutcome::Copied.is_success());
        assert!(!CopyOutcome::ClipboardUnavailable.is_success());
    }

    #[test]
    fn copy_without_image_reports_rasterization_failure() {
        let mut clipboard = MemoryClipboard::default();
        assert_eq!(
            copy_to_clipboard(None, &mut clipboard),
            CopyOutcome::RasterizationFailed
        );
        assert!(clipboard.content.is_none());
    }

    #[test]
    fn copy_maps_clipboard_errors() {
        let image = white_square();

        let mut clipboard = MemoryClipboard::default();
        assert_eq!(copy_to_clipboard(Some(&image), &mut clipboard), CopyOutcome::Copied);
        assert_eq!(clipboard.content.as_ref(), Some(&image));

        clipboard.fail_with = Some(ClipboardError::Unavailable);
        assert_eq!(
            copy_to_clipboard(Some(&image), &mut clipboard),
            CopyOutcome::ClipboardUnavailable
        );

        clipboard.fail_with = Some(ClipboardError::Rejected("locked".into()));
        assert_eq!(
            copy_to_clipboard(Some(&image), &mut clipboard),
            CopyOutcome::WriteRejected("locked".into())
        );
    }

    #[test]
    fn encode_png_writes_png_signature() {
        let bytes = encode_png(&white_square()).expect("encoding succeeds");
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn encode_png_rejects_mismatched_buffer() {
        let image = RasterImage::new(4, 4, vec![0; 3]);
        assert!(matches!(encode_png(&image), Err(Error::Export(_))));
    }

    #[test]
    fn pixel_lookup_is_bounds_checked() {
        let image = RasterImage::new(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(image.pixel(1, 0), Some([5, 6, 7, 8]));
        assert_eq!(image.pixel(2, 0), None);
        assert_eq!(image.pixel(0, 1), None);
    }

    #[test]
    fn default_file_names() {
        assert_eq!(ExportFormat::Png.default_file_name(), "icon.png");
        assert_eq!(ExportFormat::Svg.default_file_name(), "icon.svg");
    }

    #[test]
    fn save_outcome_messages() {
        assert!(SaveOutcome::Cancelled.message().is_none());
        let failed = SaveOutcome::Failed("disk full".into()).message().unwrap();
        assert!(failed.contains("disk full"));
    }

    #[test]
    fn write_file_reports_saved_path() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("icon.svg");
        assert_eq!(write_file(&path, b"<svg/>"), SaveOutcome::Saved(path.clone()));
        assert_eq!(std::fs::read(&path).unwrap(), b"<svg/>");
    }

    #[test]
    fn write_file_into_missing_directory_fails() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("missing").join("icon.png");
        assert!(matches!(write_file(&path, b"x"), SaveOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn png_bytes_from_resvg_rasterizer() {
        let rasterizer: Arc<dyn Rasterizer> =
            Arc::new(ResvgRasterizer::without_fonts(DEFAULT_LABEL_COLOR));
        let bytes = png_bytes(rasterizer, solid_preview(), 24).await.unwrap();
        let decoded = image_rs::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (24, 24));
        assert_eq!(decoded.get_pixel(12, 12).0, [0x5a, 0x4f, 0xcf, 255]);
    }

    #[tokio::test]
    async fn failing_rasterizer_yields_export_error() {
        let rasterizer: Arc<dyn Rasterizer> = Arc::new(Failing);
        assert!(rasterize(Arc::clone(&rasterizer), solid_preview(), 10)
            .await
            .is_none());
        assert!(matches!(
            png_bytes(rasterizer, solid_preview(), 10).await,
            Err(Error::Export(_))
        ));
    }
}
