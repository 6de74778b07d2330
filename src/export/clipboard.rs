// SPDX-License-Identifier: MPL-2.0
//! Image clipboard access.

use super::RasterImage;
use std::borrow::Cow;
use std::fmt;

/// Why an image could not be placed on the clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No image clipboard exists in this environment.
    Unavailable,
    /// The clipboard refused the write.
    Rejected(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable => write!(f, "clipboard unavailable"),
            ClipboardError::Rejected(reason) => write!(f, "{reason}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Something that can hold one image.
pub trait ImageClipboard {
    /// Replaces the clipboard content with `image` as a single PNG-capable item.
    ///
    /// # Errors
    ///
    /// Returns a [`ClipboardError`] when the write does not happen.
    fn write_image(&mut self, image: &RasterImage) -> Result<(), ClipboardError>;
}

/// The operating system clipboard.
///
/// The connection is opened on first use and kept for the life of the
/// value, since some platforms drop the content with the connection.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("connected", &self.inner.is_some())
            .finish()
    }
}

impl SystemClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn connection(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(|err| {
                tracing::warn!(error = %err, "failed to open system clipboard");
                ClipboardError::Unavailable
            })?;
            self.inner = Some(clipboard);
        }
        self.inner.as_mut().ok_or(ClipboardError::Unavailable)
    }
}

impl ImageClipboard for SystemClipboard {
    fn write_image(&mut self, image: &RasterImage) -> Result<(), ClipboardError> {
        let data = arboard::ImageData {
            width: image.width as usize,
            height: image.height as usize,
            bytes: Cow::Borrowed(&image.rgba),
        };
        self.connection()?.set_image(data).map_err(|err| match err {
            arboard::Error::ClipboardNotSupported => ClipboardError::Unavailable,
            other => ClipboardError::Rejected(other.to_string()),
        })
    }
}

/// In-memory clipboard for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub content: Option<RasterImage>,
    /// When set, every write fails with this error.
    pub fail_with: Option<ClipboardError>,
}

impl ImageClipboard for MemoryClipboard {
    fn write_image(&mut self, image: &RasterImage) -> Result<(), ClipboardError> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.content = Some(image.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clipboard_keeps_last_image() {
        let mut clipboard = MemoryClipboard::default();
        let image = RasterImage::new(1, 1, vec![1, 2, 3, 4]);
        clipboard.write_image(&image).unwrap();
        assert_eq!(clipboard.content, Some(image));
    }

    #[test]
    fn memory_clipboard_reports_configured_failure() {
        let mut clipboard = MemoryClipboard {
            content: None,
            fail_with: Some(ClipboardError::Rejected("busy".into())),
        };
        let result = clipboard.write_image(&RasterImage::new(1, 1, vec![0; 4]));
        assert_eq!(result, Err(ClipboardError::Rejected("busy".into())));
        assert!(clipboard.content.is_none());
    }

    #[test]
    fn rejected_error_displays_reason() {
        assert_eq!(ClipboardError::Rejected("denied".into()).to_string(), "denied");
    }
}
