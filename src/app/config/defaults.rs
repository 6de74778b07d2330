// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

use crate::domain::design::HexColor;

// ==========================================================================
// Export Defaults
// ==========================================================================

/// Default side length of exported and copied bitmaps, in pixels.
pub const DEFAULT_RASTER_SIZE: u32 = 200;

/// Smallest allowed raster size.
pub const MIN_RASTER_SIZE: u32 = 16;

/// Largest allowed raster size.
pub const MAX_RASTER_SIZE: u32 = 1024;

/// Default color of the number drawn on the icon.
pub const DEFAULT_LABEL_COLOR: HexColor = crate::export::DEFAULT_LABEL_COLOR;

// ==========================================================================
// Preview Defaults
// ==========================================================================

/// Side length of the on-screen preview, in logical pixels.
pub const PREVIEW_SIZE: u32 = 200;

/// Side length of preset swatches, in logical pixels.
pub const SWATCH_SIZE: u32 = 36;
