// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::export::{ExportFormat, RasterImage, SaveOutcome};
use crate::ui::designer;
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Designer(designer::Message),
    Notification(notifications::NotificationMessage),
    /// Bitmap produced for a clipboard copy, `None` when rasterization failed.
    CopyRasterized(Option<RasterImage>),
    /// A download finished, was cancelled, or failed.
    ExportFinished {
        format: ExportFormat,
        outcome: SaveOutcome,
    },
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Data directory override (presets, session state).
    /// Takes precedence over `ICON_FORGE_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Config directory override (settings.toml).
    /// Takes precedence over `ICON_FORGE_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
