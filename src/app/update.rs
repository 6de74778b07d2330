// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Designer edits go straight to the controller. Downloads and clipboard
//! copies run as tasks and report back through `Message::ExportFinished` and
//! `Message::CopyRasterized`.

use super::persisted_state::AppState;
use super::{ExportSettings, Message};
use crate::designer::Controller;
use crate::export::{self, ExportFormat, ImageClipboard, RasterImage, Rasterizer, SaveOutcome};
use crate::presets::LocalStorage;
use crate::ui::designer::{self, Event as DesignerEvent};
use crate::ui::notifications::{self, Notification};
use iced::Task;
use std::path::Path;
use std::sync::Arc;

/// Mutable view of the application state handed to each handler.
pub struct UpdateContext<'a> {
    pub controller: &'a mut Controller<LocalStorage>,
    pub designer: &'a mut designer::State,
    pub rasterizer: &'a Arc<dyn Rasterizer>,
    pub clipboard: &'a mut dyn ImageClipboard,
    pub export: ExportSettings,
    pub app_state: &'a mut AppState,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_designer_message(
    ctx: &mut UpdateContext<'_>,
    message: designer::Message,
) -> Task<Message> {
    match designer::update(ctx.designer, message) {
        DesignerEvent::None => Task::none(),
        DesignerEvent::Design(event) => {
            ctx.controller.dispatch(event, ctx.designer);
            Task::none()
        }
        DesignerEvent::Download(format) => start_download(ctx, format),
        DesignerEvent::CopyPng => Task::perform(
            export::rasterize(
                Arc::clone(ctx.rasterizer),
                ctx.controller.preview(),
                ctx.export.raster_size,
            ),
            Message::CopyRasterized,
        ),
    }
}

fn save_dialog(format: ExportFormat, last_directory: Option<&Path>) -> rfd::AsyncFileDialog {
    let (filter_name, extensions) = format.filter();
    let dialog = rfd::AsyncFileDialog::new()
        .set_title("Save Icon")
        .add_filter(filter_name, extensions)
        .set_file_name(format.default_file_name());

    match last_directory {
        Some(dir) if dir.exists() => dialog.set_directory(dir),
        _ => dialog,
    }
}

/// Produces the file content, asks where to put it, then writes it.
fn start_download(ctx: &mut UpdateContext<'_>, format: ExportFormat) -> Task<Message> {
    let dialog = save_dialog(format, ctx.app_state.last_export_directory.as_deref());

    let outcome = match format {
        ExportFormat::Png => {
            let rasterizer = Arc::clone(ctx.rasterizer);
            let preview = ctx.controller.preview();
            let size = ctx.export.raster_size;
            Task::perform(
                async move {
                    let bytes = match export::png_bytes(rasterizer, preview, size).await {
                        Ok(bytes) => bytes,
                        Err(err) => return SaveOutcome::Failed(err.to_string()),
                    };
                    match dialog.save_file().await {
                        Some(handle) => export::write_file(handle.path(), &bytes),
                        None => SaveOutcome::Cancelled,
                    }
                },
                std::convert::identity,
            )
        }
        ExportFormat::Svg => {
            let document = ctx.controller.svg_document(ctx.export.label_color);
            Task::perform(
                async move {
                    match dialog.save_file().await {
                        Some(handle) => export::write_file(handle.path(), document.as_bytes()),
                        None => SaveOutcome::Cancelled,
                    }
                },
                std::convert::identity,
            )
        }
    };

    outcome.map(move |outcome| Message::ExportFinished { format, outcome })
}

pub fn handle_copy_rasterized(ctx: &mut UpdateContext<'_>, image: Option<RasterImage>) {
    let outcome = export::copy_to_clipboard(image.as_ref(), ctx.clipboard);
    let notification = if outcome.is_success() {
        Notification::success(outcome.message())
    } else {
        Notification::error(outcome.message())
    };
    ctx.notifications.push(notification);
}

pub fn handle_export_finished(
    ctx: &mut UpdateContext<'_>,
    format: ExportFormat,
    outcome: SaveOutcome,
) {
    let Some(message) = outcome.message() else {
        tracing::debug!(?format, "export cancelled");
        return;
    };

    match &outcome {
        SaveOutcome::Saved(path) => {
            ctx.app_state.set_last_export_directory_from_file(path);
            if let Some(warning) = ctx.app_state.save() {
                ctx.notifications.push(Notification::warning(warning));
            }
            ctx.notifications.push(Notification::success(message));
        }
        SaveOutcome::Failed(_) => ctx.notifications.push(Notification::error(message)),
        SaveOutcome::Cancelled => {}
    }
}
