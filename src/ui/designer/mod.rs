// SPDX-License-Identifier: MPL-2.0
//! Designer screen: control sidebar, live preview and preset list.
//!
//! [`State`] is the iced-side [`RenderTarget`]. It keeps the descriptors the
//! controller pushes and the bitmaps rasterized from them, so `view` never
//! renders anything itself.

mod view;

pub use view::{view, ViewContext};

use crate::app::config::{PREVIEW_SIZE, SWATCH_SIZE};
use crate::designer::Event as DesignEvent;
use crate::domain::design::{BackgroundType, HexColor, Shape};
use crate::export::{ExportFormat, RasterImage, Rasterizer};
use crate::render::{ColorListView, PresetRowView, PreviewView, RenderTarget};
use iced::widget::image::Handle;
use std::fmt;
use std::sync::Arc;

/// Messages emitted by the designer widgets.
#[derive(Debug, Clone)]
pub enum Message {
    LabelChanged(String),
    BackgroundSelected(BackgroundType),
    DirectionChanged(i32),
    ShapeSelected(Shape),
    /// Text typed into the hex field of a color cell.
    ColorDraftChanged { index: usize, value: String },
    AddColor,
    RemoveColor(usize),
    SavePreset,
    ApplyPreset(usize),
    ApplyTheme(usize),
    RemovePreset(usize),
    Download(ExportFormat),
    CopyPng,
}

/// What the parent application should do after a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Forward to the design controller.
    Design(DesignEvent),
    Download(ExportFormat),
    CopyPng,
}

/// A preset row together with its rendered swatch.
#[derive(Clone)]
pub struct PresetEntry {
    pub row: PresetRowView,
    pub swatch: Option<Handle>,
}

/// Cached view state of the designer.
pub struct State {
    rasterizer: Arc<dyn Rasterizer>,
    preview: Option<PreviewView>,
    preview_image: Option<Handle>,
    colors: ColorListView,
    /// Hex field contents, one per color cell. Kept apart from the design so
    /// half-typed values survive until they parse.
    color_drafts: Vec<String>,
    presets: Vec<PresetEntry>,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("preview", &self.preview)
            .field("has_preview_image", &self.preview_image.is_some())
            .field("colors", &self.colors)
            .field("presets", &self.presets.len())
            .finish()
    }
}

impl State {
    pub fn new(rasterizer: Arc<dyn Rasterizer>) -> Self {
        Self {
            rasterizer,
            preview: None,
            preview_image: None,
            colors: ColorListView::default(),
            color_drafts: Vec::new(),
            presets: Vec::new(),
        }
    }

    #[must_use]
    pub fn preview(&self) -> Option<&PreviewView> {
        self.preview.as_ref()
    }

    #[must_use]
    pub fn preview_image(&self) -> Option<&Handle> {
        self.preview_image.as_ref()
    }

    #[must_use]
    pub fn colors(&self) -> &ColorListView {
        &self.colors
    }

    #[must_use]
    pub fn color_draft(&self, index: usize) -> &str {
        self.color_drafts.get(index).map_or("", String::as_str)
    }

    #[must_use]
    pub fn presets(&self) -> &[PresetEntry] {
        &self.presets
    }

    fn render(&self, preview: &PreviewView, size: u32) -> Option<Handle> {
        self.rasterizer.rasterize(preview, size).map(to_handle)
    }
}

impl RenderTarget for State {
    fn show_preview(&mut self, preview: PreviewView) {
        self.preview_image = self.render(&preview, PREVIEW_SIZE);
        if self.preview_image.is_none() {
            tracing::warn!("preview rasterization produced no image");
        }
        self.preview = Some(preview);
    }

    fn show_colors(&mut self, colors: ColorListView) {
        self.color_drafts = colors
            .cells
            .iter()
            .map(|cell| cell.color.to_string())
            .collect();
        self.colors = colors;
    }

    fn show_presets(&mut self, presets: Vec<PresetRowView>) {
        self.presets = presets
            .into_iter()
            .map(|row| PresetEntry {
                swatch: self.render(&row.swatch, SWATCH_SIZE),
                row,
            })
            .collect();
    }
}

fn to_handle(image: RasterImage) -> Handle {
    Handle::from_rgba(image.width, image.height, image.rgba)
}

/// Applies a widget message to the cached state and tells the parent what
/// else must happen.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::LabelChanged(value) => Event::Design(DesignEvent::LabelEdited(value)),
        Message::BackgroundSelected(kind) => Event::Design(DesignEvent::BackgroundSelected(kind)),
        Message::DirectionChanged(degrees) => Event::Design(DesignEvent::DirectionChanged(degrees)),
        Message::ShapeSelected(shape) => Event::Design(DesignEvent::ShapeSelected(shape)),
        Message::ColorDraftChanged { index, value } => {
            let Some(draft) = state.color_drafts.get_mut(index) else {
                return Event::None;
            };
            draft.clone_from(&value);
            if HexColor::parse(&value).is_some() {
                Event::Design(DesignEvent::ColorEdited { index, value })
            } else {
                Event::None
            }
        }
        Message::AddColor => Event::Design(DesignEvent::AddColor),
        Message::RemoveColor(index) => Event::Design(DesignEvent::RemoveColor(index)),
        Message::SavePreset => Event::Design(DesignEvent::SavePreset),
        Message::ApplyPreset(index) => Event::Design(DesignEvent::ApplyPreset(index)),
        Message::ApplyTheme(index) => Event::Design(DesignEvent::ApplyTheme(index)),
        Message::RemovePreset(index) => Event::Design(DesignEvent::RemovePreset(index)),
        Message::Download(format) => Event::Download(format),
        Message::CopyPng => Event::CopyPng,
    }
}
