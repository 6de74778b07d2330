// SPDX-License-Identifier: MPL-2.0
//! Pure view builders for the designer.
//!
//! Each function maps state to plain descriptors; nothing here touches a
//! widget. A [`RenderTarget`] receives the descriptors and draws them however
//! it likes (the iced sidebar caches them, tests record them).

use crate::domain::design::{DesignState, HexColor, Paint, Shape};
use crate::presets::Preset;

/// Everything needed to draw the icon surface.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewView {
    pub paint: Paint,
    /// CSS `background` value.
    pub background_css: String,
    pub shape: Shape,
    /// Zero-padded label, `None` for preset swatches.
    pub label: Option<String>,
}

impl PreviewView {
    /// CSS `border-radius` value.
    #[must_use]
    pub fn border_radius(&self) -> &'static str {
        self.shape.css_value()
    }
}

/// One editable entry of the color list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCellView {
    pub index: usize,
    pub color: HexColor,
    /// False when removing would leave fewer than two colors.
    pub removable: bool,
}

/// The whole color list, rebuilt after every structural change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorListView {
    pub cells: Vec<ColorCellView>,
    pub can_add: bool,
}

/// One row of the preset list.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetRowView {
    pub index: usize,
    pub swatch: PreviewView,
}

/// Receives rebuilt view fragments.
pub trait RenderTarget {
    fn show_preview(&mut self, preview: PreviewView);
    fn show_colors(&mut self, colors: ColorListView);
    fn show_presets(&mut self, presets: Vec<PresetRowView>);
}

/// Builds the live preview.
#[must_use]
pub fn preview(state: &DesignState) -> PreviewView {
    let paint = state.paint();
    PreviewView {
        background_css: paint.css(", "),
        paint,
        shape: state.shape(),
        label: Some(state.label().padded()),
    }
}

/// Builds one cell per color.
#[must_use]
pub fn color_list(state: &DesignState) -> ColorListView {
    let colors = state.colors();
    let removable = colors.can_remove();
    ColorListView {
        cells: colors
            .iter()
            .enumerate()
            .map(|(index, &color)| ColorCellView {
                index,
                color,
                removable,
            })
            .collect(),
        can_add: colors.can_add(),
    }
}

/// Builds the preset rows with label-less swatches.
#[must_use]
pub fn preset_rows(presets: &[Preset]) -> Vec<PresetRowView> {
    presets
        .iter()
        .enumerate()
        .map(|(index, preset)| {
            let theme = preset.theme();
            let paint = Paint::new(theme.background, theme.direction, &theme.colors);
            PresetRowView {
                index,
                swatch: PreviewView {
                    background_css: paint.css(","),
                    paint,
                    shape: preset.shape(),
                    label: None,
                },
            }
        })
        .collect()
}
