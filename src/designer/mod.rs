// SPDX-License-Identifier: MPL-2.0
//! The icon designer controller.
//!
//! [`Controller`] owns the [`DesignState`] and the [`PresetStore`]. Input
//! arrives as [`Event`]s; each call to [`Controller::handle`] applies one
//! event and reports which view fragments are stale as a [`Refresh`].
//! [`Controller::render`] then rebuilds exactly those fragments and hands
//! them to a [`RenderTarget`].
//!
//! Invalid input never surfaces as an error: label text is clamped, bad
//! color values and out-of-range indices are ignored, and storage failures
//! are logged.

use crate::domain::design::{BackgroundType, DesignState, GradientDirection, HexColor, Shape};
use crate::export::svg;
use crate::presets::{KeyValueStorage, Preset, PresetStore};
use crate::render::{self, PreviewView, RenderTarget};

/// A user action on the designer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The number input changed.
    LabelEdited(String),
    BackgroundSelected(BackgroundType),
    DirectionChanged(i32),
    ShapeSelected(Shape),
    /// A color picker produced a new value for the color at `index`.
    ColorEdited { index: usize, value: String },
    AddColor,
    RemoveColor(usize),
    SavePreset,
    /// Overwrite the whole design from the preset at this position.
    ApplyPreset(usize),
    /// Overwrite background type, direction and colors from this preset.
    ApplyTheme(usize),
    RemovePreset(usize),
}

/// View fragments that must be rebuilt after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Refresh {
    pub preview: bool,
    pub colors: bool,
    pub presets: bool,
}

impl Refresh {
    pub const NONE: Refresh = Refresh {
        preview: false,
        colors: false,
        presets: false,
    };
    pub const PREVIEW: Refresh = Refresh {
        preview: true,
        colors: false,
        presets: false,
    };
    pub const DESIGN: Refresh = Refresh {
        preview: true,
        colors: true,
        presets: false,
    };
    pub const PRESETS: Refresh = Refresh {
        preview: false,
        colors: false,
        presets: true,
    };
    pub const ALL: Refresh = Refresh {
        preview: true,
        colors: true,
        presets: true,
    };

    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }
}

/// Owns the design and its presets.
#[derive(Debug)]
pub struct Controller<S> {
    state: DesignState,
    presets: PresetStore<S>,
}

impl<S: KeyValueStorage> Controller<S> {
    /// Starts from the default design.
    pub fn new(storage: S) -> Self {
        Self::with_state(DesignState::default(), storage)
    }

    pub fn with_state(state: DesignState, storage: S) -> Self {
        Self {
            state,
            presets: PresetStore::new(storage),
        }
    }

    #[must_use]
    pub fn state(&self) -> &DesignState {
        &self.state
    }

    #[must_use]
    pub fn presets(&self) -> Vec<Preset> {
        self.presets.list()
    }

    /// Applies one event.
    pub fn handle(&mut self, event: Event) -> Refresh {
        match event {
            Event::LabelEdited(input) => {
                self.state.set_label_input(input);
                Refresh::PREVIEW
            }
            Event::BackgroundSelected(background) => {
                self.state.set_background(background);
                Refresh::PREVIEW
            }
            Event::DirectionChanged(degrees) => {
                self.state.set_direction(GradientDirection::new(degrees));
                Refresh::PREVIEW
            }
            Event::ShapeSelected(shape) => {
                self.state.set_shape(shape);
                Refresh::PREVIEW
            }
            Event::ColorEdited { index, value } => {
                let Some(color) = HexColor::parse(&value) else {
                    return Refresh::NONE;
                };
                if self.state.colors_mut().set(index, color) {
                    Refresh::PREVIEW
                } else {
                    Refresh::NONE
                }
            }
            Event::AddColor => {
                if self.state.colors_mut().push_default() {
                    Refresh::DESIGN
                } else {
                    Refresh::NONE
                }
            }
            Event::RemoveColor(index) => {
                if self.state.colors_mut().remove(index) {
                    Refresh::DESIGN
                } else {
                    Refresh::NONE
                }
            }
            Event::SavePreset => {
                if let Err(err) = self.presets.save(&self.state) {
                    tracing::error!(error = %err, "failed to save preset");
                }
                Refresh::PRESETS
            }
            Event::ApplyPreset(index) => match self.presets.get(index) {
                Some(preset) => {
                    preset.apply_to(&mut self.state);
                    Refresh::DESIGN
                }
                None => Refresh::NONE,
            },
            Event::ApplyTheme(index) => match self.presets.get(index) {
                Some(preset) => {
                    preset.apply_theme_to(&mut self.state);
                    Refresh::DESIGN
                }
                None => Refresh::NONE,
            },
            Event::RemovePreset(index) => {
                if let Err(err) = self.presets.remove(index) {
                    tracing::error!(error = %err, index, "failed to remove preset");
                }
                Refresh::PRESETS
            }
        }
    }

    /// Rebuilds the stale fragments and pushes them to `target`.
    pub fn render(&self, refresh: Refresh, target: &mut dyn RenderTarget) {
        if refresh.colors {
            target.show_colors(render::color_list(&self.state));
        }
        if refresh.preview {
            target.show_preview(render::preview(&self.state));
        }
        if refresh.presets {
            target.show_presets(render::preset_rows(&self.presets.list()));
        }
    }

    /// Applies an event and renders whatever it invalidated.
    pub fn dispatch(&mut self, event: Event, target: &mut dyn RenderTarget) -> Refresh {
        let refresh = self.handle(event);
        self.render(refresh, target);
        refresh
    }

    #[must_use]
    pub fn preview(&self) -> PreviewView {
        render::preview(&self.state)
    }

    /// SVG document wrapping the current preview.
    #[must_use]
    pub fn svg_document(&self, label_color: HexColor) -> String {
        svg::document(&self.preview(), label_color)
    }
}
