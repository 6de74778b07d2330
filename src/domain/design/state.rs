// SPDX-License-Identifier: MPL-2.0
//! The editable design of the icon.

use super::background::{BackgroundType, Paint};
use super::color::ColorList;
use super::newtypes::{GradientDirection, Label};
use super::shape::Shape;

/// Live configuration of the icon being designed.
///
/// The raw label text is kept verbatim (presets store it as typed) and the
/// clamped [`Label`] is derived from it on every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignState {
    label_input: String,
    label: Label,
    background: BackgroundType,
    direction: GradientDirection,
    shape: Shape,
    colors: ColorList,
}

impl Default for DesignState {
    fn default() -> Self {
        Self {
            label_input: "1".to_string(),
            label: Label::default(),
            background: BackgroundType::default(),
            direction: GradientDirection::default(),
            shape: Shape::default(),
            colors: ColorList::default(),
        }
    }
}

impl DesignState {
    /// Text as typed in the number input.
    #[must_use]
    pub fn label_input(&self) -> &str {
        &self.label_input
    }

    #[must_use]
    pub fn label(&self) -> Label {
        self.label
    }

    #[must_use]
    pub fn background(&self) -> BackgroundType {
        self.background
    }

    #[must_use]
    pub fn direction(&self) -> GradientDirection {
        self.direction
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub fn colors(&self) -> &ColorList {
        &self.colors
    }

    pub fn colors_mut(&mut self) -> &mut ColorList {
        &mut self.colors
    }

    pub fn set_label_input(&mut self, input: impl Into<String>) {
        self.label_input = input.into();
        self.label = Label::parse(&self.label_input);
    }

    pub fn set_background(&mut self, background: BackgroundType) {
        self.background = background;
    }

    pub fn set_direction(&mut self, direction: GradientDirection) {
        self.direction = direction;
    }

    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }

    pub fn set_colors(&mut self, colors: ColorList) {
        self.colors = colors;
    }

    /// Resolved background fill.
    #[must_use]
    pub fn paint(&self) -> Paint {
        Paint::new(self.background, self.direction, &self.colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_design_matches_starting_page() {
        let state = DesignState::default();
        assert_eq!(state.label_input(), "1");
        assert_eq!(state.label().padded(), "01");
        assert_eq!(state.background(), BackgroundType::Linear);
        assert_eq!(state.direction().degrees(), 90);
        assert_eq!(
            state.paint().css(", "),
            "linear-gradient(90deg, #5a4fcf, #a38fff)"
        );
    }

    #[test]
    fn label_is_rederived_from_input() {
        let mut state = DesignState::default();
        state.set_label_input("37");
        assert_eq!(state.label_input(), "37");
        assert_eq!(state.label().padded(), "20");
        state.set_label_input("abc");
        assert_eq!(state.label().padded(), "01");
    }
}
