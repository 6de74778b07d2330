// SPDX-License-Identifier: MPL-2.0
//! Icon outline shapes, expressed as CSS `border-radius` values.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Shape {
    Square,
    #[default]
    Rounded,
    Squircle,
    Circle,
}

impl Shape {
    pub const ALL: [Shape; 4] = [Shape::Square, Shape::Rounded, Shape::Squircle, Shape::Circle];

    /// CSS `border-radius` value.
    #[must_use]
    pub fn css_value(self) -> &'static str {
        match self {
            Shape::Square => "0%",
            Shape::Rounded => "20%",
            Shape::Squircle => "35%",
            Shape::Circle => "50%",
        }
    }

    /// Corner radius as a fraction of the icon's side length.
    #[must_use]
    pub fn radius_fraction(self) -> f32 {
        match self {
            Shape::Square => 0.0,
            Shape::Rounded => 0.2,
            Shape::Squircle => 0.35,
            Shape::Circle => 0.5,
        }
    }

    /// Looks a shape up by its CSS value.
    #[must_use]
    pub fn from_css(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.css_value() == value.trim())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::Square => "Square",
            Shape::Rounded => "Rounded",
            Shape::Squircle => "Squircle",
            Shape::Circle => "Circle",
        };
        f.write_str(name)
    }
}
