// SPDX-License-Identifier: MPL-2.0
//! Background styles and their CSS rendering.

use super::color::{ColorList, HexColor};
use super::newtypes::GradientDirection;
use std::fmt;

/// How the icon background is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackgroundType {
    /// First color only.
    Solid,
    /// Linear gradient at the design's direction.
    #[default]
    Linear,
    /// Circular radial gradient from the center.
    Radial,
}

impl BackgroundType {
    pub const ALL: [BackgroundType; 3] = [
        BackgroundType::Solid,
        BackgroundType::Linear,
        BackgroundType::Radial,
    ];

    /// Keyword used in stored presets.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            BackgroundType::Solid => "solid",
            BackgroundType::Linear => "linear",
            BackgroundType::Radial => "radial",
        }
    }

    /// Reads a stored keyword. Anything other than `solid` or `linear` is
    /// drawn as a radial gradient.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "solid" => BackgroundType::Solid,
            "linear" => BackgroundType::Linear,
            _ => BackgroundType::Radial,
        }
    }
}

impl fmt::Display for BackgroundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BackgroundType::Solid => "Solid",
            BackgroundType::Linear => "Linear gradient",
            BackgroundType::Radial => "Radial gradient",
        };
        f.write_str(name)
    }
}

/// A fully resolved background fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Paint {
    Solid(HexColor),
    Linear {
        direction: GradientDirection,
        stops: Vec<HexColor>,
    },
    Radial {
        stops: Vec<HexColor>,
    },
}

impl Paint {
    /// Resolves the fill for a background type, direction and palette.
    #[must_use]
    pub fn new(kind: BackgroundType, direction: GradientDirection, colors: &ColorList) -> Self {
        match kind {
            BackgroundType::Solid => Paint::Solid(colors.first()),
            BackgroundType::Linear => Paint::Linear {
                direction,
                stops: colors.as_slice().to_vec(),
            },
            BackgroundType::Radial => Paint::Radial {
                stops: colors.as_slice().to_vec(),
            },
        }
    }

    /// CSS `background` value, with `separator` between gradient stops.
    #[must_use]
    pub fn css(&self, separator: &str) -> String {
        let join = |stops: &[HexColor]| {
            stops
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(separator)
        };
        match self {
            Paint::Solid(color) => color.to_string(),
            Paint::Linear { direction, stops } => {
                format!("linear-gradient({}deg, {})", direction.degrees(), join(stops))
            }
            Paint::Radial { stops } => format!("radial-gradient(circle, {})", join(stops)),
        }
    }
}
