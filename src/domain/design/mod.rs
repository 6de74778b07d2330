// SPDX-License-Identifier: MPL-2.0
//! Icon design types: label, palette, background, shape and the combined
//! [`DesignState`].

pub mod background;
pub mod color;
pub mod newtypes;
pub mod shape;
pub mod state;

pub use background::{BackgroundType, Paint};
pub use color::{palette_bounds, ColorList, HexColor, DEFAULT_COLORS, NEW_COLOR};
pub use newtypes::{direction_bounds, label_bounds, GradientDirection, Label};
pub use shape::Shape;
pub use state::DesignState;
