// SPDX-License-Identifier: MPL-2.0
//! User interface components, Elm-style ("state down, messages up").
//!
//! - [`designer`] - the icon designer screen
//! - [`notifications`] - toast notifications
//! - [`design_tokens`] - shared colors, spacing and sizes
//! - [`theming`] - Light/Dark/System theme selection

pub mod design_tokens;
pub mod designer;
pub mod notifications;
pub mod theming;
