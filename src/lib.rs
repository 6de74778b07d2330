// SPDX-License-Identifier: MPL-2.0
//! `icon_forge` is a small designer for numbered badge icons, built with the
//! Iced GUI framework.
//!
//! A design is a two-digit label over a solid, linear or radial background
//! inside a square, rounded or circular frame. Designs can be kept as
//! presets, exported as PNG or SVG, and copied to the clipboard.
//!
//! - [`domain`] - design state and its value types
//! - [`designer`] - event handling and partial re-rendering
//! - [`presets`] - preset records and their key-value storage
//! - [`render`] - pure view descriptors
//! - [`export`] - rasterization, SVG documents, files and clipboard
//! - [`app`] / [`ui`] - the iced application

#![doc(html_root_url = "https://docs.rs/icon_forge/0.1.0")]

pub mod app;
pub use app::config;
pub mod designer;
pub mod domain;
pub mod error;
pub mod export;
pub mod icon;
pub mod logging;
pub mod presets;
pub mod render;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
