// SPDX-License-Identifier: MPL-2.0
//! Hex colors and the bounded color list of a design.

use std::fmt;

/// Bounds on the number of colors in a design.
pub mod palette_bounds {
    /// A gradient needs at least two stops.
    pub const MIN_COLORS: usize = 2;
    /// Upper limit on color stops.
    pub const MAX_COLORS: usize = 5;
}

/// Color appended by "add color".
pub const NEW_COLOR: HexColor = HexColor([0xff, 0xff, 0xff]);

/// Starting palette of a fresh design.
pub const DEFAULT_COLORS: [HexColor; 2] = [
    HexColor([0x5a, 0x4f, 0xcf]),
    HexColor([0xa3, 0x8f, 0xff]),
];

// =============================================================================
// HexColor
// =============================================================================

/// An opaque sRGB color written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor([u8; 3]);

impl HexColor {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Parses `#rrggbb` or the short `#rgb` form (case-insensitive).
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let hex = input.trim().strip_prefix('#')?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                Some(Self([channel(0)?, channel(2)?, channel(4)?]))
            }
            3 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&hex[i..=i], 16)
                        .ok()
                        .map(|v| v * 17)
                };
                Some(Self([channel(0)?, channel(1)?, channel(2)?]))
            }
            _ => None,
        }
    }

    /// Returns the red, green and blue channels.
    #[must_use]
    pub fn rgb(self) -> (u8, u8, u8) {
        (self.0[0], self.0[1], self.0[2])
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0[0], self.0[1], self.0[2])
    }
}

// =============================================================================
// ColorList
// =============================================================================

/// Ordered gradient stops. The length always stays within
/// [`palette_bounds::MIN_COLORS`]..=[`palette_bounds::MAX_COLORS`].
///
/// Order matters: it is the gradient stop order, and the first entry is the
/// solid fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorList(Vec<HexColor>);

impl ColorList {
    /// Builds a list if `colors` has a valid length.
    #[must_use]
    pub fn from_vec(colors: Vec<HexColor>) -> Option<Self> {
        let len = colors.len();
        (palette_bounds::MIN_COLORS..=palette_bounds::MAX_COLORS)
            .contains(&len)
            .then_some(Self(colors))
    }

    /// Builds a list from arbitrary input, dropping extra entries and padding
    /// short input with [`NEW_COLOR`].
    #[must_use]
    pub fn normalized(mut colors: Vec<HexColor>) -> Self {
        colors.truncate(palette_bounds::MAX_COLORS);
        while colors.len() < palette_bounds::MIN_COLORS {
            colors.push(NEW_COLOR);
        }
        Self(colors)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[HexColor] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &HexColor> {
        self.0.iter()
    }

    /// The solid fill color.
    #[must_use]
    pub fn first(&self) -> HexColor {
        self.0[0]
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<HexColor> {
        self.0.get(index).copied()
    }

    /// Whether another color may be appended.
    #[must_use]
    pub fn can_add(&self) -> bool {
        self.0.len() < palette_bounds::MAX_COLORS
    }

    /// Whether a color may be removed.
    #[must_use]
    pub fn can_remove(&self) -> bool {
        self.0.len() > palette_bounds::MIN_COLORS
    }

    /// Appends [`NEW_COLOR`]. Returns `false` when the list is full.
    pub fn push_default(&mut self) -> bool {
        if !self.can_add() {
            return false;
        }
        self.0.push(NEW_COLOR);
        true
    }

    /// Removes the color at `index`, shifting later colors down.
    ///
    /// Returns `false` (and changes nothing) when the list is at its minimum
    /// length or the index is out of range.
    pub fn remove(&mut self, index: usize) -> bool {
        if !self.can_remove() || index >= self.0.len() {
            return false;
        }
        self.0.remove(index);
        true
    }

    /// Replaces the color at `index`. Returns `false` for an unknown index.
    pub fn set(&mut self, index: usize, color: HexColor) -> bool {
        match self.0.get_mut(index) {
            Some(slot) => {
                *slot = color;
                true
            }
            None => false,
        }
    }

    /// Joins the colors as CSS text with `separator` between them.
    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        self.0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Returns the colors as `#rrggbb` strings.
    #[must_use]
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl Default for ColorList {
    fn default() -> Self {
        Self(DEFAULT_COLORS.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(hexes: &[&str]) -> ColorList {
        ColorList::from_vec(hexes.iter().filter_map(|h| HexColor::parse(h)).collect())
            .expect("valid test palette")
    }

    #[test]
    fn parse_accepts_long_and_short_forms() {
        assert_eq!(HexColor::parse("#5a4fcf"), Some(HexColor::from_rgb(0x5a, 0x4f, 0xcf)));
        assert_eq!(HexColor::parse("#5A4FCF"), Some(HexColor::from_rgb(0x5a, 0x4f, 0xcf)));
        assert_eq!(HexColor::parse("#fff"), Some(HexColor::from_rgb(255, 255, 255)));
        assert_eq!(HexColor::parse("#1a2").map(|c| c.to_string()), Some("#11aa22".into()));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert_eq!(HexColor::parse("5a4fcf"), None);
        assert_eq!(HexColor::parse("#5a4fc"), None);
        assert_eq!(HexColor::parse("#zzzzzz"), None);
        assert_eq!(HexColor::parse("#"), None);
        assert_eq!(HexColor::parse("#ééé"), None);
    }

    #[test]
    fn display_is_lowercase_long_form() {
        assert_eq!(HexColor::from_rgb(0xAB, 0x01, 0xFF).to_string(), "#ab01ff");
    }

    #[test]
    fn default_palette_matches_starting_design() {
        assert_eq!(ColorList::default().to_strings(), vec!["#5a4fcf", "#a38fff"]);
    }

    #[test]
    fn from_vec_rejects_invalid_lengths() {
        assert!(ColorList::from_vec(vec![NEW_COLOR]).is_none());
        assert!(ColorList::from_vec(vec![NEW_COLOR; 6]).is_none());
        assert!(ColorList::from_vec(vec![NEW_COLOR; 5]).is_some());
    }

    #[test]
    fn normalized_truncates_and_pads() {
        assert_eq!(ColorList::normalized(vec![NEW_COLOR; 8]).len(), 5);
        let padded = ColorList::normalized(vec![HexColor::from_rgb(1, 2, 3)]);
        assert_eq!(padded.to_strings(), vec!["#010203", "#ffffff"]);
    }

    #[test]
    fn adding_stops_at_five() {
        let mut colors = ColorList::default();
        for expected in 3..=5 {
            assert!(colors.push_default());
            assert_eq!(colors.len(), expected);
        }
        assert!(!colors.push_default());
        assert_eq!(colors.len(), 5);
        assert_eq!(colors.get(4), Some(NEW_COLOR));
    }

    #[test]
    fn removing_stops_at_two() {
        let mut colors = ColorList::default();
        assert!(!colors.remove(0));
        assert_eq!(colors.len(), 2);
    }

    #[test]
    fn remove_is_positional_and_preserves_order() {
        let mut colors = list(&["#111111", "#222222", "#333333", "#444444"]);
        assert!(colors.remove(1));
        assert_eq!(colors.to_strings(), vec!["#111111", "#333333", "#444444"]);
        assert!(!colors.remove(7));
        assert_eq!(colors.len(), 3);
    }

    #[test]
    fn set_replaces_in_place() {
        let mut colors = list(&["#111111", "#222222"]);
        assert!(colors.set(1, HexColor::from_rgb(0, 0, 0)));
        assert_eq!(colors.join(", "), "#111111, #000000");
        assert!(!colors.set(2, HexColor::from_rgb(0, 0, 0)));
    }
}
