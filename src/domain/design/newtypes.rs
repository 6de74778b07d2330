// SPDX-License-Identifier: MPL-2.0
//! Design newtypes.
//!
//! Type-safe wrappers for the numeric values of an icon design. Both types
//! correct out-of-range input silently instead of rejecting it.

use std::fmt;

// =============================================================================
// Label Bounds
// =============================================================================

/// Label bounds (1 to 20).
pub mod label_bounds {
    /// Smallest label value.
    pub const MIN: i64 = 1;
    /// Largest label value.
    pub const MAX: i64 = 20;
    /// Value used when the input is not a number.
    pub const DEFAULT: i64 = 1;
}

// =============================================================================
// Label
// =============================================================================

/// Number printed on the icon, guaranteed to be within 1–20.
///
/// The label is always displayed as two zero-padded digits (`"07"`, `"20"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label(u8);

impl Label {
    /// Creates a label, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: i64) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let clamped = value.clamp(label_bounds::MIN, label_bounds::MAX) as u8;
        Self(clamped)
    }

    /// Interprets raw text from the number input.
    ///
    /// Leading whitespace is skipped, an optional sign and the leading digits
    /// are read, and anything after them is ignored (`"7px"` reads as 7).
    /// Text without leading digits, and zero, fall back to the default.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match parse_leading_integer(input) {
            Some(value) if value != 0 => Self::new(value),
            _ => Self::new(label_bounds::DEFAULT),
        }
    }

    /// Returns the numeric value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the label as two zero-padded digits.
    #[must_use]
    pub fn padded(self) -> String {
        format!("{:02}", self.0)
    }
}

impl Default for Label {
    fn default() -> Self {
        Self::new(label_bounds::DEFAULT)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Reads an optionally signed run of leading digits, saturating on overflow.
fn parse_leading_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let run: &str = {
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        &digits[..end]
    };
    if run.is_empty() {
        return None;
    }

    let magnitude = run.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

// =============================================================================
// Gradient Direction Bounds
// =============================================================================

/// Gradient direction bounds in degrees (0 to 360).
pub mod direction_bounds {
    /// Minimum angle.
    pub const MIN: i32 = 0;
    /// Maximum angle.
    pub const MAX: i32 = 360;
    /// Angle used for a fresh design and for unreadable stored values.
    pub const DEFAULT: i32 = 90;
}

// =============================================================================
// GradientDirection
// =============================================================================

/// Linear gradient angle in CSS degrees (0 points up, 90 points right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GradientDirection(i32);

impl GradientDirection {
    /// Creates a direction, clamping to 0–360.
    #[must_use]
    pub fn new(degrees: i32) -> Self {
        Self(degrees.clamp(direction_bounds::MIN, direction_bounds::MAX))
    }

    /// Parses a stored direction string, falling back to the default angle.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        input
            .trim()
            .parse::<i32>()
            .map_or_else(|_| Self::default(), Self::new)
    }

    /// Returns the angle in degrees.
    #[must_use]
    pub fn degrees(self) -> i32 {
        self.0
    }
}

impl Default for GradientDirection {
    fn default() -> Self {
        Self(direction_bounds::DEFAULT)
    }
}

impl fmt::Display for GradientDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_clamps_to_bounds() {
        assert_eq!(Label::new(-4).value(), 1);
        assert_eq!(Label::new(0).value(), 1);
        assert_eq!(Label::new(7).value(), 7);
        assert_eq!(Label::new(20).value(), 20);
        assert_eq!(Label::new(37).value(), 20);
        assert_eq!(Label::new(i64::MAX).value(), 20);
    }

    #[test]
    fn label_is_zero_padded() {
        assert_eq!(Label::new(3).padded(), "03");
        assert_eq!(Label::new(12).padded(), "12");
        assert_eq!(Label::new(3).to_string(), "03");
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(Label::parse("37").padded(), "20");
        assert_eq!(Label::parse("-3").padded(), "01");
    }

    #[test]
    fn non_numeric_input_falls_back_to_one() {
        assert_eq!(Label::parse("abc").padded(), "01");
        assert_eq!(Label::parse("").padded(), "01");
        assert_eq!(Label::parse("-").padded(), "01");
        assert_eq!(Label::parse("0").padded(), "01");
    }

    #[test]
    fn parse_reads_leading_digits_only() {
        assert_eq!(Label::parse("  12").value(), 12);
        assert_eq!(Label::parse("7px").value(), 7);
        assert_eq!(Label::parse("+5").value(), 5);
        assert_eq!(Label::parse("1e3").value(), 1);
        assert_eq!(Label::parse("99999999999999999999999").value(), 20);
    }

    #[test]
    fn direction_clamps_and_parses() {
        assert_eq!(GradientDirection::new(-10).degrees(), 0);
        assert_eq!(GradientDirection::new(400).degrees(), 360);
        assert_eq!(GradientDirection::parse("45").degrees(), 45);
        assert_eq!(GradientDirection::parse(" 180 ").degrees(), 180);
        assert_eq!(
            GradientDirection::parse("north").degrees(),
            direction_bounds::DEFAULT
        );
    }
}
