// SPDX-License-Identifier: MPL-2.0
//! Shared test helpers.
//!
//! Float geometry is compared with the `approx` macros, never `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Tolerance for normalized gradient coordinates computed with `f32` trig.
pub const GEOMETRY_EPSILON: f32 = 1e-5;
