// SPDX-License-Identifier: MPL-2.0
//! Domain layer - icon design rules with no external dependencies.
//!
//! Everything here is plain `std` so the rules can be tested without a
//! window, a filesystem or a clipboard.
//!
//! # Modules
//!
//! - [`design`]: Design values ([`Label`](design::Label),
//!   [`HexColor`](design::HexColor), [`Shape`](design::Shape)) and the
//!   [`DesignState`](design::DesignState) that combines them

pub mod design;
