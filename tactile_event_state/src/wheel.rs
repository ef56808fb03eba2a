// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel delta normalization.
//!
//! Platforms report wheel movement in different units and with different
//! signs. [`WheelDelta::normalized`] maps all of them to notches where a
//! positive value means scrolling up (towards the start of the content).

use kurbo::Vec2;

/// Pixels (or legacy `wheelDelta` units) per normalized notch.
pub const WHEEL_UNITS_PER_NOTCH: f64 = 40.0;

/// Legacy `detail` units per normalized notch.
pub const DETAIL_UNITS_PER_NOTCH: f64 = 3.5;

/// A raw wheel delta as reported by the platform.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WheelDelta {
    /// Pixel deltas; positive `y` scrolls down.
    Pixels(Vec2),
    /// Legacy `wheelDelta`; positive scrolls up, 120 per notch.
    LegacyWheel(f64),
    /// Legacy `detail`; positive scrolls down, 3 per notch.
    LegacyDetail(f64),
}

impl WheelDelta {
    /// Vertical movement in notches, positive meaning up.
    #[must_use]
    pub fn normalized(self) -> f64 {
        match self {
            Self::Pixels(delta) => -delta.y / WHEEL_UNITS_PER_NOTCH,
            Self::LegacyWheel(delta) => delta / WHEEL_UNITS_PER_NOTCH,
            Self::LegacyDetail(detail) => -detail / DETAIL_UNITS_PER_NOTCH,
        }
    }
}
