// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::Curve;

/// How the ease-in form of a curve is applied over time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Direction {
    /// Slow start: the curve as defined.
    In,
    /// Slow end: the curve mirrored in time and value.
    Out,
    /// Slow start and end: ease-in over the first half, ease-out over the second.
    #[default]
    InOut,
}

/// A fully resolved easing: curve, direction and optional shape parameter.
///
/// Specs are plain values; build one per use with [`EasingSpec::parse`] or
/// [`EasingSpec::new`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EasingSpec {
    /// The curve shape.
    pub curve: Curve,
    /// How the curve is composed over time.
    pub direction: Direction,
    /// Overrides the curve's default shape parameter.
    pub param: Option<f64>,
}

impl EasingSpec {
    /// Creates a spec using the curve's default parameter.
    #[must_use]
    pub const fn new(curve: Curve, direction: Direction) -> Self {
        Self {
            curve,
            direction,
            param: None,
        }
    }

    /// Returns a copy with the shape parameter replaced.
    #[must_use]
    pub const fn with_param(mut self, param: Option<f64>) -> Self {
        self.param = param;
        self
    }

    /// Parses a `<shape>[-in|-out]` name.
    ///
    /// A missing or unrecognized suffix means [`Direction::InOut`]; an
    /// unrecognized shape means [`Curve::Linear`].
    ///
    /// ```rust
    /// use tactile_easing::{Curve, Direction, EasingSpec};
    ///
    /// let spec = EasingSpec::parse("bounce-out");
    /// assert_eq!((spec.curve, spec.direction), (Curve::Bounce, Direction::Out));
    ///
    /// let spec = EasingSpec::parse("mystery");
    /// assert_eq!((spec.curve, spec.direction), (Curve::Linear, Direction::InOut));
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Self {
        let (shape, suffix) = name.split_once('-').unwrap_or((name, ""));
        let direction = match suffix {
            "in" => Direction::In,
            "out" => Direction::Out,
            _ => Direction::InOut,
        };
        Self::new(Curve::from_name(shape).unwrap_or_default(), direction)
    }

    /// Evaluates the easing at `t ∈ [0, 1]`.
    ///
    /// The endpoints are fixed before the curve is consulted, so `0.0` and
    /// `1.0` map to themselves exactly.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> f64 {
        if t == 0.0 {
            return 0.0;
        }
        if t == 1.0 {
            return 1.0;
        }
        let ease_in = |t: f64| self.curve.ease_in(t, self.param);
        match self.direction {
            Direction::In => ease_in(t),
            Direction::Out => 1.0 - ease_in(1.0 - t),
            Direction::InOut => {
                if t <= 0.5 {
                    ease_in(2.0 * t) / 2.0
                } else {
                    1.0 - ease_in(2.0 * (1.0 - t)) / 2.0
                }
            }
        }
    }
}

impl From<&str> for EasingSpec {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl fmt::Display for EasingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.curve.name())?;
        match self.direction {
            Direction::In => f.write_str("-in"),
            Direction::Out => f.write_str("-out"),
            Direction::InOut => Ok(()),
        }
    }
}
