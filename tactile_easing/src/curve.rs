// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::PI;

/// Shape of an easing curve, expressed in its ease-in form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Curve {
    /// `t`. Also used for unrecognized names.
    #[default]
    Linear,
    /// `t²`
    Quad,
    /// `t³`
    Cubic,
    /// `t⁴`
    Quart,
    /// `t⁵`
    Quint,
    /// Quarter circle, `1 - √(1 - t²)`.
    Circ,
    /// `1 - cos(tπ/2)`
    Sine,
    /// `2^(10(t - 1))`, pinned to zero at `t ≤ 0`.
    Exp,
    /// Pulls back before accelerating; the parameter is the overshoot.
    Back,
    /// Exponentially growing oscillation; the parameter is the period.
    Elastic,
    /// `0.5 - cos(tπ)/2`
    Swing,
    /// Four decaying quadratic bounces.
    Bounce,
    /// Damped cosine oscillation.
    Spring,
}

impl Curve {
    /// Every curve, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Linear,
        Self::Quad,
        Self::Cubic,
        Self::Quart,
        Self::Quint,
        Self::Circ,
        Self::Sine,
        Self::Exp,
        Self::Back,
        Self::Elastic,
        Self::Swing,
        Self::Bounce,
        Self::Spring,
    ];

    /// Default overshoot for [`Curve::Back`].
    pub const BACK_OVERSHOOT: f64 = 1.70158;

    /// Default period for [`Curve::Elastic`].
    pub const ELASTIC_PERIOD: f64 = 0.3;

    /// Looks up a curve by its shape name (without direction suffix).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "linear" => Self::Linear,
            "quad" => Self::Quad,
            "cubic" => Self::Cubic,
            "quart" => Self::Quart,
            "quint" => Self::Quint,
            "circ" => Self::Circ,
            "sine" => Self::Sine,
            "exp" => Self::Exp,
            "back" => Self::Back,
            "elastic" => Self::Elastic,
            "swing" => Self::Swing,
            "bounce" => Self::Bounce,
            "spring" => Self::Spring,
            _ => return None,
        })
    }

    /// The shape name accepted by [`Curve::from_name`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Quad => "quad",
            Self::Cubic => "cubic",
            Self::Quart => "quart",
            Self::Quint => "quint",
            Self::Circ => "circ",
            Self::Sine => "sine",
            Self::Exp => "exp",
            Self::Back => "back",
            Self::Elastic => "elastic",
            Self::Swing => "swing",
            Self::Bounce => "bounce",
            Self::Spring => "spring",
        }
    }

    /// The shape parameter used when none is supplied.
    #[must_use]
    pub const fn default_param(self) -> Option<f64> {
        match self {
            Self::Back => Some(Self::BACK_OVERSHOOT),
            Self::Elastic => Some(Self::ELASTIC_PERIOD),
            _ => None,
        }
    }

    /// Evaluates the ease-in form of this curve.
    ///
    /// No endpoint correction is applied here; see
    /// [`EasingSpec::evaluate`](crate::EasingSpec::evaluate).
    #[must_use]
    pub fn ease_in(self, t: f64, param: Option<f64>) -> f64 {
        match self {
            Self::Linear => t,
            Self::Quad => t * t,
            Self::Cubic => t * t * t,
            Self::Quart => t * t * t * t,
            Self::Quint => t * t * t * t * t,
            Self::Circ => 1.0 - libm::sqrt(1.0 - t * t),
            Self::Sine => 1.0 - libm::cos(t * PI / 2.0),
            Self::Exp => {
                if t <= 0.0 {
                    0.0
                } else {
                    libm::pow(2.0, 10.0 * (t - 1.0))
                }
            }
            Self::Back => {
                let s = param.unwrap_or(Self::BACK_OVERSHOOT);
                t * t * ((s + 1.0) * t - s)
            }
            Self::Elastic => {
                let s = param.unwrap_or(Self::ELASTIC_PERIOD);
                -libm::pow(2.0, 10.0 * (t - 1.0)) * libm::sin(((t - 1.0) * 2.0 / s - 0.5) * PI)
            }
            Self::Swing => 0.5 - libm::cos(t * PI) / 2.0,
            Self::Bounce => bounce_in(t),
            Self::Spring => 1.0 - libm::cos(t * 4.5 * PI) * libm::exp(-t * 6.0),
        }
    }
}

/// `121 / 16`: makes each parabola reach zero exactly at its breakpoints.
const BOUNCE_K: f64 = 7.5625;

fn bounce_in(t: f64) -> f64 {
    let piece = |peak: f64, center: f64| peak - BOUNCE_K * (center - t) * (center - t);
    if t < 1.0 / 11.0 {
        piece(1.0 / 64.0, 0.5 / 11.0)
    } else if t < 3.0 / 11.0 {
        piece(1.0 / 16.0, 2.0 / 11.0)
    } else if t < 7.0 / 11.0 {
        piece(1.0 / 4.0, 5.0 / 11.0)
    } else {
        piece(1.0, 1.0)
    }
}
