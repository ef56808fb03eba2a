// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Easing: named easing curves for transitions.
//!
//! An easing maps normalized time `t ∈ [0, 1]` to normalized progress. Every
//! curve is defined by its "ease in" form; the [`Direction`] composes it into
//! ease-out or symmetric ease-in-out.
//!
//! Names follow the `<shape>[-in|-out]` convention: `"cubic-in"`,
//! `"bounce-out"`, and `"sine"` (no suffix means in-out). Unknown shapes fall
//! back to the identity curve instead of failing.
//!
//! The endpoints are exact for every curve: `ease(_, 0.0, _) == 0.0` and
//! `ease(_, 1.0, _) == 1.0`, regardless of floating-point error inside the
//! curve formulas.
//!
//! ## Minimal example
//!
//! ```rust
//! use tactile_easing::{Curve, Direction, EasingSpec, ease};
//!
//! assert_eq!(ease("quad-in", 0.5, None), 0.25);
//! assert_eq!(ease("quad-out", 0.5, None), 0.75);
//! assert_eq!(ease("elastic", 1.0, Some(0.4)), 1.0);
//!
//! // The typed form avoids re-parsing names in hot loops.
//! let spec = EasingSpec::new(Curve::Cubic, Direction::In);
//! assert_eq!(spec.evaluate(0.5), 0.125);
//! assert_eq!(EasingSpec::parse("cubic-in"), spec);
//! ```

#![no_std]

mod curve;
mod spec;

pub use curve::Curve;
pub use spec::{Direction, EasingSpec};

/// Evaluates the easing called `name` at time `t`.
///
/// `param` overrides the curve's shape parameter (the overshoot of `back`, the
/// period of `elastic`); curves without a parameter ignore it.
#[must_use]
pub fn ease(name: &str, t: f64, param: Option<f64>) -> f64 {
    EasingSpec::parse(name).with_param(param).evaluate(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUFFIXES: [&str; 3] = ["", "-in", "-out"];

    fn for_each_name(mut f: impl FnMut(&str)) {
        let mut buf = [0_u8; 32];
        for curve in Curve::ALL {
            for suffix in SUFFIXES {
                let name = curve.name();
                let len = name.len() + suffix.len();
                buf[..name.len()].copy_from_slice(name.as_bytes());
                buf[name.len()..len].copy_from_slice(suffix.as_bytes());
                f(core::str::from_utf8(&buf[..len]).unwrap());
            }
        }
    }

    #[test]
    fn endpoints_are_exact_for_every_curve() {
        for_each_name(|name| {
            assert_eq!(ease(name, 0.0, None), 0.0, "{name} at 0");
            assert_eq!(ease(name, 1.0, None), 1.0, "{name} at 1");
            assert_eq!(ease(name, 0.0, Some(2.5)), 0.0, "{name} at 0 with param");
            assert_eq!(ease(name, 1.0, Some(2.5)), 1.0, "{name} at 1 with param");
        });
        assert_eq!(ease("no-such-curve", 0.0, None), 0.0);
        assert_eq!(ease("", 1.0, None), 1.0);
    }

    #[test]
    fn bounce_in_is_continuous_at_breakpoints() {
        for b in [1.0 / 11.0, 3.0 / 11.0, 7.0 / 11.0] {
            let left = ease("bounce-in", b - 1e-9, None);
            let right = ease("bounce-in", b + 1e-9, None);
            let at = ease("bounce-in", b, None);
            assert!((left - right).abs() < 1e-6, "jump at {b}: {left} vs {right}");
            assert!((left - at).abs() < 1e-6, "jump at {b}: {left} vs {at}");
        }
    }

    #[test]
    fn in_out_is_point_symmetric() {
        for curve in Curve::ALL {
            for i in 1..10 {
                let t = f64::from(i) / 10.0;
                let a = ease(curve.name(), t, None);
                let b = ease(curve.name(), 1.0 - t, None);
                assert!((a + b - 1.0).abs() < 1e-9, "{curve:?} at {t}");
            }
        }
    }

    #[test]
    fn unknown_shapes_are_identity() {
        assert_eq!(ease("wobble", 0.3, None), 0.3);
        assert_eq!(ease("wobble-in", 0.3, None), 0.3);
        assert!((ease("wobble-out", 0.3, None) - 0.3).abs() < 1e-12);
        assert_eq!(ease("linear", 0.75, None), 0.75);
    }

    #[test]
    fn in_out_halves_use_scaled_ease_in() {
        assert_eq!(ease("quad", 0.25, None), 0.125);
        assert_eq!(ease("quad", 0.75, None), 0.875);
        assert_eq!(ease("cubic", 0.5, None), 0.5);
    }

    #[test]
    fn shape_parameter_changes_back_overshoot() {
        let default = ease("back-in", 0.2, None);
        let gentle = ease("back-in", 0.2, Some(0.5));
        assert!(default < 0.0);
        assert!(gentle > default);
        assert_eq!(ease("back-in", 0.2, Some(1.70158)), default);
    }
}
