// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(feature = "toml")]
use alloc::string::{String, ToString};

use tactile_coords::ResizeConfig;
use tactile_event_state::click::ClickConfig;
use tactile_event_state::scroll::ScrollConfig;
use tactile_timing::FrameSource;

/// Tuning for every recognizer owned by [`Gestures`](crate::Gestures).
///
/// The defaults are the usual browser values: 2 px mouse and 5 px touch click
/// tolerance, a 100 ms scroll debounce with a 1 px movement threshold, 100 ms
/// resize throttling and display-synchronized frames.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GestureConfig {
    /// Click tolerances.
    pub click: ClickConfig,
    /// Scroll activity detection.
    pub scroll: ScrollConfig,
    /// Viewport resize filtering.
    pub resize: ResizeConfig,
    /// What drives scheduler ticks.
    pub frame: FrameSource,
}

/// A rejected [`GestureConfig`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A value that must be strictly positive was not.
    #[error("`{field}` must be a positive finite number, got {value}")]
    NotPositive {
        /// Dotted path of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A value that must not be negative was.
    #[error("`{field}` must be a non-negative finite number, got {value}")]
    Negative {
        /// Dotted path of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The configuration text could not be parsed.
    #[cfg(feature = "toml")]
    #[error("failed to parse gesture config: {0}")]
    Parse(String),
}

impl GestureConfig {
    /// Checks that every duration and distance is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("click.mouse_tolerance", self.click.mouse_tolerance)?;
        positive("click.touch_tolerance", self.click.touch_tolerance)?;
        positive("scroll.debounce_ms", self.scroll.debounce_ms)?;
        non_negative("scroll.min_delta", self.scroll.min_delta)?;
        non_negative("resize.throttle_ms", self.resize.throttle_ms)?;
        non_negative("resize.small_viewport", self.resize.small_viewport)?;
        if let Some(interval) = self.frame.interval() {
            positive("frame.interval_ms", interval)?;
        }
        Ok(())
    }

    /// Parses and validates a TOML document. Missing fields keep their
    /// defaults.
    ///
    /// ```rust
    /// use tactile::GestureConfig;
    ///
    /// let config = GestureConfig::from_toml_str(
    ///     r#"
    ///     [scroll]
    ///     debounce_ms = 150.0
    ///
    ///     [frame]
    ///     kind = "timer"
    ///     interval_ms = 20.0
    ///     "#,
    /// )
    /// .unwrap();
    /// assert_eq!(config.scroll.debounce_ms, 150.0);
    /// assert_eq!(config.click, Default::default());
    /// ```
    #[cfg(feature = "toml")]
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GestureConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.click.mouse_tolerance, 2.0);
        assert_eq!(config.click.touch_tolerance, 5.0);
        assert_eq!(config.scroll.debounce_ms, 100.0);
        assert_eq!(config.resize.throttle_ms, 100.0);
        assert_eq!(config.frame, FrameSource::Display);
    }

    #[test]
    fn rejects_zero_tolerance_and_bad_timer() {
        let mut config = GestureConfig::default();
        config.click.touch_tolerance = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "click.touch_tolerance",
                value: 0.0
            })
        );

        let mut config = GestureConfig::default();
        config.frame = FrameSource::Timer { interval_ms: -5.0 };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "frame.interval_ms",
                ..
            })
        ));
    }

    #[test]
    fn rejects_negative_threshold() {
        let mut config = GestureConfig::default();
        config.scroll.min_delta = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { field: "scroll.min_delta", .. })
        ));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn toml_errors_are_reported() {
        assert!(matches!(
            GestureConfig::from_toml_str("click = 3"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GestureConfig::from_toml_str("[scroll]\ndebounce_ms = 0.0"),
            Err(ConfigError::NotPositive { .. })
        ));
    }
}
