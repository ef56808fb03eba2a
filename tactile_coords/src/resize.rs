// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// Tuning for [`ResizeFilter`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ResizeConfig {
    /// Minimum time between delivered resizes, in milliseconds.
    pub throttle_ms: f64,
    /// Viewports with both sides below this many pixels ignore height-only
    /// changes, which on phones come from the browser chrome collapsing.
    pub small_viewport: f64,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            throttle_ms: 100.0,
            small_viewport: 800.0,
        }
    }
}

/// Throttles raw viewport resize notifications.
///
/// The first resize in a quiet period is delivered immediately; later ones
/// within [`ResizeConfig::throttle_ms`] are coalesced and delivered by
/// [`poll`](Self::poll) once the window has passed.
///
/// ```rust
/// use kurbo::Size;
/// use tactile_coords::{ResizeConfig, ResizeFilter};
///
/// let mut filter = ResizeFilter::new(ResizeConfig::default());
/// assert_eq!(filter.on_resize(0.0, Size::new(1024.0, 768.0)), Some(Size::new(1024.0, 768.0)));
/// assert_eq!(filter.on_resize(30.0, Size::new(1000.0, 768.0)), None);
/// assert_eq!(filter.poll(60.0), None);
/// assert_eq!(filter.poll(100.0), Some(Size::new(1000.0, 768.0)));
/// ```
#[derive(Clone, Debug)]
pub struct ResizeFilter {
    config: ResizeConfig,
    width: Option<f64>,
    last_delivery: Option<f64>,
    pending: Option<Size>,
}

impl ResizeFilter {
    /// Creates a filter that has not seen any viewport size yet.
    #[must_use]
    pub fn new(config: ResizeConfig) -> Self {
        Self {
            config,
            width: None,
            last_delivery: None,
            pending: None,
        }
    }

    /// Creates a filter for a viewport that is currently `size`.
    ///
    /// A height-only change on a small viewport is then ignored even when it
    /// is the first resize seen.
    #[must_use]
    pub fn with_initial(config: ResizeConfig, size: Size) -> Self {
        Self {
            width: Some(size.width),
            ..Self::new(config)
        }
    }

    /// Feeds a raw resize at time `now`; returns the size to act on, if any.
    pub fn on_resize(&mut self, now: f64, size: Size) -> Option<Size> {
        if self.in_window(now) {
            self.pending = Some(size);
            return None;
        }
        self.pending = None;
        self.last_delivery = Some(now);
        self.accept(size)
    }

    /// Delivers a coalesced resize once the throttle window has passed.
    pub fn poll(&mut self, now: f64) -> Option<Size> {
        if self.pending.is_none() || self.in_window(now) {
            return None;
        }
        let size = self.pending.take()?;
        self.last_delivery = Some(now);
        self.accept(size)
    }

    /// Time at which [`poll`](Self::poll) will deliver a pending resize.
    #[must_use]
    pub fn next_deadline(&self) -> Option<f64> {
        self.pending?;
        self.last_delivery.map(|t| t + self.config.throttle_ms)
    }

    fn in_window(&self, now: f64) -> bool {
        self.last_delivery
            .is_some_and(|t| now - t < self.config.throttle_ms)
    }

    fn accept(&mut self, size: Size) -> Option<Size> {
        let small = self.config.small_viewport;
        if self.width == Some(size.width) && size.width < small && size.height < small {
            log::trace!("ignoring height-only resize to {size:?}");
            return None;
        }
        self.width = Some(size.width);
        Some(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_resize_is_delivered() {
        let mut filter = ResizeFilter::new(ResizeConfig::default());
        let size = Size::new(390.0, 700.0);
        assert_eq!(filter.on_resize(5.0, size), Some(size));
        assert_eq!(filter.next_deadline(), None);
    }

    #[test]
    fn bursts_are_coalesced_into_the_latest_size() {
        let mut filter = ResizeFilter::new(ResizeConfig::default());
        filter.on_resize(0.0, Size::new(1200.0, 900.0));
        assert_eq!(filter.on_resize(10.0, Size::new(1100.0, 900.0)), None);
        assert_eq!(filter.on_resize(20.0, Size::new(1000.0, 900.0)), None);
        assert_eq!(filter.next_deadline(), Some(100.0));

        assert_eq!(filter.poll(99.0), None);
        assert_eq!(filter.poll(100.0), Some(Size::new(1000.0, 900.0)));
        assert_eq!(filter.poll(300.0), None);
    }

    #[test]
    fn small_viewport_height_only_change_is_ignored() {
        let mut filter = ResizeFilter::new(ResizeConfig::default());
        filter.on_resize(0.0, Size::new(390.0, 700.0));
        assert_eq!(filter.on_resize(500.0, Size::new(390.0, 760.0)), None);

        // A width change on the same device is still delivered.
        assert_eq!(
            filter.on_resize(1000.0, Size::new(700.0, 390.0)),
            Some(Size::new(700.0, 390.0))
        );
    }

    #[test]
    fn known_initial_width_filters_the_first_resize() {
        let config = ResizeConfig::default();
        let mut filter = ResizeFilter::with_initial(config, Size::new(390.0, 700.0));
        assert_eq!(filter.on_resize(0.0, Size::new(390.0, 760.0)), None);
        assert_eq!(filter.next_deadline(), None);

        // Without a known size the same change is delivered.
        let mut filter = ResizeFilter::new(config);
        assert_eq!(
            filter.on_resize(0.0, Size::new(390.0, 760.0)),
            Some(Size::new(390.0, 760.0))
        );
    }

    #[test]
    fn large_viewport_height_only_change_is_delivered() {
        let mut filter = ResizeFilter::new(ResizeConfig::default());
        filter.on_resize(0.0, Size::new(1280.0, 900.0));
        assert_eq!(
            filter.on_resize(500.0, Size::new(1280.0, 700.0)),
            Some(Size::new(1280.0, 700.0))
        );
    }
}
