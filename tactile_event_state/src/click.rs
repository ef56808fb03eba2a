// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click recognition across mouse and touch input.
//!
//! A press followed by a release close to the press point is a click; anything
//! that moved further is a drag or scroll and produces nothing.
//!
//! ## Rules
//!
//! - Mouse: the release must be within [`ClickConfig::mouse_tolerance`] of the
//!   press on both axes (strictly less than).
//! - Touch: only single-finger sessions qualify. A second concurrent touch
//!   disqualifies the session, and the release must report exactly one changed
//!   touch within [`ClickConfig::touch_tolerance`].
//! - Touch devices follow a tap with emulated mouse events. Every touch start
//!   therefore arms a guard that swallows the next mouse press and the next
//!   mouse release; the release consumes the guard.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use tactile_event_state::click::{ClickConfig, ClickResult, ClickState};
//!
//! let mut clicks = ClickState::new(ClickConfig::default());
//!
//! // A tap...
//! clicks.on_touch_start(1, Point::new(50.0, 50.0));
//! let tap = clicks.on_touch_end(&[Point::new(52.0, 49.0)]);
//! assert!(matches!(tap, ClickResult::Click { .. }));
//!
//! // ...and the emulated mouse events that follow it.
//! assert!(!clicks.on_mouse_down(Point::new(52.0, 49.0)));
//! assert_eq!(clicks.on_mouse_up(Point::new(52.0, 49.0)), ClickResult::Suppressed);
//! ```

use kurbo::Point;

/// Movement tolerances for click recognition, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ClickConfig {
    /// Maximum per-axis distance between mouse press and release, exclusive.
    pub mouse_tolerance: f64,
    /// Maximum per-axis distance between touch start and end, exclusive.
    pub touch_tolerance: f64,
}

impl Default for ClickConfig {
    fn default() -> Self {
        Self {
            mouse_tolerance: 2.0,
            touch_tolerance: 5.0,
        }
    }
}

/// Input that opened a click session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// A mouse button press.
    Mouse,
    /// A single-finger touch.
    Touch,
}

/// A press waiting for its release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickSession {
    /// Where the press happened.
    pub origin: Point,
    /// What kind of input pressed.
    pub kind: InputKind,
}

/// Outcome of a release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClickResult {
    /// The press and release form a click.
    Click {
        /// Press position.
        origin: Point,
        /// Release position.
        release: Point,
        /// Input that produced the click.
        kind: InputKind,
    },
    /// The pointer moved too far between press and release.
    Moved,
    /// A mouse release swallowed after a touch interaction.
    Suppressed,
    /// There was no qualifying press to release.
    NoSession,
}

/// Per-element click recognizer.
#[derive(Clone, Debug, Default)]
pub struct ClickState {
    config: ClickConfig,
    session: Option<ClickSession>,
    suppress_mouse: bool,
}

impl ClickState {
    /// Creates an idle recognizer.
    #[must_use]
    pub fn new(config: ClickConfig) -> Self {
        Self {
            config,
            session: None,
            suppress_mouse: false,
        }
    }

    /// Returns the tolerances in use.
    #[must_use]
    pub fn config(&self) -> ClickConfig {
        self.config
    }

    /// The press awaiting release, if any.
    #[must_use]
    pub fn session(&self) -> Option<ClickSession> {
        self.session
    }

    /// Returns `true` while the next mouse press/release pair will be ignored.
    #[must_use]
    pub fn is_suppressing_mouse(&self) -> bool {
        self.suppress_mouse
    }

    /// Handles a mouse press. Returns `false` if it was suppressed.
    pub fn on_mouse_down(&mut self, position: Point) -> bool {
        if self.suppress_mouse {
            log::debug!("ignoring mouse press that follows a touch");
            return false;
        }
        self.session = Some(ClickSession {
            origin: position,
            kind: InputKind::Mouse,
        });
        true
    }

    /// Handles a mouse release.
    pub fn on_mouse_up(&mut self, position: Point) -> ClickResult {
        if self.suppress_mouse {
            self.suppress_mouse = false;
            log::debug!("ignoring mouse release that follows a touch");
            return ClickResult::Suppressed;
        }
        let tolerance = self.config.mouse_tolerance;
        self.finish(position, tolerance)
    }

    /// Handles a touch start.
    ///
    /// `active_touches` is the number of fingers now down, including the new
    /// one; `position` is the changed touch.
    pub fn on_touch_start(&mut self, active_touches: usize, position: Point) {
        self.suppress_mouse = true;
        if active_touches == 1 {
            self.session = Some(ClickSession {
                origin: position,
                kind: InputKind::Touch,
            });
        } else if self.session.take().is_some() {
            log::debug!("second touch disqualified click session");
        }
    }

    /// Handles a touch end with the touches that were lifted.
    pub fn on_touch_end(&mut self, changed: &[Point]) -> ClickResult {
        match changed {
            [position] => {
                let tolerance = self.config.touch_tolerance;
                self.finish(*position, tolerance)
            }
            _ => {
                self.session = None;
                ClickResult::NoSession
            }
        }
    }

    /// Handles a touch cancel.
    pub fn on_touch_cancel(&mut self) {
        self.session = None;
    }

    /// Drops any pending press and the mouse guard.
    pub fn reset(&mut self) {
        self.session = None;
        self.suppress_mouse = false;
    }

    fn finish(&mut self, release: Point, tolerance: f64) -> ClickResult {
        let Some(session) = self.session.take() else {
            return ClickResult::NoSession;
        };
        let within = (release.x - session.origin.x).abs() < tolerance
            && (release.y - session.origin.y).abs() < tolerance;
        if within {
            ClickResult::Click {
                origin: session.origin,
                release,
                kind: session.kind,
            }
        } else {
            ClickResult::Moved
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ClickState {
        ClickState::new(ClickConfig::default())
    }

    #[test]
    fn small_mouse_movement_clicks() {
        let mut clicks = state();
        assert!(clicks.on_mouse_down(Point::new(100.0, 100.0)));
        let result = clicks.on_mouse_up(Point::new(101.0, 101.0));
        assert_eq!(
            result,
            ClickResult::Click {
                origin: Point::new(100.0, 100.0),
                release: Point::new(101.0, 101.0),
                kind: InputKind::Mouse,
            }
        );
        assert_eq!(clicks.session(), None);
    }

    #[test]
    fn mouse_movement_past_tolerance_does_not_click() {
        let mut clicks = state();
        clicks.on_mouse_down(Point::new(100.0, 100.0));
        assert_eq!(clicks.on_mouse_up(Point::new(103.0, 100.0)), ClickResult::Moved);

        // The tolerance is exclusive.
        clicks.on_mouse_down(Point::new(100.0, 100.0));
        assert_eq!(clicks.on_mouse_up(Point::new(100.0, 102.0)), ClickResult::Moved);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut clicks = state();
        assert_eq!(clicks.on_mouse_up(Point::ZERO), ClickResult::NoSession);
        assert_eq!(clicks.on_touch_end(&[Point::ZERO]), ClickResult::NoSession);
    }

    #[test]
    fn touch_uses_wider_tolerance() {
        let mut clicks = state();
        clicks.on_touch_start(1, Point::new(10.0, 10.0));
        let result = clicks.on_touch_end(&[Point::new(14.0, 6.0)]);
        assert!(matches!(
            result,
            ClickResult::Click {
                kind: InputKind::Touch,
                ..
            }
        ));

        clicks.on_touch_start(1, Point::new(10.0, 10.0));
        assert_eq!(clicks.on_touch_end(&[Point::new(15.0, 10.0)]), ClickResult::Moved);
    }

    #[test]
    fn second_touch_disqualifies_session() {
        let mut clicks = state();
        clicks.on_touch_start(1, Point::new(10.0, 10.0));
        clicks.on_touch_start(2, Point::new(80.0, 80.0));
        assert_eq!(clicks.session(), None);
        assert_eq!(clicks.on_touch_end(&[Point::new(10.0, 10.0)]), ClickResult::NoSession);
    }

    #[test]
    fn multi_touch_release_does_not_click() {
        let mut clicks = state();
        clicks.on_touch_start(1, Point::new(10.0, 10.0));
        let lifted = [Point::new(10.0, 10.0), Point::new(40.0, 40.0)];
        assert_eq!(clicks.on_touch_end(&lifted), ClickResult::NoSession);
    }

    #[test]
    fn touch_cancel_drops_session() {
        let mut clicks = state();
        clicks.on_touch_start(1, Point::new(10.0, 10.0));
        clicks.on_touch_cancel();
        assert_eq!(clicks.on_touch_end(&[Point::new(10.0, 10.0)]), ClickResult::NoSession);
    }

    #[test]
    fn trailing_mouse_pair_after_tap_is_swallowed_once() {
        let mut clicks = state();
        let p = Point::new(30.0, 30.0);

        clicks.on_touch_start(1, p);
        assert!(matches!(clicks.on_touch_end(&[p]), ClickResult::Click { .. }));
        assert!(clicks.is_suppressing_mouse());

        assert!(!clicks.on_mouse_down(p));
        assert_eq!(clicks.on_mouse_up(p), ClickResult::Suppressed);
        assert!(!clicks.is_suppressing_mouse());

        // A later genuine mouse click is recognized again.
        assert!(clicks.on_mouse_down(p));
        assert!(matches!(clicks.on_mouse_up(p), ClickResult::Click { .. }));
    }

    #[test]
    fn reset_clears_guard_and_session() {
        let mut clicks = state();
        clicks.on_touch_start(1, Point::ZERO);
        clicks.reset();
        assert_eq!(clicks.session(), None);
        assert!(!clicks.is_suppressing_mouse());
        assert_eq!(clicks.config(), ClickConfig::default());
    }
}
