// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide tracking: press on an element, move anywhere, release.
//!
//! ## Usage
//!
//! 1) Call [`SlideState::start`] with the element-relative press position.
//! 2) On each move, call [`SlideState::update`]; it returns a [`SlideStep`]
//!    with the new position, the delta since the previous one and the start.
//! 3) On release, call [`SlideState::end`] to get the final [`SlideSummary`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use tactile_event_state::slide::SlideState;
//!
//! let mut slide = SlideState::default();
//! slide.start(Point::new(10.0, 20.0));
//!
//! let step = slide.update(Point::new(15.0, 26.0)).unwrap();
//! assert_eq!(step.delta, Vec2::new(5.0, 6.0));
//! assert_eq!(step.start, Point::new(10.0, 20.0));
//!
//! let done = slide.end().unwrap();
//! assert_eq!(done.last, Point::new(15.0, 26.0));
//! assert!(!slide.is_sliding());
//! ```

use kurbo::{Point, Vec2};

/// One movement of an ongoing slide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideStep {
    /// Current position.
    pub position: Point,
    /// Movement since the previous position.
    pub delta: Vec2,
    /// Where the slide started.
    pub start: Point,
}

impl SlideStep {
    /// Offset from the start position.
    #[must_use]
    pub fn total(&self) -> Vec2 {
        self.position - self.start
    }
}

/// A finished slide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideSummary {
    /// Last position seen before release.
    pub last: Point,
    /// Where the slide started.
    pub start: Point,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Active {
    start: Point,
    last: Point,
}

/// Per-element slide tracker.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SlideState {
    active: Option<Active>,
}

impl SlideState {
    /// Begins a slide at `position`, replacing any slide in progress.
    pub fn start(&mut self, position: Point) {
        self.active = Some(Active {
            start: position,
            last: position,
        });
    }

    /// Records a move. Returns `None` when no slide is in progress.
    pub fn update(&mut self, position: Point) -> Option<SlideStep> {
        let active = self.active.as_mut()?;
        let delta = position - active.last;
        active.last = position;
        Some(SlideStep {
            position,
            delta,
            start: active.start,
        })
    }

    /// Ends the slide. Returns `None` when no slide was in progress.
    pub fn end(&mut self) -> Option<SlideSummary> {
        self.active.take().map(|a| SlideSummary {
            last: a.last,
            start: a.start,
        })
    }

    /// Start position of the slide in progress.
    #[must_use]
    pub fn start_position(&self) -> Option<Point> {
        self.active.map(|a| a.start)
    }

    /// Returns `true` while a slide is in progress.
    #[must_use]
    pub fn is_sliding(&self) -> bool {
        self.active.is_some()
    }
}
