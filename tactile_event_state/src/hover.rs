// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer enter/leave/over tracking for a single element.
//!
//! The caller hit-tests the pointer against the element on every move and
//! feeds the result to [`HoverState::update`]. The state starts out unknown:
//! the first hit inside only reports [`HoverEvent::Over`], since whether the
//! pointer actually crossed the boundary cannot be known.

use smallvec::SmallVec;

/// Hover notifications, in the order they should be delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    /// The pointer crossed into the element.
    Enter,
    /// The pointer crossed out of the element.
    Leave,
    /// The pointer moved while inside the element.
    Over,
}

/// Events produced by one update. Never more than two.
pub type HoverEvents = SmallVec<[HoverEvent; 2]>;

/// Per-element hover tracker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    over: Option<bool>,
}

impl HoverState {
    /// Creates a tracker with no knowledge of the pointer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known inside/outside state, or `None` when unknown.
    #[must_use]
    pub fn is_over(&self) -> Option<bool> {
        self.over
    }

    /// Applies a hit-test result and returns the transitions it causes.
    pub fn update(&mut self, inside: bool) -> HoverEvents {
        let previous = self.over.replace(inside);
        let mut events = HoverEvents::new();
        match (previous, inside) {
            (Some(false), true) => {
                events.push(HoverEvent::Enter);
                events.push(HoverEvent::Over);
            }
            (_, true) => events.push(HoverEvent::Over),
            (Some(true), false) => events.push(HoverEvent::Leave),
            (_, false) => {}
        }
        events
    }

    /// Forgets the pointer, e.g. when it is lifted.
    pub fn reset(&mut self) {
        self.over = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_to_inside_is_over_only() {
        let mut hover = HoverState::new();
        assert_eq!(hover.update(true).as_slice(), &[HoverEvent::Over]);
        assert_eq!(hover.is_over(), Some(true));
    }

    #[test]
    fn unknown_to_outside_is_silent() {
        let mut hover = HoverState::new();
        assert!(hover.update(false).is_empty());
        assert!(hover.update(false).is_empty());
    }

    #[test]
    fn crossing_in_and_out() {
        let mut hover = HoverState::new();
        hover.update(false);
        assert_eq!(
            hover.update(true).as_slice(),
            &[HoverEvent::Enter, HoverEvent::Over]
        );
        assert_eq!(hover.update(true).as_slice(), &[HoverEvent::Over]);
        assert_eq!(hover.update(false).as_slice(), &[HoverEvent::Leave]);
        assert!(hover.update(false).is_empty());
    }

    #[test]
    fn reset_forgets_state() {
        let mut hover = HoverState::new();
        hover.update(false);
        hover.reset();
        assert_eq!(hover.is_over(), None);
        assert_eq!(hover.update(true).as_slice(), &[HoverEvent::Over]);
    }
}
