// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll activity: start, progress and end of one scroll gesture.
//!
//! Native scroll notifications neither say when a gesture begins nor when
//! momentum scrolling has stopped. This state machine derives both from the
//! input that causes scrolling and from polling the scroll offset.
//!
//! ## Usage
//!
//! 1) Call [`ScrollState::on_wheel`] for wheel input on the region, and
//!    [`ScrollState::on_touch_start`] / [`ScrollState::on_touch_move`] /
//!    [`ScrollState::on_touch_end`] for touch input. The first movement returns
//!    [`ScrollEvent::Start`]; begin polling once per frame.
//! 2) On each frame, call [`ScrollState::on_timer`] first and then
//!    [`ScrollState::poll`] with the current offset.
//! 3) When [`ScrollEvent::End`] is returned, stop polling.
//!
//! The debounce deadline is reported by [`ScrollState::deadline`] so hosts
//! with a timer facility can wake up for it even without frames.

use kurbo::Vec2;

/// Scroll detection tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ScrollConfig {
    /// Quiet period after which scrolling is considered finished, in ms.
    pub debounce_ms: f64,
    /// Offset change (per axis, exclusive) below which a frame counts as quiet.
    pub min_delta: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 100.0,
            min_delta: 1.0,
        }
    }
}

/// Whether a scroll gesture is in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScrollPhase {
    /// Nothing is scrolling.
    #[default]
    Idle,
    /// A gesture is in progress; the offset should be polled every frame.
    Active,
}

/// Synthetic scroll notifications.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollEvent {
    /// Scrolling began.
    Start,
    /// The offset moved to the given value.
    Scroll(Vec2),
    /// Scrolling has been quiet for the debounce window.
    End,
}

/// Per-region scroll state machine.
#[derive(Clone, Debug, Default)]
pub struct ScrollState {
    config: ScrollConfig,
    phase: ScrollPhase,
    last_offset: Vec2,
    deadline: Option<f64>,
    touch_listening: bool,
}

impl ScrollState {
    /// Creates an idle state machine.
    #[must_use]
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    /// Returns `true` while a gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == ScrollPhase::Active
    }

    /// Last offset recorded by the start or by a qualifying poll.
    #[must_use]
    pub fn last_offset(&self) -> Vec2 {
        self.last_offset
    }

    /// Time at which scrolling ends unless the offset moves again.
    #[must_use]
    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }

    /// Returns `true` between a touch start on the region and the next touch
    /// end anywhere, while moves are being watched.
    #[must_use]
    pub fn is_touch_listening(&self) -> bool {
        self.touch_listening
    }

    /// Handles wheel or trackpad input over the region.
    pub fn on_wheel(&mut self, offset: Vec2) -> Option<ScrollEvent> {
        self.begin(offset)
    }

    /// Handles a touch start on the region. Returns `true` if move and end
    /// listeners should now be installed (they were not already).
    pub fn on_touch_start(&mut self) -> bool {
        !core::mem::replace(&mut self.touch_listening, true)
    }

    /// Handles a touch move anywhere while listening.
    pub fn on_touch_move(&mut self, offset: Vec2) -> Option<ScrollEvent> {
        if !self.touch_listening {
            return None;
        }
        self.begin(offset)
    }

    /// Handles a touch end anywhere. Returns `true` if the move and end
    /// listeners should now be removed.
    ///
    /// An active gesture keeps running so momentum scrolling is still seen.
    pub fn on_touch_end(&mut self) -> bool {
        core::mem::replace(&mut self.touch_listening, false)
    }

    /// Compares the current `offset` to the last recorded one.
    ///
    /// A move beyond [`ScrollConfig::min_delta`] on either axis yields
    /// [`ScrollEvent::Scroll`] and clears the debounce deadline. A quiet frame
    /// arms the deadline if none is pending.
    pub fn poll(&mut self, now: f64, offset: Vec2) -> Option<ScrollEvent> {
        if !self.is_active() {
            return None;
        }
        let delta = offset - self.last_offset;
        if delta.x.abs() > self.config.min_delta || delta.y.abs() > self.config.min_delta {
            self.deadline = None;
            self.last_offset = offset;
            return Some(ScrollEvent::Scroll(offset));
        }
        if self.deadline.is_none() {
            self.deadline = Some(now + self.config.debounce_ms);
        }
        None
    }

    /// Ends the gesture if the debounce deadline has passed.
    pub fn on_timer(&mut self, now: f64) -> Option<ScrollEvent> {
        match self.deadline {
            Some(deadline) if self.is_active() && now >= deadline => {
                self.phase = ScrollPhase::Idle;
                self.deadline = None;
                log::debug!("scroll ended at {now} ms");
                Some(ScrollEvent::End)
            }
            _ => None,
        }
    }

    /// Returns to idle without emitting anything.
    pub fn reset(&mut self) {
        self.phase = ScrollPhase::Idle;
        self.deadline = None;
        self.touch_listening = false;
    }

    fn begin(&mut self, offset: Vec2) -> Option<ScrollEvent> {
        if self.is_active() {
            return None;
        }
        self.phase = ScrollPhase::Active;
        self.last_offset = offset;
        self.deadline = None;
        log::debug!("scroll started at offset {offset:?}");
        Some(ScrollEvent::Start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ScrollState {
        ScrollState::new(ScrollConfig::default())
    }

    #[test]
    fn wheel_starts_once() {
        let mut scroll = state();
        assert_eq!(scroll.on_wheel(Vec2::new(0.0, 10.0)), Some(ScrollEvent::Start));
        assert_eq!(scroll.on_wheel(Vec2::new(0.0, 20.0)), None);
        assert!(scroll.is_active());
        assert_eq!(scroll.last_offset(), Vec2::new(0.0, 10.0));
    }

    #[test]
    fn steady_movement_then_quiet_ends_once() {
        let mut scroll = state();
        let mut events = [0_usize; 3];
        let mut record = |e: Option<ScrollEvent>| match e {
            Some(ScrollEvent::Start) => events[0] += 1,
            Some(ScrollEvent::Scroll(_)) => events[1] += 1,
            Some(ScrollEvent::End) => events[2] += 1,
            None => {}
        };

        record(scroll.on_wheel(Vec2::ZERO));
        let mut now = 0.0;
        for i in 1..=5 {
            now += 20.0;
            record(scroll.on_timer(now));
            record(scroll.poll(now, Vec2::new(0.0, 5.0 * f64::from(i))));
        }
        for _ in 0..8 {
            now += 20.0;
            record(scroll.on_timer(now));
            record(scroll.poll(now, Vec2::new(0.0, 25.0)));
        }

        assert_eq!(events, [1, 5, 1]);
        assert!(!scroll.is_active());
    }

    #[test]
    fn small_jitter_does_not_reset_debounce() {
        let mut scroll = state();
        scroll.on_wheel(Vec2::ZERO);
        assert_eq!(scroll.poll(0.0, Vec2::new(0.0, 0.5)), None);
        assert_eq!(scroll.deadline(), Some(100.0));
        assert_eq!(scroll.poll(50.0, Vec2::new(0.0, 1.0)), None);
        assert_eq!(scroll.deadline(), Some(100.0));
        assert_eq!(scroll.on_timer(99.0), None);
        assert_eq!(scroll.on_timer(100.0), Some(ScrollEvent::End));
    }

    #[test]
    fn movement_clears_pending_deadline() {
        let mut scroll = state();
        scroll.on_wheel(Vec2::ZERO);
        scroll.poll(0.0, Vec2::ZERO);
        assert_eq!(scroll.deadline(), Some(100.0));

        assert_eq!(
            scroll.poll(60.0, Vec2::new(4.0, 0.0)),
            Some(ScrollEvent::Scroll(Vec2::new(4.0, 0.0)))
        );
        assert_eq!(scroll.deadline(), None);
        assert_eq!(scroll.on_timer(120.0), None);
        assert!(scroll.is_active());
    }

    #[test]
    fn idle_state_ignores_polls_and_timers() {
        let mut scroll = state();
        assert_eq!(scroll.poll(0.0, Vec2::new(0.0, 50.0)), None);
        assert_eq!(scroll.on_timer(1000.0), None);
        assert_eq!(scroll.phase(), ScrollPhase::Idle);
    }

    #[test]
    fn touch_moves_only_count_while_listening() {
        let mut scroll = state();
        assert_eq!(scroll.on_touch_move(Vec2::ZERO), None);

        assert!(scroll.on_touch_start());
        assert!(!scroll.on_touch_start());
        assert_eq!(scroll.on_touch_move(Vec2::ZERO), Some(ScrollEvent::Start));

        assert!(scroll.on_touch_end());
        assert!(!scroll.is_touch_listening());
        // Momentum scrolling keeps the gesture alive after the finger lifts.
        assert!(scroll.is_active());
        assert!(!scroll.on_touch_end());
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut scroll = state();
        scroll.on_touch_start();
        scroll.on_touch_move(Vec2::ZERO);
        scroll.reset();
        assert!(!scroll.is_active());
        assert!(!scroll.is_touch_listening());
        assert_eq!(scroll.deadline(), None);
    }
}
