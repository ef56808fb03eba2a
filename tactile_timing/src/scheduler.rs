// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-synchronous scheduler with cooperative cancellation.
//!
//! ## Usage
//!
//! 1) Create a [`Scheduler`] over a [`Clock`].
//! 2) Call [`Scheduler::start`] with an optional duration and a callback. The
//!    callback runs once immediately and then once per [`Scheduler::tick`].
//! 3) Call [`Scheduler::tick`] from the host's refresh callback (or from a
//!    timer every [`FrameSource::FALLBACK_INTERVAL_MS`] when there is none).
//! 4) Stop early with [`AnimationHandle::cancel`]; the callback is not invoked
//!    again, but a call already in progress completes.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;
use core::fmt;

use crate::Clock;

/// The value delivered to a scheduled callback on each tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// Normalized progress in `[0, 1]` for animations with a duration.
    Progress(f64),
    /// Milliseconds since the animation started, for open-ended animations.
    Elapsed(f64),
}

impl Step {
    /// Returns the raw number carried by this step.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Progress(v) | Self::Elapsed(v) => v,
        }
    }
}

/// What drives [`Scheduler::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum FrameSource {
    /// Ticks follow the display refresh.
    #[default]
    Display,
    /// Ticks come from a fixed-interval timer.
    ///
    /// Motion is visibly coarser than with [`FrameSource::Display`], but this
    /// is an accepted degradation rather than an error.
    Timer {
        /// Interval between ticks in milliseconds.
        interval_ms: f64,
    },
}

impl FrameSource {
    /// Tick interval used when the platform has no refresh callback.
    pub const FALLBACK_INTERVAL_MS: f64 = 20.0;

    /// The timer source used when no display refresh callback exists.
    #[must_use]
    pub const fn timer_fallback() -> Self {
        Self::Timer {
            interval_ms: Self::FALLBACK_INTERVAL_MS,
        }
    }

    /// Returns the timer interval, or `None` for display-synchronized ticks.
    #[must_use]
    pub fn interval(&self) -> Option<f64> {
        match self {
            Self::Display => None,
            Self::Timer { interval_ms } => Some(*interval_ms),
        }
    }
}

#[derive(Debug)]
struct HandleState {
    id: u64,
    start: f64,
    duration: Option<f64>,
    running: Cell<bool>,
}

/// Handle to one scheduled callback.
///
/// Clones refer to the same animation. Cancellation is cooperative: the flag
/// is checked before each invocation, never during one.
#[derive(Clone, Debug)]
pub struct AnimationHandle {
    state: Rc<HandleState>,
}

impl AnimationHandle {
    fn new(id: u64, start: f64, duration: Option<f64>) -> Self {
        Self {
            state: Rc::new(HandleState {
                id,
                start,
                duration,
                running: Cell::new(true),
            }),
        }
    }

    /// Stops future invocations of the callback.
    pub fn cancel(&self) {
        self.state.running.set(false);
    }

    /// Returns `true` until the animation is cancelled or has reached its end.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    /// Clock reading at which the animation started.
    #[must_use]
    pub fn start_time(&self) -> f64 {
        self.state.start
    }

    /// Total duration in milliseconds, if the animation has one.
    #[must_use]
    pub fn duration(&self) -> Option<f64> {
        self.state.duration
    }

    /// Identifier unique within the scheduler that created this handle.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.state.id
    }
}

struct Entry {
    handle: AnimationHandle,
    callback: Box<dyn FnMut(Step)>,
}

impl Entry {
    /// Runs the callback for time `now`; returns whether it should run again.
    fn step(&mut self, now: f64) -> bool {
        if !self.handle.is_running() {
            return false;
        }
        let elapsed = (now - self.handle.start_time()).max(0.0);
        match self.handle.duration() {
            Some(duration) => {
                let progress = if duration > 0.0 {
                    (elapsed / duration).min(1.0)
                } else {
                    1.0
                };
                (self.callback)(Step::Progress(progress));
                if progress >= 1.0 {
                    self.handle.cancel();
                }
            }
            None => (self.callback)(Step::Elapsed(elapsed)),
        }
        self.handle.is_running()
    }
}

/// Runs recurring callbacks once per tick.
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use tactile_timing::{ManualClock, Scheduler, Step};
///
/// let clock = ManualClock::new();
/// let mut scheduler = Scheduler::new(clock.clone());
///
/// let last = Rc::new(Cell::new(0.0));
/// let sink = last.clone();
/// let handle = scheduler.start(None, move |step| sink.set(step.value()));
///
/// clock.advance(30.0);
/// scheduler.tick();
/// assert_eq!(last.get(), 30.0);
///
/// handle.cancel();
/// clock.advance(30.0);
/// assert_eq!(scheduler.tick(), 0);
/// assert_eq!(last.get(), 30.0);
/// ```
pub struct Scheduler<C> {
    clock: C,
    source: FrameSource,
    entries: Vec<Entry>,
    next_id: u64,
}

impl<C: fmt::Debug> fmt::Debug for Scheduler<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("clock", &self.clock)
            .field("source", &self.source)
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl<C: Clock> Scheduler<C> {
    /// Creates a display-synchronized scheduler.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self::with_source(clock, FrameSource::Display)
    }

    /// Creates a scheduler driven by `source`.
    #[must_use]
    pub fn with_source(clock: C, source: FrameSource) -> Self {
        if let FrameSource::Timer { interval_ms } = source {
            log::debug!("no display refresh source; ticking every {interval_ms} ms");
        }
        Self {
            clock,
            source,
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Returns the clock.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Current clock reading in milliseconds.
    #[must_use]
    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    /// Returns the tick source.
    #[must_use]
    pub fn source(&self) -> FrameSource {
        self.source
    }

    /// Interval at which the host should call [`tick`](Self::tick) from a
    /// timer, or `None` when ticks follow the display refresh.
    #[must_use]
    pub fn frame_interval(&self) -> Option<f64> {
        self.source.interval()
    }

    /// Starts a recurring callback.
    ///
    /// The callback runs once right away and then once per tick. With a
    /// `duration` it receives [`Step::Progress`] clamped to `[0, 1]` and stops
    /// after the call that reports `1.0`; a non-positive duration completes on
    /// the first call. Without a duration it receives [`Step::Elapsed`] until
    /// cancelled.
    pub fn start(
        &mut self,
        duration: Option<f64>,
        callback: impl FnMut(Step) + 'static,
    ) -> AnimationHandle {
        let now = self.clock.now();
        let handle = AnimationHandle::new(self.next_id, now, duration);
        self.next_id += 1;

        let mut entry = Entry {
            handle: handle.clone(),
            callback: Box::new(callback),
        };
        if entry.step(now) {
            self.entries.push(entry);
        }
        handle
    }

    /// Advances every live animation by one tick.
    ///
    /// Returns how many callbacks were invoked. Cancelled and completed
    /// animations are dropped without being called.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now();
        let mut ran = 0;
        self.entries.retain_mut(|entry| {
            if !entry.handle.is_running() {
                return false;
            }
            ran += 1;
            entry.step(now)
        });
        log::trace!("scheduler tick at {now} ms ran {ran} callbacks");
        ran
    }

    /// Returns `true` when no animation needs another tick.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        !self.entries.iter().any(|e| e.handle.is_running())
    }

    /// Number of animations that will run on the next tick.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.handle.is_running())
            .count()
    }

    /// Cancels every animation started by this scheduler.
    pub fn cancel_all(&mut self) {
        for entry in self.entries.drain(..) {
            entry.handle.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ManualClock;
    use alloc::vec;
    use core::cell::RefCell;

    fn recorder() -> (Rc<RefCell<Vec<Step>>>, impl FnMut(Step) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |step| sink.borrow_mut().push(step))
    }

    #[test]
    fn duration_reports_clamped_progress_then_stops() {
        let clock = ManualClock::new();
        let mut scheduler = Scheduler::new(clock.clone());
        let (seen, cb) = recorder();

        let handle = scheduler.start(Some(100.0), cb);
        for _ in 0..5 {
            clock.advance(40.0);
            scheduler.tick();
        }

        assert_eq!(
            *seen.borrow(),
            vec![
                Step::Progress(0.0),
                Step::Progress(0.4),
                Step::Progress(0.8),
                Step::Progress(1.0),
            ]
        );
        assert!(!handle.is_running());
        assert!(scheduler.is_idle());
    }

    #[test]
    fn open_ended_reports_elapsed_until_cancelled() {
        let clock = ManualClock::starting_at(1000.0);
        let mut scheduler = Scheduler::new(clock.clone());
        let (seen, cb) = recorder();

        let handle = scheduler.start(None, cb);
        clock.advance(16.0);
        scheduler.tick();
        clock.advance(16.0);
        scheduler.tick();
        handle.cancel();
        clock.advance(16.0);
        assert_eq!(scheduler.tick(), 0);

        assert_eq!(
            *seen.borrow(),
            vec![Step::Elapsed(0.0), Step::Elapsed(16.0), Step::Elapsed(32.0)]
        );
        assert_eq!(handle.start_time(), 1000.0);
        assert_eq!(handle.duration(), None);
    }

    #[test]
    fn cancel_inside_callback_finishes_current_call() {
        let clock = ManualClock::new();
        let mut scheduler = Scheduler::new(clock.clone());
        let calls = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<AnimationHandle>>> = Rc::new(RefCell::new(None));

        let (calls_in, slot_in) = (calls.clone(), slot.clone());
        let handle = scheduler.start(None, move |_| {
            calls_in.set(calls_in.get() + 1);
            if calls_in.get() == 2 {
                if let Some(h) = slot_in.borrow().as_ref() {
                    h.cancel();
                }
            }
        });
        *slot.borrow_mut() = Some(handle.clone());

        clock.advance(10.0);
        assert_eq!(scheduler.tick(), 1);
        clock.advance(10.0);
        assert_eq!(scheduler.tick(), 0);
        assert_eq!(calls.get(), 2);
        assert!(!handle.is_running());
    }

    #[test]
    fn non_positive_duration_completes_immediately() {
        let mut scheduler = Scheduler::new(ManualClock::new());
        let (seen, cb) = recorder();

        let handle = scheduler.start(Some(0.0), cb);

        assert_eq!(*seen.borrow(), vec![Step::Progress(1.0)]);
        assert!(!handle.is_running());
        assert!(scheduler.is_idle());
    }

    #[test]
    fn independent_animations_tick_together() {
        let clock = ManualClock::new();
        let mut scheduler = Scheduler::new(clock.clone());
        let (a_seen, a) = recorder();
        let (b_seen, b) = recorder();

        let first = scheduler.start(Some(50.0), a);
        let second = scheduler.start(None, b);
        assert_ne!(first.id(), second.id());
        assert_eq!(scheduler.active_count(), 2);

        clock.advance(50.0);
        assert_eq!(scheduler.tick(), 2);
        assert_eq!(scheduler.active_count(), 1);
        assert_eq!(a_seen.borrow().last(), Some(&Step::Progress(1.0)));
        assert_eq!(b_seen.borrow().last(), Some(&Step::Elapsed(50.0)));

        scheduler.cancel_all();
        assert!(!second.is_running());
        assert!(scheduler.is_idle());
    }

    #[test]
    fn frame_source_reports_interval() {
        let display = Scheduler::new(ManualClock::new());
        assert_eq!(display.frame_interval(), None);

        let timer = Scheduler::with_source(ManualClock::new(), FrameSource::timer_fallback());
        assert_eq!(timer.frame_interval(), Some(20.0));
        assert_eq!(Step::Elapsed(3.0).value(), 3.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn frame_source_reads_kind_tagged_tables() {
        #[derive(serde::Deserialize)]
        struct Doc {
            frame: FrameSource,
        }

        let doc: Doc = toml::from_str("[frame]\nkind = \"timer\"\ninterval_ms = 20.0\n").unwrap();
        assert_eq!(doc.frame, FrameSource::timer_fallback());
        let doc: Doc = toml::from_str("[frame]\nkind = \"display\"\n").unwrap();
        assert_eq!(doc.frame, FrameSource::Display);
    }
}
