// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Timing: clock and frame scheduling primitives.
//!
//! This crate provides the time axis shared by gesture recognizers and
//! animation consumers:
//!
//! - [`Clock`]: a pluggable millisecond time source. [`ManualClock`] is a
//!   settable clock for tests and for hosts that already receive frame
//!   timestamps; with the `std` feature, [`SystemClock`] reads a monotonic
//!   [`Instant`](std::time::Instant).
//! - [`Scheduler`]: runs recurring callbacks once per tick, reporting either
//!   normalized progress (when a duration is given) or raw elapsed time.
//! - [`AnimationHandle`]: a cloneable handle with cooperative cancellation.
//!
//! The scheduler never owns a frame loop. The host calls [`Scheduler::tick`]
//! from its display-refresh callback, or from a timer when no refresh callback
//! exists (see [`FrameSource`]).
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use tactile_timing::{ManualClock, Scheduler, Step};
//!
//! let clock = ManualClock::new();
//! let mut scheduler = Scheduler::new(clock.clone());
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = seen.clone();
//! let handle = scheduler.start(Some(100.0), move |step| sink.borrow_mut().push(step));
//!
//! clock.advance(50.0);
//! scheduler.tick();
//! clock.advance(50.0);
//! scheduler.tick();
//!
//! assert_eq!(
//!     *seen.borrow(),
//!     vec![Step::Progress(0.0), Step::Progress(0.5), Step::Progress(1.0)]
//! );
//! assert!(!handle.is_running());
//! assert!(scheduler.is_idle());
//! ```

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod clock;
mod scheduler;

#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use clock::{Clock, ManualClock};
pub use scheduler::{AnimationHandle, FrameSource, Scheduler, Step};
