// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Event State: gesture state machines for pointer, touch and scroll input.
//!
//! This crate provides small, focused state machines that turn raw platform
//! input into synthetic gestures. Each module handles one pattern:
//!
//! - [`click`]: Tap/click recognition across mouse and touch, with suppression
//!   of the mouse events touch devices emit after a tap
//! - [`scroll`]: Scroll start/scroll/end detection with a debounce window
//! - [`hover`]: Enter/leave/over transitions from per-move hit tests
//! - [`slide`]: Press-move-release tracking with start and last positions
//! - [`wheel`]: Normalization of the different wheel delta conventions
//!
//! ## Design Philosophy
//!
//! Each state machine is:
//!
//! - **Host-agnostic**: inputs are plain points, offsets and timestamps; no
//!   event loop, element type or clock is assumed
//! - **Per element**: one instance tracks one element or scroll region
//! - **Silent on bad sequences**: an unexpected event (a second finger, a
//!   release without a press) resets to idle rather than failing
//!
//! Routing raw events to the right instance, reading scroll offsets and
//! hit-testing are the caller's job; the `tactile` crate does this wiring.
//!
//! ## Usage Patterns
//!
//! ### Click Recognition
//!
//! ```rust
//! use kurbo::Point;
//! use tactile_event_state::click::{ClickConfig, ClickResult, ClickState};
//!
//! let mut clicks = ClickState::new(ClickConfig::default());
//!
//! clicks.on_mouse_down(Point::new(10.0, 20.0));
//! let result = clicks.on_mouse_up(Point::new(11.0, 21.0));
//! assert!(matches!(result, ClickResult::Click { .. }));
//!
//! // Dragging three pixels away is not a click.
//! clicks.on_mouse_down(Point::new(10.0, 20.0));
//! assert_eq!(clicks.on_mouse_up(Point::new(13.0, 20.0)), ClickResult::Moved);
//! ```
//!
//! ### Hover Tracking
//!
//! ```rust
//! use tactile_event_state::hover::{HoverEvent, HoverState};
//!
//! let mut hover = HoverState::new();
//! hover.update(false);
//! assert_eq!(hover.update(true).as_slice(), &[HoverEvent::Enter, HoverEvent::Over]);
//! assert_eq!(hover.update(false).as_slice(), &[HoverEvent::Leave]);
//! ```
//!
//! ### Scroll Activity
//!
//! ```rust
//! use kurbo::Vec2;
//! use tactile_event_state::scroll::{ScrollConfig, ScrollEvent, ScrollState};
//!
//! let mut scroll = ScrollState::new(ScrollConfig::default());
//! assert_eq!(scroll.on_wheel(Vec2::ZERO), Some(ScrollEvent::Start));
//! assert_eq!(scroll.poll(20.0, Vec2::new(0.0, 8.0)), Some(ScrollEvent::Scroll(Vec2::new(0.0, 8.0))));
//! assert_eq!(scroll.poll(40.0, Vec2::new(0.0, 8.0)), None); // arms the debounce timer
//! assert_eq!(scroll.on_timer(140.0), Some(ScrollEvent::End));
//! ```
//!
//! ## Features
//!
//! - `serde`: (de)serialize the configuration types
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

pub mod click;
pub mod hover;
pub mod scroll;
pub mod slide;
pub mod wheel;
