// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile: reliable gestures and frame-synchronous animation for UI hosts.
//!
//! ## Overview
//!
//! Raw pointer, touch and scroll input differs between devices and
//! platforms. Touch screens follow every tap with emulated mouse events, scroll
//! notifications never say when momentum scrolling has stopped, and pointer
//! coordinates ignore scale transforms on ancestors. This crate turns that
//! input into a small set of synthetic events:
//!
//! - `click`: a press and release that stayed within a few pixels, reported
//!   once per tap even when the platform emits both touch and mouse events.
//! - `scrollstart`, `scroll`, `scrollend`: one bracketed scroll gesture, with
//!   the end detected after a quiet debounce window.
//! - `pointerEnter`, `pointerLeave`, `pointerOver`: boundary crossings derived
//!   from hit tests on every pointer move.
//! - `slidestart`, `slidemove`, `slideend`: press on an element, move anywhere,
//!   release.
//!
//! ## Workflow
//!
//! 1) Implement [`ScaleGeometry`], [`Scrollable`] and [`Hoverable`] for
//!    whatever owns your element tree; together they make a [`Host`].
//! 2) Create a [`Gestures`] context with a [`Clock`] and subscribe listeners
//!    with [`Gestures::on`].
//! 3) Translate platform input into [`RawEvent`]s and pass each one to
//!    [`Gestures::dispatch`]. Honor [`Response::prevent_default`].
//! 4) Call [`Gestures::tick`] every frame while [`Gestures::is_idle`] is
//!    `false`.
//!
//! The same scheduler runs eased animations through [`Gestures::animate`] and
//! [`Gestures::animate_eased`]; curves come from [`ease`].
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Rect, Vec2};
//! use tactile::{
//!     EventKind, Gestures, Hoverable, ManualClock, MouseInput, RawEvent, ScaleGeometry,
//!     Scrollable, SyntheticEvent,
//! };
//!
//! struct Page;
//!
//! impl ScaleGeometry<u32> for Page {
//!     fn bounding_box(&self, _: u32) -> Rect {
//!         Rect::new(10.0, 10.0, 110.0, 60.0)
//!     }
//!     fn scale_frame(&self, _: u32) -> Option<u32> {
//!         None
//!     }
//!     fn frame_scale(&self, _: u32) -> Vec2 {
//!         Vec2::new(1.0, 1.0)
//!     }
//! }
//! impl Scrollable<u32> for Page {
//!     fn scroll_offset(&self, _: u32) -> Vec2 {
//!         Vec2::ZERO
//!     }
//! }
//! impl Hoverable<u32> for Page {
//!     fn element_at(&self, _: Point) -> Option<u32> {
//!         Some(1)
//!     }
//! }
//!
//! let mut gestures: Gestures<u32, _> = Gestures::new(ManualClock::new());
//! let clicked = Rc::new(Cell::new(None));
//! let sink = clicked.clone();
//! gestures.on(1, EventKind::Click, move |event| {
//!     if let SyntheticEvent::Click { position, .. } = *event {
//!         sink.set(Some(position));
//!     }
//! });
//!
//! gestures.dispatch(&Page, &RawEvent::MouseDown(MouseInput::new(1, Point::new(30.0, 20.0))));
//! gestures.dispatch(&Page, &RawEvent::MouseUp(MouseInput::new(1, Point::new(31.0, 21.0))));
//! assert_eq!(clicked.get(), Some(Point::new(21.0, 11.0)));
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to the member crates; enables `SystemClock`.
//! - `libm`: `no_std` math for Kurbo.
//! - `serde`: (de)serialize [`GestureConfig`] and the types it contains.
//! - `toml`: [`GestureConfig::from_toml_str`].
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
mod css;
mod event;
mod gestures;
mod host;
mod listeners;
mod tracked;

pub use config::{ConfigError, GestureConfig};
pub use css::parse_css_time;
pub use event::{
    Behavior, EventKind, MouseInput, PointerPhase, RawEvent, Response, SyntheticEvent,
    TouchInput, TouchPoints, WheelInput,
};
pub use gestures::Gestures;
pub use host::{Host, Hoverable, ScaleGeometry, Scrollable};
pub use listeners::ListenerId;

pub use tactile_coords::{PointerSample, ResizeConfig, stroke_length};
pub use tactile_easing::{Curve, Direction, EasingSpec, ease};
pub use tactile_event_state::click::ClickConfig;
pub use tactile_event_state::scroll::ScrollConfig;
pub use tactile_event_state::wheel::WheelDelta;
#[cfg(feature = "std")]
pub use tactile_timing::SystemClock;
pub use tactile_timing::{AnimationHandle, Clock, FrameSource, ManualClock, Step};
