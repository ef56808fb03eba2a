// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Coords: pointer coordinates relative to scaled elements.
//!
//! Pointer events report viewport coordinates, but consumers usually want a
//! position inside a particular element. When an ancestor applies a scale
//! transform (for example to fit a fixed-size layout into a smaller window),
//! the viewport distance has to be divided by that scale as well.
//!
//! - [`CoordinateMapper`]: converts a [`PointerSample`] into element-relative
//!   coordinates and caches each element's [`ScaleEntry`].
//! - [`ScaleGeometry`]: what the mapper needs from the host's element layer.
//! - [`ResizeFilter`]: throttles viewport resize notifications; each accepted
//!   resize is the signal to [`CoordinateMapper::invalidate`].
//! - [`stroke_length`]: path length with a bounding-box fallback.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use tactile_coords::{CoordinateMapper, PointerSample, ScaleGeometry};
//!
//! /// Element 1 sits at (100, 50) inside a container (element 0) scaled by 2.
//! struct Page;
//!
//! impl ScaleGeometry<u32> for Page {
//!     fn bounding_box(&self, _: u32) -> Rect {
//!         Rect::new(100.0, 50.0, 300.0, 250.0)
//!     }
//!     fn scale_frame(&self, _: u32) -> Option<u32> {
//!         Some(0)
//!     }
//!     fn frame_scale(&self, _: u32) -> Vec2 {
//!         Vec2::new(2.0, 2.0)
//!     }
//! }
//!
//! let mut mapper = CoordinateMapper::new();
//! let sample = PointerSample::new(7, Point::new(110.0, 70.0));
//! assert_eq!(mapper.pointer_offset(&Page, &sample, 1), Point::new(5.0, 10.0));
//! ```

#![no_std]

mod mapper;
mod resize;
mod stroke;

pub use mapper::{CoordinateMapper, PointerSample, ScaleEntry, ScaleGeometry};
pub use resize::{ResizeConfig, ResizeFilter};
pub use stroke::{PATH_ACCURACY, stroke_length};
