// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capabilities [`Gestures`](crate::Gestures) reads from the host's element layer.
//!
//! Each trait is small so hosts can implement them on whatever owns the
//! relevant data. [`Host`] is implemented for anything that has all three.

use kurbo::{Point, Vec2};

pub use tactile_coords::ScaleGeometry;

/// Read access to scroll positions.
pub trait Scrollable<K> {
    /// Current scroll offset of `element` (or of the viewport, for a
    /// window-level element).
    fn scroll_offset(&self, element: K) -> Vec2;
}

/// Point hit-testing.
pub trait Hoverable<K> {
    /// Topmost element at `point`, in viewport coordinates.
    fn element_at(&self, point: Point) -> Option<K>;

    /// Returns `true` if input on `hit` counts as input on `element`.
    ///
    /// This decides both hover state and which tracked elements see presses,
    /// releases and wheel input delivered to a descendant. Only exact hits
    /// count by default. Hosts with an element tree should accept descendants
    /// as well.
    fn contains(&self, element: K, hit: K) -> bool
    where
        K: PartialEq,
    {
        element == hit
    }
}

/// Everything [`Gestures`](crate::Gestures) needs from a host.
pub trait Host<K>: ScaleGeometry<K> + Scrollable<K> + Hoverable<K> {}

impl<K, T> Host<K> for T where T: ScaleGeometry<K> + Scrollable<K> + Hoverable<K> + ?Sized {}
