// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{BezPath, Rect, Shape};

/// Accuracy used when measuring path lengths.
pub const PATH_ACCURACY: f64 = 1e-3;

/// Length of the outline to animate along (for example a stroke-dash reveal).
///
/// With a `path` this is its arc length. Hosts that cannot provide geometry
/// pass `None` and get the perimeter of `bounds` instead, which is exact for
/// rectangles and a usable estimate otherwise.
#[must_use]
pub fn stroke_length(path: Option<&BezPath>, bounds: Rect) -> f64 {
    match path {
        Some(path) => path.perimeter(PATH_ACCURACY),
        None => {
            let bounds = bounds.abs();
            2.0 * bounds.width() + 2.0 * bounds.height()
        }
    }
}
