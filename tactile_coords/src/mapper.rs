// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::{Point, Rect, Vec2};

/// Element geometry the [`CoordinateMapper`] reads from the host.
///
/// `K` is the host's element identifier; it must be stable for as long as the
/// element is tracked.
pub trait ScaleGeometry<K> {
    /// Bounding box of `element` in viewport coordinates.
    fn bounding_box(&self, element: K) -> Rect;

    /// Nearest ancestor of `element` that establishes a scaled coordinate
    /// frame, or `None` when the element itself should be used.
    fn scale_frame(&self, element: K) -> Option<K>;

    /// Scale transform applied by `frame`, as `(x, y)` factors.
    fn frame_scale(&self, frame: K) -> Vec2;
}

/// A pointer position as reported by the platform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample<K> {
    /// Element the platform delivered the event to.
    pub target: K,
    /// Position in viewport coordinates. For touch input this is the first
    /// touch point.
    pub position: Point,
    /// Position relative to `target`, when the platform reports one.
    pub element_offset: Option<Point>,
}

impl<K> PointerSample<K> {
    /// Creates a sample without a platform-provided element offset.
    #[must_use]
    pub const fn new(target: K, position: Point) -> Self {
        Self {
            target,
            position,
            element_offset: None,
        }
    }

    /// Returns a copy carrying the platform's element-relative position.
    #[must_use]
    pub const fn with_element_offset(mut self, offset: Point) -> Self {
        self.element_offset = Some(offset);
        self
    }
}

/// Cached scale resolution for one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleEntry<K> {
    /// Element the scale was read from.
    pub frame: K,
    /// Scale factors, never zero or non-finite.
    pub scale: Vec2,
}

/// Converts viewport pointer positions into element coordinates.
///
/// Scale lookups are cached per element until [`invalidate`](Self::invalidate)
/// clears the cache, which hosts do on every accepted viewport resize. A
/// missing entry is simply recomputed.
#[derive(Clone, Debug)]
pub struct CoordinateMapper<K> {
    cache: HashMap<K, ScaleEntry<K>>,
}

impl<K> Default for CoordinateMapper<K> {
    fn default() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash + Debug> CoordinateMapper<K> {
    /// Creates a mapper with an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the position of `sample` relative to `target`'s top-left corner,
    /// in `target`'s unscaled coordinates.
    ///
    /// If the platform already reported an element-relative offset for an
    /// event delivered to `target` itself, that offset is returned unchanged.
    pub fn pointer_offset<G>(
        &mut self,
        geometry: &G,
        sample: &PointerSample<K>,
        target: K,
    ) -> Point
    where
        G: ScaleGeometry<K> + ?Sized,
    {
        if sample.target == target {
            if let Some(offset) = sample.element_offset {
                return offset;
            }
        }
        let scale = self.scale(geometry, target).scale;
        let delta = sample.position - geometry.bounding_box(target).origin();
        Point::new(delta.x / scale.x, delta.y / scale.y)
    }

    /// Returns the cached scale of `element`, resolving it on a miss.
    pub fn scale<G>(&mut self, geometry: &G, element: K) -> ScaleEntry<K>
    where
        G: ScaleGeometry<K> + ?Sized,
    {
        *self
            .cache
            .entry(element)
            .or_insert_with(|| resolve(geometry, element))
    }

    /// Returns the cached entry for `element` without resolving it.
    #[must_use]
    pub fn cached(&self, element: K) -> Option<ScaleEntry<K>> {
        self.cache.get(&element).copied()
    }

    /// Drops every cached scale at once.
    pub fn invalidate(&mut self) {
        log::debug!("invalidating {} cached scale entries", self.cache.len());
        self.cache.clear();
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns `true` if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

fn resolve<K, G>(geometry: &G, element: K) -> ScaleEntry<K>
where
    K: Copy + Debug,
    G: ScaleGeometry<K> + ?Sized,
{
    let frame = geometry.scale_frame(element).unwrap_or(element);
    let raw = geometry.frame_scale(frame);
    let usable = |c: f64| c.is_finite() && c != 0.0;
    let scale = Vec2::new(
        if usable(raw.x) { raw.x } else { 1.0 },
        if usable(raw.y) { raw.y } else { 1.0 },
    );
    if scale != raw {
        log::warn!("degenerate scale {raw:?} on frame {frame:?}; using {scale:?}");
    }
    ScaleEntry { frame, scale }
}
