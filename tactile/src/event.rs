// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input consumed by [`Gestures`](crate::Gestures) and the synthetic events
//! it produces.

use kurbo::{Point, Size, Vec2};
use smallvec::SmallVec;
use tactile_coords::PointerSample;
use tactile_event_state::wheel::WheelDelta;

/// Touch points carried by one touch event.
pub type TouchPoints = SmallVec<[Point; 2]>;

/// A mouse event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseInput<K> {
    /// Element the platform delivered the event to.
    pub target: K,
    /// Pointer position in viewport coordinates.
    pub client: Point,
    /// Position relative to `target`, when the platform reports one.
    pub offset: Option<Point>,
}

impl<K> MouseInput<K> {
    /// Creates a mouse event without an element-relative offset.
    #[must_use]
    pub const fn new(target: K, client: Point) -> Self {
        Self {
            target,
            client,
            offset: None,
        }
    }
}

/// A touch event.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchInput<K> {
    /// Element the platform delivered the event to.
    pub target: K,
    /// Touches still on the surface, in viewport coordinates.
    pub touches: TouchPoints,
    /// Touches that changed with this event.
    pub changed: TouchPoints,
}

impl<K> TouchInput<K> {
    /// Creates a touch event.
    pub fn new(
        target: K,
        touches: impl IntoIterator<Item = Point>,
        changed: impl IntoIterator<Item = Point>,
    ) -> Self {
        Self {
            target,
            touches: touches.into_iter().collect(),
            changed: changed.into_iter().collect(),
        }
    }

    /// The point that represents this event: the first active touch, or the
    /// first changed touch once every finger has lifted.
    #[must_use]
    pub fn primary(&self) -> Option<Point> {
        self.touches.first().or(self.changed.first()).copied()
    }
}

/// A wheel event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput<K> {
    /// Element the platform delivered the event to.
    pub target: K,
    /// Raw delta in whichever convention the platform uses.
    pub delta: WheelDelta,
}

impl<K> WheelInput<K> {
    /// Vertical movement in notches; positive scrolls up.
    #[must_use]
    pub fn notches(&self) -> f64 {
        self.delta.normalized()
    }
}

/// A raw platform event.
#[derive(Clone, Debug, PartialEq)]
pub enum RawEvent<K> {
    /// Mouse button pressed.
    MouseDown(MouseInput<K>),
    /// Mouse moved.
    MouseMove(MouseInput<K>),
    /// Mouse button released.
    MouseUp(MouseInput<K>),
    /// A finger touched the surface.
    TouchStart(TouchInput<K>),
    /// A finger moved.
    TouchMove(TouchInput<K>),
    /// A finger lifted.
    TouchEnd(TouchInput<K>),
    /// The platform aborted the touch sequence.
    TouchCancel(TouchInput<K>),
    /// Wheel or trackpad scroll input.
    Wheel(WheelInput<K>),
    /// The platform's own click event.
    NativeClick {
        /// Element the click was delivered to.
        target: K,
    },
    /// The viewport changed size.
    Resize {
        /// New viewport size.
        size: Size,
    },
}

/// Pointer phase shared by mouse and touch input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// Mouse down or touch start.
    Start,
    /// Mouse move or touch move.
    Move,
    /// Mouse up, touch end or touch cancel.
    End,
}

impl<K: Copy> RawEvent<K> {
    /// The pointer phase of this event, or `None` for non-pointer events.
    #[must_use]
    pub fn phase(&self) -> Option<PointerPhase> {
        match self {
            Self::MouseDown(_) | Self::TouchStart(_) => Some(PointerPhase::Start),
            Self::MouseMove(_) | Self::TouchMove(_) => Some(PointerPhase::Move),
            Self::MouseUp(_) | Self::TouchEnd(_) | Self::TouchCancel(_) => {
                Some(PointerPhase::End)
            }
            Self::Wheel(_) | Self::NativeClick { .. } | Self::Resize { .. } => None,
        }
    }

    /// Element the event was delivered to.
    #[must_use]
    pub fn target(&self) -> Option<K> {
        match self {
            Self::MouseDown(m) | Self::MouseMove(m) | Self::MouseUp(m) => Some(m.target),
            Self::TouchStart(t) | Self::TouchMove(t) | Self::TouchEnd(t) | Self::TouchCancel(t) => {
                Some(t.target)
            }
            Self::Wheel(w) => Some(w.target),
            Self::NativeClick { target } => Some(*target),
            Self::Resize { .. } => None,
        }
    }

    /// The pointer position of this event as a mapper sample.
    #[must_use]
    pub fn sample(&self) -> Option<PointerSample<K>> {
        match self {
            Self::MouseDown(m) | Self::MouseMove(m) | Self::MouseUp(m) => {
                let sample = PointerSample::new(m.target, m.client);
                Some(match m.offset {
                    Some(offset) => sample.with_element_offset(offset),
                    None => sample,
                })
            }
            Self::TouchStart(t) | Self::TouchMove(t) | Self::TouchEnd(t) | Self::TouchCancel(t) => {
                t.primary().map(|p| PointerSample::new(t.target, p))
            }
            Self::Wheel(_) | Self::NativeClick { .. } | Self::Resize { .. } => None,
        }
    }
}

/// Which recognizer serves an [`EventKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Behavior {
    /// Click recognition.
    Click,
    /// Scroll start/scroll/end tracking.
    Scroll,
    /// Enter/leave/over tracking.
    Hover,
    /// Press-move-release tracking.
    Slide,
}

/// The synthetic events a listener can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A recognized click or tap.
    Click,
    /// Scrolling began.
    ScrollStart,
    /// The scroll offset moved.
    Scroll,
    /// Scrolling stopped.
    ScrollEnd,
    /// The pointer crossed into the element.
    PointerEnter,
    /// The pointer crossed out of the element.
    PointerLeave,
    /// The pointer moved inside the element.
    PointerOver,
    /// A slide began on the element.
    SlideStart,
    /// The pointer moved during a slide.
    SlideMove,
    /// A slide ended.
    SlideEnd,
}

impl EventKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Click,
        Self::ScrollStart,
        Self::Scroll,
        Self::ScrollEnd,
        Self::PointerEnter,
        Self::PointerLeave,
        Self::PointerOver,
        Self::SlideStart,
        Self::SlideMove,
        Self::SlideEnd,
    ];

    /// The recognizer that produces this kind.
    #[must_use]
    pub const fn behavior(self) -> Behavior {
        match self {
            Self::Click => Behavior::Click,
            Self::ScrollStart | Self::Scroll | Self::ScrollEnd => Behavior::Scroll,
            Self::PointerEnter | Self::PointerLeave | Self::PointerOver => Behavior::Hover,
            Self::SlideStart | Self::SlideMove | Self::SlideEnd => Behavior::Slide,
        }
    }

    /// Conventional event name, e.g. `"scrollstart"` or `"pointerEnter"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::ScrollStart => "scrollstart",
            Self::Scroll => "scroll",
            Self::ScrollEnd => "scrollend",
            Self::PointerEnter => "pointerEnter",
            Self::PointerLeave => "pointerLeave",
            Self::PointerOver => "pointerOver",
            Self::SlideStart => "slidestart",
            Self::SlideMove => "slidemove",
            Self::SlideEnd => "slideend",
        }
    }

    /// Looks up a kind by name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

/// An event produced by a recognizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SyntheticEvent<K> {
    /// A click, at the element-relative release position.
    Click {
        /// Clicked element.
        target: K,
        /// Release position relative to `target`.
        position: Point,
    },
    /// Scrolling began.
    ScrollStart {
        /// Scrolling element.
        target: K,
    },
    /// The scroll offset moved.
    Scroll {
        /// Scrolling element.
        target: K,
        /// New scroll offset.
        offset: Vec2,
    },
    /// Scrolling stopped.
    ScrollEnd {
        /// Scrolling element.
        target: K,
    },
    /// The pointer crossed into the element.
    PointerEnter {
        /// Hovered element.
        target: K,
        /// Pointer position in viewport coordinates.
        position: Point,
    },
    /// The pointer crossed out of the element.
    PointerLeave {
        /// Element that was left.
        target: K,
        /// Pointer position in viewport coordinates.
        position: Point,
    },
    /// The pointer moved inside the element.
    PointerOver {
        /// Hovered element.
        target: K,
        /// Pointer position in viewport coordinates.
        position: Point,
    },
    /// A slide began.
    SlideStart {
        /// Element being slid on.
        target: K,
        /// Press position relative to `target`.
        position: Point,
    },
    /// The pointer moved during a slide.
    SlideMove {
        /// Element being slid on.
        target: K,
        /// Current position relative to `target`.
        position: Point,
        /// Movement since the previous slide event.
        delta: Vec2,
        /// Press position relative to `target`.
        start: Point,
    },
    /// A slide ended.
    SlideEnd {
        /// Element that was slid on.
        target: K,
        /// Last position relative to `target`.
        last: Point,
        /// Press position relative to `target`.
        start: Point,
    },
}

impl<K: Copy> SyntheticEvent<K> {
    /// Element the event is for.
    #[must_use]
    pub fn target(&self) -> K {
        match *self {
            Self::Click { target, .. }
            | Self::ScrollStart { target }
            | Self::Scroll { target, .. }
            | Self::ScrollEnd { target }
            | Self::PointerEnter { target, .. }
            | Self::PointerLeave { target, .. }
            | Self::PointerOver { target, .. }
            | Self::SlideStart { target, .. }
            | Self::SlideMove { target, .. }
            | Self::SlideEnd { target, .. } => target,
        }
    }

    /// Kind used to route the event to listeners.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Click { .. } => EventKind::Click,
            Self::ScrollStart { .. } => EventKind::ScrollStart,
            Self::Scroll { .. } => EventKind::Scroll,
            Self::ScrollEnd { .. } => EventKind::ScrollEnd,
            Self::PointerEnter { .. } => EventKind::PointerEnter,
            Self::PointerLeave { .. } => EventKind::PointerLeave,
            Self::PointerOver { .. } => EventKind::PointerOver,
            Self::SlideStart { .. } => EventKind::SlideStart,
            Self::SlideMove { .. } => EventKind::SlideMove,
            Self::SlideEnd { .. } => EventKind::SlideEnd,
        }
    }
}

/// What the host should do with the raw event after dispatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Response {
    /// Suppress the platform's default action (for example the native click
    /// on an element whose clicks are recognized here).
    pub prevent_default: bool,
    /// Number of synthetic events delivered to listeners.
    pub emitted: usize,
}
