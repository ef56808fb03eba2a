// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt::Debug;
use core::hash::Hash;

use kurbo::{Point, Size};
use tactile_coords::{CoordinateMapper, PointerSample, ResizeFilter};
use tactile_easing::EasingSpec;
use tactile_event_state::click::{ClickResult, ClickState};
use tactile_event_state::hover::{HoverEvent, HoverState};
use tactile_event_state::scroll::{ScrollEvent, ScrollState};
use tactile_event_state::slide::SlideState;
use tactile_timing::{AnimationHandle, Clock, Scheduler, Step};

use crate::config::GestureConfig;
use crate::event::{
    Behavior, EventKind, MouseInput, RawEvent, Response, SyntheticEvent, TouchInput, WheelInput,
};
use crate::host::Host;
use crate::listeners::{ListenerId, Listeners};
use crate::tracked::Tracked;

#[derive(Debug)]
struct ScrollSession {
    state: ScrollState,
    poller: Option<AnimationHandle>,
}

impl ScrollSession {
    fn stop_polling(&mut self) {
        if let Some(poller) = self.poller.take() {
            poller.cancel();
        }
    }
}

/// Turns raw input into synthetic gestures for a set of tracked elements.
///
/// `K` identifies elements and `C` is the clock that timestamps input and
/// drives the scheduler. One `Gestures` owns every cache and per-element state
/// for its host; nothing is global.
///
/// ## Driving it
///
/// - Subscribe with [`on`](Self::on). The first listener for a [`Behavior`] on
///   an element installs the matching recognizer; [`off`](Self::off) on the
///   last one removes it again.
/// - Feed every raw event to [`dispatch`](Self::dispatch) and honor the
///   returned [`Response`].
/// - Call [`tick`](Self::tick) once per display frame (or every
///   [`frame_interval`](Self::frame_interval) ms) until [`is_idle`](Self::is_idle)
///   reports `true`.
///
/// Within one call, coordinates are mapped before any recognizer runs, and the
/// resulting synthetic events are delivered only after every recognizer has
/// seen the input.
///
/// Input delivered to an element also reaches every tracked element that
/// [contains](crate::Hoverable::contains) it. When one input affects several
/// elements, their events follow the order in which the elements were first
/// subscribed.
pub struct Gestures<K, C> {
    config: GestureConfig,
    scheduler: Scheduler<C>,
    mapper: CoordinateMapper<K>,
    resize: ResizeFilter,
    clicks: Tracked<K, ClickState>,
    scrolls: Tracked<K, ScrollSession>,
    hovers: Tracked<K, HoverState>,
    slides: Tracked<K, SlideState>,
    listeners: Listeners<K>,
    polls: Rc<RefCell<Vec<K>>>,
    queue: Vec<SyntheticEvent<K>>,
    /// Set by a touch start; the mouse events that follow a tap must not
    /// start a second slide.
    emulated_mouse: bool,
}

impl<K: Debug, C: Debug> Debug for Gestures<K, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Gestures")
            .field("config", &self.config)
            .field("scheduler", &self.scheduler)
            .field("mapper", &self.mapper)
            .field("resize", &self.resize)
            .field("clicks", &self.clicks)
            .field("scrolls", &self.scrolls)
            .field("hovers", &self.hovers)
            .field("slides", &self.slides)
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}

impl<K, C> Gestures<K, C>
where
    K: Copy + Eq + Hash + Debug + 'static,
    C: Clock,
{
    /// Creates a context with the default configuration.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self::with_config(clock, GestureConfig::default())
    }

    /// Records the viewport size the host starts with.
    ///
    /// Without it the first resize is always delivered, even a height-only
    /// change on a small viewport.
    #[must_use]
    pub fn with_viewport(mut self, size: Size) -> Self {
        self.resize = ResizeFilter::with_initial(self.config.resize, size);
        self
    }

    /// Creates a context with `config`.
    ///
    /// The configuration is used as given; see [`GestureConfig::validate`].
    #[must_use]
    pub fn with_config(clock: C, config: GestureConfig) -> Self {
        Self {
            scheduler: Scheduler::with_source(clock, config.frame),
            mapper: CoordinateMapper::new(),
            resize: ResizeFilter::new(config.resize),
            clicks: Tracked::default(),
            scrolls: Tracked::default(),
            hovers: Tracked::default(),
            slides: Tracked::default(),
            listeners: Listeners::default(),
            polls: Rc::new(RefCell::new(Vec::new())),
            queue: Vec::new(),
            emulated_mouse: false,
            config,
        }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// The scheduler that drives scroll polling and animations.
    #[must_use]
    pub fn scheduler(&self) -> &Scheduler<C> {
        &self.scheduler
    }

    /// Current clock reading in milliseconds.
    #[must_use]
    pub fn now(&self) -> f64 {
        self.scheduler.now()
    }

    /// Timer interval to tick at, or `None` to tick on display refresh.
    #[must_use]
    pub fn frame_interval(&self) -> Option<f64> {
        self.scheduler.frame_interval()
    }

    /// Returns `true` when no animation, scroll session or pending resize
    /// needs further ticks.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.scheduler.is_idle()
            && self.resize.next_deadline().is_none()
            && !self.scrolls.iter().any(|(_, s)| s.state.is_active())
    }

    /// Subscribes `callback` to `kind` events on `element`.
    pub fn on(
        &mut self,
        element: K,
        kind: EventKind,
        callback: impl FnMut(&SyntheticEvent<K>) + 'static,
    ) -> ListenerId {
        let behavior = kind.behavior();
        if !self.listeners.uses(element, behavior) {
            log::debug!("installing {behavior:?} tracking on {element:?}");
            self.install(element, behavior);
        }
        self.listeners.add(element, kind, Box::new(callback))
    }

    /// Removes a listener. Returns `false` if it was already gone.
    pub fn off(&mut self, id: ListenerId) -> bool {
        let Some((element, kind)) = self.listeners.remove(id) else {
            return false;
        };
        let behavior = kind.behavior();
        if !self.listeners.uses(element, behavior) {
            log::debug!("removing {behavior:?} tracking from {element:?}");
            self.uninstall(element, behavior);
        }
        true
    }

    /// Returns `true` if `element` currently has `behavior` installed.
    #[must_use]
    pub fn is_tracking(&self, element: K, behavior: Behavior) -> bool {
        match behavior {
            Behavior::Click => self.clicks.contains(element),
            Behavior::Scroll => self.scrolls.contains(element),
            Behavior::Hover => self.hovers.contains(element),
            Behavior::Slide => self.slides.contains(element),
        }
    }

    /// Position of `sample` relative to `target`, corrected for any scaled
    /// ancestor of `target`.
    pub fn pointer_offset<H>(&mut self, host: &H, sample: &PointerSample<K>, target: K) -> Point
    where
        H: Host<K> + ?Sized,
    {
        self.mapper.pointer_offset(host, sample, target)
    }

    /// Drops every cached element scale.
    pub fn invalidate_scales(&mut self) {
        self.mapper.invalidate();
    }

    /// Starts a frame-synchronous animation on the shared scheduler.
    ///
    /// See [`Scheduler::start`] for the meaning of `duration`.
    pub fn animate(
        &mut self,
        duration: Option<f64>,
        callback: impl FnMut(Step) + 'static,
    ) -> AnimationHandle {
        self.scheduler.start(duration, callback)
    }

    /// Starts an animation of `duration` ms whose progress is shaped by
    /// `easing`, e.g. `"bounce-out"`.
    pub fn animate_eased(
        &mut self,
        duration: f64,
        easing: impl Into<EasingSpec>,
        mut callback: impl FnMut(f64) + 'static,
    ) -> AnimationHandle {
        let easing = easing.into();
        self.scheduler.start(Some(duration), move |step| {
            callback(easing.evaluate(step.value()));
        })
    }

    /// Feeds one raw event through the recognizers and delivers the synthetic
    /// events it produces.
    pub fn dispatch<H>(&mut self, host: &H, event: &RawEvent<K>) -> Response
    where
        H: Host<K> + ?Sized,
    {
        let mut response = Response::default();
        match event {
            RawEvent::MouseDown(input) => self.mouse_down(host, input),
            RawEvent::MouseMove(input) => {
                self.pointer_move(host, input.client, &event_sample(input));
            }
            RawEvent::MouseUp(input) => {
                self.mouse_up(host, input);
                self.pointer_end(host, &event_sample(input));
            }
            RawEvent::TouchStart(input) => self.touch_start(host, input),
            RawEvent::TouchMove(input) => self.touch_move(host, input),
            RawEvent::TouchEnd(input) => {
                self.touch_end(host, input);
                if let Some(sample) = event.sample() {
                    self.pointer_end(host, &sample);
                } else {
                    self.pointer_reset();
                }
            }
            RawEvent::TouchCancel(input) => {
                let target = input.target;
                for (element, click) in self.clicks.iter_mut() {
                    if host.contains(element, target) {
                        click.on_touch_cancel();
                    }
                }
                self.end_touch_scrolls();
                if let Some(sample) = event.sample() {
                    self.pointer_end(host, &sample);
                } else {
                    self.pointer_reset();
                }
            }
            RawEvent::Wheel(input) => self.wheel(host, input),
            RawEvent::NativeClick { target } => {
                response.prevent_default = self
                    .clicks
                    .iter()
                    .any(|(element, _)| host.contains(element, *target));
            }
            RawEvent::Resize { size } => self.viewport_resized(*size),
        }
        response.emitted = self.flush();
        response
    }

    /// Advances scroll sessions, pending resizes and animations to the
    /// current time. Returns how many scheduler callbacks ran.
    pub fn tick<H>(&mut self, host: &H) -> usize
    where
        H: Host<K> + ?Sized,
    {
        let now = self.scheduler.now();
        for (element, session) in self.scrolls.iter_mut() {
            if let Some(ScrollEvent::End) = session.state.on_timer(now) {
                session.stop_polling();
                self.queue.push(SyntheticEvent::ScrollEnd { target: element });
            }
        }
        if let Some(size) = self.resize.poll(now) {
            self.apply_resize(size);
        }
        let ran = self.scheduler.tick();
        self.drain_polls(host, now);
        self.flush();
        ran
    }

    fn install(&mut self, element: K, behavior: Behavior) {
        match behavior {
            Behavior::Click => {
                let config = self.config.click;
                self.clicks.insert_with(element, || ClickState::new(config));
            }
            Behavior::Scroll => {
                let config = self.config.scroll;
                self.scrolls.insert_with(element, || ScrollSession {
                    state: ScrollState::new(config),
                    poller: None,
                });
            }
            Behavior::Hover => self.hovers.insert_with(element, HoverState::default),
            Behavior::Slide => self.slides.insert_with(element, SlideState::default),
        }
    }

    fn uninstall(&mut self, element: K, behavior: Behavior) {
        match behavior {
            Behavior::Click => {
                self.clicks.remove(element);
            }
            Behavior::Scroll => {
                if let Some(mut session) = self.scrolls.remove(element) {
                    session.stop_polling();
                }
            }
            Behavior::Hover => {
                self.hovers.remove(element);
            }
            Behavior::Slide => {
                self.slides.remove(element);
            }
        }
    }

    fn mouse_down<H>(&mut self, host: &H, input: &MouseInput<K>)
    where
        H: Host<K> + ?Sized,
    {
        let target = input.target;
        for (element, click) in self.clicks.iter_mut() {
            if host.contains(element, target) {
                click.on_mouse_down(input.client);
            }
        }
        if self.emulated_mouse {
            return;
        }
        let sample = event_sample(input);
        for (element, slide) in self.slides.iter_mut() {
            if host.contains(element, target) {
                let position = self.mapper.pointer_offset(host, &sample, element);
                slide.start(position);
                self.queue.push(SyntheticEvent::SlideStart {
                    target: element,
                    position,
                });
            }
        }
    }

    fn mouse_up<H>(&mut self, host: &H, input: &MouseInput<K>)
    where
        H: Host<K> + ?Sized,
    {
        let target = input.target;
        self.emulated_mouse = false;
        let sample = event_sample(input);
        for (element, click) in self.clicks.iter_mut() {
            if !host.contains(element, target) {
                continue;
            }
            if let ClickResult::Click { .. } = click.on_mouse_up(input.client) {
                let position = self.mapper.pointer_offset(host, &sample, element);
                self.queue.push(SyntheticEvent::Click {
                    target: element,
                    position,
                });
            }
        }
    }

    fn touch_start<H>(&mut self, host: &H, input: &TouchInput<K>)
    where
        H: Host<K> + ?Sized,
    {
        let target = input.target;
        self.emulated_mouse = true;
        let Some(changed) = input.changed.first().copied().or(input.primary()) else {
            return;
        };
        let fingers = input.touches.len();
        for (element, click) in self.clicks.iter_mut() {
            if host.contains(element, target) {
                click.on_touch_start(fingers, changed);
            }
        }
        for (element, session) in self.scrolls.iter_mut() {
            if host.contains(element, target) && session.state.on_touch_start() {
                log::trace!("watching touch moves for scrolling on {element:?}");
            }
        }
        if fingers > 1 {
            return;
        }
        let sample = PointerSample::new(target, changed);
        for (element, slide) in self.slides.iter_mut() {
            if host.contains(element, target) {
                let position = self.mapper.pointer_offset(host, &sample, element);
                slide.start(position);
                self.queue.push(SyntheticEvent::SlideStart {
                    target: element,
                    position,
                });
            }
        }
    }

    fn touch_move<H>(&mut self, host: &H, input: &TouchInput<K>)
    where
        H: Host<K> + ?Sized,
    {
        let now = self.scheduler.now();
        let mut started = Vec::new();
        for (element, session) in self.scrolls.iter_mut() {
            if let Some(ScrollEvent::Start) =
                session.state.on_touch_move(host.scroll_offset(element))
            {
                started.push(element);
            }
        }
        for element in started {
            self.begin_scroll(host, element, now);
        }
        if let Some(point) = input.primary() {
            self.pointer_move(host, point, &PointerSample::new(input.target, point));
        }
    }

    fn touch_end<H>(&mut self, host: &H, input: &TouchInput<K>)
    where
        H: Host<K> + ?Sized,
    {
        let target = input.target;
        for (element, click) in self.clicks.iter_mut() {
            if !host.contains(element, target) {
                continue;
            }
            if let ClickResult::Click { release, .. } = click.on_touch_end(&input.changed) {
                let sample = PointerSample::new(target, release);
                let position = self.mapper.pointer_offset(host, &sample, element);
                self.queue.push(SyntheticEvent::Click {
                    target: element,
                    position,
                });
            }
        }
        self.end_touch_scrolls();
    }

    fn end_touch_scrolls(&mut self) {
        for (element, session) in self.scrolls.iter_mut() {
            if session.state.on_touch_end() {
                log::trace!("stopped watching touch moves on {element:?}");
            }
        }
    }

    fn wheel<H>(&mut self, host: &H, input: &WheelInput<K>)
    where
        H: Host<K> + ?Sized,
    {
        let target = input.target;
        log::trace!("wheel on {target:?}: {} notches", input.notches());
        let now = self.scheduler.now();
        let mut started = Vec::new();
        for (element, session) in self.scrolls.iter_mut() {
            if !host.contains(element, target) {
                continue;
            }
            if let Some(ScrollEvent::Start) = session.state.on_wheel(host.scroll_offset(element)) {
                started.push(element);
            }
        }
        for element in started {
            self.begin_scroll(host, element, now);
        }
    }

    /// Emits the start event and polls the offset once per tick from now on.
    fn begin_scroll<H>(&mut self, host: &H, element: K, now: f64)
    where
        H: Host<K> + ?Sized,
    {
        self.queue.push(SyntheticEvent::ScrollStart { target: element });
        let polls = Rc::clone(&self.polls);
        let handle = self
            .scheduler
            .start(None, move |_| polls.borrow_mut().push(element));
        if let Some(session) = self.scrolls.get_mut(element) {
            session.stop_polling();
            session.poller = Some(handle);
        }
        self.drain_polls(host, now);
    }

    fn drain_polls<H>(&mut self, host: &H, now: f64)
    where
        H: Host<K> + ?Sized,
    {
        let pending = core::mem::take(&mut *self.polls.borrow_mut());
        for element in pending {
            let Some(session) = self.scrolls.get_mut(element) else {
                continue;
            };
            if let Some(ScrollEvent::Scroll(offset)) =
                session.state.poll(now, host.scroll_offset(element))
            {
                self.queue.push(SyntheticEvent::Scroll {
                    target: element,
                    offset,
                });
            }
        }
    }

    fn pointer_move<H>(&mut self, host: &H, point: Point, sample: &PointerSample<K>)
    where
        H: Host<K> + ?Sized,
    {
        if !self.hovers.is_empty() {
            let hit = host.element_at(point);
            for (element, hover) in self.hovers.iter_mut() {
                let inside = hit.is_some_and(|hit| host.contains(element, hit));
                for event in hover.update(inside) {
                    self.queue.push(match event {
                        HoverEvent::Enter => SyntheticEvent::PointerEnter {
                            target: element,
                            position: point,
                        },
                        HoverEvent::Leave => SyntheticEvent::PointerLeave {
                            target: element,
                            position: point,
                        },
                        HoverEvent::Over => SyntheticEvent::PointerOver {
                            target: element,
                            position: point,
                        },
                    });
                }
            }
        }
        for (element, slide) in self.slides.iter_mut() {
            if !slide.is_sliding() {
                continue;
            }
            let position = self.mapper.pointer_offset(host, sample, element);
            if let Some(step) = slide.update(position) {
                self.queue.push(SyntheticEvent::SlideMove {
                    target: element,
                    position: step.position,
                    delta: step.delta,
                    start: step.start,
                });
            }
        }
    }

    /// Ends slides at the release position and forgets hover state.
    fn pointer_end<H>(&mut self, host: &H, sample: &PointerSample<K>)
    where
        H: Host<K> + ?Sized,
    {
        for (element, slide) in self.slides.iter_mut() {
            if slide.is_sliding() {
                let position = self.mapper.pointer_offset(host, sample, element);
                slide.update(position);
            }
        }
        self.pointer_reset();
    }

    fn pointer_reset(&mut self) {
        for (_, hover) in self.hovers.iter_mut() {
            hover.reset();
        }
        for (element, slide) in self.slides.iter_mut() {
            if let Some(done) = slide.end() {
                self.queue.push(SyntheticEvent::SlideEnd {
                    target: element,
                    last: done.last,
                    start: done.start,
                });
            }
        }
    }

    fn viewport_resized(&mut self, size: Size) {
        let now = self.scheduler.now();
        if let Some(size) = self.resize.on_resize(now, size) {
            self.apply_resize(size);
        }
    }

    fn apply_resize(&mut self, size: Size) {
        log::debug!("viewport resized to {size:?}");
        self.mapper.invalidate();
    }

    /// Delivers queued events in order; returns how many listeners ran.
    fn flush(&mut self) -> usize {
        let mut ran = 0;
        for event in core::mem::take(&mut self.queue) {
            ran += self.listeners.emit(&event);
        }
        ran
    }
}

fn event_sample<K: Copy>(input: &MouseInput<K>) -> PointerSample<K> {
    let sample = PointerSample::new(input.target, input.client);
    match input.offset {
        Some(offset) => sample.with_element_offset(offset),
        None => sample,
    }
}
