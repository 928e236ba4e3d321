// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag tracker state machine.
//!
//! A [`Tracker`] is idle until a gesture's first sample lands on a
//! registered element; it then tracks that element until the final sample.
//! Per tick, in order:
//!
//! 1. `is_first`: rescan the registry, grab the first element containing
//!    the start point (registration order), emit [`DragEvent::Touch`].
//! 2. While an element is held: recompute the overlap set once the traveled
//!    distance exceeds the lag threshold (overlap mode only), then move the
//!    element so it follows the pointer from where it was grabbed.
//! 3. `is_final`: emit [`DragEvent::Drop`] (overlap mode), optionally reset
//!    the element's offset to the origin, emit `Touch(None)`, go idle.
//!
//! The held element disappearing from the host mid-drag is a host/tracker
//! desync, reported as [`DragError::ElementVanished`] rather than retried.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;

use crate::events::{DragEvent, EventSink};
use crate::registry::{ElementHost, ElementId, RectRegistry};
use crate::sample::PanSample;

/// Configuration for a [`Tracker`].
#[derive(Clone, Debug)]
pub struct TrackerOptions {
    /// Id prefixes to scan for registered elements. A non-empty list enables
    /// overlap mode.
    pub prefixes: Vec<String>,
    /// Traveled-distance threshold (axis sum) below which the overlap set is
    /// not recomputed.
    pub lag: f64,
    /// Restore the dragged element's offset to the origin when the gesture
    /// ends.
    pub reset_on_drop: bool,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            prefixes: Vec::new(),
            lag: 15.0,
            reset_on_drop: true,
        }
    }
}

/// A drag went wrong in a way that indicates a host/tracker desync.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragError {
    /// The element being dragged can no longer be resolved in the host.
    ElementVanished(ElementId),
}

impl fmt::Display for DragError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ElementVanished(id) => {
                write!(f, "no element resolvable for id `{id}` mid-drag")
            }
        }
    }
}

impl core::error::Error for DragError {}

/// State captured when a gesture grabs an element.
#[derive(Clone, Debug)]
struct ActiveDrag {
    id: ElementId,
    /// Pointer position at grab time.
    grab: Point,
    /// The element's offset at grab time.
    origin: Point,
    /// Last offset written to the host.
    offset: Point,
}

/// Tracks one element through a stream of pan samples.
///
/// The tracker does not own the host; every entry point takes it as an
/// argument, so the same tracker works against a DOM adapter in production
/// and a fixture in tests.
///
/// ## Minimal example
///
/// ```rust
/// use kurbo::{Point, Rect};
/// use thicket_drag::{
///     ElementHost, ElementId, PanSample, RecordingSink, Tracker, TrackerOptions,
/// };
///
/// struct OneBox;
///
/// impl ElementHost for OneBox {
///     fn scan_prefix(&self, prefix: &str) -> Vec<(ElementId, Rect)> {
///         if "box1".starts_with(prefix) {
///             vec![(ElementId::from("box1"), Rect::new(0.0, 0.0, 10.0, 10.0))]
///         } else {
///             vec![]
///         }
///     }
///     fn offset_of(&self, _id: &ElementId) -> Option<Point> {
///         Some(Point::ZERO)
///     }
///     fn set_offset(&mut self, _id: &ElementId, _offset: Point) -> bool {
///         true
///     }
/// }
///
/// let mut host = OneBox;
/// let options = TrackerOptions {
///     prefixes: vec!["box".to_string()],
///     ..TrackerOptions::default()
/// };
/// let mut tracker = Tracker::new(
///     &mut host,
///     PanSample::first_at(Point::new(2.0, 2.0)),
///     options,
///     RecordingSink::default(),
/// )
/// .unwrap();
///
/// assert_eq!(tracker.active_id().map(|id| id.as_str()), Some("box1"));
///
/// tracker
///     .pan(&mut host, PanSample::final_at(Point::new(4.0, 4.0)))
///     .unwrap();
/// assert!(!tracker.is_tracking());
/// ```
#[derive(Debug)]
pub struct Tracker<S: EventSink> {
    options: TrackerOptions,
    registry: RectRegistry,
    sample: PanSample,
    active: Option<ActiveDrag>,
    overlap_ids: Vec<ElementId>,
    sink: S,
}

impl<S: EventSink> Tracker<S> {
    /// Builds a tracker, scans the host for the configured prefixes, and
    /// feeds the initial sample through [`Tracker::pan`].
    pub fn new<H: ElementHost + ?Sized>(
        host: &mut H,
        sample: PanSample,
        options: TrackerOptions,
        sink: S,
    ) -> Result<Self, DragError> {
        let mut tracker = Self {
            options,
            registry: RectRegistry::new(),
            sample: PanSample::default(),
            active: None,
            overlap_ids: Vec::new(),
            sink,
        };
        let prefixes = tracker.options.prefixes.clone();
        tracker.registry.rebuild(host, &prefixes);
        tracker.pan(host, sample)?;
        Ok(tracker)
    }

    /// Whether overlap detection is enabled (a non-empty prefix list).
    #[must_use]
    pub fn overlap_mode(&self) -> bool {
        !self.options.prefixes.is_empty()
    }

    /// The element currently being dragged, if any.
    #[must_use]
    pub fn active_id(&self) -> Option<&ElementId> {
        self.active.as_ref().map(|active| &active.id)
    }

    /// Returns `true` while an element is being dragged.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.active.is_some()
    }

    /// The last computed overlap set (other elements containing the pointer).
    #[must_use]
    pub fn overlap_ids(&self) -> &[ElementId] {
        &self.overlap_ids
    }

    /// The offset last written for the dragged element, while tracking.
    #[must_use]
    pub fn offset(&self) -> Option<Point> {
        self.active.as_ref().map(|active| active.offset)
    }

    /// The registry as of the last scan.
    #[must_use]
    pub fn registry(&self) -> &RectRegistry {
        &self.registry
    }

    /// The last sample fed through [`Tracker::pan`].
    #[must_use]
    pub fn last_sample(&self) -> &PanSample {
        &self.sample
    }

    /// Borrows the event sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutably borrows the event sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn emit(&mut self, event: DragEvent) {
        if self.sink.interest().contains(event.mask()) {
            self.sink.emit(event);
        }
    }

    /// Feeds one gesture tick through the state machine.
    ///
    /// The only entry point: gesture start, movement, and gesture end are
    /// all driven by the sample's `is_first`/`is_final` flags.
    pub fn pan<H: ElementHost + ?Sized>(
        &mut self,
        host: &mut H,
        sample: PanSample,
    ) -> Result<(), DragError> {
        if sample.is_first {
            // Rescan so rectangles reflect the current layout. During the
            // drag they stay as captured here.
            let prefixes = self.options.prefixes.clone();
            self.registry.rebuild(host, &prefixes);
            self.begin(host, &sample);
        }
        self.track(host, &sample)?;
        if sample.is_final {
            self.finish(host);
        }
        self.sample = sample;
        Ok(())
    }

    /// Grabs the first registered element containing the start point.
    fn begin<H: ElementHost + ?Sized>(&mut self, host: &H, sample: &PanSample) {
        let position = sample.position;
        let Some(id) = self.registry.hit_first(position).cloned() else {
            // Nothing under the pointer: this gesture is ignored.
            return;
        };
        let origin = host.offset_of(&id).unwrap_or(Point::ZERO);
        self.active = Some(ActiveDrag {
            id: id.clone(),
            grab: position,
            origin,
            offset: origin,
        });
        self.emit(DragEvent::Touch(Some(id)));
    }

    /// Moves the held element and maintains the overlap set.
    fn track<H: ElementHost + ?Sized>(
        &mut self,
        host: &mut H,
        sample: &PanSample,
    ) -> Result<(), DragError> {
        let Some(active) = &self.active else {
            return Ok(());
        };
        let id = active.id.clone();
        let grab = active.grab;
        let origin = active.origin;

        if self.overlap_mode() && sample.distance.x + sample.distance.y > self.options.lag {
            self.overlap_ids = self.registry.hits_excluding(sample.position, &id);
            self.emit(DragEvent::Overlap(self.overlap_ids.clone()));
        }

        let offset = Point::new(
            origin.x + sample.position.x - grab.x,
            origin.y + sample.position.y - grab.y,
        );
        if !host.set_offset(&id, offset) {
            return Err(DragError::ElementVanished(id));
        }
        if let Some(active) = &mut self.active {
            active.offset = offset;
        }
        Ok(())
    }

    /// Ends the gesture: drop, optional reset, release.
    fn finish<H: ElementHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(active) = self.active.take() {
            if self.overlap_mode() {
                let targets = core::mem::take(&mut self.overlap_ids);
                self.emit(DragEvent::Drop {
                    targets,
                    source: active.id.clone(),
                });
            }
            if self.options.reset_on_drop {
                // The element may legitimately be gone by release time; the
                // reset is best-effort.
                let _ = host.set_offset(&active.id, Point::ZERO);
            }
        }
        self.overlap_ids.clear();
        self.emit(DragEvent::Touch(None));
    }
}
