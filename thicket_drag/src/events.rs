// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed drag event delivery.
//!
//! The tracker reports what happens during a gesture as [`DragEvent`] values
//! pushed into an [`EventSink`]. A sink advertises which events it wants via
//! an [`EventMask`]; the tracker skips building payloads for masked-out
//! events, which is the typed replacement for subscribing to event names by
//! string.

use alloc::vec::Vec;

use crate::registry::ElementId;

bitflags::bitflags! {
    /// Which drag events a sink wants delivered.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct EventMask: u8 {
        /// Active-element changes ([`DragEvent::Touch`]).
        const TOUCH = 1 << 0;
        /// Overlap set updates ([`DragEvent::Overlap`]).
        const OVERLAP = 1 << 1;
        /// Gesture-end drops ([`DragEvent::Drop`]).
        const DROP = 1 << 2;
    }
}

/// An event reported by the tracker during a gesture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragEvent {
    /// The active element changed: `Some(id)` when a drag grabs an element,
    /// `None` when the gesture ends and the grab is released.
    Touch(Option<ElementId>),
    /// The set of other registered elements currently containing the pointer.
    Overlap(Vec<ElementId>),
    /// The gesture ended over zero or more drop targets.
    Drop {
        /// Elements overlapped at release time.
        targets: Vec<ElementId>,
        /// The element that was being dragged.
        source: ElementId,
    },
}

impl DragEvent {
    /// The mask bit corresponding to this event's variant.
    #[must_use]
    pub fn mask(&self) -> EventMask {
        match self {
            Self::Touch(_) => EventMask::TOUCH,
            Self::Overlap(_) => EventMask::OVERLAP,
            Self::Drop { .. } => EventMask::DROP,
        }
    }
}

/// Receives drag events from a tracker.
pub trait EventSink {
    /// Delivers one event. Only called for variants covered by
    /// [`EventSink::interest`].
    fn emit(&mut self, event: DragEvent);

    /// Which event variants this sink wants. Defaults to all.
    fn interest(&self) -> EventMask {
        EventMask::all()
    }
}

/// A sink that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: DragEvent) {}

    fn interest(&self) -> EventMask {
        EventMask::empty()
    }
}

/// A sink that records every delivered event, mostly useful in tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    /// Delivered events, in order.
    pub events: Vec<DragEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: DragEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn event_masks_match_variants() {
        assert_eq!(DragEvent::Touch(None).mask(), EventMask::TOUCH);
        assert_eq!(DragEvent::Overlap(vec![]).mask(), EventMask::OVERLAP);
        let drop = DragEvent::Drop {
            targets: vec![],
            source: ElementId::from("a"),
        };
        assert_eq!(drop.mask(), EventMask::DROP);
    }

    #[test]
    fn null_sink_wants_nothing() {
        assert_eq!(NullSink.interest(), EventMask::empty());
    }

    #[test]
    fn recording_sink_keeps_order() {
        let mut sink = RecordingSink::default();
        sink.emit(DragEvent::Touch(Some(ElementId::from("a"))));
        sink.emit(DragEvent::Touch(None));
        assert_eq!(sink.events.len(), 2);
        assert_eq!(sink.events[1], DragEvent::Touch(None));
    }
}
