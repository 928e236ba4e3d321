// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=thicket_drag --heading-base-level=0

//! Thicket Drag: pan-driven drag tracking with rectangle overlap detection.
//!
//! A [`Tracker`] consumes a stream of [`PanSample`] gesture ticks from an
//! external recognizer and turns them into drag behavior over a registry of
//! positioned elements:
//!
//! - On a gesture's first tick it rescans the host for elements matching the
//!   configured id prefixes, grabs the first one whose rectangle contains
//!   the start point, and emits [`DragEvent::Touch`].
//! - While an element is held it follows the pointer (the element's offset
//!   tracks the pointer's displacement from the grab point), and — in
//!   overlap mode — the set of other registered rectangles containing the
//!   pointer is recomputed once the traveled distance exceeds a lag
//!   threshold, emitting [`DragEvent::Overlap`].
//! - On the final tick it emits [`DragEvent::Drop`] with the overlap set and
//!   the dragged id, optionally resets the element to its origin, and emits
//!   `Touch(None)`.
//!
//! ## The host seam
//!
//! The tracker never touches a real DOM. Everything environmental goes
//! through the [`ElementHost`] trait — scan elements by id prefix, read an
//! element's position offset, write one back — called synchronously. Tests
//! drive the tracker with a fixture host; production wires it to whatever
//! owns the elements. Hosts whose layout settles late can pre-warm the
//! registry with [`RectRegistry::rebuild_with_retry`], which retries under a
//! bounded [`RetryBudget`] with an injected pause and gives up silently.
//!
//! ## Events
//!
//! Delivery is typed: [`DragEvent`] variants into an [`EventSink`], filtered
//! by the sink's [`EventMask`] interest. No string-keyed callbacks.
//!
//! ## Hit testing
//!
//! Containment is inclusive on all four edges, against rectangles captured
//! at gesture start. Rectangles are not live-recomputed during a drag.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod events;
mod registry;
mod sample;
mod tracker;

pub use events::{DragEvent, EventMask, EventSink, NullSink, RecordingSink};
pub use registry::{ElementHost, ElementId, RectRegistry, RetryBudget, contains_inclusive};
pub use sample::{Direction, PanSample};
pub use tracker::{DragError, Tracker, TrackerOptions};
