// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element registry and the host seam.
//!
//! [`ElementHost`] is the boundary to the environment that actually owns
//! positioned elements (a DOM, a widget tree, a test double). The tracker
//! only ever calls it synchronously: scan elements by id prefix, read an
//! element's current position offset, write one back.
//!
//! [`RectRegistry`] is the tracker's cache of that scan: an id-keyed set of
//! bounding rectangles in registration order. Rectangles are captured at
//! scan time and are *not* live; the tracker rescans at gesture start to
//! tolerate layout changes between gestures.
//!
//! Containment uses inclusive bounds on all four edges — a point on an edge
//! counts as inside, which differs from [`kurbo::Rect::contains`]'s half-open
//! maximum edge.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use kurbo::{Point, Rect};

/// Identifier of a positioned element in the host.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(String);

impl ElementId {
    /// Wraps an id string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The environment that owns positioned elements.
///
/// All calls are synchronous; the tracker treats them as pure queries and
/// writes. Implementations back this with whatever they have — a DOM
/// adapter, a scene graph, a fixture map in tests.
pub trait ElementHost {
    /// All elements whose id starts with `prefix`, with their current
    /// bounding rectangles, in the host's layout order.
    fn scan_prefix(&self, prefix: &str) -> Vec<(ElementId, Rect)>;

    /// The element's current position offset, or `None` if it no longer
    /// exists.
    fn offset_of(&self, id: &ElementId) -> Option<Point>;

    /// Writes the element's position offset. Returns `false` if the element
    /// no longer exists.
    fn set_offset(&mut self, id: &ElementId, offset: Point) -> bool;
}

/// Inclusive point-in-rectangle test (`x0 <= x <= x1`, `y0 <= y <= y1`).
#[must_use]
#[inline]
pub fn contains_inclusive(rect: Rect, point: Point) -> bool {
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}

/// A bounded retry budget for element lookup.
///
/// Hosts whose layout settles late (elements appear a few frames after the
/// tracker is built) retry a lookup a fixed number of times. The pause
/// between attempts is injected by the caller, so scheduling is the host's
/// concern and tests run without real time passing. An exhausted budget
/// gives up silently by returning `None`.
///
/// ```rust
/// use thicket_drag::RetryBudget;
///
/// let mut scans = 0;
/// let found = RetryBudget { attempts: 5 }.run(
///     |_attempt| { /* host would yield until the next frame here */ },
///     || {
///         scans += 1;
///         (scans == 3).then_some("ready")
///     },
/// );
/// assert_eq!(found, Some("ready"));
/// assert_eq!(scans, 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryBudget {
    /// Maximum number of attempts before giving up.
    pub attempts: u32,
}

impl Default for RetryBudget {
    fn default() -> Self {
        Self { attempts: 5 }
    }
}

impl RetryBudget {
    /// Runs `attempt` until it yields a value or the budget is exhausted,
    /// calling `pause` (with the zero-based attempt index) between attempts.
    pub fn run<T>(
        self,
        mut pause: impl FnMut(u32),
        mut attempt: impl FnMut() -> Option<T>,
    ) -> Option<T> {
        for tried in 0..self.attempts {
            if let Some(found) = attempt() {
                return Some(found);
            }
            if tried + 1 < self.attempts {
                pause(tried);
            }
        }
        None
    }
}

/// Id-keyed bounding rectangles in registration order.
///
/// Registration order matters: gesture-start hit scans take the first
/// containing rectangle, in the order elements were scanned (prefix order,
/// then the host's layout order within each prefix).
#[derive(Clone, Debug, Default)]
pub struct RectRegistry {
    /// `(id, rect)` pairs in registration order.
    entries: Vec<(ElementId, Rect)>,
    /// Id to slot in `entries`.
    index: HashMap<ElementId, usize>,
}

impl RectRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Registers an element, updating its rectangle in place (and keeping
    /// its registration slot) if it is already known.
    pub fn insert(&mut self, id: ElementId, rect: Rect) {
        match self.index.get(&id) {
            Some(&slot) => self.entries[slot].1 = rect,
            None => {
                self.index.insert(id.clone(), self.entries.len());
                self.entries.push((id, rect));
            }
        }
    }

    /// The captured rectangle for an id, if registered.
    #[must_use]
    pub fn rect_of(&self, id: &ElementId) -> Option<Rect> {
        self.index.get(id).map(|&slot| self.entries[slot].1)
    }

    /// Iterates entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&ElementId, Rect)> + '_ {
        self.entries.iter().map(|(id, rect)| (id, *rect))
    }

    /// Rebuilds the registry from a host scan over the given prefixes.
    ///
    /// The registry is cleared once, then every prefix contributes its
    /// elements; an element matched by two prefixes keeps its first slot.
    /// Empty prefixes are skipped (an empty prefix would match every id).
    pub fn rebuild<H: ElementHost + ?Sized>(&mut self, host: &H, prefixes: &[String]) {
        self.clear();
        for prefix in prefixes {
            if prefix.is_empty() {
                continue;
            }
            for (id, rect) in host.scan_prefix(prefix) {
                self.insert(id, rect);
            }
        }
    }

    /// Rebuilds with a retry budget, for hosts whose layout settles late.
    ///
    /// Each attempt is a full [`RectRegistry::rebuild`]; success is a
    /// non-empty registry. Gives up silently (leaving the registry empty)
    /// once the budget is exhausted, and returns whether any elements were
    /// found.
    pub fn rebuild_with_retry<H: ElementHost + ?Sized>(
        &mut self,
        host: &H,
        prefixes: &[String],
        budget: RetryBudget,
        pause: impl FnMut(u32),
    ) -> bool {
        budget
            .run(pause, || {
                self.rebuild(host, prefixes);
                (!self.is_empty()).then_some(())
            })
            .is_some()
    }

    /// The first registered element whose rectangle contains the point, in
    /// registration order.
    #[must_use]
    pub fn hit_first(&self, point: Point) -> Option<&ElementId> {
        self.entries
            .iter()
            .find(|(_, rect)| contains_inclusive(*rect, point))
            .map(|(id, _)| id)
    }

    /// All registered elements other than `skip` whose rectangles contain
    /// the point, in registration order.
    #[must_use]
    pub fn hits_excluding(&self, point: Point, skip: &ElementId) -> Vec<ElementId> {
        self.entries
            .iter()
            .filter(|(id, rect)| id != skip && contains_inclusive(*rect, point))
            .map(|(id, _)| id.clone())
            .collect()
    }
}
