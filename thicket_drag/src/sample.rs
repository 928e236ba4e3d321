// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan gesture samples.
//!
//! The tracker does not recognize gestures itself. An external recognizer
//! (pointer events, a touch library, a test harness) reports one
//! [`PanSample`] per gesture tick, and the tracker consumes the stream
//! through [`Tracker::pan`](crate::Tracker::pan).

use kurbo::{Point, Vec2};

/// Dominant axis direction of a pan gesture, as reported by the recognizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Moving up.
    #[default]
    Up,
    /// Moving down.
    Down,
    /// Moving left.
    Left,
    /// Moving right.
    Right,
}

/// One reported tick of an in-progress drag gesture.
///
/// `position` is in the same coordinate space as the registered rectangles.
/// `distance` is the absolute per-axis distance traveled since the gesture
/// began; its axis sum is what the tracker compares against the overlap lag
/// threshold. `delta` is the movement since the previous sample and `offset`
/// the signed offset from the gesture start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanSample {
    /// Current pointer position.
    pub position: Point,
    /// Absolute per-axis distance traveled since the gesture began.
    pub distance: Vec2,
    /// Movement since the previous sample.
    pub delta: Vec2,
    /// Signed offset from the gesture start.
    pub offset: Vec2,
    /// Dominant axis direction.
    pub direction: Direction,
    /// Elapsed gesture time in milliseconds.
    pub duration_ms: u64,
    /// First tick of a gesture.
    pub is_first: bool,
    /// Last tick of a gesture.
    pub is_final: bool,
    /// Gesture originated from a touch contact.
    pub touch: bool,
    /// Gesture originated from a mouse.
    pub mouse: bool,
}

impl Default for PanSample {
    fn default() -> Self {
        Self {
            position: Point::ZERO,
            distance: Vec2::ZERO,
            delta: Vec2::ZERO,
            offset: Vec2::ZERO,
            direction: Direction::default(),
            duration_ms: 0,
            is_first: false,
            is_final: false,
            touch: false,
            mouse: true,
        }
    }
}

impl PanSample {
    /// A gesture-start sample at the given position.
    #[must_use]
    pub fn first_at(position: Point) -> Self {
        Self {
            position,
            is_first: true,
            ..Self::default()
        }
    }

    /// An intermediate sample at the given position with the given absolute
    /// traveled distance.
    #[must_use]
    pub fn step(position: Point, distance: Vec2) -> Self {
        Self {
            position,
            distance,
            ..Self::default()
        }
    }

    /// A gesture-end sample at the given position.
    #[must_use]
    pub fn final_at(position: Point) -> Self {
        Self {
            position,
            is_final: true,
            ..Self::default()
        }
    }
}
