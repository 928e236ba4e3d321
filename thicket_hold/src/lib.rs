// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=thicket_hold --heading-base-level=0

//! Thicket Hold: host-agnostic touch-and-hold detection.
//!
//! [`TouchHold`] recognizes "press and keep pressing" on an element. It owns
//! no timer: the host arms it with [`TouchHold::start`] when a contact goes
//! down on an element, schedules a callback every `interval_ms` however it
//! likes, and calls [`TouchHold::tick`] from that callback. Once the
//! accumulated time crosses `hold_ms`, `tick` returns the held element id
//! exactly once and the detector disarms. Lifting the contact before that
//! calls [`TouchHold::stop`], which also disarms.
//!
//! Because time only advances through `tick`, tests run without real time
//! passing.
//!
//! ## Minimal example
//!
//! ```rust
//! use thicket_hold::{HoldOptions, TouchHold};
//!
//! let mut hold = TouchHold::new(HoldOptions {
//!     interval_ms: 100,
//!     hold_ms: 200,
//! });
//!
//! hold.start("item3");
//! assert_eq!(hold.tick(), None); // 100ms held
//! assert_eq!(hold.tick(), Some("item3")); // 200ms: fires and disarms
//! assert_eq!(hold.tick(), None); // disarmed
//! ```
//!
//! This crate is `no_std`.

#![no_std]

/// Timing configuration for a [`TouchHold`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoldOptions {
    /// Milliseconds between host ticks.
    pub interval_ms: u64,
    /// Accumulated milliseconds after which the hold fires.
    pub hold_ms: u64,
}

impl Default for HoldOptions {
    fn default() -> Self {
        Self {
            interval_ms: 100,
            hold_ms: 200,
        }
    }
}

/// Tick-driven touch-and-hold detector, generic over the element id type.
#[derive(Clone, Debug)]
pub struct TouchHold<K> {
    interval_ms: u64,
    hold_ms: u64,
    held_ms: u64,
    touching: Option<K>,
}

impl<K> TouchHold<K> {
    /// Creates a disarmed detector.
    #[must_use]
    pub fn new(options: HoldOptions) -> Self {
        Self {
            interval_ms: options.interval_ms,
            hold_ms: options.hold_ms,
            held_ms: 0,
            touching: None,
        }
    }

    /// Arms the detector for the given element, resetting any accumulation.
    pub fn start(&mut self, id: K) {
        self.touching = Some(id);
        self.held_ms = 0;
    }

    /// Disarms the detector without firing.
    pub fn stop(&mut self) {
        self.touching = None;
        self.held_ms = 0;
    }

    /// Advances held time by one interval.
    ///
    /// Returns the held element id once the hold threshold is crossed, then
    /// disarms. Returns `None` on every other call, including while
    /// disarmed.
    pub fn tick(&mut self) -> Option<K> {
        self.touching.as_ref()?;
        self.held_ms += self.interval_ms;
        if self.held_ms >= self.hold_ms {
            self.held_ms = 0;
            self.touching.take()
        } else {
            None
        }
    }

    /// Returns `true` while a contact is being held.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.touching.is_some()
    }

    /// Accumulated held time in milliseconds.
    #[must_use]
    pub fn held_ms(&self) -> u64 {
        self.held_ms
    }

    /// The element currently held, if any.
    #[must_use]
    pub fn touching(&self) -> Option<&K> {
        self.touching.as_ref()
    }
}

impl<K> Default for TouchHold<K> {
    fn default() -> Self {
        Self::new(HoldOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_threshold_and_disarms() {
        let mut hold = TouchHold::new(HoldOptions {
            interval_ms: 50,
            hold_ms: 125,
        });
        hold.start(7_u32);

        assert_eq!(hold.tick(), None); // 50
        assert_eq!(hold.tick(), None); // 100
        assert_eq!(hold.tick(), Some(7)); // 150 >= 125
        assert!(!hold.is_armed());
        assert_eq!(hold.tick(), None);
    }

    #[test]
    fn stop_before_threshold_never_fires() {
        let mut hold = TouchHold::<&str>::default();
        hold.start("a");
        assert_eq!(hold.tick(), None);
        hold.stop();
        assert_eq!(hold.tick(), None);
        assert_eq!(hold.held_ms(), 0);
    }

    #[test]
    fn restart_resets_accumulation() {
        let mut hold = TouchHold::new(HoldOptions {
            interval_ms: 100,
            hold_ms: 200,
        });
        hold.start("a");
        assert_eq!(hold.tick(), None); // 100 held on "a"

        // A new press replaces the old one and starts from zero.
        hold.start("b");
        assert_eq!(hold.tick(), None); // 100
        assert_eq!(hold.tick(), Some("b")); // 200
    }

    #[test]
    fn disarmed_detector_ignores_ticks() {
        let mut hold = TouchHold::<u8>::default();
        for _ in 0..10 {
            assert_eq!(hold.tick(), None);
        }
        assert_eq!(hold.held_ms(), 0);
    }

    #[test]
    fn zero_hold_threshold_fires_on_first_tick() {
        let mut hold = TouchHold::new(HoldOptions {
            interval_ms: 16,
            hold_ms: 0,
        });
        hold.start(1_u8);
        assert_eq!(hold.tick(), Some(1));
    }
}
