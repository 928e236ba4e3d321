// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bounded snapshot history over a live form record.
//!
//! [`History`] owns the current [`ValueMap`] form plus a most-recent-first
//! list of past states. Every mutation snapshots the pre-mutation form before
//! applying itself, so one mutation is always one undo step.
//!
//! ## Invariants
//!
//! - The snapshot list holds at most `max - 1` past states; with the live
//!   form that bounds retained state at `max` records.
//! - `cursor` counts the undos currently applied. Entries in front of the
//!   cursor are the redo branch (states newer than the current form); entries
//!   at and behind it are undo candidates. A mutation drops the redo branch
//!   before recording, so history stays linear.
//! - `undo` at the oldest retained state and `redo` at the newest are silent
//!   no-ops; neither ever errors.
//!
//! Undo and redo swap the live form with the stored state instead of cloning,
//! which keeps both O(1) in record size.

use alloc::vec::Vec;

use thicket_value::{Path, Value, ValueMap};

use crate::keymap::{HistoryCommand, KeyChord};

/// Configuration for a [`History`].
#[derive(Clone, Debug)]
pub struct HistoryOptions {
    /// Initial contents of the form.
    pub defaults: Option<ValueMap>,
    /// Retained-state bound: the live form plus at most `max - 1` snapshots.
    pub max: usize,
    /// Gates `undo`/`redo` and keyboard handling. Mutations always apply.
    pub enabled: bool,
}

impl Default for HistoryOptions {
    fn default() -> Self {
        Self {
            defaults: None,
            max: 50,
            enabled: true,
        }
    }
}

/// A form record with bounded undo/redo.
///
/// ## Minimal example
///
/// ```rust
/// use thicket_history::History;
/// use thicket_value::{Path, Value};
///
/// let mut history = History::default();
/// history.set(&Path::parse("name"), Value::from("Ada"));
/// history.set(&Path::parse("name"), Value::from("Grace"));
///
/// assert!(history.undo());
/// let name = history.form().get("name").unwrap();
/// assert_eq!(name.downcast_ref::<String>().map(|s| s.as_str()), Some("Ada"));
///
/// assert!(history.redo());
/// let name = history.form().get("name").unwrap();
/// assert_eq!(name.downcast_ref::<String>().map(|s| s.as_str()), Some("Grace"));
/// ```
#[derive(Clone, Debug)]
pub struct History {
    form: ValueMap,
    /// Past states, most recent first.
    snapshots: Vec<ValueMap>,
    /// Number of undos currently applied; `0` means the form is at the tip.
    cursor: usize,
    max: usize,
    enabled: bool,
}

impl Default for History {
    fn default() -> Self {
        Self::new(HistoryOptions::default())
    }
}

impl History {
    /// Creates a history from the given options.
    #[must_use]
    pub fn new(options: HistoryOptions) -> Self {
        Self {
            form: options.defaults.unwrap_or_default(),
            snapshots: Vec::new(),
            cursor: 0,
            max: options.max,
            enabled: options.enabled,
        }
    }

    /// The live form record.
    #[must_use]
    pub fn form(&self) -> &ValueMap {
        &self.form
    }

    /// Number of retained snapshots.
    #[must_use]
    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Number of undos currently applied.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The configured retained-state bound.
    #[must_use]
    pub fn max(&self) -> usize {
        self.max
    }

    /// Whether undo/redo and keyboard handling are enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables undo/redo and keyboard handling.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns `true` if `undo` would apply.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.enabled && self.cursor < self.snapshots.len()
    }

    /// Returns `true` if `redo` would apply.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.enabled && self.cursor > 0
    }

    /// Snapshots the pre-mutation form. Called before every mutation.
    fn record(&mut self) {
        if self.cursor > 0 {
            // A fresh edit after undos abandons the redo branch.
            self.snapshots.drain(..self.cursor);
            self.cursor = 0;
        }
        self.snapshots.insert(0, self.form.clone());
        self.snapshots.truncate(self.max.saturating_sub(1));
    }

    /// Sets the node at a dotted path, creating intermediate maps as needed.
    pub fn set(&mut self, path: &Path, value: impl Into<Value>) {
        self.record();
        self.form.set_path(path, value);
    }

    /// Removes the node at a dotted path. Missing paths are a no-op (but
    /// still recorded, so the keystroke is still one undo step).
    pub fn unset(&mut self, path: &Path) {
        self.record();
        self.form.unset_path(path);
    }

    /// Replaces the entire form with a copy of the given record.
    pub fn replace(&mut self, form: ValueMap) {
        self.record();
        self.form = form;
    }

    /// Removes a top-level field.
    pub fn remove(&mut self, key: &str) {
        self.record();
        self.form.remove(key);
    }

    /// Steps back one snapshot. Returns `false` (leaving everything
    /// untouched) when disabled or already at the oldest retained state.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        core::mem::swap(&mut self.form, &mut self.snapshots[self.cursor]);
        self.cursor += 1;
        true
    }

    /// Steps forward one snapshot. Returns `false` when disabled or already
    /// at the tip.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor -= 1;
        core::mem::swap(&mut self.form, &mut self.snapshots[self.cursor]);
        true
    }

    /// Interprets and applies a keyboard chord.
    ///
    /// Returns the recognized command, or `None` when disabled or the chord
    /// is not a history chord. Boundary no-ops still report the command; they
    /// are silent by contract, not errors.
    pub fn on_key(&mut self, chord: &KeyChord) -> Option<HistoryCommand> {
        if !self.enabled {
            return None;
        }
        let command = chord.command()?;
        match command {
            HistoryCommand::Undo => {
                self.undo();
            }
            HistoryCommand::Redo => {
                self.redo();
            }
        }
        Some(command)
    }
}
