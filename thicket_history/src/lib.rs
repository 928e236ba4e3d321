// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=thicket_history --heading-base-level=0

//! Thicket History: bounded undo/redo over a live form record.
//!
//! [`History`] owns a [`thicket_value::ValueMap`] form and a bounded,
//! most-recent-first window of past states. Every mutation —
//! [`History::set`], [`History::unset`], [`History::replace`],
//! [`History::remove`] — snapshots the pre-mutation form first, so each call
//! is exactly one undo step. Undo and redo move a cursor through the window;
//! both are silent no-ops at their boundaries and when the manager is
//! disabled.
//!
//! The window is bounded: with a configured `max` of *n*, the live form plus
//! at most *n − 1* snapshots are retained, and a fresh edit after undos
//! abandons the redo branch so history stays linear.
//!
//! ## Keyboard chords
//!
//! The host owns its input loop; it forwards key-down events as
//! [`KeyChord`] values and the manager interprets Ctrl/Cmd+Z and
//! Ctrl/Cmd+Shift+Z via [`History::on_key`]. Because the manager holds no
//! listener registration of its own, teardown is just dropping it.
//!
//! ## Minimal example
//!
//! ```rust
//! use thicket_history::{History, KeyChord};
//! use thicket_value::{Path, Value};
//!
//! let mut history = History::default();
//! history.set(&Path::parse("address.city"), Value::from("Lisbon"));
//! history.set(&Path::parse("address.city"), Value::from("Porto"));
//!
//! // Ctrl+Z steps back.
//! history.on_key(&KeyChord::undo());
//! let city = history.form().get_path(&Path::parse("address.city")).unwrap();
//! assert_eq!(city.downcast_ref::<String>().map(|s| s.as_str()), Some("Lisbon"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod history;
mod keymap;

pub use history::{History, HistoryOptions};
pub use keymap::{HistoryCommand, KeyChord};
