// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard chord interpretation for undo/redo.
//!
//! The history manager does not listen for key events itself; the host owns
//! its input loop (and its teardown) and forwards key-down events as
//! [`KeyChord`] values. The chord semantics are the conventional ones:
//! Ctrl/Cmd+Z is undo, Ctrl/Cmd+Shift+Z is redo.
//!
//! Matching is ASCII case-insensitive on the key because hosts report the
//! shifted key as `'Z'` while shift is held.
//!
//! ```rust
//! use thicket_history::{HistoryCommand, KeyChord};
//!
//! let chord = KeyChord { key: 'Z', ctrl: false, meta: true, shift: true };
//! assert_eq!(chord.command(), Some(HistoryCommand::Redo));
//! ```

/// A key-down event as seen by the history manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyChord {
    /// The pressed key, as reported by the host.
    pub key: char,
    /// Control modifier.
    pub ctrl: bool,
    /// Command/meta modifier.
    pub meta: bool,
    /// Shift modifier.
    pub shift: bool,
}

impl KeyChord {
    /// The Ctrl+Z undo chord.
    #[must_use]
    pub fn undo() -> Self {
        Self {
            key: 'z',
            ctrl: true,
            meta: false,
            shift: false,
        }
    }

    /// The Ctrl+Shift+Z redo chord.
    #[must_use]
    pub fn redo() -> Self {
        Self {
            key: 'z',
            ctrl: true,
            meta: false,
            shift: true,
        }
    }

    /// Interprets this chord as a history command, if it is one.
    ///
    /// Either the control or the meta modifier qualifies, so the same
    /// mapping serves both Ctrl+Z and Cmd+Z hosts.
    #[must_use]
    pub fn command(&self) -> Option<HistoryCommand> {
        if !self.key.eq_ignore_ascii_case(&'z') || !(self.ctrl || self.meta) {
            return None;
        }
        Some(if self.shift {
            HistoryCommand::Redo
        } else {
            HistoryCommand::Undo
        })
    }
}

/// A recognized history keyboard command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HistoryCommand {
    /// Step back one snapshot.
    Undo,
    /// Step forward one snapshot.
    Redo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_z_is_undo() {
        assert_eq!(KeyChord::undo().command(), Some(HistoryCommand::Undo));
    }

    #[test]
    fn meta_z_is_undo() {
        let chord = KeyChord {
            key: 'z',
            ctrl: false,
            meta: true,
            shift: false,
        };
        assert_eq!(chord.command(), Some(HistoryCommand::Undo));
    }

    #[test]
    fn shift_variant_is_redo_even_with_uppercase_key() {
        let chord = KeyChord {
            key: 'Z',
            ctrl: true,
            meta: false,
            shift: true,
        };
        assert_eq!(chord.command(), Some(HistoryCommand::Redo));
    }

    #[test]
    fn unmodified_or_wrong_key_is_ignored() {
        let plain = KeyChord {
            key: 'z',
            ctrl: false,
            meta: false,
            shift: false,
        };
        assert_eq!(plain.command(), None);

        let wrong_key = KeyChord {
            key: 'y',
            ctrl: true,
            meta: false,
            shift: false,
        };
        assert_eq!(wrong_key.command(), None);
    }
}
