// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `thicket_history` crate.
//!
//! These exercise the bounded-window invariants and the nested-path mutation
//! contract end to end, the way a form UI drives them.

use thicket_history::{History, HistoryCommand, HistoryOptions, KeyChord};
use thicket_value::{Path, Value, ValueMap};

fn text(history: &History, path: &str) -> Option<String> {
    history
        .form()
        .get_path(&Path::parse(path))
        .and_then(|v| v.downcast_ref::<String>())
        .cloned()
}

#[test]
fn window_stays_bounded_for_any_change_sequence() {
    let mut history = History::new(HistoryOptions {
        max: 10,
        ..HistoryOptions::default()
    });
    for i in 0..100_i64 {
        history.set(&Path::parse("counter"), Value::from(i));
        assert!(
            history.snapshot_count() <= 9,
            "window exceeded max - 1 after change {i}"
        );
    }
}

#[test]
fn undo_then_redo_restores_pre_undo_form() {
    let mut history = History::default();
    history.set(&Path::parse("a"), Value::from("first"));
    history.set(&Path::parse("b"), Value::from("second"));
    history.set(&Path::parse("a"), Value::from("third"));

    for _ in 0..3 {
        if !history.undo() {
            break;
        }
        let keys_before = history.form().flat_keys();
        let a_before = text(&history, "a");
        // Stepping forward right after stepping back is a round trip.
        assert!(history.redo());
        assert!(history.undo());
        assert_eq!(history.form().flat_keys(), keys_before);
        assert_eq!(text(&history, "a"), a_before);
    }
}

#[test]
fn nested_set_updates_leaf_and_keeps_siblings() {
    let mut history = History::default();
    history.set(&Path::parse("a.sibling"), Value::from("untouched"));
    history.set(&Path::parse("a.b"), Value::from("leaf"));

    assert_eq!(text(&history, "a.b"), Some(String::from("leaf")));
    assert_eq!(text(&history, "a.sibling"), Some(String::from("untouched")));
}

#[test]
fn nested_unset_removes_leaf_but_keeps_parent() {
    let mut history = History::default();
    history.set(&Path::parse("a.b"), Value::from("gone"));
    history.set(&Path::parse("a.keep"), Value::from("here"));

    history.unset(&Path::parse("a.b"));
    assert_eq!(text(&history, "a.b"), None);
    assert_eq!(text(&history, "a.keep"), Some(String::from("here")));
    assert!(history.form().get("a").is_some());
}

#[test]
fn redo_at_tip_changes_nothing() {
    let mut history = History::default();
    history.set(&Path::parse("k"), Value::from("v"));

    let keys = history.form().flat_keys();
    assert_eq!(history.cursor(), 0);
    assert!(!history.redo());
    assert_eq!(history.cursor(), 0);
    assert_eq!(history.form().flat_keys(), keys);
}

#[test]
fn undo_at_oldest_retained_state_changes_nothing() {
    let mut history = History::new(HistoryOptions {
        max: 3,
        ..HistoryOptions::default()
    });
    for i in 0..5_i64 {
        history.set(&Path::parse("n"), Value::from(i));
    }

    while history.undo() {}
    let cursor = history.cursor();
    let keys = history.form().flat_keys();
    assert!(!history.undo());
    assert_eq!(history.cursor(), cursor);
    assert_eq!(history.form().flat_keys(), keys);
}

#[test]
fn remove_deletes_top_level_field_and_is_undoable() {
    let defaults: ValueMap = [("name", Value::from("Ada")), ("role", Value::from("eng"))]
        .into_iter()
        .collect();
    let mut history = History::new(HistoryOptions {
        defaults: Some(defaults),
        ..HistoryOptions::default()
    });

    history.remove("role");
    assert_eq!(text(&history, "role"), None);
    assert_eq!(text(&history, "name"), Some(String::from("Ada")));

    assert!(history.undo());
    assert_eq!(text(&history, "role"), Some(String::from("eng")));
}

#[test]
fn keyboard_session_walks_history_both_ways() {
    let mut history = History::default();
    history.set(&Path::parse("draft"), Value::from("v1"));
    history.set(&Path::parse("draft"), Value::from("v2"));
    history.set(&Path::parse("draft"), Value::from("v3"));

    let cmd_z = KeyChord {
        key: 'z',
        ctrl: false,
        meta: true,
        shift: false,
    };
    let cmd_shift_z = KeyChord {
        key: 'Z',
        ctrl: false,
        meta: true,
        shift: true,
    };

    assert_eq!(history.on_key(&cmd_z), Some(HistoryCommand::Undo));
    assert_eq!(history.on_key(&cmd_z), Some(HistoryCommand::Undo));
    assert_eq!(text(&history, "draft"), Some(String::from("v1")));

    assert_eq!(history.on_key(&cmd_shift_z), Some(HistoryCommand::Redo));
    assert_eq!(text(&history, "draft"), Some(String::from("v2")));

    // Past the boundary the chord is still recognized, but nothing moves.
    assert_eq!(history.on_key(&cmd_shift_z), Some(HistoryCommand::Redo));
    assert_eq!(history.on_key(&cmd_shift_z), Some(HistoryCommand::Redo));
    assert_eq!(text(&history, "draft"), Some(String::from("v3")));
}
