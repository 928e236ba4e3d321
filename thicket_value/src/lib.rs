// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=thicket_value --heading-base-level=0

//! Thicket Value: a typed value tree for form-like records.
//!
//! UI form state is a string-keyed record whose leaves are values of
//! arbitrary host types and whose interior nodes are nested records. This
//! crate models that as an explicit tagged union — [`Value::Scalar`] wrapping
//! a type-erased clonable value, [`Value::Map`] wrapping a [`ValueMap`] —
//! instead of run-time object-shape probing.
//!
//! Dotted key paths ([`Path`]) address nested leaves, with the degradation
//! rules a form layer wants:
//!
//! - Writes through a missing (or scalar) intermediate create the
//!   intermediate map and land.
//! - Deletes of a missing path are a silent no-op.
//! - Reads return `None` rather than erroring.
//!
//! ## Minimal example
//!
//! ```rust
//! use thicket_value::{Path, Value, ValueMap};
//!
//! let mut form = ValueMap::new();
//! form.insert("name", Value::from("Ada"));
//! form.set_path(&Path::parse("address.city"), Value::from("London"));
//!
//! // Parent paths are listed alongside leaves.
//! assert_eq!(form.flat_keys(), vec!["address", "address.city", "name"]);
//!
//! // Cloning is a snapshot: later edits don't leak into the clone.
//! let snapshot = form.clone();
//! form.set_path(&Path::parse("address.city"), Value::from("Paris"));
//! let kept = snapshot.get_path(&Path::parse("address.city")).unwrap();
//! assert_eq!(kept.downcast_ref::<String>().map(|s| s.as_str()), Some("London"));
//! ```
//!
//! Snapshot cloning is what `thicket_history` builds its bounded undo/redo
//! window on.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod map;
mod path;
mod scalar;

pub use map::{Value, ValueMap};
pub use path::Path;
pub use scalar::Scalar;
