// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The value tree: string-keyed maps of scalar or map nodes.
//!
//! [`ValueMap`] is the record type behind form state. It is a sorted vector
//! with binary-search lookup rather than a hash map: form records are small
//! (a handful to a few dozen keys), entries stay in deterministic
//! lexicographic order, and cloning for snapshots is a straight memcpy of the
//! spine plus per-leaf clones.
//!
//! Dotted-path operations implement the nested-mutation contract of the form
//! layer:
//!
//! - [`ValueMap::set_path`] creates (or coerces) intermediate maps as needed
//!   and never fails.
//! - [`ValueMap::unset_path`] removes a leaf and treats missing paths as a
//!   no-op.
//! - [`ValueMap::get_path`] returns `None` on any missing or scalar
//!   intermediate.
//!
//! # Example
//!
//! ```rust
//! use thicket_value::{Path, Value, ValueMap};
//!
//! let mut form = ValueMap::new();
//! form.set_path(&Path::parse("address.city"), Value::from("Lisbon"));
//!
//! let city = form.get_path(&Path::parse("address.city")).unwrap();
//! assert_eq!(city.downcast_ref::<String>().map(|s| s.as_str()), Some("Lisbon"));
//!
//! assert!(form.unset_path(&Path::parse("address.city")));
//! assert!(form.get_path(&Path::parse("address.city")).is_none());
//! // The intermediate map survives the unset.
//! assert!(form.get("address").is_some());
//! ```

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::path::Path;
use crate::scalar::Scalar;

/// A node in the value tree: either a scalar leaf or a nested map.
#[derive(Clone, Debug)]
pub enum Value {
    /// A type-erased scalar leaf.
    Scalar(Scalar),
    /// A nested string-keyed map.
    Map(ValueMap),
}

impl Value {
    /// Wraps a concrete value as a scalar leaf.
    #[must_use]
    pub fn scalar<T: Clone + 'static>(value: T) -> Self {
        Self::Scalar(Scalar::new(value))
    }

    /// Returns `true` if this node is a map.
    #[must_use]
    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// Borrows the nested map, if this node is one.
    #[must_use]
    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Self::Map(map) => Some(map),
            Self::Scalar(_) => None,
        }
    }

    /// Mutably borrows the nested map, if this node is one.
    pub fn as_map_mut(&mut self) -> Option<&mut ValueMap> {
        match self {
            Self::Map(map) => Some(map),
            Self::Scalar(_) => None,
        }
    }

    /// Attempts to downcast a scalar leaf to a reference of type `T`.
    ///
    /// Returns `None` for maps and for scalars of a different type.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        match self {
            Self::Scalar(scalar) => scalar.downcast_ref(),
            Self::Map(_) => None,
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<ValueMap> for Value {
    fn from(map: ValueMap) -> Self {
        Self::Map(map)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::scalar(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::scalar(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::scalar(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::scalar(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::scalar(value)
    }
}

/// A string-keyed map of [`Value`] nodes, sorted by key.
///
/// Cloning a `ValueMap` produces an independent snapshot: the spine is
/// deep-cloned and scalar leaves are cloned through their erased `Clone`.
#[derive(Clone, Debug, Default)]
pub struct ValueMap {
    /// Entries sorted by key for binary-search lookup.
    entries: Vec<(String, Value)>,
}

impl ValueMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of direct entries (nested entries are not counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    fn find(&self, key: &str) -> Result<usize, usize> {
        self.entries.binary_search_by(|(k, _)| k.as_str().cmp(key))
    }

    /// Looks up a direct entry by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.find(key).ok().map(|idx| &self.entries[idx].1)
    }

    /// Mutably looks up a direct entry by key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        match self.find(key) {
            Ok(idx) => Some(&mut self.entries[idx].1),
            Err(_) => None,
        }
    }

    /// Inserts or replaces a direct entry, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.find(&key) {
            Ok(idx) => Some(core::mem::replace(&mut self.entries[idx].1, value)),
            Err(idx) => {
                self.entries.insert(idx, (key, value));
                None
            }
        }
    }

    /// Removes a direct entry, returning its value if present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        match self.find(key) {
            Ok(idx) => Some(self.entries.remove(idx).1),
            Err(_) => None,
        }
    }

    /// Iterates over direct entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates over direct keys in key order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Reads the node at a dotted path.
    ///
    /// Returns `None` if any intermediate is missing or a scalar.
    #[must_use]
    pub fn get_path(&self, path: &Path) -> Option<&Value> {
        let (first, rest) = path.segments().split_first()?;
        let node = self.get(first)?;
        if rest.is_empty() {
            return Some(node);
        }
        let mut current = node.as_map()?;
        let (leaf, middle) = rest.split_last()?;
        for segment in middle {
            current = current.get(segment)?.as_map()?;
        }
        current.get(leaf)
    }

    /// Writes a node at a dotted path, creating intermediate maps as needed.
    ///
    /// A scalar sitting where an intermediate map is required is replaced by
    /// a fresh map, so the write always lands. An empty path is a no-op.
    pub fn set_path(&mut self, path: &Path, value: impl Into<Value>) {
        self.set_segments(path.segments(), value.into());
    }

    fn set_segments(&mut self, segments: &[String], value: Value) {
        let Some((first, rest)) = segments.split_first() else {
            return;
        };
        if rest.is_empty() {
            self.insert(first.clone(), value);
        } else {
            self.ensure_map(first).set_segments(rest, value);
        }
    }

    /// Returns the map at `key`, inserting or coercing one if needed.
    fn ensure_map(&mut self, key: &str) -> &mut Self {
        let idx = match self.find(key) {
            Ok(idx) => idx,
            Err(idx) => {
                self.entries.insert(idx, (key.to_string(), Value::Map(Self::new())));
                idx
            }
        };
        if !self.entries[idx].1.is_map() {
            self.entries[idx].1 = Value::Map(Self::new());
        }
        match &mut self.entries[idx].1 {
            Value::Map(map) => map,
            Value::Scalar(_) => unreachable!("slot was coerced to a map above"),
        }
    }

    /// Removes the node at a dotted path.
    ///
    /// Returns `true` if a node was removed. Missing paths (including scalar
    /// intermediates) are a no-op; intermediates are never created.
    pub fn unset_path(&mut self, path: &Path) -> bool {
        self.unset_segments(path.segments())
    }

    fn unset_segments(&mut self, segments: &[String]) -> bool {
        let Some((first, rest)) = segments.split_first() else {
            return false;
        };
        if rest.is_empty() {
            self.remove(first).is_some()
        } else {
            match self.get_mut(first) {
                Some(Value::Map(map)) => map.unset_segments(rest),
                _ => false,
            }
        }
    }

    /// Lists every dotted key path in the tree, depth first and in key order.
    ///
    /// Map-valued keys are listed themselves *and* contribute their nested
    /// keys, so `{a: {b: 1}}` yields `["a", "a.b"]`.
    #[must_use]
    pub fn flat_keys(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_keys(None, &mut out);
        out
    }

    fn collect_keys(&self, prefix: Option<&str>, out: &mut Vec<String>) {
        for (key, value) in self.iter() {
            let dotted = match prefix {
                Some(prefix) => format!("{prefix}.{key}"),
                None => key.to_string(),
            };
            if let Value::Map(map) = value {
                out.push(dotted.clone());
                map.collect_keys(Some(&dotted), out);
            } else {
                out.push(dotted);
            }
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ValueMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}
