// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dotted key paths.
//!
//! A [`Path`] addresses a leaf (or subtree) of a [`ValueMap`](crate::ValueMap)
//! as a sequence of string segments: `"address.city"` parses to
//! `["address", "city"]`. There is no escaping; a dot always splits.
//!
//! # Example
//!
//! ```rust
//! use thicket_value::Path;
//!
//! let path = Path::parse("address.city");
//! assert_eq!(path.len(), 2);
//! assert_eq!(path.segments()[0], "address");
//! assert_eq!(path.to_string(), "address.city");
//! ```

use alloc::string::{String, ToString};
use core::fmt;
use smallvec::SmallVec;

/// Inline capacity for path segments. Form paths are rarely deeper than this.
const INLINE_SEGMENTS: usize = 4;

/// A dotted key path split into string segments.
///
/// Parsing follows the split-on-`.` rule of the form layer: a single segment
/// addresses a top-level key, more segments descend into nested maps. An
/// empty input parses to a single empty segment, which addresses the
/// empty-string key (this matches how the host's key strings behave and keeps
/// parsing total).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path {
    segments: SmallVec<[String; INLINE_SEGMENTS]>,
}

impl Path {
    /// Parses a dotted path such as `"a.b.c"`.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path.split('.').map(ToString::to_string).collect(),
        }
    }

    /// Builds a path from pre-split segments.
    #[must_use]
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// The segments of this path, in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the path has no segments.
    ///
    /// Only constructible through [`Path::from_segments`] with an empty
    /// iterator; [`Path::parse`] always yields at least one segment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl From<&str> for Path {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn parse_single_segment() {
        let path = Path::parse("name");
        assert_eq!(path.segments(), ["name"]);
    }

    #[test]
    fn parse_nested() {
        let path = Path::parse("a.b.c");
        assert_eq!(path.segments(), ["a", "b", "c"]);
    }

    #[test]
    fn parse_empty_is_one_empty_segment() {
        let path = Path::parse("");
        assert_eq!(path.len(), 1);
        assert_eq!(path.segments(), [""]);
        assert!(!path.is_empty());
    }

    #[test]
    fn from_segments_round_trips_display() {
        let path = Path::from_segments(vec!["address", "city"]);
        assert_eq!(path.to_string(), "address.city");
        assert_eq!(Path::parse(&path.to_string()), path);
    }

    #[test]
    fn empty_iterator_gives_empty_path() {
        let path = Path::from_segments(core::iter::empty::<String>());
        assert!(path.is_empty());
    }
}
