// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Type-erased scalar leaves for the value tree.
//!
//! Form records hold values of arbitrary host types (strings, numbers,
//! timestamps, whatever the UI binds). [`Scalar`] wraps any `'static + Clone`
//! value behind [`core::any::Any`] so that a [`ValueMap`](crate::ValueMap)
//! can store heterogeneous leaves and still be cloned for snapshots.
//!
//! # Example
//!
//! ```rust
//! use thicket_value::Scalar;
//!
//! let value = Scalar::new(42_i32);
//! assert!(value.is::<i32>());
//! assert_eq!(value.downcast_ref::<i32>(), Some(&42));
//!
//! let snapshot = value.clone();
//! assert_eq!(snapshot.downcast_ref::<i32>(), Some(&42));
//! ```

use alloc::boxed::Box;
use core::any::Any;
use core::fmt;

/// A type-erased, clonable scalar value.
///
/// This is the leaf node of the value tree. The concrete type is recovered
/// with [`Scalar::downcast_ref`]; cloning clones the underlying value through
/// its erased `Clone` impl, which is what makes whole-map snapshots cheap to
/// express.
pub struct Scalar {
    inner: Box<dyn CloneableAny>,
}

impl Scalar {
    /// Wraps a concrete value.
    #[must_use]
    pub fn new<T: Clone + 'static>(value: T) -> Self {
        Self {
            inner: Box::new(value),
        }
    }

    /// Returns `true` if the contained value is of type `T`.
    #[must_use]
    #[inline]
    pub fn is<T: 'static>(&self) -> bool {
        self.inner.as_any().is::<T>()
    }

    /// Attempts to downcast to a reference of type `T`.
    ///
    /// Returns `None` if the contained value is not of type `T`.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.inner.as_any().downcast_ref()
    }
}

impl Clone for Scalar {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone_boxed(),
        }
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scalar")
            .field("type_id", &self.inner.as_any().type_id())
            .finish_non_exhaustive()
    }
}

/// Trait object for erased values that can be cloned.
trait CloneableAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn clone_boxed(&self) -> Box<dyn CloneableAny>;
}

impl<T: Clone + 'static> CloneableAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_boxed(&self) -> Box<dyn CloneableAny> {
        Box::new(self.clone())
    }
}
