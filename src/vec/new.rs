// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{raw::RawBuffer, vec::DynArray};

impl<T> DynArray<T> {
    /// Constructs an empty array. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: RawBuffer::new(),
            len: 0,
        }
    }

    /// Constructs an empty array with room for exactly `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; calls `handle_alloc_error` if the
    /// allocator fails.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: RawBuffer::with_capacity(capacity),
            len: 0,
        }
    }

    /// Constructs an array of `len` default values, with capacity exactly `len`.
    ///
    /// If `T::default` panics, the values built so far are dropped and the
    /// storage is released before the panic propagates.
    ///
    /// Only available when `T: Default`; other element types are rejected at
    /// compile time:
    ///
    /// ```compile_fail
    /// use dyn_array::DynArray;
    ///
    /// struct NoDefault;
    /// let _v = DynArray::<NoDefault>::with_len(3);
    /// ```
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut v = Self::with_capacity(len);
        v.resize_with(len, T::default);
        v
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}
