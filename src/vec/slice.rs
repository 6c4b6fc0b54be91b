// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::DynArray;

impl<T> DynArray<T> {
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: By invariant, all elements in `buf[..self.len]` are initialized,
        // and `self.len <= capacity`, so this creates a valid shared slice of
        // initialized `T`. The pointer is non-null and aligned even when
        // nothing is allocated.
        unsafe { core::slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: By invariant, all elements in `buf[..self.len]` are initialized,
        // and `self.len <= capacity`. We have exclusive access via `&mut self`,
        // so it is sound to create a mutable slice over `buf[..self.len]`.
        unsafe { core::slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    /// Returns a raw pointer to the start of the backing storage.
    ///
    /// Only the first `len` elements are initialized. Code that dereferences
    /// this pointer must not read `ptr.add(i)` for any `i >= self.len()`.
    /// The pointer is invalidated by any operation that reallocates.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Returns a mutable raw pointer to the start of the backing storage.
    ///
    /// Writing to slots beyond `len` is allowed, but does **not** update
    /// `len`; such writes are invisible to the array and are never dropped.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }
}
