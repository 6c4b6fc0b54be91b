// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::DynArray;

// Core imports
use core::mem;

impl<T> DynArray<T> {
    /// Exchanges storage and length with `other`. No element is touched and
    /// nothing is allocated.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Moves the contents out, leaving an empty array with capacity `0`.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Drops the current contents, then takes over `other`'s storage and
    /// elements, leaving `other` empty with capacity `0`.
    ///
    /// No element of `other` is moved, cloned, or dropped.
    #[inline]
    pub fn move_from(&mut self, other: &mut Self) {
        *self = other.take();
    }
}
