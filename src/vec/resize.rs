// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::DynArray;

// Core imports
use core::ptr;

impl<T> DynArray<T> {
    /// Resizes to `new_len`.
    ///
    /// - Shrinking drops the trailing `len - new_len` elements.
    /// - Growing reserves exactly `new_len` slots (if needed) and fills the new
    ///   tail with `T::default()`.
    /// - `new_len == len` is a no-op.
    #[inline]
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Resizes to `new_len`, filling any new slots with values returned by `f`.
    ///
    /// If `f` panics, the elements produced so far stay in the array.
    pub fn resize_with<F>(&mut self, new_len: usize, mut f: F)
    where
        F: FnMut() -> T,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }

        self.reserve(new_len);
        while self.len < new_len {
            // Capacity was reserved above, so this never reallocates.
            self.push_with(&mut f);
        }
    }

    /// Shrinks to `new_len` if `new_len < len`; otherwise a no-op.
    ///
    /// Capacity is unchanged.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }

        // SAFETY: `[new_len..len)` is initialized. `len` is lowered before the
        // drops run, so a panicking destructor cannot cause the remaining tail
        // to be dropped a second time.
        unsafe {
            let first = self.buf.slot_mut(new_len);
            let tail = ptr::slice_from_raw_parts_mut(first, self.len - new_len);
            self.len = new_len;
            ptr::drop_in_place(tail);
        }
    }

    /// Drops every element. Capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }
}
