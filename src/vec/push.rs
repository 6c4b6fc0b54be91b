// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw::AllocFailure, vec::DynArray};

// Core imports
use core::ptr;

impl<T> DynArray<T> {
    /// Appends `value` and returns a reference to it in its new slot.
    ///
    /// When the array is full it grows to `max(1, 2 * capacity)`.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; calls `handle_alloc_error` if the
    /// allocator fails. The array is unchanged in both cases.
    #[inline]
    pub fn push(&mut self, value: T) -> &mut T {
        self.push_with(|| value)
    }

    /// Appends the value produced by `f`, constructing it directly in its
    /// final slot.
    ///
    /// When the array is full the new block is allocated first and `f` runs
    /// into it *before* any existing element is moved. If `f` panics, the new
    /// block is released and the array is left exactly as it was. `len` grows
    /// only after the value is in place.
    pub fn push_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.try_push_with(f)
            .unwrap_or_else(|failure| failure.raise())
    }

    /// Appends `value`, returning an error instead of panicking or aborting
    /// when storage cannot be obtained.
    ///
    /// On error the array is unchanged and `value` is dropped.
    #[inline]
    pub fn try_push(&mut self, value: T) -> Result<&mut T, Error> {
        self.try_push_with(|| value).map_err(Error::from)
    }

    fn try_push_with<F>(&mut self, f: F) -> Result<&mut T, AllocFailure>
    where
        F: FnOnce() -> T,
    {
        let len = self.len;
        if len == self.capacity() {
            return self.grow_and_place(len, f);
        }

        // SAFETY: `len < capacity`, so the slot is in bounds and uninitialized.
        unsafe {
            let slot = self.buf.slot_mut(len);
            slot.write(f());
            self.len = len + 1;
            Ok(&mut *slot)
        }
    }

    /// Removes the last element and returns it, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: Before decrementing, all elements in `buf[..old_len]` are
            // initialized by invariant, so `buf[self.len]` (the old last slot)
            // still contains a `T`. Shrinking `len` first hands ownership of it
            // to the caller.
            Some(unsafe { ptr::read(self.buf.slot(self.len)) })
        }
    }
}
