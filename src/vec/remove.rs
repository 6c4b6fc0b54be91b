// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::DynArray};

// Core imports
use core::ptr;

impl<T> DynArray<T> {
    /// Drops the element at `index`, shifting the tail left by one, and
    /// returns `index`: the position of the element that followed it (or
    /// `len()` if it was the last one).
    ///
    /// The element is dropped after the array is back in a consistent state.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    /// Removes and returns the element at `index`, shifting subsequent
    /// elements left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        if index >= len {
            panic!("removal index (is {index}) should be < len (is {len})");
        }

        // SAFETY: `index < len`, so `buf[index]` is initialized. Reading it out
        // leaves a logical hole that the overlap-safe copy closes by moving
        // `[index + 1..len)` down one slot; the last slot is then outside the
        // shrunk `len` and never read again.
        unsafe {
            let p = self.buf.slot_mut(index);
            let out = ptr::read(p);
            ptr::copy(p.add(1), p, len - index - 1);
            self.len = len - 1;
            out
        }
    }

    /// Fallible variant of [`remove`](DynArray::remove), returning
    /// [`Error::OutOfBounds`] when `index >= len`.
    #[inline]
    pub fn try_remove(&mut self, index: usize) -> Result<T, Error> {
        if index >= self.len {
            return Err(Error::OutOfBounds);
        }
        Ok(self.remove(index))
    }

    /// Removes and returns the element at `index` by moving the last element
    /// into its place. `O(1)`, does not preserve order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn swap_remove(&mut self, index: usize) -> T {
        let len = self.len;
        if index >= len {
            panic!("swap_remove index (is {index}) should be < len (is {len})");
        }

        // SAFETY: `index` and `len - 1` are both initialized. The removed value
        // is read out, then the last value is moved into the hole (a no-op copy
        // when they are the same slot).
        unsafe {
            let base = self.buf.as_mut_ptr();
            let out = ptr::read(base.add(index));
            ptr::copy(base.add(len - 1), base.add(index), 1);
            self.len = len - 1;
            out
        }
    }
}
