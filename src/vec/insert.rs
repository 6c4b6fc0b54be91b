// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw::AllocFailure, vec::DynArray};

// Core imports
use core::ptr;

impl<T> DynArray<T> {
    /// Inserts `value` at `index`, shifting `[index..len)` one slot right, and
    /// returns a reference to the inserted element.
    ///
    /// `index == len` appends.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`, or on capacity overflow.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        self.insert_with(index, || value)
    }

    /// Inserts the value produced by `f` at `index`.
    ///
    /// - With spare capacity, `f` runs first, then the tail is shifted right by
    ///   one and the value written into the gap.
    /// - When full, the array grows to `max(1, 2 * capacity)`; `f` runs
    ///   directly into slot `index` of the new block, then the elements
    ///   before and after `index` are moved in around it.
    ///
    /// Either way, a panic in `f` leaves the array unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`, or on capacity overflow.
    pub fn insert_with<F>(&mut self, index: usize, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        let len = self.len;
        if index > len {
            panic!("insertion index (is {index}) should be <= len (is {len})");
        }
        self.insert_in_bounds(index, f)
            .unwrap_or_else(|failure| failure.raise())
    }

    /// Fallible form of [`insert`](DynArray::insert).
    ///
    /// - Returns [`Error::OutOfBounds`] if `index > len`.
    /// - Returns [`Error::CapacityOverflow`] / [`Error::AllocFailed`] if the
    ///   array is full and cannot grow.
    ///
    /// On error the array is unchanged and `value` is dropped.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T, Error> {
        if index > self.len {
            return Err(Error::OutOfBounds);
        }
        self.insert_in_bounds(index, || value).map_err(Error::from)
    }

    fn insert_in_bounds<F>(&mut self, index: usize, f: F) -> Result<&mut T, AllocFailure>
    where
        F: FnOnce() -> T,
    {
        let len = self.len;
        if len == self.capacity() {
            return self.grow_and_place(index, f);
        }

        let value = f();

        // SAFETY: `index <= len < capacity`. Shifting `[index..len)` to
        // `[index + 1..len + 1)` stays within capacity; `ptr::copy` handles the
        // overlap. The vacated slot at `index` is then overwritten without
        // dropping, since its old value now lives at `index + 1`.
        unsafe {
            let p = self.buf.slot_mut(index);
            ptr::copy(p, p.add(1), len - index);
            p.write(value);
            self.len = len + 1;
            Ok(&mut *p)
        }
    }
}
