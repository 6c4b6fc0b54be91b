// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capacity management and relocation.
//!
//! Relocation is always a bitwise move into a freshly allocated block. A Rust
//! move cannot fail, so there is no copy-based fallback: once the new block is
//! obtained, the transfer is guaranteed to complete and the old block is
//! released without dropping anything (its values now live in the new block).

// Crate imports
use crate::{
    error::Error,
    raw::{AllocFailure, RawBuffer},
    vec::DynArray,
};

// Core imports
use core::ptr;

impl<T> DynArray<T> {
    /// Ensures `capacity() >= new_capacity`.
    ///
    /// `new_capacity` is the **total** capacity wanted, not an additional
    /// amount. If it is not larger than the current capacity this is a no-op;
    /// otherwise exactly `new_capacity` slots are allocated and the elements are
    /// moved over. Length and contents are unchanged.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; calls `handle_alloc_error` if the
    /// allocator fails. In both cases the array is untouched.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity <= self.capacity() {
            return;
        }
        self.relocate(new_capacity)
            .unwrap_or_else(|failure| failure.raise());
    }

    /// Fallible form of [`reserve`](DynArray::reserve).
    ///
    /// Returns [`Error::CapacityOverflow`] or [`Error::AllocFailed`] and leaves
    /// the array unchanged on failure.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), Error> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        self.relocate(new_capacity).map_err(Error::from)
    }

    /// Reallocates so that `capacity() == len()`.
    pub fn shrink_to_fit(&mut self) {
        if self.capacity() > self.len {
            self.relocate(self.len)
                .unwrap_or_else(|failure| failure.raise());
        }
    }

    /// Moves every element into a new block of exactly `new_capacity` slots.
    fn relocate(&mut self, new_capacity: usize) -> Result<(), AllocFailure> {
        debug_assert!(new_capacity >= self.len);
        let mut fresh = RawBuffer::<T>::allocate(new_capacity)?;

        // SAFETY: `[0..len)` is initialized in the old block, the new block has
        // room for at least `len` values, and two distinct allocations never
        // overlap. After the copy the old slots are logically uninitialized;
        // swapping hands them to `fresh`, which only frees memory on drop.
        unsafe { ptr::copy_nonoverlapping(self.buf.as_ptr(), fresh.as_mut_ptr(), self.len) };
        self.buf.swap(&mut fresh);
        Ok(())
    }

    /// Capacity to grow to when a full array needs one more slot.
    pub(crate) fn grown_capacity(&self) -> Result<usize, AllocFailure> {
        match self.capacity() {
            0 => Ok(1),
            cap => cap.checked_mul(2).ok_or(AllocFailure::CapacityOverflow),
        }
    }

    /// Makes room for `additional` more elements, at least doubling when a
    /// reallocation is needed so that repeated calls stay amortized.
    pub(crate) fn reserve_additional(&mut self, additional: usize) {
        if additional <= self.spare_capacity() {
            return;
        }
        let needed = self
            .len
            .checked_add(additional)
            .unwrap_or_else(|| AllocFailure::CapacityOverflow.raise());
        let doubled = self.capacity().saturating_mul(2);
        self.reserve(needed.max(doubled));
    }

    /// Grows a full array and places `f()` at `index` of the new block.
    ///
    /// The value is constructed first, directly in its final slot. Only then
    /// are `[0..index)` and `[index..len)` moved into place around it. If
    /// allocation fails or `f` panics, the new block is released and `self`
    /// is exactly as before.
    pub(crate) fn grow_and_place<F>(&mut self, index: usize, f: F) -> Result<&mut T, AllocFailure>
    where
        F: FnOnce() -> T,
    {
        let len = self.len;
        debug_assert!(index <= len);

        let mut fresh = RawBuffer::<T>::allocate(self.grown_capacity()?)?;
        let dst: *mut T = fresh.as_mut_ptr();

        // SAFETY: the grown capacity is at least `len + 1`, so `index` is in
        // bounds of `fresh` and the slot is uninitialized. A panic in `f` drops
        // `fresh`, which frees the block without touching any element.
        unsafe { dst.add(index).write(f()) };

        // SAFETY: prefix goes to `[0..index)`, suffix to `[index + 1..len + 1)`,
        // both within the new capacity and disjoint from the new element. The
        // source block is a different allocation.
        unsafe {
            let src = self.buf.as_ptr();
            ptr::copy_nonoverlapping(src, dst, index);
            ptr::copy_nonoverlapping(src.add(index), dst.add(index + 1), len - index);
        }

        self.buf.swap(&mut fresh);
        self.len = len + 1;
        drop(fresh);

        // SAFETY: `index < self.len`, initialized just above.
        Ok(unsafe { &mut *self.buf.slot_mut(index) })
    }
}
