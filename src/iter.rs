// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`DynArray`](crate::DynArray).
//!
//! - `IntoIter<T>` owns the buffer, yields by value and supports
//!   `DoubleEndedIterator`, `ExactSizeIterator`, and `FusedIterator`.
//! - `&DynArray` and `&mut DynArray` iterate as slices.
//! - `DynArray` implements `FromIterator`, so it can be `collect`ed into.

// Crate imports
use crate::{raw::RawBuffer, vec::DynArray};

// Core imports
use core::{fmt, iter::FusedIterator, mem::ManuallyDrop, ptr, slice};

/// Owned iterator returned by `DynArray::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`]. Elements not yielded are dropped
/// with the iterator, then the buffer is released.
pub struct IntoIter<T> {
    buf: RawBuffer<T>,
    front: usize,
    back: usize, // exclusive
}

impl<T> IntoIter<T> {
    /// Returns the elements not yet yielded as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front..back)` is initialized and not yet yielded.
        unsafe { slice::from_raw_parts(self.buf.slot(self.front), self.back - self.front) }
    }

    /// Returns the elements not yet yielded as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.back - self.front;
        // SAFETY: as in `as_slice`.
        unsafe { slice::from_raw_parts_mut(self.buf.slot_mut(self.front), len) }
    }

    // SAFETY: caller must pass `i` in `[front..back)` and never read it again.
    #[inline]
    unsafe fn read(&self, i: usize) -> T {
        unsafe { ptr::read(self.buf.slot(i)) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: `i` was in range and `front` has moved past it.
            Some(unsafe { self.read(i) })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        let skip = n.min(rem);
        let first = self.front;
        self.front += skip;
        // SAFETY: the skipped slots are initialized and are now outside
        // `[front..back)`, so they are dropped exactly once.
        unsafe {
            let p = self.buf.slot_mut(first);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(p, skip));
        }
        self.next()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: `back` was in range and is now excluded.
            Some(unsafe { self.read(self.back) })
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        let skip = n.min(rem);
        self.back -= skip;
        // SAFETY: see `nth`.
        unsafe {
            let p = self.buf.slot_mut(self.back);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(p, skip));
        }
        self.next_back()
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T: Clone> Clone for IntoIter<T> {
    fn clone(&self) -> Self {
        DynArray::from(self.as_slice()).into_iter()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let rest: *mut [T] = self.as_mut_slice();
        self.front = self.back;
        // SAFETY: the remaining elements are dropped once; the buffer itself
        // is released by `RawBuffer`'s own drop afterwards.
        unsafe { ptr::drop_in_place(rest) };
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        // The array's own drop would destroy the elements; its buffer is
        // taken instead and the husk left empty.
        let mut me = ManuallyDrop::new(self);
        let back = me.len;
        me.len = 0;
        IntoIter {
            buf: me.buf.take(),
            front: 0,
            back,
        }
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}
