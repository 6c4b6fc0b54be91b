// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::DynArray;

// Core imports
use core::{
    fmt,
    iter::FusedIterator,
    ops::{Bound, RangeBounds},
    ptr,
};

/// Draining iterator returned by [`DynArray::drain`].
///
/// - Holds a mutable borrow of the parent array for its lifetime.
/// - Yields the drained elements by value.
/// - On drop, any elements not yielded are dropped and the tail is moved down
///   to close the gap.
pub struct Drain<'a, T> {
    array: &'a mut DynArray<T>,
    // next index to yield from the front
    front: usize,
    // one past the next index to yield from the back
    back: usize,
    tail_start: usize,
    tail_len: usize,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let i = self.front;
        self.front += 1;
        // SAFETY: `[front..back)` is initialized and each slot is read once.
        Some(unsafe { ptr::read(self.array.buf.slot(i)) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<T> DoubleEndedIterator for Drain<'_, T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: see `next`.
        Some(unsafe { ptr::read(self.array.buf.slot(self.back)) })
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}
impl<T> FusedIterator for Drain<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Drain<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // SAFETY: `[front..back)` is initialized and not yet yielded.
        let rest = unsafe {
            core::slice::from_raw_parts(self.array.buf.slot(self.front), self.back - self.front)
        };
        f.debug_tuple("Drain").field(&rest).finish()
    }
}

impl<T> Drop for Drain<'_, T> {
    fn drop(&mut self) {
        // Moves the tail down even if dropping a leftover element panics.
        struct MoveTail<'r, 'a, T>(&'r mut Drain<'a, T>);

        impl<T> Drop for MoveTail<'_, '_, T> {
            fn drop(&mut self) {
                let drain = &mut *self.0;
                let start = drain.array.len;
                // SAFETY: the tail `[tail_start..tail_start + tail_len)` was
                // never exposed and is initialized; `[start..tail_start)` is
                // vacated. `ptr::copy` handles the overlap.
                unsafe {
                    let base = drain.array.buf.as_mut_ptr();
                    if drain.tail_start != start {
                        ptr::copy(base.add(drain.tail_start), base.add(start), drain.tail_len);
                    }
                }
                drain.array.len = start + drain.tail_len;
            }
        }

        let first = self.front;
        let remaining = self.back - self.front;
        self.front = self.back;

        let guard = MoveTail(self);
        // SAFETY: `[first..first + remaining)` holds elements that were never
        // yielded; they are dropped exactly once here.
        unsafe {
            let p = guard.0.array.buf.slot_mut(first);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(p, remaining));
        }
    }
}

impl<T> DynArray<T> {
    /// Removes the specified range and returns its elements as an iterator.
    ///
    /// The remainder of the array is shifted left when the iterator is
    /// dropped, even if it was not fully consumed. Capacity is unchanged.
    ///
    /// If the `Drain` is leaked (e.g. with `mem::forget`), the array keeps
    /// only the elements before the range.
    ///
    /// # Panics
    ///
    /// Panics if the specified range is invalid:
    /// - `start > end`
    /// - `end > self.len()`
    /// - an inclusive end or exclusive start of `usize::MAX`
    ///
    /// # Examples
    /// ```
    /// # use dyn_array::DynArray;
    /// let mut v = DynArray::from([1, 2, 3, 4]);
    /// let drained: DynArray<_> = v.drain(1..3).collect();
    /// assert_eq!(drained, [2, 3]);
    /// assert_eq!(v, [1, 4]);
    /// ```
    pub fn drain<R>(&mut self, range: R) -> Drain<'_, T>
    where
        R: RangeBounds<usize>,
    {
        let len = self.len();

        let start = match range.start_bound() {
            Bound::Included(&i) => i,
            Bound::Excluded(&i) => i
                .checked_add(1)
                .unwrap_or_else(|| panic!("drain range start overflows usize")),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&i) => i
                .checked_add(1)
                .unwrap_or_else(|| panic!("drain range end overflows usize")),
            Bound::Excluded(&i) => i,
            Bound::Unbounded => len,
        };

        if start > end {
            panic!("drain range start > end: {} > {}", start, end);
        }
        if end > len {
            panic!("drain range end {} exceeds length {}", end, len);
        }

        // Only the prefix is visible until the drain is dropped.
        self.len = start;

        Drain {
            array: self,
            front: start,
            back: end,
            tail_start: end,
            tail_len: len - end,
        }
    }
}
