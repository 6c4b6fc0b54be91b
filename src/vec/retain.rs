// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate import
use crate::vec::DynArray;

// Core imports
use core::ptr;

// Closes the holes left by rejected elements once processing stops, whether
// it finished or the predicate (or a destructor) panicked.
//
// [kept.., holes.., unprocessed..]
//          |<- deleted ->|
//  |<-      processed      ->|
struct Compact<'a, T> {
    array: &'a mut DynArray<T>,
    processed: usize,
    deleted: usize,
    original_len: usize,
}

impl<T> Drop for Compact<'_, T> {
    fn drop(&mut self) {
        if self.deleted > 0 {
            // SAFETY: `[processed..original_len)` was never touched and is
            // still initialized; it moves down over the holes.
            unsafe {
                let base = self.array.buf.as_mut_ptr();
                ptr::copy(
                    base.add(self.processed),
                    base.add(self.processed - self.deleted),
                    self.original_len - self.processed,
                );
            }
        }
        self.array.len = self.original_len - self.deleted;
    }
}

impl<T> DynArray<T> {
    /// Retains only the elements specified by the predicate `f`, preserving order.
    ///
    /// The predicate is applied to each element in iteration order. If it
    /// panics, the elements already rejected are gone and everything else
    /// stays, in order.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        let original_len = self.len;
        // Nothing may be observed (or double-dropped) through `len` while
        // holes exist; the guard restores it.
        self.len = 0;
        let mut g = Compact {
            array: self,
            processed: 0,
            deleted: 0,
            original_len,
        };

        while g.processed < original_len {
            // SAFETY: `processed < original_len`, and unprocessed slots are
            // initialized.
            let cur = unsafe { g.array.buf.slot_mut(g.processed) };
            if !f(unsafe { &*cur }) {
                // Advance first so a panicking destructor cannot drop it twice.
                g.processed += 1;
                g.deleted += 1;
                // SAFETY: the slot is never read again.
                unsafe { ptr::drop_in_place(cur) };
                continue;
            }
            if g.deleted > 0 {
                // SAFETY: the hole `processed - deleted` is vacated and lies
                // strictly below `cur`.
                unsafe { ptr::copy_nonoverlapping(cur, cur.sub(g.deleted), 1) };
            }
            g.processed += 1;
        }
    }
}
