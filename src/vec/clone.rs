// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::DynArray;

impl<T: Clone> Clone for DynArray<T> {
    /// Allocates exactly `self.len()` slots and clones each element in order.
    ///
    /// If a clone panics, the elements cloned so far are dropped and the new
    /// block is released; `self` is never touched.
    ///
    /// Arrays of non-`Clone` elements cannot be cloned:
    ///
    /// ```compile_fail
    /// use dyn_array::DynArray;
    ///
    /// struct NoClone;
    /// let v: DynArray<NoClone> = DynArray::new();
    /// let _w: DynArray<NoClone> = v.clone();
    /// ```
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.len);
        for item in self.iter() {
            out.push_with(|| item.clone());
        }
        out
    }

    /// Replaces the contents of `self` with a clone of `source`.
    ///
    /// - If `source` does not fit in the current capacity, a complete clone is
    ///   built first and swapped in. A panic while building it leaves `self`
    ///   unchanged.
    /// - Otherwise the storage is reused: the overlapping prefix is updated
    ///   with [`Clone::clone_from`] (assignment, not reconstruction), then the
    ///   excess tail is dropped or the missing tail is cloned into fresh
    ///   slots. A panic here leaves a valid, partially assigned array.
    fn clone_from(&mut self, source: &Self) {
        if source.len > self.capacity() {
            let mut fresh = source.clone();
            self.swap_with(&mut fresh);
            return;
        }

        let shared = self.len.min(source.len);
        for (dst, src) in self.as_mut_slice()[..shared]
            .iter_mut()
            .zip(&source.as_slice()[..shared])
        {
            dst.clone_from(src);
        }

        if source.len < self.len {
            self.truncate(source.len);
        } else {
            // Fits in the current capacity, so no reallocation happens here.
            for item in &source.as_slice()[shared..] {
                self.push_with(|| item.clone());
            }
        }
    }
}

impl<T: Clone> DynArray<T> {
    /// Appends clones of every element of `src`.
    ///
    /// Grows at most once, to `max(len + src.len(), 2 * capacity)`.
    pub fn extend_from_slice(&mut self, src: &[T]) {
        self.reserve_additional(src.len());
        for item in src {
            self.push_with(|| item.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        testing::{expect_panic, values, Probe},
        vec::DynArray,
    };

    #[test]
    fn test_clone_copies_len_and_elements_exactly() {
        let mut v: DynArray<i32> = DynArray::with_capacity(10);
        v.extend_from_slice(&[1, 2, 3]);

        let c = v.clone();
        assert_eq!(c.len(), v.len());
        assert_eq!(c.capacity(), 3);
        assert_eq!(c, v);
    }

    #[test]
    fn test_clone_is_independent_copy() {
        let mut v: DynArray<String> = DynArray::from([String::from("a"), String::from("b")]);
        let mut c = v.clone();

        v[0].push('1');
        c[1].push('2');
        c.push(String::from("c"));

        assert_eq!(v.as_slice(), &["a1", "b"]);
        assert_eq!(c.as_slice(), &["a", "b2", "c"]);
    }

    #[test]
    fn test_clone_empty() {
        let v: DynArray<String> = DynArray::with_capacity(4);
        let c = v.clone();
        assert!(c.is_empty());
        assert_eq!(c.capacity(), 0);
    }

    #[test]
    fn test_clone_panic_drops_partial_copy_and_spares_source() {
        let probe = Probe::new();
        let v = probe.items(&[1, 2, 3, 4]);
        probe.fail_clone_after(2);

        expect_panic(|| v.clone());

        assert_eq!(probe.live(), 4);
        assert_eq!(values(&v), [1, 2, 3, 4]);
    }

    #[test]
    fn test_clone_from_larger_source_reallocates() {
        let probe = Probe::new();
        let mut dst = probe.items(&[7]);
        let src = probe.items(&[1, 2, 3]);

        dst.clone_from(&src);

        assert_eq!(values(&dst), [1, 2, 3]);
        assert_eq!(dst.capacity(), 3);
        assert_eq!(probe.clones(), 3);
        assert_eq!(probe.assigns(), 0);
        assert_eq!(probe.live(), 6);
    }

    #[test]
    fn test_clone_from_reallocation_panic_leaves_destination_unchanged() {
        let probe = Probe::new();
        let mut dst = probe.items(&[7, 8]);
        let src = probe.items(&[1, 2, 3, 4, 5]);
        probe.fail_clone_after(3);

        expect_panic(|| dst.clone_from(&src));

        assert_eq!(values(&dst), [7, 8]);
        assert_eq!(probe.live(), 7);
    }

    #[test]
    fn test_clone_from_shorter_source_assigns_prefix_and_drops_tail() {
        let probe = Probe::new();
        let mut dst = probe.items(&[10, 20, 30, 40, 50]);
        let src = probe.items(&[1, 2]);
        let cap = dst.capacity();

        dst.clone_from(&src);

        assert_eq!(values(&dst), [1, 2]);
        assert_eq!(dst.capacity(), cap);
        assert_eq!(probe.assigns(), 2);
        assert_eq!(probe.clones(), 0);
        assert_eq!(probe.live(), 4);
    }

    #[test]
    fn test_clone_from_longer_source_within_capacity() {
        let probe = Probe::new();
        let mut dst = probe.items(&[10, 20, 30]);
        dst.reserve(8);
        let ptr = dst.as_ptr();
        let src = probe.items(&[1, 2, 3, 4, 5]);

        dst.clone_from(&src);

        assert_eq!(values(&dst), [1, 2, 3, 4, 5]);
        assert_eq!(dst.as_ptr(), ptr);
        // three slots assigned in place, two cloned fresh
        assert_eq!(probe.assigns(), 3);
        assert_eq!(probe.clones(), 2);
        assert_eq!(probe.live(), 10);
    }

    #[test]
    fn test_clone_from_in_place_panic_is_leak_free() {
        let probe = Probe::new();
        let mut dst = probe.items(&[10]);
        dst.reserve(8);
        let src = probe.items(&[1, 2, 3, 4]);
        probe.fail_clone_after(1);

        expect_panic(|| dst.clone_from(&src));

        // prefix assigned, one tail clone made before the failure
        assert_eq!(values(&dst), [1, 2]);
        assert_eq!(probe.live(), 6);
        drop(dst);
        drop(src);
        assert_eq!(probe.live(), 0);
    }

    #[test]
    fn test_extend_from_slice() {
        let mut v: DynArray<u8> = DynArray::new();
        v.extend_from_slice(&[1, 2, 3]);
        assert_eq!(v, [1, 2, 3]);
        assert_eq!(v.capacity(), 3);
        v.extend_from_slice(&[]);
        assert_eq!(v, [1, 2, 3]);
        v.extend_from_slice(&[4]);
        assert_eq!(v, [1, 2, 3, 4]);
        assert_eq!(v.capacity(), 6);
    }
}
