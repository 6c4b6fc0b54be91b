// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::DynArray;

impl<T, const N: usize> From<[T; N]> for DynArray<T> {
    /// Moves the array's elements in; capacity is exactly `N`.
    fn from(src: [T; N]) -> Self {
        let mut v = Self::with_capacity(N);
        for item in src {
            v.push(item);
        }
        v
    }
}

impl<T: Clone> From<&[T]> for DynArray<T> {
    /// Clones the slice's elements in; capacity is exactly `src.len()`.
    fn from(src: &[T]) -> Self {
        let mut v = Self::with_capacity(src.len());
        v.extend_from_slice(src);
        v
    }
}

impl<T: Clone, const N: usize> From<&[T; N]> for DynArray<T> {
    fn from(src: &[T; N]) -> Self {
        src.as_slice().into()
    }
}
