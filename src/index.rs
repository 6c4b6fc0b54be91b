// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`DynArray`](crate::DynArray).
//!
//! `Index` and `IndexMut` forward to the initialized prefix `[0..len)`, so
//! they accept anything a slice accepts (positions and every range form) and
//! panic on out-of-bounds exactly as slices do. Use
//! [`get`](crate::DynArray::get) for a checked lookup.

// Crate imports
use crate::vec::DynArray;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>> Index<I> for DynArray<T> {
    type Output = I::Output;
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for DynArray<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}
