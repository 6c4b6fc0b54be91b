// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `DynArray` type and its inherent API.
//!
//! `DynArray<T>` is a growable array backed by a [`RawBuffer<T>`]. It tracks a
//! logical length on top of the raw block and owns the lifecycle of every
//! element in `[0..len)`. Operations live in one file per concern under
//! `vec/`.

// Invariants:
// - `len <= buf.capacity()` always holds.
// - Slots `buf[..len]` hold initialized `T` values.
// - Slots `buf[len..capacity]` are uninitialized and never read as `T`.
// - Every method restores these before returning or unwinding.

mod assign;
mod clone;
mod drain;
mod extend;
mod from;
mod insert;
mod new;
#[cfg(test)]
mod proptests;
mod push;
mod remove;
mod reserve;
mod resize;
mod retain;
mod slice;

pub use drain::Drain;

// Crate imports
use crate::raw::RawBuffer;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
    ptr,
};

/// A growable, heap-allocated array with explicit raw-storage ownership.
///
/// `DynArray<T>` owns a [`RawBuffer<T>`] (uninitialized storage for
/// `capacity` elements) and a logical length `len ∈ 0..=capacity`. Only the
/// prefix `[0..len)` is initialized and visible through safe APIs.
///
/// # Growth
///
/// - Appending or inserting into a full array grows it to
///   `max(1, 2 * capacity)`.
/// - [`reserve`](DynArray::reserve) and [`resize`](DynArray::resize) grow to
///   *exactly* the requested size.
/// - Growth allocates a fresh block, relocates the existing elements with a
///   bitwise move, and releases the old block. Moving can't fail, so a
///   reallocation either happens completely or (allocation failure) not at
///   all.
///
/// # Panic safety
///
/// | Operation | Guarantee if element code panics |
/// |---|---|
/// | [`push_with`](DynArray::push_with), [`insert_with`](DynArray::insert_with) | unchanged |
/// | [`clone`](Clone::clone), [`with_len`](DynArray::with_len) | partial result dropped and freed |
/// | [`clone_from`](Clone::clone_from) with reallocation | unchanged |
/// | [`clone_from`](Clone::clone_from) in place | valid, partially assigned |
/// | [`resize_with`](DynArray::resize_with), [`retain`](DynArray::retain) | valid, partially applied |
///
/// "Valid" means `len` counts exactly the live elements: nothing is leaked,
/// nothing is dropped twice.
///
/// # Element bounds
///
/// Capabilities are checked at compile time per call site: `T: Default` for
/// [`with_len`](DynArray::with_len) and [`resize`](DynArray::resize),
/// `T: Clone` for [`Clone`], [`extend_from_slice`](DynArray::extend_from_slice)
/// and `From<&[T]>`. Everything else works for any `T`.
///
/// # Examples
///
/// ```rust
/// use dyn_array::DynArray;
///
/// let mut v = DynArray::new();
/// v.push(String::from("a"));
/// v.push(String::from("c"));
/// v.insert_with(1, || String::from("b"));
/// assert_eq!(v.as_slice(), &["a", "b", "c"]);
///
/// let removed = v.remove(0);
/// assert_eq!(removed, "a");
/// assert_eq!(v.len(), 2);
/// ```
pub struct DynArray<T> {
    pub(crate) buf: RawBuffer<T>,
    pub(crate) len: usize,
}

impl<T> DynArray<T> {
    /// Number of slots available without reallocating.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the current logical length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `capacity - len`, the number of elements that can be added
    /// without reallocating.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        self.buf.capacity() - self.len
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns `true` if the array contains `x` (linear search).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        // SAFETY: `[0..len)` is initialized and owned by us. The raw buffer
        // frees the block afterwards without touching the (now dead) values.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: PartialEq> PartialEq<[T]> for DynArray<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}
impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DynArray<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for DynArray<T> {}
impl<T: Ord> Ord for DynArray<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for DynArray<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for DynArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Deref for DynArray<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for DynArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for DynArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for DynArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for DynArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for DynArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
