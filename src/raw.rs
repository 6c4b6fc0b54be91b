// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Untyped element storage.
//!
//! [`RawBuffer<T>`] owns a block of memory large enough for `capacity`
//! values of `T` and nothing else: it never constructs, reads, or drops an
//! element. Whoever writes values into the block is responsible for dropping
//! them before the buffer goes away.

// Crate imports
use crate::error::Error;

// Alloc imports
use alloc::alloc::{alloc, dealloc, handle_alloc_error, Layout};

// Core imports
use core::{fmt, marker::PhantomData, mem, ptr::NonNull};

/// Why a block could not be obtained.
///
/// Kept separate from [`Error`] so the infallible paths can still hand the
/// failing layout to `handle_alloc_error`.
#[derive(Debug, Clone, Copy)]
pub(crate) enum AllocFailure {
    CapacityOverflow,
    Exhausted(Layout),
}

impl AllocFailure {
    /// Reports the failure the way `alloc::vec::Vec` does: a panic for
    /// overflow, the global allocation error handler for exhaustion.
    #[cold]
    pub(crate) fn raise(self) -> ! {
        match self {
            Self::CapacityOverflow => panic!("capacity overflow"),
            Self::Exhausted(layout) => handle_alloc_error(layout),
        }
    }
}

impl From<AllocFailure> for Error {
    fn from(failure: AllocFailure) -> Self {
        match failure {
            AllocFailure::CapacityOverflow => Error::CapacityOverflow,
            AllocFailure::Exhausted(_) => Error::AllocFailed,
        }
    }
}

/// An owned, uninitialized block of storage for `capacity` values of `T`.
///
/// # Invariants
///
/// - The block is allocated iff `capacity > 0` and `T` is not zero-sized.
///   Otherwise `ptr` is dangling (but aligned) and no allocator call is ever
///   made for it.
/// - The buffer holds no live values as far as it is concerned. Dropping a
///   `RawBuffer` frees the block and runs no destructor.
///
/// The buffer is not `Clone`: storage has a single owner. Ownership moves with
/// ordinary Rust moves, or via [`take`](RawBuffer::take) and
/// [`swap`](RawBuffer::swap) when only a `&mut` is at hand.
pub struct RawBuffer<T> {
    ptr: NonNull<T>,
    cap: usize,
    _owns: PhantomData<T>,
}

// SAFETY: `RawBuffer<T>` uniquely owns its block, exactly like `Box<[T]>`.
unsafe impl<T: Send> Send for RawBuffer<T> {}
// SAFETY: shared access only exposes raw pointers; reads through them are
// governed by whoever tracks the initialized slots.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> RawBuffer<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// Creates an empty buffer. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _owns: PhantomData,
        }
    }

    /// Allocates storage for exactly `capacity` elements.
    ///
    /// No allocation is made when `capacity == 0` or `T` is zero-sized.
    ///
    /// # Panics
    ///
    /// Panics if the byte size exceeds `isize::MAX`; calls
    /// [`handle_alloc_error`] if the allocator fails.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::allocate(capacity).unwrap_or_else(|failure| failure.raise())
    }

    /// Fallible form of [`with_capacity`](RawBuffer::with_capacity).
    ///
    /// Returns [`Error::CapacityOverflow`] or [`Error::AllocFailed`].
    pub fn try_with_capacity(capacity: usize) -> Result<Self, Error> {
        Self::allocate(capacity).map_err(Error::from)
    }

    pub(crate) fn allocate(capacity: usize) -> Result<Self, AllocFailure> {
        if capacity == 0 || Self::IS_ZST {
            return Ok(Self {
                ptr: NonNull::dangling(),
                cap: capacity,
                _owns: PhantomData,
            });
        }

        let layout = Layout::array::<T>(capacity).map_err(|_| AllocFailure::CapacityOverflow)?;

        // SAFETY: `capacity > 0` and `T` is not zero-sized, so `layout` has a
        // non-zero size.
        let raw = unsafe { alloc(layout) };
        let ptr = NonNull::new(raw.cast::<T>()).ok_or(AllocFailure::Exhausted(layout))?;

        Ok(Self {
            ptr,
            cap: capacity,
            _owns: PhantomData,
        })
    }

    /// Number of element slots in the block.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    /// Pointer to slot `0`. Dangling (but aligned) when nothing is allocated.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable pointer to slot `0`. Dangling (but aligned) when nothing is
    /// allocated.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns a pointer to slot `index`.
    ///
    /// The one-past-the-end address (`index == capacity`) is allowed.
    ///
    /// # Safety
    ///
    /// `index <= self.capacity()`. This is only checked in debug builds.
    /// The slot may be uninitialized; reading it as `T` is up to the caller.
    #[inline]
    pub unsafe fn slot(&self, index: usize) -> *const T {
        debug_assert!(
            index <= self.cap,
            "slot index (is {index}) should be <= capacity (is {})",
            self.cap
        );
        // SAFETY: the caller guarantees `index <= cap`, which stays inside (or
        // one past) the allocated block.
        unsafe { self.ptr.as_ptr().add(index) }
    }

    /// Mutable form of [`slot`](RawBuffer::slot).
    ///
    /// # Safety
    ///
    /// `index <= self.capacity()`. This is only checked in debug builds.
    #[inline]
    pub unsafe fn slot_mut(&mut self, index: usize) -> *mut T {
        debug_assert!(
            index <= self.cap,
            "slot index (is {index}) should be <= capacity (is {})",
            self.cap
        );
        // SAFETY: see `slot`.
        unsafe { self.ptr.as_ptr().add(index) }
    }

    /// Exchanges blocks (and capacities) with `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.cap, &mut other.cap);
    }

    /// Moves the block out, leaving `self` empty with capacity `0`.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    fn current_layout(&self) -> Option<Layout> {
        if self.cap == 0 || Self::IS_ZST {
            None
        } else {
            // Computed successfully once already, when the block was allocated.
            Layout::array::<T>(self.cap).ok()
        }
    }
}

impl<T> Default for RawBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if let Some(layout) = self.current_layout() {
            // SAFETY: the block was obtained from `alloc` with this exact
            // layout and has not been freed: ownership is unique.
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) }
        }
    }
}

impl<T> fmt::Debug for RawBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawBuffer")
            .field("ptr", &self.ptr)
            .field("capacity", &self.cap)
            .finish()
    }
}
