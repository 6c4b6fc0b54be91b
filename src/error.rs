// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `DynArray` and `RawBuffer`.
//!
//! Only the fallible (`try_*`) API returns these. The infallible API panics on
//! capacity overflow and aborts through `handle_alloc_error` on allocator
//! failure, like `alloc::vec::Vec`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by the fallible operations of [`DynArray`](crate::DynArray)
/// and [`RawBuffer`](crate::RawBuffer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The requested capacity does not fit in `isize::MAX` bytes.
    CapacityOverflow,
    /// The global allocator could not provide the requested block.
    AllocFailed,
    /// An index or position was out of the current logical bounds.
    OutOfBounds,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow => f.write_str("capacity overflow"),
            Self::AllocFailed => f.write_str("memory allocation failed"),
            Self::OutOfBounds => f.write_str("index out of bounds"),
        }
    }
}

impl CoreError for Error {}
