// This file is part of dyn-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `dyn-array`
//!
//! A `no_std` (+ `alloc`) growable, contiguous array built in two explicit
//! layers:
//!
//! - [`RawBuffer<T>`] owns a block of **uninitialized** storage sized for a
//!   fixed number of `T` slots. It allocates and frees, and nothing else: it
//!   never constructs, reads, or drops an element.
//! - [`DynArray<T>`] owns one `RawBuffer<T>` plus a logical length
//!   `len <= capacity`, and is responsible for every element's lifecycle:
//!   construction in place, relocation on growth, cloning, and dropping.
//!
//! `DynArray` never talks to the allocator directly and `RawBuffer` never
//! touches element lifetimes.
//!
//! ## When to use this crate
//!
//! - You want a `Vec`-like container whose growth and placement policy is
//!   spelled out and easy to audit.
//! - You need the element to be produced *in its final slot* (see
//!   [`DynArray::push_with`] and [`DynArray::insert_with`]) so that a failing
//!   constructor never disturbs the existing contents.
//!
//! If you just need a vector, use `alloc::vec::Vec`.
//!
//! ## High-level semantics
//!
//! - Only the prefix `[0..len)` is initialized. Slots `[len..capacity)` are
//!   never read as `T`.
//! - Appending to a full array grows it to `max(1, 2 * capacity)`, so `n`
//!   pushes cost `O(log n)` reallocations.
//! - [`DynArray::reserve`] takes the **total** capacity wanted, not an
//!   additional amount, and allocates exactly that much.
//! - Growth builds the new element first, directly in the freshly allocated
//!   block, and only then relocates the existing elements around it. If the
//!   constructor panics, the new block is released and the array is exactly
//!   as it was.
//! - Relocation is a bitwise move, which cannot fail in Rust. Every growth
//!   path (including insert-with-growth) is therefore all-or-nothing.
//!
//! ## Errors and panics
//!
//! - Capacity problems come in two flavors:
//!   - **Infallible** (`push`, `insert`, `reserve`, `with_len`, ...): panic on
//!     capacity overflow, call `handle_alloc_error` on allocator failure.
//!   - **Fallible** ([`DynArray::try_reserve`], [`DynArray::try_push`],
//!     [`DynArray::try_insert`], [`DynArray::try_remove`],
//!     [`RawBuffer::try_with_capacity`]): return an [`Error`] and leave the
//!     array unchanged.
//! - Index/range violations (indexing, `insert` past `len`, `erase` on a
//!   vacant index, inverted `drain` ranges) **panic**, like slices.
//! - A panic from element code (`Default`, `Clone`, a generator closure, or a
//!   retain predicate) never leaks or double-drops: `len` always counts exactly
//!   the live elements.
//!
//! ## Example
//!
//! ```rust
//! use dyn_array::DynArray;
//!
//! let mut v: DynArray<i32> = DynArray::new();
//! v.push(1);
//! v.push(2);
//! v.push(3);
//! v.insert(1, 9);
//! assert_eq!(v, [1, 9, 2, 3]);
//!
//! v.erase(0);
//! v.resize(5);
//! assert_eq!(v, [9, 2, 3, 0, 0]);
//!
//! v.pop();
//! v.pop();
//! assert_eq!(v, [9, 2, 3]);
//! ```
//!
//! See [`DynArray`] for the full operation list and guarantees.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
mod raw;
#[cfg(test)]
mod testing;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use raw::RawBuffer;
pub use vec::{DynArray, Drain};
