// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Allocator-parameterized growable vector with strong failure safety.
//!
//! [`SiloVec<T, A>`] is a contiguous sequence container in the spirit of
//! `std::vec::Vec`, rebuilt around two constraints the standard type does not
//! make first-class:
//!
//! - **Nothing assumes allocation succeeds.** Every operation that may need
//!   memory returns `Result`, and a failed growth leaves the vector exactly
//!   as it was — same length, same capacity, same element values.
//! - **The allocator is a parameter.** Storage goes through the
//!   [`RawAlloc`](silo_alloc::RawAlloc) seam from `silo-alloc`, so arenas,
//!   pools, and failure-injecting test allocators plug in without touching
//!   container code.
//!
//! Element duplication is fallible too: [`TryClone`] is the seam for element
//! types whose copies can fail, and every bulk operation that constructs
//! elements (`resize`, `filled`, `try_clone`) unwinds only the elements it
//! constructed itself when one of them fails.
//!
//! # Growth policy
//!
//! An append issued at `len == capacity` grows the block to
//! `max(1, 2 * capacity)`, giving the usual amortized-O(1) push and the
//! capacity sequence 0 → 1 → 2 → 4 → 8 → … Explicit [`SiloVec::reserve`]
//! allocates exactly the requested capacity. Capacity never shrinks except
//! through [`SiloVec::shrink_to_fit`].
//!
//! # Example
//!
//! ```rust
//! use silo::{SiloError, SiloVec};
//!
//! fn example() -> Result<(), SiloError> {
//!     let mut vec = SiloVec::new();
//!     vec.push(10)?;
//!     vec.push(20)?;
//!     vec.push(30)?;
//!
//!     assert_eq!(vec.len(), 3);
//!     assert_eq!(vec.capacity(), 4);
//!     assert_eq!(vec.as_slice(), &[10, 20, 30]);
//!     assert!(vec.get(3).is_err());
//!
//!     assert_eq!(vec.pop()?, 30);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Concurrency
//!
//! `SiloVec` is a single-owner structure with no internal synchronization.
//! `&mut self` on every mutator makes external synchronization a
//! compiler-enforced obligation rather than a documented one.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod error;
mod raw_buf;
mod try_clone;
mod vec;

#[cfg(test)]
mod tests;

pub use error::SiloError;
pub use try_clone::TryClone;
pub use vec::SiloVec;
