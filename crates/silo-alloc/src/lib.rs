// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw allocation capability for the silo containers.
//!
//! The containers in this workspace never call the global allocator directly.
//! They go through [`RawAlloc`], a minimal acquire/release seam, so that the
//! allocation strategy can be swapped out — in production for arenas or
//! pools, in tests for quota and accounting allocators that inject failures
//! and detect leaks.
//!
//! # Contract
//!
//! - `acquire` is only ever called with a non-zero-size [`Layout`].
//! - Every successful `acquire` is paired with exactly one `release` carrying
//!   the same layout.
//! - Neither operation unwinds; failure is reported as [`AllocError`].
//!
//! # Example
//!
//! ```rust
//! use core::alloc::Layout;
//! use silo_alloc::{Global, RawAlloc};
//!
//! let layout = Layout::array::<u64>(8).unwrap();
//! let block = Global.acquire(layout).unwrap();
//!
//! // SAFETY: block came from acquire() with this exact layout.
//! unsafe { Global.release(block, layout) };
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod error;
mod raw;

#[cfg(test)]
mod tests;

pub use error::AllocError;
pub use raw::{Global, RawAlloc};
