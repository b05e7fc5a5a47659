// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for silo-alloc.
use thiserror::Error;

/// Errors reported by a [`RawAlloc`](crate::RawAlloc) implementation.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum AllocError {
    /// The allocator could not satisfy a request of `size` bytes.
    #[error("allocation of {size} bytes failed")]
    Exhausted {
        /// Size in bytes of the rejected request.
        size: usize,
    },

    /// The requested element count does not fit a valid allocation layout
    /// (it would exceed `isize::MAX` bytes).
    #[error("requested capacity overflows the maximum allocation size")]
    CapacityOverflow,
}
