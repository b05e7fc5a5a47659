// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for silo.
use alloc::boxed::Box;

use silo_alloc::AllocError;
use thiserror::Error;

/// Errors that can occur when operating on a [`SiloVec`](crate::SiloVec).
///
/// Every failure surfaces to the immediate caller; nothing is swallowed and
/// there is no global error state. Destructors never fail.
#[derive(Debug, Error)]
pub enum SiloError {
    /// The allocator rejected a storage request.
    #[error("AllocError: {0}")]
    Alloc(#[from] AllocError),

    /// A checked access used an index at or past the current length.
    #[error("index {index} out of bounds (len {len})")]
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// Length of the vector at the time of the access.
        len: usize,
    },

    /// `pop` was called on an empty vector.
    #[error("pop from empty vector")]
    Underflow,

    /// An element operation (constructor or clone) reported a failure.
    #[error("element operation failed: {0:?}")]
    Element(Box<dyn core::fmt::Debug + Send + Sync + 'static>),
}

impl SiloError {
    /// Wraps an element type's own error value as an `Element` failure.
    pub fn element<E: core::fmt::Debug + Send + Sync + 'static>(e: E) -> Self {
        Self::Element(Box::new(e))
    }
}
