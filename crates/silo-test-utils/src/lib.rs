// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for silo crates.
//!
//! Failure-injecting allocators and accountable element types used to
//! exercise the container's rollback and resource-balance guarantees.
//!
//! ## License
//!
//! GPL-3.0-only

mod alloc;
mod elements;

pub use alloc::{CountingAlloc, QuotaAlloc};
pub use elements::{CloneFailed, DropTally, FlakyClone};
