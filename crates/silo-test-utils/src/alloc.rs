// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Allocators with injectable failures and acquire/release accounting.

use core::alloc::Layout;
use core::cell::Cell;
use core::ptr::NonNull;

use silo_alloc::{AllocError, Global, RawAlloc};

/// An allocator that satisfies a fixed number of acquisitions, then fails.
///
/// Pass it by reference (`&QuotaAlloc` is itself a `RawAlloc`) so the quota
/// can be inspected or refilled after the container takes ownership of the
/// handle.
#[derive(Debug)]
pub struct QuotaAlloc {
    remaining: Cell<usize>,
}

impl QuotaAlloc {
    /// Creates an allocator that will satisfy `quota` acquisitions.
    pub fn new(quota: usize) -> Self {
        Self {
            remaining: Cell::new(quota),
        }
    }

    /// Acquisitions left before the allocator starts failing.
    pub fn remaining(&self) -> usize {
        self.remaining.get()
    }

    /// Grants `quota` further acquisitions.
    pub fn refill(&self, quota: usize) {
        self.remaining.set(quota);
    }
}

unsafe impl RawAlloc for QuotaAlloc {
    fn acquire(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        let remaining = self.remaining.get();
        if remaining == 0 {
            return Err(AllocError::Exhausted {
                size: layout.size(),
            });
        }

        self.remaining.set(remaining - 1);
        Global.acquire(layout)
    }

    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: every block handed out came from Global.
        unsafe { Global.release(ptr, layout) }
    }
}

/// An allocator that counts acquisitions and releases.
///
/// A nonzero [`balance`](CountingAlloc::balance) after the container is gone
/// means a leaked or double-released block.
#[derive(Debug, Default)]
pub struct CountingAlloc {
    acquired: Cell<usize>,
    released: Cell<usize>,
}

impl CountingAlloc {
    /// Creates an allocator with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful acquisitions so far.
    pub fn acquired(&self) -> usize {
        self.acquired.get()
    }

    /// Number of releases so far.
    pub fn released(&self) -> usize {
        self.released.get()
    }

    /// Live blocks: acquisitions minus releases.
    pub fn balance(&self) -> usize {
        self.acquired.get() - self.released.get()
    }
}

unsafe impl RawAlloc for CountingAlloc {
    fn acquire(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        let block = Global.acquire(layout)?;
        self.acquired.set(self.acquired.get() + 1);
        Ok(block)
    }

    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        self.released.set(self.released.get() + 1);
        // SAFETY: every block handed out came from Global.
        unsafe { Global.release(ptr, layout) }
    }
}
