// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw storage block management for [`SiloVec`](crate::SiloVec).
//!
//! `RawBuf` owns the allocation and nothing else: element construction and
//! destruction are the vector's job. Keeping the two concerns apart means the
//! block is released exactly once on every path, including when element
//! destructors run during an unwind.

use core::alloc::Layout;
use core::marker::PhantomData;
use core::mem;
use core::ptr::{self, NonNull};

use silo_alloc::{AllocError, RawAlloc};

/// An exclusively owned block of raw storage for `cap` elements of `T`.
///
/// Invariant: `cap == 0` iff there is no live allocation (`ptr` dangling).
/// For zero-sized `T` no allocation is ever made and the usable capacity is
/// unbounded.
pub(crate) struct RawBuf<T, A: RawAlloc> {
    ptr: NonNull<T>,
    cap: usize,
    alloc: A,
    _marker: PhantomData<T>,
}

impl<T, A: RawAlloc> RawBuf<T, A> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    pub(crate) const fn new_in(alloc: A) -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            alloc,
            _marker: PhantomData,
        }
    }

    /// Number of element slots the current block holds.
    pub(crate) fn capacity(&self) -> usize {
        if Self::IS_ZST { usize::MAX } else { self.cap }
    }

    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    pub(crate) fn allocator(&self) -> &A {
        &self.alloc
    }

    fn layout_for(cap: usize) -> Result<Layout, AllocError> {
        Layout::array::<T>(cap).map_err(|_| AllocError::CapacityOverflow)
    }

    /// Reallocates the block to exactly `new_cap` slots, relocating the
    /// first `len` live elements into it.
    ///
    /// Relocation is a bitwise move: in Rust a move cannot fail, so the only
    /// fallible step is the acquire. On failure the old block and every
    /// element in it are untouched and the error propagates — the caller's
    /// state is exactly as before the call.
    ///
    /// Caller invariants: `len <= new_cap`, and slots `[0, len)` of the
    /// current block hold live elements.
    pub(crate) fn realloc_to(&mut self, new_cap: usize, len: usize) -> Result<(), AllocError> {
        debug_assert!(len <= new_cap);

        if Self::IS_ZST || new_cap == self.cap {
            return Ok(());
        }

        if new_cap == 0 {
            self.release_block();
            return Ok(());
        }

        let new_layout = Self::layout_for(new_cap)?;
        let new_ptr = self.alloc.acquire(new_layout)?.cast::<T>();

        unsafe {
            // SAFETY: both blocks are distinct live allocations with room
            // for at least `len` elements. The originals are raw memory
            // after this copy; ownership of the values now lives in the new
            // block and the old block is released without running drops.
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), len);
        }

        self.release_block();
        self.ptr = new_ptr;
        self.cap = new_cap;

        Ok(())
    }

    /// Releases the current block, if any, and resets to the unallocated
    /// state. Never touches element slots.
    fn release_block(&mut self) {
        if Self::IS_ZST || self.cap == 0 {
            return;
        }

        let Ok(layout) = Self::layout_for(self.cap) else {
            // A live block implies its layout was valid at acquire time.
            debug_assert!(false, "live block with invalid layout");
            return;
        };

        unsafe {
            // SAFETY: cap > 0 means this block came from acquire() with
            // exactly this layout, and it is released only here.
            self.alloc.release(self.ptr.cast::<u8>(), layout);
        }

        self.ptr = NonNull::dangling();
        self.cap = 0;
    }
}

impl<T, A: RawAlloc> Drop for RawBuf<T, A> {
    fn drop(&mut self) {
        self.release_block();
    }
}
