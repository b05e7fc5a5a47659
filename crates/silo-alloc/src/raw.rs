// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The [`RawAlloc`] trait and the default [`Global`] implementation.

use core::alloc::Layout;
use core::ptr::NonNull;

use crate::error::AllocError;

/// Capability to acquire and release raw memory blocks.
///
/// # Safety
///
/// Implementations must return blocks that are valid for reads and writes of
/// `layout.size()` bytes at `layout.align()` alignment, and that stay valid
/// until passed back to [`release`](RawAlloc::release). `release` must accept
/// every pointer a prior `acquire` on the same allocator handed out, exactly
/// once, with the layout it was acquired with.
pub unsafe trait RawAlloc {
    /// Acquires a block of raw memory described by `layout`.
    ///
    /// Callers never pass a zero-size layout; containers represent the empty
    /// state without an allocation.
    fn acquire(&self, layout: Layout) -> Result<NonNull<u8>, AllocError>;

    /// Releases a block previously returned by [`acquire`](RawAlloc::acquire).
    ///
    /// # Safety
    ///
    /// `ptr` must come from `acquire` on this same allocator with this same
    /// `layout`, and must not be used afterwards.
    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout);
}

// A shared reference to an allocator is itself an allocator. Tests rely on
// this to keep inspecting an injected allocator after handing it to a
// container.
unsafe impl<A: RawAlloc + ?Sized> RawAlloc for &A {
    #[inline]
    fn acquire(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        (**self).acquire(layout)
    }

    #[inline]
    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: forwarded verbatim; the caller upholds the contract.
        unsafe { (**self).release(ptr, layout) }
    }
}

/// The process-global allocator, exposed through the [`RawAlloc`] seam.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct Global;

unsafe impl RawAlloc for Global {
    fn acquire(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        debug_assert!(layout.size() > 0);

        // SAFETY: layout has non-zero size per the trait contract.
        let ptr = unsafe { alloc::alloc::alloc(layout) };

        NonNull::new(ptr).ok_or(AllocError::Exhausted {
            size: layout.size(),
        })
    }

    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: caller guarantees ptr came from acquire() with this layout.
        unsafe { alloc::alloc::dealloc(ptr.as_ptr(), layout) }
    }
}
