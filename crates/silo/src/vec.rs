// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The [`SiloVec`] container.

use core::fmt;
use core::ops::{Deref, DerefMut};
use core::ptr;
use core::slice;

use silo_alloc::{AllocError, Global, RawAlloc};

use crate::error::SiloError;
use crate::raw_buf::RawBuf;
use crate::try_clone::TryClone;

/// A contiguous growable vector over an explicit allocator.
///
/// Elements live in one exclusively owned block acquired through `A`. Slots
/// `[0, len)` are initialized, `[len, capacity)` are raw memory. Operations
/// that may allocate or construct elements return `Result` and leave the
/// vector in its pre-call state when they fail; see the crate docs for the
/// growth policy.
pub struct SiloVec<T, A: RawAlloc = Global> {
    buf: RawBuf<T, A>,
    len: usize,
}

// SAFETY: SiloVec is a single-owner structure; the raw pointer inside RawBuf
// is exclusively owned, so thread transfer/sharing is governed by T and A
// alone (mutation still requires &mut).
unsafe impl<T: Send, A: RawAlloc + Send> Send for SiloVec<T, A> {}
unsafe impl<T: Sync, A: RawAlloc + Sync> Sync for SiloVec<T, A> {}

impl<T> SiloVec<T, Global> {
    /// Creates a new empty vector. Does not allocate.
    ///
    /// # Examples
    ///
    /// ```
    /// use silo::SiloVec;
    ///
    /// let vec: SiloVec<u32> = SiloVec::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.capacity(), 0);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self::new_in(Global)
    }

    /// Creates an empty vector with storage for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Result<Self, SiloError> {
        Self::with_capacity_in(capacity, Global)
    }

    /// Creates a vector holding `count` clones of `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use silo::SiloVec;
    ///
    /// let vec = SiloVec::filled(3, &7u8).unwrap();
    /// assert_eq!(vec.as_slice(), &[7, 7, 7]);
    /// ```
    pub fn filled(count: usize, value: &T) -> Result<Self, SiloError>
    where
        T: TryClone,
    {
        Self::filled_in(count, value, Global)
    }

    /// Creates a vector holding `count` default-constructed elements.
    pub fn with_default(count: usize) -> Result<Self, SiloError>
    where
        T: Default,
    {
        Self::with_default_in(count, Global)
    }
}

impl<T, A: RawAlloc> SiloVec<T, A> {
    /// Creates a new empty vector using `alloc` for storage. Does not
    /// allocate.
    #[must_use]
    pub const fn new_in(alloc: A) -> Self {
        Self {
            buf: RawBuf::new_in(alloc),
            len: 0,
        }
    }

    /// Creates an empty vector with storage for at least `capacity`
    /// elements, acquired from `alloc`.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Result<Self, SiloError> {
        let mut vec = Self::new_in(alloc);
        vec.reserve(capacity)?;
        Ok(vec)
    }

    /// Creates a vector holding `count` clones of `value`, using `alloc`.
    pub fn filled_in(count: usize, value: &T, alloc: A) -> Result<Self, SiloError>
    where
        T: TryClone,
    {
        let mut vec = Self::new_in(alloc);
        vec.resize(count, value)?;
        Ok(vec)
    }

    /// Creates a vector holding `count` default-constructed elements, using
    /// `alloc`.
    pub fn with_default_in(count: usize, alloc: A) -> Result<Self, SiloError>
    where
        T: Default,
    {
        let mut vec = Self::new_in(alloc);
        vec.resize_with(count, || Ok(T::default()))?;
        Ok(vec)
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the current block can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns a reference to the allocator.
    #[inline]
    pub fn allocator(&self) -> &A {
        self.buf.allocator()
    }

    /// Ensures storage for at least `capacity` elements.
    ///
    /// A no-op when `capacity <= self.capacity()`; otherwise reallocates to
    /// exactly `capacity`, preserving element order and values. On failure
    /// the vector is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use silo::SiloVec;
    ///
    /// let mut vec: SiloVec<u8> = SiloVec::new();
    /// vec.reserve(10).unwrap();
    /// assert_eq!(vec.capacity(), 10);
    ///
    /// // Already satisfied: no reallocation.
    /// vec.reserve(5).unwrap();
    /// assert_eq!(vec.capacity(), 10);
    /// ```
    pub fn reserve(&mut self, capacity: usize) -> Result<(), SiloError> {
        if capacity <= self.buf.capacity() {
            return Ok(());
        }

        self.buf.realloc_to(capacity, self.len)?;
        Ok(())
    }

    #[inline(always)]
    fn grow_if_full(&mut self) -> Result<(), SiloError> {
        if self.len < self.buf.capacity() {
            return Ok(());
        }

        self.grow_for_push()
    }

    /// Implicit growth for one more element: doubles to `max(1, 2 * capacity)`.
    #[cold]
    #[inline(never)]
    fn grow_for_push(&mut self) -> Result<(), SiloError> {
        let new_cap = self
            .buf
            .capacity()
            .checked_mul(2)
            .ok_or(AllocError::CapacityOverflow)?
            .max(1);

        self.buf.realloc_to(new_cap, self.len)?;
        Ok(())
    }

    /// Appends `value` to the back of the vector.
    ///
    /// Grows per the doubling policy when full. Allocation failure leaves
    /// the vector unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use silo::SiloVec;
    ///
    /// let mut vec = SiloVec::new();
    /// vec.push(1).unwrap();
    /// vec.push(2).unwrap();
    /// assert_eq!(vec.as_slice(), &[1, 2]);
    /// ```
    pub fn push(&mut self, value: T) -> Result<(), SiloError> {
        self.grow_if_full()?;

        unsafe {
            // SAFETY: grow_if_full guarantees len < capacity; slot `len` is
            // raw memory inside the block.
            ptr::write(self.buf.ptr().add(self.len), value);
        }
        self.len += 1;

        Ok(())
    }

    /// Appends an element built in place by `build`.
    ///
    /// The factory runs only after capacity has been ensured, so a factory
    /// failure leaves `len` unchanged. A growth step that already happened
    /// is retained — capacity may have increased even though the append
    /// failed, which is consistent with amortized-cost container semantics.
    pub fn push_with<F>(&mut self, build: F) -> Result<(), SiloError>
    where
        F: FnOnce() -> Result<T, SiloError>,
    {
        self.grow_if_full()?;

        let value = build()?;
        unsafe {
            // SAFETY: grow_if_full guarantees len < capacity.
            ptr::write(self.buf.ptr().add(self.len), value);
        }
        self.len += 1;

        Ok(())
    }

    /// Removes and returns the last element.
    ///
    /// # Examples
    ///
    /// ```
    /// use silo::{SiloError, SiloVec};
    ///
    /// let mut vec = SiloVec::new();
    /// vec.push(5).unwrap();
    ///
    /// assert_eq!(vec.pop().unwrap(), 5);
    /// assert!(matches!(vec.pop(), Err(SiloError::Underflow)));
    /// ```
    pub fn pop(&mut self) -> Result<T, SiloError> {
        if self.len == 0 {
            return Err(SiloError::Underflow);
        }

        self.len -= 1;
        // SAFETY: slot `len` held a live element; it is now outside the
        // initialized range and will not be dropped again.
        Ok(unsafe { ptr::read(self.buf.ptr().add(self.len)) })
    }

    /// Returns a reference to the element at `index`, checking bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use silo::{SiloError, SiloVec};
    ///
    /// let mut vec = SiloVec::new();
    /// vec.push(9).unwrap();
    ///
    /// assert_eq!(*vec.get(0).unwrap(), 9);
    /// assert!(matches!(
    ///     vec.get(1),
    ///     Err(SiloError::OutOfBounds { index: 1, len: 1 })
    /// ));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, SiloError> {
        self.as_slice().get(index).ok_or(SiloError::OutOfBounds {
            index,
            len: self.len,
        })
    }

    /// Returns a mutable reference to the element at `index`, checking
    /// bounds.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, SiloError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(SiloError::OutOfBounds { index, len })
    }

    /// Returns a reference to the element at `index` without bounds
    /// verification.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        // SAFETY: caller guarantees index < len, so the slot is initialized.
        unsafe { &*self.buf.ptr().add(index) }
    }

    /// Returns a mutable reference to the element at `index` without bounds
    /// verification.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        // SAFETY: caller guarantees index < len, so the slot is initialized.
        unsafe { &mut *self.buf.ptr().add(index) }
    }

    /// Shortens the vector to at most `new_len` elements, dropping the rest.
    /// Capacity is retained. A no-op when `new_len >= len`.
    pub fn truncate(&mut self, new_len: usize) {
        while self.len > new_len {
            self.len -= 1;
            unsafe {
                // SAFETY: slot `len` held a live element and is now outside
                // the initialized range; it is dropped exactly once.
                ptr::drop_in_place(self.buf.ptr().add(self.len));
            }
        }
    }

    /// Removes all elements. Capacity is retained.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Resizes the vector to `new_len` elements, filling new slots with
    /// clones of `value`.
    ///
    /// Growing reserves first (so a failed allocation changes nothing), then
    /// clones into `[len, new_len)`. If one of those clones fails, every
    /// fill element constructed so far is destroyed and the length is
    /// unchanged. Shrinking drops `[new_len, len)` and never reduces
    /// capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use silo::SiloVec;
    ///
    /// let mut vec = SiloVec::new();
    /// vec.push(10).unwrap();
    ///
    /// vec.resize(3, &0).unwrap();
    /// assert_eq!(vec.as_slice(), &[10, 0, 0]);
    ///
    /// vec.resize(1, &0).unwrap();
    /// assert_eq!(vec.as_slice(), &[10]);
    /// ```
    pub fn resize(&mut self, new_len: usize, value: &T) -> Result<(), SiloError>
    where
        T: TryClone,
    {
        self.resize_with(new_len, || value.try_clone())
    }

    /// Resizes the vector to `new_len` elements, filling new slots with
    /// values produced by `fill`.
    ///
    /// Same failure behavior as [`resize`](Self::resize): a factory failure
    /// destroys the fill elements constructed so far and restores the
    /// original length.
    pub fn resize_with<F>(&mut self, new_len: usize, mut fill: F) -> Result<(), SiloError>
    where
        F: FnMut() -> Result<T, SiloError>,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }

        let old_len = self.len;
        self.reserve(new_len)?;

        while self.len < new_len {
            match fill() {
                Ok(value) => {
                    unsafe {
                        // SAFETY: len < new_len <= capacity after reserve.
                        ptr::write(self.buf.ptr().add(self.len), value);
                    }
                    self.len += 1;
                }
                Err(e) => {
                    // Unwind only the elements this call constructed.
                    self.truncate(old_len);
                    return Err(e);
                }
            }
        }

        Ok(())
    }

    /// Releases unused tail capacity, reallocating to exactly `len` (or
    /// releasing the block entirely when empty).
    ///
    /// # Examples
    ///
    /// ```
    /// use silo::SiloVec;
    ///
    /// let mut vec: SiloVec<u8> = SiloVec::with_capacity(16).unwrap();
    /// vec.push(1).unwrap();
    ///
    /// vec.shrink_to_fit().unwrap();
    /// assert_eq!(vec.capacity(), 1);
    /// assert_eq!(vec.as_slice(), &[1]);
    /// ```
    pub fn shrink_to_fit(&mut self) -> Result<(), SiloError> {
        self.buf.realloc_to(self.len, self.len)?;
        Ok(())
    }

    /// Replaces the contents with a clone of `source`, adopting a clone of
    /// its allocator.
    ///
    /// The copy is built first and only then swapped in, so on failure —
    /// allocation or element clone — the destination is exactly as it was
    /// before the call.
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), SiloError>
    where
        T: TryClone,
        A: Clone,
    {
        *self = source.try_clone()?;
        Ok(())
    }

    /// Returns a slice over the live elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [0, len) is initialized; ptr is aligned and non-null
        // (dangling-but-aligned when unallocated, which from_raw_parts
        // permits for len 0).
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    /// Returns a mutable slice over the live elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as for as_slice, and &mut self gives exclusive access.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }
}

impl<T, A: RawAlloc> Drop for SiloVec<T, A> {
    fn drop(&mut self) {
        // Elements first; RawBuf::drop then releases the block once.
        self.clear();
    }
}

// With a defaultable allocator, `mem::take` gives the "move leaves the
// source empty" form of move semantics.
impl<T, A: RawAlloc + Default> Default for SiloVec<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T: TryClone, A: RawAlloc + Clone> TryClone for SiloVec<T, A> {
    /// Copy construction: an independent block sized to `len`, element-wise
    /// cloned.
    ///
    /// If a clone fails partway, the partially built copy is torn down —
    /// only the clones it constructed are dropped, its block is released —
    /// and the source is untouched.
    fn try_clone(&self) -> Result<Self, SiloError> {
        let mut copy = Self::new_in(self.buf.allocator().clone());
        copy.reserve(self.len)?;

        for item in self.iter() {
            copy.push(item.try_clone()?)?;
        }

        Ok(copy)
    }
}

impl<T, A: RawAlloc> Deref for SiloVec<T, A> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, A: RawAlloc> DerefMut for SiloVec<T, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<'a, T, A: RawAlloc> IntoIterator for &'a SiloVec<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, A: RawAlloc> IntoIterator for &'a mut SiloVec<T, A> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: fmt::Debug, A: RawAlloc> fmt::Debug for SiloVec<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, A: RawAlloc, B: RawAlloc> PartialEq<SiloVec<T, B>> for SiloVec<T, A> {
    fn eq(&self, other: &SiloVec<T, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, A: RawAlloc> Eq for SiloVec<T, A> {}
