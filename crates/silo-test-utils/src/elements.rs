// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Element types that account for their own lifecycle.

use std::cell::Cell;
use std::rc::Rc;

use silo::{SiloError, TryClone};

/// An element that increments a shared counter when dropped.
///
/// Lets tests assert that bulk operations drop each element exactly once —
/// no leaks, no double drops.
#[derive(Debug)]
pub struct DropTally {
    /// Payload, for order/value assertions.
    pub value: i32,
    drops: Rc<Cell<usize>>,
}

impl DropTally {
    /// Creates an element reporting its drop to `drops`.
    pub fn new(value: i32, drops: &Rc<Cell<usize>>) -> Self {
        Self {
            value,
            drops: Rc::clone(drops),
        }
    }
}

impl Drop for DropTally {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

impl TryClone for DropTally {
    fn try_clone(&self) -> Result<Self, SiloError> {
        Ok(Self {
            value: self.value,
            drops: Rc::clone(&self.drops),
        })
    }
}

/// The error a [`FlakyClone`] reports when its fuse runs out.
#[derive(Debug)]
pub struct CloneFailed;

/// An element whose `try_clone` succeeds a fixed number of times, then fails.
///
/// The fuse is shared between the original and all of its clones, so "fail
/// on the n-th duplication in this bulk operation" is a single counter.
/// Drops are tallied like [`DropTally`] for leak assertions on the unwind
/// path.
#[derive(Debug)]
pub struct FlakyClone {
    /// Payload, for order/value assertions.
    pub value: i32,
    fuse: Rc<Cell<usize>>,
    drops: Rc<Cell<usize>>,
}

impl FlakyClone {
    /// Creates an element whose clone family will succeed `fuse` times.
    pub fn new(value: i32, fuse: &Rc<Cell<usize>>, drops: &Rc<Cell<usize>>) -> Self {
        Self {
            value,
            fuse: Rc::clone(fuse),
            drops: Rc::clone(drops),
        }
    }
}

impl Drop for FlakyClone {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

impl TryClone for FlakyClone {
    fn try_clone(&self) -> Result<Self, SiloError> {
        let left = self.fuse.get();
        if left == 0 {
            return Err(SiloError::element(CloneFailed));
        }

        self.fuse.set(left - 1);
        Ok(Self {
            value: self.value,
            fuse: Rc::clone(&self.fuse),
            drops: Rc::clone(&self.drops),
        })
    }
}
