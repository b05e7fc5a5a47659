// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fallible element duplication.

use crate::error::SiloError;

/// Duplication that may fail.
///
/// This is the element capability [`SiloVec`](crate::SiloVec) requires for
/// copy construction, `resize` fill, and `filled`. Types whose duplication
/// involves allocation or other fallible work implement it directly and
/// report failures through [`SiloError::element`]; for plain-old-data types
/// it is a trivial copy.
///
/// There is deliberately no blanket `impl<T: Clone>` — it would make it
/// impossible for a type to both be `Clone` for general use and report
/// duplication failures here.
pub trait TryClone: Sized {
    /// Returns a duplicate of `self`, or the reason one could not be made.
    fn try_clone(&self) -> Result<Self, SiloError>;
}

macro_rules! impl_try_clone_copy {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TryClone for $ty {
                #[inline]
                fn try_clone(&self) -> Result<Self, SiloError> {
                    Ok(*self)
                }
            }
        )*
    };
}

impl_try_clone_copy!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char, (),
);

impl<T: TryClone> TryClone for Option<T> {
    fn try_clone(&self) -> Result<Self, SiloError> {
        match self {
            Some(value) => Ok(Some(value.try_clone()?)),
            None => Ok(None),
        }
    }
}
