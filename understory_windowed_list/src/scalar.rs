// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar abstraction for offsets and heights.
//!
//! This trait is intentionally small and only implemented for `f32` and `f64`.
//! Its index conversions are total: NaN maps to `0` and infinities saturate, so
//! the range arithmetic built on top of it never panics.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// Scalar type used for scroll offsets, viewport heights, and item heights.
///
/// This is currently implemented for `f32` and `f64`. The trait is deliberately
/// minimal and geared toward floating-point pixel coordinates.
pub trait Scalar:
    Copy
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Additive identity (typically `0.0`).
    fn zero() -> Self;

    /// Returns the maximum of `self` and `other`.
    fn max(self, other: Self) -> Self;

    /// Returns the minimum of `self` and `other`.
    fn min(self, other: Self) -> Self;

    /// Returns `true` if the value is finite (not NaN or infinite).
    fn is_finite(self) -> bool;

    /// Constructs from a `usize` lossily.
    fn from_usize(value: usize) -> Self;

    /// Returns `true` if the value is finite and strictly greater than zero.
    fn is_positive_finite(self) -> bool {
        self.is_finite() && self > Self::zero()
    }

    /// Returns half of the value.
    fn half(self) -> Self {
        self / Self::from_usize(2)
    }

    /// Rounds toward negative infinity and converts to `isize`.
    ///
    /// NaN converts to `0`; values outside the `isize` range saturate.
    fn floor_to_isize(self) -> isize;

    /// Rounds toward positive infinity and converts to `isize`.
    ///
    /// NaN converts to `0`; values outside the `isize` range saturate.
    fn ceil_to_isize(self) -> isize;
}

macro_rules! impl_scalar {
    ($ty:ty) => {
        impl Scalar for $ty {
            fn zero() -> Self {
                0.0
            }

            fn max(self, other: Self) -> Self {
                Self::max(self, other)
            }

            fn min(self, other: Self) -> Self {
                Self::min(self, other)
            }

            fn is_finite(self) -> bool {
                Self::is_finite(self)
            }

            fn from_usize(value: usize) -> Self {
                value as Self
            }

            fn floor_to_isize(self) -> isize {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "`as` saturates and maps NaN to zero; callers clamp to an index range"
                )]
                let truncated = self as isize;
                if (truncated as Self) > self {
                    truncated.saturating_sub(1)
                } else {
                    truncated
                }
            }

            fn ceil_to_isize(self) -> isize {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "`as` saturates and maps NaN to zero; callers clamp to an index range"
                )]
                let truncated = self as isize;
                if (truncated as Self) < self {
                    truncated.saturating_add(1)
                } else {
                    truncated
                }
            }
        }
    };
}

impl_scalar!(f32);
impl_scalar!(f64);
