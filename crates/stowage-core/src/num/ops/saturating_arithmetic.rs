// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Saturating arithmetic by value.
//!
//! Subset accumulation adds item costs into running totals that must never
//! wrap: a saturated total still compares correctly against any smaller
//! budget, while a wrapped one silently becomes feasible again. These traits
//! mirror the inherent `saturating_*` methods on the primitive integers but
//! provide a by-value, trait-based API usable in generic bounds.

use core::ops::{Add, Mul, Sub};

macro_rules! saturating_impl_binary_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: Self) -> Self {
                <$t>::$src_method(self, v)
            }
        }
    };
}

/// Saturating addition by value (no references).
///
/// # Examples
///
/// ```rust
/// # use stowage_core::num::ops::saturating_arithmetic::SaturatingAddVal;
///
/// let total: i64 = i64::MAX - 5;
/// let cost: i64 = 10;
/// assert_eq!(total.saturating_add_val(cost), i64::MAX); // Clamps at i64::MAX
/// ```
pub trait SaturatingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs saturating addition by value.
    fn saturating_add_val(self, v: Self) -> Self;
}

saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, u8, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, u16, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, u32, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, u64, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, usize, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, i8, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, i16, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, i32, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, i64, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, isize, saturating_add);

/// Saturating subtraction by value (no references).
///
/// # Examples
///
/// ```rust
/// # use stowage_core::num::ops::saturating_arithmetic::SaturatingSubVal;
///
/// let headroom: i64 = i64::MIN + 5;
/// assert_eq!(headroom.saturating_sub_val(10), i64::MIN); // Clamps at i64::MIN
/// ```
pub trait SaturatingSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs saturating subtraction by value.
    fn saturating_sub_val(self, v: Self) -> Self;
}

saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, u8, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, u16, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, u32, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, u64, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, usize, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, i8, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, i16, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, i32, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, i64, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, isize, saturating_sub);

/// Saturating multiplication by value (no references).
pub trait SaturatingMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs saturating multiplication by value.
    fn saturating_mul_val(self, v: Self) -> Self;
}

saturating_impl_binary_val!(SaturatingMulVal, saturating_mul_val, u8, saturating_mul);
saturating_impl_binary_val!(SaturatingMulVal, saturating_mul_val, u16, saturating_mul);
saturating_impl_binary_val!(SaturatingMulVal, saturating_mul_val, u32, saturating_mul);
saturating_impl_binary_val!(SaturatingMulVal, saturating_mul_val, u64, saturating_mul);
saturating_impl_binary_val!(SaturatingMulVal, saturating_mul_val, usize, saturating_mul);
saturating_impl_binary_val!(SaturatingMulVal, saturating_mul_val, i8, saturating_mul);
saturating_impl_binary_val!(SaturatingMulVal, saturating_mul_val, i16, saturating_mul);
saturating_impl_binary_val!(SaturatingMulVal, saturating_mul_val, i32, saturating_mul);
saturating_impl_binary_val!(SaturatingMulVal, saturating_mul_val, i64, saturating_mul);
saturating_impl_binary_val!(SaturatingMulVal, saturating_mul_val, isize, saturating_mul);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturating_add_clamps_at_max() {
        let a: i64 = i64::MAX - 1;
        assert_eq!(a.saturating_add_val(10), i64::MAX);
    }

    #[test]
    fn test_saturating_add_normal_case() {
        let a: i64 = 20;
        assert_eq!(a.saturating_add_val(22), 42);
    }

    #[test]
    fn test_saturating_sub_clamps_at_min() {
        let a: i64 = i64::MIN + 1;
        assert_eq!(a.saturating_sub_val(10), i64::MIN);
    }

    #[test]
    fn test_saturating_mul_clamps_at_max() {
        let a: i64 = i64::MAX / 2;
        assert_eq!(a.saturating_mul_val(4), i64::MAX);
    }

    #[test]
    fn test_unsigned_saturating_sub_clamps_at_zero() {
        let a: u64 = 5;
        assert_eq!(a.saturating_sub_val(10), 0);
    }
}
