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

//! Checked arithmetic by value.
//!
//! Table sizing and capacity computations must fail loudly instead of
//! wrapping: a wrapped cell count would allocate a wrong-sized table and
//! corrupt reconstruction. These traits mirror the inherent `checked_*`
//! methods on the primitive integers with a by-value, trait-based API.

use core::ops::{Add, Mul, Sub};

macro_rules! checked_impl_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: $t) -> Option<$t> {
                <$t>::$src_method(self, v)
            }
        }
    };
}

/// Checked addition by value, returning `None` on overflow.
///
/// # Examples
///
/// ```rust
/// # use stowage_core::num::ops::checked_arithmetic::CheckedAddVal;
///
/// let cells: usize = usize::MAX;
/// assert_eq!(cells.checked_add_val(1), None); // Overflow occurs
/// assert_eq!(10usize.checked_add_val(1), Some(11));
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition by value, returning `None` if overflow occurs.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

checked_impl_val!(CheckedAddVal, checked_add_val, u8, checked_add);
checked_impl_val!(CheckedAddVal, checked_add_val, u16, checked_add);
checked_impl_val!(CheckedAddVal, checked_add_val, u32, checked_add);
checked_impl_val!(CheckedAddVal, checked_add_val, u64, checked_add);
checked_impl_val!(CheckedAddVal, checked_add_val, usize, checked_add);
checked_impl_val!(CheckedAddVal, checked_add_val, i8, checked_add);
checked_impl_val!(CheckedAddVal, checked_add_val, i16, checked_add);
checked_impl_val!(CheckedAddVal, checked_add_val, i32, checked_add);
checked_impl_val!(CheckedAddVal, checked_add_val, i64, checked_add);
checked_impl_val!(CheckedAddVal, checked_add_val, isize, checked_add);

/// Checked subtraction by value, returning `None` on underflow.
pub trait CheckedSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs checked subtraction by value, returning `None` if underflow occurs.
    fn checked_sub_val(self, v: Self) -> Option<Self>;
}

checked_impl_val!(CheckedSubVal, checked_sub_val, u8, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, u16, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, u32, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, u64, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, usize, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, i8, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, i16, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, i32, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, i64, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, isize, checked_sub);

/// Checked multiplication by value, returning `None` on overflow.
///
/// # Examples
///
/// ```rust
/// # use stowage_core::num::ops::checked_arithmetic::CheckedMulVal;
///
/// let rows: usize = usize::MAX / 2;
/// assert_eq!(rows.checked_mul_val(3), None); // Overflow occurs
/// assert_eq!(6usize.checked_mul_val(7), Some(42));
/// ```
pub trait CheckedMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs checked multiplication by value, returning `None` if overflow occurs.
    fn checked_mul_val(self, v: Self) -> Option<Self>;
}

checked_impl_val!(CheckedMulVal, checked_mul_val, u8, checked_mul);
checked_impl_val!(CheckedMulVal, checked_mul_val, u16, checked_mul);
checked_impl_val!(CheckedMulVal, checked_mul_val, u32, checked_mul);
checked_impl_val!(CheckedMulVal, checked_mul_val, u64, checked_mul);
checked_impl_val!(CheckedMulVal, checked_mul_val, usize, checked_mul);
checked_impl_val!(CheckedMulVal, checked_mul_val, i8, checked_mul);
checked_impl_val!(CheckedMulVal, checked_mul_val, i16, checked_mul);
checked_impl_val!(CheckedMulVal, checked_mul_val, i32, checked_mul);
checked_impl_val!(CheckedMulVal, checked_mul_val, i64, checked_mul);
checked_impl_val!(CheckedMulVal, checked_mul_val, isize, checked_mul);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_add_detects_overflow() {
        assert_eq!(i64::MAX.checked_add_val(1), None);
        assert_eq!(40i64.checked_add_val(2), Some(42));
    }

    #[test]
    fn test_checked_sub_detects_underflow() {
        assert_eq!(0u64.checked_sub_val(1), None);
        assert_eq!(44i64.checked_sub_val(2), Some(42));
    }

    #[test]
    fn test_checked_mul_detects_overflow() {
        assert_eq!((usize::MAX / 2).checked_mul_val(3), None);
        assert_eq!(6usize.checked_mul_val(7), Some(42));
    }
}
