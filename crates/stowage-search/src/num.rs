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

//! # Solver Numeric Trait
//!
//! Unified numeric bounds for the selection algorithms. `SolverNumeric`
//! collects the integer capabilities a cost type must provide: intrinsic
//! traits (`PrimInt`, `Signed` — budgets may be negative), associated
//! constants, by-value saturating and checked arithmetic from
//! `stowage_core`, widening to `i64` for the reporting boundary, and
//! `Send + Sync` so concurrent solves need no coordination.
//!
//! Keeping the bounds in one alias keeps generic signatures short and the
//! overflow semantics consistent: running totals saturate (a saturated
//! total still compares correctly against the budget), capacity
//! computations are checked.
//!
//! Note: `i128` is intentionally excluded for performance reasons.

use stowage_core::num::{
    constants::{MinusOne, PlusOne, Zero},
    ops::{checked_arithmetic, saturating_arithmetic},
};

use num_traits::{PrimInt, Signed};

/// A trait alias for the integer types the solvers accept as cost type.
/// These are usually the signed integer types `i8`, `i16`, `i32` and `i64`.
pub trait SolverNumeric:
    PrimInt
    + Signed
    + Into<i64>
    + std::fmt::Debug
    + std::fmt::Display
    + MinusOne
    + PlusOne
    + Zero
    + saturating_arithmetic::SaturatingAddVal
    + saturating_arithmetic::SaturatingSubVal
    + saturating_arithmetic::SaturatingMulVal
    + checked_arithmetic::CheckedAddVal
    + checked_arithmetic::CheckedSubVal
    + checked_arithmetic::CheckedMulVal
    + Send
    + Sync
{
}

impl<T> SolverNumeric for T where
    T: PrimInt
        + Signed
        + Into<i64>
        + std::fmt::Debug
        + std::fmt::Display
        + MinusOne
        + PlusOne
        + Zero
        + saturating_arithmetic::SaturatingAddVal
        + saturating_arithmetic::SaturatingSubVal
        + saturating_arithmetic::SaturatingMulVal
        + checked_arithmetic::CheckedAddVal
        + checked_arithmetic::CheckedSubVal
        + checked_arithmetic::CheckedMulVal
        + Send
        + Sync
{
}
