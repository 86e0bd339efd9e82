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

//! # Stowage Solver
//!
//! The orchestration-facing facade over the selection algorithms: stable
//! string keys for algorithm selection, a profiled single-call entry point
//! producing one uniform [`result::AlgorithmResult`] per run, and a
//! comparison pass that runs every variant on one instance and scores each
//! against the exact optimum.
//!
//! This is the crate an HTTP handler, CLI, or batch job talks to. It owns
//! the boundary conversions (raw `i64` slices in, plain result fields
//! out), the key-to-algorithm mapping (unknown keys are invalid requests,
//! not solver failures), and the measurement policy: wall-clock time from
//! a monotonic clock and peak working-set bytes from the solver's own
//! accounting, both clamped non-negative at the boundary.
//!
//! ```rust
//! use stowage_solver::{algorithm::Algorithm, solve::solve};
//!
//! let result = solve(Algorithm::Dp, &[10, 20, 30], 29).unwrap();
//! assert_eq!(result.total_cost, 20);
//! assert_eq!(result.indices, vec![1]);
//! ```

pub mod algorithm;
pub mod compare;
pub mod error;
pub mod profiler;
pub mod result;
pub mod solve;
