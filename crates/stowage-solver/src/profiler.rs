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

//! # Profiler
//!
//! Wraps exactly one solve invocation and measures it without altering its
//! result: elapsed wall-clock time from a monotonic [`Instant`], in
//! milliseconds, and memory as the solver's peak working-set bytes
//! (reported through its own [`SearchStatistics`] accounting) converted to
//! megabytes and clamped non-negative.
//!
//! The profiler never catches or suppresses an error from the wrapped
//! algorithm: errors propagate unchanged, and no timing is attached to a
//! failed call. That is the documented, consistent failure policy.
//!
//! [`Instant`]: std::time::Instant
//! [`SearchStatistics`]: stowage_search::stats::SearchStatistics

use stowage_algorithms::{error::SolverError, solver::SubsetSolver};
use stowage_model::instance::Instance;
use stowage_search::{
    monitor::search_monitor::SearchMonitor, num::SolverNumeric, result::SolveOutcome,
};

const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

/// One measured solve invocation: the untouched outcome plus the two
/// measurement fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Measured<T> {
    /// The algorithm's outcome, exactly as it returned it.
    pub outcome: SolveOutcome<T>,
    /// Elapsed wall-clock milliseconds around the call, `>= 0`.
    pub execution_time_ms: f64,
    /// Peak working-set megabytes of the call, clamped `>= 0`.
    pub memory_used_mb: f64,
}

/// The measurement wrapper. Stateless; every call measures independently,
/// never through process-wide mutable counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Profiler;

impl Profiler {
    /// Measures a single solve call.
    ///
    /// # Errors
    ///
    /// Propagates the solver's error unchanged; no measurements are
    /// reported for a failed call.
    pub fn measure<T>(
        solver: &mut dyn SubsetSolver<T>,
        instance: &Instance<T>,
        monitor: &mut dyn SearchMonitor<T>,
    ) -> Result<Measured<T>, SolverError>
    where
        T: SolverNumeric,
    {
        let start_time = std::time::Instant::now();
        let outcome = solver.solve(instance, monitor)?;
        let elapsed = start_time.elapsed();

        let memory_used_mb =
            (outcome.statistics().peak_memory_bytes as f64 / BYTES_PER_MEGABYTE).max(0.0);

        Ok(Measured {
            outcome,
            execution_time_ms: elapsed.as_secs_f64() * 1_000.0,
            memory_used_mb,
        })
    }
}
