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

//! The solve entry points an orchestration layer calls.
//!
//! ```text
//! solve(costs: sequence<non-negative integer>, budget: integer) -> AlgorithmResult
//!   fails with InvalidInstance if any cost is negative
//! ```
//!
//! Costs arrive as `i64` — the widest type the boundary speaks; fractional
//! wire input must be rejected by the layer that parses it, before it can
//! reach these signatures.

use crate::{
    algorithm::Algorithm,
    error::SolveError,
    profiler::Profiler,
    result::{AlgorithmResult, Guarantee, ResultBuilder},
};
use stowage_model::instance::Instance;
use stowage_search::monitor::{
    no_op::NoOperationMonitor, search_monitor::SearchMonitor, time_limit::TimeLimitMonitor,
};

/// Solves one instance with the given algorithm and a caller-supplied
/// monitor, returning the uniform profiled result.
///
/// # Errors
///
/// [`SolveError::InvalidInstance`] for negative costs,
/// [`SolveError::Solver`] for capacity failures. Cancellation through the
/// monitor is not an error: the result comes back flagged
/// [`Guarantee::BestEffort`].
pub fn solve_with_monitor(
    algorithm: Algorithm,
    costs: &[i64],
    budget: i64,
    monitor: &mut dyn SearchMonitor<i64>,
) -> Result<AlgorithmResult, SolveError> {
    let instance = Instance::new(costs.to_vec(), budget)?;
    let mut solver = algorithm.solver::<i64>();

    log::debug!("solving {} with `{}`", instance, algorithm);
    let measured = Profiler::measure(solver.as_mut(), &instance, monitor)?;

    let (result, reason, _statistics) = measured.outcome.into_parts();
    let selection = result.selection().clone();

    Ok(ResultBuilder::new(algorithm)
        .total_cost(selection.total_cost())
        .indices(selection.items().iter().map(|item| item.get()).collect())
        .execution_time_ms(measured.execution_time_ms)
        .memory_used_mb(measured.memory_used_mb)
        .guarantee(Guarantee::from(&reason))
        .build())
}

/// Solves one instance with the given algorithm, unbounded.
pub fn solve(
    algorithm: Algorithm,
    costs: &[i64],
    budget: i64,
) -> Result<AlgorithmResult, SolveError> {
    solve_with_monitor(algorithm, costs, budget, &mut NoOperationMonitor::new())
}

/// Solves one instance under a wall-clock deadline. A search that exceeds
/// it returns its best-so-far selection flagged [`Guarantee::BestEffort`].
pub fn solve_with_deadline(
    algorithm: Algorithm,
    costs: &[i64],
    budget: i64,
    deadline: std::time::Duration,
) -> Result<AlgorithmResult, SolveError> {
    solve_with_monitor(
        algorithm,
        costs,
        budget,
        &mut TimeLimitMonitor::new(deadline),
    )
}

/// Solves one instance, selecting the algorithm by its stable string key.
/// An unrecognized key is rejected before any solver runs.
pub fn solve_by_key(key: &str, costs: &[i64], budget: i64) -> Result<AlgorithmResult, SolveError> {
    let algorithm: Algorithm = key.parse()?;
    solve(algorithm, costs, budget)
}
