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

//! # Hybrid Dispatcher
//!
//! Not an independent algorithm: a size policy over the other variants.
//! Small instances go to the pruned backtracking search (exact and cheap
//! at that size), moderate `n · b` products go to the dynamic program
//! (exact, pseudo-polynomial), everything else falls back to the greedy
//! heuristic (approximate, bounded cost).
//!
//! The thresholds are configuration, not constants — they decide which
//! optimality guarantee a caller receives, so they are part of the public
//! contract. The delegate's outcome is returned unchanged: an exact
//! delegate yields `OptimalityProven`, the greedy fallback yields
//! `HeuristicCompleted`.

use crate::{
    backtracking::BacktrackingSolver,
    dp::DpSolver,
    error::SolverError,
    greedy::GreedySolver,
    solver::{trivial_outcome, SubsetSolver},
};
use stowage_model::instance::Instance;
use stowage_search::{
    monitor::search_monitor::SearchMonitor, num::SolverNumeric, result::SolveOutcome,
};

/// The dispatch thresholds. Defaults keep the exact delegates well inside
/// interactive latencies on commodity hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HybridConfig {
    /// Instances with fewer items than this go to the backtracking search.
    pub exact_item_threshold: usize,
    /// Above the item threshold, instances whose `n * (b + 1)` cell count
    /// stays at or below this go to the dynamic program.
    pub dp_cell_threshold: u64,
}

impl Default for HybridConfig {
    fn default() -> Self {
        Self {
            exact_item_threshold: 20,
            dp_cell_threshold: 1_000_000,
        }
    }
}

impl HybridConfig {
    /// Creates the default configuration.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the item count below which the backtracking search is used.
    #[inline]
    pub fn with_exact_item_threshold(mut self, exact_item_threshold: usize) -> Self {
        self.exact_item_threshold = exact_item_threshold;
        self
    }

    /// Sets the largest dp cell count still dispatched to the dynamic
    /// program.
    #[inline]
    pub fn with_dp_cell_threshold(mut self, dp_cell_threshold: u64) -> Self {
        self.dp_cell_threshold = dp_cell_threshold;
        self
    }
}

/// The dispatching solver. Its guarantee depends on the chosen delegate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HybridSolver {
    config: HybridConfig,
    backtracking: BacktrackingSolver,
    dp: DpSolver,
    greedy: GreedySolver,
}

impl HybridSolver {
    /// Creates a new `HybridSolver` with the default thresholds.
    #[inline]
    pub fn new() -> Self {
        Self::with_config(HybridConfig::default())
    }

    /// Creates a new `HybridSolver` with the given thresholds.
    #[inline]
    pub fn with_config(config: HybridConfig) -> Self {
        Self {
            config,
            backtracking: BacktrackingSolver::new(),
            dp: DpSolver::new(),
            greedy: GreedySolver::new(),
        }
    }

    /// Returns the active configuration.
    #[inline]
    pub fn config(&self) -> HybridConfig {
        self.config
    }
}

impl<T> SubsetSolver<T> for HybridSolver
where
    T: SolverNumeric,
{
    fn name(&self) -> &str {
        "hybrid"
    }

    fn solve(
        &mut self,
        instance: &Instance<T>,
        monitor: &mut dyn SearchMonitor<T>,
    ) -> Result<SolveOutcome<T>, SolverError> {
        if let Some(outcome) = trivial_outcome(instance) {
            return Ok(outcome);
        }

        let num_items = instance.num_items();
        if num_items < self.config.exact_item_threshold {
            log::debug!("hybrid: {} items, dispatching to backtracking", num_items);
            return self.backtracking.solve(instance, monitor);
        }

        let capacity = instance.effective_budget().to_u128().unwrap_or(u128::MAX);
        let cells = (num_items as u128).saturating_mul(capacity.saturating_add(1));
        if cells <= u128::from(self.config.dp_cell_threshold) {
            log::debug!("hybrid: {} dp cells, dispatching to dp", cells);
            return self.dp.solve(instance, monitor);
        }

        log::debug!(
            "hybrid: {} items x budget {} too large for exact search, dispatching to greedy",
            num_items,
            instance.effective_budget()
        );
        self.greedy.solve(instance, monitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stowage_search::monitor::no_op::NoOperationMonitor;
    use stowage_search::result::TerminationReason;

    type IntegerType = i64;

    fn solve_with(
        config: HybridConfig,
        costs: Vec<IntegerType>,
        budget: IntegerType,
    ) -> SolveOutcome<IntegerType> {
        let instance = Instance::new(costs, budget).unwrap();
        HybridSolver::with_config(config)
            .solve(&instance, &mut NoOperationMonitor::new())
            .unwrap()
    }

    #[test]
    fn test_small_instances_are_solved_exactly() {
        let outcome = solve_with(HybridConfig::default(), vec![10, 20, 30], 30);
        assert!(outcome.is_optimal());
        assert_eq!(outcome.selection().total_cost(), 30);
        assert_eq!(outcome.selection().items()[0].get(), 2);
    }

    #[test]
    fn test_moderate_instances_use_the_dynamic_program() {
        // 24 items defeat the item threshold; 24 * (50 + 1) cells are well
        // within the dp threshold, so the answer stays exact.
        let costs: Vec<IntegerType> = (1..=24).collect();
        let outcome = solve_with(HybridConfig::default(), costs, 50);
        assert!(outcome.is_optimal());
        assert_eq!(outcome.selection().total_cost(), 50);
    }

    #[test]
    fn test_large_instances_fall_back_to_greedy() {
        let config = HybridConfig::default()
            .with_exact_item_threshold(2)
            .with_dp_cell_threshold(10);
        let outcome = solve_with(config, vec![7, 6, 4], 10);

        // Greedy territory: no optimality proof, and on this instance the
        // heuristic answer is genuinely below the optimum of 10.
        assert!(!outcome.is_optimal());
        assert_eq!(
            *outcome.termination_reason(),
            TerminationReason::HeuristicCompleted
        );
        assert_eq!(outcome.selection().total_cost(), 7);
    }

    #[test]
    fn test_trivial_cases_bypass_dispatch() {
        let outcome = solve_with(HybridConfig::default(), Vec::new(), 10);
        assert!(outcome.is_optimal());
        assert!(outcome.selection().is_empty());

        let outcome = solve_with(HybridConfig::default(), vec![1, 2], -1);
        assert!(outcome.selection().is_empty());
    }

    #[test]
    fn test_config_accessors() {
        let config = HybridConfig::new()
            .with_exact_item_threshold(5)
            .with_dp_cell_threshold(99);
        assert_eq!(config.exact_item_threshold, 5);
        assert_eq!(config.dp_cell_threshold, 99);

        let solver = HybridSolver::with_config(config);
        assert_eq!(solver.config(), config);
    }

    #[test]
    fn test_agrees_with_exact_answer_on_dp_path() {
        // Forced through the dp branch by a zero item threshold.
        let config = HybridConfig::default().with_exact_item_threshold(0);
        let outcome = solve_with(config, vec![5, 5, 5], 10);
        assert!(outcome.is_optimal());
        assert_eq!(outcome.selection().total_cost(), 10);
        let items: Vec<usize> = outcome.selection().items().iter().map(|i| i.get()).collect();
        assert_eq!(items, vec![1, 2]);
    }
}
