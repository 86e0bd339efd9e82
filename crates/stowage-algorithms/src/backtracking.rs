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

//! # Pruned Backtracking Search
//!
//! Depth-first search over the include/exclude decision tree, visiting
//! items in ascending index order and exploring the include branch first.
//! Two cuts keep the tree small:
//!
//! - **Bound cut**: with `suffix[i]` the total cost of items `i..n`, a node
//!   whose `current + suffix[i]` is strictly below the incumbent cannot
//!   reach it and is abandoned. Equality is deliberately not cut — an
//!   equal-total subset can still replace the incumbent under the
//!   canonical tie-break, so branches that can only tie must be explored.
//! - **Feasibility cut**: an include branch whose total would exceed the
//!   budget is skipped, and a node whose total already equals the budget
//!   has no affordable positive-cost descendants left worth visiting
//!   (zero-cost additions only grow the item count, which the canonical
//!   ordering rejects).
//!
//! Incumbent replacement routes through the canonical comparator, so the
//! search converges to the same answer as the exhaustive and dp solvers.
//! The recursion is one frame per item depth; instances deep enough to
//! threaten the stack are far beyond exhaustive search anyway.

use crate::{
    error::SolverError,
    solver::{trivial_outcome, SubsetSolver},
};
use smallvec::SmallVec;
use stowage_model::{
    index::ItemIndex,
    instance::Instance,
    selection::{canonically_preferred, Selection},
};
use stowage_search::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    num::SolverNumeric,
    result::SolveOutcome,
    stats::SearchStatistics,
};

/// Decision paths rarely grow past this depth before a cut; deeper paths
/// spill to the heap.
const INLINE_PATH_DEPTH: usize = 32;

/// The pruned depth-first solver. Exact on every instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    /// Creates a new `BacktrackingSolver`.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T> SubsetSolver<T> for BacktrackingSolver
where
    T: SolverNumeric,
{
    fn name(&self) -> &str {
        "backtracking"
    }

    fn solve(
        &mut self,
        instance: &Instance<T>,
        monitor: &mut dyn SearchMonitor<T>,
    ) -> Result<SolveOutcome<T>, SolverError> {
        if let Some(outcome) = trivial_outcome(instance) {
            return Ok(outcome);
        }

        let session = BacktrackingSearchSession::new(instance, monitor);
        Ok(session.run())
    }
}

/// Per-run state of one backtracking search.
struct BacktrackingSearchSession<'a, T> {
    instance: &'a Instance<T>,
    budget: T,
    /// `suffix_totals[i]` is the saturating total cost of items `i..n`.
    suffix_totals: Vec<T>,
    path: SmallVec<[ItemIndex; INLINE_PATH_DEPTH]>,
    best_items: Vec<ItemIndex>,
    best_total: T,
    monitor: &'a mut dyn SearchMonitor<T>,
    statistics: SearchStatistics,
    abort_reason: Option<String>,
    start_time: std::time::Instant,
}

impl<'a, T> BacktrackingSearchSession<'a, T>
where
    T: SolverNumeric,
{
    fn new(instance: &'a Instance<T>, monitor: &'a mut dyn SearchMonitor<T>) -> Self {
        let num_items = instance.num_items();
        let costs = instance.costs();

        let mut suffix_totals = vec![T::zero(); num_items + 1];
        for i in (0..num_items).rev() {
            suffix_totals[i] = suffix_totals[i + 1].saturating_add_val(costs[i]);
        }

        let mut statistics = SearchStatistics::default();
        statistics.record_memory_bytes(
            suffix_totals.capacity() * std::mem::size_of::<T>()
                + num_items * std::mem::size_of::<ItemIndex>(),
        );

        Self {
            instance,
            budget: instance.effective_budget(),
            suffix_totals,
            path: SmallVec::new(),
            best_items: Vec::new(),
            best_total: T::ZERO,
            monitor,
            statistics,
            abort_reason: None,
            start_time: std::time::Instant::now(),
        }
    }

    fn run(mut self) -> SolveOutcome<T> {
        self.monitor.on_enter_search(self.instance);
        self.explore(0, T::ZERO);

        self.statistics.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search();

        let selection = Selection::new(self.best_total, self.best_items);
        match self.abort_reason {
            Some(reason) => SolveOutcome::aborted(selection, reason, self.statistics),
            None => SolveOutcome::optimal(selection, self.statistics),
        }
    }

    fn explore(&mut self, index: usize, current_total: T) {
        if self.abort_reason.is_some() {
            return;
        }

        self.monitor.on_step();
        self.statistics.on_node_explored();
        self.statistics.on_depth_update(self.path.len() as u64);

        if let SearchCommand::Terminate(reason) = self.monitor.search_command() {
            self.abort_reason = Some(reason);
            return;
        }

        // Every node is a feasible subset; the incumbent is replaced on a
        // strictly greater total, or on a canonically preferred tie.
        if current_total > self.best_total
            || (current_total == self.best_total
                && canonically_preferred(&self.path, &self.best_items))
        {
            self.best_total = current_total;
            self.best_items = self.path.to_vec();
            self.statistics.on_incumbent();
            self.monitor
                .on_incumbent(&Selection::new(current_total, self.best_items.clone()));
        }

        if index == self.instance.num_items() || current_total >= self.budget {
            return;
        }

        // Bound cut: even taking every remaining item cannot beat the
        // incumbent. Ties are kept alive for the canonical comparator.
        if current_total.saturating_add_val(self.suffix_totals[index]) < self.best_total {
            self.statistics.on_pruning_bound();
            return;
        }

        let cost = self.instance.costs()[index];
        let with_item = current_total.saturating_add_val(cost);

        if with_item <= self.budget {
            self.path.push(ItemIndex::new(index));
            self.explore(index + 1, with_item);
            self.path.pop();
        } else {
            self.statistics.on_pruning_infeasible();
        }

        self.explore(index + 1, current_total);
    }
}
