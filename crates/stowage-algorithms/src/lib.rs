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

//! # Stowage Algorithms
//!
//! The five selection algorithm variants behind the shared
//! [`solver::SubsetSolver`] contract:
//!
//! - [`brute_force::BruteForceSolver`]: exhaustive mask enumeration,
//!   `O(2^n · n)`. Exact; only tractable for small `n`.
//! - [`dp::DpSolver`]: pseudo-polynomial table over the capacity,
//!   `O(n · b)` time and space. Exact; the ground truth in tests.
//! - [`greedy::GreedySolver`]: descending-cost single pass,
//!   `O(n log n)`. Heuristic, never above the optimum.
//! - [`backtracking::BacktrackingSolver`]: include-first depth-first
//!   search with suffix-sum bounding. Exact, prunes what brute force
//!   enumerates.
//! - [`hybrid::HybridSolver`]: a size-policy dispatcher over the
//!   backtracking, dp, and greedy variants; its optimality guarantee
//!   depends on the delegate chosen.
//!
//! Every solver short-circuits trivial instances (no items or a negative
//! budget) to the empty selection, polls its [`SearchMonitor`] once per
//! step so callers can bound the exponential variants, and resolves ties
//! between equally priced subsets through the canonical ordering in
//! `stowage_model::selection`.
//!
//! [`SearchMonitor`]: stowage_search::monitor::search_monitor::SearchMonitor

pub mod backtracking;
pub mod brute_force;
pub mod dp;
pub mod error;
pub mod greedy;
pub mod hybrid;
pub mod solver;

#[cfg(test)]
mod tests {
    //! Cross-algorithm equivalence checks on randomized instances.

    use crate::{
        backtracking::BacktrackingSolver, brute_force::BruteForceSolver, dp::DpSolver,
        greedy::GreedySolver, solver::SubsetSolver,
    };
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use stowage_model::instance::Instance;
    use stowage_search::monitor::no_op::NoOperationMonitor;

    type IntegerType = i64;

    fn random_instance(rng: &mut StdRng, num_items: usize) -> Instance<IntegerType> {
        let costs: Vec<IntegerType> = (0..num_items).map(|_| rng.gen_range(0..=40)).collect();
        let total: IntegerType = costs.iter().sum();
        let budget = rng.gen_range(0..=total.max(1));
        Instance::new(costs, budget).unwrap()
    }

    #[test]
    fn test_exact_solvers_agree_on_random_instances() {
        let mut rng = StdRng::seed_from_u64(0x5707A6E);

        for _ in 0..200 {
            let num_items = rng.gen_range(0..=12);
            let instance = random_instance(&mut rng, num_items);

            let brute = BruteForceSolver::new()
                .solve(&instance, &mut NoOperationMonitor::new())
                .unwrap();
            let dp = DpSolver::new()
                .solve(&instance, &mut NoOperationMonitor::new())
                .unwrap();
            let backtracking = BacktrackingSolver::new()
                .solve(&instance, &mut NoOperationMonitor::new())
                .unwrap();

            assert_eq!(
                brute.selection().total_cost(),
                dp.selection().total_cost(),
                "brute force and dp disagree on {}",
                instance
            );
            assert_eq!(
                brute.selection().total_cost(),
                backtracking.selection().total_cost(),
                "brute force and backtracking disagree on {}",
                instance
            );

            // All exact solvers converge to the canonical item set, not
            // just the canonical total.
            assert_eq!(
                brute.selection().items(),
                dp.selection().items(),
                "brute force and dp picked different canonical sets on {}",
                instance
            );
            assert_eq!(
                brute.selection().items(),
                backtracking.selection().items(),
                "brute force and backtracking picked different canonical sets on {}",
                instance
            );
        }
    }

    #[test]
    fn test_greedy_never_beats_the_optimum() {
        let mut rng = StdRng::seed_from_u64(0x6EEE);

        for _ in 0..200 {
            let num_items = rng.gen_range(0..=24);
            let instance = random_instance(&mut rng, num_items);

            let greedy = GreedySolver::new()
                .solve(&instance, &mut NoOperationMonitor::new())
                .unwrap();
            let dp = DpSolver::new()
                .solve(&instance, &mut NoOperationMonitor::new())
                .unwrap();

            assert!(
                greedy.selection().total_cost() <= dp.selection().total_cost(),
                "greedy exceeded the optimum on {}",
                instance
            );
        }
    }

    #[test]
    fn test_selections_are_feasible_and_consistent() {
        let mut rng = StdRng::seed_from_u64(0xFEA51B1E);

        for _ in 0..100 {
            let num_items = rng.gen_range(0..=12);
            let instance = random_instance(&mut rng, num_items);

            let solvers: Vec<Box<dyn SubsetSolver<IntegerType>>> = vec![
                Box::new(BruteForceSolver::new()),
                Box::new(DpSolver::new()),
                Box::new(GreedySolver::new()),
                Box::new(BacktrackingSolver::new()),
            ];

            for mut solver in solvers {
                let outcome = solver
                    .solve(&instance, &mut NoOperationMonitor::new())
                    .unwrap();
                let selection = outcome.selection();

                // Indices strictly ascending and in bounds.
                assert!(selection.items().windows(2).all(|w| w[0] < w[1]));
                assert!(selection
                    .items()
                    .iter()
                    .all(|item| item.get() < instance.num_items()));

                // The reported total matches the selected costs and fits
                // the effective budget.
                let recomputed: IntegerType = selection
                    .items()
                    .iter()
                    .map(|item| instance.cost(*item))
                    .sum();
                assert_eq!(recomputed, selection.total_cost(), "{}", solver.name());
                assert!(selection.total_cost() <= instance.effective_budget());
            }
        }
    }
}
