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

//! The validated, immutable problem instance.
//!
//! An [`Instance`] is the single entry point for raw input: construction
//! validates every cost, and from then on solvers treat the data as
//! read-only. Item identity is positional — index `i` refers to the `i`-th
//! cost — so the cost sequence is never reordered once stored.

use crate::{error::InstanceError, index::ItemIndex};
use num_traits::{PrimInt, Signed};

/// A budget-constrained subset-selection instance.
///
/// Holds an ordered sequence of non-negative item costs and an integer
/// budget. The budget may be negative; that is a defined trivial case, not
/// an error. Instances are immutable after construction and never mutated
/// by a solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance<T> {
    costs: Vec<T>,
    budget: T,
}

impl<T> Instance<T>
where
    T: PrimInt + Signed,
{
    /// Constructs a new `Instance`, validating every cost.
    ///
    /// # Errors
    ///
    /// Returns [`InstanceError::NegativeCost`] for the first negative cost
    /// encountered. An empty cost sequence and any budget (including
    /// negative ones) are valid.
    pub fn new(costs: Vec<T>, budget: T) -> Result<Self, InstanceError> {
        for (index, &cost) in costs.iter().enumerate() {
            if cost < T::zero() {
                return Err(InstanceError::NegativeCost {
                    index,
                    cost: cost.to_i64().unwrap_or(i64::MIN),
                });
            }
        }

        Ok(Self { costs, budget })
    }

    /// Returns the number of items in this instance.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.costs.len()
    }

    /// Returns the cost of a specific item.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `item` is out of bounds.
    #[inline]
    pub fn cost(&self, item: ItemIndex) -> T {
        let index = item.get();
        debug_assert!(
            index < self.num_items(),
            "called `Instance::cost` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            index
        );

        self.costs[index]
    }

    /// Returns a slice of all item costs in input order.
    #[inline]
    pub fn costs(&self) -> &[T] {
        &self.costs
    }

    /// Returns the raw budget as given by the caller.
    #[inline]
    pub fn budget(&self) -> T {
        self.budget
    }

    /// Returns the capacity the search actually works against:
    /// `max(budget, 0)`.
    #[inline]
    pub fn effective_budget(&self) -> T {
        self.budget.max(T::zero())
    }

    /// Returns `true` when the instance admits only the empty selection
    /// without running any search: no items, or a negative budget.
    #[inline]
    pub fn is_trivial(&self) -> bool {
        self.costs.is_empty() || self.budget < T::zero()
    }
}

impl<T> std::fmt::Display for Instance<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Instance(items: {}, budget: {})",
            self.num_items(),
            self.budget
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    #[test]
    fn test_new_accepts_non_negative_costs() {
        let instance = Instance::<IntegerType>::new(vec![10, 0, 30], 40).unwrap();
        assert_eq!(instance.num_items(), 3);
        assert_eq!(instance.cost(ItemIndex::new(0)), 10);
        assert_eq!(instance.cost(ItemIndex::new(1)), 0);
        assert_eq!(instance.costs(), &[10, 0, 30]);
        assert_eq!(instance.budget(), 40);
    }

    #[test]
    fn test_new_rejects_first_negative_cost() {
        let err = Instance::<IntegerType>::new(vec![5, -1, -3], 10).unwrap_err();
        assert_eq!(err, InstanceError::NegativeCost { index: 1, cost: -1 });
    }

    #[test]
    fn test_empty_costs_are_valid_for_any_budget() {
        for budget in [-5, 0, 100] {
            let instance = Instance::<IntegerType>::new(Vec::new(), budget).unwrap();
            assert!(instance.is_trivial());
        }
    }

    #[test]
    fn test_negative_budget_is_trivial_not_an_error() {
        let instance = Instance::<IntegerType>::new(vec![1, 2, 3], -1).unwrap();
        assert!(instance.is_trivial());
        assert_eq!(instance.effective_budget(), 0);
        assert_eq!(instance.budget(), -1);
    }

    #[test]
    fn test_zero_budget_is_not_trivial() {
        // A zero budget still runs the search; it just cannot afford
        // anything with a positive cost.
        let instance = Instance::<IntegerType>::new(vec![1, 2, 3], 0).unwrap();
        assert!(!instance.is_trivial());
        assert_eq!(instance.effective_budget(), 0);
    }

    #[test]
    fn test_display_summarizes_shape() {
        let instance = Instance::<IntegerType>::new(vec![1, 2], 7).unwrap();
        assert_eq!(format!("{}", instance), "Instance(items: 2, budget: 7)");
    }
}
