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

//! The answer to a solve call, and the canonical ordering on ties.
//!
//! Several subsets can achieve the same maximal total. To make the five
//! algorithms comparable answer-for-answer, one canonical representative is
//! defined: the subset with the fewest items wins, and among equal-size
//! subsets the one whose index set is lexicographically greatest when read
//! from the highest index downward wins. [`canonically_preferred`] is the
//! single implementation of that rule; every exact solver routes its tie
//! decisions through it.

use crate::index::ItemIndex;
use num_traits::{PrimInt, Signed};

/// A selected subset of items together with its total cost.
///
/// Invariants: `items` is strictly ascending and unique, and the sum of the
/// selected costs equals `total_cost`. A selection is created fresh by each
/// solve call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<T> {
    total_cost: T,
    items: Vec<ItemIndex>,
}

impl<T> Selection<T>
where
    T: PrimInt + Signed,
{
    /// Constructs a new `Selection`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `items` is not strictly ascending.
    pub fn new(total_cost: T, items: Vec<ItemIndex>) -> Self {
        debug_assert!(
            items.windows(2).all(|w| w[0] < w[1]),
            "called `Selection::new` with items that are not strictly ascending"
        );

        Self { total_cost, items }
    }

    /// The empty selection with zero total cost: the answer to every
    /// trivial instance.
    #[inline]
    pub fn empty() -> Self {
        Self {
            total_cost: T::zero(),
            items: Vec::new(),
        }
    }

    /// Returns the total cost of the selected items.
    #[inline]
    pub fn total_cost(&self) -> T {
        self.total_cost
    }

    /// Returns the selected items in strictly ascending order.
    #[inline]
    pub fn items(&self) -> &[ItemIndex] {
        &self.items
    }

    /// Returns the number of selected items.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when no item is selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> std::fmt::Display for Selection<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Selection(total_cost: {}, items: [", self.total_cost)?;
        for (position, item) in self.items.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item.get())?;
        }
        write!(f, "])")
    }
}

/// Decides whether `candidate` replaces `incumbent` when both achieve the
/// same total cost.
///
/// The canonical representative among equally priced subsets has the fewest
/// items; among equal-size subsets, the index set that is lexicographically
/// greatest when compared from the highest index downward wins (higher
/// indices preferred). Both slices must be strictly ascending.
///
/// Returns `false` for identical sets, so incumbents are only swapped for
/// strict canonical improvements.
pub fn canonically_preferred(candidate: &[ItemIndex], incumbent: &[ItemIndex]) -> bool {
    debug_assert!(
        candidate.windows(2).all(|w| w[0] < w[1]),
        "called `canonically_preferred` with a candidate that is not strictly ascending"
    );
    debug_assert!(
        incumbent.windows(2).all(|w| w[0] < w[1]),
        "called `canonically_preferred` with an incumbent that is not strictly ascending"
    );

    if candidate.len() != incumbent.len() {
        return candidate.len() < incumbent.len();
    }

    for (c, i) in candidate.iter().rev().zip(incumbent.iter().rev()) {
        if c != i {
            return c > i;
        }
    }

    false
}
