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

use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
use num_traits::{PrimInt, Signed};
use stowage_model::{instance::Instance, selection::Selection};

/// A monitor that terminates the search after a fixed number of steps.
///
/// Deterministic counterpart to the wall-clock deadline: the same limit on
/// the same instance aborts at the same point in the search, which makes
/// best-effort results reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeLimitMonitor<T> {
    node_limit: u64,
    steps: u64,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> NodeLimitMonitor<T> {
    /// Creates a new `NodeLimitMonitor` that allows `node_limit` steps.
    #[inline]
    pub fn new(node_limit: u64) -> Self {
        Self {
            node_limit,
            steps: 0,
            _phantom: std::marker::PhantomData,
        }
    }

    #[inline]
    fn reached_limit(&self) -> bool {
        self.steps >= self.node_limit
    }
}

impl<T> SearchMonitor<T> for NodeLimitMonitor<T>
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str {
        "NodeLimitMonitor"
    }

    fn on_enter_search(&mut self, _instance: &Instance<T>) {
        self.steps = 0;
    }

    fn on_exit_search(&mut self) {}

    fn on_incumbent(&mut self, _selection: &Selection<T>) {}

    #[inline(always)]
    fn on_step(&mut self) {
        self.steps = self.steps.saturating_add(1);
    }

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        if self.reached_limit() {
            SearchCommand::Terminate("node limit reached".to_string())
        } else {
            SearchCommand::Continue
        }
    }
}
