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

//! A monitor that traces the search through the `log` facade.
//!
//! Emits a debug line when the search starts and finishes and whenever the
//! incumbent improves, and a periodic trace line gated by a step mask so
//! that tracing a billion-step search stays cheap when the `trace` level
//! is disabled.

use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
use num_traits::{PrimInt, Signed};
use std::time::Instant;
use stowage_model::{instance::Instance, selection::Selection};

#[derive(Debug, Clone)]
pub struct LogMonitor<T> {
    step_log_mask: u64,
    steps: u64,
    incumbents: u64,
    start_time: Instant,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> LogMonitor<T> {
    /// Default mask: trace every 65,536 steps (2^16).
    const DEFAULT_STEP_LOG_MASK: u64 = 0xFFFF;

    #[inline]
    pub fn new() -> Self {
        Self {
            step_log_mask: Self::DEFAULT_STEP_LOG_MASK,
            steps: 0,
            incumbents: 0,
            start_time: Instant::now(),
            _phantom: std::marker::PhantomData,
        }
    }

    #[inline]
    pub fn with_step_log_mask(step_log_mask: u64) -> Self {
        Self {
            step_log_mask,
            ..Self::new()
        }
    }
}

impl<T> Default for LogMonitor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SearchMonitor<T> for LogMonitor<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, instance: &Instance<T>) {
        self.steps = 0;
        self.incumbents = 0;
        self.start_time = Instant::now();
        log::debug!("search started: {}", instance);
    }

    fn on_exit_search(&mut self) {
        log::debug!(
            "search finished: {} steps, {} incumbents, {:.3}s",
            self.steps,
            self.incumbents,
            self.start_time.elapsed().as_secs_f64()
        );
    }

    fn on_incumbent(&mut self, selection: &Selection<T>) {
        self.incumbents += 1;
        log::debug!("incumbent improved: {}", selection);
    }

    #[inline(always)]
    fn on_step(&mut self) {
        self.steps = self.steps.wrapping_add(1);
        if (self.steps & self.step_log_mask) == 0 {
            log::trace!(
                "search progress: {} steps, {:.3}s elapsed",
                self.steps,
                self.start_time.elapsed().as_secs_f64()
            );
        }
    }

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::LogMonitor;
    use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
    use stowage_model::{index::ItemIndex, instance::Instance, selection::Selection};

    type IntegerType = i64;

    #[test]
    fn test_never_terminates_and_counts_events() {
        let mut monitor = LogMonitor::<IntegerType>::new();
        let instance = Instance::<IntegerType>::new(vec![1, 2], 3).unwrap();

        monitor.on_enter_search(&instance);
        monitor.on_step();
        monitor.on_step();
        monitor.on_incumbent(&Selection::new(3, vec![ItemIndex::new(0), ItemIndex::new(1)]));
        monitor.on_exit_search();

        assert_eq!(monitor.steps, 2);
        assert_eq!(monitor.incumbents, 1);
        assert_eq!(monitor.search_command(), SearchCommand::Continue);
    }

    #[test]
    fn test_enter_search_resets_counters() {
        let mut monitor = LogMonitor::<IntegerType>::with_step_log_mask(0xF);
        let instance = Instance::<IntegerType>::new(vec![1], 1).unwrap();

        monitor.on_step();
        monitor.on_enter_search(&instance);
        assert_eq!(monitor.steps, 0);
    }
}
