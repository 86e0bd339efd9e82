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

use std::time::Duration;
use stowage_core::num::ops::saturating_arithmetic::SaturatingAddVal;

/// Statistics collected during a single solve call.
///
/// Memory is accounted explicitly: each solver reports the bytes of its
/// working structures through [`SearchStatistics::record_memory_bytes`],
/// and `peak_memory_bytes` keeps the maximum seen during the call. This is
/// the measured quantity behind the result boundary's megabyte figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Total search steps taken (masks evaluated, tree nodes visited,
    /// table rows filled — whatever the algorithm's unit of work is).
    pub nodes_explored: u64,
    /// Branches cut because their bound proved they cannot beat the
    /// incumbent.
    pub prunings_bound: u64,
    /// Branches cut because the next decision no longer fits the budget.
    pub prunings_infeasible: u64,
    /// Number of incumbent improvements, canonical tie swaps included.
    pub incumbents_found: u64,
    /// The deepest decision level reached, for tree searches.
    pub max_depth: u64,
    /// Peak bytes of the working structures allocated by the call.
    pub peak_memory_bytes: usize,
    /// Total wall-clock time spent in the solver.
    pub time_total: Duration,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self {
            nodes_explored: 0,
            prunings_bound: 0,
            prunings_infeasible: 0,
            incumbents_found: 0,
            max_depth: 0,
            peak_memory_bytes: 0,
            time_total: Duration::ZERO,
        }
    }
}

impl SearchStatistics {
    #[inline]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add_val(1);
    }

    #[inline]
    pub fn on_pruning_bound(&mut self) {
        self.prunings_bound = self.prunings_bound.saturating_add_val(1);
    }

    #[inline]
    pub fn on_pruning_infeasible(&mut self) {
        self.prunings_infeasible = self.prunings_infeasible.saturating_add_val(1);
    }

    #[inline]
    pub fn on_incumbent(&mut self) {
        self.incumbents_found = self.incumbents_found.saturating_add_val(1);
    }

    #[inline]
    pub fn on_depth_update(&mut self, depth: u64) {
        self.max_depth = self.max_depth.max(depth);
    }

    /// Records the current byte footprint of the solver's working
    /// structures; the peak is retained.
    #[inline]
    pub fn record_memory_bytes(&mut self, bytes: usize) {
        self.peak_memory_bytes = self.peak_memory_bytes.max(bytes);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  Nodes Explored: {}", self.nodes_explored)?;
        writeln!(f, "  Prunings (Bound): {}", self.prunings_bound)?;
        writeln!(f, "  Prunings (Infeasible): {}", self.prunings_infeasible)?;
        writeln!(f, "  Incumbents Found: {}", self.incumbents_found)?;
        writeln!(f, "  Max Depth: {}", self.max_depth)?;
        writeln!(f, "  Peak Memory (bytes): {}", self.peak_memory_bytes)?;
        writeln!(
            f,
            "  Total Time (secs): {:.3}",
            self.time_total.as_secs_f64()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::SearchStatistics;
    use std::time::Duration;

    #[test]
    fn test_default_is_all_zero() {
        let stats = SearchStatistics::default();
        assert_eq!(stats.nodes_explored, 0);
        assert_eq!(stats.prunings_bound, 0);
        assert_eq!(stats.prunings_infeasible, 0);
        assert_eq!(stats.incumbents_found, 0);
        assert_eq!(stats.max_depth, 0);
        assert_eq!(stats.peak_memory_bytes, 0);
        assert_eq!(stats.time_total, Duration::ZERO);
    }

    #[test]
    fn test_counters_increment() {
        let mut stats = SearchStatistics::default();
        stats.on_node_explored();
        stats.on_node_explored();
        stats.on_pruning_bound();
        stats.on_pruning_infeasible();
        stats.on_incumbent();

        assert_eq!(stats.nodes_explored, 2);
        assert_eq!(stats.prunings_bound, 1);
        assert_eq!(stats.prunings_infeasible, 1);
        assert_eq!(stats.incumbents_found, 1);
    }

    #[test]
    fn test_depth_and_memory_keep_maximum() {
        let mut stats = SearchStatistics::default();
        stats.on_depth_update(3);
        stats.on_depth_update(7);
        stats.on_depth_update(5);
        assert_eq!(stats.max_depth, 7);

        stats.record_memory_bytes(1024);
        stats.record_memory_bytes(4096);
        stats.record_memory_bytes(2048);
        assert_eq!(stats.peak_memory_bytes, 4096);
    }

    #[test]
    fn test_display_formats_all_fields() {
        let mut stats = SearchStatistics::default();
        stats.on_node_explored();
        stats.record_memory_bytes(2_000_000);
        stats.set_total_time(Duration::from_millis(1234));

        let rendered = format!("{}", stats);
        assert!(rendered.contains("Search Statistics:"), "missing header");
        assert!(rendered.contains("Nodes Explored: 1"));
        assert!(rendered.contains("Peak Memory (bytes): 2000000"));
        assert!(rendered.contains("Total Time (secs): 1.234"));
    }
}
