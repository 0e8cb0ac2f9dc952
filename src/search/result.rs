//! Search outcome types and statistics

use std::sync::Arc;
use std::time::Duration;

use crate::search::node::SearchNode;

/// Result of a traversal that ran to a normal conclusion.
///
/// `solution: None` means the reachable state space was exhausted without any
/// value satisfying the acceptance predicate; that is an expected outcome,
/// not an error.
pub struct SearchOutcome<T, L> {
    /// The accepting node, if one was found.
    pub solution: Option<Arc<SearchNode<T, L>>>,
    /// Statistics from the traversal.
    pub statistics: SearchStatistics,
}

impl<T, L> SearchOutcome<T, L> {
    /// Outcome for a search that found an accepting node.
    pub fn found(node: Arc<SearchNode<T, L>>, statistics: SearchStatistics) -> Self {
        Self {
            solution: Some(node),
            statistics,
        }
    }

    /// Outcome for a search that exhausted the state space.
    pub fn exhausted(statistics: SearchStatistics) -> Self {
        Self {
            solution: None,
            statistics,
        }
    }

    /// Whether an accepting node was found.
    pub fn is_found(&self) -> bool {
        self.solution.is_some()
    }

    /// Distance from the root to the solution, if one was found.
    pub fn solution_depth(&self) -> Option<usize> {
        self.solution.as_ref().map(|node| node.depth())
    }
}

/// Statistics from a traversal.
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Number of completed wavefronts.
    pub wavefronts: u64,
    /// Number of nodes handed to the dispatcher for expansion.
    pub nodes_expanded: u64,
    /// Number of distinct nodes discovered, including the root.
    pub nodes_discovered: u64,
    /// Total wall-clock time of the traversal.
    pub elapsed_time: Duration,
}

impl SearchStatistics {
    /// Nodes expanded per second.
    pub fn expansion_rate(&self) -> f64 {
        let secs = self.elapsed_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.nodes_expanded as f64 / secs
        }
    }

    /// Format statistics as a human-readable string.
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));
        s.push_str(&format!("Wavefronts: {}\n", self.wavefronts));
        s.push_str(&format!("Nodes discovered: {}\n", self.nodes_discovered));
        s.push_str(&format!("Nodes expanded: {}\n", self.nodes_expanded));
        s.push_str(&format!(
            "Throughput: {:.0} expansions/sec\n",
            self.expansion_rate()
        ));
        s
    }
}
