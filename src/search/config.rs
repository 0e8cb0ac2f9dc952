//! Configuration for the BFS engine

/// Default frontier capacity: large but finite.
pub const DEFAULT_MAX_CAPACITY: usize = 1 << 16;

/// Configuration for a [`ParallelBfs`](crate::search::ParallelBfs) engine.
#[derive(Debug, Clone)]
pub struct BfsConfig {
    /// Upper bound on queued frontier entries.
    ///
    /// Must be large enough to hold at least one full wavefront plus its
    /// marker. A smaller bound lets an expansion task block on a full queue
    /// while the driver is blocked waiting for that same task to finish,
    /// stalling the traversal forever. The engine does not detect this at
    /// runtime; provision generously relative to the maximum branching
    /// factor times the frontier width.
    pub max_capacity: usize,
}

impl Default for BfsConfig {
    fn default() -> Self {
        Self {
            max_capacity: DEFAULT_MAX_CAPACITY,
        }
    }
}

impl BfsConfig {
    /// Set the frontier capacity. Values below 2 (root plus marker) are
    /// raised to 2.
    pub fn with_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity.max(2);
        self
    }
}
