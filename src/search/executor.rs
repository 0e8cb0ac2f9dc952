//! Task executor implementations

use crate::search::traits::TaskExecutor;

/// Runs every task on a rayon thread pool.
impl TaskExecutor for rayon::ThreadPool {
    fn execute(&self, task: Box<dyn FnOnce() + Send>) {
        self.spawn(move || task());
    }
}

/// Runs every task synchronously on the submitting thread.
///
/// With this executor the engine degenerates to a sequential BFS: each node
/// is fully expanded before the driver dequeues the next entry. Useful for
/// deterministic tests and for callers that do not want a pool. The queue
/// capacity must still cover a full wavefront, since the driver itself blocks
/// on a full queue mid-expansion.
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineExecutor;

impl TaskExecutor for InlineExecutor {
    fn execute(&self, task: Box<dyn FnOnce() + Send>) {
        task();
    }
}

/// Build a rayon pool with `threads` workers (0 = one per logical CPU).
pub fn worker_pool(threads: usize) -> Result<rayon::ThreadPool, rayon::ThreadPoolBuildError> {
    let threads = if threads == 0 {
        num_cpus::get()
    } else {
        threads
    };
    rayon::ThreadPoolBuilder::new().num_threads(threads).build()
}
