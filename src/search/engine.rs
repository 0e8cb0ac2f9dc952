//! The level-synchronized parallel BFS driver
//!
//! One single-threaded driver loop consumes the frontier queue; expansion
//! tasks run on the injected executor. A wavefront marker circulates through
//! the queue, and the driver does not advance past it until the barrier
//! confirms every expansion task submitted for the current wavefront has
//! finished. Every ordinary node dequeued before a given marker instance has
//! its expansion task submitted before the driver reaches that marker, so no
//! node of wavefront L+1 is ever dequeued before every node of wavefront L is
//! fully expanded: synchronous level-by-level scheduling with full
//! intra-level parallelism, which is what makes the parent chains shortest
//! paths.

use std::hash::Hash;
use std::marker::PhantomData;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::search::config::BfsConfig;
use crate::search::node::SearchNode;
use crate::search::queue::{FrontierEntry, FrontierProducer, FrontierQueue};
use crate::search::result::{SearchOutcome, SearchStatistics};
use crate::search::traits::{Accept, ChildGenerator, Edge, ProgressSink, TaskExecutor};
use crate::search::visited::VisitedSet;
use crate::sync::WavefrontBarrier;

/// Fatal traversal faults. Exhaustion is not one of them; it is reported as
/// a [`SearchOutcome`] with no solution.
///
/// Once a blocking wait is cut short the barrier can no longer be trusted to
/// reach a consistent zero, so the call aborts with no partial result and no
/// retry.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The frontier queue disconnected while the driver still expected
    /// entries.
    #[error("frontier queue disconnected while the search was still running")]
    QueueDisconnected,

    /// An expansion task panicked, so the wavefront accounting is no longer
    /// trustworthy.
    #[error("an expansion task failed; wavefront accounting can no longer be trusted")]
    ExpansionFailed,
}

/// Generic, parallel, level-synchronized BFS over an implicit graph.
///
/// The graph is defined by two injected strategies: an acceptance predicate
/// deciding when the search is done and a child generator enumerating
/// outgoing edges. Both must tolerate concurrent invocation on different
/// nodes. The engine owns no worker threads; expansion tasks are handed to
/// the injected [`TaskExecutor`].
///
/// Each [`apply`](Self::apply) call owns its visited set, frontier queue and
/// barrier; concurrent `apply` calls on one engine do not share traversal
/// state.
pub struct ParallelBfs<T, L, A, G> {
    accept: A,
    expand: Arc<G>,
    config: BfsConfig,
    executor: Arc<dyn TaskExecutor>,
    progress: Option<Arc<dyn ProgressSink>>,
    marker: PhantomData<fn(T) -> L>,
}

/// Per-call state shared between the driver and its expansion tasks.
struct Traversal<T, L, G> {
    expand: Arc<G>,
    visited: VisitedSet<T, L>,
    frontier: FrontierProducer<T, L>,
    barrier: WavefrontBarrier,
    poisoned: AtomicBool,
}

impl<T, L, A, G> ParallelBfs<T, L, A, G>
where
    T: Eq + Hash + Clone + Send + Sync + 'static,
    L: Send + Sync + 'static,
    A: Accept<T>,
    G: ChildGenerator<T, L> + 'static,
{
    /// Create an engine from the two strategies, a configuration and a task
    /// executor.
    pub fn new(accept: A, expand: G, config: BfsConfig, executor: Arc<dyn TaskExecutor>) -> Self {
        Self {
            accept,
            expand: Arc::new(expand),
            config,
            executor,
            progress: None,
            marker: PhantomData,
        }
    }

    /// Attach a progress sink observing the wavefront counter.
    pub fn with_progress(mut self, sink: Arc<dyn ProgressSink>) -> Self {
        self.progress = Some(sink);
        self
    }

    /// Run the traversal from `root`.
    ///
    /// Returns the accepting node (its parent chain is a shortest unweighted
    /// path back to `root`), or an outcome with no solution once the
    /// reachable state space is exhausted. In-flight expansions at the moment
    /// of acceptance are abandoned, not cancelled: they stop on their next
    /// enqueue attempt against the dropped queue.
    pub fn apply(&self, root: T) -> Result<SearchOutcome<T, L>, SearchError> {
        let started = Instant::now();
        let queue = FrontierQueue::new(self.config.max_capacity);
        let traversal = Arc::new(Traversal {
            expand: Arc::clone(&self.expand),
            visited: VisitedSet::new(),
            frontier: queue.producer(),
            barrier: WavefrontBarrier::new(),
            poisoned: AtomicBool::new(false),
        });

        let (root_node, _) = traversal.visited.insert_if_absent(root);
        queue
            .put(FrontierEntry::Node(root_node))
            .map_err(|_| SearchError::QueueDisconnected)?;
        queue
            .put(FrontierEntry::Marker)
            .map_err(|_| SearchError::QueueDisconnected)?;

        let mut wavefront: u64 = 0;
        let mut expanded: u64 = 0;

        loop {
            match queue.take().map_err(|_| SearchError::QueueDisconnected)? {
                FrontierEntry::Marker => {
                    // Releases the driver's standing registration, blocks
                    // until every expansion of this wavefront has called back
                    // in, then re-registers the driver for the next one.
                    traversal.barrier.wait();
                    if traversal.poisoned.load(Ordering::SeqCst) {
                        return Err(SearchError::ExpansionFailed);
                    }
                    wavefront += 1;
                    debug!(wavefront, frontier = queue.len(), "wavefront complete");
                    if let Some(sink) = &self.progress {
                        sink.wavefront_complete(wavefront);
                    }
                    // No producer is active here, so emptiness is exact:
                    // an empty queue means the state space is exhausted.
                    if queue.is_empty() {
                        let statistics =
                            self.statistics(wavefront, expanded, &traversal, started);
                        return Ok(SearchOutcome::exhausted(statistics));
                    }
                    queue
                        .put(FrontierEntry::Marker)
                        .map_err(|_| SearchError::QueueDisconnected)?;
                }
                FrontierEntry::Node(node) => {
                    if self.accept.accept(node.value()) {
                        let statistics =
                            self.statistics(wavefront, expanded, &traversal, started);
                        return Ok(SearchOutcome::found(node, statistics));
                    }
                    traversal.barrier.register();
                    expanded += 1;
                    let traversal = Arc::clone(&traversal);
                    self.executor.execute(Box::new(move || {
                        let outcome =
                            catch_unwind(AssertUnwindSafe(|| expand_node(&traversal, &node)));
                        if outcome.is_err() {
                            traversal.poisoned.store(true, Ordering::SeqCst);
                        }
                        traversal.barrier.count_down();
                    }));
                }
            }
        }
    }

    fn statistics(
        &self,
        wavefronts: u64,
        expanded: u64,
        traversal: &Traversal<T, L, G>,
        started: Instant,
    ) -> SearchStatistics {
        SearchStatistics {
            wavefronts,
            nodes_expanded: expanded,
            nodes_discovered: traversal.visited.len() as u64,
            elapsed_time: started.elapsed(),
        }
    }
}

/// Expand one node: enumerate its edges and publish the winners.
///
/// Only the insert that creates a value's node records the parent link and
/// enqueues it, and the link is recorded before the enqueue so the driver can
/// never dequeue a node with an incomplete chain. Losing inserts discard
/// their candidate.
fn expand_node<T, L, G>(traversal: &Traversal<T, L, G>, current: &Arc<SearchNode<T, L>>)
where
    T: Eq + Hash + Clone,
    G: ChildGenerator<T, L>,
{
    for edge in traversal.expand.children(current) {
        let (node, created) = traversal.visited.insert_if_absent(edge.destination());
        if created {
            node.record_parent(edge.label(), Arc::clone(current));
            if !traversal.frontier.put(node) {
                // The driver already concluded the search.
                return;
            }
        }
    }
}
