//! Bounded frontier queue with the wavefront marker

use crossbeam_channel::{bounded, Receiver, Sender};
use std::sync::Arc;

use crate::search::node::SearchNode;

/// One entry of the frontier queue.
///
/// `Marker` is the sentinel separating one wavefront's nodes from the next;
/// it carries no domain data and there is exactly one live marker per
/// traversal.
pub enum FrontierEntry<T, L> {
    Node(Arc<SearchNode<T, L>>),
    Marker,
}

/// The queue side of the channel pair was dropped while the other side still
/// needed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disconnected;

/// Bounded FIFO of frontier entries with blocking put/take.
///
/// The bound provides backpressure: once full, expansion tasks attempting to
/// enqueue a newly discovered node block until the driver drains entries,
/// capping the memory footprint of an exponentially branching frontier. A
/// capacity smaller than one full wavefront plus its marker can deadlock the
/// traversal; see [`BfsConfig::max_capacity`](crate::search::BfsConfig).
pub struct FrontierQueue<T, L> {
    tx: Sender<FrontierEntry<T, L>>,
    rx: Receiver<FrontierEntry<T, L>>,
}

impl<T, L> FrontierQueue<T, L> {
    /// Create a queue holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 1, "frontier queue capacity must be positive");
        let (tx, rx) = bounded(capacity);
        Self { tx, rx }
    }

    /// A cloneable producer handle for expansion tasks.
    pub fn producer(&self) -> FrontierProducer<T, L> {
        FrontierProducer {
            tx: self.tx.clone(),
        }
    }

    /// Append an entry, blocking while the queue is full.
    pub fn put(&self, entry: FrontierEntry<T, L>) -> Result<(), Disconnected> {
        self.tx.send(entry).map_err(|_| Disconnected)
    }

    /// Remove the oldest entry, blocking while the queue is empty.
    pub fn take(&self) -> Result<FrontierEntry<T, L>, Disconnected> {
        self.rx.recv().map_err(|_| Disconnected)
    }

    /// Whether the queue currently holds no entries.
    ///
    /// Only meaningful to the driver at a wavefront boundary, when the
    /// barrier has confirmed no producer is active.
    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }

    /// Number of entries currently queued.
    pub fn len(&self) -> usize {
        self.rx.len()
    }
}

/// Producer handle held by expansion tasks.
pub struct FrontierProducer<T, L> {
    tx: Sender<FrontierEntry<T, L>>,
}

impl<T, L> FrontierProducer<T, L> {
    /// Enqueue a newly discovered node, blocking while the queue is full.
    ///
    /// Returns `false` if the driver has already concluded the search and
    /// dropped the queue; the caller should stop expanding.
    pub fn put(&self, node: Arc<SearchNode<T, L>>) -> bool {
        self.tx.send(FrontierEntry::Node(node)).is_ok()
    }
}

impl<T, L> Clone for FrontierProducer<T, L> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}
