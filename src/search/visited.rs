//! Concurrent deduplication of discovered states

use dashmap::{DashMap, Entry};
use std::hash::Hash;
use std::sync::Arc;

use crate::search::node::SearchNode;

/// Insert-once-wins map from state value to its unique [`SearchNode`].
///
/// Concurrent `insert_if_absent` calls for the same value are linearized by
/// the map's sharded entry API: exactly one caller creates the node and
/// observes `true`, every other caller gets the existing node and `false`.
/// Callers need no external locking.
pub struct VisitedSet<T, L> {
    nodes: DashMap<T, Arc<SearchNode<T, L>>>,
}

impl<T, L> VisitedSet<T, L>
where
    T: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            nodes: DashMap::new(),
        }
    }

    /// Look up the node for `value`, creating it if no caller has before.
    ///
    /// Returns the node and whether this call created it.
    pub fn insert_if_absent(&self, value: T) -> (Arc<SearchNode<T, L>>, bool) {
        match self.nodes.entry(value.clone()) {
            Entry::Occupied(entry) => (Arc::clone(entry.get()), false),
            Entry::Vacant(entry) => {
                let node = Arc::new(SearchNode::new(value));
                entry.insert(Arc::clone(&node));
                (node, true)
            }
        }
    }

    /// The node for `value`, if it has been discovered.
    pub fn get(&self, value: &T) -> Option<Arc<SearchNode<T, L>>> {
        self.nodes.get(value).map(|entry| Arc::clone(entry.value()))
    }

    /// Number of distinct values discovered so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<T, L> Default for VisitedSet<T, L>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
