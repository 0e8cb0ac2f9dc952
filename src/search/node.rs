//! Discovered-node graph built up during a traversal

use std::fmt;
use std::sync::{Arc, OnceLock};

/// How a node was first discovered: the edge label taken and the node it was
/// reached from.
#[derive(Debug, Clone)]
pub struct ParentLink<T, L> {
    /// Label of the edge that discovered the node.
    pub label: L,
    /// The node the edge was expanded from.
    pub node: Arc<SearchNode<T, L>>,
}

/// One discovered vertex of the implicit graph.
///
/// A node is created exactly once per distinct value (enforced by the visited
/// set) and never mutated afterwards, except for the one-time parent
/// assignment. Multiple concurrent discoveries of the same value race on the
/// parent slot; only the first write sticks, so the parent chain always spells
/// out a single shortest unweighted path back to the root.
pub struct SearchNode<T, L> {
    value: T,
    parent: OnceLock<ParentLink<T, L>>,
}

impl<T, L> SearchNode<T, L> {
    /// Create an orphan node. The root node stays an orphan forever.
    pub fn new(value: T) -> Self {
        Self {
            value,
            parent: OnceLock::new(),
        }
    }

    /// The domain state this node stands for.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The recorded discovery edge, if any. The root has none.
    pub fn parent(&self) -> Option<&ParentLink<T, L>> {
        self.parent.get()
    }

    /// Record the discovery edge. First write wins; later attempts are
    /// no-ops. Returns whether this call was the winner.
    pub(crate) fn record_parent(&self, label: L, node: Arc<SearchNode<T, L>>) -> bool {
        self.parent.set(ParentLink { label, node }).is_ok()
    }

    /// Number of edges between this node and the root.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while let Some(link) = current.parent() {
            depth += 1;
            current = &link.node;
        }
        depth
    }

    /// The discovery path from the root to this node, root first.
    pub fn path(self: &Arc<Self>) -> Vec<Arc<SearchNode<T, L>>> {
        let mut chain = vec![Arc::clone(self)];
        let mut current = Arc::clone(self);
        while let Some(link) = current.parent() {
            chain.push(Arc::clone(&link.node));
            let next = Arc::clone(&link.node);
            current = next;
        }
        chain.reverse();
        chain
    }

    /// The edge labels along the discovery path, root side first.
    pub fn path_labels(self: &Arc<Self>) -> Vec<L>
    where
        L: Clone,
    {
        let mut labels = Vec::new();
        let mut current = Arc::clone(self);
        while let Some(link) = current.parent() {
            labels.push(link.label.clone());
            let next = Arc::clone(&link.node);
            current = next;
        }
        labels.reverse();
        labels
    }
}

impl<T: fmt::Debug, L: fmt::Debug> fmt::Debug for SearchNode<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchNode")
            .field("value", &self.value)
            .field("depth", &self.depth())
            .finish()
    }
}
