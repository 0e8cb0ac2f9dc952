//! Parallel level-synchronized BFS over implicit graphs
//!
//! # Architecture
//!
//! The traversal machinery consists of:
//! - A **driver** loop ([`ParallelBfs::apply`]) that consumes the frontier
//!   queue sequentially and submits expansion tasks
//! - A bounded **frontier queue** carrying discovered nodes and the
//!   wavefront marker, providing backpressure
//! - A **visited set** deduplicating states with insert-once-wins semantics
//! - A **wavefront barrier** the driver waits on at each marker until every
//!   expansion of the current level has completed
//! - An injected **task executor** that runs expansions concurrently
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use wavefront::search::{BfsConfig, InlineExecutor, ParallelBfs, SearchNode};
//!
//! // Shortest path from 0 to 12 over +1/*3 edges.
//! let engine = ParallelBfs::new(
//!     |value: &u64| *value == 12,
//!     |node: &SearchNode<u64, char>| {
//!         let v = *node.value();
//!         vec![('+', v + 1), ('*', v.saturating_mul(3))]
//!     },
//!     BfsConfig::default().with_capacity(4096),
//!     Arc::new(InlineExecutor),
//! );
//! let outcome = engine.apply(0).unwrap();
//! let solution = outcome.solution.unwrap();
//! assert_eq!(solution.path_labels(), vec!['+', '*', '+', '*']);
//! ```

pub mod config;
pub mod engine;
pub mod executor;
pub mod node;
pub mod queue;
pub mod result;
pub mod traits;
pub mod visited;

pub use config::{BfsConfig, DEFAULT_MAX_CAPACITY};
pub use engine::{ParallelBfs, SearchError};
pub use executor::{worker_pool, InlineExecutor};
pub use node::{ParentLink, SearchNode};
pub use queue::{Disconnected, FrontierEntry, FrontierProducer, FrontierQueue};
pub use result::{SearchOutcome, SearchStatistics};
pub use traits::{Accept, ChildGenerator, Edge, ProgressSink, SilentProgress, TaskExecutor};
pub use visited::VisitedSet;
