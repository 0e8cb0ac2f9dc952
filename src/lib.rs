//! # wavefront: parallel level-synchronized BFS
//!
//! A generic BFS engine over implicit graphs that expands each wavefront in
//! parallel while keeping the levels strictly synchronized: a reusable
//! dynamic barrier holds the driver at the wavefront marker until every
//! expansion task of the current level has finished, so parent chains are
//! always shortest unweighted paths. A bounded frontier queue provides
//! backpressure, and a concurrent visited set guarantees each state is
//! expanded exactly once.
//!
//! The `klotski` module plugs a sliding-block puzzle domain into the engine
//! and backs the `klotski` binary.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use wavefront::klotski::{Board, Solver};
//! use wavefront::search::worker_pool;
//!
//! let board = Board::parse_with_goal("#a\n a\n  \n", 2, 1).unwrap();
//! let pool = Arc::new(worker_pool(2).unwrap());
//! let report = Solver::new(board).with_executor(pool).solve().unwrap();
//! let solution = report.solution.expect("solvable");
//! assert_eq!(solution.positions.last().unwrap().find('#'), Some(7));
//! ```

pub mod klotski;
pub mod search;
pub mod sync;

pub use search::{
    Accept, BfsConfig, ChildGenerator, Edge, InlineExecutor, ParallelBfs, ProgressSink,
    SearchError, SearchNode, SearchOutcome, SearchStatistics, TaskExecutor,
};
pub use sync::WavefrontBarrier;
