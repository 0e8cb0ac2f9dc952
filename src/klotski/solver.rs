//! Wiring the puzzle domain into the BFS engine

use std::sync::Arc;

use crate::klotski::board::Board;
use crate::klotski::moves::{apply_move, legal_moves, SlideMove};
use crate::search::{
    BfsConfig, InlineExecutor, ParallelBfs, ProgressSink, SearchError, SearchNode,
    SearchStatistics, TaskExecutor,
};

/// A minimal move sequence from the initial position to a solved one.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Every position along the path, initial position first.
    pub positions: Vec<String>,
    /// The slide taken at each step; one fewer than `positions`.
    pub moves: Vec<SlideMove>,
}

impl Solution {
    /// Number of moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Outcome of a solve: the solution, if the puzzle has one, plus traversal
/// statistics either way.
pub struct SolveReport {
    pub solution: Option<Solution>,
    pub statistics: SearchStatistics,
}

/// Solves a [`Board`] by running the parallel BFS engine over its positions.
///
/// Each legal single-cell slide is a unit-cost edge, so the first accepting
/// position the engine reaches is a minimum-move solution.
pub struct Solver {
    board: Board,
    config: BfsConfig,
    executor: Arc<dyn TaskExecutor>,
    progress: Option<Arc<dyn ProgressSink>>,
}

impl Solver {
    /// A solver expanding positions on the calling thread. Use
    /// [`with_executor`](Self::with_executor) to hand expansion to a pool.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            config: BfsConfig::default(),
            executor: Arc::new(InlineExecutor),
            progress: None,
        }
    }

    pub fn with_config(mut self, config: BfsConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_executor(mut self, executor: Arc<dyn TaskExecutor>) -> Self {
        self.executor = executor;
        self
    }

    pub fn with_progress(mut self, sink: Arc<dyn ProgressSink>) -> Self {
        self.progress = Some(sink);
        self
    }

    /// Search for a minimum-move solution.
    pub fn solve(&self) -> Result<SolveReport, SearchError> {
        let root = self.board.grid().to_string();
        let accept_board = self.board.clone();
        let expand_board = self.board.clone();

        let mut engine = ParallelBfs::new(
            move |position: &String| accept_board.is_goal(position),
            move |node: &SearchNode<String, SlideMove>| {
                let position = node.value();
                legal_moves(&expand_board, position)
                    .into_iter()
                    .map(|mv| (mv, apply_move(position, mv)))
                    .collect::<Vec<_>>()
            },
            self.config.clone(),
            Arc::clone(&self.executor),
        );
        if let Some(sink) = &self.progress {
            engine = engine.with_progress(Arc::clone(sink));
        }

        let outcome = engine.apply(root)?;
        let solution = outcome.solution.map(|node| Solution {
            positions: node.path().iter().map(|n| n.value().clone()).collect(),
            moves: node.path_labels(),
        });
        Ok(SolveReport {
            solution,
            statistics: outcome.statistics,
        })
    }
}
