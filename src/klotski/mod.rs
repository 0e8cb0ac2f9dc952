//! Klotski sliding-block puzzle domain
//!
//! States are flat character grids: one char per cell, rows terminated by a
//! newline. The newline column doubles as a wall, so flat-index arithmetic
//! can never slide a piece across a row boundary. Any character other than
//! blank (`' '`), wall (`'.'`) and newline is a piece label; all cells with
//! the same label move as one rigid piece. The hero piece `'#'` must reach
//! the goal cell.
//!
//! The solver wires this domain into the BFS engine: every legal single-cell
//! slide is one unit-cost edge, so the engine's shortest-path guarantee makes
//! the returned move sequence minimal.

pub mod board;
pub mod moves;
pub mod solver;

pub use board::{Board, BoardError, BLANK, HERO, WALL};
pub use moves::{apply_move, legal_moves, SlideMove};
pub use solver::{Solution, SolveReport, Solver};

/// The classic layout solved by the original program: the 2x2 hero must
/// reach the bottom center.
pub const CLASSIC_BOARD: &str = "1##2\n1##2\n3445\n3675\n 8 9\n";
