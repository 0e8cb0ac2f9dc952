//! Board parsing and the hero lower bound

/// The piece that must reach the goal cell.
pub const HERO: char = '#';
/// An empty cell a piece may slide into.
pub const BLANK: char = ' ';
/// A fixed cell nothing may slide into.
pub const WALL: char = '.';

/// Goal of the classic layout: the hero's first cell at row 3, column 1.
pub const CLASSIC_GOAL: (usize, usize) = (3, 1);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board is empty")]
    Empty,

    #[error("row {row} is {got} cells wide, expected {expected}")]
    RaggedRows {
        row: usize,
        got: usize,
        expected: usize,
    },

    #[error("board has no '#' piece")]
    MissingHero,

    #[error("board contains non-ASCII cells")]
    NotAscii,

    #[error("goal ({row}, {col}) is outside the board")]
    GoalOutOfBounds { row: usize, col: usize },
}

/// A parsed puzzle: the initial grid plus the static facts every derived
/// position shares (dimensions, piece labels, goal cell).
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    grid: String,
    stride: usize,
    rows: usize,
    goal: usize,
    pieces: Vec<char>,
}

impl Board {
    /// Parse a grid with the classic goal cell (row 3, column 1).
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        Self::parse_with_goal(text, CLASSIC_GOAL.0, CLASSIC_GOAL.1)
    }

    /// Parse a grid whose hero must reach `(goal_row, goal_col)`.
    pub fn parse_with_goal(
        text: &str,
        goal_row: usize,
        goal_col: usize,
    ) -> Result<Self, BoardError> {
        // Positions are manipulated as flat byte grids, so cells must be
        // single bytes.
        if !text.is_ascii() {
            return Err(BoardError::NotAscii);
        }

        let lines: Vec<&str> = text.lines().collect();
        if lines.is_empty() || lines[0].is_empty() {
            return Err(BoardError::Empty);
        }

        let width = lines[0].len();
        for (row, line) in lines.iter().enumerate() {
            if line.len() != width {
                return Err(BoardError::RaggedRows {
                    row,
                    got: line.len(),
                    expected: width,
                });
            }
        }

        // Normalize: every row newline-terminated, so the newline column is
        // a wall in flat-index arithmetic.
        let mut grid = String::with_capacity((width + 1) * lines.len());
        for line in &lines {
            grid.push_str(line);
            grid.push('\n');
        }

        if !grid.contains(HERO) {
            return Err(BoardError::MissingHero);
        }

        let rows = lines.len();
        if goal_row >= rows || goal_col >= width {
            return Err(BoardError::GoalOutOfBounds {
                row: goal_row,
                col: goal_col,
            });
        }

        let mut pieces = Vec::new();
        for ch in grid.chars() {
            if ch != BLANK && ch != WALL && ch != '\n' && !pieces.contains(&ch) {
                pieces.push(ch);
            }
        }

        let stride = width + 1;
        Ok(Self {
            grid,
            stride,
            rows,
            goal: goal_row * stride + goal_col,
            pieces,
        })
    }

    /// Move the goal cell. Fails if it falls outside the board.
    pub fn with_goal(mut self, goal_row: usize, goal_col: usize) -> Result<Self, BoardError> {
        if goal_row >= self.rows || goal_col >= self.stride - 1 {
            return Err(BoardError::GoalOutOfBounds {
                row: goal_row,
                col: goal_col,
            });
        }
        self.goal = goal_row * self.stride + goal_col;
        Ok(self)
    }

    /// The normalized initial position.
    pub fn grid(&self) -> &str {
        &self.grid
    }

    /// Flat-index distance between vertically adjacent cells (columns plus
    /// the newline wall).
    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.stride - 1
    }

    /// Piece labels in first-appearance order. Stable across derived
    /// positions, since moves only relocate cells.
    pub fn pieces(&self) -> &[char] {
        &self.pieces
    }

    /// Manhattan distance from the hero's first cell to the goal cell.
    ///
    /// Zero exactly when the position is solved. Also a valid lower bound on
    /// the remaining move count, since each move shifts the hero by at most
    /// one cell.
    pub fn lower_bound(&self, position: &str) -> usize {
        match position.find(HERO) {
            Some(index) => {
                let (row, col) = (index / self.stride, index % self.stride);
                let (goal_row, goal_col) = (self.goal / self.stride, self.goal % self.stride);
                row.abs_diff(goal_row) + col.abs_diff(goal_col)
            }
            None => usize::MAX,
        }
    }

    /// Whether the hero's first cell sits on the goal cell.
    pub fn is_goal(&self, position: &str) -> bool {
        self.lower_bound(position) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classic_board() {
        let board = Board::parse(crate::klotski::CLASSIC_BOARD).unwrap();
        assert_eq!(board.cols(), 4);
        assert_eq!(board.rows(), 5);
        assert_eq!(board.stride(), 5);
        assert_eq!(
            board.pieces(),
            &['1', '#', '2', '3', '4', '5', '6', '7', '8', '9']
        );
        // Hero's first cell starts at (0, 1), goal is (3, 1).
        assert_eq!(board.lower_bound(board.grid()), 3);
        assert!(!board.is_goal(board.grid()));
    }

    #[test]
    fn test_parse_rejects_bad_boards() {
        assert_eq!(Board::parse(""), Err(BoardError::Empty));
        assert!(matches!(
            Board::parse("ab\nabc\n"),
            Err(BoardError::RaggedRows {
                row: 1,
                got: 3,
                expected: 2
            })
        ));
        assert_eq!(Board::parse("ab\ncd\n"), Err(BoardError::MissingHero));
        assert_eq!(Board::parse("é#\n  \n"), Err(BoardError::NotAscii));
        assert!(matches!(
            Board::parse_with_goal("#a\nba\n", 5, 0),
            Err(BoardError::GoalOutOfBounds { row: 5, col: 0 })
        ));
    }

    #[test]
    fn test_unterminated_final_row_is_normalized() {
        let board = Board::parse_with_goal("# \n  ", 1, 1).unwrap();
        assert_eq!(board.grid(), "# \n  \n");
    }

    #[test]
    fn test_lower_bound_is_manhattan_distance() {
        let board = Board::parse_with_goal("#  \n   \n   \n", 2, 2).unwrap();
        assert_eq!(board.lower_bound(board.grid()), 4);
        assert_eq!(board.lower_bound("   \n   \n  #\n"), 0);
        assert!(board.is_goal("   \n   \n  #\n"));
    }
}
