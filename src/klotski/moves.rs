//! Legal-move enumeration and move application

use std::fmt;

use crate::klotski::board::{Board, BLANK};

/// One single-cell slide of one piece.
///
/// `delta` is the flat-index shift: `-1`/`+1` for left/right, minus/plus the
/// board stride for up/down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideMove {
    pub piece: char,
    pub delta: isize,
}

impl SlideMove {
    /// Human-readable direction for a board with the given stride.
    pub fn direction(&self, stride: usize) -> &'static str {
        let stride = stride as isize;
        match self.delta {
            -1 => "left",
            1 => "right",
            d if d == -stride => "up",
            d if d == stride => "down",
            _ => "?",
        }
    }
}

impl fmt::Display for SlideMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:+}", self.piece, self.delta)
    }
}

/// All legal single-cell slides from `position`.
pub fn legal_moves(board: &Board, position: &str) -> Vec<SlideMove> {
    let mut moves = Vec::new();
    for &piece in board.pieces() {
        piece_moves(position, piece, board.stride(), &mut moves);
    }
    moves
}

/// Append the legal slides of one piece.
///
/// A slide is legal iff every cell of the piece lands in bounds on a cell
/// that is either the piece itself or blank. The newline column fails that
/// test, which is what stops horizontal slides from wrapping across rows.
fn piece_moves(position: &str, piece: char, stride: usize, moves: &mut Vec<SlideMove>) {
    let cells = position.as_bytes();
    let len = cells.len() as isize;
    for delta in [-(stride as isize), -1, 1, stride as isize] {
        let mut valid = true;
        for (i, &cell) in cells.iter().enumerate() {
            if cell == piece as u8 {
                let target = i as isize + delta;
                if target < 0 || target >= len {
                    valid = false;
                    break;
                }
                let landing = cells[target as usize];
                if landing != piece as u8 && landing != BLANK as u8 {
                    valid = false;
                    break;
                }
            }
        }
        if valid {
            moves.push(SlideMove { piece, delta });
        }
    }
}

/// The position after sliding. Cells the piece vacates become blank.
pub fn apply_move(position: &str, mv: SlideMove) -> String {
    let cells = position.as_bytes();
    let len = cells.len() as isize;
    let piece = mv.piece as u8;
    let mut out = Vec::with_capacity(cells.len());
    for (i, &cell) in cells.iter().enumerate() {
        let source = i as isize - mv.delta;
        if source >= 0 && source < len && cells[source as usize] == piece {
            out.push(piece);
        } else if cell == piece {
            out.push(BLANK as u8);
        } else {
            out.push(cell);
        }
    }
    // Positions are ASCII grids (enforced at parse), so byte shifts keep
    // them valid.
    out.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::klotski::board::Board;

    fn board(text: &str) -> Board {
        Board::parse_with_goal(text, 0, 0).unwrap()
    }

    #[test]
    fn test_single_cell_piece_moves() {
        // 'a' is pinned; 'b' can drop into the blank below it; '#' can only
        // slide right.
        let b = board("ab\n# \n");
        let moves = legal_moves(&b, b.grid());
        assert_eq!(
            moves,
            vec![
                SlideMove {
                    piece: 'b',
                    delta: 3
                },
                SlideMove {
                    piece: '#',
                    delta: 1
                },
            ]
        );
        assert_eq!(
            apply_move(
                b.grid(),
                SlideMove {
                    piece: '#',
                    delta: 1
                }
            ),
            "ab\n #\n"
        );
    }

    #[test]
    fn test_newline_column_blocks_wrapping() {
        // 'a' at the right edge of row 0; sliding right must not wrap to
        // row 1.
        let b = board(" a\n# \n");
        let moves = legal_moves(&b, b.grid());
        assert!(!moves.contains(&SlideMove {
            piece: 'a',
            delta: 1
        }));
        assert!(moves.contains(&SlideMove {
            piece: 'a',
            delta: -1
        }));
    }

    #[test]
    fn test_wall_cells_block() {
        let b = board("#.\n  \n");
        let moves = legal_moves(&b, b.grid());
        assert!(!moves.contains(&SlideMove {
            piece: '#',
            delta: 1
        }));
        assert!(moves.contains(&SlideMove {
            piece: '#',
            delta: 3
        }));
    }

    #[test]
    fn test_rigid_multi_cell_piece() {
        // 'a' is a horizontal domino with room on its right.
        let b = board("aa \n## \n");
        let moves = legal_moves(&b, b.grid());
        assert!(moves.contains(&SlideMove {
            piece: 'a',
            delta: 1
        }));
        // Left is off-board for its leftmost cell.
        assert!(!moves.contains(&SlideMove {
            piece: 'a',
            delta: -1
        }));
        // Down collides with the '#' cells underneath.
        assert!(!moves.contains(&SlideMove {
            piece: 'a',
            delta: 4
        }));

        assert_eq!(
            apply_move(b.grid(), SlideMove {
                piece: 'a',
                delta: 1
            }),
            " aa\n## \n"
        );
    }

    #[test]
    fn test_two_by_two_hero_slides_whole() {
        let b = board("##  \n##  \n");
        let moves = legal_moves(&b, b.grid());
        assert_eq!(
            moves,
            vec![SlideMove {
                piece: '#',
                delta: 1
            }]
        );
        assert_eq!(
            apply_move(b.grid(), moves[0]),
            " ## \n ## \n"
        );
    }

    #[test]
    fn test_move_display_and_direction() {
        let mv = SlideMove {
            piece: '3',
            delta: -5,
        };
        assert_eq!(mv.to_string(), "3-5");
        assert_eq!(mv.direction(5), "up");
        assert_eq!(
            SlideMove {
                piece: '3',
                delta: 1
            }
            .direction(5),
            "right"
        );
    }
}
