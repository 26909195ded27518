use std::fmt::{self, Display, Formatter};

use crate::board::{Board, PuzzleError, CELLS, SIZE};

/// Which constraint group a duplicate was found in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Unit {
    Row,
    Column,
    Box,
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Unit::Row => "row",
            Unit::Column => "column",
            Unit::Box => "box",
        })
    }
}

/// Looks for another cell in the same row, column or box as `index` that
/// holds the same value. Only `index` is compared against the rest of the
/// board; two other cells are never compared with each other.
pub fn conflict(board: &Board, index: usize) -> Option<Unit> {
    let value = board[index];
    let row = Board::row_of(index);
    let col = Board::col_of(index);
    let (b, c) = Board::box_index(index);

    for k in 0..SIZE {
        if k != col && board[row * SIZE + k] == value {
            return Some(Unit::Row);
        }

        if k != row && board[k * SIZE + col] == value {
            return Some(Unit::Column);
        }

        if k != c && board.box_cell(b, k) == value {
            return Some(Unit::Box);
        }
    }

    None
}

/// True if the nonzero value at `index` does not repeat in its row,
/// column or box.
pub fn is_consistent(board: &Board, index: usize) -> bool {
    conflict(board, index).is_none()
}

/// Checks every pre-filled cell of a puzzle against the rest of the board
/// and reports the first duplicate among the givens. The search never
/// calls this; it exists so callers can reject puzzles whose givens
/// already contradict each other before searching.
pub fn validate(board: &Board) -> Result<(), PuzzleError> {
    for index in 0..CELLS {
        if board[index] == 0 {
            continue;
        }

        if let Some(unit) = conflict(board, index) {
            return Err(PuzzleError::Conflict {
                value: board[index],
                row: Board::row_of(index) + 1,
                col: Board::col_of(index) + 1,
                unit,
            });
        }
    }

    Ok(())
}
