use std::fmt::{self, Display, Formatter};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use itertools::Itertools;
use thiserror::Error;

use crate::checker::Unit;

/// Cells per row, column and box.
pub const SIZE: usize = 9;
/// Width and height of one box.
pub const BOX: usize = 3;
/// Total number of cells.
pub const CELLS: usize = SIZE * SIZE;

/// A 9x9 grid in row-major order. `0` is an empty cell, `1`-`9` a digit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: [u8; CELLS],
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("expected {CELLS} cells in the puzzle, found {found}")]
    WrongLength { found: usize },
    #[error("invalid character '{found}' in puzzle")]
    InvalidCharacter { found: char },
    #[error("digit {value} at row {row}, column {col} repeats in the same {unit}")]
    Conflict {
        value: u8,
        /// 1-based, as shown to the user.
        row: usize,
        /// 1-based, as shown to the user.
        col: usize,
        unit: Unit,
    },
}

impl Board {
    pub fn new(grid: [u8; CELLS]) -> Board {
        Board { grid }
    }

    pub fn row_of(index: usize) -> usize {
        index / SIZE
    }

    pub fn col_of(index: usize) -> usize {
        index % SIZE
    }

    /// Return box index (b, c) of a cell,
    /// where b is the box number and c is the cell number in the box.
    pub fn box_index(index: usize) -> (usize, usize) {
        let row = Self::row_of(index);
        let col = Self::col_of(index);
        let b = (row / BOX) * BOX + col / BOX;
        let c = (row % BOX) * BOX + col % BOX;

        (b, c)
    }

    /// Reverse of box_index(): the linear index of cell c in box b.
    pub fn grid_index(b: usize, c: usize) -> usize {
        let row = (b / BOX) * BOX + c / BOX;
        let col = (b % BOX) * BOX + c % BOX;

        row * SIZE + col
    }

    /// self[Board::grid_index(b, c)]
    pub fn box_cell(&self, b: usize, c: usize) -> u8 {
        self[Self::grid_index(b, c)]
    }

    pub fn is_full(&self) -> bool {
        self.grid.iter().all(|&v| v != 0)
    }

    /// First empty cell at or after `cursor`, in row-major order.
    pub fn first_empty_from(&self, cursor: usize) -> Option<usize> {
        (cursor..CELLS).find(|&i| self.grid[i] == 0)
    }

    pub fn cells(&self) -> &[u8] {
        &self.grid
    }

    /// Nine lines of nine digits, no separators.
    pub fn to_grid_string(&self) -> String {
        self.grid
            .chunks(SIZE)
            .map(|row| row.iter().map(|&v| char::from(b'0' + v)).collect::<String>())
            .join("\n")
    }
}

impl FromStr for Board {
    type Err = PuzzleError;

    /// Reads a puzzle from text: 81 digits, newlines ignored.
    fn from_str(s: &str) -> Result<Board, PuzzleError> {
        let digits: Vec<u8> = s
            .chars()
            .filter(|&c| c != '\n' && c != '\r')
            .map(|c| {
                c.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or(PuzzleError::InvalidCharacter { found: c })
            })
            .collect::<Result<_, _>>()?;

        let grid: [u8; CELLS] = digits
            .try_into()
            .map_err(|v: Vec<u8>| PuzzleError::WrongLength { found: v.len() })?;

        Ok(Board { grid })
    }
}

impl Index<usize> for Board {
    type Output = u8;
    fn index(&self, index: usize) -> &Self::Output {
        &self.grid[index]
    }
}

impl IndexMut<usize> for Board {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.grid[index]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fn to_char(v: u8) -> char {
            if v == 0 {
                ' '
            } else {
                char::from(b'0' + v)
            }
        }

        let write_spacer = |f: &mut Formatter| {
            write!(f, "+")?;
            for _ in 0..BOX {
                write!(f, "{}+", "--".repeat(BOX))?;
            }
            writeln!(f)
        };

        write_spacer(f)?;
        for (i, row) in self.grid.chunks(SIZE).enumerate() {
            write!(f, "|")?;
            for seg in &row.iter().chunks(BOX) {
                let seg: String = seg.flat_map(|&v| [to_char(v), ' ']).collect();
                write!(f, "{}|", seg)?;
            }
            writeln!(f)?;
            if i % BOX == BOX - 1 {
                write_spacer(f)?;
            }
        }

        Ok(())
    }
}
