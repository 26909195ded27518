//! Backtracking solver for 9x9 sudoku puzzles.
//!
//! A puzzle is 81 cells in row-major order, `0` marking an empty cell.
//! [`solver::solve`] searches for a completion with chronological
//! backtracking, consulting [`checker`] on every trial digit.

pub mod board;
pub mod checker;
pub mod solver;

pub use board::{Board, PuzzleError};
