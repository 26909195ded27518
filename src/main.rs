use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use sudoku_brute::{checker, solver, Board};

/// The result file, written to the working directory.
const SOLUTION_FILE: &str = "SudokuSolution.txt";

/// Solve a 9x9 sudoku puzzle with backtracking search.
#[derive(Parser, Debug)]
struct Args {
    /// File holding the puzzle to solve: nine lines of nine digits,
    /// with 0 marking an empty cell.
    puzzle: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    info!("loading {}", args.puzzle.display());
    let text = fs::read_to_string(&args.puzzle)
        .with_context(|| format!("cannot read {}", args.puzzle.display()))?;
    let board: Board = text.parse().context("not a valid puzzle")?;
    println!("{}", board);

    checker::validate(&board).context("invalid puzzle")?;

    let result = match solver::solve(&board) {
        Some(solved) => {
            println!("{}", solved);
            solved.to_grid_string()
        }
        None => {
            println!("No solution found.");
            "No solution found.".to_string()
        }
    };

    fs::write(SOLUTION_FILE, result)
        .with_context(|| format!("cannot write {}", SOLUTION_FILE))?;
    info!("result written to {}", SOLUTION_FILE);

    Ok(())
}
