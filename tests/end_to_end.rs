use sudoku_brute::board::CELLS;
use sudoku_brute::{checker, solver, Board, PuzzleError};

const PUZZLE: &str = "\
000407000
901683000
020005070
000801050
010009762
734056000
190704083
040598026
056100000";

#[test]
fn parse_validate_solve_and_format() {
    let puzzle: Board = PUZZLE.parse().unwrap();
    checker::validate(&puzzle).unwrap();

    let solved = solver::solve(&puzzle).expect("puzzle is solvable");

    for index in 0..CELLS {
        assert!(checker::is_consistent(&solved, index));
        if puzzle[index] != 0 {
            assert_eq!(solved[index], puzzle[index]);
        }
    }

    let text = solved.to_grid_string();
    assert_eq!(text.lines().count(), 9);
    assert!(text.lines().all(|line| line.len() == 9));
    assert!(text.chars().all(|c| c == '\n' || ('1'..='9').contains(&c)));
}

#[test]
fn conflicting_givens_are_caught_before_search() {
    let mut puzzle: Board = PUZZLE.parse().unwrap();
    // Row 1 already holds a 9 in its first cell.
    puzzle[17] = 9;

    let err = checker::validate(&puzzle).unwrap_err();
    assert!(matches!(err, PuzzleError::Conflict { value: 9, .. }));
}

#[test]
fn an_unsolvable_puzzle_is_an_explicit_outcome() {
    let mut puzzle = Board::new([0; CELLS]);
    for col in 0..8 {
        puzzle[col] = col as u8 + 1;
    }
    puzzle[9 + 8] = 9;

    checker::validate(&puzzle).unwrap();
    assert_eq!(solver::solve(&puzzle), None);
}
