use crate::board::Board;
use crate::checker;

/// Finds a completion of `board` by chronological backtracking, or `None`
/// when the search space is exhausted without one.
///
/// Digits are tried in ascending order and the first completion found is
/// returned, so the result is deterministic: among all completions it is
/// the smallest under row-major, ascending-digit ordering. Givens are
/// never reassigned; the caller's board is untouched.
pub fn solve(board: &Board) -> Option<Board> {
    let mut board = board.clone();

    fn search(board: &mut Board, cursor: usize) -> bool {
        if board.is_full() {
            return true;
        }

        let index = match board.first_empty_from(cursor) {
            Some(index) => index,
            None => return true,
        };

        for digit in 1..=9 {
            board[index] = digit;
            if checker::is_consistent(board, index) && search(board, index + 1) {
                return true;
            }
        }

        // Every digit failed here. Retract the cell so the caller can
        // advance to its own next digit against a clean suffix.
        board[index] = 0;
        false
    }

    if search(&mut board, 0) {
        Some(board)
    } else {
        None
    }
}
