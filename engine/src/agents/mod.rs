mod alphabeta;
mod minimax;

pub use alphabeta::AlphaBetaAgent;
pub use minimax::MinimaxAgent;

use crate::board::{Board, Mark};
use crate::session_rng::SessionRng;

/// Result of evaluating one subtree: the move that leads to `score`.
/// `position` is `None` only at terminal leaves; every recursion level
/// above a leaf stamps its own move into the result it bubbles up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredMove {
    pub position: Option<usize>,
    pub score: i32,
}

/// A move-choosing agent playing one side of the board.
///
/// `choose_move` only simulates: the caller applies the returned index
/// itself and then checks `winner()` / `has_empty_cell()` to decide
/// whether the game goes on. The board comes back in exactly the state
/// it was passed in.
pub trait Agent {
    fn mark(&self) -> Mark;

    /// Recursive invocations of the last search. Zero after an opening
    /// shortcut, since the random first move is not search.
    fn nodes_searched(&self) -> u64;

    fn choose_move(&mut self, board: &mut Board, rng: &mut SessionRng) -> Option<usize>;
}

/// Scores a finished game from `my_mark`'s point of view. A line by
/// `last_mover` is worth one more than the number of empty cells left,
/// so earlier wins (and later losses) score higher. Returns `None` when
/// the position is not terminal.
fn terminal_score(board: &Board, my_mark: Mark, last_mover: Mark) -> Option<ScoredMove> {
    if board.winner() == Some(last_mover) {
        let margin = (board.count_empty() + 1) as i32;
        let score = if last_mover == my_mark { margin } else { -margin };
        return Some(ScoredMove {
            position: None,
            score,
        });
    }
    if !board.has_empty_cell() {
        return Some(ScoredMove {
            position: None,
            score: 0,
        });
    }
    None
}

/// Uniform choice among all cells of an untouched board. Kept out of the
/// search so two engines do not open identically every game.
fn random_opening(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    let moves = board.available_moves();
    if moves.len() != board.size() * board.size() {
        return None;
    }
    let index = rng.random_range(0..moves.len());
    Some(moves[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_score_rewards_faster_wins() {
        let mut board = Board::new(3);
        for &(index, mark) in &[(0, Mark::X), (3, Mark::O), (1, Mark::X), (4, Mark::O)] {
            assert!(board.apply_move(index, mark));
        }
        assert!(board.apply_move(2, Mark::X));

        let for_winner = terminal_score(&board, Mark::X, Mark::X).unwrap();
        assert_eq!(for_winner.score, 5);
        assert_eq!(for_winner.position, None);

        let for_loser = terminal_score(&board, Mark::O, Mark::X).unwrap();
        assert_eq!(for_loser.score, -5);
    }

    #[test]
    fn test_terminal_score_is_none_mid_game() {
        let mut board = Board::new(3);
        assert!(board.apply_move(4, Mark::X));
        assert_eq!(terminal_score(&board, Mark::X, Mark::X), None);
    }

    #[test]
    fn test_random_opening_only_fires_on_untouched_board() {
        let mut rng = SessionRng::new(42);
        let mut board = Board::new(3);
        let opening = random_opening(&board, &mut rng).unwrap();
        assert!(opening < 9);

        assert!(board.apply_move(opening, Mark::X));
        assert_eq!(random_opening(&board, &mut rng), None);
    }
}
