use super::{Agent, ScoredMove, random_opening, terminal_score};
use crate::board::{Board, Mark};
use crate::session_rng::SessionRng;

/// Full-width minimax: every branch of the remaining game tree is
/// visited, so the chosen move is optimal under the scoring of
/// `terminal_score`. The board is shared with the caller and restored
/// through `undo_move` after every simulated branch.
pub struct MinimaxAgent {
    mark: Mark,
    nodes_searched: u64,
}

impl MinimaxAgent {
    pub fn new(mark: Mark) -> Self {
        assert!(mark != Mark::Empty, "agent mark must be X or O");
        Self {
            mark,
            nodes_searched: 0,
        }
    }

    /// Runs a fresh search from the root with this agent to move and
    /// returns the principal move together with its score.
    pub fn evaluate(&mut self, board: &mut Board) -> ScoredMove {
        self.nodes_searched = 0;
        self.minimax(board, self.mark)
    }

    fn minimax(&mut self, board: &mut Board, to_move: Mark) -> ScoredMove {
        self.nodes_searched += 1;
        let opponent = to_move.opponent().unwrap();

        if let Some(result) = terminal_score(board, self.mark, opponent) {
            return result;
        }

        let maximizing = to_move == self.mark;
        let mut best = ScoredMove {
            position: None,
            score: if maximizing { i32::MIN } else { i32::MAX },
        };

        for possible_move in board.available_moves() {
            board.apply_move(possible_move, to_move);
            let mut candidate = self.minimax(board, opponent);
            board.undo_move(possible_move);
            candidate.position = Some(possible_move);

            // Strict comparison: on ties the lowest index seen first wins.
            if maximizing {
                if candidate.score > best.score {
                    best = candidate;
                }
            } else if candidate.score < best.score {
                best = candidate;
            }
        }

        best
    }
}

impl Agent for MinimaxAgent {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    fn choose_move(&mut self, board: &mut Board, rng: &mut SessionRng) -> Option<usize> {
        if let Some(opening) = random_opening(board, rng) {
            return Some(opening);
        }
        self.evaluate(board).position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_moves(moves: &[(usize, Mark)]) -> Board {
        let mut board = Board::new(3);
        for &(index, mark) in moves {
            assert!(board.apply_move(index, mark));
        }
        board
    }

    #[test]
    fn test_opening_move_is_random_and_skips_search() {
        let mut agent = MinimaxAgent::new(Mark::X);
        let mut board = Board::new(3);
        let mut rng = SessionRng::new(42);

        let chosen = agent.choose_move(&mut board, &mut rng).unwrap();
        assert!(chosen < 9);
        assert_eq!(agent.nodes_searched(), 0);
        assert_eq!(board.count_empty(), 9);
    }

    #[test]
    fn test_takes_immediate_win() {
        // X on 0 and 1; 2 completes the row.
        let mut board = board_with_moves(&[(0, Mark::X), (3, Mark::O), (1, Mark::X), (4, Mark::O)]);
        let mut agent = MinimaxAgent::new(Mark::X);
        let mut rng = SessionRng::new(42);

        assert_eq!(agent.choose_move(&mut board, &mut rng), Some(2));
        assert!(agent.nodes_searched() > 0);
    }

    #[test]
    fn test_blocks_opponent_threat() {
        // O threatens column 0-3-6; every X reply except the block at 6
        // loses on the spot.
        let mut board = board_with_moves(&[(4, Mark::X), (0, Mark::O), (8, Mark::X), (3, Mark::O)]);
        let mut agent = MinimaxAgent::new(Mark::X);
        let mut rng = SessionRng::new(42);

        assert_eq!(agent.choose_move(&mut board, &mut rng), Some(6));
    }

    #[test]
    fn test_prefers_faster_win() {
        // X can win immediately on 2 (row 0-1-2) or dawdle; the score
        // margin must make it take the immediate win.
        let mut board = board_with_moves(&[
            (0, Mark::X),
            (3, Mark::O),
            (1, Mark::X),
            (5, Mark::O),
            (4, Mark::X),
            (7, Mark::O),
        ]);
        let mut agent = MinimaxAgent::new(Mark::X);
        let mut rng = SessionRng::new(42);

        let chosen = agent.choose_move(&mut board, &mut rng).unwrap();
        assert_eq!(chosen, 2);
    }

    #[test]
    fn test_board_is_restored_after_search() {
        let mut board = board_with_moves(&[(4, Mark::O)]);
        let before: Vec<usize> = board.available_moves();
        let mut agent = MinimaxAgent::new(Mark::X);
        let mut rng = SessionRng::new(42);

        agent.choose_move(&mut board, &mut rng);

        assert_eq!(board.available_moves(), before);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_forced_draw_scores_zero_at_root() {
        // Perfect play from X center + O corner cannot be won by either
        // side; the root evaluation must be a draw.
        let mut board = board_with_moves(&[(4, Mark::X), (0, Mark::O)]);
        let mut agent = MinimaxAgent::new(Mark::X);
        let result = agent.evaluate(&mut board);
        assert_eq!(result.score, 0);
        assert!(result.position.is_some());
    }
}
