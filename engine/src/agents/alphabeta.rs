use super::{Agent, ScoredMove, random_opening, terminal_score};
use crate::board::{Board, Mark};
use crate::session_rng::SessionRng;

/// Minimax with alpha-beta pruning. Chooses the same move as
/// `MinimaxAgent` in every position; the bounds only cut branches that
/// cannot change the result, so `nodes_searched` is the only observable
/// difference between the two agents.
pub struct AlphaBetaAgent {
    mark: Mark,
    nodes_searched: u64,
}

impl AlphaBetaAgent {
    pub fn new(mark: Mark) -> Self {
        assert!(mark != Mark::Empty, "agent mark must be X or O");
        Self {
            mark,
            nodes_searched: 0,
        }
    }

    /// Runs a fresh search from the root with this agent to move and the
    /// bounds wide open.
    pub fn evaluate(&mut self, board: &mut Board) -> ScoredMove {
        self.nodes_searched = 0;
        self.alphabeta(board, self.mark, i32::MIN, i32::MAX)
    }

    fn alphabeta(
        &mut self,
        board: &mut Board,
        to_move: Mark,
        mut alpha: i32,
        mut beta: i32,
    ) -> ScoredMove {
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
            let mut candidate = self.alphabeta(board, opponent, alpha, beta);
            board.undo_move(possible_move);
            candidate.position = Some(possible_move);

            if maximizing {
                if candidate.score > best.score {
                    best = candidate;
                }
                alpha = alpha.max(candidate.score);
            } else {
                if candidate.score < best.score {
                    best = candidate;
                }
                beta = beta.min(candidate.score);
            }

            // Remaining siblings cannot improve on a bound the other
            // side already refutes.
            if beta <= alpha {
                break;
            }
        }

        best
    }
}

impl Agent for AlphaBetaAgent {
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
