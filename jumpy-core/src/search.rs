//! Depth-limited MiniMax and Alpha-Beta search
//!
//! Both engines walk the same move tree and return identical best moves and
//! scores; Alpha-Beta only differs in how many positions it evaluates. White
//! maximizes and Black minimizes, with the side to move alternating each ply.

use crate::board::Board;
use crate::eval::Estimator;
use crate::pieces::Player;
use serde::Serialize;

/// Outcome of a search over one subtree.
///
/// `positions_evaluated` counts leaf and dead-end evaluations, summed over
/// all children; `best_board` is absent at leaves and dead ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub estimate: i32,
    pub best_board: Option<Board>,
    pub positions_evaluated: u64,
}

impl SearchResult {
    fn leaf(estimate: i32) -> Self {
        Self {
            estimate,
            best_board: None,
            positions_evaluated: 1,
        }
    }
}

/// Exhaustive MiniMax: visits every reachable node at every depth.
pub struct MinimaxEngine<E: Estimator> {
    estimator: E,
}

impl<E: Estimator> MinimaxEngine<E> {
    pub fn new(estimator: E) -> Self {
        Self { estimator }
    }

    /// Find the best move for `player`, searching `depth` plies ahead.
    pub fn compute_best_move(&self, board: &Board, depth: u32, player: Player) -> SearchResult {
        self.minimax(board, depth, player == Player::White, player)
    }

    fn minimax(&self, board: &Board, depth: u32, maximizing: bool, to_move: Player) -> SearchResult {
        if depth == 0 || board.is_terminal() {
            return SearchResult::leaf(self.estimator.estimate(board));
        }

        let moves = board.moves_for(to_move);
        if moves.is_empty() {
            // A dead end scores like a leaf
            return SearchResult::leaf(self.estimator.estimate(board));
        }

        let mut best_estimate = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_board = None;
        let mut positions_evaluated = 0;

        for candidate in moves {
            let child = self.minimax(&candidate, depth - 1, !maximizing, to_move.opponent());
            positions_evaluated += child.positions_evaluated;

            // Strict comparison keeps the first-seen best on ties
            let improves = if maximizing {
                child.estimate > best_estimate
            } else {
                child.estimate < best_estimate
            };
            if improves {
                best_estimate = child.estimate;
                best_board = Some(candidate);
            }
        }

        SearchResult {
            estimate: best_estimate,
            best_board,
            positions_evaluated,
        }
    }
}

/// Alpha-Beta pruned search.
///
/// Returns the same best move and estimate as [`MinimaxEngine`] for any
/// input, evaluating at most as many positions.
pub struct AlphaBetaEngine<E: Estimator> {
    estimator: E,
}

impl<E: Estimator> AlphaBetaEngine<E> {
    pub fn new(estimator: E) -> Self {
        Self { estimator }
    }

    /// Find the best move for `player`, searching `depth` plies ahead.
    pub fn compute_best_move(&self, board: &Board, depth: u32, player: Player) -> SearchResult {
        // The sentinels are compared but never negated, so the extremes of
        // i32 are safe as an unbounded window.
        self.alpha_beta(
            board,
            depth,
            i32::MIN,
            i32::MAX,
            player == Player::White,
            player,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn alpha_beta(
        &self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        to_move: Player,
    ) -> SearchResult {
        if depth == 0 || board.is_terminal() {
            return SearchResult::leaf(self.estimator.estimate(board));
        }

        let moves = board.moves_for(to_move);
        if moves.is_empty() {
            return SearchResult::leaf(self.estimator.estimate(board));
        }

        let mut best_estimate = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_board = None;
        let mut positions_evaluated = 0;

        for candidate in moves {
            let child = self.alpha_beta(
                &candidate,
                depth - 1,
                alpha,
                beta,
                !maximizing,
                to_move.opponent(),
            );
            positions_evaluated += child.positions_evaluated;

            if maximizing {
                if child.estimate > best_estimate {
                    best_estimate = child.estimate;
                    best_board = Some(candidate);
                }
                alpha = alpha.max(best_estimate);
            } else {
                if child.estimate < best_estimate {
                    best_estimate = child.estimate;
                    best_board = Some(candidate);
                }
                beta = beta.min(best_estimate);
            }

            // The window update above runs first, so the child that
            // triggers the cutoff is fully counted
            if beta <= alpha {
                break;
            }
        }

        SearchResult {
            estimate: best_estimate,
            best_board,
            positions_evaluated,
        }
    }
}
