//! Static position estimation
//!
//! Estimates are always from White's fixed perspective: positive favors
//! White, negative favors Black, regardless of whose turn it is.

use crate::board::{Board, BOARD_CELLS};
use crate::pieces::{Piece, Player};

/// Score reported for a decided position
pub const WIN_SCORE: i32 = 100;

/// Cell index from which the White king is one move from exiting soon
const WHITE_EXIT_ZONE: i32 = 13;

/// Cell index below which the Black king is close to exiting
const BLACK_EXIT_ZONE: i32 = 2;

/// Bonus applied when a king reaches its exit zone
const EXIT_ZONE_BONUS: i32 = 50;

/// Leaf-level heuristic bounding the search.
///
/// Implementations are stateless and shared read-only across the whole
/// search tree; the engines never inspect which implementation they hold.
pub trait Estimator {
    fn estimate(&self, board: &Board) -> i32;
}

/// Handout heuristic: terminal scores plus the summed king positions.
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicEstimator;

impl Estimator for BasicEstimator {
    fn estimate(&self, board: &Board) -> i32 {
        if board.is_white_win() {
            return WIN_SCORE;
        }
        if board.is_black_win() {
            return -WIN_SCORE;
        }

        let (Some(white_king), Some(black_king)) = (
            board.king_position(Player::White),
            board.king_position(Player::Black),
        ) else {
            // Unreachable past the terminal checks above
            return 0;
        };

        white_king as i32 + black_king as i32 - 15
    }
}

/// Multi-factor heuristic: weighted king advancement, pawn placement,
/// path analysis ahead of the White king, material, and exit proximity.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImprovedEstimator;

impl Estimator for ImprovedEstimator {
    fn estimate(&self, board: &Board) -> i32 {
        if board.is_white_win() {
            return WIN_SCORE;
        }
        if board.is_black_win() {
            return -WIN_SCORE;
        }

        let (Some(white_king), Some(black_king)) = (
            board.king_position(Player::White),
            board.king_position(Player::Black),
        ) else {
            return 0;
        };
        let (wk, bk) = (white_king as i32, black_king as i32);

        // Amplified king advancement
        let mut estimate = 3 * (wk + bk - 15);

        // Pawn positional value: forward placement counts for either side
        let mut white_advance = 0;
        let mut black_advance = 0;
        for (i, &piece) in board.cells().iter().enumerate() {
            match piece {
                Piece::WhitePawn => white_advance += i as i32,
                Piece::BlackPawn => black_advance += (BOARD_CELLS - 1 - i) as i32,
                _ => {}
            }
        }
        estimate += white_advance - black_advance;

        // Scan the White king's path to the end of the track
        let mut blocking_white = 0;
        let mut capturable_black = 0;
        for &piece in &board.cells()[white_king + 1..] {
            match piece {
                Piece::WhitePawn => blocking_white += 1,
                Piece::BlackPawn => capturable_black += 1,
                _ => {}
            }
        }
        // Capturable opponents reward, own blockers penalize
        estimate += 2 * (capturable_black - blocking_white);

        // Pawn material
        let white_pawns = board.count(Piece::WhitePawn) as i32;
        let black_pawns = board.count(Piece::BlackPawn) as i32;
        estimate += 2 * (white_pawns - black_pawns);

        // Clear-path scoring over the same range
        estimate += 2 * capturable_black - 3 * blocking_white;

        // Exit proximity bonuses; both can apply at once
        if wk >= WHITE_EXIT_ZONE {
            estimate += EXIT_ZONE_BONUS;
        }
        if bk <= BLACK_EXIT_ZONE {
            estimate -= EXIT_ZONE_BONUS;
        }

        estimate
    }
}
