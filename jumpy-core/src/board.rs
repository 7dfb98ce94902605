//! Board state, move generation, and terminal detection
//!
//! The board is a fixed 16-cell track indexed 0 (leftmost) to 15 (rightmost).
//! Boards are immutable values: move generation returns new boards and never
//! touches the receiver. Black's moves are generated by flipping the board,
//! running White's generator, and flipping each result back.

use crate::pieces::{Piece, Player};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of cells on the track
pub const BOARD_CELLS: usize = 16;

/// Maximum pawns per side in a validated starting position
pub const MAX_PAWNS: usize = 3;

/// Errors raised while parsing or validating a board string
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board must contain exactly {BOARD_CELLS} cells, got {0}")]
    WrongLength(usize),
    #[error("invalid piece character '{0}' (valid: W, w, B, b, x)")]
    InvalidPiece(char),
    #[error("{0} must have exactly one king, found {1}")]
    KingCount(Player, usize),
    #[error("{0} may have at most {MAX_PAWNS} pawns, found {1}")]
    PawnCount(Player, usize),
}

/// A Jumpy3 board state
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    cells: [Piece; BOARD_CELLS],
}

impl Board {
    pub fn from_cells(cells: [Piece; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Piece; BOARD_CELLS] {
        &self.cells
    }

    /// Number of cells holding the given piece
    pub fn count(&self, piece: Piece) -> usize {
        self.cells.iter().filter(|&&p| p == piece).count()
    }

    /// Check the starting-position constraints: exactly one king and at most
    /// three pawns per side. Generated successors are never re-validated;
    /// the generator preserves these invariants by construction.
    pub fn validate(&self) -> Result<(), BoardError> {
        for (side, king, pawn) in [
            (Player::White, Piece::WhiteKing, Piece::WhitePawn),
            (Player::Black, Piece::BlackKing, Piece::BlackPawn),
        ] {
            let kings = self.count(king);
            if kings != 1 {
                return Err(BoardError::KingCount(side, kings));
            }
            let pawns = self.count(pawn);
            if pawns > MAX_PAWNS {
                return Err(BoardError::PawnCount(side, pawns));
            }
        }
        Ok(())
    }

    /// Cell index of the given side's king, if it is still on the board.
    pub fn king_position(&self, side: Player) -> Option<usize> {
        let king = match side {
            Player::White => Piece::WhiteKing,
            Player::Black => Piece::BlackKing,
        };
        self.cells.iter().position(|&p| p == king)
    }

    /// White has won once its king has exited the board
    pub fn is_white_win(&self) -> bool {
        !self.cells.contains(&Piece::WhiteKing)
    }

    /// Black has won once its king has exited the board
    pub fn is_black_win(&self) -> bool {
        !self.cells.contains(&Piece::BlackKing)
    }

    pub fn is_terminal(&self) -> bool {
        self.is_white_win() || self.is_black_win()
    }

    /// Mirror the board: reverse cell order and swap piece colors.
    ///
    /// The flip is involutive: `b.flip().flip() == b`. It lets Black reuse
    /// White's move generator.
    pub fn flip(&self) -> Board {
        let mut cells = [Piece::Empty; BOARD_CELLS];
        for (i, cell) in cells.iter_mut().enumerate() {
            *cell = self.cells[BOARD_CELLS - 1 - i].swap_color();
        }
        Board { cells }
    }

    /// Generate every legal successor for `side`, in ascending order of the
    /// moved piece's origin cell. The order is fixed: Alpha-Beta's evaluation
    /// counts depend on it.
    pub fn moves_for(&self, side: Player) -> Vec<Board> {
        match side {
            Player::White => self.white_moves(),
            Player::Black => self
                .flip()
                .white_moves()
                .into_iter()
                .map(|b| b.flip())
                .collect(),
        }
    }

    fn white_moves(&self) -> Vec<Board> {
        let mut moves = Vec::new();

        for origin in 0..BOARD_CELLS {
            let piece = self.cells[origin];
            if piece.owner() != Some(Player::White) {
                continue;
            }

            // Exit from the last cell: the piece leaves the board
            if origin == BOARD_CELLS - 1 {
                let mut next = *self;
                next.cells[origin] = Piece::Empty;
                moves.push(next);
                continue;
            }

            // Single step into an adjacent empty cell
            if self.cells[origin + 1] == Piece::Empty {
                let mut next = *self;
                next.cells[origin] = Piece::Empty;
                next.cells[origin + 1] = piece;
                moves.push(next);
                continue;
            }

            // Jump the contiguous occupied run to the first empty cell
            let mut landing = origin + 1;
            while landing < BOARD_CELLS && self.cells[landing] != Piece::Empty {
                landing += 1;
            }
            if landing == BOARD_CELLS {
                // No landing cell to the right: this piece cannot move
                continue;
            }

            let mut next = *self;
            next.cells[origin] = Piece::Empty;
            next.cells[landing] = piece;

            // Jumping exactly one opposing piece captures it: the captured
            // piece is relocated to the rightmost empty cell of the new
            // board. The relocation target is picked while the jumped cell
            // still holds its piece, so the freed origin is a valid target.
            if landing == origin + 2 {
                let jumped = self.cells[origin + 1];
                if jumped.owner() == Some(Player::Black) {
                    if let Some(dest) = next.rightmost_empty() {
                        next.cells[dest] = jumped;
                        next.cells[origin + 1] = Piece::Empty;
                    }
                }
            }

            moves.push(next);
        }

        moves
    }

    fn rightmost_empty(&self) -> Option<usize> {
        (0..BOARD_CELLS).rev().find(|&i| self.cells[i] == Piece::Empty)
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != BOARD_CELLS {
            return Err(BoardError::WrongLength(chars.len()));
        }
        let mut cells = [Piece::Empty; BOARD_CELLS];
        for (cell, &c) in cells.iter_mut().zip(chars.iter()) {
            *cell = Piece::from_char(c).ok_or(BoardError::InvalidPiece(c))?;
        }
        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for piece in self.cells {
            write!(f, "{}", piece.to_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({self})")
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_string()
    }
}

impl TryFrom<String> for Board {
    type Error = BoardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn strings(moves: &[Board]) -> Vec<String> {
        moves.iter().map(Board::to_string).collect()
    }

    #[test]
    fn test_parse_round_trip() {
        let b = board("WwwwxxxxxxxxbbbB");
        assert_eq!(b.to_string(), "WwwwxxxxxxxxbbbB");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "Wwww".parse::<Board>(),
            Err(BoardError::WrongLength(4))
        );
        assert_eq!(
            "WwwwxxxxxxxxbbbQ".parse::<Board>(),
            Err(BoardError::InvalidPiece('Q'))
        );
    }

    #[test]
    fn test_validate() {
        assert!(board("WwwwxxxxxxxxbbbB").validate().is_ok());
        assert_eq!(
            board("WWwwxxxxxxxxbbbB").validate(),
            Err(BoardError::KingCount(Player::White, 2))
        );
        assert_eq!(
            board("Wxxxxxxxxxxxbbbb").validate(),
            Err(BoardError::KingCount(Player::Black, 0))
        );
        assert_eq!(
            board("WwwwwxxxxxxxbbbB").validate(),
            Err(BoardError::PawnCount(Player::White, 4))
        );
    }

    #[test]
    fn test_flip_involution() {
        for s in [
            "WwwwxxxxxxxxbbbB",
            "xwwwWxxxxxxxbbbB",
            "xxxxxxxxxxxxxxxx",
            "WxbxwxBxxwxbxxxx",
        ] {
            let b = board(s);
            assert_eq!(b.flip().flip(), b);
        }
    }

    #[test]
    fn test_flip_mirrors_and_recolors() {
        assert_eq!(board("Wwxxxxxxxxxxxxbb").flip().to_string(), "wwxxxxxxxxxxxxbB");
    }

    #[test]
    fn test_white_single_step() {
        let moves = board("Wxxxxxxxxxxxxxxx").moves_for(Player::White);
        assert_eq!(strings(&moves), vec!["xWxxxxxxxxxxxxxx"]);
    }

    #[test]
    fn test_white_exit_from_last_cell() {
        let moves = board("xxxxxxxxxxxxxxxW").moves_for(Player::White);
        assert_eq!(strings(&moves), vec!["xxxxxxxxxxxxxxxx"]);
        assert!(moves[0].is_white_win());
    }

    #[test]
    fn test_jump_over_run_without_capture() {
        // Jumping more than one piece lands without capturing
        let moves = board("Wwbxxxxxxxxxxxxx").moves_for(Player::White);
        assert_eq!(moves[0].to_string(), "xwbWxxxxxxxxxxxx");
    }

    #[test]
    fn test_capture_relocates_to_rightmost_empty() {
        let moves = board("xxwbxxxxxxxxxxxx").moves_for(Player::White);
        assert_eq!(strings(&moves), vec!["xxxxwxxxxxxxxxxb"]);
    }

    #[test]
    fn test_capture_of_own_color_does_not_happen() {
        let moves = board("xxwwxxxxxxxxxxxx").moves_for(Player::White);
        // The jumped white pawn stays in place
        assert_eq!(strings(&moves), vec!["xxxwwxxxxxxxxxxx", "xxwxwxxxxxxxxxxx"]);
    }

    #[test]
    fn test_capture_relocation_can_reuse_origin() {
        // After the jump the freed origin is the only empty cell, so the
        // captured pawn lands there
        let moves = board("wbxbbbbbbbbbbbbB").moves_for(Player::White);
        assert_eq!(strings(&moves), vec!["bxwbbbbbbbbbbbbB"]);
    }

    #[test]
    fn test_blocked_piece_generates_no_move() {
        // White king at 12 faces an occupied run to the end of the track
        let moves = board("xxxxxxxxxxxxWwbB").moves_for(Player::White);
        assert!(moves.is_empty());
    }

    #[test]
    fn test_generation_order_is_ascending_origin() {
        let moves = board("WwwwxxxxxxxxbbbB").moves_for(Player::White);
        assert_eq!(
            strings(&moves),
            vec![
                "xwwwWxxxxxxxbbbB",
                "WxwwwxxxxxxxbbbB",
                "WwxwwxxxxxxxbbbB",
                "WwwxwxxxxxxxbbbB",
            ]
        );
    }

    #[test]
    fn test_black_moves_via_flip() {
        let moves = board("WwwwxxxxxxxxbbbB").moves_for(Player::Black);
        assert_eq!(
            strings(&moves),
            vec![
                "WwwwxxxxxxxBbbbx",
                "WwwwxxxxxxxbbbxB",
                "WwwwxxxxxxxbbxbB",
                "WwwwxxxxxxxbxbbB",
            ]
        );
    }

    #[test]
    fn test_move_count_conservation() {
        let parent = board("WwwwxxxxxxxxbbbB");
        let occupied = BOARD_CELLS - parent.count(Piece::Empty);
        for side in [Player::White, Player::Black] {
            for child in parent.moves_for(side) {
                let child_occupied = BOARD_CELLS - child.count(Piece::Empty);
                // No exit or capture is possible here, counts must match
                assert_eq!(child_occupied, occupied, "child {child}");
            }
        }
    }

    #[test]
    fn test_exit_decreases_count_by_one() {
        let parent = board("xxxxxxxxxxxxxxxW");
        let child = parent.moves_for(Player::White)[0];
        assert_eq!(child.count(Piece::WhiteKing), 0);
        assert_eq!(child.count(Piece::Empty), BOARD_CELLS);
    }

    #[test]
    fn test_capture_preserves_counts() {
        let parent = board("xxwbxxxxxxxxxxxx");
        let child = parent.moves_for(Player::White)[0];
        assert_eq!(child.count(Piece::WhitePawn), parent.count(Piece::WhitePawn));
        assert_eq!(child.count(Piece::BlackPawn), parent.count(Piece::BlackPawn));
    }

    #[test]
    fn test_terminal_predicates() {
        assert!(!board("WwwwxxxxxxxxbbbB").is_terminal());
        let no_white_king = board("xwwwxxxxxxxxbbbB");
        assert!(no_white_king.is_white_win());
        assert!(no_white_king.is_terminal());
        let no_black_king = board("Wwwwxxxxxxxxbbbx");
        assert!(no_black_king.is_black_win());
        assert!(no_black_king.is_terminal());
    }

    #[test]
    fn test_king_position() {
        let b = board("WwwwxxxxxxxxbbbB");
        assert_eq!(b.king_position(Player::White), Some(0));
        assert_eq!(b.king_position(Player::Black), Some(15));
        assert_eq!(board("xwwwxxxxxxxxbbbB").king_position(Player::White), None);
    }
}
