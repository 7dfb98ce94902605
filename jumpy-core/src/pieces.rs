//! Piece and player primitives

use serde::{Deserialize, Serialize};
use std::fmt;

/// Player color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// The opposing player, used for turn alternation down the search tree.
    pub fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

/// Contents of a single board cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    WhiteKing,
    WhitePawn,
    BlackKing,
    BlackPawn,
    Empty,
}

impl Piece {
    /// Parse the canonical single-character code used in board strings.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'W' => Some(Piece::WhiteKing),
            'w' => Some(Piece::WhitePawn),
            'B' => Some(Piece::BlackKing),
            'b' => Some(Piece::BlackPawn),
            'x' => Some(Piece::Empty),
            _ => None,
        }
    }

    /// Canonical single-character code for board strings.
    pub fn to_char(self) -> char {
        match self {
            Piece::WhiteKing => 'W',
            Piece::WhitePawn => 'w',
            Piece::BlackKing => 'B',
            Piece::BlackPawn => 'b',
            Piece::Empty => 'x',
        }
    }

    /// Owner of this piece, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Piece::WhiteKing | Piece::WhitePawn => Some(Player::White),
            Piece::BlackKing | Piece::BlackPawn => Some(Player::Black),
            Piece::Empty => None,
        }
    }

    /// Mirror-image piece: same rank, opposite color. Empty stays Empty.
    pub fn swap_color(self) -> Self {
        match self {
            Piece::WhiteKing => Piece::BlackKing,
            Piece::BlackKing => Piece::WhiteKing,
            Piece::WhitePawn => Piece::BlackPawn,
            Piece::BlackPawn => Piece::WhitePawn,
            Piece::Empty => Piece::Empty,
        }
    }
}
