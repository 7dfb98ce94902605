//! Jumpy3 Core - Game rules and adversarial search
//!
//! This crate provides the core logic for the Jumpy3 solver:
//! - Piece and player model for the 16-cell linear track
//! - Board state, move generation, and terminal detection
//! - Static position estimators (basic and improved)
//! - Depth-limited MiniMax and Alpha-Beta search engines

pub mod board;
pub mod eval;
pub mod pieces;
pub mod search;

// Re-exports for convenient access
pub use board::{Board, BoardError, BOARD_CELLS};
pub use eval::{BasicEstimator, Estimator, ImprovedEstimator, WIN_SCORE};
pub use pieces::{Piece, Player};
pub use search::{AlphaBetaEngine, MinimaxEngine, SearchResult};
