//! Solve command - run one search driver over an input board file
//!
//! ## Architecture
//!
//! - Level 1: run() - orchestration
//! - Level 2: read_board(), search(), report(), write_output()

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Serialize;

use jumpy_core::{
    AlphaBetaEngine, BasicEstimator, Board, ImprovedEstimator, MinimaxEngine, Player, SearchResult,
};

#[derive(Args)]
pub struct SolveArgs {
    /// Input file holding a 16-character board string
    pub input: std::path::PathBuf,

    /// Output file for the best board found
    pub output: std::path::PathBuf,

    /// Search depth in plies
    pub depth: u32,

    /// Report as JSON instead of the three-line format
    #[arg(long)]
    pub json: bool,
}

/// Which (engine, estimator, player) triple a subcommand selects
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverKind {
    MiniMax,
    MiniMaxBlack,
    MiniMaxImproved,
    AlphaBeta,
}

impl DriverKind {
    /// Label used in the console report
    pub fn label(self) -> &'static str {
        match self {
            DriverKind::MiniMax => "MiniMax",
            DriverKind::MiniMaxBlack => "MiniMaxBlack",
            DriverKind::MiniMaxImproved => "MiniMaxImproved",
            DriverKind::AlphaBeta => "AlphaBeta",
        }
    }
}

/// Run one driver: read the board, search, report, write the best board.
pub fn run(args: SolveArgs, kind: DriverKind) -> Result<()> {
    let board = read_board(&args.input)?;

    tracing::info!(
        "Running {} at depth {} on {}",
        kind.label(),
        args.depth,
        board
    );

    let result = search(&board, args.depth, kind);

    let Some(best) = result.best_board else {
        bail!("no legal move available from {board}");
    };

    report(&result, &best, kind, args.json)?;
    write_output(&args.output, &best)?;

    Ok(())
}

/// Read, parse, and validate the input board
fn read_board(path: &Path) -> Result<Board> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input board: {}", path.display()))?;

    let board: Board = raw
        .trim()
        .parse()
        .with_context(|| format!("Invalid board in {}", path.display()))?;

    board
        .validate()
        .with_context(|| format!("Illegal starting position in {}", path.display()))?;

    Ok(board)
}

fn search(board: &Board, depth: u32, kind: DriverKind) -> SearchResult {
    match kind {
        DriverKind::MiniMax => {
            MinimaxEngine::new(BasicEstimator).compute_best_move(board, depth, Player::White)
        }
        DriverKind::MiniMaxBlack => {
            MinimaxEngine::new(BasicEstimator).compute_best_move(board, depth, Player::Black)
        }
        DriverKind::MiniMaxImproved => {
            MinimaxEngine::new(ImprovedEstimator).compute_best_move(board, depth, Player::White)
        }
        DriverKind::AlphaBeta => {
            AlphaBetaEngine::new(BasicEstimator).compute_best_move(board, depth, Player::White)
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    driver: &'a str,
    output_board: String,
    positions_evaluated: u64,
    estimate: i32,
}

fn report(result: &SearchResult, best: &Board, kind: DriverKind, json: bool) -> Result<()> {
    if json {
        let report = Report {
            driver: kind.label(),
            output_board: best.to_string(),
            positions_evaluated: result.positions_evaluated,
            estimate: result.estimate,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Output board position: {best}");
        println!(
            "Positions evaluated by static estimation: {}",
            result.positions_evaluated
        );
        println!("{} estimate: {}", kind.label(), result.estimate);
    }
    Ok(())
}

/// Write the best board's 16-char serialization, no trailing newline
fn write_output(path: &Path, best: &Board) -> Result<()> {
    fs::write(path, best.to_string())
        .with_context(|| format!("Failed to write output board: {}", path.display()))
}
