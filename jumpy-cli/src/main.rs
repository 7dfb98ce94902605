//! Jumpy3 CLI - depth-limited solvers for the Jumpy3 track game
//!
//! Commands:
//! - mini-max: MiniMax best move for White (basic estimator)
//! - mini-max-black: MiniMax best move for Black (basic estimator)
//! - mini-max-improved: MiniMax for White (improved estimator)
//! - alpha-beta: Alpha-Beta pruned search for White (basic estimator)

mod solve;

use clap::{Parser, Subcommand};

use solve::{DriverKind, SolveArgs};

#[derive(Parser)]
#[command(name = "jumpy")]
#[command(about = "Jumpy3 adversarial search solver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// MiniMax search for White using the basic estimator
    MiniMax(SolveArgs),
    /// MiniMax search for Black using the basic estimator
    MiniMaxBlack(SolveArgs),
    /// MiniMax search for White using the improved estimator
    MiniMaxImproved(SolveArgs),
    /// Alpha-Beta pruned search for White using the basic estimator
    AlphaBeta(SolveArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::MiniMax(args) => solve::run(args, DriverKind::MiniMax),
        Commands::MiniMaxBlack(args) => solve::run(args, DriverKind::MiniMaxBlack),
        Commands::MiniMaxImproved(args) => solve::run(args, DriverKind::MiniMaxImproved),
        Commands::AlphaBeta(args) => solve::run(args, DriverKind::AlphaBeta),
    }
}
