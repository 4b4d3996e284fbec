//! Command-line interface for eight_puzzle.

use crate::board::Board;
use crate::heuristic::HeuristicKind;
use clap::{Args, Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};

/// Random moves applied to the goal when no board is given.
pub const DEFAULT_SHUFFLE: usize = 20;

/// Eight Puzzle - A* search with pluggable heuristics
#[derive(Parser, Debug)]
#[command(name = "eight_puzzle")]
#[command(about = "Solve the 8-puzzle with A* search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log filter used when RUST_LOG is unset (e.g. "info", "eight_puzzle=debug")
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    /// Seed for shuffling; omit for a random seed
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run (defaults to the interactive menu)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the interactive menu
    Menu {
        /// Random moves per "display random puzzle"
        #[arg(long, default_value_t = DEFAULT_SHUFFLE)]
        shuffle: usize,
    },

    /// Solve one puzzle with one heuristic
    Solve {
        #[command(flatten)]
        puzzle: PuzzleArgs,

        /// Heuristic guiding the search
        #[arg(long, value_enum, default_value_t = HeuristicKind::Manhattan)]
        heuristic: HeuristicKind,

        /// Print every board along the solution
        #[arg(long)]
        show_path: bool,
    },

    /// Solve one puzzle with every heuristic and compare the effort
    Compare {
        #[command(flatten)]
        puzzle: PuzzleArgs,
    },

    /// Report whether a board can reach the goal
    Check {
        /// Board as nine digits, row-major, 0 for the blank (e.g. "123456780")
        #[arg(long)]
        board: Board,
    },
}

/// Where the puzzle comes from: an explicit board, or a shuffle of the goal.
#[derive(Args, Debug, Clone)]
pub struct PuzzleArgs {
    /// Board as nine digits, row-major, 0 for the blank (e.g. "123405786")
    #[arg(long)]
    pub board: Option<Board>,

    /// Random moves from the goal when no board is given
    #[arg(long)]
    pub shuffle: Option<usize>,
}

impl PuzzleArgs {
    pub fn resolve(&self, rng: &mut StdRng) -> Board {
        match self.board {
            Some(board) => board,
            None => {
                let mut board = Board::GOAL;
                board.shuffle(self.shuffle.unwrap_or(DEFAULT_SHUFFLE), rng);
                board
            }
        }
    }
}
