//! # Eight Puzzle
//!
//! Solves the 3x3 sliding-tile puzzle with A* search and pluggable
//! heuristics.
//!
//! ## Modules
//! - `board`: the tile grid (`Board`), blank moves (`Move`), shuffling and
//!   the solvability check.
//! - `heuristic`: the `Heuristic` trait plus Hamming and Manhattan distance.
//! - `node`: search nodes and the arena holding their back-pointer chains.
//! - `search`: the A* engine, `solve`.
//! - `report`: timed solver runs, shared by the menu and the command line.
//! - `menu`: the interactive text menu.
//! - `cli`: command-line configuration.
//! - `error`: error types.

pub mod board;
pub mod cli;
pub mod error;
pub mod heuristic;
pub mod menu;
pub mod node;
pub mod report;
pub mod search;

pub use board::{Board, Move, Pos};
pub use error::BoardError;
pub use heuristic::{hamming, manhattan, Heuristic, HeuristicKind};
pub use search::{solve, Solution};
