//! Estimates of the remaining distance to [`Board::GOAL`].
//!
//! A heuristic is anything implementing [`Heuristic`]; plain functions and
//! closures of type `Fn(&Board) -> u32` qualify through the blanket impl, so
//! [`hamming`] and [`manhattan`] can be handed straight to the solver.
//!
//! Both built-in heuristics score all nine cells, the blank included, with
//! the blank's home being the bottom-right corner.

use crate::board::{Board, Pos, SIZE};
use std::fmt;

/// A pure estimate of the moves left before `board` reaches the goal.
pub trait Heuristic {
    fn estimate(&self, board: &Board) -> u32;
}

impl<F> Heuristic for F
where
    F: Fn(&Board) -> u32,
{
    fn estimate(&self, board: &Board) -> u32 {
        self(board)
    }
}

/// Goal cell of a tile value. The blank lives bottom-right.
pub fn target(value: u8) -> Pos {
    if value == 0 {
        (SIZE - 1, SIZE - 1)
    } else {
        let index = usize::from(value - 1);
        (index / SIZE, index % SIZE)
    }
}

/// Sums `cost(current, target)` over every cell of the board.
fn per_tile<F>(board: &Board, cost: F) -> u32
where
    F: Fn(Pos, Pos) -> u32,
{
    let mut total = 0;
    for (row, values) in board.rows().iter().enumerate() {
        for (col, &value) in values.iter().enumerate() {
            total += cost((row, col), target(value));
        }
    }
    total
}

/// Number of cells whose tile is not at its goal position.
pub fn hamming(board: &Board) -> u32 {
    per_tile(board, |current, goal| u32::from(current != goal))
}

/// Sum of row and column distances between each tile and its goal position.
pub fn manhattan(board: &Board) -> u32 {
    per_tile(board, |(row, col), (goal_row, goal_col)| {
        (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32
    })
}

/// The built-in heuristics, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum HeuristicKind {
    Hamming,
    Manhattan,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 2] = [HeuristicKind::Manhattan, HeuristicKind::Hamming];

    pub fn function(self) -> fn(&Board) -> u32 {
        match self {
            HeuristicKind::Hamming => hamming,
            HeuristicKind::Manhattan => manhattan,
        }
    }
}

impl Heuristic for HeuristicKind {
    fn estimate(&self, board: &Board) -> u32 {
        (self.function())(board)
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            HeuristicKind::Hamming => "Hamming",
            HeuristicKind::Manhattan => "Manhattan",
        };
        write!(f, "{}", s)
    }
}
