//! Timed solver runs and their human-readable summaries.

use crate::board::Board;
use crate::heuristic::HeuristicKind;
use crate::search::{solve, Solution};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::info;

/// One solve of one board with one heuristic.
#[derive(Debug, Clone)]
pub struct Run {
    pub heuristic: HeuristicKind,
    pub solution: Solution,
    pub elapsed: Duration,
}

impl Run {
    pub fn new(board: &Board, heuristic: HeuristicKind) -> Self {
        let started = Instant::now();
        let solution = solve(board, &heuristic);
        let elapsed = started.elapsed();

        info!(
            %heuristic,
            moves = solution.len(),
            expansions = solution.expansions,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "solve finished"
        );

        Self {
            heuristic,
            solution,
            elapsed,
        }
    }

    pub fn millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.solution.is_exhausted() {
            writeln!(f, "No solution found with {} distance", self.heuristic)?;
        } else {
            writeln!(
                f,
                "Solved with {} distance in {} moves exploring {} states",
                self.heuristic,
                self.solution.len(),
                self.solution.expansions
            )?;
        }
        write!(
            f,
            "--- {:.3} milliseconds for {} ---",
            self.millis(),
            self.heuristic.to_string().to_uppercase()
        )
    }
}

/// Runs every built-in heuristic on the same board.
pub fn compare(board: &Board) -> Vec<Run> {
    HeuristicKind::ALL
        .iter()
        .map(|&heuristic| Run::new(board, heuristic))
        .collect()
}
