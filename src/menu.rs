//! Interactive text menu.

use crate::board::Board;
use crate::heuristic::HeuristicKind;
use crate::report::{self, Run};
use crossterm::style::Stylize;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

const RULE: &str =
    "---------------------------------------------------------------------------------";
const PROMPT: &str = "Enter an integer between 1-7: ";

/// A menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    RandomPuzzle,
    GoalState,
    CheckSolvable,
    Solve(HeuristicKind),
    Compare,
    Quit,
}

impl Choice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Choice::RandomPuzzle),
            "2" => Some(Choice::GoalState),
            "3" => Some(Choice::CheckSolvable),
            "4" => Some(Choice::Solve(HeuristicKind::Manhattan)),
            "5" => Some(Choice::Solve(HeuristicKind::Hamming)),
            "6" => Some(Choice::Compare),
            "7" => Some(Choice::Quit),
            _ => None,
        }
    }
}

/// The menu loop over an input and output stream.
///
/// Holds the current puzzle, which starts at the goal and is reshuffled by
/// each "display random puzzle".
pub struct Menu<R, W> {
    input: R,
    output: W,
    rng: StdRng,
    shuffle: usize,
    puzzle: Board,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, rng: StdRng, shuffle: usize) -> Self {
        Self {
            input,
            output,
            rng,
            shuffle,
            puzzle: Board::GOAL,
        }
    }

    pub fn puzzle(&self) -> &Board {
        &self.puzzle
    }

    /// Runs until the user quits or input ends.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.print_menu()?;

        while let Some(line) = self.prompt()? {
            let Some(choice) = Choice::parse(&line) else {
                writeln!(self.output, "{}", "Invalid Option! ".red())?;
                continue;
            };
            debug!(?choice, "menu selection");

            if choice == Choice::Quit {
                writeln!(self.output, "Quit Puzzle")?;
                return Ok(());
            }
            self.handle(choice)?;
            self.print_menu()?;
        }

        Ok(())
    }

    fn handle(&mut self, choice: Choice) -> anyhow::Result<()> {
        match choice {
            Choice::RandomPuzzle => {
                self.puzzle.shuffle(self.shuffle, &mut self.rng);
                write!(self.output, "{}", self.puzzle)?;
            }
            Choice::GoalState => {
                write!(self.output, "{}", Board::GOAL)?;
            }
            Choice::CheckSolvable => {
                if self.puzzle.is_solvable() {
                    writeln!(self.output, "{}", "Solvable".green())?;
                } else {
                    writeln!(self.output, "{}", "Not Solvable".red())?;
                }
            }
            Choice::Solve(heuristic) => {
                writeln!(self.output, "Solved with {}:", heuristic)?;
                writeln!(self.output, "{}", RULE)?;
                let run = Run::new(&self.puzzle, heuristic);
                writeln!(self.output, "{}", run)?;
                writeln!(self.output, "{}", RULE)?;
            }
            Choice::Compare => {
                writeln!(self.output, "{}", RULE)?;
                for run in report::compare(&self.puzzle) {
                    writeln!(self.output, "{}", run)?;
                    writeln!(self.output, "{}", RULE)?;
                }
            }
            Choice::Quit => {}
        }
        Ok(())
    }

    fn print_menu(&mut self) -> anyhow::Result<()> {
        let out = &mut self.output;
        writeln!(out, "{}", RULE)?;
        writeln!(
            out,
            "{}",
            "Eight Puzzle Implementation using Heuristic Search: ".bold()
        )?;
        writeln!(out, "{}", RULE)?;
        writeln!(out, "Choose a number from 1 to 7:")?;
        writeln!(out, "1. Display Random Puzzle: ")?;
        writeln!(out, "2. Display Goal State ")?;
        writeln!(out, "3. Check if puzzle is solvable:")?;
        writeln!(out, "4. Solve the puzzle using the Manhattan Heuristic:")?;
        writeln!(out, "5. Solve the puzzle using the Hamming Heuristic:")?;
        writeln!(out, "6. Print the Results of both Heuristics:  ")?;
        writeln!(out, "7. Quit. ")?;
        writeln!(out, "{}", RULE)?;
        Ok(())
    }

    /// Next input line, or `None` at end of input.
    fn prompt(&mut self) -> anyhow::Result<Option<String>> {
        write!(self.output, "{}", PROMPT)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
