use anyhow::{bail, Result};
use clap::Parser;
use eight_puzzle::cli::{Cli, Command, DEFAULT_SHUFFLE};
use eight_puzzle::menu::Menu;
use eight_puzzle::report::{self, Run};
use eight_puzzle::Board;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let mut rng = cli.rng();
    let command = cli.command.clone().unwrap_or(Command::Menu {
        shuffle: DEFAULT_SHUFFLE,
    });
    info!(?command, seed = ?cli.seed, "starting");

    match command {
        Command::Menu { shuffle } => {
            let stdin = io::stdin();
            let mut menu = Menu::new(stdin.lock(), io::stdout(), rng, shuffle);
            menu.run()?;
        }
        Command::Solve {
            puzzle,
            heuristic,
            show_path,
        } => {
            let board = puzzle.resolve(&mut rng);
            println!("Puzzle:\n{}", board);
            ensure_solvable(&board)?;

            let run = Run::new(&board, heuristic);
            println!("{}", run);

            if show_path && !run.solution.is_exhausted() {
                let boards = run.solution.in_play_order();
                for (movement, next) in run.solution.moves.iter().zip(boards) {
                    println!("{}\n{}", movement, next);
                }
            }
        }
        Command::Compare { puzzle } => {
            let board = puzzle.resolve(&mut rng);
            println!("Puzzle:\n{}", board);
            ensure_solvable(&board)?;
            for run in report::compare(&board) {
                println!("{}", run);
            }
        }
        Command::Check { board } => {
            if board.is_solvable() {
                println!("Solvable");
            } else {
                println!("Not Solvable");
            }
        }
    }

    Ok(())
}

fn ensure_solvable(board: &Board) -> Result<()> {
    if !board.is_solvable() {
        bail!("puzzle has an odd inversion count and cannot reach the goal");
    }
    Ok(())
}
