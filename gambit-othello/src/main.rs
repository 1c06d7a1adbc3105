//! Play Othello against the computer in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use gambit_othello::play::Session;
use gambit_search::Algorithm;
use std::io;

#[derive(Parser)]
#[command(name = "gambit")]
#[command(version, about = "Play Othello as white against a minimax opponent", long_about = None)]
struct Cli {
    /// How many plies the computer looks ahead
    #[arg(short, long, default_value_t = 8)]
    depth: u32,

    /// Search procedure: "minimax" or "alphabeta"
    #[arg(short, long, default_value_t = Algorithm::AlphaBeta)]
    algorithm: Algorithm,

    /// Print search statistics after every computer move
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = Session::new(stdin.lock(), stdout.lock(), cli.algorithm, cli.depth)
        .show_stats(cli.stats)
        .run()
        .context("game aborted")?;

    if outcome.quit {
        println!("Bye.");
    }
    Ok(())
}
