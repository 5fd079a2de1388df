//! # puzzles
//!
//! Solve one day's puzzle for an input file and print both answers.
//!
//! Set `RUST_LOG=puzzles=trace` to see the containers each solver builds.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use puzzles::{input::read_input, Day};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Puzzle solver
#[derive(Parser)]
struct Args {
    /// The puzzle to solve
    #[arg(value_enum)]
    day: Day,
    /// Path to the puzzle input
    input: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    tracing::info!(day = ?args.day, input = %args.input.display(), "solving");

    let input = read_input(&args.input)
        .with_context(|| format!("Error opening file '{}'", args.input.display()))?;
    let answers = args
        .day
        .solve(&input)
        .with_context(|| format!("Error solving {:?}", args.day))?;

    println!("{answers}");

    Ok(())
}
