//! Command-line arguments.

use clap::Parser;

/// Smallest board size the visualizer accepts.
pub const MIN_SIZE: u8 = 4;
/// Largest board size the visualizer accepts.
pub const MAX_SIZE: u8 = 20;

/// Animate the N-Queens backtracking search in the terminal.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Number of queens, which is also the board size (4-20).
    #[arg(
        value_name = "N",
        default_value_t = 8,
        value_parser = clap::value_parser!(u8).range(i64::from(MIN_SIZE)..=i64::from(MAX_SIZE)),
    )]
    pub size: u8,

    /// Animation speed from 1 (slowest) to 10 (fastest).
    #[arg(
        short,
        long,
        value_name = "SPEED",
        default_value_t = 5,
        value_parser = clap::value_parser!(u8).range(1..=10),
    )]
    pub speed: u8,

    /// Do not wait between ticks.
    #[arg(long)]
    pub instant: bool,

    /// Print only the final board and statistics.
    #[arg(long)]
    pub final_only: bool,

    /// Stop after this many ticks, even if the search is not finished.
    #[arg(long, value_name = "COUNT")]
    pub max_steps: Option<usize>,
}
