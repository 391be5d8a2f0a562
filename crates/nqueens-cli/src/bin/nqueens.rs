//! N-Queens backtracking visualizer for the terminal.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin nqueens -- 8 --speed 7
//! ```
//!
//! Skip the animation and print only the result:
//!
//! ```sh
//! cargo run --bin nqueens -- 12 --final-only
//! ```
//!
//! Set `RUST_LOG=debug` (or `trace` for every transition) to see log output.

use std::{io, process};

use clap::Parser as _;
use nqueens_cli::{args::Args, driver::Driver};

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    log::info!(
        "Starting nqueens, version={}",
        env!("CARGO_PKG_VERSION")
    );

    let result = Driver::from_args(&args, io::stdout().lock()).and_then(|mut driver| driver.run());
    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
