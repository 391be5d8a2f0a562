use std::io;

use nqueens_stepper::ConfigError;

/// Errors that abort a visualizer run.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CliError {
    /// The stepper rejected the requested board size.
    #[display("invalid board: {_0}")]
    Config(ConfigError),
    /// Writing a frame to the terminal failed.
    #[display("failed to write output: {_0}")]
    Io(io::Error),
}
