//! Terminal front end for the N-Queens backtracking visualizer.
//!
//! This crate is the presentation layer around `nqueens-stepper`: it parses
//! the command line, paces ticks, calls `step` once per tick, and draws each
//! event as a text frame.
#![allow(clippy::missing_errors_doc)]

pub use self::error::CliError;

pub mod args;
pub mod driver;
pub mod pace;
pub mod render;

mod error;
