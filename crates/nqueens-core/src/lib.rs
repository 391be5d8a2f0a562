//! Core data structures for the N-Queens backtracking visualizer.
//!
//! This crate holds the board model that the search in `nqueens-stepper`
//! reads and mutates:
//!
//! - [`Position`]: a `(row, col)` square.
//! - [`Board`]: the N×N occupancy grid, with the left-side attack check
//!   [`Board::check`] used by column-by-column placement.
//! - [`Safety`], [`Conflict`], [`ConflictKind`]: the result of that check,
//!   including which queen attacks and along which line.
//!
//! # Examples
//!
//! ```
//! use nqueens_core::{Board, Position, Safety};
//!
//! let mut board = Board::new(4);
//! board.place(Position::new(1, 0));
//!
//! match board.check(Position::new(0, 1)) {
//!     Safety::Safe => unreachable!(),
//!     Safety::Attacked(conflict) => {
//!         assert_eq!(conflict.attacker(), Position::new(1, 0));
//!     }
//! }
//! ```

pub use self::{
    board::{Board, BoardParseError},
    position::Position,
    safety::{Conflict, ConflictKind, Safety},
};

mod board;
mod position;
mod safety;
