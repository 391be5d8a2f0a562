//! Tick-driven N-Queens backtracking search.
//!
//! [`BacktrackingStepper`] runs the classic column-by-column depth-first
//! search, but instead of recursing it advances by exactly one transition per
//! call to [`step`](BacktrackingStepper::step) and reports each transition as
//! an [`Event`]. A presentation layer calls `step` from its timer, renders the
//! event, and reads the confirmed queens through
//! [`board`](BacktrackingStepper::board).
//!
//! # Examples
//!
//! ```
//! use nqueens_stepper::{BacktrackingStepper, Event, Phase};
//!
//! let mut stepper = BacktrackingStepper::new(4)?;
//! for event in stepper.events() {
//!     if let Event::Reject { position, conflict } = event {
//!         println!("{position} is attacked by {}", conflict.attacker());
//!     }
//! }
//! assert_eq!(stepper.phase(), Phase::Solved);
//! assert!(stepper.board().is_solution());
//! # Ok::<(), nqueens_stepper::ConfigError>(())
//! ```

pub use self::{error::*, event::*, phase::*, stats::*, stepper::*};

mod error;
mod event;
mod phase;
mod stats;
mod stepper;

#[cfg(test)]
mod testing;
