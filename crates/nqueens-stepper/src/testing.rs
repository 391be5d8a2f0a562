//! Test utilities for the stepper.
//!
//! [`StepperTester`] drives a [`BacktrackingStepper`] through a fluent chain
//! of steps and assertions. [`recursive_events`] produces the event sequence of
//! a plain recursive backtracking solver, which the stepper must reproduce.
//!
//! # Example
//!
//! ```ignore
//! StepperTester::new(1)
//!     .step_expect(attempt(0, 0))
//!     .step_expect(accept(0, 0))
//!     .step_expect(Event::Solved)
//!     .assert_board("Q");
//! ```

use nqueens_core::{Board, Conflict, ConflictKind, Position, Safety};

use crate::{BacktrackingStepper, Event, Phase};

/// A test harness wrapping a [`BacktrackingStepper`].
///
/// All methods return `self` for chaining. Assertion failures are reported
/// at the caller's location.
#[derive(Debug)]
pub struct StepperTester {
    stepper: BacktrackingStepper,
}

impl StepperTester {
    /// Creates a tester around a fresh stepper of the given size.
    #[track_caller]
    pub fn new(size: usize) -> Self {
        Self {
            stepper: BacktrackingStepper::new(size).unwrap(),
        }
    }

    /// Steps once and asserts the emitted event.
    #[track_caller]
    pub fn step_expect(mut self, expected: Event) -> Self {
        let step = self.stepper.stats().total_steps() + 1;
        let actual = self.stepper.step();
        assert_eq!(actual, expected, "unexpected event at step {step}");
        self
    }

    /// Asserts the current phase.
    #[track_caller]
    pub fn assert_phase(self, expected: Phase) -> Self {
        assert_eq!(self.stepper.phase(), expected);
        self
    }

    /// Asserts the cursor as `(current_col, current_row)`.
    #[track_caller]
    pub fn assert_cursor(self, col: usize, row: usize) -> Self {
        assert_eq!(
            (self.stepper.current_col(), self.stepper.current_row()),
            (col, row),
            "cursor (col, row) mismatch"
        );
        self
    }

    /// Asserts the decision stack, bottom first.
    #[track_caller]
    pub fn assert_decisions(self, expected: &[Position]) -> Self {
        assert_eq!(self.stepper.decisions(), expected);
        self
    }

    /// Asserts the board against its text form (see [`Board`]'s `FromStr`).
    #[track_caller]
    pub fn assert_board(self, expected: &str) -> Self {
        let expected: Board = expected.parse().unwrap();
        assert_eq!(
            self.stepper.board(),
            &expected,
            "board mismatch:\n{}\nexpected:\n{expected}",
            self.stepper.board()
        );
        self
    }
}

pub fn attempt(row: usize, col: usize) -> Event {
    Event::Attempt {
        position: Position::new(row, col),
    }
}

pub fn accept(row: usize, col: usize) -> Event {
    Event::Accept {
        position: Position::new(row, col),
    }
}

pub fn backtrack(row: usize, col: usize) -> Event {
    Event::Backtrack {
        position: Position::new(row, col),
    }
}

pub fn reject(
    (row, col): (usize, usize),
    kind: ConflictKind,
    (attacker_row, attacker_col): (usize, usize),
) -> Event {
    Event::Reject {
        position: Position::new(row, col),
        conflict: Conflict::new(Position::new(attacker_row, attacker_col), kind),
    }
}

/// Returns the events a call-stack recursive solver would emit for a board
/// of the given size, ending in `Solved` or `Exhausted`.
pub fn recursive_events(size: usize) -> Vec<Event> {
    fn place_column(board: &mut Board, col: usize, events: &mut Vec<Event>) -> bool {
        if col == board.size() {
            events.push(Event::Solved);
            return true;
        }
        for row in 0..board.size() {
            let position = Position::new(row, col);
            events.push(Event::Attempt { position });
            match board.check(position) {
                Safety::Attacked(conflict) => events.push(Event::Reject { position, conflict }),
                Safety::Safe => {
                    board.place(position);
                    events.push(Event::Accept { position });
                    if place_column(board, col + 1, events) {
                        return true;
                    }
                    board.unplace(position);
                    events.push(Event::Backtrack { position });
                }
            }
        }
        false
    }

    let mut board = Board::new(size);
    let mut events = vec![];
    if !place_column(&mut board, 0, &mut events) {
        events.push(Event::Exhausted);
    }
    events
}
