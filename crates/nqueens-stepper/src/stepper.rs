use std::iter::FusedIterator;

use nqueens_core::{Board, Conflict, Position, Safety};

use crate::{ConfigError, Event, Phase, StepperStats};

/// Internal state; [`Phase`] plus the verdict carried between an attempt and
/// its rejection, and whether the solution has been announced yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Attempting,
    Placed,
    Rejected(Conflict),
    BacktrackingColumn,
    Solved { announced: bool },
    Exhausted,
}

impl State {
    fn phase(self) -> Phase {
        match self {
            Self::Idle => Phase::Idle,
            Self::Attempting => Phase::Attempting,
            Self::Placed => Phase::Placed,
            Self::Rejected(_) => Phase::Rejected,
            Self::BacktrackingColumn => Phase::BacktrackingColumn,
            Self::Solved { .. } => Phase::Solved,
            Self::Exhausted => Phase::Exhausted,
        }
    }
}

/// Depth-first N-Queens search advanced one transition per [`step`](Self::step).
///
/// The recursion of the textbook solver is replaced by an explicit stack of
/// confirmed queens plus a `(column, row)` cursor, so an external tick source
/// can drive the search, pause it by not calling `step`, and resume it later.
///
/// Columns are filled left to right and rows are tried top to bottom. The
/// sequence of events is therefore exactly the order in which a recursive
/// backtracking solver would try, accept, reject, and retract queens.
///
/// Between steps the following always hold:
///
/// - the `k`-th entry of [`decisions`](Self::decisions) lies in column `k`;
/// - a square of [`board`](Self::board) holds a queen iff it is in `decisions`.
///
/// # Examples
///
/// ```
/// use nqueens_core::Position;
/// use nqueens_stepper::{BacktrackingStepper, Event, Phase};
///
/// let mut stepper = BacktrackingStepper::new(4)?;
/// assert_eq!(stepper.phase(), Phase::Idle);
///
/// let position = Position::new(0, 0);
/// assert_eq!(stepper.step(), Event::Attempt { position });
/// assert_eq!(stepper.phase(), Phase::Placed);
/// assert_eq!(stepper.step(), Event::Accept { position });
///
/// while !stepper.phase().is_terminal() {
///     stepper.step();
/// }
/// assert_eq!(stepper.phase(), Phase::Solved);
/// assert_eq!(stepper.step(), Event::Solved);
/// assert_eq!(stepper.step(), Event::NoOp);
/// # Ok::<(), nqueens_stepper::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BacktrackingStepper {
    board: Board,
    decisions: Vec<Position>,
    current_col: usize,
    current_row: usize,
    state: State,
    stats: StepperStats,
}

impl BacktrackingStepper {
    /// Creates an idle stepper for a `size × size` board.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBoard`] if `size` is zero.
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        log::debug!("new stepper: size={size}");
        Ok(Self {
            board: Board::new(size),
            decisions: Vec::with_capacity(size),
            current_col: 0,
            current_row: 0,
            state: State::Idle,
            stats: StepperStats::default(),
        })
    }

    /// Discards the current search and starts over on a `size × size` board.
    ///
    /// The board, decision stack, cursor, and statistics are all reset and
    /// the phase returns to [`Phase::Idle`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBoard`] if `size` is zero. The stepper is
    /// left untouched in that case.
    pub fn configure(&mut self, size: usize) -> Result<(), ConfigError> {
        *self = Self::new(size)?;
        Ok(())
    }

    /// Returns the board dimension N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Returns a read-only view of the confirmed queens.
    ///
    /// Squares that are only being attempted are not on the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Returns the column awaiting a decision, in `0..=N`.
    ///
    /// `N` means every column holds a queen.
    #[must_use]
    pub fn current_col(&self) -> usize {
        self.current_col
    }

    /// Returns the row candidate for [`current_col`](Self::current_col), in `0..=N`.
    ///
    /// `N` means every row of the column has been tried.
    #[must_use]
    pub fn current_row(&self) -> usize {
        self.current_row
    }

    /// Returns the confirmed queens, oldest (column 0) first.
    #[must_use]
    pub fn decisions(&self) -> &[Position] {
        &self.decisions
    }

    /// Returns the conflict that the next step will report, while in
    /// [`Phase::Rejected`].
    #[must_use]
    pub fn pending_conflict(&self) -> Option<Conflict> {
        match self.state {
            State::Rejected(conflict) => Some(conflict),
            _ => None,
        }
    }

    /// Returns the counters collected since the last (re)configuration.
    #[must_use]
    pub fn stats(&self) -> &StepperStats {
        &self.stats
    }

    /// Performs exactly one transition and returns the event describing it.
    ///
    /// The accept that fills the last column enters [`Phase::Solved`]; the
    /// first step taken there announces it with [`Event::Solved`]. Otherwise
    /// nothing changes in a terminal phase and [`Event::NoOp`] is returned.
    pub fn step(&mut self) -> Event {
        let event = match self.state {
            State::Idle | State::Attempting => self.attempt(),
            State::Placed => self.accept(),
            State::Rejected(conflict) => self.reject(conflict),
            State::BacktrackingColumn => self.backtrack(),
            State::Solved { announced: false } => {
                self.state = State::Solved { announced: true };
                Event::Solved
            }
            State::Solved { announced: true } | State::Exhausted => return Event::NoOp,
        };
        self.stats.record(&event);
        log::trace!(
            "size={} step={}: {event} -> {}",
            self.size(),
            self.stats.total_steps(),
            self.phase()
        );
        if event.is_solved() || event.is_exhausted() {
            log::debug!(
                "size={} {} after {} steps",
                self.size(),
                self.phase(),
                self.stats.total_steps()
            );
        }
        event
    }

    /// Steps until the search reaches a terminal phase and returns it.
    pub fn run_to_end(&mut self) -> Phase {
        self.events().for_each(drop);
        self.phase()
    }

    /// Returns an iterator that steps the search and yields each event.
    ///
    /// The iterator ends after yielding [`Event::Solved`] or
    /// [`Event::Exhausted`]; it yields nothing if the search has already ended.
    pub fn events(&mut self) -> Events<'_> {
        Events { stepper: self }
    }

    fn cursor(&self) -> Position {
        Position::new(self.current_row, self.current_col)
    }

    /// The phase to continue with after the row cursor moved.
    fn next_row_state(&self) -> State {
        if self.current_row >= self.size() {
            State::BacktrackingColumn
        } else {
            State::Attempting
        }
    }

    fn attempt(&mut self) -> Event {
        if self.current_row >= self.size() {
            return self.backtrack();
        }

        let position = self.cursor();
        self.state = match self.board.check(position) {
            Safety::Safe => State::Placed,
            Safety::Attacked(conflict) => State::Rejected(conflict),
        };
        Event::Attempt { position }
    }

    fn reject(&mut self, conflict: Conflict) -> Event {
        let position = self.cursor();
        self.current_row += 1;
        self.state = self.next_row_state();
        Event::Reject { position, conflict }
    }

    fn accept(&mut self) -> Event {
        let position = self.cursor();
        debug_assert_eq!(self.decisions.len(), position.col());
        self.board.place(position);
        self.decisions.push(position);
        self.current_col += 1;
        self.current_row = 0;
        self.state = if self.current_col == self.size() {
            State::Solved { announced: false }
        } else {
            State::Attempting
        };
        Event::Accept { position }
    }

    fn backtrack(&mut self) -> Event {
        let Some(position) = self.decisions.pop() else {
            self.state = State::Exhausted;
            return Event::Exhausted;
        };
        self.board.unplace(position);
        self.current_col = position.col();
        self.current_row = position.row() + 1;
        self.state = self.next_row_state();
        Event::Backtrack { position }
    }
}

/// Iterator returned by [`BacktrackingStepper::events`].
#[derive(Debug)]
pub struct Events<'a> {
    stepper: &'a mut BacktrackingStepper,
}

impl Iterator for Events<'_> {
    type Item = Event;

    fn next(&mut self) -> Option<Self::Item> {
        match self.stepper.step() {
            Event::NoOp => None,
            event => Some(event),
        }
    }
}

impl FusedIterator for Events<'_> {}
