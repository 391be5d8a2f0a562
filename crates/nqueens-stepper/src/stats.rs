use crate::Event;

/// Counters collected while a [`BacktrackingStepper`](crate::BacktrackingStepper) runs.
///
/// Counters start at zero and are reset whenever the stepper is reconfigured.
/// [`NoOp`](Event::NoOp) steps are not counted.
///
/// # Examples
///
/// ```
/// use nqueens_stepper::BacktrackingStepper;
///
/// let mut stepper = BacktrackingStepper::new(4)?;
/// stepper.run_to_end();
///
/// let stats = stepper.stats();
/// assert_eq!(stats.accepts(), 8);
/// assert_eq!(stats.backtracks(), 4);
/// assert_eq!(stats.total_steps(), 57);
/// # Ok::<(), nqueens_stepper::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepperStats {
    attempts: usize,
    rejects: usize,
    accepts: usize,
    backtracks: usize,
    total_steps: usize,
}

impl StepperStats {
    /// Returns the number of [`Attempt`](Event::Attempt) events.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Returns the number of [`Reject`](Event::Reject) events.
    #[must_use]
    pub fn rejects(&self) -> usize {
        self.rejects
    }

    /// Returns the number of [`Accept`](Event::Accept) events.
    #[must_use]
    pub fn accepts(&self) -> usize {
        self.accepts
    }

    /// Returns the number of [`Backtrack`](Event::Backtrack) events.
    #[must_use]
    pub fn backtracks(&self) -> usize {
        self.backtracks
    }

    /// Returns the number of transitions performed, terminal announcements included.
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub(crate) fn record(&mut self, event: &Event) {
        match event {
            Event::Attempt { .. } => self.attempts += 1,
            Event::Reject { .. } => self.rejects += 1,
            Event::Accept { .. } => self.accepts += 1,
            Event::Backtrack { .. } => self.backtracks += 1,
            Event::Solved | Event::Exhausted => {}
            Event::NoOp => return,
        }
        self.total_steps += 1;
    }
}
