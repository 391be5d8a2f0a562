//! The tick loop that drives the stepper and draws its events.

use std::{io::Write, thread};

use nqueens_stepper::{BacktrackingStepper, Phase};

use crate::{
    CliError,
    args::Args,
    pace::Pace,
    render::{render_frame, render_summary},
};

/// How a [`Driver::run`] call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Outcome {
    /// The search found a solution.
    #[display("Solved")]
    Solved,
    /// The search proved there is no solution.
    #[display("No solution")]
    Exhausted,
    /// The tick budget ran out first; the search can be resumed.
    #[display("Paused")]
    Paused,
}

/// Calls [`BacktrackingStepper::step`] once per tick and writes a frame for
/// every event.
///
/// Stopping is simply not stepping any more: after a [`Outcome::Paused`] run
/// the driver can be run again and continues where it left off.
#[derive(Debug)]
pub struct Driver<W> {
    stepper: BacktrackingStepper,
    out: W,
    pace: Pace,
    final_only: bool,
    max_steps: Option<usize>,
}

impl<W> Driver<W>
where
    W: Write,
{
    /// Creates a driver that writes to `out` without waiting between ticks.
    pub fn new(stepper: BacktrackingStepper, out: W) -> Self {
        Self {
            stepper,
            out,
            pace: Pace::INSTANT,
            final_only: false,
            max_steps: None,
        }
    }

    /// Creates a driver configured from command-line arguments.
    pub fn from_args(args: &Args, out: W) -> Result<Self, CliError> {
        let stepper = BacktrackingStepper::new(usize::from(args.size))?;
        let pace = if args.instant {
            Pace::INSTANT
        } else {
            Pace::from_speed(args.speed)
        };
        Ok(Self::new(stepper, out)
            .with_pace(pace)
            .with_final_only(args.final_only)
            .with_max_steps(args.max_steps))
    }

    /// Sets the delay policy between frames.
    #[must_use]
    pub fn with_pace(mut self, pace: Pace) -> Self {
        self.pace = pace;
        self
    }

    /// When set, no per-tick frames are written and no delays are applied.
    #[must_use]
    pub fn with_final_only(mut self, final_only: bool) -> Self {
        self.final_only = final_only;
        self
    }

    /// Limits the number of ticks each [`run`](Self::run) performs.
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: Option<usize>) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Returns the driven stepper.
    pub fn stepper(&self) -> &BacktrackingStepper {
        &self.stepper
    }

    /// Consumes the driver and returns the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Ticks until the search has been announced as solved or exhausted, or
    /// the tick budget is spent, then writes a summary.
    pub fn run(&mut self) -> Result<Outcome, CliError> {
        log::info!(
            "running: size={}, pace={:?}, max_steps={:?}",
            self.stepper.size(),
            self.pace.tick(),
            self.max_steps
        );

        let mut ticks = 0;
        while self.max_steps.is_none_or(|max| ticks < max) {
            let event = self.stepper.step();
            if event.is_no_op() {
                break;
            }
            ticks += 1;

            if !self.final_only {
                writeln!(self.out, "{}", render_frame(self.stepper.board(), &event))?;
                self.out.flush()?;
                let delay = self.pace.delay_after(&event);
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
            }
            if event.is_solved() || event.is_exhausted() {
                break;
            }
        }

        let outcome = match self.stepper.phase() {
            Phase::Solved => Outcome::Solved,
            Phase::Exhausted => Outcome::Exhausted,
            _ => Outcome::Paused,
        };
        log::info!("{outcome} after {ticks} ticks");

        let summary = render_summary(
            self.stepper.board(),
            &outcome.to_string(),
            self.stepper.stats(),
        );
        self.out.write_all(summary.as_bytes())?;
        self.out.flush()?;
        Ok(outcome)
    }
}
