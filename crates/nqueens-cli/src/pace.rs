//! Wall-clock pacing between ticks.

use std::time::Duration;

use nqueens_stepper::Event;

/// Delays applied after each rendered event.
///
/// A candidate is shown for half a tick before its verdict, and every other
/// transition is shown for a full tick. Terminal events are not delayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pace {
    tick: Duration,
}

impl Pace {
    /// No waiting at all.
    pub const INSTANT: Self = Self {
        tick: Duration::ZERO,
    };

    /// Converts a speed setting into a pace.
    ///
    /// Speed 1 waits 1000 ms per tick and each step up shortens the tick by
    /// 100 ms, down to 100 ms at speed 10. Values outside `1..=10` are clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// use nqueens_cli::pace::Pace;
    ///
    /// assert_eq!(Pace::from_speed(1).tick(), Duration::from_millis(1000));
    /// assert_eq!(Pace::from_speed(5).tick(), Duration::from_millis(600));
    /// assert_eq!(Pace::from_speed(10).tick(), Duration::from_millis(100));
    /// ```
    #[must_use]
    pub fn from_speed(speed: u8) -> Self {
        let speed = u64::from(speed.clamp(1, 10));
        Self {
            tick: Duration::from_millis(1100 - speed * 100),
        }
    }

    /// Returns the full tick duration.
    #[must_use]
    pub fn tick(self) -> Duration {
        self.tick
    }

    /// Returns how long the frame for `event` stays on screen.
    #[must_use]
    pub fn delay_after(self, event: &Event) -> Duration {
        match event {
            Event::Attempt { .. } => self.tick / 2,
            Event::Reject { .. } | Event::Accept { .. } | Event::Backtrack { .. } => self.tick,
            Event::Solved | Event::Exhausted | Event::NoOp => Duration::ZERO,
        }
    }
}
