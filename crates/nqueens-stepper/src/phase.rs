/// Observable phase of a [`BacktrackingStepper`](crate::BacktrackingStepper).
///
/// The phase names the transition the next call to
/// [`step`](crate::BacktrackingStepper::step) will perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum Phase {
    /// Freshly configured; no step has been taken yet.
    ///
    /// Behaves like [`Attempting`](Self::Attempting) on the next step.
    #[display("idle")]
    Idle,
    /// The search is under way and the next step tries the cursor's square.
    #[display("attempting")]
    Attempting,
    /// The last attempted square is safe; the next step accepts it.
    #[display("placed")]
    Placed,
    /// The last attempted square is attacked; the next step rejects it.
    #[display("rejected")]
    Rejected,
    /// Every row of the current column has been tried; the next step pops
    /// the most recent queen, or reports exhaustion if there is none.
    #[display("backtracking")]
    BacktrackingColumn,
    /// Every column holds a queen. The next step announces the solution with
    /// [`Event::Solved`](crate::Event::Solved); steps after that do nothing.
    #[display("solved")]
    Solved,
    /// The search space is exhausted without a solution. Further steps do nothing.
    #[display("exhausted")]
    Exhausted,
}

impl Phase {
    /// Returns `true` for [`Solved`](Self::Solved) and [`Exhausted`](Self::Exhausted).
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}
