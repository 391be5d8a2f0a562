use nqueens_core::{Conflict, Position};

/// The visual delta produced by one call to
/// [`BacktrackingStepper::step`](crate::BacktrackingStepper::step).
///
/// The search ignores events once emitted; they exist for the presentation
/// layer to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum Event {
    /// A candidate square is being considered. Its verdict follows on the next step.
    #[display("attempt {position}")]
    Attempt {
        /// The candidate square.
        position: Position,
    },
    /// The candidate square is attacked and will not hold a queen.
    #[display("reject {position}: attacked by {conflict}")]
    Reject {
        /// The rejected square.
        position: Position,
        /// The queen that attacks it and the line of attack.
        conflict: Conflict,
    },
    /// A queen was placed on the candidate square.
    #[display("accept {position}")]
    Accept {
        /// The square that now holds a queen.
        position: Position,
    },
    /// The most recent queen was taken back so the next row of its column can be tried.
    #[display("backtrack {position}")]
    Backtrack {
        /// The square the queen was removed from.
        position: Position,
    },
    /// Every column holds a queen; the board is a solution.
    #[display("solved")]
    Solved,
    /// No placement of queens solves this board.
    #[display("exhausted")]
    Exhausted,
    /// Nothing happened because the search already finished.
    #[display("no-op")]
    NoOp,
}

impl Event {
    /// Returns the square this event is about, if any.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::Attempt { position }
            | Self::Reject { position, .. }
            | Self::Accept { position }
            | Self::Backtrack { position } => Some(*position),
            Self::Solved | Self::Exhausted | Self::NoOp => None,
        }
    }

    /// Returns the conflict carried by a [`Reject`](Self::Reject) event.
    #[must_use]
    pub const fn conflict(&self) -> Option<Conflict> {
        match self {
            Self::Reject { conflict, .. } => Some(*conflict),
            _ => None,
        }
    }
}
