//! Results of the left-side attack check.
//!
//! [`Board::check`](crate::Board::check) only scans columns to the left of
//! the candidate, so every [`Conflict`] it reports has its attacker in a
//! column strictly smaller than the candidate's.

use crate::Position;

/// The line along which a placed queen attacks a candidate square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum ConflictKind {
    /// The attacker shares the candidate's row.
    #[display("row")]
    Row,
    /// The attacker sits on the up-left diagonal (smaller row, smaller column).
    #[display("upper diagonal")]
    DiagUp,
    /// The attacker sits on the down-left diagonal (larger row, smaller column).
    #[display("lower diagonal")]
    DiagDown,
}

/// A placed queen that attacks a candidate square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{attacker} on the {kind}")]
pub struct Conflict {
    attacker: Position,
    kind: ConflictKind,
}

impl Conflict {
    /// Creates a conflict record.
    #[must_use]
    pub const fn new(attacker: Position, kind: ConflictKind) -> Self {
        Self { attacker, kind }
    }

    /// Returns the position of the attacking queen.
    #[must_use]
    pub const fn attacker(&self) -> Position {
        self.attacker
    }

    /// Returns the line along which the attack happens.
    #[must_use]
    pub const fn kind(&self) -> ConflictKind {
        self.kind
    }

    /// Returns the squares from the attacker to `candidate`, both ends included.
    ///
    /// The squares are yielded left to right. Presentation layers use this to
    /// highlight the line of attack.
    ///
    /// # Panics
    ///
    /// Panics if `candidate` is left of the attacker or does not lie on the
    /// line named by [`kind`](Self::kind).
    ///
    /// # Examples
    ///
    /// ```
    /// use nqueens_core::{Conflict, ConflictKind, Position};
    ///
    /// let conflict = Conflict::new(Position::new(3, 0), ConflictKind::DiagDown);
    /// let path: Vec<_> = conflict.path(Position::new(1, 2)).collect();
    /// assert_eq!(
    ///     path,
    ///     [Position::new(3, 0), Position::new(2, 1), Position::new(1, 2)]
    /// );
    /// ```
    #[track_caller]
    pub fn path(&self, candidate: Position) -> impl ExactSizeIterator<Item = Position> + use<> {
        let Self { attacker, kind } = *self;
        let Some(span) = candidate.col().checked_sub(attacker.col()) else {
            panic!("candidate {candidate} is left of attacker {attacker}");
        };
        let end_row = match kind {
            ConflictKind::Row => Some(attacker.row()),
            ConflictKind::DiagUp => attacker.row().checked_add(span),
            ConflictKind::DiagDown => attacker.row().checked_sub(span),
        };
        assert!(
            end_row == Some(candidate.row()),
            "candidate {candidate} is not on the {kind} of attacker {attacker}"
        );

        let len = span + 1;
        (0..len).map(move |i| {
            let row = match kind {
                ConflictKind::Row => attacker.row(),
                ConflictKind::DiagUp => attacker.row() + i,
                ConflictKind::DiagDown => attacker.row() - i,
            };
            Position::new(row, attacker.col() + i)
        })
    }
}

/// Outcome of checking whether a square is attacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Safety {
    /// No placed queen attacks the square.
    Safe,
    /// The square is attacked; carries the first attacker found.
    Attacked(Conflict),
}

impl Safety {
    /// Returns the conflict if the square is attacked.
    #[must_use]
    pub const fn conflict(&self) -> Option<Conflict> {
        match self {
            Self::Safe => None,
            Self::Attacked(conflict) => Some(*conflict),
        }
    }
}
