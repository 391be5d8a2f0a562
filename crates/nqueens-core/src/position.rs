//! Board coordinates.

/// A square on an N×N board, addressed by row and column (both zero-based).
///
/// Rows grow downwards and columns grow to the right, so `(0, 0)` is the
/// top-left corner.
///
/// # Examples
///
/// ```
/// use nqueens_core::Position;
///
/// let pos = Position::new(1, 2);
/// assert_eq!(pos.row(), 1);
/// assert_eq!(pos.col(), 2);
/// assert_eq!(pos.to_string(), "(1, 2)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("({row}, {col})")]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row (zero-based, top to bottom).
    #[must_use]
    #[inline]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column (zero-based, left to right).
    #[must_use]
    #[inline]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns `true` if a queen on `self` and a queen on `other` attack each other.
    ///
    /// A square never attacks itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use nqueens_core::Position;
    ///
    /// let queen = Position::new(2, 2);
    /// assert!(queen.attacks(Position::new(2, 7))); // same row
    /// assert!(queen.attacks(Position::new(5, 2))); // same column
    /// assert!(queen.attacks(Position::new(0, 4))); // diagonal
    /// assert!(!queen.attacks(Position::new(3, 4)));
    /// assert!(!queen.attacks(queen));
    /// ```
    #[must_use]
    pub fn attacks(self, other: Self) -> bool {
        if self == other {
            return false;
        }
        self.row == other.row
            || self.col == other.col
            || self.row.abs_diff(other.row) == self.col.abs_diff(other.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attacks_is_symmetric() {
        let a = Position::new(1, 0);
        let b = Position::new(3, 2);
        assert!(a.attacks(b));
        assert!(b.attacks(a));

        let c = Position::new(0, 2);
        assert!(!a.attacks(c));
        assert!(!c.attacks(a));
    }

    #[test]
    fn test_ordering_is_row_major() {
        let mut positions = vec![
            Position::new(1, 0),
            Position::new(0, 3),
            Position::new(0, 1),
        ];
        positions.sort();
        assert_eq!(
            positions,
            [
                Position::new(0, 1),
                Position::new(0, 3),
                Position::new(1, 0)
            ]
        );
    }
}
