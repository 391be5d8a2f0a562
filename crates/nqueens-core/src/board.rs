//! Queen occupancy grid.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Conflict, ConflictKind, Position, Safety};

/// An N×N grid recording which squares hold a queen.
///
/// The size is fixed for the lifetime of the board unless [`reset`](Self::reset)
/// reallocates it. Squares are stored row-major.
///
/// # Examples
///
/// ```
/// use nqueens_core::{Board, ConflictKind, Position};
///
/// let mut board = Board::new(4);
/// board.place(Position::new(1, 0));
///
/// assert!(board.is_safe(Position::new(3, 1)));
///
/// let conflict = board.check(Position::new(2, 1)).conflict().unwrap();
/// assert_eq!(conflict.attacker(), Position::new(1, 0));
/// assert_eq!(conflict.kind(), ConflictKind::DiagUp);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<bool>,
}

impl Board {
    /// Creates an empty `size × size` board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size >= 1, "board size must be at least 1");
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Returns the board dimension N.
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[track_caller]
    fn index(&self, pos: Position) -> usize {
        assert!(
            pos.row() < self.size && pos.col() < self.size,
            "position {pos} is outside a {size}x{size} board",
            size = self.size
        );
        pos.row() * self.size + pos.col()
    }

    /// Returns `true` if a queen stands on `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[must_use]
    #[track_caller]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.cells[self.index(pos)]
    }

    /// Puts a queen on `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board or already holds a queen.
    #[track_caller]
    pub fn place(&mut self, pos: Position) {
        let i = self.index(pos);
        assert!(!self.cells[i], "square {pos} already holds a queen");
        self.cells[i] = true;
    }

    /// Removes the queen from `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board or holds no queen.
    #[track_caller]
    pub fn unplace(&mut self, pos: Position) {
        let i = self.index(pos);
        assert!(self.cells[i], "square {pos} holds no queen");
        self.cells[i] = false;
    }

    /// Reallocates the board as an empty `new_size × new_size` grid.
    ///
    /// # Panics
    ///
    /// Panics if `new_size` is zero.
    pub fn reset(&mut self, new_size: usize) {
        *self = Self::new(new_size);
    }

    /// Checks whether a queen on `pos` would be attacked from the left.
    ///
    /// Only columns `< pos.col()` are examined: the row to the left, then the
    /// up-left diagonal, then the down-left diagonal, each walking away from
    /// `pos`. The first queen found is reported. Columns to the right are
    /// assumed empty because queens are placed column by column.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[must_use]
    #[track_caller]
    pub fn check(&self, pos: Position) -> Safety {
        let _ = self.index(pos);
        let (row, col) = (pos.row(), pos.col());

        let row_left = (0..col).map(|c| (Position::new(row, c), ConflictKind::Row));
        let diag_up = (0..row)
            .rev()
            .zip((0..col).rev())
            .map(|(r, c)| (Position::new(r, c), ConflictKind::DiagUp));
        let diag_down = (row + 1..self.size)
            .zip((0..col).rev())
            .map(|(r, c)| (Position::new(r, c), ConflictKind::DiagDown));

        row_left
            .chain(diag_up)
            .chain(diag_down)
            .find(|&(attacker, _)| self.is_occupied(attacker))
            .map_or(Safety::Safe, |(attacker, kind)| {
                Safety::Attacked(Conflict::new(attacker, kind))
            })
    }

    /// Returns `true` if no queen to the left of `pos` attacks it.
    ///
    /// Shorthand for `self.check(pos).is_safe()`.
    #[must_use]
    #[track_caller]
    pub fn is_safe(&self, pos: Position) -> bool {
        self.check(pos).is_safe()
    }

    /// Returns the number of queens on the board.
    #[must_use]
    pub fn queen_count(&self) -> usize {
        self.cells.iter().filter(|&&occupied| occupied).count()
    }

    /// Returns `true` if no square holds a queen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Returns an iterator over the queens, in row-major order.
    pub fn queens(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &occupied)| occupied)
            .map(|(i, _)| Position::new(i / self.size, i % self.size))
    }

    /// Returns a read-only view of the rows, top to bottom.
    ///
    /// Each row is a slice of `size` booleans, `true` where a queen stands.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.size)
    }

    /// Returns `true` if the board holds N mutually non-attacking queens.
    ///
    /// Unlike [`check`](Self::check), this examines every pair of queens in
    /// every direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use nqueens_core::Board;
    ///
    /// let board: Board = "
    ///     ..Q.
    ///     Q...
    ///     ...Q
    ///     .Q..
    /// "
    /// .parse()?;
    /// assert!(board.is_solution());
    /// # Ok::<(), nqueens_core::BoardParseError>(())
    /// ```
    #[must_use]
    pub fn is_solution(&self) -> bool {
        let queens: Vec<_> = self.queens().collect();
        queens.len() == self.size
            && queens
                .iter()
                .enumerate()
                .all(|(i, a)| queens[i + 1..].iter().all(|b| !a.attacks(*b)))
    }
}

impl Display for Board {
    /// Writes one line per row, `Q` for a queen and `.` for an empty square.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &occupied in row {
                f.write_str(if occupied { "Q" } else { "." })?;
            }
        }
        Ok(())
    }
}

/// Error returned when parsing a [`Board`] from text fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardParseError {
    /// The input contains no rows.
    #[display("board text is empty")]
    Empty,
    /// A square is neither a queen nor an empty marker.
    #[display("unexpected character {ch:?} in row {row}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Row in which it appeared (zero-based).
        row: usize,
    },
    /// A row's length differs from the number of rows.
    #[display("row {row} has {len} squares, expected {size}")]
    NotSquare {
        /// Row with the wrong length (zero-based).
        row: usize,
        /// Number of squares found in that row.
        len: usize,
        /// Number of rows in the input.
        size: usize,
    },
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses a board written one row per line.
    ///
    /// `Q` or `q` is a queen; `.`, `_` or `0` is an empty square. Whitespace
    /// within a line is ignored and blank lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(|line| {
                line.chars()
                    .filter(|ch| !ch.is_whitespace())
                    .collect::<Vec<_>>()
            })
            .filter(|row| !row.is_empty())
            .collect::<Vec<_>>();

        let size = rows.len();
        if size == 0 {
            return Err(BoardParseError::Empty);
        }

        let mut board = Self::new(size);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(BoardParseError::NotSquare {
                    row: r,
                    len: row.len(),
                    size,
                });
            }
            for (c, &ch) in row.iter().enumerate() {
                match ch {
                    'Q' | 'q' => board.place(Position::new(r, c)),
                    '.' | '_' | '0' => {}
                    _ => return Err(BoardParseError::UnexpectedChar { ch, row: r }),
                }
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[track_caller]
    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(5);
        assert_eq!(board.size(), 5);
        assert!(board.is_empty());
        assert_eq!(board.queen_count(), 0);
        assert_eq!(board.rows().len(), 5);
        assert!(board.rows().all(|row| row.len() == 5 && !row.contains(&true)));
    }

    #[test]
    #[should_panic(expected = "board size must be at least 1")]
    fn test_zero_size_panics() {
        let _ = Board::new(0);
    }

    #[test]
    fn test_place_and_unplace() {
        let mut board = Board::new(4);
        let pos = Position::new(2, 3);
        board.place(pos);
        assert!(board.is_occupied(pos));
        assert_eq!(board.queens().collect::<Vec<_>>(), [pos]);

        board.unplace(pos);
        assert!(!board.is_occupied(pos));
        assert!(board.is_empty());
    }

    #[test]
    #[should_panic(expected = "already holds a queen")]
    fn test_double_place_panics() {
        let mut board = Board::new(4);
        board.place(Position::new(0, 0));
        board.place(Position::new(0, 0));
    }

    #[test]
    #[should_panic(expected = "holds no queen")]
    fn test_unplace_empty_panics() {
        let mut board = Board::new(4);
        board.unplace(Position::new(1, 1));
    }

    #[test]
    #[should_panic(expected = "outside a 4x4 board")]
    fn test_out_of_range_panics() {
        let board = Board::new(4);
        let _ = board.is_occupied(Position::new(4, 0));
    }

    #[test]
    fn test_reset_changes_size_and_clears() {
        let mut board = Board::new(4);
        board.place(Position::new(0, 0));
        board.reset(6);
        assert_eq!(board.size(), 6);
        assert!(board.is_empty());
    }

    #[test]
    fn test_check_reports_row_first() {
        // (2, 2) is attacked both along its row and on the up-left diagonal.
        let board = board(
            "
            Q...
            ....
            Q...
            ....
            ",
        );
        let conflict = board.check(Position::new(2, 2)).conflict().unwrap();
        assert_eq!(conflict.kind(), ConflictKind::Row);
        assert_eq!(conflict.attacker(), Position::new(2, 0));
    }

    #[test]
    fn test_check_reports_nearest_diagonal_queen() {
        let board = board(
            "
            Q...
            .Q..
            ....
            ....
            ",
        );
        let conflict = board.check(Position::new(3, 3)).conflict().unwrap();
        assert_eq!(conflict.kind(), ConflictKind::DiagUp);
        assert_eq!(conflict.attacker(), Position::new(1, 1));
    }

    #[test]
    fn test_check_down_diagonal() {
        let board = board(
            "
            ....
            ....
            .Q..
            ....
            ",
        );
        let conflict = board.check(Position::new(1, 2)).conflict().unwrap();
        assert_eq!(conflict.kind(), ConflictKind::DiagDown);
        assert_eq!(conflict.attacker(), Position::new(2, 1));
    }

    #[test]
    fn test_check_ignores_right_side_and_column() {
        let board = board(
            "
            ..Q.
            ....
            ...Q
            ....
            ",
        );
        // Same column as (0, 2) and on diagonals of both queens, but both are
        // to the right of or level with the candidate column.
        assert!(board.is_safe(Position::new(1, 2)));
        assert!(board.is_safe(Position::new(1, 0)));
    }

    #[test]
    fn test_first_column_is_always_safe() {
        let board = board(
            "
            .Q.
            ...
            .Q.
            ",
        );
        for row in 0..3 {
            assert!(board.is_safe(Position::new(row, 0)));
        }
    }

    #[test]
    fn test_is_solution() {
        assert!(Board::from_str("Q").unwrap().is_solution());
        assert!(
            board(
                "
                .Q..
                ...Q
                Q...
                ..Q.
                "
            )
            .is_solution()
        );
        // Three queens on a 4x4 board are never a full solution.
        assert!(
            !board(
                "
                .Q..
                ...Q
                Q...
                ....
                "
            )
            .is_solution()
        );
        assert!(
            !board(
                "
                Q...
                .Q..
                ..Q.
                ...Q
                "
            )
            .is_solution()
        );
    }

    #[test]
    fn test_display_and_parse_agree() {
        let text = "..Q.\nQ...\n...Q\n.Q..";
        let board = board(text);
        assert_eq!(board.to_string(), text);
        assert_eq!(board.queen_count(), 4);
    }

    #[test]
    fn test_parse_accepts_spaced_cells() {
        let board = board("Q _ _\n_ _ q\n0 0 0");
        assert_eq!(
            board.queens().collect::<Vec<_>>(),
            [Position::new(0, 0), Position::new(1, 2)]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Board::from_str("  \n\n"), Err(BoardParseError::Empty));
        assert_eq!(
            Board::from_str("..\n.x"),
            Err(BoardParseError::UnexpectedChar { ch: 'x', row: 1 })
        );
        assert_eq!(
            Board::from_str("...\n..\n..."),
            Err(BoardParseError::NotSquare {
                row: 1,
                len: 2,
                size: 3
            })
        );
    }

    fn brute_force_attacker_exists(board: &Board, pos: Position) -> bool {
        board
            .queens()
            .any(|queen| queen.col() < pos.col() && queen.attacks(pos))
    }

    proptest! {
        #[test]
        fn check_agrees_with_pairwise_attack_test(
            size in 1usize..=8,
            cells in prop::collection::vec(any::<bool>(), 64),
            row in 0usize..8,
            col in 0usize..8,
        ) {
            let mut board = Board::new(size);
            for r in 0..size {
                for c in 0..size {
                    if cells[r * 8 + c] {
                        board.place(Position::new(r, c));
                    }
                }
            }
            let pos = Position::new(row % size, col % size);
            let safety = board.check(pos);
            prop_assert_eq!(safety.is_attacked(), brute_force_attacker_exists(&board, pos));
            if let Some(conflict) = safety.conflict() {
                prop_assert!(board.is_occupied(conflict.attacker()));
                prop_assert!(conflict.attacker().attacks(pos));
                let path: Vec<_> = conflict.path(pos).collect();
                prop_assert_eq!(path.first(), Some(&conflict.attacker()));
                prop_assert_eq!(path.last(), Some(&pos));
            }
        }
    }
}
