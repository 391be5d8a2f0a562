/// Errors returned when (re)configuring a [`BacktrackingStepper`](crate::BacktrackingStepper).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// The requested board has no squares.
    #[display("board size must be at least 1")]
    EmptyBoard,
}
