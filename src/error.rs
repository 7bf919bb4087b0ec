//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when choosing a die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DieError {
    /// Die size is outside the accepted range.
    #[error("die size {0} is outside [4, 100]")]
    OutOfRange(u32),
}

/// Errors that can occur while playing a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// No turn is active (round not started or already over).
    #[error("invalid game state for this action")]
    InvalidState,
}

/// Errors that can occur when reading the round result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The round has not finished yet.
    #[error("round is still in progress")]
    InProgress,
}

/// Errors that can occur on the console.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Standard input was closed while waiting for an answer.
    #[error("input closed")]
    Closed,
    /// Reading from or writing to the console failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can end a turn or a session.
#[derive(Debug, Error)]
pub enum PlayError {
    /// Turn error.
    #[error(transparent)]
    Turn(#[from] TurnError),
    /// Round error.
    #[error(transparent)]
    Round(#[from] RoundError),
    /// Console error.
    #[error(transparent)]
    Console(#[from] ConsoleError),
}

impl From<std::io::Error> for PlayError {
    fn from(err: std::io::Error) -> Self {
        Self::Console(ConsoleError::Io(err))
    }
}

impl PlayError {
    /// Returns whether this error reflects an impossible engine state rather
    /// than a console failure.
    #[must_use]
    pub const fn is_implausible(&self) -> bool {
        matches!(self, Self::Turn(_) | Self::Round(_))
    }
}
