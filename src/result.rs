//! Round result types.

/// Winner of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    /// The human player.
    Human,
    /// The computer.
    Computer,
}

impl Winner {
    /// Returns the message announcing this winner.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Human => "You win!",
            Self::Computer => "The computer wins!",
        }
    }
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The human player's final score.
    pub human_score: u32,
    /// The computer's final score.
    pub computer_score: u32,
    /// Who won.
    pub winner: Winner,
}

impl RoundResult {
    /// Builds a result from final scores.
    ///
    /// The human wins only with a strictly greater score; ties go to the
    /// computer.
    ///
    /// # Example
    ///
    /// ```
    /// use pigrs::{RoundResult, Winner};
    ///
    /// assert_eq!(RoundResult::from_scores(100, 100).winner, Winner::Computer);
    /// ```
    #[must_use]
    pub const fn from_scores(human_score: u32, computer_score: u32) -> Self {
        let winner = if human_score > computer_score {
            Winner::Human
        } else {
            Winner::Computer
        };

        Self {
            human_score,
            computer_score,
            winner,
        }
    }
}
