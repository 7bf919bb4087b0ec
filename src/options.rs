//! Game configuration options.

use crate::game::Seat;

/// Configuration options for a game of Pig.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pigrs::{GameOptions, Seat};
///
/// let options = GameOptions::default()
///     .with_target_score(50)
///     .with_first_seat(Seat::Human);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Score that ends the round once reached by either player.
    pub target_score: u32,
    /// Who rolls first in each round.
    pub first_seat: Seat,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            target_score: 100,
            first_seat: Seat::Computer,
        }
    }
}

impl GameOptions {
    /// Sets the target score.
    ///
    /// # Example
    ///
    /// ```
    /// use pigrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_target_score(50);
    /// assert_eq!(options.target_score, 50);
    /// ```
    #[must_use]
    pub const fn with_target_score(mut self, target: u32) -> Self {
        self.target_score = target;
        self
    }

    /// Sets who rolls first.
    ///
    /// # Example
    ///
    /// ```
    /// use pigrs::{GameOptions, Seat};
    ///
    /// let options = GameOptions::default().with_first_seat(Seat::Human);
    /// assert_eq!(options.first_seat, Seat::Human);
    /// ```
    #[must_use]
    pub const fn with_first_seat(mut self, seat: Seat) -> Self {
        self.first_seat = seat;
        self
    }
}
