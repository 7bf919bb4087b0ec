//! Roll-again decisions.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::Exp1;

use crate::die::Roll;
use crate::error::ConsoleError;

/// The golden ratio, `(1 + sqrt(5)) / 2`.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Exponential draws below this value make the computer roll again.
///
/// Equal to `1 / GOLDEN_RATIO`.
pub const CONTINUE_THRESHOLD: f64 = 1.0 / GOLDEN_RATIO;

/// Returns the probability that the computer rolls again after a scoring roll.
///
/// For a rate-1 exponential draw `X`, `P(X < t) = 1 - e^(-t)`.
#[must_use]
pub fn continue_probability() -> f64 {
    1.0 - (-CONTINUE_THRESHOLD).exp()
}

/// Controls a turn in progress.
///
/// The turn calls [`on_roll`](Self::on_roll) after every roll, busts
/// included, and [`roll_again`](Self::roll_again) only after a scoring roll.
pub trait TurnControl {
    /// Receives the roll that just happened.
    ///
    /// # Errors
    ///
    /// Returns an error if the roll could not be reported.
    fn on_roll(&mut self, _roll: &Roll) -> Result<(), ConsoleError> {
        Ok(())
    }

    /// Decides whether to roll again.
    ///
    /// # Errors
    ///
    /// Returns an error if the decision could not be obtained.
    fn roll_again(&mut self) -> Result<bool, ConsoleError>;
}

/// The computer opponent.
///
/// Each decision samples a rate-1 exponential value and rolls again while it
/// falls below [`CONTINUE_THRESHOLD`]. The rule ignores scores and die size.
#[derive(Debug, Clone)]
pub struct ComputerStrategy {
    rng: ChaCha8Rng,
}

impl ComputerStrategy {
    /// Creates a computer opponent with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns whether an exponential draw means "roll again".
    #[must_use]
    pub fn decide(draw: f64) -> bool {
        draw < CONTINUE_THRESHOLD
    }

    /// Samples a draw and decides.
    pub fn should_continue(&mut self) -> bool {
        let draw: f64 = self.rng.sample(Exp1);
        Self::decide(draw)
    }
}

impl TurnControl for ComputerStrategy {
    fn roll_again(&mut self) -> Result<bool, ConsoleError> {
        Ok(self.should_continue())
    }
}
