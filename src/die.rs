//! Die types and rolling.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::DieError;

/// Smallest accepted die size.
pub const MIN_DIE_SIZE: u32 = 4;

/// Largest accepted die size.
pub const MAX_DIE_SIZE: u32 = 100;

/// Number of sides of the die used for a round.
///
/// Always within [`MIN_DIE_SIZE`]`..=`[`MAX_DIE_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DieSize(u32);

impl DieSize {
    /// Creates a die size.
    ///
    /// # Errors
    ///
    /// Returns an error if `sides` is outside `[4, 100]`.
    ///
    /// # Example
    ///
    /// ```
    /// use pigrs::{DieError, DieSize};
    ///
    /// assert_eq!(DieSize::new(6).unwrap().sides(), 6);
    /// assert_eq!(DieSize::new(3), Err(DieError::OutOfRange(3)));
    /// ```
    pub const fn new(sides: u32) -> Result<Self, DieError> {
        if sides < MIN_DIE_SIZE || sides > MAX_DIE_SIZE {
            return Err(DieError::OutOfRange(sides));
        }
        Ok(Self(sides))
    }

    /// Returns the number of sides.
    #[must_use]
    pub const fn sides(self) -> u32 {
        self.0
    }
}

/// A single roll as reported to the rolling player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roll {
    /// Face that came up.
    pub value: u32,
    /// Turn total after this roll (0 on a bust).
    pub gain: u32,
}

impl Roll {
    /// Returns whether this roll was a one.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.value == 1
    }
}

/// Source of die faces.
pub trait Roller {
    /// Returns a face in `1..=sides`.
    fn roll(&mut self, sides: u32) -> u32;
}

/// Uniform roller backed by a seeded `ChaCha8` generator.
#[derive(Debug, Clone)]
pub struct SeededRoller {
    rng: ChaCha8Rng,
}

impl SeededRoller {
    /// Creates a roller with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Roller for SeededRoller {
    fn roll(&mut self, sides: u32) -> u32 {
        self.rng.random_range(1..=sides)
    }
}
