//! Game engine and state management.

use log::info;

use crate::die::{DieSize, Roller, SeededRoller};
use crate::error::RoundError;
use crate::options::GameOptions;
use crate::result::RoundResult;

pub mod state;
mod turn;

pub use state::{GameState, Seat};
pub use turn::TurnSummary;

/// A game of Pig between a human and the computer.
///
/// The game owns the die, both scores and the running turn total. Rounds are
/// started with [`Game::start_round`] and advanced one turn at a time with
/// [`Game::play_turn`], or one roll at a time with [`Game::roll`] and
/// [`Game::hold`].
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Die for the current round.
    die: Option<DieSize>,
    /// Human score for the current round.
    human_score: u32,
    /// Computer score for the current round.
    computer_score: u32,
    /// Points accumulated in the turn in progress.
    turn_total: u32,
    /// Source of die faces.
    roller: Box<dyn Roller>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use pigrs::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::RoundStart);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_roller(options, SeededRoller::new(seed))
    }

    /// Creates a new game that takes its faces from `roller`.
    #[must_use]
    pub fn with_roller(options: GameOptions, roller: impl Roller + 'static) -> Self {
        Self {
            options,
            state: GameState::RoundStart,
            die: None,
            human_score: 0,
            computer_score: 0,
            turn_total: 0,
            roller: Box::new(roller),
        }
    }

    /// Starts a new round with the given die.
    ///
    /// Both scores are reset and the first seat from the options rolls first.
    pub fn start_round(&mut self, die: DieSize) {
        self.die = Some(die);
        self.human_score = 0;
        self.computer_score = 0;
        self.turn_total = 0;
        self.state = self.options.first_seat.turn_state();
        info!(
            "round started with a d{} to {}",
            die.sides(),
            self.options.target_score
        );
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the seat whose turn it is.
    ///
    /// Returns `None` before the round starts and after it ends.
    pub const fn current_seat(&self) -> Option<Seat> {
        self.state.seat()
    }

    /// Returns the die for the current round.
    pub const fn die(&self) -> Option<DieSize> {
        self.die
    }

    /// Returns the score for the specified seat.
    pub const fn score(&self, seat: Seat) -> u32 {
        match seat {
            Seat::Human => self.human_score,
            Seat::Computer => self.computer_score,
        }
    }

    /// Returns the points accumulated in the turn in progress.
    pub const fn turn_total(&self) -> u32 {
        self.turn_total
    }

    /// Returns the result of the finished round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not over.
    pub const fn result(&self) -> Result<RoundResult, RoundError> {
        match self.state {
            GameState::RoundOver => Ok(RoundResult::from_scores(
                self.human_score,
                self.computer_score,
            )),
            _ => Err(RoundError::InProgress),
        }
    }

    /// Banks `points` for `seat` and passes the turn or ends the round.
    fn finish_turn(&mut self, seat: Seat, points: u32) {
        let score = match seat {
            Seat::Human => &mut self.human_score,
            Seat::Computer => &mut self.computer_score,
        };
        *score = score.saturating_add(points);
        self.turn_total = 0;

        let target = self.options.target_score;
        if self.human_score >= target || self.computer_score >= target {
            self.state = GameState::RoundOver;
            info!(
                "round over: human {} computer {}",
                self.human_score, self.computer_score
            );
        } else {
            self.state = seat.other().turn_state();
        }
    }
}
