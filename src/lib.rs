//! The dice game Pig, played in the terminal against a computer opponent.
//!
//! The crate provides a [`Game`] type that tracks a round between a human
//! and the computer, a [`ComputerStrategy`] that decides when the computer
//! holds, and a [`Console`] that drives rounds over a pair of text streams.
//!
//! # Example
//!
//! ```no_run
//! use pigrs::{ComputerStrategy, Console, Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let mut computer = ComputerStrategy::new(43);
//! let mut console = Console::new(std::io::stdin().lock(), std::io::stdout());
//! console.run(&mut game, &mut computer).unwrap();
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod console;
pub mod die;
pub mod error;
pub mod game;
pub mod options;
pub mod result;
pub mod strategy;

// Re-export main types
pub use console::Console;
pub use die::{DieSize, MAX_DIE_SIZE, MIN_DIE_SIZE, Roll, Roller, SeededRoller};
pub use error::{ConsoleError, DieError, PlayError, RoundError, TurnError};
pub use game::{Game, GameState, Seat, TurnSummary};
pub use options::GameOptions;
pub use result::{RoundResult, Winner};
pub use strategy::{
    CONTINUE_THRESHOLD, ComputerStrategy, GOLDEN_RATIO, TurnControl, continue_probability,
};
