//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for a die to start the round.
    RoundStart,
    /// The human player is rolling.
    HumanTurn,
    /// The computer is rolling.
    ComputerTurn,
    /// A player reached the target score.
    RoundOver,
}

impl GameState {
    /// Returns the seat whose turn it is, if any.
    #[must_use]
    pub const fn seat(self) -> Option<Seat> {
        match self {
            Self::HumanTurn => Some(Seat::Human),
            Self::ComputerTurn => Some(Seat::Computer),
            Self::RoundStart | Self::RoundOver => None,
        }
    }
}

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The human at the terminal.
    Human,
    /// The computer opponent.
    Computer,
}

impl Seat {
    /// Returns the other seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Human => Self::Computer,
            Self::Computer => Self::Human,
        }
    }

    /// Returns the state in which this seat rolls.
    #[must_use]
    pub const fn turn_state(self) -> GameState {
        match self {
            Self::Human => GameState::HumanTurn,
            Self::Computer => GameState::ComputerTurn,
        }
    }
}
