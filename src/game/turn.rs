use log::debug;

use crate::die::Roll;
use crate::error::{PlayError, TurnError};
use crate::strategy::TurnControl;

use super::{Game, Seat};

/// Outcome of a completed turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnSummary {
    /// Who rolled.
    pub seat: Seat,
    /// Points banked this turn (0 on a bust).
    pub points: u32,
    /// Whether the turn ended on a one.
    pub busted: bool,
    /// The seat's round score after banking.
    pub score: u32,
}

impl Game {
    fn active_turn(&self) -> Result<(Seat, u32), TurnError> {
        let seat = self.current_seat().ok_or(TurnError::InvalidState)?;
        let die = self.die.ok_or(TurnError::InvalidState)?;
        Ok((seat, die.sides()))
    }

    /// Rolls the die for the seat whose turn it is.
    ///
    /// A one zeroes the turn total and ends the turn; any other face is added
    /// to the turn total and the turn stays open.
    ///
    /// # Errors
    ///
    /// Returns an error if no turn is active.
    pub fn roll(&mut self) -> Result<Roll, TurnError> {
        let (seat, sides) = self.active_turn()?;

        let value = self.roller.roll(sides);
        if value > 1 {
            self.turn_total = self.turn_total.saturating_add(value);
        } else {
            self.turn_total = 0;
        }

        let roll = Roll {
            value,
            gain: self.turn_total,
        };
        debug!("{seat:?} rolled {value}, turn total {}", roll.gain);

        if roll.is_bust() {
            self.finish_turn(seat, 0);
        }

        Ok(roll)
    }

    /// Ends the turn, banking the turn total.
    ///
    /// Returns the points banked.
    ///
    /// # Errors
    ///
    /// Returns an error if no turn is active.
    pub fn hold(&mut self) -> Result<u32, TurnError> {
        let (seat, _) = self.active_turn()?;
        let points = self.turn_total;
        debug!("{seat:?} holds with {points}");
        self.finish_turn(seat, points);
        Ok(points)
    }

    /// Plays a whole turn for the seat whose turn it is.
    ///
    /// Rolls until a one comes up or `control` declines to roll again.
    /// `control` sees every roll and is never asked after a bust.
    ///
    /// # Errors
    ///
    /// Returns an error if no turn is active or `control` fails.
    pub fn play_turn<C>(&mut self, control: &mut C) -> Result<TurnSummary, PlayError>
    where
        C: TurnControl + ?Sized,
    {
        let (seat, _) = self.active_turn()?;

        let (points, busted) = loop {
            let roll = self.roll()?;
            control.on_roll(&roll)?;

            if roll.is_bust() {
                break (0, true);
            }
            if !control.roll_again()? {
                break (self.hold()?, false);
            }
        };

        Ok(TurnSummary {
            seat,
            points,
            busted,
            score: self.score(seat),
        })
    }
}
