//! Terminal front end: validated prompts and the interactive game loop.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use log::debug;

use crate::die::{DieSize, Roll};
use crate::error::{ConsoleError, PlayError, TurnError};
use crate::game::{Game, GameState, Seat};
use crate::strategy::TurnControl;

/// Parses a yes/no answer.
///
/// Case-insensitive; anything starting with `y` is yes and anything
/// starting with `n` is no.
///
/// # Example
///
/// ```
/// use pigrs::console::parse_yes_no;
///
/// assert_eq!(parse_yes_no("Yes"), Some(true));
/// assert_eq!(parse_yes_no("n"), Some(false));
/// assert_eq!(parse_yes_no("maybe"), None);
/// ```
#[must_use]
pub fn parse_yes_no(token: &str) -> Option<bool> {
    let token = token.to_lowercase();
    if token.starts_with('y') {
        Some(true)
    } else if token.starts_with('n') {
        Some(false)
    } else {
        None
    }
}

/// Parses a die size, accepting only integers in `[4, 100]`.
#[must_use]
pub fn parse_die_size(token: &str) -> Option<DieSize> {
    token
        .parse::<u32>()
        .ok()
        .and_then(|sides| DieSize::new(sides).ok())
}

/// Whitespace-delimited tokens read from a line-oriented source.
///
/// A blank line yields one empty token so that prompts repeat on it.
#[derive(Debug)]
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    /// Wraps a reader.
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Closed`] at end of input.
    pub fn next_token(&mut self) -> Result<String, ConsoleError> {
        if let Some(token) = self.pending.pop_front() {
            return Ok(token);
        }

        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Err(ConsoleError::Closed);
        }

        // Bytes that are not UTF-8 become U+FFFD and fail validation.
        self.pending.extend(
            String::from_utf8_lossy(&line)
                .split_whitespace()
                .map(str::to_owned),
        );
        Ok(self.pending.pop_front().unwrap_or_default())
    }
}

fn prompt<W: Write>(out: &mut W, text: &str) -> Result<(), ConsoleError> {
    write!(out, "\r{text}\t")?;
    out.flush()?;
    Ok(())
}

fn ask_yes_no<R: BufRead, W: Write>(
    input: &mut Tokens<R>,
    out: &mut W,
    question: &str,
) -> Result<bool, ConsoleError> {
    loop {
        prompt(out, &format!("{question} (y/n)"))?;
        if let Some(answer) = parse_yes_no(&input.next_token()?) {
            return Ok(answer);
        }
    }
}

fn report_roll<W: Write>(out: &mut W, roll: &Roll) -> Result<(), ConsoleError> {
    writeln!(out, "Roll: {}\tGain: {}", roll.value, roll.gain)?;
    Ok(())
}

/// The human seat: rolls are printed and every decision is asked for.
struct HumanControl<'a, R, W> {
    input: &'a mut Tokens<R>,
    out: &'a mut W,
}

impl<R: BufRead, W: Write> TurnControl for HumanControl<'_, R, W> {
    fn on_roll(&mut self, roll: &Roll) -> Result<(), ConsoleError> {
        report_roll(&mut *self.out, roll)
    }

    fn roll_again(&mut self) -> Result<bool, ConsoleError> {
        ask_yes_no(&mut *self.input, &mut *self.out, "Roll again?")
    }
}

/// Prints another seat's rolls while it decides on its own.
struct Narrated<'a, W, C: ?Sized> {
    out: &'a mut W,
    inner: &'a mut C,
}

impl<W: Write, C: TurnControl + ?Sized> TurnControl for Narrated<'_, W, C> {
    fn on_roll(&mut self, roll: &Roll) -> Result<(), ConsoleError> {
        self.inner.on_roll(roll)?;
        report_roll(&mut *self.out, roll)
    }

    fn roll_again(&mut self) -> Result<bool, ConsoleError> {
        self.inner.roll_again()
    }
}

/// An interactive Pig session on a pair of streams.
#[derive(Debug)]
pub struct Console<R, W> {
    input: Tokens<R>,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading answers from `input` and writing to `out`.
    pub const fn new(input: R, out: W) -> Self {
        Self {
            input: Tokens::new(input),
            out,
        }
    }

    /// Consumes the console, returning the output stream.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Asks a yes/no question until a valid answer is given.
    ///
    /// # Errors
    ///
    /// Returns an error if input is closed or the console fails.
    pub fn ask_yes_no(&mut self, question: &str) -> Result<bool, ConsoleError> {
        ask_yes_no(&mut self.input, &mut self.out, question)
    }

    /// Asks for a die size until one in `[4, 100]` is given.
    ///
    /// # Errors
    ///
    /// Returns an error if input is closed or the console fails.
    pub fn ask_die_size(&mut self) -> Result<DieSize, ConsoleError> {
        loop {
            prompt(&mut self.out, "Size of die? [4, 100]")?;
            let token = self.input.next_token()?;
            if let Some(die) = parse_die_size(&token) {
                return Ok(die);
            }
            debug!("rejected die size {token:?}");
        }
    }

    /// Runs rounds until the player declines to play again.
    ///
    /// `computer` decides for the computer seat.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails or the game reaches a state it
    /// should never be in.
    pub fn run<C>(&mut self, game: &mut Game, computer: &mut C) -> Result<(), PlayError>
    where
        C: TurnControl + ?Sized,
    {
        writeln!(self.out, "Game of Pig - Singleplayer")?;

        loop {
            let die = self.ask_die_size()?;
            game.start_round(die);
            self.play_round(game, computer)?;

            if !self.ask_yes_no("Play again?")? {
                return Ok(());
            }
        }
    }

    /// Plays turns until the round is over, then prints the final score.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails or no round is in progress.
    pub fn play_round<C>(&mut self, game: &mut Game, computer: &mut C) -> Result<(), PlayError>
    where
        C: TurnControl + ?Sized,
    {
        loop {
            let summary = match game.state() {
                GameState::HumanTurn => {
                    writeln!(self.out, "# Player's turn:")?;
                    let mut control = HumanControl {
                        input: &mut self.input,
                        out: &mut self.out,
                    };
                    game.play_turn(&mut control)?
                }
                GameState::ComputerTurn => {
                    writeln!(self.out, "# CPU's turn:")?;
                    let mut control = Narrated {
                        out: &mut self.out,
                        inner: &mut *computer,
                    };
                    game.play_turn(&mut control)?
                }
                GameState::RoundOver => break,
                GameState::RoundStart => return Err(TurnError::InvalidState.into()),
            };

            match summary.seat {
                Seat::Human => writeln!(self.out, "You scored: {}\n", summary.score)?,
                Seat::Computer => writeln!(self.out, "CPU scored: {}\n", summary.score)?,
            }
        }

        let result = game.result()?;
        writeln!(
            self.out,
            "Final score: {}\nCPU's Score: {}\n{}",
            result.human_score,
            result.computer_score,
            result.winner.message()
        )?;
        Ok(())
    }
}
