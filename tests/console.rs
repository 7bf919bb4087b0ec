//! Console integration tests.

use std::collections::VecDeque;
use std::io::Cursor;

use pigrs::console::{parse_die_size, parse_yes_no};
use pigrs::{
    ConsoleError, Console, Game, GameOptions, PlayError, Roller, TurnControl, TurnError,
};

struct Loaded(VecDeque<u32>);

impl Roller for Loaded {
    fn roll(&mut self, sides: u32) -> u32 {
        let value = self.0.pop_front().expect("ran out of loaded rolls");
        assert!((1..=sides).contains(&value));
        value
    }
}

/// A computer that always holds after one roll.
struct Holds;

impl TurnControl for Holds {
    fn roll_again(&mut self) -> Result<bool, ConsoleError> {
        Ok(false)
    }
}

fn session(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    session_bytes(input.as_bytes())
}

fn session_bytes(input: &[u8]) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(Cursor::new(input.to_vec()), Vec::new())
}

fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(console.into_output()).unwrap()
}

fn loaded_game(options: GameOptions, rolls: &[u32]) -> Game {
    Game::with_roller(options, Loaded(rolls.iter().copied().collect()))
}

#[test]
fn yes_no_is_prefix_based_and_case_insensitive() {
    for accepted in ["y", "Y", "yes", "YES", "yeah"] {
        assert_eq!(parse_yes_no(accepted), Some(true), "{accepted}");
    }
    for accepted in ["n", "N", "no", "Nope"] {
        assert_eq!(parse_yes_no(accepted), Some(false), "{accepted}");
    }
    for rejected in ["maybe", "", "ok", "1"] {
        assert_eq!(parse_yes_no(rejected), None, "{rejected}");
    }
}

#[test]
fn die_size_accepts_only_four_to_hundred() {
    assert_eq!(parse_die_size("4").map(|d| d.sides()), Some(4));
    assert_eq!(parse_die_size("100").map(|d| d.sides()), Some(100));
    for rejected in ["3", "101", "0", "-6", "six", "", "6.5"] {
        assert!(parse_die_size(rejected).is_none(), "{rejected}");
    }
}

#[test]
fn die_prompt_repeats_until_valid() {
    let mut console = session("3\n101\nfoo\n-5\n\n 42 \n");
    let die = console.ask_die_size().unwrap();
    assert_eq!(die.sides(), 42);

    let out = output(console);
    assert_eq!(out.matches("\rSize of die? [4, 100]\t").count(), 6);
}

#[test]
fn yes_no_prompt_repeats_until_valid() {
    let mut console = session("maybe\n\nYes\n");
    assert!(console.ask_yes_no("Roll again?").unwrap());

    let out = output(console);
    assert_eq!(out, "\rRoll again? (y/n)\t".repeat(3));
}

#[test]
fn tokens_on_one_line_are_read_one_at_a_time() {
    let mut console = session("maybe no\n");
    assert!(!console.ask_yes_no("Play again?").unwrap());
    assert_eq!(output(console).matches("Play again?").count(), 2);
}

#[test]
fn non_utf8_input_is_reprompted() {
    let mut console = session_bytes(b"\xff\xfe\n6\n");
    assert_eq!(console.ask_die_size().unwrap().sides(), 6);
    assert_eq!(output(console).matches("Size of die?").count(), 2);

    let mut console = session_bytes(b"\xffyes\n\xc3\n n\n");
    assert!(!console.ask_yes_no("Play again?").unwrap());
    assert_eq!(output(console).matches("Play again? (y/n)").count(), 3);
}

#[test]
fn closed_input_is_reported() {
    let mut console = session("foo\n");
    assert!(matches!(
        console.ask_die_size(),
        Err(ConsoleError::Closed)
    ));

    let mut game = loaded_game(GameOptions::default(), &[]);
    let mut console = session("");
    let err = console.run(&mut game, &mut Holds).unwrap_err();
    assert!(matches!(err, PlayError::Console(ConsoleError::Closed)));
    assert!(!err.is_implausible());
}

#[test]
fn full_round_transcript() {
    let options = GameOptions::default().with_target_score(10);
    let mut game = loaded_game(options, &[5, 3, 4, 1, 6]);
    let mut console = session("abc\n3\n6\ny\nYes\nmaybe\n\nN\n");

    console.run(&mut game, &mut Holds).unwrap();

    let expected = concat!(
        "Game of Pig - Singleplayer\n",
        "\rSize of die? [4, 100]\t",
        "\rSize of die? [4, 100]\t",
        "\rSize of die? [4, 100]\t",
        "# CPU's turn:\n",
        "Roll: 5\tGain: 5\n",
        "CPU scored: 5\n\n",
        "# Player's turn:\n",
        "Roll: 3\tGain: 3\n",
        "\rRoll again? (y/n)\t",
        "Roll: 4\tGain: 7\n",
        "\rRoll again? (y/n)\t",
        "Roll: 1\tGain: 0\n",
        "You scored: 0\n\n",
        "# CPU's turn:\n",
        "Roll: 6\tGain: 6\n",
        "CPU scored: 11\n\n",
        "Final score: 0\n",
        "CPU's Score: 11\n",
        "The computer wins!\n",
        "\rPlay again? (y/n)\t",
        "\rPlay again? (y/n)\t",
        "\rPlay again? (y/n)\t",
    );
    assert_eq!(output(console), expected);
}

#[test]
fn play_again_resets_scores_and_asks_for_a_new_die() {
    let options = GameOptions::default().with_target_score(5);
    let mut game = loaded_game(options, &[6, 3, 4, 2]);
    let mut console = session("7\nyes\n4\ny\nn\nno\n");

    console.run(&mut game, &mut Holds).unwrap();
    assert_eq!(game.die().map(|d| d.sides()), Some(4));

    let out = output(console);
    assert_eq!(out.matches("Game of Pig - Singleplayer").count(), 1);
    assert_eq!(out.matches("Size of die?").count(), 2);
    assert!(out.contains("Final score: 0\nCPU's Score: 6\nThe computer wins!\n"));
    assert!(out.contains("CPU scored: 3\n"));
    assert!(out.contains("Roll: 2\tGain: 6\n"));
    assert!(out.contains("Final score: 6\nCPU's Score: 3\nYou win!\n"));
    assert_eq!(out.matches("Play again? (y/n)").count(), 2);
}

#[test]
fn playing_a_round_that_never_started_is_implausible() {
    let mut game = loaded_game(GameOptions::default(), &[]);
    let mut console = session("");

    let err = console.play_round(&mut game, &mut Holds).unwrap_err();
    assert!(matches!(err, PlayError::Turn(TurnError::InvalidState)));
    assert!(err.is_implausible());
}
