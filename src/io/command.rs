//! Turning typed lines into things to do.

use std::{fmt, str::FromStr};

use crate::board::Player;

pub const HELP: &str = "\
commands:
  l <n> / r <n>        hit <n> (15-20, 25 or bull) for the left / right player
  t                    toggle between adding and taking back hits
  new                  start a new game with the same players
  players <l> <r>      rename the players
  game                 list the games that can be scored
  help                 show this
  q                    save and quit";

/// Something the user asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// A hit on a number. Not checked here; numbers that aren't on the Cricket board are ignored by the tracker.
    Hit { player: Player, value: u32 },
    Toggle,
    NewGame,
    Players { left: String, right: String },
    Games,
    Help,
    Quit,
}

/// Why a line couldn't be understood.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError(String);

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (try `help`)", self.0)
    }
}

impl std::error::Error for ParseError {}

fn side(word: &str) -> Option<Player> {
    match word {
        "l" | "left" | "1" => Some(Player::Left),
        "r" | "right" | "2" => Some(Player::Right),
        _ => None,
    }
}

fn value(word: &str) -> Result<u32, ParseError> {
    match word {
        "b" | "bull" => Ok(25),
        other => other.parse().map_err(|_| ParseError(format!("{:?} isn't a number", other))),
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, ParseError> {
        let lower = line.trim().to_lowercase();
        let words: Vec<&str> = lower.split_whitespace().collect();
        let original: Vec<&str> = line.split_whitespace().collect();
        if let [s, n] = words.as_slice() {
            if let Some(player) = side(s) {
                return Ok(Command::Hit { player, value: value(n)? });
            }
        }
        match words.as_slice() {
            [] => Err(ParseError("nothing entered".into())),
            ["t" | "toggle" | "+" | "-"] => Ok(Command::Toggle),
            ["new"] => Ok(Command::NewGame),
            ["players", _, _] => Ok(Command::Players { left: original[1].into(), right: original[2].into() }),
            ["players", ..] => Err(ParseError("players takes exactly two names".into())),
            ["game" | "games"] => Ok(Command::Games),
            ["help" | "about" | "?"] => Ok(Command::Help),
            ["q" | "quit" | "exit"] => Ok(Command::Quit),
            [other, ..] => Err(ParseError(format!("unknown command {:?}", other))),
        }
    }
}
