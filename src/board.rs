//! The fixed layout of a Cricket board: which numbers count, which side of the board each player is on, and how many
//! marks a player has on a number.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Error;

/// How many strikes close a number.
pub const CLOSED: u8 = 3;

/// One of the seven numbers that count in Cricket.
///
/// The order of the variants is the order the board is drawn in, top to bottom, and also the order of the per-player
/// strike arrays in [`GameState`][crate::GameState].
///
/// Serialized as its face value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum Target {
    Twenty,
    Nineteen,
    Eighteen,
    Seventeen,
    Sixteen,
    Fifteen,
    Bull,
}

impl Target {
    /// All of the targets, in board order.
    pub const ALL: [Target; 7] = [
        Target::Twenty,
        Target::Nineteen,
        Target::Eighteen,
        Target::Seventeen,
        Target::Sixteen,
        Target::Fifteen,
        Target::Bull,
    ];

    /// Look up the target for a number on the dartboard, if that number counts in Cricket.
    pub fn from_value(value: u32) -> Option<Self> {
        match value {
            25 => Some(Target::Bull),
            // 20 - value puts 20 at the top and 15 at the bottom
            15..=20 => Some(Self::ALL[(20 - value) as usize]),
            _ => None,
        }
    }

    /// The face value of this target, which is also how many points one extra hit is worth.
    pub const fn value(self) -> u32 {
        match self {
            Target::Twenty => 20,
            Target::Nineteen => 19,
            Target::Eighteen => 18,
            Target::Seventeen => 17,
            Target::Sixteen => 16,
            Target::Fifteen => 15,
            Target::Bull => 25,
        }
    }

    /// Where this target lives in a player's strike array.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl From<Target> for u32 {
    fn from(target: Target) -> u32 {
        target.value()
    }
}

impl TryFrom<u32> for Target {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Error> {
        Self::from_value(value).ok_or(Error::NotATarget(value))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Which of the two players an action belongs to. The left player is always index 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Player {
    Left,
    Right,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::Left, Player::Right];

    /// The opponent.
    pub const fn other(self) -> Self {
        match self {
            Player::Left => Player::Right,
            Player::Right => Player::Left,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Player::Left => 0,
            Player::Right => 1,
        }
    }
}

/// The four ways a strike control can look.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Marks {
    Open,
    One,
    Two,
    Closed,
}

impl Marks {
    /// Convert a strike count into its display state. Anything at or past [`CLOSED`] is closed.
    pub const fn from_strikes(strikes: u8) -> Self {
        match strikes {
            0 => Marks::Open,
            1 => Marks::One,
            2 => Marks::Two,
            _ => Marks::Closed,
        }
    }

    /// The traditional chalkboard glyph: nothing, a slash, a cross, then a circled cross.
    pub const fn glyph(self) -> &'static str {
        match self {
            Marks::Open => "   ",
            Marks::One => " / ",
            Marks::Two => " X ",
            Marks::Closed => "(X)",
        }
    }
}
