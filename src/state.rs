//! The game record itself, and how it looks on disk.

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::{
    board::{Player, Target, CLOSED},
    Error, Result,
};

/// The only game type there is, for now.
pub const CRICKET: &str = "Cricket";

/// One accepted add-action, with enough information to reverse it later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HistoryEntry {
    /// The hit added a strike; `count` is the player's strike count on `number` afterwards.
    Strike { number: Target, count: u8 },
    /// The hit scored points; `total` is the player's score afterwards.
    Points { number: Target, total: u32 },
}

impl HistoryEntry {
    /// Which number this entry was recorded against.
    pub fn number(&self) -> Target {
        match *self {
            HistoryEntry::Strike { number, .. } | HistoryEntry::Points { number, .. } => number,
        }
    }

    /// Parse the older `"<number>-<value>"` encoding.
    ///
    /// That format doesn't say what kind of entry it is, so a value of 3 or less is taken as a strike count and
    /// anything bigger as a score.
    pub fn parse_legacy(s: &str) -> Result<Self> {
        let (number, value) = s.split_once('-').ok_or(Error::InvalidState("history entry has no separator"))?;
        let number: u32 = number.trim().parse().map_err(|_| Error::InvalidState("history number isn't numeric"))?;
        let value: u32 = value.trim().parse().map_err(|_| Error::InvalidState("history value isn't numeric"))?;
        let number = Target::try_from(number)?;
        if value <= CLOSED as u32 {
            Ok(HistoryEntry::Strike { number, count: value as u8 })
        } else {
            Ok(HistoryEntry::Points { number, total: value })
        }
    }
}

/// The current state of a game: who's playing, where everyone's marks are, and what can be undone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Which game is being scored. Always [`CRICKET`] for now.
    pub game_type: String,
    /// Display names, left then right
    pub players: [String; 2],
    /// Strikes per player per [`Target`], indexed by [`Target::index`]
    pub strikes: [[u8; 7]; 2],
    pub points: [u32; 2],
    /// Per-player undo history, oldest first
    #[serde(deserialize_with = "history_compat")]
    pub history: [Vec<HistoryEntry>; 2],
    /// Whether anything has changed since the last successful save
    #[serde(rename = "updated", default)]
    pub dirty: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_players(CRICKET.into(), ["Player 1".into(), "Player 2".into()])
    }
}

impl GameState {
    /// A fresh, unsaved game between the named players.
    pub fn with_players(game_type: String, players: [String; 2]) -> Self {
        Self {
            game_type,
            players,
            strikes: [[0; 7]; 2],
            points: [0, 0],
            history: [vec![], vec![]],
            dirty: true,
        }
    }

    /// Start over: same game type and players, but a clean board.
    pub fn reset(&mut self) {
        let players = std::mem::take(&mut self.players);
        let game_type = std::mem::take(&mut self.game_type);
        *self = Self::with_players(game_type, players);
    }

    pub fn strikes(&self, player: Player, target: Target) -> u8 {
        self.strikes[player.index()][target.index()]
    }

    pub fn points(&self, player: Player) -> u32 {
        self.points[player.index()]
    }

    pub fn name(&self, player: Player) -> &str {
        &self.players[player.index()]
    }

    pub fn history(&self, player: Player) -> &[HistoryEntry] {
        &self.history[player.index()]
    }

    /// Check the things serde can't: strike counts stay in range and strike entries name a reachable count.
    pub fn validate(&self) -> Result<()> {
        if self.strikes.iter().flatten().any(|&s| s > CLOSED) {
            return Err(Error::InvalidState("more than three strikes on a number"));
        }
        let bad_entry = self.history.iter().flatten().any(|entry| match *entry {
            HistoryEntry::Strike { count, .. } => !(1..=CLOSED).contains(&count),
            HistoryEntry::Points { .. } => false,
        });
        if bad_entry {
            return Err(Error::InvalidState("history strike count out of range"));
        }
        Ok(())
    }
}

/// A stored history entry, in either encoding.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredEntry {
    Tagged(HistoryEntry),
    Legacy(String),
}

fn history_compat<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[Vec<HistoryEntry>; 2], D::Error> {
    let [left, right] = <[Vec<StoredEntry>; 2]>::deserialize(deserializer)?;
    let convert = |entries: Vec<StoredEntry>| {
        entries
            .into_iter()
            .map(|entry| match entry {
                StoredEntry::Tagged(e) => Ok(e),
                StoredEntry::Legacy(s) => HistoryEntry::parse_legacy(&s).map_err(<D::Error as de::Error>::custom),
            })
            .collect::<Result<Vec<_>, D::Error>>()
    };
    Ok([convert(left)?, convert(right)?])
}
