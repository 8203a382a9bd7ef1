//! Contains the places a game can be saved to.
//!
//! Every backend is a [`Store`]: a tiny key-value interface, so the game record can go anywhere that can hold a string
//! under a name. The game itself only ever uses one key, [`STORAGE_KEY`].
//!
//! The (de)serialization lives here rather than in the backends, so every backend stores exactly the same JSON.

pub mod fs;
pub mod memory;

use std::fmt;

use log::{info, warn};

use crate::{Error, GameState, Result};

/// The key the game record is saved under.
pub const STORAGE_KEY: &str = "darts-score-tracker";

/// A durable key-value store, holding strings.
pub trait Store {
    /// Type of the errors returned if something goes wrong. Must implement `Debug` for detailed (log/dev) information
    /// and `Display` for user-facing explanations.
    type Error: fmt::Debug + fmt::Display;

    /// Read the value under `key`, or `None` if nothing was ever stored there.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Store `value` under `key`, replacing anything already there.
    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// Decode a saved game record and make sure it's playable.
pub fn decode(raw: &str) -> Result<GameState> {
    let state: GameState = serde_json::from_str(raw)?;
    state.validate()?;
    Ok(state)
}

/// Load the saved game, if there is one.
///
/// Missing, unreadable, and malformed saves all count as "no prior game" and produce [`GameState::default`]; none of
/// them are fatal.
pub fn load_state<S: Store>(store: &S) -> GameState {
    let raw = match store.get(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!("no saved game, starting fresh");
            return GameState::default();
        }
        Err(e) => {
            warn!("couldn't read saved game, starting fresh: {}", e);
            return GameState::default();
        }
    };
    match decode(&raw) {
        Ok(state) => {
            info!("restored saved game between {} and {}", state.players[0], state.players[1]);
            state
        }
        Err(e) => {
            warn!("saved game is malformed, starting fresh: {}", e);
            GameState::default()
        }
    }
}

/// Write the game record, unconditionally. The record is written with the dirty flag cleared.
pub fn save_state<S: Store>(store: &mut S, state: &GameState) -> Result<(), SaveError<S::Error>> {
    let raw = if state.dirty {
        serde_json::to_string(&GameState { dirty: false, ..state.clone() })
    } else {
        serde_json::to_string(state)
    };
    let raw = raw.map_err(|e| SaveError::Encode(Error::Json(e)))?;
    store.set(STORAGE_KEY, &raw).map_err(SaveError::Store)
}

/// Why a save didn't happen.
#[derive(Debug)]
pub enum SaveError<E> {
    /// The game record couldn't be turned into JSON
    Encode(Error),
    /// The store rejected the write
    Store(E),
}

impl<E: fmt::Display> fmt::Display for SaveError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Encode(e) => write!(f, "encoding: {}", e),
            SaveError::Store(e) => write!(f, "storing: {}", e),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for SaveError<E> {}
