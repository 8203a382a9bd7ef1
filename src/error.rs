use std::io;

use thiserror::Error;

/// Everything that can go wrong while loading, saving, or starting up.
#[derive(Error, Debug)]
pub enum Error {
    /// A number that isn't on the Cricket board turned up where a target was expected.
    #[error("{0} isn't a Cricket number")]
    NotATarget(u32),
    /// A saved game decoded fine but breaks the game's rules.
    #[error("saved game is inconsistent: {0}")]
    InvalidState(&'static str),
    #[error("couldn't encode or decode the saved game")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
