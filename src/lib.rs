//! A scorekeeper for darts Cricket.
//!
//! The pieces, from the bottom up:
//!
//! - [`board`], the fixed numbers and sides of a Cricket board
//! - [`state`], the game record ([`GameState`]) and its saved form
//! - [`scoring`], the rules, as one function over a `GameState`
//! - [`saves`], the key-value [`Store`][saves::Store]s a game is saved into, and [`timing`], which limits how often
//! - [`Tracker`], which owns a game and ties all of the above together
//! - [`io`], the terminal front end: commands in, board out

pub mod board;
pub mod config;
mod error;
pub mod io;
pub mod saves;
pub mod scoring;
pub mod state;
pub mod timing;
mod tracker;

pub use board::{Marks, Player, Target};
pub use config::Config;
pub use error::{Error, Result};
pub use scoring::{apply_action, Direction};
pub use state::{GameState, HistoryEntry};
pub use tracker::Tracker;
