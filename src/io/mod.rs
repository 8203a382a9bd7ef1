//! The terminal side of things: reading commands and drawing the board.

pub mod command;
pub mod render;

pub use command::{Command, ParseError, HELP};
