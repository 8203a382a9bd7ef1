//! Drawing the scoreboard.
//!
//! The board is built as lines of [`Span`]s first, then written out either plainly or (with `sys_cli`) in color.
//! Keeping the layout separate from the terminal makes it testable without one.

use std::io::{self, Write};

use crate::{
    board::{Marks, Player, Target},
    scoring::Direction,
    GameState,
};

/// Width of each player's column.
const SIDE_WIDTH: usize = 12;
/// Width of the center column, holding the numbers.
const MID_WIDTH: usize = 7;

/// What a piece of the board is, which decides how it's colored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    Plain,
    Title,
    Name,
    Number,
    Marks(Marks),
    Score,
}

/// One piece of text on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    fn new(text: impl Into<String>, style: Style) -> Self {
        Self { text: text.into(), style }
    }
}

pub type Line = Vec<Span>;

fn centered(text: &str, width: usize) -> String {
    format!("{:^width$}", text, width = width)
}

/// Lay out the whole board: a status line, the names, one row per target, and the scores.
pub fn board(state: &GameState, direction: Direction) -> Vec<Line> {
    let mut lines = vec![];
    lines.push(vec![
        Span::new(format!("{} ", state.game_type), Style::Title),
        Span::new(format!("[{}]", direction.label()), Style::Plain),
    ]);
    lines.push(vec![
        Span::new(centered(state.name(Player::Left), SIDE_WIDTH), Style::Name),
        Span::new(centered("", MID_WIDTH), Style::Plain),
        Span::new(centered(state.name(Player::Right), SIDE_WIDTH), Style::Name),
    ]);
    for target in Target::ALL {
        let marks = |player| Marks::from_strikes(state.strikes(player, target));
        let left = marks(Player::Left);
        let right = marks(Player::Right);
        lines.push(vec![
            Span::new(centered(left.glyph(), SIDE_WIDTH), Style::Marks(left)),
            Span::new(centered(&target.to_string(), MID_WIDTH), Style::Number),
            Span::new(centered(right.glyph(), SIDE_WIDTH), Style::Marks(right)),
        ]);
    }
    lines.push(vec![
        Span::new(centered(&state.points(Player::Left).to_string(), SIDE_WIDTH), Style::Score),
        Span::new(centered("score", MID_WIDTH), Style::Plain),
        Span::new(centered(&state.points(Player::Right).to_string(), SIDE_WIDTH), Style::Score),
    ]);
    lines
}

/// Write lines without any styling.
pub fn write_plain(out: &mut impl Write, lines: &[Line]) -> io::Result<()> {
    for line in lines {
        for span in line {
            out.write_all(span.text.as_bytes())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write lines with colors picked by [`Style`].
#[cfg(feature = "sys_cli")]
pub fn write_styled(out: &mut impl Write, lines: &[Line]) -> io::Result<()> {
    use crossterm::{
        queue,
        style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    };

    for line in lines {
        for span in line {
            let (color, bold) = match span.style {
                Style::Plain => (Color::Reset, false),
                Style::Title => (Color::Cyan, true),
                Style::Name => (Color::White, true),
                Style::Number => (Color::Yellow, true),
                Style::Marks(Marks::Open) => (Color::DarkGrey, false),
                Style::Marks(Marks::One) => (Color::Blue, false),
                Style::Marks(Marks::Two) => (Color::Magenta, false),
                Style::Marks(Marks::Closed) => (Color::Red, true),
                Style::Score => (Color::Green, true),
            };
            queue!(out, SetForegroundColor(color))?;
            if bold {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            queue!(out, Print(&span.text), SetAttribute(Attribute::Reset), ResetColor)?;
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

#[cfg(test)]
mod render_test {
    use super::*;

    fn text(line: &Line) -> String {
        line.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn layout_has_every_row() {
        let lines = board(&GameState::default(), Direction::Add);
        // status, names, seven targets, score
        assert_eq!(lines.len(), 10);
        assert!(text(&lines[0]).contains("Cricket"));
        assert!(text(&lines[0]).contains("Add +"));
        assert!(text(&lines[1]).contains("Player 1"));
        assert!(text(&lines[1]).contains("Player 2"));
        assert!(text(&lines[2]).contains("20"));
        assert!(text(&lines[8]).contains("25"));
        assert!(text(&lines[9]).contains("score"));
    }

    #[test]
    fn marks_follow_strikes() {
        let mut gs = GameState::default();
        gs.strikes[0][Target::Nineteen.index()] = 1;
        gs.strikes[1][Target::Nineteen.index()] = 3;
        gs.strikes[0][Target::Bull.index()] = 2;
        let lines = board(&gs, Direction::Subtract);
        assert_eq!(lines[3][0].style, Style::Marks(Marks::One));
        assert_eq!(lines[3][2].style, Style::Marks(Marks::Closed));
        assert_eq!(lines[8][0].style, Style::Marks(Marks::Two));
        assert_eq!(lines[8][2].style, Style::Marks(Marks::Open));
        assert!(text(&lines[3]).contains("(X)"));
        assert!(text(&lines[0]).contains("Sub -"));
    }

    #[test]
    fn scores_shown() {
        let mut gs = GameState::default();
        gs.points = [57, 120];
        let lines = board(&gs, Direction::Add);
        let score = text(&lines[9]);
        assert!(score.contains("57"));
        assert!(score.contains("120"));
    }

    #[test]
    fn plain_output_is_line_per_row() {
        let lines = board(&GameState::default(), Direction::Add);
        let mut out = vec![];
        write_plain(&mut out, &lines).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().count(), lines.len());
        assert!(!out.contains('\x1b'));
    }

    #[cfg(feature = "sys_cli")]
    #[test]
    fn styled_output_has_colors() {
        let lines = board(&GameState::default(), Direction::Add);
        let mut out = vec![];
        write_styled(&mut out, &lines).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains('\x1b'));
        assert!(out.contains("Player 1"));
    }
}
