//! The Cricket scoring rules: turning a hit (or a take-back) into strikes, points, and undo history.

use log::debug;

use crate::{
    board::{Player, Target, CLOSED},
    state::{GameState, HistoryEntry},
};

/// Whether hits are being added to the board or taken back off it.
///
/// This is sticky: it stays the same for every hit until someone flips it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Add,
    Subtract,
}

impl Direction {
    pub const fn flipped(self) -> Self {
        match self {
            Direction::Add => Direction::Subtract,
            Direction::Subtract => Direction::Add,
        }
    }

    /// How the toggle button labels itself.
    pub const fn label(self) -> &'static str {
        match self {
            Direction::Add => "Add +",
            Direction::Subtract => "Sub -",
        }
    }
}

/// Apply one hit on `target` for `player`, returning that player's strike count on `target` afterwards.
///
/// Adding works up to three strikes, then scores the target's value for as long as the opponent still has it open.
/// Once both players have closed a number, further hits do nothing at all.
///
/// Subtracting reverses the newest history entry for `target` that can still be reversed. Points entries are skipped
/// when the player no longer has enough points to take them back, in which case older entries get a chance instead.
/// If nothing can be reversed, nothing changes.
pub fn apply_action(state: &mut GameState, player: Player, target: Target, direction: Direction) -> u8 {
    match direction {
        Direction::Add => add(state, player, target),
        Direction::Subtract => subtract(state, player, target),
    }
    state.strikes(player, target)
}

fn add(state: &mut GameState, player: Player, target: Target) {
    let (p, o, t) = (player.index(), player.other().index(), target.index());
    let entry = if state.strikes[p][t] < CLOSED {
        state.strikes[p][t] += 1;
        HistoryEntry::Strike { number: target, count: state.strikes[p][t] }
    } else if state.strikes[o][t] < CLOSED {
        let Some(total) = state.points[p].checked_add(target.value()) else {
            debug!("{:?} hit {} but the score can't go any higher", player, target);
            return;
        };
        state.points[p] = total;
        HistoryEntry::Points { number: target, total }
    } else {
        debug!("{:?} hit {} but it's closed on both sides", player, target);
        return;
    };
    debug!("{:?} recorded {:?}", player, entry);
    state.history[p].push(entry);
    state.dirty = true;
}

fn subtract(state: &mut GameState, player: Player, target: Target) {
    let (p, t) = (player.index(), target.index());
    for idx in (0..state.history[p].len()).rev() {
        let entry = state.history[p][idx];
        if entry.number() != target {
            continue;
        }
        match entry {
            HistoryEntry::Strike { .. } => {
                state.strikes[p][t] = state.strikes[p][t].saturating_sub(1);
            }
            HistoryEntry::Points { .. } if state.points[p] >= target.value() => {
                state.points[p] -= target.value();
            }
            // not enough points left to take this one back; maybe an older one will do
            HistoryEntry::Points { .. } => continue,
        }
        debug!("{:?} took back {:?}", player, entry);
        state.history[p].remove(idx);
        state.dirty = true;
        return;
    }
    debug!("{:?} had nothing on {} to take back", player, target);
}
