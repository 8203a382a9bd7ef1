//! The scorekeeper itself: one game, the add/subtract toggle, and where the game gets saved.

use log::{debug, warn};

use crate::{
    board::{Marks, Player, Target},
    config::Config,
    saves::{load_state, SaveError, Store},
    scoring::{apply_action, Direction},
    state::CRICKET,
    timing::SaveGate,
    GameState,
};

/// Owns a game in progress and everything needed to keep it saved.
///
/// Every change goes through here, and every change is followed by a (gated) save. Save failures are logged and
/// otherwise ignored; the game keeps going and the next change tries again.
#[derive(Debug)]
pub struct Tracker<S: Store> {
    state: GameState,
    direction: Direction,
    gate: SaveGate,
    store: S,
}

impl<S: Store> Tracker<S> {
    /// Pick up the game saved in `store`, or start a fresh one if there isn't a usable save.
    ///
    /// Player names from `config` replace whatever was saved.
    pub fn open(store: S, config: &Config) -> Self {
        let mut state = load_state(&store);
        for (player, name) in Player::BOTH.into_iter().zip([&config.left, &config.right]) {
            if let Some(name) = name {
                if state.name(player) != name {
                    state.players[player.index()] = name.clone();
                    state.dirty = true;
                }
            }
        }
        Self::with_state(store, state, SaveGate::new(config.save_interval()))
    }

    /// Track an existing game.
    pub fn with_state(store: S, state: GameState, gate: SaveGate) -> Self {
        Self { state, direction: Direction::default(), gate, store }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Flip between adding and taking back hits, returning the new direction.
    pub fn toggle_direction(&mut self) -> Direction {
        self.direction = self.direction.flipped();
        debug!("now in {:?} mode", self.direction);
        self.direction
    }

    /// Record a hit on `value` for `player` in the current direction, then save if it's time.
    ///
    /// Returns how the player's control for that number should look now, or `None` (with nothing changed) if `value`
    /// isn't a Cricket number.
    pub fn record(&mut self, player: Player, value: u32) -> Option<Marks> {
        let Some(target) = Target::from_value(value) else {
            debug!("ignoring hit on {}", value);
            return None;
        };
        let strikes = apply_action(&mut self.state, player, target, self.direction);
        self.save();
        Some(Marks::from_strikes(strikes))
    }

    /// Clear the board for a new game between the same players, and go back to adding hits.
    pub fn new_game(&mut self) {
        self.state.reset();
        self.direction = Direction::Add;
        self.save();
    }

    /// Change both players' names.
    pub fn rename(&mut self, left: impl Into<String>, right: impl Into<String>) {
        self.state.players = [left.into(), right.into()];
        self.state.dirty = true;
        self.save();
    }

    /// The games that can be scored. Cricket is the only one.
    pub fn game_types(&self) -> &'static [&'static str] {
        &[CRICKET]
    }

    /// Save now if anything's changed, regardless of when the last save was.
    pub fn flush(&mut self) -> Result<bool, SaveError<S::Error>> {
        self.gate.flush(&mut self.state, &mut self.store)
    }

    /// Hand the game back, e.g. after the final flush.
    pub fn into_parts(self) -> (GameState, S) {
        (self.state, self.store)
    }

    fn save(&mut self) {
        if let Err(e) = self.gate.maybe_persist(&mut self.state, &mut self.store) {
            warn!("couldn't save game: {}", e);
        }
    }
}

#[cfg(test)]
mod tracker_test {
    use std::time::Duration;

    use mock_instant::MockClock;

    use super::*;
    use crate::saves::{memory::Memory, save_state, STORAGE_KEY};

    fn tracker() -> Tracker<Memory> {
        Tracker::open(Memory::default(), &Config::default())
    }

    #[test]
    fn opens_fresh_without_save() {
        let t = tracker();
        assert_eq!(t.state(), &GameState::default());
        assert_eq!(t.direction(), Direction::Add);
    }

    #[test]
    fn opens_saved_game() {
        let mut saved = GameState::default();
        saved.strikes[1][0] = 2;
        saved.points[1] = 19;
        let mut store = Memory::default();
        save_state(&mut store, &saved).unwrap();

        let t = Tracker::open(store, &Config::default());
        assert_eq!(t.state().strikes(Player::Right, Target::Twenty), 2);
        assert_eq!(t.state().points(Player::Right), 19);
        assert!(!t.state().dirty);
    }

    #[test]
    fn configured_names_win() {
        let store = Memory::default();
        let config = Config { right: Some("Bob".into()), ..Config::default() };
        let t = Tracker::open(store, &config);
        assert_eq!(t.state().name(Player::Left), "Player 1");
        assert_eq!(t.state().name(Player::Right), "Bob");
    }

    #[test]
    fn record_reports_marks() {
        let mut t = tracker();
        assert_eq!(t.record(Player::Left, 20), Some(Marks::One));
        assert_eq!(t.record(Player::Left, 20), Some(Marks::Two));
        assert_eq!(t.record(Player::Left, 20), Some(Marks::Closed));
        assert_eq!(t.record(Player::Left, 20), Some(Marks::Closed));
        assert_eq!(t.state().points(Player::Left), 20);
    }

    #[test]
    fn unknown_numbers_ignored() {
        let mut t = tracker();
        let before = t.state().clone();
        assert_eq!(t.record(Player::Right, 7), None);
        assert_eq!(t.record(Player::Right, 50), None);
        assert_eq!(t.state(), &before);
    }

    #[test]
    fn toggle_applies_to_following_hits() {
        let mut t = tracker();
        t.record(Player::Right, 25);
        t.record(Player::Right, 25);
        assert_eq!(t.toggle_direction(), Direction::Subtract);
        assert_eq!(t.record(Player::Right, 25), Some(Marks::One));
        assert_eq!(t.record(Player::Right, 25), Some(Marks::Open));
        assert_eq!(t.record(Player::Right, 25), Some(Marks::Open));
        assert!(t.state().history(Player::Right).is_empty());
    }

    #[test]
    fn new_game_resets_board_and_direction() {
        let mut t = tracker();
        t.rename("Ann", "Bob");
        t.record(Player::Left, 18);
        t.toggle_direction();
        t.new_game();
        assert_eq!(t.direction(), Direction::Add);
        assert_eq!(t.state().strikes, [[0; 7]; 2]);
        assert_eq!(t.state().name(Player::Left), "Ann");
        assert!(t.state().dirty);
    }

    #[test]
    fn saves_are_debounced() {
        let mut t = tracker();
        MockClock::advance(Duration::from_millis(2100));
        t.record(Player::Left, 17);
        assert_eq!(t.store().writes(), 1);
        t.record(Player::Left, 17);
        t.record(Player::Left, 17);
        assert_eq!(t.store().writes(), 1);
        assert!(t.state().dirty);

        MockClock::advance(Duration::from_millis(2100));
        t.record(Player::Left, 16);
        assert_eq!(t.store().writes(), 2);
        assert!(!t.state().dirty);
    }

    #[test]
    fn flush_saves_the_burst() {
        let mut t = tracker();
        t.record(Player::Right, 15);
        assert_eq!(t.store().writes(), 0);
        assert!(t.flush().unwrap());
        let (state, store) = t.into_parts();
        assert_eq!(store.writes(), 1);
        let saved = store.get(STORAGE_KEY).unwrap().unwrap();
        assert_eq!(crate::saves::decode(&saved).unwrap(), state);
    }

    #[test]
    fn only_cricket() {
        assert_eq!(tracker().game_types(), &["Cricket"]);
    }
}
