//! Ratelimiting saves.

use std::time::Duration;

#[cfg(test)]
use mock_instant::Instant;
#[cfg(not(test))]
use std::time::Instant;

use log::info;

use crate::{
    saves::{save_state, SaveError, Store},
    GameState,
};

/// The default minimum time between two saves.
pub const DEFAULT_SAVE_INTERVAL: Duration = Duration::from_millis(2000);

/// Decides when the game record actually gets written.
///
/// A save only happens when the record is dirty *and* more than the minimum interval has passed since the previous
/// save. The clock starts when the gate is created, so nothing is written in the first interval after startup.
///
/// This is a debounce, nothing more: whatever changed since the last write is lost if the process dies before the
/// next one.
#[derive(Debug)]
pub struct SaveGate {
    last: Instant,
    interval: Duration,
}

impl SaveGate {
    /// Create a new gate with the given minimum interval. The interval starts right now.
    pub fn new(interval: Duration) -> Self {
        Self { last: Instant::now(), interval }
    }

    /// Save `state` to `store` if it's dirty and the interval has passed.
    ///
    /// Returns whether a write happened. A failed write leaves `state` dirty and doesn't restart the interval, so the
    /// next call will try again.
    pub fn maybe_persist<S: Store>(
        &mut self,
        state: &mut GameState,
        store: &mut S,
    ) -> Result<bool, SaveError<S::Error>> {
        self.maybe_persist_at(state, store, Instant::now())
    }

    /// [`Self::maybe_persist`], but with an explicit current time.
    pub fn maybe_persist_at<S: Store>(
        &mut self,
        state: &mut GameState,
        store: &mut S,
        now: Instant,
    ) -> Result<bool, SaveError<S::Error>> {
        if !state.dirty {
            return Ok(false);
        }
        let elapsed = now.checked_duration_since(self.last).unwrap_or(Duration::ZERO);
        if elapsed <= self.interval {
            return Ok(false);
        }
        self.write(state, store, now)?;
        Ok(true)
    }

    /// Save `state` right away if it's dirty, ignoring the interval. Returns whether a write happened.
    pub fn flush<S: Store>(&mut self, state: &mut GameState, store: &mut S) -> Result<bool, SaveError<S::Error>> {
        if !state.dirty {
            return Ok(false);
        }
        self.write(state, store, Instant::now())?;
        Ok(true)
    }

    fn write<S: Store>(
        &mut self,
        state: &mut GameState,
        store: &mut S,
        now: Instant,
    ) -> Result<(), SaveError<S::Error>> {
        save_state(store, state)?;
        state.dirty = false;
        self.last = now;
        info!("saved game");
        Ok(())
    }
}

impl Default for SaveGate {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_INTERVAL)
    }
}

#[cfg(test)]
mod timing_test {
    use std::time::Duration;

    use mock_instant::MockClock;

    use super::*;
    use crate::saves::memory::Memory;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn defers_inside_first_interval() {
        let mut gate = SaveGate::default();
        let mut store = Memory::default();
        let mut gs = GameState::default();
        MockClock::advance(ms(1500));
        assert!(!gate.maybe_persist(&mut gs, &mut store).unwrap());
        assert!(gs.dirty);
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn exactly_the_interval_still_defers() {
        let mut gate = SaveGate::default();
        let mut store = Memory::default();
        let mut gs = GameState::default();
        MockClock::advance(ms(2000));
        assert!(!gate.maybe_persist(&mut gs, &mut store).unwrap());
        MockClock::advance(ms(1));
        assert!(gate.maybe_persist(&mut gs, &mut store).unwrap());
        assert!(!gs.dirty);
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn clean_state_never_writes() {
        let mut gate = SaveGate::default();
        let mut store = Memory::default();
        let mut gs = GameState { dirty: false, ..GameState::default() };
        MockClock::advance(ms(10_000));
        assert!(!gate.maybe_persist(&mut gs, &mut store).unwrap());
        assert!(!gate.flush(&mut gs, &mut store).unwrap());
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn repeat_calls_write_once() {
        let mut gate = SaveGate::default();
        let mut store = Memory::default();
        let mut gs = GameState::default();
        MockClock::advance(ms(2500));
        assert!(gate.maybe_persist(&mut gs, &mut store).unwrap());
        assert!(!gate.maybe_persist(&mut gs, &mut store).unwrap());
        MockClock::advance(ms(100));
        assert!(!gate.maybe_persist(&mut gs, &mut store).unwrap());
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn interval_restarts_after_each_save() {
        let mut gate = SaveGate::default();
        let mut store = Memory::default();
        let mut gs = GameState::default();
        MockClock::advance(ms(2500));
        assert!(gate.maybe_persist(&mut gs, &mut store).unwrap());

        gs.dirty = true;
        MockClock::advance(ms(1000));
        assert!(!gate.maybe_persist(&mut gs, &mut store).unwrap());
        MockClock::advance(ms(1001));
        assert!(gate.maybe_persist(&mut gs, &mut store).unwrap());
        assert_eq!(store.writes(), 2);
    }

    #[test]
    fn explicit_time_is_respected() {
        let mut gate = SaveGate::new(ms(500));
        let mut store = Memory::default();
        let mut gs = GameState::default();
        let start = Instant::now();
        assert!(!gate.maybe_persist_at(&mut gs, &mut store, start + ms(500)).unwrap());
        assert!(gate.maybe_persist_at(&mut gs, &mut store, start + ms(501)).unwrap());
    }

    #[test]
    fn failed_write_stays_dirty() {
        let mut gate = SaveGate::default();
        let mut store = Memory::default();
        store.set_read_only(true);
        let mut gs = GameState::default();
        MockClock::advance(ms(2500));
        assert!(gate.maybe_persist(&mut gs, &mut store).is_err());
        assert!(gs.dirty);

        // the interval wasn't restarted, so the retry can go straight through
        store.set_read_only(false);
        assert!(gate.maybe_persist(&mut gs, &mut store).unwrap());
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn flush_ignores_interval() {
        let mut gate = SaveGate::default();
        let mut store = Memory::default();
        let mut gs = GameState::default();
        assert!(gate.flush(&mut gs, &mut store).unwrap());
        assert!(!gs.dirty);
        assert_eq!(store.writes(), 1);
    }
}
