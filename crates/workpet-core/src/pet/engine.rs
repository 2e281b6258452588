//! Pet engine implementation.
//!
//! The pet engine is a wall-clock-based state machine. It does not use
//! internal threads - the caller is responsible for calling `tick()`
//! periodically (every 60 seconds by default) so stats keep drifting while
//! the app is idle.
//!
//! Care actions are paid for through a [`CoinGate`]: a rejected spend makes
//! the whole action a no-op -- no decay, no state change, nothing to
//! persist. Within one successful action, pending decay is always applied
//! before the action's deltas, on the freshest in-memory record.
//!
//! The engine does not police whether an action makes sense for the current
//! gauges (feeding at hunger >= 95, playing below 10 energy, resting at
//! energy >= 95); those are advisory gates for the presentation layer. Only
//! the coin gate is enforced here.

use chrono::Utc;

use super::state::{CareAction, PetState, DEFAULT_NAME};
use crate::events::Event;
use crate::productivity::CoinGate;

/// Core pet engine.
///
/// Owns the pet record and is its sole mutator. Query accessors return
/// snapshots; callers must not assume returned state stays current.
#[derive(Debug, Clone)]
pub struct PetEngine {
    state: PetState,
}

impl PetEngine {
    /// Create a fresh pet with default gauges.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            state: PetState::new(name, Utc::now()),
        }
    }

    /// Resume from a previously persisted record.
    pub fn from_state(state: PetState) -> Self {
        Self { state }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &PetState {
        &self.state
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Apply a paid care action.
    ///
    /// Charges the action's cost through `gate` first; if the spend is
    /// rejected the action is a complete no-op and `None` is returned.
    /// Otherwise decay is applied, then the action's deltas, clamped.
    pub fn care(&mut self, action: CareAction, gate: &mut dyn CoinGate) -> Option<Event> {
        let cost = action.cost();
        if !gate.spend_coins(cost) {
            return None;
        }
        let now = Utc::now();
        if let Some(decayed) = self.state.decayed(now) {
            self.state = decayed;
        }
        self.state.apply(action.effect(), now);
        Some(Event::CareApplied {
            action,
            cost,
            hunger: self.state.hunger,
            happiness: self.state.happiness,
            energy: self.state.energy,
            at: now,
        })
    }

    pub fn feed(&mut self, gate: &mut dyn CoinGate) -> Option<Event> {
        self.care(CareAction::Feed, gate)
    }

    pub fn play(&mut self, gate: &mut dyn CoinGate) -> Option<Event> {
        self.care(CareAction::Play, gate)
    }

    pub fn rest(&mut self, gate: &mut dyn CoinGate) -> Option<Event> {
        self.care(CareAction::Rest, gate)
    }

    /// Overwrite the pet with its default state. No coin cost.
    pub fn reset(&mut self, name: &str) -> Event {
        let now = Utc::now();
        self.state = PetState::new(name, now);
        Event::PetReset {
            name: name.to_string(),
            at: now,
        }
    }

    /// Call periodically. Applies pending decay; returns `None` when less
    /// than a whole minute has accrued, so the caller can skip persistence.
    pub fn tick(&mut self) -> Option<Event> {
        let now = Utc::now();
        let elapsed_min = (now - self.state.last_updated).num_minutes();
        let decayed = self.state.decayed(now)?;
        self.state = decayed;
        Some(Event::PetDecayed {
            elapsed_min,
            hunger: self.state.hunger,
            happiness: self.state.happiness,
            energy: self.state.energy,
            at: now,
        })
    }
}

impl Default for PetEngine {
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    /// Coin gate stub with a fixed balance.
    struct Wallet {
        coins: u64,
    }

    impl CoinGate for Wallet {
        fn spend_coins(&mut self, amount: u64) -> bool {
            if self.coins >= amount {
                self.coins -= amount;
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn feed_applies_effect_and_charges() {
        let mut engine = PetEngine::default();
        let mut wallet = Wallet { coins: 50 };

        let event = engine.feed(&mut wallet);
        assert!(event.is_some());
        assert_eq!(wallet.coins, 40);
        assert_eq!(engine.state().hunger, 70.0);
        assert_eq!(engine.state().happiness, 55.0);
        assert_eq!(engine.state().energy, 48.0);
    }

    #[test]
    fn rejected_spend_is_a_complete_noop() {
        // Backdate so decay would fire if the action went through.
        let mut state = PetState::new(DEFAULT_NAME, Utc::now() - Duration::minutes(10));
        state.hunger = 42.0;
        let mut engine = PetEngine::from_state(state.clone());

        let mut wallet = Wallet { coins: 5 };
        assert!(engine.feed(&mut wallet).is_none());
        assert_eq!(wallet.coins, 5);
        assert_eq!(*engine.state(), state);
    }

    #[test]
    fn decay_applies_before_action_deltas() {
        let now = Utc::now();
        let mut state = PetState::new(DEFAULT_NAME, now - Duration::minutes(3));
        state.hunger = 50.0;
        let mut engine = PetEngine::from_state(state);
        let mut wallet = Wallet { coins: 100 };

        engine.feed(&mut wallet);
        // 3 min decay (3 * 0.5 = 1.5) lands before the +20 feed delta.
        assert_eq!(engine.state().hunger, 50.0 - 1.5 + 20.0);
    }

    #[test]
    fn reset_restores_defaults_without_charge() {
        let mut engine = PetEngine::default();
        let mut wallet = Wallet { coins: 100 };
        engine.play(&mut wallet);

        let event = engine.reset("Buddy");
        assert!(matches!(event, Event::PetReset { .. }));
        assert_eq!(wallet.coins, 85);
        assert_eq!(engine.state().hunger, 50.0);
        assert_eq!(engine.state().happiness, 50.0);
        assert_eq!(engine.state().energy, 50.0);
    }

    #[test]
    fn tick_is_noop_under_a_minute() {
        let mut engine = PetEngine::default();
        assert!(engine.tick().is_none());
    }

    #[test]
    fn tick_decays_after_whole_minutes() {
        let mut state = PetState::new(DEFAULT_NAME, Utc::now() - Duration::minutes(2));
        state.happiness = 80.0;
        let mut engine = PetEngine::from_state(state);

        let event = engine.tick().expect("two whole minutes accrued");
        match event {
            Event::PetDecayed { elapsed_min, .. } => assert_eq!(elapsed_min, 2),
            other => panic!("expected PetDecayed, got {other:?}"),
        }
        assert_eq!(engine.state().happiness, 80.0 - 0.6);
    }
}
