//! Pet state record and gameplay constants.
//!
//! Stats are gauges in `[0, 100]`. They drift downward with wall-clock time
//! (whole elapsed minutes only) and jump discretely when a care action is
//! applied. Every mutation clamps back into range and advances
//! `last_updated`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const STAT_MIN: f64 = 0.0;
pub const STAT_MAX: f64 = 100.0;

/// Default pet name used on first load and on reset.
pub const DEFAULT_NAME: &str = "Buddy";
/// Default value for every stat gauge on first load and on reset.
pub const DEFAULT_STAT: f64 = 50.0;

/// Per-stat change, either a decay rate (per minute) or an action effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatDelta {
    pub hunger: f64,
    pub happiness: f64,
    pub energy: f64,
}

/// Downward drift per whole elapsed minute.
pub const DECAY_PER_MIN: StatDelta = StatDelta {
    hunger: 0.5,
    happiness: 0.3,
    energy: 0.2,
};

/// The three paid care actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CareAction {
    Feed,
    Play,
    Rest,
}

impl CareAction {
    /// Coin cost, charged through the productivity engine's coin gate.
    pub fn cost(self) -> u64 {
        match self {
            CareAction::Feed => 10,
            CareAction::Play => 15,
            CareAction::Rest => 5,
        }
    }

    /// Fixed stat deltas applied after pending decay.
    pub fn effect(self) -> StatDelta {
        match self {
            CareAction::Feed => StatDelta {
                hunger: 20.0,
                happiness: 5.0,
                energy: -2.0,
            },
            CareAction::Play => StatDelta {
                hunger: -10.0,
                happiness: 15.0,
                energy: -15.0,
            },
            CareAction::Rest => StatDelta {
                hunger: -5.0,
                happiness: 5.0,
                energy: 25.0,
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CareAction::Feed => "feed",
            CareAction::Play => "play",
            CareAction::Rest => "rest",
        }
    }
}

/// The pet's persisted state record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetState {
    pub name: String,
    /// 0 = starving, 100 = full.
    pub hunger: f64,
    /// 0 = very sad, 100 = very happy.
    pub happiness: f64,
    /// 0 = exhausted, 100 = fully energized.
    pub energy: f64,
    /// Basis for time-based stat decay.
    pub last_updated: DateTime<Utc>,
}

fn clamp(value: f64) -> f64 {
    value.clamp(STAT_MIN, STAT_MAX)
}

impl PetState {
    /// Fresh pet with every gauge at the default midpoint.
    pub fn new(name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            hunger: DEFAULT_STAT,
            happiness: DEFAULT_STAT,
            energy: DEFAULT_STAT,
            last_updated: now,
        }
    }

    /// Apply pending time decay.
    ///
    /// Only whole elapsed minutes count; under one minute this is an identity
    /// no-op and returns `None` (callers use that to skip persistence). The
    /// fractional remainder is dropped -- effectively banked, because
    /// `last_updated` only advances when decay actually fires.
    pub fn decayed(&self, now: DateTime<Utc>) -> Option<PetState> {
        let elapsed_min = (now - self.last_updated).num_minutes();
        if elapsed_min < 1 {
            return None;
        }
        let m = elapsed_min as f64;
        Some(PetState {
            name: self.name.clone(),
            hunger: clamp(self.hunger - DECAY_PER_MIN.hunger * m),
            happiness: clamp(self.happiness - DECAY_PER_MIN.happiness * m),
            energy: clamp(self.energy - DECAY_PER_MIN.energy * m),
            last_updated: now,
        })
    }

    /// Apply a delta to every gauge, clamping into `[0, 100]`.
    pub fn apply(&mut self, delta: StatDelta, now: DateTime<Utc>) {
        self.hunger = clamp(self.hunger + delta.hunger);
        self.happiness = clamp(self.happiness + delta.happiness);
        self.energy = clamp(self.energy + delta.energy);
        self.last_updated = now;
    }

    /// Force the record back into its invariants after an untrusted load.
    pub fn sanitized(mut self) -> Self {
        self.hunger = clamp(self.hunger);
        self.happiness = clamp(self.happiness);
        self.energy = clamp(self.energy);
        self
    }

    /// True when every gauge is inside `[0, 100]`.
    pub fn in_bounds(&self) -> bool {
        [self.hunger, self.happiness, self.energy]
            .iter()
            .all(|v| (STAT_MIN..=STAT_MAX).contains(v))
    }
}
